//! Year-period partitioning of a daily sequence.
//!
//! Reanalysis training sets are usually built from one season per year
//! (e.g. 92 summer days from ERA5), stored back to back. Windowing and
//! label alignment both operate per year so that no sample mixes the end
//! of one season with the start of the next.

use crate::error::{DatasetError, Result};
use serde::{Deserialize, Serialize};

/// Layout of a daily sequence as `num_years` contiguous, equal-length chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearLayout {
    /// Number of year-periods in the sequence
    pub num_years: usize,

    /// Days per year-period (e.g. 92 for June-August)
    pub days_per_year: usize,
}

impl YearLayout {
    /// Create a new layout.
    pub fn new(num_years: usize, days_per_year: usize) -> Self {
        Self {
            num_years,
            days_per_year,
        }
    }

    /// 40 ERA5 summers of 92 days each.
    pub fn era5_summer() -> Self {
        Self::new(40, 92)
    }

    /// Total number of days covered by the layout.
    #[inline]
    pub fn total_days(&self) -> usize {
        self.num_years * self.days_per_year
    }

    /// Validate that both dimensions are non-zero.
    pub fn validate(&self) -> Result<()> {
        if self.num_years == 0 {
            return Err(DatasetError::invalid("num_years must be > 0"));
        }
        if self.days_per_year == 0 {
            return Err(DatasetError::invalid("days_per_year must be > 0"));
        }
        Ok(())
    }

    /// Check that a sequence of `len` days matches this layout.
    pub fn check_len(&self, context: &'static str, len: usize) -> Result<()> {
        let expected = self.total_days();
        if len != expected {
            return Err(DatasetError::shape(context, expected, len));
        }
        Ok(())
    }
}

impl Default for YearLayout {
    fn default() -> Self {
        Self::era5_summer()
    }
}
