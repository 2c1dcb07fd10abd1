//! Temporal windowing of daily spatial fields.
//!
//! A single Z500 contour says little about persistence, which is what
//! distinguishes a blocking event from a passing ridge. The window method
//! stacks `window` consecutive daily grids side by side, row by row, to
//! form one wider training sample:
//!
//! ```text
//! day i      day i+1    day i+2            window (w = 3)
//! [a0 a1]    [b0 b1]    [c0 c1]     ->     [a0 a1 b0 b1 c0 c1]
//! [a2 a3]    [b2 b3]    [c2 c3]            [a2 a3 b2 b3 c2 c3]
//! ```
//!
//! Input fields have shape `(T, R, C)`; output windows have shape
//! `(T - w + 1, R, C * w)`, one window per valid starting day.
//!
//! # Example
//!
//! ```
//! use blocking_dataset::windowing::{window_fields, WindowConfig};
//! use ndarray::Array3;
//!
//! let fields = Array3::<f64>::zeros((10, 4, 6));
//! let windows = window_fields(fields.view(), &WindowConfig::new(7)).unwrap();
//! assert_eq!(windows.shape(), &[4, 4, 42]);
//! ```

use crate::error::{DatasetError, Result};
use crate::layout::YearLayout;
use ndarray::{s, Array3, ArrayView3, Axis};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What to do when a sequence is shorter than the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortSeriesPolicy {
    /// Fail with [`DatasetError::InvalidParameter`]
    #[default]
    Reject,

    /// Return zero windows
    Empty,
}

/// Configuration for the window method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Number of consecutive days stacked into one sample
    pub window: usize,

    /// Behavior when fewer than `window` days are available
    #[serde(default)]
    pub short_series: ShortSeriesPolicy,
}

impl WindowConfig {
    /// Create a configuration that rejects sequences shorter than `window`.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            short_series: ShortSeriesPolicy::Reject,
        }
    }

    /// Set the short-series policy.
    pub fn with_short_series(mut self, policy: ShortSeriesPolicy) -> Self {
        self.short_series = policy;
        self
    }

    /// Number of windows produced from `days` daily grids.
    #[inline]
    pub fn window_count(&self, days: usize) -> usize {
        (days + 1).saturating_sub(self.window)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(DatasetError::invalid("window must be > 0"));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    /// 7-day windows.
    fn default() -> Self {
        Self::new(7)
    }
}

/// Stack consecutive daily grids into multi-day windows.
///
/// Window `i`, row `j` is the concatenation of row `j` of grids
/// `i, i+1, ..., i+window-1`. A window of 1 returns a copy of the input.
///
/// # Errors
///
/// - [`DatasetError::InvalidParameter`] if `window == 0`
/// - [`DatasetError::InvalidParameter`] if `window > T` and the policy is
///   [`ShortSeriesPolicy::Reject`]
/// - [`DatasetError::InvalidParameter`] if `C * window` does not fit the
///   output shape
pub fn window_fields(fields: ArrayView3<'_, f64>, config: &WindowConfig) -> Result<Array3<f64>> {
    config.validate()?;

    let (days, rows, cols) = fields.dim();
    let window = config.window;

    if window > days && config.short_series == ShortSeriesPolicy::Reject {
        return Err(DatasetError::invalid(format!(
            "window ({}) is longer than the field sequence ({} days)",
            window, days
        )));
    }

    // Output row width must stay addressable even when no window is produced.
    let width = cols
        .checked_mul(window)
        .filter(|&w| rows.max(1).checked_mul(w).is_some_and(|n| n <= isize::MAX as usize))
        .ok_or_else(|| {
            DatasetError::invalid(format!(
                "window ({}) times row length ({}) overflows the output shape",
                window, cols
            ))
        })?;

    let n_windows = config.window_count(days);
    let windows = Array3::from_shape_fn((n_windows, rows, width), |(i, j, k)| {
        fields[[i + k / cols, j, k % cols]]
    });

    log::debug!(
        "windowed {} days of {}x{} grids into {} windows of {}x{}",
        days,
        rows,
        cols,
        n_windows,
        rows,
        width
    );

    Ok(windows)
}

/// Window each year of a multi-year field sequence independently.
///
/// No window straddles a year boundary, so the result holds
/// `num_years * (days_per_year - window + 1)` windows in year order and
/// pairs with [`crate::labeling::align_labels`] when the window is labeled
/// on its centre day.
///
/// With the `parallel` feature, years are windowed on the rayon pool.
///
/// # Errors
///
/// - [`DatasetError::ShapeMismatch`] if the field count is not
///   `num_years * days_per_year`
/// - anything [`window_fields`] rejects for a single year
pub fn window_fields_by_year(
    fields: ArrayView3<'_, f64>,
    config: &WindowConfig,
    layout: &YearLayout,
) -> Result<Array3<f64>> {
    layout.validate()?;
    layout.check_len("field sequence length", fields.len_of(Axis(0)))?;

    let days = layout.days_per_year;
    let years: Vec<ArrayView3<'_, f64>> = (0..layout.num_years)
        .map(|y| fields.slice_move(s![y * days..(y + 1) * days, .., ..]))
        .collect();

    #[cfg(feature = "parallel")]
    let per_year: Vec<Array3<f64>> = years
        .par_iter()
        .map(|year| window_fields(year.view(), config))
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let per_year: Vec<Array3<f64>> = years
        .iter()
        .map(|year| window_fields(year.view(), config))
        .collect::<Result<_>>()?;

    let views: Vec<ArrayView3<'_, f64>> = per_year.iter().map(|w| w.view()).collect();
    ndarray::concatenate(Axis(0), &views)
        .map_err(|e| DatasetError::invalid(format!("Failed to join yearly windows: {e}")))
}
