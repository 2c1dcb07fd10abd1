//! Label alignment for windowed samples.
//!
//! A window of `window` consecutive days is labeled by one of its days,
//! `day_of_label` (1-indexed). With `margin = window - day_of_label`, the
//! first and last `margin` labels of every year have no window to go with
//! them and are dropped. Each year is trimmed independently and the
//! results are concatenated in year order.
//!
//! ```text
//! year:    d0 d1 d2 d3 d4 d5 d6 d7 d8 d9      window = 7, day_of_label = 4
//! kept:             d3 d4 d5 d6               margin = 3
//! ```
//!
//! When `day_of_label` is the centre day of the window, the number of
//! labels kept per year equals the number of windows per year
//! (`days_per_year - window + 1`).

use crate::error::{DatasetError, Result};
use crate::layout::YearLayout;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Parameters for aligning daily labels to windowed samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Days per window
    pub window: usize,

    /// Day within the window whose label represents it (1-indexed)
    pub day_of_label: usize,

    /// Year partitioning of the label sequence
    pub layout: YearLayout,
}

impl AlignmentConfig {
    /// Create a new alignment configuration.
    pub fn new(window: usize, day_of_label: usize, layout: YearLayout) -> Self {
        Self {
            window,
            day_of_label,
            layout,
        }
    }

    /// 7-day windows labeled on their middle day, 40 summers of 92 days.
    ///
    /// 3680 daily labels become 3440 window labels.
    pub fn era5_summer() -> Self {
        Self::new(7, 4, YearLayout::era5_summer())
    }

    /// Labels dropped at each end of every year.
    ///
    /// Saturates at 0 when `day_of_label > window`; [`validate`](Self::validate)
    /// rejects that case.
    #[inline]
    pub fn margin(&self) -> usize {
        self.window.saturating_sub(self.day_of_label)
    }

    /// Labels kept per year.
    #[inline]
    pub fn labels_per_year(&self) -> usize {
        self.layout
            .days_per_year
            .saturating_sub(self.margin().saturating_mul(2))
    }

    /// Windows produced per year by per-year windowing.
    #[inline]
    pub fn windows_per_year(&self) -> usize {
        self.layout
            .days_per_year
            .saturating_add(1)
            .saturating_sub(self.window)
    }

    /// Total number of aligned labels.
    #[inline]
    pub fn aligned_len(&self) -> usize {
        self.layout.num_years.saturating_mul(self.labels_per_year())
    }

    /// True when the aligned labels pair one-to-one with per-year windows.
    pub fn is_window_aligned(&self) -> bool {
        self.labels_per_year() == self.windows_per_year()
    }

    /// Validate the parameter combination.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;

        if self.window == 0 {
            return Err(DatasetError::invalid("window must be > 0"));
        }
        if self.day_of_label == 0 {
            return Err(DatasetError::invalid(
                "day_of_label is 1-indexed and must be >= 1",
            ));
        }
        if self.day_of_label > self.window {
            return Err(DatasetError::invalid(format!(
                "day_of_label ({}) must not exceed window ({})",
                self.day_of_label, self.window
            )));
        }

        let margin = self.margin();
        if margin >= self.layout.days_per_year.div_ceil(2) {
            return Err(DatasetError::invalid(format!(
                "margin {} (window {} - day_of_label {}) leaves no labels in a {}-day year",
                margin, self.window, self.day_of_label, self.layout.days_per_year
            )));
        }

        Ok(())
    }
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self::era5_summer()
    }
}

/// Trim a daily label sequence so it lines up with windowed samples.
///
/// # Errors
///
/// - [`DatasetError::ShapeMismatch`] if `labels.len()` is not
///   `num_years * days_per_year`
/// - [`DatasetError::InvalidParameter`] if [`AlignmentConfig::validate`] fails
///
/// # Example
///
/// ```
/// use blocking_dataset::labeling::{align_labels, AlignmentConfig};
/// use blocking_dataset::YearLayout;
///
/// let labels: Vec<u8> = (0..20).map(|d| (d % 2) as u8).collect();
/// let config = AlignmentConfig::new(7, 4, YearLayout::new(2, 10));
///
/// let aligned = align_labels(&labels, &config).unwrap();
/// assert_eq!(aligned.to_vec(), vec![1, 0, 1, 0, 1, 0, 1, 0]);
/// ```
pub fn align_labels<T: Clone>(labels: &[T], config: &AlignmentConfig) -> Result<Array1<T>> {
    config.validate()?;
    config.layout.check_len("label sequence length", labels.len())?;

    let days = config.layout.days_per_year;
    let margin = config.margin();

    let aligned: Array1<T> = labels
        .chunks_exact(days)
        .flat_map(|year| year[margin..days - margin].iter().cloned())
        .collect();

    debug_assert_eq!(aligned.len(), config.aligned_len());
    log::debug!(
        "aligned {} labels to {} (margin {}, {} years)",
        labels.len(),
        aligned.len(),
        margin,
        config.layout.num_years
    );

    Ok(aligned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_two_years() {
        let labels: Vec<u32> = (0..20).collect();
        let config = AlignmentConfig::new(7, 4, YearLayout::new(2, 10));

        let aligned = align_labels(&labels, &config).unwrap();
        assert_eq!(aligned.to_vec(), vec![3, 4, 5, 6, 13, 14, 15, 16]);
    }

    #[test]
    fn test_era5_summer_counts() {
        let config = AlignmentConfig::era5_summer();
        assert_eq!(config.margin(), 3);
        assert_eq!(config.labels_per_year(), 86);
        assert_eq!(config.aligned_len(), 3440);
        assert!(config.is_window_aligned());
    }

    #[test]
    fn test_zero_margin_keeps_everything() {
        let labels = vec![1u8, 0, 1, 1, 0, 0];
        let config = AlignmentConfig::new(3, 3, YearLayout::new(2, 3));

        let aligned = align_labels(&labels, &config).unwrap();
        assert_eq!(aligned.to_vec(), labels);
        // Labeled on the last day: more labels than windows.
        assert!(!config.is_window_aligned());
    }

    #[test]
    fn test_rejects_day_of_label_past_window() {
        let config = AlignmentConfig::new(3, 5, YearLayout::new(1, 10));
        assert!(matches!(
            config.validate(),
            Err(DatasetError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_zero_day_of_label() {
        let config = AlignmentConfig::new(3, 0, YearLayout::new(1, 10));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_margin_consuming_year() {
        // margin 5, 2 * 5 >= 10
        let config = AlignmentConfig::new(6, 1, YearLayout::new(1, 10));
        assert!(matches!(
            align_labels(&[0u8; 10], &config),
            Err(DatasetError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_huge_window_without_overflow() {
        let config = AlignmentConfig::new(usize::MAX, 1, YearLayout::new(1, 10));
        assert!(matches!(
            align_labels(&[0u8; 10], &config),
            Err(DatasetError::InvalidParameter(_))
        ));
        assert_eq!(config.labels_per_year(), 0);
        assert_eq!(config.windows_per_year(), 0);
        assert!(config.is_window_aligned());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let config = AlignmentConfig::new(7, 4, YearLayout::new(2, 10));
        assert!(matches!(
            align_labels(&[0u8; 19], &config),
            Err(DatasetError::ShapeMismatch {
                expected: 20,
                actual: 19,
                ..
            })
        ));
    }
}
