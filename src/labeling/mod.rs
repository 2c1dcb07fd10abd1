//! Blocked-day labels and their preparation for training.
//!
//! Labels come from a ground-truth dataset (GTD): one binary value per
//! day, 1 for a blocked day and 0 otherwise. Before they can be paired
//! with model inputs they usually need one of two reshapes:
//!
//! - [`replicate`]: repeat each daily label once per sub-daily snapshot
//!   (e.g. 8 snapshots per day for 3-hourly Z500 fields).
//! - [`align`]: trim each year so the labels line up with the multi-day
//!   windows produced by [`crate::windowing`].
//!
//! # Example
//!
//! ```
//! use blocking_dataset::labeling::{align_labels, AlignmentConfig, LabelStats};
//! use blocking_dataset::YearLayout;
//!
//! let labels: Vec<u8> = vec![0, 0, 1, 1, 1, 0, 0, 0, 1, 0];
//! let config = AlignmentConfig::new(3, 2, YearLayout::new(1, 10));
//!
//! let aligned = align_labels(&labels, &config).unwrap();
//! assert_eq!(aligned.len(), 8);
//!
//! let stats = LabelStats::from_labels(&labels);
//! assert_eq!(stats.blocked_count, 4);
//! ```

pub mod align;
pub mod replicate;

pub use align::{align_labels, AlignmentConfig};
pub use replicate::{replicate_labels, snapshot_labels};

use crate::error::{DatasetError, Result};
use serde::{Deserialize, Serialize};

/// Binary day classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockingLabel {
    /// No blocking pattern on this day
    NotBlocked = 0,

    /// Blocking pattern present on this day
    Blocked = 1,
}

impl BlockingLabel {
    /// Integer representation used in label arrays.
    #[inline]
    pub fn as_int(&self) -> u8 {
        *self as u8
    }

    /// Create from integer representation.
    ///
    /// Returns `None` for anything other than 0 or 1.
    pub fn from_int(value: u8) -> Option<Self> {
        match value {
            0 => Some(BlockingLabel::NotBlocked),
            1 => Some(BlockingLabel::Blocked),
            _ => None,
        }
    }

    /// Get the string name of this label.
    pub fn name(&self) -> &'static str {
        match self {
            BlockingLabel::NotBlocked => "NotBlocked",
            BlockingLabel::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for BlockingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check that every value in `labels` is 0 or 1.
///
/// Reports the first offending position.
pub fn validate_binary_labels(labels: &[u8]) -> Result<()> {
    match labels
        .iter()
        .position(|&v| BlockingLabel::from_int(v).is_none())
    {
        Some(index) => Err(DatasetError::InvalidLabel {
            index,
            value: labels[index],
        }),
        None => Ok(()),
    }
}

/// Class balance of a label sequence.
///
/// Blocking is a comparatively rare regime, so the blocked fraction is
/// worth checking before training (and is recorded in export metadata).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStats {
    /// Total number of labels
    pub total: usize,

    /// Number of blocked days (value 1)
    pub blocked_count: usize,

    /// Number of days with any other value
    pub not_blocked_count: usize,
}

impl LabelStats {
    /// Count blocked and not-blocked labels.
    pub fn from_labels(labels: &[u8]) -> Self {
        let blocked_count = labels.iter().filter(|&&v| v == 1).count();
        Self {
            total: labels.len(),
            blocked_count,
            not_blocked_count: labels.len() - blocked_count,
        }
    }

    /// Fraction of blocked days in [0.0, 1.0] (0.0 for an empty sequence).
    pub fn blocked_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.blocked_count as f64 / self.total as f64
    }

    /// Majority class; ties go to `NotBlocked`.
    pub fn majority_class(&self) -> BlockingLabel {
        if self.blocked_count > self.not_blocked_count {
            BlockingLabel::Blocked
        } else {
            BlockingLabel::NotBlocked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_int_roundtrip() {
        for label in [BlockingLabel::NotBlocked, BlockingLabel::Blocked] {
            assert_eq!(BlockingLabel::from_int(label.as_int()), Some(label));
        }
        assert_eq!(BlockingLabel::from_int(2), None);
        assert_eq!(BlockingLabel::Blocked.to_string(), "Blocked");
    }

    #[test]
    fn test_validate_binary_labels() {
        assert!(validate_binary_labels(&[0, 1, 1, 0]).is_ok());
        assert!(validate_binary_labels(&[]).is_ok());

        match validate_binary_labels(&[0, 1, 3, 7]) {
            Err(DatasetError::InvalidLabel { index, value }) => {
                assert_eq!(index, 2);
                assert_eq!(value, 3);
            }
            other => panic!("expected InvalidLabel, got {:?}", other),
        }
    }

    #[test]
    fn test_label_stats() {
        let stats = LabelStats::from_labels(&[1, 0, 0, 1, 0]);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.blocked_count, 2);
        assert_eq!(stats.not_blocked_count, 3);
        assert!((stats.blocked_fraction() - 0.4).abs() < 1e-12);
        assert_eq!(stats.majority_class(), BlockingLabel::NotBlocked);

        let empty = LabelStats::from_labels(&[]);
        assert_eq!(empty.blocked_fraction(), 0.0);
    }
}
