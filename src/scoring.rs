//! Scoring predicted blocked days against a ground-truth dataset.
//!
//! The headline metric is recall on the blocked class: of the days the
//! GTD marks as blocked, how many did the model also mark as blocked.
//! Any value other than 1 counts as "not blocked" on either side.
//!
//! # Example
//!
//! ```
//! use blocking_dataset::scoring::check_blocking_accuracy;
//!
//! let pred: [u8; 5] = [1, 0, 1, 1, 0];
//! let actual: [u8; 5] = [1, 0, 0, 1, 1];
//!
//! let score = check_blocking_accuracy(&pred, &actual).unwrap();
//! let (tp, positives, recall) = score.as_tuple();
//! assert_eq!((tp, positives), (2, 3));
//! assert!((recall - 2.0 / 3.0).abs() < 1e-12);
//! ```

use crate::error::{DatasetError, Result};
use serde::{Deserialize, Serialize};

/// Confusion counts and recall for the blocked class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockingAccuracy {
    /// Days blocked in both prediction and reference
    pub true_positives: usize,

    /// Days blocked in the reference
    pub positives: usize,

    /// `true_positives / positives`
    pub recall: f64,

    /// Days blocked in the prediction
    pub predicted_positives: usize,

    /// Predicted blocked, reference not blocked
    pub false_positives: usize,

    /// Reference blocked, predicted not blocked
    pub false_negatives: usize,

    /// Not blocked in either
    pub true_negatives: usize,

    /// Number of days compared
    pub total: usize,
}

impl BlockingAccuracy {
    /// `(true_positives, positives, recall)`.
    pub fn as_tuple(&self) -> (usize, usize, f64) {
        (self.true_positives, self.positives, self.recall)
    }

    /// Fraction of predicted blocked days that are really blocked.
    ///
    /// `None` when the model predicted no blocked day at all.
    pub fn precision(&self) -> Option<f64> {
        if self.predicted_positives == 0 {
            return None;
        }
        Some(self.true_positives as f64 / self.predicted_positives as f64)
    }

    /// Fraction of days classified correctly (both classes).
    pub fn accuracy(&self) -> f64 {
        (self.true_positives + self.true_negatives) as f64 / self.total as f64
    }

    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> Option<f64> {
        let precision = self.precision()?;
        if precision + self.recall == 0.0 {
            return Some(0.0);
        }
        Some(2.0 * precision * self.recall / (precision + self.recall))
    }
}

/// Compare predicted labels to reference labels.
///
/// # Errors
///
/// - [`DatasetError::ShapeMismatch`] if the sequences differ in length
/// - [`DatasetError::NoPositives`] if the reference has no blocked day
///   (recall would be a division by zero)
pub fn check_blocking_accuracy(
    pred_labels: &[u8],
    actual_labels: &[u8],
) -> Result<BlockingAccuracy> {
    if pred_labels.len() != actual_labels.len() {
        return Err(DatasetError::shape(
            "predicted label count",
            actual_labels.len(),
            pred_labels.len(),
        ));
    }

    let (mut tp, mut fp, mut fn_, mut tn) = (0usize, 0usize, 0usize, 0usize);
    for (&pred, &actual) in pred_labels.iter().zip(actual_labels) {
        match (pred == 1, actual == 1) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, true) => fn_ += 1,
            (false, false) => tn += 1,
        }
    }

    let positives = tp + fn_;
    if positives == 0 {
        return Err(DatasetError::NoPositives {
            total: actual_labels.len(),
        });
    }

    Ok(BlockingAccuracy {
        true_positives: tp,
        positives,
        recall: tp as f64 / positives as f64,
        predicted_positives: tp + fp,
        false_positives: fp,
        false_negatives: fn_,
        true_negatives: tn,
        total: actual_labels.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let score = check_blocking_accuracy(&[1, 0, 1, 1, 0], &[1, 0, 0, 1, 1]).unwrap();
        assert_eq!(score.true_positives, 2);
        assert_eq!(score.positives, 3);
        assert!((score.recall - 2.0 / 3.0).abs() < 1e-12);

        assert_eq!(score.false_positives, 1);
        assert_eq!(score.false_negatives, 1);
        assert_eq!(score.true_negatives, 1);
        assert_eq!(score.predicted_positives, 3);
        assert!((score.precision().unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((score.accuracy() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_no_positives_is_an_error() {
        let err = check_blocking_accuracy(&[1, 1, 0], &[0, 0, 0]).unwrap_err();
        assert!(matches!(err, DatasetError::NoPositives { total: 3 }));
    }

    #[test]
    fn test_non_unit_values_are_not_blocked() {
        let score = check_blocking_accuracy(&[2, 1], &[2, 1]).unwrap();
        assert_eq!(score.as_tuple(), (1, 1, 1.0));
        assert_eq!(score.true_negatives, 1);
    }

    #[test]
    fn test_precision_undefined_without_predictions() {
        let score = check_blocking_accuracy(&[0, 0], &[1, 0]).unwrap();
        assert_eq!(score.recall, 0.0);
        assert_eq!(score.precision(), None);
        assert_eq!(score.f1(), None);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            check_blocking_accuracy(&[1, 0], &[1, 0, 1]),
            Err(DatasetError::ShapeMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }
}
