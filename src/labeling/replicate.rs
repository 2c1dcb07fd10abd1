//! Label replication for sub-daily snapshots.
//!
//! When a model is trained on several Z500 snapshots per day (e.g. every
//! 3 hours, 24 / 3 = 8 snapshots), every snapshot of a day inherits that
//! day's label.

use crate::error::{DatasetError, Result};
use ndarray::{Array1, Array2};

/// Repeat each daily label `multiple` times.
///
/// Returns an array of shape `(time_domain_size, multiple)` where row `i`
/// holds `labels[i]` in every column.
///
/// # Errors
///
/// - [`DatasetError::ShapeMismatch`] if `labels.len() != time_domain_size`
/// - [`DatasetError::InvalidParameter`] if `multiple == 0`
///
/// # Example
///
/// ```
/// use blocking_dataset::labeling::replicate_labels;
///
/// let out = replicate_labels(&[1u8, 0, 1], 3, 2).unwrap();
/// assert_eq!(out.shape(), &[3, 2]);
/// assert_eq!(out.row(2).to_vec(), vec![1, 1]);
/// ```
pub fn replicate_labels<T: Clone>(
    labels: &[T],
    time_domain_size: usize,
    multiple: usize,
) -> Result<Array2<T>> {
    if labels.len() != time_domain_size {
        return Err(DatasetError::shape(
            "time domain size",
            time_domain_size,
            labels.len(),
        ));
    }
    if multiple == 0 {
        return Err(DatasetError::invalid("replication multiple must be >= 1"));
    }

    Ok(Array2::from_shape_fn((time_domain_size, multiple), |(day, _)| {
        labels[day].clone()
    }))
}

/// Like [`replicate_labels`], flattened to one label per snapshot.
///
/// Snapshots are day-major: the first `multiple` entries belong to day 0,
/// the next `multiple` to day 1, and so on.
pub fn snapshot_labels<T: Clone>(
    labels: &[T],
    time_domain_size: usize,
    multiple: usize,
) -> Result<Array1<T>> {
    let replicated = replicate_labels(labels, time_domain_size, multiple)?;
    Ok(replicated.iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replicate_shape_and_rows() {
        let labels = [0u8, 1, 1, 0];
        let out = replicate_labels(&labels, 4, 8).unwrap();

        assert_eq!(out.shape(), &[4, 8]);
        for (i, row) in out.rows().into_iter().enumerate() {
            assert!(row.iter().all(|&v| v == labels[i]));
        }
    }

    #[test]
    fn test_replicate_multiple_one_is_column() {
        let out = replicate_labels(&[5i32, 6, 7], 3, 1).unwrap();
        assert_eq!(out.shape(), &[3, 1]);
        assert_eq!(out.column(0).to_vec(), vec![5, 6, 7]);
    }

    #[test]
    fn test_replicate_rejects_size_mismatch() {
        let err = replicate_labels(&[1u8, 0, 1], 4, 2).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::ShapeMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_replicate_rejects_zero_multiple() {
        assert!(matches!(
            replicate_labels(&[1u8], 1, 0),
            Err(DatasetError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_snapshot_labels_day_major() {
        let out = snapshot_labels(&[1u8, 0], 2, 3).unwrap();
        assert_eq!(out.to_vec(), vec![1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_replicate_empty() {
        let labels: [u8; 0] = [];
        let out = replicate_labels(&labels, 0, 4).unwrap();
        assert_eq!(out.shape(), &[0, 4]);
    }
}
