//! NumPy export of a prepared training set.
//!
//! Writes a windows/labels pair produced by [`crate::windowing`] and
//! [`crate::labeling`] to `.npy` files for a Python training loop, along
//! with JSON metadata describing how the set was prepared.
//!
//! # Output Layout
//!
//! - `windows.npy`: `f64`, shape `[N, rows, cols * window]`
//! - `labels.npy`: `u8`, shape `[N]`, one label per window
//! - `metadata.json`: [`ExportMetadata`]
//!
//! # Example
//!
//! ```ignore
//! use blocking_dataset::export::DatasetExporter;
//!
//! let exporter = DatasetExporter::new("out/cnn_7day");
//! let summary = exporter.export(&windows, &labels, &config)?;
//! ```

use crate::config::PreparationConfig;
use crate::error::{DatasetError, Result};
use crate::labeling::{validate_binary_labels, LabelStats};
use ndarray::{Array1, Array3, Axis};
use ndarray_npy::WriteNpyExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// File name of the exported windows.
pub const WINDOWS_FILE: &str = "windows.npy";

/// File name of the exported labels.
pub const LABELS_FILE: &str = "labels.npy";

/// File name of the exported metadata.
pub const METADATA_FILE: &str = "metadata.json";

/// Metadata about an exported training set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of windows (and labels)
    pub n_samples: usize,

    /// Rows per window
    pub rows: usize,

    /// Values per window row (`grid columns * window`)
    pub columns: usize,

    /// Preparation parameters
    pub preparation: PreparationConfig,

    /// Class balance of the exported labels
    pub label_stats: LabelStats,

    /// Export timestamp (RFC 3339)
    pub export_timestamp: String,
}

/// Paths and counts returned after a successful export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Path of `windows.npy`
    pub windows_path: PathBuf,

    /// Path of `labels.npy`
    pub labels_path: PathBuf,

    /// Path of `metadata.json`
    pub metadata_path: PathBuf,

    /// Number of samples written
    pub n_samples: usize,
}

/// NumPy exporter for prepared training sets.
pub struct DatasetExporter {
    output_dir: PathBuf,
}

impl DatasetExporter {
    /// Create new exporter writing into `output_dir`.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export windows, labels and metadata.
    ///
    /// All three files are written under a `.partial` suffix first and
    /// renamed into place only once every write has succeeded. If a write
    /// or rename fails, the files written so far by this call are removed,
    /// so the directory never holds windows without matching labels and
    /// metadata from the same export. Files from an earlier export at the
    /// same paths may be lost in that case.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::ShapeMismatch`] if there is not exactly one label
    ///   per window
    /// - [`DatasetError::InvalidLabel`] if a label is not 0 or 1
    /// - [`DatasetError::InvalidParameter`] if `config` is invalid or there
    ///   is nothing to export
    /// - [`DatasetError::Io`] or [`DatasetError::Serialization`] if a file
    ///   cannot be written
    pub fn export(
        &self,
        windows: &Array3<f64>,
        labels: &Array1<u8>,
        config: &PreparationConfig,
    ) -> Result<ExportSummary> {
        config.validate()?;

        let n_samples = windows.len_of(Axis(0));
        if n_samples == 0 {
            return Err(DatasetError::invalid("No windows to export"));
        }
        if labels.len() != n_samples {
            return Err(DatasetError::shape(
                "labels per window",
                n_samples,
                labels.len(),
            ));
        }

        let label_vec = labels.to_vec();
        validate_binary_labels(&label_vec)?;

        fs::create_dir_all(&self.output_dir)?;

        let (_, rows, columns) = windows.dim();
        let metadata = ExportMetadata {
            n_samples,
            rows,
            columns,
            preparation: config.clone(),
            label_stats: LabelStats::from_labels(&label_vec),
            export_timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let windows_path = self.output_dir.join(WINDOWS_FILE);
        let labels_path = self.output_dir.join(LABELS_FILE);
        let metadata_path = self.output_dir.join(METADATA_FILE);
        let targets = [&windows_path, &labels_path, &metadata_path];
        let staged: Vec<PathBuf> = targets.iter().map(|p| staging_path(p)).collect();

        let written = write_npy(&staged[0], windows)
            .and_then(|()| write_npy(&staged[1], labels))
            .and_then(|()| write_json(&staged[2], &metadata));
        if let Err(e) = written {
            remove_all(&staged);
            return Err(e);
        }

        for (i, (from, to)) in staged.iter().zip(targets).enumerate() {
            if let Err(e) = fs::rename(from, to) {
                let moved: Vec<PathBuf> = targets[..i].iter().map(|p| p.to_path_buf()).collect();
                remove_all(&moved);
                remove_all(&staged[i..]);
                return Err(e.into());
            }
        }

        log::info!(
            "Exported windows: {} {:?}",
            windows_path.display(),
            windows.shape()
        );
        log::info!(
            "Exported labels: {} [{} samples]",
            labels_path.display(),
            labels.len()
        );
        log::info!("Exported metadata: {}", metadata_path.display());

        Ok(ExportSummary {
            windows_path,
            labels_path,
            metadata_path,
            n_samples,
        })
    }
}

/// Sibling path a file is written to before it is renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

fn remove_all(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to remove {}: {e}", path.display()),
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .map_err(|e| DatasetError::Serialization(format!("Failed to write {}: {e}", path.display())))
}

fn write_npy<T: WriteNpyExt>(path: &Path, array: &T) -> Result<()> {
    let file = File::create(path)?;
    array
        .write_npy(BufWriter::new(file))
        .map_err(|e| DatasetError::Serialization(format!("Failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::YearLayout;
    use tempfile::TempDir;

    fn small_config() -> PreparationConfig {
        PreparationConfig::new(YearLayout::new(2, 5), 3, 2)
    }

    #[test]
    fn test_rejects_label_count_mismatch() {
        let dir = TempDir::new().unwrap();
        let exporter = DatasetExporter::new(dir.path());

        let windows = Array3::<f64>::zeros((6, 2, 6));
        let labels = Array1::<u8>::zeros(5);

        assert!(matches!(
            exporter.export(&windows, &labels, &small_config()),
            Err(DatasetError::ShapeMismatch {
                expected: 6,
                actual: 5,
                ..
            })
        ));
        assert!(!dir.path().join(WINDOWS_FILE).exists());
    }

    #[test]
    fn test_rejects_non_binary_labels() {
        let dir = TempDir::new().unwrap();
        let exporter = DatasetExporter::new(dir.path());

        let windows = Array3::<f64>::zeros((3, 1, 3));
        let labels = Array1::from_vec(vec![0u8, 2, 1]);

        assert!(matches!(
            exporter.export(&windows, &labels, &small_config()),
            Err(DatasetError::InvalidLabel { index: 1, value: 2 })
        ));
    }

    #[test]
    fn test_failed_write_leaves_no_partial_set() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory where metadata.json should go makes the last rename fail.
        let blocker = dir.path().join(METADATA_FILE);
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), b"x").unwrap();

        let windows = Array3::<f64>::zeros((6, 2, 6));
        let labels = Array1::from_vec(vec![0u8, 1, 0, 0, 1, 1]);
        let result = DatasetExporter::new(dir.path()).export(&windows, &labels, &small_config());

        assert!(matches!(result, Err(DatasetError::Io(_))));
        assert!(!dir.path().join(WINDOWS_FILE).exists());
        assert!(!dir.path().join(LABELS_FILE).exists());
        for name in [WINDOWS_FILE, LABELS_FILE, METADATA_FILE] {
            assert!(!staging_path(&dir.path().join(name)).exists());
        }
    }

    #[test]
    fn test_export_writes_all_files() {
        let dir = TempDir::new().unwrap();
        let windows = Array3::<f64>::zeros((6, 2, 6));
        let labels = Array1::from_vec(vec![0u8, 1, 0, 0, 1, 1]);

        let summary = DatasetExporter::new(dir.path())
            .export(&windows, &labels, &small_config())
            .unwrap();

        assert!(summary.windows_path.is_file());
        assert!(summary.labels_path.is_file());
        assert!(summary.metadata_path.is_file());
        assert!(!staging_path(&summary.windows_path).exists());
    }

    #[test]
    fn test_rejects_empty_export() {
        let dir = TempDir::new().unwrap();
        let exporter = DatasetExporter::new(dir.path());

        let windows = Array3::<f64>::zeros((0, 1, 3));
        let labels = Array1::<u8>::zeros(0);

        assert!(exporter.export(&windows, &labels, &small_config()).is_err());
    }
}
