//! Blocking Dataset
//!
//! Preparation and scoring of atmospheric blocking datasets for pattern
//! classification models.
//!
//! # Overview
//!
//! A blocking classifier (e.g. a CNN) is trained on daily geopotential
//! height (Z500) contour grids paired with a ground-truth dataset (GTD)
//! of blocked/not-blocked day labels. This crate covers the array work
//! between loading the reanalysis data and feeding the model:
//!
//! - **Label replication**: one label per sub-daily snapshot
//! - **Windowing**: stack consecutive days into one wider sample
//! - **Label alignment**: trim labels per year to match the windows
//! - **Scoring**: recall of predicted blocked days against the GTD
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Blocking Dataset                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  labeling/   - Label types, replication and alignment           │
//! │  windowing   - Multi-day window method                          │
//! │  scoring     - Recall and confusion counts against the GTD      │
//! │  layout      - Year-period partitioning                         │
//! │  config      - Serializable preparation parameters              │
//! │  export      - NumPy export for Python/PyTorch                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is pure: inputs are borrowed, outputs are newly
//! allocated `ndarray` arrays, and failures are reported through
//! [`DatasetError`].
//!
//! # Example
//!
//! ```
//! use blocking_dataset::{align_labels, window_fields_by_year, AlignmentConfig, WindowConfig, YearLayout};
//! use ndarray::Array3;
//!
//! let layout = YearLayout::new(2, 10);
//! let fields = Array3::<f64>::zeros((20, 4, 6));
//! let labels = vec![0u8; 20];
//!
//! let windows = window_fields_by_year(fields.view(), &WindowConfig::new(7), &layout).unwrap();
//! let aligned = align_labels(&labels, &AlignmentConfig::new(7, 4, layout)).unwrap();
//! assert_eq!(windows.shape()[0], aligned.len());
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod labeling;
pub mod layout;
pub mod prelude;
pub mod scoring;
pub mod windowing;

// Re-exports - Errors
pub use error::{DatasetError, Result};

// Re-exports - Config
pub use config::{ExperimentMetadata, PreparationConfig};
pub use layout::YearLayout;

// Re-exports - Labeling
pub use labeling::{
    align_labels, replicate_labels, snapshot_labels, validate_binary_labels, AlignmentConfig,
    BlockingLabel, LabelStats,
};

// Re-exports - Windowing
pub use windowing::{window_fields, window_fields_by_year, ShortSeriesPolicy, WindowConfig};

// Re-exports - Scoring
pub use scoring::{check_blocking_accuracy, BlockingAccuracy};

// Re-exports - Export
pub use export::{DatasetExporter, ExportMetadata, ExportSummary};
