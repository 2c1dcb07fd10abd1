//! Prelude module for convenient imports.
//!
//! ```ignore
//! use blocking_dataset::prelude::*;
//!
//! let windows = window_fields_by_year(fields.view(), &WindowConfig::new(7), &layout)?;
//! let labels = align_labels(&gtd, &AlignmentConfig::new(7, 4, layout))?;
//! ```

pub use crate::config::{ExperimentMetadata, PreparationConfig};
pub use crate::error::{DatasetError, Result};
pub use crate::export::{DatasetExporter, ExportMetadata, ExportSummary};
pub use crate::labeling::{
    align_labels, replicate_labels, snapshot_labels, validate_binary_labels, AlignmentConfig,
    BlockingLabel, LabelStats,
};
pub use crate::layout::YearLayout;
pub use crate::scoring::{check_blocking_accuracy, BlockingAccuracy};
pub use crate::windowing::{
    window_fields, window_fields_by_year, ShortSeriesPolicy, WindowConfig,
};

/// Daily label sequence (0 = not blocked, 1 = blocked).
pub type LabelVec = Vec<u8>;
