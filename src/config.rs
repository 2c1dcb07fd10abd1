//! Dataset preparation configuration.
//!
//! Collects every parameter needed to turn daily Z500 fields and GTD
//! labels into a training set, with TOML/JSON serialization so each
//! experiment's preparation can be saved next to its results.
//!
//! # Example
//!
//! ```ignore
//! use blocking_dataset::config::PreparationConfig;
//!
//! let config = PreparationConfig::default();
//! config.save_toml("experiment_config.toml")?;
//!
//! let loaded = PreparationConfig::load_toml("experiment_config.toml")?;
//! let alignment = loaded.alignment();
//! ```

use crate::error::{DatasetError, Result};
use crate::labeling::AlignmentConfig;
use crate::layout::YearLayout;
use crate::windowing::WindowConfig;
use std::fs;
use std::path::Path;

/// Unified preparation configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreparationConfig {
    /// Snapshots per day used when replicating labels (1 for daily data,
    /// 8 for 3-hourly)
    pub snapshots_per_day: usize,

    /// Day within a window whose label represents it (1-indexed)
    pub day_of_label: usize,

    /// Year partitioning of the daily sequences
    pub layout: YearLayout,

    /// Window method parameters
    pub window: WindowConfig,

    /// Experiment metadata (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ExperimentMetadata>,
}

/// Free-form description of an experiment.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExperimentMetadata {
    /// Experiment name
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source dataset (e.g. "ERA5 Z500, JJA 1979-2018")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

impl Default for PreparationConfig {
    /// 7-day windows labeled on day 4, 40 summers of 92 daily fields.
    fn default() -> Self {
        Self {
            snapshots_per_day: 1,
            layout: YearLayout::era5_summer(),
            window: WindowConfig::default(),
            day_of_label: 4,
            metadata: None,
        }
    }
}

impl PreparationConfig {
    /// Create a configuration for daily data.
    pub fn new(layout: YearLayout, window: usize, day_of_label: usize) -> Self {
        Self {
            snapshots_per_day: 1,
            layout,
            window: WindowConfig::new(window),
            day_of_label,
            metadata: None,
        }
    }

    /// Set the number of snapshots per day.
    pub fn with_snapshots_per_day(mut self, snapshots: usize) -> Self {
        self.snapshots_per_day = snapshots;
        self
    }

    /// Attach experiment metadata.
    pub fn with_metadata(mut self, metadata: ExperimentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Alignment parameters derived from this configuration.
    pub fn alignment(&self) -> AlignmentConfig {
        AlignmentConfig::new(self.window.window, self.day_of_label, self.layout)
    }

    /// Number of daily labels expected (`num_years * days_per_year`).
    pub fn time_domain_size(&self) -> usize {
        self.layout.total_days()
    }

    /// Validate configuration.
    ///
    /// Logs a warning (but succeeds) when `day_of_label` is not the centre
    /// day of the window: aligned labels then outnumber per-year windows.
    pub fn validate(&self) -> Result<()> {
        if self.snapshots_per_day == 0 {
            return Err(DatasetError::invalid("snapshots_per_day must be > 0"));
        }

        self.window.validate()?;

        let alignment = self.alignment();
        alignment.validate()?;

        if self.window.window > self.layout.days_per_year {
            return Err(DatasetError::invalid(format!(
                "window ({}) is longer than a year ({} days)",
                self.window.window, self.layout.days_per_year
            )));
        }

        if !alignment.is_window_aligned() {
            log::warn!(
                "day_of_label {} is not the centre of a {}-day window: {} labels vs {} windows per year",
                self.day_of_label,
                self.window.window,
                alignment.labels_per_year(),
                alignment.windows_per_year()
            );
        }

        Ok(())
    }

    /// Save configuration to TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| DatasetError::Serialization(format!("Failed to encode TOML: {e}")))?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Load configuration from TOML file.
    ///
    /// The loaded configuration is validated.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: PreparationConfig = toml::from_str(&contents)
            .map_err(|e| DatasetError::Serialization(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| DatasetError::Serialization(format!("Failed to encode JSON: {e}")))?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load configuration from JSON file.
    ///
    /// The loaded configuration is validated.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: PreparationConfig = serde_json::from_str(&contents)
            .map_err(|e| DatasetError::Serialization(format!("Failed to parse JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
