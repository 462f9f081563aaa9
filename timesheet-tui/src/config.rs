use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timesheet::{
    default_activity_types, default_cases, sample_seed, ActivityDraft, ActivityStore, Case,
    DayNames, ReferenceData, Week, DEFAULT_EXPECTED_HOURS,
};

const APP_DIR: &str = "timesheet-tui";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetConfig {
    /// Hours expected per weekday, shown in the expected row of the sheet.
    #[serde(default = "default_expected_hours")]
    pub expected_hours_per_day: f64,

    /// Label set for weekday and month names: "english" or "norwegian".
    #[serde(default)]
    pub day_names: DayNames,

    /// Log file location. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    #[serde(default = "default_activity_types")]
    pub activity_types: Vec<String>,

    #[serde(default = "default_cases")]
    pub cases: Vec<Case>,

    /// Entries loaded at startup. Without it the sheet starts with a few
    /// demo entries in the current week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Vec<ActivityDraft>>,
}

fn default_expected_hours() -> f64 {
    DEFAULT_EXPECTED_HOURS
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            expected_hours_per_day: default_expected_hours(),
            day_names: DayNames::default(),
            log_file: None,
            activity_types: default_activity_types(),
            cases: default_cases(),
            seed: None,
        }
    }
}

impl TimesheetConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR)
            .join("config.toml"))
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        Ok(dirs::data_local_dir()
            .context("Cannot determine data directory")?
            .join(APP_DIR)
            .join("timesheet-tui.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        if !config.expected_hours_per_day.is_finite() || config.expected_hours_per_day < 0.0 {
            anyhow::bail!(
                "expected_hours_per_day must be a non-negative number, got {}",
                config.expected_hours_per_day
            );
        }
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Write the default config if no file exists yet, returning the path.
    pub fn ensure_default_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }

    pub fn reference_data(&self) -> Result<ReferenceData> {
        ReferenceData::new(self.cases.clone(), self.activity_types.clone())
            .context("Invalid case or activity type list in config")
    }

    /// Store holding the configured seed entries, or the demo entries placed
    /// in `current_week`.
    pub fn build_store(&self, current_week: &Week) -> ActivityStore {
        match &self.seed {
            Some(seed) => ActivityStore::with_seed(seed.iter().cloned()),
            None => ActivityStore::with_seed(sample_seed(current_week)),
        }
    }
}
