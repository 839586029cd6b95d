use crate::core::calculator::{Limits, MAX_HOURS_PER_SHIFT, TOTAL_PERIOD_MINUTES};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_max_hours")]
    pub max_hours_per_shift: f64,
    #[serde(default = "default_period_minutes")]
    pub period_minutes: i64,
    #[serde(default = "default_export")]
    pub default_export: ExportFormat,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_max_hours() -> f64 {
    MAX_HOURS_PER_SHIFT
}
fn default_period_minutes() -> i64 {
    TOTAL_PERIOD_MINUTES
}
fn default_export() -> ExportFormat {
    ExportFormat::Json
}
fn default_use_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_hours_per_shift: default_max_hours(),
            period_minutes: default_period_minutes(),
            default_export: default_export(),
            use_colors: default_use_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shiftreport")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftreport.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    fn validate(&self) -> AppResult<()> {
        if self.max_hours_per_shift.is_nan() || self.max_hours_per_shift <= 0.0 {
            return Err(AppError::Config(format!(
                "max_hours_per_shift must be positive (got {})",
                self.max_hours_per_shift
            )));
        }
        if self.period_minutes <= 0 {
            return Err(AppError::Config(format!(
                "period_minutes must be positive (got {})",
                self.period_minutes
            )));
        }
        Ok(())
    }

    /// Ceilings handed to the engine.
    pub fn limits(&self) -> Limits {
        Limits {
            max_hours_per_shift: self.max_hours_per_shift,
            period_minutes: self.period_minutes,
        }
    }

    /// Write the default configuration to `path`.
    /// Returns false when a file already exists and `force` is not set.
    pub fn init_all(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(path, yaml)?;
        Ok(true)
    }
}
