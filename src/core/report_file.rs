//! Reading and writing report files (YAML or JSON, chosen by extension).

use crate::errors::{AppError, AppResult};
use crate::models::report::{ActivityReport, DailyReport};
use crate::utils::path::extension;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Yaml,
    Json,
}

impl FileKind {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match extension(path).as_deref() {
            Some("yml") | Some("yaml") => Ok(FileKind::Yaml),
            Some("json") => Ok(FileKind::Json),
            _ => Err(AppError::UnsupportedFile(path.display().to_string())),
        }
    }
}

pub fn load<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let kind = FileKind::from_path(path)?;
    let content = fs::read_to_string(path)?;

    let value = match kind {
        FileKind::Yaml => serde_yaml::from_str(&content)?,
        FileKind::Json => serde_json::from_str(&content)?,
    };
    log::debug!("loaded {}", path.display());
    Ok(value)
}

/// Activity report with row ids checked for uniqueness.
pub fn load_activity_report(path: &Path) -> AppResult<ActivityReport> {
    let report: ActivityReport = load(path)?;
    report.ensure_unique_ids()?;
    Ok(report)
}

pub fn load_daily_report(path: &Path) -> AppResult<DailyReport> {
    let report: DailyReport = load(path)?;
    report.ensure_unique_ids()?;
    Ok(report)
}

pub fn save<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let kind = FileKind::from_path(path)?;

    let content = match kind {
        FileKind::Yaml => serde_yaml::to_string(value)?,
        FileKind::Json => serde_json::to_string_pretty(value)?,
    };
    fs::write(path, content)?;
    log::debug!("saved {}", path.display());
    Ok(())
}
