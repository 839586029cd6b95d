use super::counter::{Counter, CounterGroup};
use super::{Row, duplicate_id};
use crate::errors::{AppError, AppResult};
use super::stock_entry::StockEntry;
use super::stop::Stop;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row collections of one activity report screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Final vibrator reading of the previous day's Troisième shift.
    #[serde(default)]
    pub previous_day_end: Option<String>,
    #[serde(default)]
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub vibrator: Vec<Counter>,
    #[serde(default)]
    pub liaison: Vec<Counter>,
    #[serde(default)]
    pub stock: Vec<StockEntry>,
}

impl Default for ActivityReport {
    /// Empty report, one blank row per group (as a freshly opened screen).
    fn default() -> Self {
        Self {
            date: None,
            previous_day_end: None,
            stops: vec![Stop::default()],
            vibrator: vec![Counter::default()],
            liaison: vec![Counter::default()],
            stock: vec![StockEntry::default()],
        }
    }
}

impl ActivityReport {
    pub fn new(date: Option<NaiveDate>, previous_day_end: Option<String>) -> Self {
        Self {
            date,
            previous_day_end,
            ..Self::default()
        }
    }

    pub fn counters(&self, group: CounterGroup) -> &[Counter] {
        match group {
            CounterGroup::Vibrator => &self.vibrator,
            CounterGroup::Liaison => &self.liaison,
        }
    }

    pub fn counters_mut(&mut self, group: CounterGroup) -> &mut Vec<Counter> {
        match group {
            CounterGroup::Vibrator => &mut self.vibrator,
            CounterGroup::Liaison => &mut self.liaison,
        }
    }

    /// Predecessor value supplied from outside the report, if any.
    pub fn external_predecessor(&self, group: CounterGroup) -> Option<&str> {
        match group {
            CounterGroup::Vibrator => self.previous_day_end.as_deref(),
            CounterGroup::Liaison => None,
        }
    }

    /// Rejects a report whose lists reuse a row id.
    pub fn ensure_unique_ids(&self) -> AppResult<()> {
        unique_in("stops", &self.stops)?;
        unique_in(CounterGroup::Vibrator.as_str(), &self.vibrator)?;
        unique_in(CounterGroup::Liaison.as_str(), &self.liaison)?;
        unique_in("stock", &self.stock)
    }

    /// "dd/mm/yyyy", or an empty string when no date is set.
    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_default()
    }
}

/// Two-module downtime report (daily screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub module1: Vec<Stop>,
    #[serde(default)]
    pub module2: Vec<Stop>,
}

impl Default for DailyReport {
    fn default() -> Self {
        Self {
            date: None,
            module1: vec![Stop::default()],
            module2: vec![Stop::default()],
        }
    }
}

/// One of the two production modules of the daily report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyModule {
    Module1,
    Module2,
}

impl DailyModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            DailyModule::Module1 => "module1",
            DailyModule::Module2 => "module2",
        }
    }
}

impl DailyReport {
    pub fn stops(&self, module: DailyModule) -> &[Stop] {
        match module {
            DailyModule::Module1 => &self.module1,
            DailyModule::Module2 => &self.module2,
        }
    }

    pub fn stops_mut(&mut self, module: DailyModule) -> &mut Vec<Stop> {
        match module {
            DailyModule::Module1 => &mut self.module1,
            DailyModule::Module2 => &mut self.module2,
        }
    }

    pub fn ensure_unique_ids(&self) -> AppResult<()> {
        unique_in(DailyModule::Module1.as_str(), &self.module1)?;
        unique_in(DailyModule::Module2.as_str(), &self.module2)
    }
}

fn unique_in<T: Row>(group: &str, rows: &[T]) -> AppResult<()> {
    match duplicate_id(rows) {
        Some(id) => Err(AppError::DuplicateRow {
            group: group.to_string(),
            id: id.to_string(),
        }),
        None => Ok(()),
    }
}
