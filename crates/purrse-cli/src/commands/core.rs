//! Shared command context and input helpers
//!
//! This module contains:
//! - `Context` - Resolved config plus output mode, passed to every command
//! - `resolve_now` - The clock, optionally pinned with `--today`
//! - `load_inputs` - Read the transaction feed and income record

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use purrse_core::{Config, GoalLog, IncomeRecord, JsonPlanStore, TransactionFeed};
use serde::Serialize;

use crate::cli::InputArgs;

/// Everything a command needs besides its own arguments
pub struct Context {
    pub config: Config,
    pub json: bool,
}

impl Context {
    pub fn new(config: Config, json: bool) -> Self {
        Self { config, json }
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn plan_store(&self) -> JsonPlanStore {
        JsonPlanStore::new(self.data_dir())
    }

    pub fn goal_log(&self) -> GoalLog {
        GoalLog::new(self.data_dir())
    }

    /// Explicit username, or the configured default
    pub fn username(&self, user: Option<&str>) -> String {
        user.map(str::to_string)
            .unwrap_or_else(|| self.config.default_username.clone())
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str, flag: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid {} date '{}' (use YYYY-MM-DD)", flag, s))
}

/// Midnight UTC of `--today` when given, otherwise the current time
pub fn resolve_now(today: Option<&str>) -> Result<DateTime<Utc>> {
    match today {
        Some(s) => {
            let date = parse_date(s, "--today")?;
            Ok(DateTime::<Utc>::from_naive_utc_and_offset(
                date.and_time(NaiveTime::MIN),
                Utc,
            ))
        }
        None => Ok(Utc::now()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} from {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} in {}", what, path.display()))
}

/// Read the feed and income documents named by the input arguments
pub fn load_inputs(inputs: &InputArgs) -> Result<(TransactionFeed, IncomeRecord)> {
    let feed = read_json(&inputs.feed, "transaction feed")?;
    let income = read_json(&inputs.income, "income record")?;
    Ok((feed, income))
}
