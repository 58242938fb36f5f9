//! JSON file stores

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{read_json_file, write_json_file, PlanStore, GOALS_FILE, PLANS_FILE};
use crate::error::Result;
use crate::goals::GoalEntry;
use crate::models::DailyPlan;

/// Plans kept in a single JSON object mapping username to plan
pub struct JsonPlanStore {
    path: PathBuf,
}

impl JsonPlanStore {
    /// Store backed by `daily.json` inside `data_dir`.
    ///
    /// The directory is created on first write, not here.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(PLANS_FILE),
        }
    }

    /// Store backed by an explicit file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored plan, by username
    pub fn load_all(&self) -> Result<BTreeMap<String, DailyPlan>> {
        Ok(read_json_file(&self.path)?.unwrap_or_default())
    }
}

impl PlanStore for JsonPlanStore {
    fn name(&self) -> &str {
        "json"
    }

    fn get(&self, username: &str) -> Result<Option<DailyPlan>> {
        let mut plans = self.load_all()?;
        Ok(plans.remove(username))
    }

    fn put(&self, username: &str, plan: &DailyPlan) -> Result<()> {
        let mut plans = self.load_all()?;
        plans.insert(username.to_string(), plan.clone());
        write_json_file(&self.path, &plans)?;
        info!("Saved plan for {} to {}", username, self.path.display());
        Ok(())
    }
}

/// Append-only history of saved goals
pub struct GoalLog {
    path: PathBuf,
}

impl GoalLog {
    /// Log backed by `daily_goals.json` inside `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(GOALS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in insertion order; empty when the log does not exist yet
    pub fn entries(&self) -> Result<Vec<GoalEntry>> {
        Ok(read_json_file(&self.path)?.unwrap_or_default())
    }

    pub fn append(&self, entry: GoalEntry) -> Result<()> {
        let mut entries = self.entries()?;
        entries.push(entry);
        write_json_file(&self.path, &entries)?;
        info!(
            "Recorded goal '{}' ({} entries) in {}",
            entries.last().map(|e| e.goal.as_str()).unwrap_or_default(),
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
