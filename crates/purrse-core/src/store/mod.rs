//! Plan storage with pluggable backends
//!
//! Plans are documents keyed by username. There is no versioning or locking:
//! saving a plan for a username replaces whatever was stored before, and
//! concurrent writers race with the last write winning.
//!
//! # Architecture
//!
//! - `PlanStore` trait defines get/put over plans
//! - `JsonPlanStore` keeps every plan in one JSON object file (`daily.json`)
//! - `MemoryPlanStore` keeps plans in process, for tests and dry runs
//! - `GoalLog` is the append-only history of saved goals (`daily_goals.json`)

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::DailyPlan;

mod json;
mod memory;

pub use json::{GoalLog, JsonPlanStore};
pub use memory::MemoryPlanStore;

/// File name of the plan document inside the data directory
pub const PLANS_FILE: &str = "daily.json";

/// File name of the goal history inside the data directory
pub const GOALS_FILE: &str = "daily_goals.json";

/// Key-value storage of daily plans
pub trait PlanStore {
    /// Human-readable name for this store
    fn name(&self) -> &str;

    /// Load the plan for a username, if any
    fn get(&self, username: &str) -> Result<Option<DailyPlan>>;

    /// Store a plan under a username, replacing any previous plan
    fn put(&self, username: &str, plan: &DailyPlan) -> Result<()>;
}

/// Replace `path` with the pretty-printed JSON of `value`.
///
/// The document is written to a temporary file in the same directory and
/// renamed over the target, so readers never see a half-written file.
pub(crate) fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, value)?;
    tmp.write_all(b"\n")?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read a JSON document, treating a missing or blank file as `None`
pub(crate) fn read_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&content)?))
}
