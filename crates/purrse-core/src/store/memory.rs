//! In-memory plan store

use std::collections::HashMap;
use std::sync::Mutex;

use super::PlanStore;
use crate::error::Result;
use crate::models::DailyPlan;

/// Plans held in process memory
#[derive(Default)]
pub struct MemoryPlanStore {
    plans: Mutex<HashMap<String, DailyPlan>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlanStore for MemoryPlanStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, username: &str) -> Result<Option<DailyPlan>> {
        let plans = self
            .plans
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(plans.get(username).cloned())
    }

    fn put(&self, username: &str, plan: &DailyPlan) -> Result<()> {
        let mut plans = self
            .plans
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        plans.insert(username.to_string(), plan.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanSavings;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::sync::Arc;
    use std::thread;

    fn plan(username: &str) -> DailyPlan {
        DailyPlan {
            username: username.to_string(),
            goal: "New Car".to_string(),
            target_amount: 3000.0,
            target_date: NaiveDate::from_ymd_opt(2026, 12, 17).unwrap(),
            daily_limit: 80.0,
            monthly_debt: 480.0,
            savings: PlanSavings::Strict {
                daily_savings: 50.0,
                remaining_daily: 30.0,
                days_to_goal: 60,
            },
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_put_and_get() {
        let store = MemoryPlanStore::new();
        assert!(store.is_empty());

        store.put("Tom", &plan("Tom")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Tom").unwrap(), Some(plan("Tom")));
        assert!(store.get("Jerry").unwrap().is_none());
    }

    #[test]
    fn test_poisoned_lock_still_counts_plans() {
        let store = Arc::new(MemoryPlanStore::new());
        store.put("Tom", &plan("Tom")).unwrap();

        let shared = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = shared.plans.lock().unwrap();
            panic!("panic while holding the plan lock");
        })
        .join();

        assert!(store.plans.is_poisoned());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(store.get("Tom").unwrap().is_some());
    }
}
