//! Saving and adjusting daily plans

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::feasibility::adjust_for_overspend;
use crate::models::{Band, DailyPlan, FeasibilityReport, Goal, PlanSavings, PlanType};
use crate::store::PlanStore;

impl DailyPlan {
    /// Build the plan a user commits to from a feasibility report
    pub fn from_report(
        username: &str,
        goal: &Goal,
        report: &FeasibilityReport,
        plan_type: PlanType,
        now: DateTime<Utc>,
    ) -> Self {
        let daily_limit = report.daily_disposable_income;

        let savings = match plan_type {
            PlanType::Strict => PlanSavings::Strict {
                daily_savings: report.strict_plan.daily_savings,
                remaining_daily: report.remaining_daily,
                days_to_goal: report.strict_plan.days_to_goal,
            },
            PlanType::Flexible => {
                let flexi = report.flexi_plan;
                PlanSavings::Flexible {
                    daily_savings: Band {
                        min: flexi.min_daily_savings,
                        max: flexi.max_daily_savings,
                    },
                    remaining_daily: Band {
                        min: daily_limit - flexi.max_daily_savings,
                        max: daily_limit - flexi.min_daily_savings,
                    },
                    min_days: flexi.min_days,
                    max_days: flexi.max_days,
                }
            }
        };

        Self {
            username: username.to_string(),
            goal: goal.description.clone(),
            target_amount: goal.target_amount,
            target_date: goal.target_date,
            daily_limit,
            monthly_debt: report.monthly_debt,
            savings,
            created_at: now,
            updated_at: None,
        }
    }
}

/// Persist the chosen plan variant for a user.
///
/// Only achievable reports can be saved; an unachievable goal sends the user
/// back to editing it.
pub fn save_plan(
    store: &dyn PlanStore,
    username: &str,
    goal: &Goal,
    report: &FeasibilityReport,
    plan_type: PlanType,
    now: DateTime<Utc>,
) -> Result<DailyPlan> {
    if !report.is_achievable {
        return Err(Error::InvalidInput(format!(
            "goal '{}' is not achievable and cannot be saved",
            goal.description
        )));
    }

    let plan = DailyPlan::from_report(username, goal, report, plan_type, now);
    store.put(username, &plan)?;
    info!(
        "Saved {} plan '{}' for {} in {} store",
        plan_type,
        goal.description,
        username,
        store.name()
    );
    Ok(plan)
}

/// Load a user's plan, raise it for an overspend, and store it back
pub fn apply_overspend(
    store: &dyn PlanStore,
    username: &str,
    overspent_amount: f64,
    now: DateTime<Utc>,
) -> Result<DailyPlan> {
    let plan = store
        .get(username)?
        .ok_or_else(|| Error::NotFound(format!("no plan saved for {}", username)))?;

    let updated = adjust_for_overspend(&plan, overspent_amount, now)?;
    store.put(username, &updated)?;
    info!(
        "Adjusted plan for {} after overspending {:.2}",
        username, overspent_amount
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::BTreeMap;

    use crate::feasibility::compute_feasibility;
    use crate::models::{Month, MonthlyFinancialSummary, Period};
    use crate::store::MemoryPlanStore;

    const USER: &str = "Tom The Cat";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap()
    }

    fn summary() -> MonthlyFinancialSummary {
        MonthlyFinancialSummary {
            period: Period {
                month: Month::October,
                year: 2026,
            },
            income: 5000.0,
            planned_savings: 500.0,
            total_spending: 2090.50,
            spending_by_category: BTreeMap::new(),
            spending_by_payment_method: BTreeMap::new(),
            transaction_count: 0,
        }
    }

    fn goal(target: f64, days: i64) -> Goal {
        Goal::new("New Car", target, (now() + Duration::days(days)).date_naive())
    }

    #[test]
    fn test_from_report_strict() {
        let g = goal(3000.0, 60);
        let report = compute_feasibility(&summary(), &g, now()).unwrap();
        let plan = DailyPlan::from_report(USER, &g, &report, PlanType::Strict, now());

        assert_eq!(plan.savings.plan_type(), PlanType::Strict);
        assert_eq!(plan.daily_limit, report.daily_disposable_income);
        assert_eq!(plan.target_date, g.target_date);
        match plan.savings {
            PlanSavings::Strict {
                daily_savings,
                remaining_daily,
                days_to_goal,
            } => {
                assert!((daily_savings - 50.0).abs() < 1e-9);
                assert_eq!(remaining_daily, report.remaining_daily);
                assert_eq!(days_to_goal, 60);
            }
            other => panic!("expected strict plan, got {:?}", other),
        }
    }

    #[test]
    fn test_from_report_flexible() {
        let g = goal(3000.0, 60);
        let report = compute_feasibility(&summary(), &g, now()).unwrap();
        let plan = DailyPlan::from_report(USER, &g, &report, PlanType::Flexible, now());

        match plan.savings {
            PlanSavings::Flexible {
                daily_savings,
                remaining_daily,
                min_days,
                max_days,
            } => {
                assert!((daily_savings.min - 40.0).abs() < 1e-9);
                assert!((daily_savings.max - 60.0).abs() < 1e-9);
                assert!(remaining_daily.min < remaining_daily.max);
                assert_eq!((min_days, max_days), (50, 75));
            }
            other => panic!("expected flexible plan, got {:?}", other),
        }
    }

    #[test]
    fn test_save_plan_stores_under_username() {
        let store = MemoryPlanStore::new();
        let g = goal(3000.0, 60);
        let report = compute_feasibility(&summary(), &g, now()).unwrap();

        let saved = save_plan(&store, USER, &g, &report, PlanType::Strict, now()).unwrap();
        assert_eq!(store.get(USER).unwrap(), Some(saved));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_plan_refuses_unachievable() {
        let store = MemoryPlanStore::new();
        let g = goal(10000.0, 30);
        let report = compute_feasibility(&summary(), &g, now()).unwrap();

        let result = save_plan(&store, USER, &g, &report, PlanType::Strict, now());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_overspend_updates_store() {
        let store = MemoryPlanStore::new();
        let g = goal(3000.0, 45);
        let report = compute_feasibility(&summary(), &g, now()).unwrap();
        save_plan(&store, USER, &g, &report, PlanType::Strict, now()).unwrap();

        let updated = apply_overspend(&store, USER, 450.0, now()).unwrap();
        assert_eq!(store.get(USER).unwrap(), Some(updated.clone()));
        match updated.savings {
            PlanSavings::Strict { daily_savings, .. } => {
                // 3000/45 + 450/45
                assert!((daily_savings - (3000.0 / 45.0 + 10.0)).abs() < 1e-9);
            }
            other => panic!("expected strict plan, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_overspend_without_plan() {
        let store = MemoryPlanStore::new();
        let result = apply_overspend(&store, USER, 100.0, now());
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
