//! Combined goals view
//!
//! Every saved plan leaves an entry in the goal log. This module folds the
//! log into a single picture: the latest entry per goal, the total daily
//! savings across goals, and whether that total still fits the daily budget.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DailyPlan, PlanSavings};

/// One saved goal as recorded in the goal log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEntry {
    pub goal: String,
    pub daily_savings_target: f64,
    pub days_to_goal: i64,
    pub daily_disposable_income: f64,
    pub monthly_debt_payment: f64,
    pub timestamp: DateTime<Utc>,
}

impl GoalEntry {
    /// Entry for a plan. Flexible plans count with the top of their band.
    pub fn from_plan(plan: &DailyPlan) -> Self {
        let (daily_savings_target, days_to_goal) = match plan.savings {
            PlanSavings::Strict {
                daily_savings,
                days_to_goal,
                ..
            } => (daily_savings, days_to_goal),
            PlanSavings::Flexible {
                daily_savings,
                min_days,
                ..
            } => (daily_savings.max, min_days),
        };

        Self {
            goal: plan.goal.clone(),
            daily_savings_target,
            days_to_goal,
            daily_disposable_income: plan.daily_limit,
            monthly_debt_payment: plan.monthly_debt,
            timestamp: plan.updated_at.unwrap_or(plan.created_at),
        }
    }
}

/// All current goals folded together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedGoals {
    /// Latest entry per goal, sorted by goal name
    pub goals: Vec<GoalEntry>,
    pub total_daily_savings: f64,
    /// Longest timeline among the goals
    pub days_to_goal: i64,
    pub daily_disposable_income: f64,
    pub monthly_debt_payment: f64,
    pub is_achievable: bool,
    /// Budget left per day after all goals; `None` when over budget
    pub remaining_daily: Option<f64>,
}

impl CombinedGoals {
    pub fn recommendations(&self, currency: &str) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Total daily savings needed: {} {:.2}",
                currency, self.total_daily_savings
            ),
            format!(
                "Available daily spending: {} {:.2}",
                currency, self.daily_disposable_income
            ),
            format!(
                "Monthly debt payment: {} {:.2}",
                currency, self.monthly_debt_payment
            ),
        ];

        for goal in &self.goals {
            lines.push(format!(
                "{}: {} {:.2} daily ({} days remaining)",
                goal.goal, currency, goal.daily_savings_target, goal.days_to_goal
            ));
        }

        match self.remaining_daily {
            Some(remaining) => lines.push(format!(
                "Your combined goals are achievable! You'll have {} {:.2} remaining daily after savings.",
                currency, remaining
            )),
            None => lines.push(format!(
                "Warning: your combined savings targets ({} {:.2}) exceed your daily disposable income ({} {:.2}). Consider adjusting your goals or timeline.",
                currency, self.total_daily_savings, currency, self.daily_disposable_income
            )),
        }

        lines
    }
}

/// Fold goal log entries into the combined view.
///
/// Entries are deduplicated by goal name (case-insensitive), keeping the most
/// recent one. Budget figures come from the most recent entry overall.
pub fn aggregate_goals(entries: &[GoalEntry]) -> Option<CombinedGoals> {
    let mut latest: HashMap<String, &GoalEntry> = HashMap::new();
    for entry in entries {
        let key = entry.goal.trim().to_lowercase();
        let newer = latest
            .get(&key)
            .map_or(true, |existing| entry.timestamp > existing.timestamp);
        if newer {
            latest.insert(key, entry);
        }
    }

    let mut goals: Vec<GoalEntry> = latest.into_values().cloned().collect();
    if goals.is_empty() {
        return None;
    }
    goals.sort_by(|a, b| a.goal.cmp(&b.goal));

    let newest = goals.iter().max_by_key(|g| g.timestamp)?;
    let daily_disposable_income = newest.daily_disposable_income;
    let monthly_debt_payment = newest.monthly_debt_payment;

    let total_daily_savings: f64 = goals.iter().map(|g| g.daily_savings_target).sum();
    let days_to_goal = goals.iter().map(|g| g.days_to_goal).max().unwrap_or(0);
    let is_achievable = total_daily_savings <= daily_disposable_income;

    Some(CombinedGoals {
        goals,
        total_daily_savings,
        days_to_goal,
        daily_disposable_income,
        monthly_debt_payment,
        is_achievable,
        remaining_daily: is_achievable.then(|| daily_disposable_income - total_daily_savings),
    })
}
