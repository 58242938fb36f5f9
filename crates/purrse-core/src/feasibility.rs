//! Feasibility calculator
//!
//! Turns a monthly summary and a savings goal into a feasibility report with
//! a strict and a flexible plan, and raises the targets of a saved plan after
//! an overspend.
//!
//! The clock is always passed in; nothing here reads wall-clock time.
//!
//! ## Day counts
//!
//! The target date is taken as midnight UTC. The initial report rounds the
//! day count up (`ceil`), while the overspend adjustment divides by the
//! unrounded fraction of days left.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{
    Band, DailyPlan, FeasibilityReport, FlexiblePlan, Goal, MonthlyFinancialSummary, PlanSavings,
    StrictPlan,
};

/// Monthly disposable income is spread over a fixed 30-day month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Lower edge of the flexible band (-20%)
pub const FLEX_BAND_LOW: f64 = 0.8;

/// Upper edge of the flexible band (+20%)
pub const FLEX_BAND_HIGH: f64 = 1.2;

/// Share of monthly disposable income set aside for debt payment
pub const MONTHLY_DEBT_SHARE: f64 = 0.2;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days from `now` until midnight UTC of `target`
pub fn days_until(target: NaiveDate, now: DateTime<Utc>) -> f64 {
    let target_start =
        DateTime::<Utc>::from_naive_utc_and_offset(target.and_time(NaiveTime::MIN), Utc);
    (target_start - now).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Reject figures that overflowed to infinity or NaN
fn ensure_finite(label: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!("{} is out of range ({})", label, value)))
    }
}

/// Compute the feasibility report for a goal.
///
/// The goal is validated first; a day count that still comes out as zero or
/// negative is reported as `Degenerate` rather than producing an infinite
/// daily figure.
pub fn compute_feasibility(
    summary: &MonthlyFinancialSummary,
    goal: &Goal,
    now: DateTime<Utc>,
) -> Result<FeasibilityReport> {
    goal.validate(now.date_naive())?;

    let days = days_until(goal.target_date, now).ceil();
    if days <= 0.0 {
        return Err(Error::Degenerate(format!(
            "{} days left until {}",
            days, goal.target_date
        )));
    }
    let days_to_goal = days as i64;

    let disposable_income = summary.disposable_income();
    let daily_disposable_income = disposable_income / DAYS_PER_MONTH;
    let required_daily_savings = goal.target_amount / days;
    let is_achievable = required_daily_savings <= daily_disposable_income;

    let min_daily_savings = required_daily_savings * FLEX_BAND_LOW;
    let max_daily_savings = ensure_finite(
        "maximum daily savings",
        required_daily_savings * FLEX_BAND_HIGH,
    )?;
    ensure_finite("daily disposable income", daily_disposable_income)?;

    let report = FeasibilityReport {
        days_to_goal,
        daily_disposable_income,
        required_daily_savings,
        is_achievable,
        remaining_daily: daily_disposable_income - required_daily_savings,
        monthly_debt: disposable_income * MONTHLY_DEBT_SHARE,
        strict_plan: StrictPlan {
            daily_savings: required_daily_savings,
            days_to_goal,
        },
        flexi_plan: FlexiblePlan {
            min_daily_savings,
            max_daily_savings,
            min_days: (goal.target_amount / max_daily_savings).ceil() as i64,
            max_days: (goal.target_amount / min_daily_savings).ceil() as i64,
        },
    };

    debug!(
        goal = %goal.description,
        days_to_goal,
        required = required_daily_savings,
        available = daily_disposable_income,
        "Computed feasibility"
    );
    if !is_achievable {
        warn!(
            "Goal '{}' needs {:.2}/day but only {:.2}/day is disposable",
            goal.description, required_daily_savings, daily_disposable_income
        );
    }

    Ok(report)
}

/// Spread an overspent amount over the days left and raise the plan's
/// savings targets accordingly.
pub fn adjust_for_overspend(
    plan: &DailyPlan,
    overspent_amount: f64,
    now: DateTime<Utc>,
) -> Result<DailyPlan> {
    if !overspent_amount.is_finite() || overspent_amount <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "overspent amount must be positive, got {}",
            overspent_amount
        )));
    }

    let days_remaining = days_until(plan.target_date, now);
    if days_remaining <= 0.0 {
        return Err(Error::Degenerate(format!(
            "target date {} has passed for {}",
            plan.target_date, plan.username
        )));
    }

    let additional = ensure_finite(
        "additional daily savings",
        overspent_amount / days_remaining,
    )?;
    let limit = plan.daily_limit;

    let savings = match plan.savings {
        PlanSavings::Strict {
            daily_savings,
            days_to_goal,
            ..
        } => {
            let daily_savings = ensure_finite("daily savings", daily_savings + additional)?;
            PlanSavings::Strict {
                daily_savings,
                remaining_daily: limit - daily_savings,
                days_to_goal,
            }
        }
        PlanSavings::Flexible {
            daily_savings,
            min_days,
            max_days,
            ..
        } => {
            let daily_savings = Band {
                min: daily_savings.min + additional,
                max: ensure_finite("maximum daily savings", daily_savings.max + additional)?,
            };
            PlanSavings::Flexible {
                daily_savings,
                remaining_daily: Band {
                    min: limit - daily_savings.max,
                    max: limit - daily_savings.min,
                },
                min_days,
                max_days,
            }
        }
    };

    debug!(
        user = %plan.username,
        overspent = overspent_amount,
        days_remaining,
        additional,
        "Adjusted plan for overspend"
    );

    Ok(DailyPlan {
        savings,
        updated_at: Some(now),
        ..plan.clone()
    })
}
