//! Daily plan commands

use anyhow::{bail, Context as _, Result};
use purrse_core::{
    apply_overspend, DailyPlan, GoalEntry, GoalWizard, PlanSavings, PlanStore, PlanType,
};

use super::{goal_from_args, print_report, resolve_now, summarize, Context};
use crate::cli::{GoalArgs, InputArgs};

/// Walk the goal wizard non-interactively and save the chosen plan
pub fn cmd_plan_save(
    ctx: &Context,
    inputs: &InputArgs,
    goal_args: &GoalArgs,
    plan_type: PlanType,
    user: Option<&str>,
) -> Result<()> {
    let now = resolve_now(inputs.today.as_deref())?;
    let summary = summarize(inputs)?;
    let goal = goal_from_args(goal_args)?;
    let username = ctx.username(user);
    let store = ctx.plan_store();

    let mut wizard = GoalWizard::new();
    wizard.set_name(&goal.description)?;
    let report = wizard
        .set_target(goal.target_amount, goal.target_date, &summary, now)?
        .clone();

    if !wizard.confirm_review()? {
        if !ctx.json {
            print_report(ctx, &goal, &report);
            println!();
        }
        bail!(
            "Goal '{}' is not achievable; try a smaller target or a later date",
            goal.description
        );
    }

    let plan = wizard
        .choose_plan(plan_type, &store, &username, now)?
        .clone();
    record_goal(ctx, &plan)?;

    if ctx.json {
        return ctx.print_json(&plan);
    }

    print_plan(ctx, &plan);
    println!();
    println!("✅ Plan saved for {}", username);
    Ok(())
}

pub fn cmd_plan_show(ctx: &Context, user: Option<&str>) -> Result<()> {
    let username = ctx.username(user);
    let plan = ctx.plan_store().get(&username)?;

    match plan {
        Some(plan) if ctx.json => ctx.print_json(&plan),
        Some(plan) => {
            print_plan(ctx, &plan);
            Ok(())
        }
        None if ctx.json => ctx.print_json(&serde_json::Value::Null),
        None => {
            println!("No plan saved for {} yet. Run:", username);
            println!("  purrse plan save --feed F --income I -g GOAL -t AMOUNT -d DATE");
            Ok(())
        }
    }
}

pub fn cmd_plan_overspend(
    ctx: &Context,
    amount: f64,
    user: Option<&str>,
    today: Option<&str>,
) -> Result<()> {
    let now = resolve_now(today)?;
    let username = ctx.username(user);
    let store = ctx.plan_store();

    let updated = apply_overspend(&store, &username, amount, now)?;
    record_goal(ctx, &updated)?;

    if ctx.json {
        return ctx.print_json(&updated);
    }

    println!(
        "🙀 Overspent {} {:.2}; savings targets raised",
        ctx.currency(),
        amount
    );
    print_plan(ctx, &updated);
    Ok(())
}

/// Append a plan to the goal log once the plan itself is on disk
fn record_goal(ctx: &Context, plan: &DailyPlan) -> Result<()> {
    let log = ctx.goal_log();
    log.append(GoalEntry::from_plan(plan)).with_context(|| {
        format!(
            "Plan for {} was saved, but recording goal '{}' in {} failed",
            plan.username,
            plan.goal,
            log.path().display()
        )
    })
}

/// Print a saved plan
pub fn print_plan(ctx: &Context, plan: &DailyPlan) {
    let cur = ctx.currency();
    println!();
    println!("🐱 {}'s {} plan: {}", plan.username, plan.savings.plan_type(), plan.goal);
    println!(
        "   Target: {} {:.2} by {}",
        cur, plan.target_amount, plan.target_date
    );
    println!("   ─────────────────────────────────────────────────────────────");
    match plan.savings {
        PlanSavings::Strict {
            daily_savings,
            remaining_daily,
            days_to_goal,
        } => {
            println!("   Save daily:      {} {:.2}", cur, daily_savings);
            println!("   Left to spend:   {} {:.2}", cur, remaining_daily);
            println!("   Days to goal:    {}", days_to_goal);
        }
        PlanSavings::Flexible {
            daily_savings,
            remaining_daily,
            min_days,
            max_days,
        } => {
            println!(
                "   Save daily:      {} {:.2} - {:.2}",
                cur, daily_savings.min, daily_savings.max
            );
            println!(
                "   Left to spend:   {} {:.2} - {:.2}",
                cur, remaining_daily.min, remaining_daily.max
            );
            println!("   Days to goal:    {} - {}", min_days, max_days);
        }
    }
    println!("   Daily limit:     {} {:.2}", cur, plan.daily_limit);
    println!("   Monthly debt:    {} {:.2}", cur, plan.monthly_debt);
}
