//! Summary and feasibility check commands

use anyhow::Result;
use purrse_core::{
    build_monthly_summary, compute_feasibility, FeasibilityReport, Goal, MonthlyFinancialSummary,
};

use super::{load_inputs, parse_date, resolve_now, truncate, Context};
use crate::cli::{GoalArgs, InputArgs};

/// Build the summary for the month of `--today` (or now)
pub fn summarize(inputs: &InputArgs) -> Result<MonthlyFinancialSummary> {
    let now = resolve_now(inputs.today.as_deref())?;
    let (feed, income) = load_inputs(inputs)?;
    Ok(build_monthly_summary(&feed, &income, now.date_naive())?)
}

/// Goal described by the command-line arguments
pub fn goal_from_args(args: &GoalArgs) -> Result<Goal> {
    let date = parse_date(&args.date, "--date")?;
    Ok(Goal::new(args.goal.trim(), args.target, date))
}

pub fn cmd_summary(ctx: &Context, inputs: &InputArgs) -> Result<()> {
    let summary = summarize(inputs)?;

    if ctx.json {
        return ctx.print_json(&summary);
    }

    let cur = ctx.currency();
    println!();
    println!("📊 Financial Summary");
    println!("   Period: {}", summary.period);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Income:            {} {:>10.2}", cur, summary.income);
    println!("   Planned savings:   {} {:>10.2}", cur, summary.planned_savings);
    println!("   Total spending:    {} {:>10.2}", cur, summary.total_spending);
    println!(
        "   Disposable income: {} {:>10.2}",
        cur,
        summary.disposable_income()
    );
    println!("   Transactions:      {}", summary.transaction_count);

    if summary.spending_by_category.is_empty() {
        println!();
        println!("   No spending found in this period.");
        return Ok(());
    }

    println!();
    println!("   {:25} │ {:>12}", "Category", "Amount");
    println!("   ──────────────────────────┼─────────────");
    for (category, amount) in &summary.spending_by_category {
        println!("   {:25} │ {:>12.2}", truncate(category, 25), amount);
    }

    println!();
    println!("   {:25} │ {:>12}", "Payment method", "Amount");
    println!("   ──────────────────────────┼─────────────");
    for (method, amount) in &summary.spending_by_payment_method {
        println!("   {:25} │ {:>12.2}", method.as_str(), amount);
    }

    Ok(())
}

/// Print a feasibility report in the CLI's house style
pub fn print_report(ctx: &Context, goal: &Goal, report: &FeasibilityReport) {
    let cur = ctx.currency();
    println!();
    if report.is_achievable {
        println!("✅ {} is achievable", goal.description);
    } else {
        println!("⚠️  {} is not achievable yet", goal.description);
    }
    println!(
        "   Target: {} {:.2} by {} ({} days)",
        cur, goal.target_amount, goal.target_date, report.days_to_goal
    );
    println!("   ─────────────────────────────────────────────────────────────");
    for line in report.recommendations(cur) {
        println!("   {}", line);
    }
}

pub fn cmd_check(ctx: &Context, inputs: &InputArgs, goal_args: &GoalArgs) -> Result<()> {
    let now = resolve_now(inputs.today.as_deref())?;
    let summary = summarize(inputs)?;
    let goal = goal_from_args(goal_args)?;
    let report = compute_feasibility(&summary, &goal, now)?;

    if ctx.json {
        return ctx.print_json(&report);
    }

    print_report(ctx, &goal, &report);
    Ok(())
}
