//! Combined goals command

use anyhow::Result;
use purrse_core::aggregate_goals;

use super::Context;

pub fn cmd_goals(ctx: &Context) -> Result<()> {
    let entries = ctx.goal_log().entries()?;
    let combined = aggregate_goals(&entries);

    if ctx.json {
        return ctx.print_json(&combined);
    }

    let Some(combined) = combined else {
        println!("No goals saved yet.");
        return Ok(());
    };

    println!();
    println!("🎯 Combined Financial Goals ({})", combined.goals.len());
    println!("   Longest goal timeline: {} days", combined.days_to_goal);
    println!("   ─────────────────────────────────────────────────────────────");
    for line in combined.recommendations(ctx.currency()) {
        println!("   {}", line);
    }

    Ok(())
}
