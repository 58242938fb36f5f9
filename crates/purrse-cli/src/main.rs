//! Purrse CLI - Savings plans for a virtual pet
//!
//! Usage:
//!   purrse summary --feed F --income I           Monthly spending summary
//!   purrse check --feed F --income I -g G -t T -d D   Goal feasibility
//!   purrse plan save ... --plan flexible         Save a daily plan
//!   purrse plan overspend --amount 25            Raise targets after overspending
//!   purrse goals                                 Combined goals view
//!   purrse spin                                  Spin the reward wheel

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use purrse_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let ctx = Context::new(config, cli.json);

    match cli.command {
        Commands::Summary { inputs } => commands::cmd_summary(&ctx, &inputs),
        Commands::Check { inputs, goal } => commands::cmd_check(&ctx, &inputs, &goal),
        Commands::Plan { action } => match action {
            PlanAction::Save {
                inputs,
                goal,
                plan,
                user,
            } => commands::cmd_plan_save(&ctx, &inputs, &goal, plan.into(), user.as_deref()),
            PlanAction::Show { user } => commands::cmd_plan_show(&ctx, user.as_deref()),
            PlanAction::Overspend {
                amount,
                user,
                today,
            } => commands::cmd_plan_overspend(&ctx, amount, user.as_deref(), today.as_deref()),
        },
        Commands::Goals => commands::cmd_goals(&ctx),
        Commands::Spin { seed } => commands::cmd_spin(&ctx, seed),
    }
}
