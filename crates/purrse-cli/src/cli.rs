//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use purrse_core::PlanType;

/// Purrse - Keep your cat happy by saving
#[derive(Parser)]
#[command(name = "purrse")]
#[command(about = "Savings feasibility and daily plans for your virtual pet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/purrse/config.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding daily.json and daily_goals.json (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize this month's income and spending
    Summary {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Check whether a savings goal is achievable
    Check {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        goal: GoalArgs,
    },

    /// Manage the daily savings plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Show all saved goals combined
    Goals,

    /// Spin the reward wheel
    Spin {
        /// Seed for a reproducible spin
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Check a goal and save the chosen plan if it is achievable
    Save {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        goal: GoalArgs,

        /// Plan variant
        #[arg(long, value_enum, default_value = "strict")]
        plan: PlanTypeArg,

        /// Username (defaults to the configured user)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show the saved plan
    Show {
        /// Username (defaults to the configured user)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Raise the plan's savings targets after overspending
    Overspend {
        /// Amount spent over today's budget
        #[arg(short, long)]
        amount: f64,

        /// Username (defaults to the configured user)
        #[arg(short, long)]
        user: Option<String>,

        /// Evaluate as of this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        today: Option<String>,
    },
}

/// Transaction feed and income record inputs
#[derive(Args, Clone)]
pub struct InputArgs {
    /// Transaction feed JSON (payment_channels document)
    #[arg(long)]
    pub feed: PathBuf,

    /// Income record JSON (monthly_finances by month name)
    #[arg(long)]
    pub income: PathBuf,

    /// Evaluate as of this date (YYYY-MM-DD) instead of now
    #[arg(long)]
    pub today: Option<String>,
}

/// Savings goal inputs
#[derive(Args, Clone)]
pub struct GoalArgs {
    /// Goal name (e.g., "New Car")
    #[arg(short, long)]
    pub goal: String,

    /// Amount to save
    #[arg(short, long)]
    pub target: f64,

    /// Date to reach the goal by (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PlanTypeArg {
    Strict,
    Flexible,
}

impl From<PlanTypeArg> for PlanType {
    fn from(arg: PlanTypeArg) -> Self {
        match arg {
            PlanTypeArg::Strict => PlanType::Strict,
            PlanTypeArg::Flexible => PlanType::Flexible,
        }
    }
}
