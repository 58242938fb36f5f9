//! Purrse Core Library
//!
//! Shared functionality for the Purrse savings companion:
//! - Monthly summary of spending across payment channels
//! - Savings feasibility with strict and flexible plans
//! - Overspend adjustment of saved plans
//! - JSON plan storage keyed by username
//! - Combined view over all saved goals
//! - Spin-wheel furniture rewards
//! - Goal-setting wizard
//! - Layered TOML configuration

pub mod config;
pub mod error;
pub mod feasibility;
pub mod goals;
pub mod models;
pub mod plans;
pub mod rewards;
pub mod store;
pub mod summary;
pub mod wizard;

pub use config::Config;
pub use error::{Error, Result};
pub use feasibility::{
    adjust_for_overspend, compute_feasibility, DAYS_PER_MONTH, FLEX_BAND_HIGH, FLEX_BAND_LOW,
    MONTHLY_DEBT_SHARE,
};
pub use goals::{aggregate_goals, CombinedGoals, GoalEntry};
pub use models::{
    Band, DailyPlan, FeasibilityReport, FlexiblePlan, Goal, IncomeRecord, Month,
    MonthlyFinancialSummary, PaymentChannel, Period, PlanSavings, PlanType, StrictPlan,
    Transaction, TransactionFeed,
};
pub use plans::{apply_overspend, save_plan};
pub use rewards::{spin, Furniture, Rarity, Reward};
pub use store::{GoalLog, JsonPlanStore, MemoryPlanStore, PlanStore};
pub use summary::{build_monthly_summary, flatten_feed};
pub use wizard::{GoalWizard, WizardState};
