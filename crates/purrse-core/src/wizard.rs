//! Goal-setting wizard
//!
//! ```text
//! CollectingGoalName -> CollectingTarget -> ReviewingFeasibility
//!     achievable:     -> ChoosingPlanVariant -> Saved
//!     not achievable: -> EditingGoal -> CollectingTarget
//! ```
//!
//! Nothing is persisted until the final step; the wizard itself lives only
//! as long as the caller's session.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::feasibility::compute_feasibility;
use crate::models::{DailyPlan, FeasibilityReport, Goal, MonthlyFinancialSummary, PlanType};
use crate::plans::save_plan;
use crate::store::PlanStore;

#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    CollectingGoalName,
    CollectingTarget {
        description: String,
    },
    ReviewingFeasibility {
        goal: Goal,
        report: FeasibilityReport,
    },
    ChoosingPlanVariant {
        goal: Goal,
        report: FeasibilityReport,
    },
    EditingGoal {
        goal: Goal,
    },
    Saved {
        plan: DailyPlan,
    },
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CollectingGoalName => "collecting goal name",
            Self::CollectingTarget { .. } => "collecting target",
            Self::ReviewingFeasibility { .. } => "reviewing feasibility",
            Self::ChoosingPlanVariant { .. } => "choosing plan variant",
            Self::EditingGoal { .. } => "editing goal",
            Self::Saved { .. } => "saved",
        }
    }
}

/// Drives one goal from its name to a saved plan
#[derive(Debug)]
pub struct GoalWizard {
    state: WizardState,
}

impl Default for GoalWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalWizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::CollectingGoalName,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn is_saved(&self) -> bool {
        matches!(self.state, WizardState::Saved { .. })
    }

    fn illegal(&self, action: &str) -> Error {
        Error::InvalidInput(format!("cannot {} while {}", action, self.state.name()))
    }

    pub fn set_name(&mut self, description: &str) -> Result<()> {
        if !matches!(self.state, WizardState::CollectingGoalName) {
            return Err(self.illegal("name the goal"));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::InvalidInput("goal name is empty".to_string()));
        }
        self.state = WizardState::CollectingTarget {
            description: description.to_string(),
        };
        Ok(())
    }

    /// Enter amount and date, and compute feasibility against `summary`.
    ///
    /// Invalid input leaves the wizard where it was so the user can retry.
    pub fn set_target(
        &mut self,
        target_amount: f64,
        target_date: NaiveDate,
        summary: &MonthlyFinancialSummary,
        now: DateTime<Utc>,
    ) -> Result<&FeasibilityReport> {
        let description = match &self.state {
            WizardState::CollectingTarget { description } => description.clone(),
            _ => return Err(self.illegal("set a target")),
        };

        let goal = Goal::new(description, target_amount, target_date);
        let report = compute_feasibility(summary, &goal, now)?;
        self.state = WizardState::ReviewingFeasibility { goal, report };

        match &self.state {
            WizardState::ReviewingFeasibility { report, .. } => Ok(report),
            _ => Err(self.illegal("review")),
        }
    }

    /// Leave the review step. Returns whether the goal was achievable.
    pub fn confirm_review(&mut self) -> Result<bool> {
        let state = std::mem::replace(&mut self.state, WizardState::CollectingGoalName);
        match state {
            WizardState::ReviewingFeasibility { goal, report } => {
                let achievable = report.is_achievable;
                self.state = if achievable {
                    WizardState::ChoosingPlanVariant { goal, report }
                } else {
                    WizardState::EditingGoal { goal }
                };
                Ok(achievable)
            }
            other => {
                self.state = other;
                Err(self.illegal("confirm the review"))
            }
        }
    }

    /// Go back to entering a target for the goal being edited
    pub fn edit(&mut self) -> Result<()> {
        let description = match &self.state {
            WizardState::EditingGoal { goal } => goal.description.clone(),
            _ => return Err(self.illegal("edit the goal")),
        };
        self.state = WizardState::CollectingTarget { description };
        Ok(())
    }

    /// Pick the plan variant and persist it
    pub fn choose_plan(
        &mut self,
        plan_type: PlanType,
        store: &dyn PlanStore,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<&DailyPlan> {
        let (goal, report) = match &self.state {
            WizardState::ChoosingPlanVariant { goal, report } => (goal, report),
            _ => return Err(self.illegal("choose a plan")),
        };

        let mut goal = goal.clone();
        goal.plan_type = Some(plan_type);
        let plan = save_plan(store, username, &goal, report, plan_type, now)?;
        self.state = WizardState::Saved { plan };

        match &self.state {
            WizardState::Saved { plan } => Ok(plan),
            _ => Err(self.illegal("save")),
        }
    }
}
