//! Domain models for Purrse

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// Calendar
// =============================================================================

/// Calendar month, serialized by its English name ("November")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub fn all() -> &'static [Month] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    /// Month of the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self::all()[date.month0() as usize]
    }

    /// 1-based month number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|m| {
                let name = m.as_str().to_lowercase();
                name == needle || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| format!("Unknown month: {}", s))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calendar month in a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub month: Month,
    pub year: i32,
}

impl Period {
    /// The period a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: Month::from_date(date),
            year: date.year(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

// =============================================================================
// Transaction feed
// =============================================================================

/// Channel a transaction was paid through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentChannel {
    #[serde(rename = "eWallet")]
    EWallet,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Account")]
    BankAccount,
}

impl PaymentChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EWallet => "eWallet",
            Self::DebitCard => "Debit Card",
            Self::CreditCard => "Credit Card",
            Self::BankAccount => "Bank Account",
        }
    }
}

impl std::fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single spending record as it appears in the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EWallet {
    #[serde(default)]
    pub usages: Vec<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub usages: Vec<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Usage>,
}

/// Transaction groups per payment channel. Any group may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentChannels {
    #[serde(default)]
    pub ewallet: Option<EWallet>,
    #[serde(default)]
    pub debit_cards: Vec<Card>,
    #[serde(default)]
    pub credit_cards: Vec<Card>,
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
}

/// Top-level transaction feed document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionFeed {
    #[serde(default)]
    pub payment_channels: PaymentChannels,
}

/// A feed record flattened together with its channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    pub channel: PaymentChannel,
    /// Card or account number the record came from (informational only)
    pub source_id: Option<String>,
}

// =============================================================================
// Income
// =============================================================================

/// Income and planned savings for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinances {
    pub total_income: f64,
    pub total_savings: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeUser {
    #[serde(default)]
    pub monthly_finances: BTreeMap<Month, MonthlyFinances>,
}

/// Income record document, keyed by month
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeRecord {
    #[serde(default)]
    pub user: IncomeUser,
}

impl IncomeRecord {
    pub fn for_month(&self, month: Month) -> Option<&MonthlyFinances> {
        self.user.monthly_finances.get(&month)
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Income, savings and spending totals for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinancialSummary {
    pub period: Period,
    pub income: f64,
    pub planned_savings: f64,
    pub total_spending: f64,
    pub spending_by_category: BTreeMap<String, f64>,
    pub spending_by_payment_method: BTreeMap<PaymentChannel, f64>,
    /// Records seen across all channels, before filtering to the period
    pub transaction_count: usize,
}

impl MonthlyFinancialSummary {
    /// Income minus planned savings minus spending. Negative when overspent.
    pub fn disposable_income(&self) -> f64 {
        self.income - self.planned_savings - self.total_spending
    }
}

// =============================================================================
// Goals and plans
// =============================================================================

/// Plan variant the user picks after reviewing feasibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Strict,
    Flexible,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Flexible => "flexible",
        }
    }
}

impl std::str::FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "flexible" | "flexi" => Ok(Self::Flexible),
            _ => Err(format!("Unknown plan type: {}", s)),
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A savings goal entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub description: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<PlanType>,
}

impl Goal {
    pub fn new(description: impl Into<String>, target_amount: f64, target_date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            target_amount,
            target_date,
            plan_type: None,
        }
    }

    /// Reject goals that cannot produce a plan
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "target amount must be positive, got {}",
                self.target_amount
            )));
        }
        if self.target_date <= today {
            return Err(Error::InvalidInput(format!(
                "target date {} is not after {}",
                self.target_date, today
            )));
        }
        Ok(())
    }
}

/// Fixed daily savings figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrictPlan {
    pub daily_savings: f64,
    pub days_to_goal: i64,
}

/// Band of daily savings figures and the matching day range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexiblePlan {
    pub min_daily_savings: f64,
    pub max_daily_savings: f64,
    pub min_days: i64,
    pub max_days: i64,
}

/// Result of a feasibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    pub days_to_goal: i64,
    pub daily_disposable_income: f64,
    pub required_daily_savings: f64,
    pub is_achievable: bool,
    pub remaining_daily: f64,
    pub monthly_debt: f64,
    pub strict_plan: StrictPlan,
    pub flexi_plan: FlexiblePlan,
}

impl FeasibilityReport {
    /// User-facing summary lines, amounts to two decimals
    pub fn recommendations(&self, currency: &str) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Required daily saving: {} {:.2} for {} days",
                currency, self.required_daily_savings, self.days_to_goal
            ),
            format!(
                "Available daily spending: {} {:.2}",
                currency, self.daily_disposable_income
            ),
        ];

        if self.is_achievable {
            lines.push(format!(
                "Your goal is achievable! You'll have {} {:.2} remaining daily after savings.",
                currency, self.remaining_daily
            ));
            lines.push(format!(
                "Flexible option: save {} {:.2} to {} {:.2} daily ({} to {} days)",
                currency,
                self.flexi_plan.min_daily_savings,
                currency,
                self.flexi_plan.max_daily_savings,
                self.flexi_plan.min_days,
                self.flexi_plan.max_days
            ));
        } else {
            lines.push(format!(
                "Warning: the required {} {:.2} per day exceeds your daily disposable income of {} {:.2}. Consider a smaller target or a later date.",
                currency, self.required_daily_savings, currency, self.daily_disposable_income
            ));
        }

        lines
    }
}

/// Lower and upper bound of a daily figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

/// Savings targets of a persisted plan, tagged by plan type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "planType", rename_all = "lowercase")]
pub enum PlanSavings {
    #[serde(rename_all = "camelCase")]
    Strict {
        daily_savings: f64,
        remaining_daily: f64,
        days_to_goal: i64,
    },
    #[serde(rename_all = "camelCase")]
    Flexible {
        daily_savings: Band,
        remaining_daily: Band,
        min_days: i64,
        max_days: i64,
    },
}

impl PlanSavings {
    pub fn plan_type(&self) -> PlanType {
        match self {
            Self::Strict { .. } => PlanType::Strict,
            Self::Flexible { .. } => PlanType::Flexible,
        }
    }
}

/// The plan a user committed to, one per username
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub username: String,
    pub goal: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    /// Daily disposable income when the plan was saved
    pub daily_limit: f64,
    pub monthly_debt: f64,
    #[serde(flatten)]
    pub savings: PlanSavings,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 11, 3).unwrap();
        assert_eq!(Month::from_date(date), Month::November);
        assert_eq!(Month::November.number(), 11);
    }

    #[test]
    fn test_month_parse() {
        assert_eq!("november".parse::<Month>().unwrap(), Month::November);
        assert_eq!("Jan".parse::<Month>().unwrap(), Month::January);
        assert!("Smarch".parse::<Month>().is_err());
    }

    #[test]
    fn test_period_contains() {
        let period = Period::containing(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
        assert!(period.contains(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
        assert_eq!(period.to_string(), "February 2026");
    }

    #[test]
    fn test_income_record_keyed_by_month_name() {
        let json = r#"{"user":{"monthly_finances":{"November":{"total_income":5000,"total_savings":500}}}}"#;
        let record: IncomeRecord = serde_json::from_str(json).unwrap();
        let finances = record.for_month(Month::November).unwrap();
        assert_eq!(finances.total_income, 5000.0);
        assert!(record.for_month(Month::December).is_none());
    }

    #[test]
    fn test_feed_missing_groups_default_to_empty() {
        let feed: TransactionFeed = serde_json::from_str(r#"{"payment_channels":{}}"#).unwrap();
        assert!(feed.payment_channels.ewallet.is_none());
        assert!(feed.payment_channels.debit_cards.is_empty());
    }

    #[test]
    fn test_goal_validate() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let later = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();

        assert!(Goal::new("New Car", 3000.0, later).validate(today).is_ok());
        assert!(matches!(
            Goal::new("New Car", 0.0, later).validate(today),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Goal::new("New Car", f64::NAN, later).validate(today),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Goal::new("New Car", 3000.0, today).validate(today),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_plan_savings_tagged_json() {
        let savings = PlanSavings::Flexible {
            daily_savings: Band { min: 40.0, max: 60.0 },
            remaining_daily: Band { min: 20.0, max: 40.0 },
            min_days: 50,
            max_days: 75,
        };
        let value = serde_json::to_value(savings).unwrap();
        assert_eq!(value["planType"], "flexible");
        assert_eq!(value["dailySavings"]["max"], 60.0);
        assert_eq!(savings.plan_type(), PlanType::Flexible);
    }

    #[test]
    fn test_plan_type_parse() {
        assert_eq!("Strict".parse::<PlanType>().unwrap(), PlanType::Strict);
        assert_eq!("flexi".parse::<PlanType>().unwrap(), PlanType::Flexible);
        assert!("loose".parse::<PlanType>().is_err());
    }
}
