//! Monthly summary builder
//!
//! Flattens the per-channel transaction groups of a feed into one list and
//! folds the records of the current month into category and payment-method
//! totals, alongside the month's income and planned savings.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    IncomeRecord, MonthlyFinancialSummary, PaymentChannel, Period, Transaction, TransactionFeed,
    Usage,
};

fn tag(usages: &[Usage], channel: PaymentChannel, source_id: Option<&str>) -> Vec<Transaction> {
    usages
        .iter()
        .map(|u| Transaction {
            date: u.date,
            amount: u.amount,
            category: u.category.clone(),
            description: u.description.clone(),
            channel,
            source_id: source_id.map(str::to_string),
        })
        .collect()
}

/// Concatenate every channel of the feed, e-wallet first, then debit cards,
/// credit cards and bank accounts.
pub fn flatten_feed(feed: &TransactionFeed) -> Vec<Transaction> {
    let channels = &feed.payment_channels;
    let mut all = Vec::new();

    if let Some(ewallet) = &channels.ewallet {
        all.extend(tag(&ewallet.usages, PaymentChannel::EWallet, None));
    }
    for card in &channels.debit_cards {
        all.extend(tag(
            &card.usages,
            PaymentChannel::DebitCard,
            card.card_number.as_deref(),
        ));
    }
    for card in &channels.credit_cards {
        all.extend(tag(
            &card.usages,
            PaymentChannel::CreditCard,
            card.card_number.as_deref(),
        ));
    }
    for account in &channels.bank_accounts {
        all.extend(tag(
            &account.transactions,
            PaymentChannel::BankAccount,
            account.account_number.as_deref(),
        ));
    }

    all
}

/// Build the summary for the month containing `today`.
///
/// Fails with `NotFound` when the income record has no entry for that month.
pub fn build_monthly_summary(
    feed: &TransactionFeed,
    income: &IncomeRecord,
    today: NaiveDate,
) -> Result<MonthlyFinancialSummary> {
    let period = Period::containing(today);
    let finances = income.for_month(period.month).ok_or_else(|| {
        Error::NotFound(format!("no income entry for {}", period.month))
    })?;

    let transactions = flatten_feed(feed);

    let mut total_spending = 0.0;
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_method: BTreeMap<PaymentChannel, f64> = BTreeMap::new();

    for tx in transactions.iter().filter(|tx| period.contains(tx.date)) {
        total_spending += tx.amount;
        *by_category.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
        *by_method.entry(tx.channel).or_insert(0.0) += tx.amount;
    }

    let summary = MonthlyFinancialSummary {
        period,
        income: finances.total_income,
        planned_savings: finances.total_savings,
        total_spending,
        spending_by_category: by_category,
        spending_by_payment_method: by_method,
        transaction_count: transactions.len(),
    };

    debug!(
        period = %summary.period,
        income = summary.income,
        planned_savings = summary.planned_savings,
        total_spending = summary.total_spending,
        disposable_income = summary.disposable_income(),
        transactions = summary.transaction_count,
        "Built monthly summary"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccount, Card, EWallet, Month, MonthlyFinances, PaymentChannels};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usage(date: NaiveDate, amount: f64, category: &str) -> Usage {
        Usage {
            date,
            amount,
            category: category.to_string(),
            description: None,
        }
    }

    fn sample_feed() -> TransactionFeed {
        TransactionFeed {
            payment_channels: PaymentChannels {
                ewallet: Some(EWallet {
                    usages: vec![
                        usage(date(2026, 10, 2), 12.50, "Food"),
                        usage(date(2026, 9, 28), 99.0, "Food"),
                    ],
                }),
                debit_cards: vec![Card {
                    card_number: Some("4111-0001".to_string()),
                    usages: vec![usage(date(2026, 10, 5), 40.0, "Transport")],
                }],
                credit_cards: vec![Card {
                    card_number: Some("5500-0002".to_string()),
                    usages: vec![usage(date(2026, 10, 9), 200.0, "Shopping")],
                }],
                bank_accounts: vec![BankAccount {
                    account_number: Some("ACC-1".to_string()),
                    transactions: vec![usage(date(2026, 10, 1), 1200.0, "Rent")],
                }],
            },
        }
    }

    fn income(month: Month) -> IncomeRecord {
        let mut record = IncomeRecord::default();
        record.user.monthly_finances.insert(
            month,
            MonthlyFinances {
                total_income: 5000.0,
                total_savings: 500.0,
            },
        );
        record
    }

    #[test]
    fn test_flatten_tags_channels() {
        let all = flatten_feed(&sample_feed());
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].channel, PaymentChannel::EWallet);
        assert_eq!(all[0].source_id, None);
        assert_eq!(all[2].channel, PaymentChannel::DebitCard);
        assert_eq!(all[2].source_id.as_deref(), Some("4111-0001"));
        assert_eq!(all[4].channel, PaymentChannel::BankAccount);
        assert_eq!(all[4].source_id.as_deref(), Some("ACC-1"));
    }

    #[test]
    fn test_summary_filters_to_current_month() {
        let summary =
            build_monthly_summary(&sample_feed(), &income(Month::October), date(2026, 10, 18))
                .unwrap();

        assert_eq!(summary.period.month, Month::October);
        assert_eq!(summary.period.year, 2026);
        assert!((summary.total_spending - 1452.50).abs() < 1e-9);
        assert_eq!(summary.spending_by_category.get("Food"), Some(&12.50));
        assert!(!summary.spending_by_category.contains_key("Groceries"));
        assert_eq!(
            summary.spending_by_payment_method.get(&PaymentChannel::CreditCard),
            Some(&200.0)
        );
        assert_eq!(summary.transaction_count, 5);
        assert!((summary.disposable_income() - 3047.50).abs() < 1e-9);
    }

    #[test]
    fn test_transaction_count_includes_other_months() {
        let feed = TransactionFeed {
            payment_channels: PaymentChannels {
                ewallet: Some(EWallet {
                    usages: vec![
                        usage(date(2026, 10, 3), 20.0, "Food"),
                        usage(date(2026, 9, 30), 35.0, "Food"),
                    ],
                }),
                ..PaymentChannels::default()
            },
        };
        let summary =
            build_monthly_summary(&feed, &income(Month::October), date(2026, 10, 18)).unwrap();

        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.total_spending, 20.0);
    }

    #[test]
    fn test_summary_same_month_other_year_excluded() {
        let summary =
            build_monthly_summary(&sample_feed(), &income(Month::October), date(2025, 10, 18))
                .unwrap();
        assert_eq!(summary.total_spending, 0.0);
        assert!(summary.spending_by_category.is_empty());
    }

    #[test]
    fn test_summary_empty_feed() {
        let summary = build_monthly_summary(
            &TransactionFeed::default(),
            &income(Month::October),
            date(2026, 10, 18),
        )
        .unwrap();
        assert_eq!(summary.total_spending, 0.0);
        assert_eq!(summary.transaction_count, 0);
        assert_eq!(summary.disposable_income(), 4500.0);
    }

    #[test]
    fn test_summary_missing_income_month() {
        let result =
            build_monthly_summary(&sample_feed(), &income(Month::November), date(2026, 10, 18));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_summary_can_be_negative() {
        let mut feed = sample_feed();
        feed.payment_channels
            .credit_cards
            .push(Card {
                card_number: None,
                usages: vec![usage(date(2026, 10, 10), 5000.0, "Travel")],
            });
        let summary =
            build_monthly_summary(&feed, &income(Month::October), date(2026, 10, 18)).unwrap();
        assert!(summary.disposable_income() < 0.0);
    }
}
