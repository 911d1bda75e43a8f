//! Calendar-month totals over recorded transactions.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::core::math::percent_of;
use crate::domain::common::Principal;
use crate::domain::transaction::{CategoryTotal, MonthlyAggregates, TransactionData, TransactionType};

pub struct AggregateService;

impl AggregateService {
    /// Totals for the calendar month containing `reference`.
    pub fn monthly(transactions: &[TransactionData], reference: NaiveDate) -> MonthlyAggregates {
        Self::aggregate(transactions.iter(), reference)
    }

    /// Like [`AggregateService::monthly`] but only counts transactions owned by `user`.
    pub fn monthly_for_user(
        transactions: &[TransactionData],
        user: &Principal,
        reference: NaiveDate,
    ) -> MonthlyAggregates {
        Self::aggregate(
            transactions.iter().filter(|txn| &txn.user == user),
            reference,
        )
    }

    fn aggregate<'a>(
        transactions: impl Iterator<Item = &'a TransactionData>,
        reference: NaiveDate,
    ) -> MonthlyAggregates {
        let (year, month) = (reference.year(), reference.month());
        let mut income = 0.0;
        let mut expenses = 0.0;
        let mut count = 0;
        let mut by_category: BTreeMap<String, f64> = BTreeMap::new();

        for txn in transactions.filter(|txn| txn.date.year() == year && txn.date.month() == month) {
            count += 1;
            match txn.transaction_type {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => {
                    expenses += txn.amount;
                    *by_category.entry(category_key(&txn.category)).or_insert(0.0) += txn.amount;
                }
            }
        }

        let mut expense_categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                percentage: percent_of(amount, expenses),
                category,
                amount,
            })
            .collect();
        expense_categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        tracing::debug!(year, month, income, expenses, count, "aggregated monthly transactions");

        MonthlyAggregates {
            year,
            month,
            income,
            expenses,
            net: income - expenses,
            transaction_count: count,
            expense_categories,
        }
    }
}

fn category_key(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        "Uncategorized".to_string()
    } else {
        trimmed.to_string()
    }
}
