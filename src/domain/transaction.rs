use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A recorded income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub notes: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub payment_type: String,
    pub user: Principal,
    pub created_at: DateTime<Utc>,
    pub transaction_type: TransactionType,
}

impl TransactionData {
    /// Builds a record stamped as created at the start of `date`.
    ///
    /// `FinanceStore::add_transaction` stamps records from its injected clock instead.
    pub fn new(
        transaction_type: TransactionType,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        user: Principal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            notes: String::new(),
            date,
            payment_type: String::new(),
            user,
            created_at: date.and_time(NaiveTime::MIN).and_utc(),
            transaction_type,
        }
    }

    pub fn income(amount: f64, category: impl Into<String>, date: NaiveDate, user: Principal) -> Self {
        Self::new(TransactionType::Income, amount, category, date, user)
    }

    pub fn expense(amount: f64, category: impl Into<String>, date: NaiveDate, user: Principal) -> Self {
        Self::new(TransactionType::Expense, amount, category, date, user)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregates {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub transaction_count: usize,
    /// Expense categories sorted by amount, largest first.
    pub expense_categories: Vec<CategoryTotal>,
}
