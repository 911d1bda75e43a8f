//! Budget planner inputs and the plan derived from them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the user expresses the amount they want to set aside each month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsType {
    #[default]
    Amount,
    Percentage,
}

/// Horizon of the user's primary savings goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalHorizon {
    #[default]
    ShortTerm,
    LongTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingBehavior {
    Saver,
    #[default]
    Balanced,
    Spender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingStyle {
    #[default]
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

macro_rules! impl_from_str {
    ($ty:ty, $( $text:literal => $variant:expr ),+ $(,)?) => {
        impl FromStr for $ty {
            type Err = String;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $( $text => Ok($variant), )+
                    other => Err(format!("unknown value `{}`", other)),
                }
            }
        }
    };
}

impl_from_str!(SavingsType, "amount" => SavingsType::Amount, "percentage" => SavingsType::Percentage);
impl_from_str!(GoalHorizon, "short-term" => GoalHorizon::ShortTerm, "long-term" => GoalHorizon::LongTerm);
impl_from_str!(
    SpendingBehavior,
    "saver" => SpendingBehavior::Saver,
    "balanced" => SpendingBehavior::Balanced,
    "spender" => SpendingBehavior::Spender,
);
impl_from_str!(SavingStyle, "manual" => SavingStyle::Manual, "automatic" => SavingStyle::Automatic);
impl_from_str!(
    KnowledgeLevel,
    "beginner" => KnowledgeLevel::Beginner,
    "intermediate" => KnowledgeLevel::Intermediate,
    "advanced" => KnowledgeLevel::Advanced,
);

/// Household income, expenses and preferences captured by the budget planner form.
///
/// Every amount is monthly and defaults to `0.0` when the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetInputs {
    pub primary_income: f64,
    pub secondary_income: f64,
    pub passive_income: f64,

    pub rent: f64,
    pub food: f64,
    pub transport: f64,
    pub utilities: f64,

    pub loan_emi: f64,
    pub insurance: f64,
    pub subscriptions: f64,
    pub education: f64,

    pub entertainment: f64,
    pub shopping: f64,
    pub healthcare: f64,
    pub miscellaneous: f64,

    pub savings_type: SavingsType,
    pub savings_amount: f64,
    pub savings_percentage: f64,

    pub goal_type: GoalHorizon,
    pub target_amount: f64,
    pub current_savings: f64,
    pub retirement_contribution: f64,

    pub spending_behavior: SpendingBehavior,
    pub saving_style: SavingStyle,
    pub knowledge_level: KnowledgeLevel,
    pub household_size: u32,
}

/// A named group of expense lines, e.g. the core living costs.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseGroup {
    pub name: &'static str,
    pub items: [(&'static str, f64); 4],
}

impl ExpenseGroup {
    pub fn total(&self) -> f64 {
        self.items.iter().map(|(_, amount)| amount).sum()
    }
}

impl BudgetInputs {
    pub fn total_income(&self) -> f64 {
        self.primary_income + self.secondary_income + self.passive_income
    }

    /// Expenses split into core, fixed and variable groups, in display order.
    pub fn expense_groups(&self) -> [ExpenseGroup; 3] {
        [
            ExpenseGroup {
                name: "core",
                items: [
                    ("Rent", self.rent),
                    ("Food", self.food),
                    ("Transport", self.transport),
                    ("Utilities", self.utilities),
                ],
            },
            ExpenseGroup {
                name: "fixed",
                items: [
                    ("Loan EMI", self.loan_emi),
                    ("Insurance", self.insurance),
                    ("Subscriptions", self.subscriptions),
                    ("Education", self.education),
                ],
            },
            ExpenseGroup {
                name: "variable",
                items: [
                    ("Entertainment", self.entertainment),
                    ("Shopping", self.shopping),
                    ("Healthcare", self.healthcare),
                    ("Miscellaneous", self.miscellaneous),
                ],
            },
        ]
    }

    pub fn total_expenses(&self) -> f64 {
        self.expense_groups().iter().map(ExpenseGroup::total).sum()
    }
}

/// Named needs/wants/savings split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationRule {
    #[serde(rename = "60/20/20")]
    SixtyTwentyTwenty,
    #[serde(rename = "50/30/20")]
    FiftyThirtyTwenty,
    #[serde(rename = "70/20/10")]
    SeventyTwentyTen,
}

impl AllocationRule {
    /// Needs, wants and savings percentages. Always sums to 100.
    pub fn percentages(self) -> (f64, f64, f64) {
        match self {
            AllocationRule::SixtyTwentyTwenty => (60.0, 20.0, 20.0),
            AllocationRule::FiftyThirtyTwenty => (50.0, 30.0, 20.0),
            AllocationRule::SeventyTwentyTen => (70.0, 20.0, 10.0),
        }
    }
}

impl fmt::Display for AllocationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (needs, wants, savings) = self.percentages();
        write!(f, "{needs}/{wants}/{savings}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub suggested_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationBucket {
    pub percentage: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub rule: AllocationRule,
    pub needs: AllocationBucket,
    pub wants: AllocationBucket,
    pub savings: AllocationBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsProgress {
    pub current: f64,
    pub target: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub surplus: f64,
    pub savings_rate: f64,
}

/// Budget plan derived from [`BudgetInputs`]. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub summary: BudgetSummary,
    pub allocation: BudgetAllocation,
    pub expense_breakdown: Vec<ExpenseItem>,
    pub savings_progress: SavingsProgress,
    pub cash_flow: CashFlow,
    pub assumptions: Vec<String>,
}
