//! Turns household income and expenses into a needs/wants/savings budget plan.

use crate::config::PlannerSettings;
use crate::core::math::percent_of;
use crate::domain::budget::{
    AllocationBucket, AllocationRule, BudgetAllocation, BudgetInputs, BudgetPlan, BudgetSummary,
    CashFlow, ExpenseItem, GoalHorizon, SavingsProgress, SavingsType,
};

/// Stateless plan generator. Every call is a pure function of its inputs.
pub struct BudgetPlanService;

impl BudgetPlanService {
    /// Generates a plan with the default planner settings.
    pub fn generate(inputs: &BudgetInputs) -> BudgetPlan {
        Self::generate_with(inputs, &PlannerSettings::default())
    }

    pub fn generate_with(inputs: &BudgetInputs, settings: &PlannerSettings) -> BudgetPlan {
        let total_income = inputs.total_income();
        let total_expenses = inputs.total_expenses();
        let suggested_savings = Self::suggested_savings(inputs, total_income);
        let savings_rate = percent_of(suggested_savings, total_income);
        let rule = Self::select_rule(savings_rate, inputs.goal_type);

        let mut assumptions = Vec::new();
        if total_income <= 0.0 {
            assumptions.push(
                "No income was provided, so allocation amounts are zero until income is entered."
                    .to_string(),
            );
        }

        let expense_breakdown = Self::expense_breakdown(inputs, total_expenses, &mut assumptions);

        let target = if inputs.target_amount > 0.0 {
            inputs.target_amount
        } else {
            assumptions.push(format!(
                "No savings target was given; using {} months of expenses as an emergency fund target.",
                settings.emergency_fund_months
            ));
            total_expenses * settings.emergency_fund_months
        };
        let savings_progress = SavingsProgress {
            current: inputs.current_savings,
            target,
            percentage: percent_of(inputs.current_savings, target).min(100.0),
        };

        if inputs.savings_type == SavingsType::Percentage {
            assumptions.push(format!(
                "Savings are planned as {}% of total income.",
                inputs.savings_percentage
            ));
        }

        let surplus = total_income - total_expenses - suggested_savings;
        if surplus < 0.0 {
            assumptions.push(
                "Expenses and planned savings exceed income; the shortfall must come from existing savings."
                    .to_string(),
            );
        }

        tracing::debug!(
            total_income,
            total_expenses,
            suggested_savings,
            rule = %rule,
            "generated budget plan"
        );

        BudgetPlan {
            summary: BudgetSummary {
                total_income,
                total_expenses,
                suggested_savings,
            },
            allocation: Self::allocate(rule, total_income),
            expense_breakdown,
            savings_progress,
            cash_flow: CashFlow {
                surplus,
                savings_rate,
            },
            assumptions,
        }
    }

    /// Monthly savings as a flat amount or a share of income.
    pub fn suggested_savings(inputs: &BudgetInputs, total_income: f64) -> f64 {
        match inputs.savings_type {
            SavingsType::Amount => inputs.savings_amount,
            SavingsType::Percentage => total_income * inputs.savings_percentage / 100.0,
        }
    }

    /// Picks the allocation rule from the implied savings rate and goal horizon.
    pub fn select_rule(savings_rate: f64, horizon: GoalHorizon) -> AllocationRule {
        if savings_rate >= 30.0 || horizon == GoalHorizon::LongTerm {
            AllocationRule::SixtyTwentyTwenty
        } else if savings_rate >= 20.0 {
            AllocationRule::FiftyThirtyTwenty
        } else {
            AllocationRule::SeventyTwentyTen
        }
    }

    fn allocate(rule: AllocationRule, total_income: f64) -> BudgetAllocation {
        let (needs, wants, savings) = rule.percentages();
        let bucket = |percentage: f64| AllocationBucket {
            percentage,
            amount: total_income * percentage / 100.0,
        };
        BudgetAllocation {
            rule,
            needs: bucket(needs),
            wants: bucket(wants),
            savings: bucket(savings),
        }
    }

    fn expense_breakdown(
        inputs: &BudgetInputs,
        total_expenses: f64,
        assumptions: &mut Vec<String>,
    ) -> Vec<ExpenseItem> {
        let mut breakdown = Vec::new();
        for group in inputs.expense_groups() {
            if group.total() <= 0.0 {
                assumptions.push(format!(
                    "No {} expenses were entered; they are assumed to be zero.",
                    group.name
                ));
                continue;
            }
            breakdown.extend(
                group
                    .items
                    .iter()
                    .filter(|(_, amount)| *amount > 0.0)
                    .map(|(name, amount)| ExpenseItem {
                        name: (*name).to_string(),
                        amount: *amount,
                        percentage: percent_of(*amount, total_expenses),
                    }),
            );
        }
        breakdown
    }
}
