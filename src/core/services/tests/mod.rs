mod budget_plan_service_tests;
mod health_score_service_tests;
mod projection_service_tests;

use crate::domain::budget::{BudgetInputs, GoalHorizon, SavingsType};

/// Household from the planner walkthrough: 100k income, 45k core expenses, 20k savings.
pub(super) fn sample_inputs() -> BudgetInputs {
    BudgetInputs {
        primary_income: 100_000.0,
        rent: 30_000.0,
        food: 10_000.0,
        transport: 5_000.0,
        savings_type: SavingsType::Amount,
        savings_amount: 20_000.0,
        goal_type: GoalHorizon::ShortTerm,
        ..BudgetInputs::default()
    }
}
