use super::sample_inputs;
use crate::core::services::BudgetPlanService;
use crate::domain::budget::{AllocationRule, BudgetInputs, GoalHorizon, SavingsType};

#[test]
fn sample_household_uses_fifty_thirty_twenty() {
    let plan = BudgetPlanService::generate(&sample_inputs());

    assert_eq!(plan.summary.total_income, 100_000.0);
    assert_eq!(plan.summary.total_expenses, 45_000.0);
    assert_eq!(plan.summary.suggested_savings, 20_000.0);
    assert_eq!(plan.cash_flow.savings_rate, 20.0);
    assert_eq!(plan.allocation.rule, AllocationRule::FiftyThirtyTwenty);
    assert_eq!(plan.allocation.needs.amount, 50_000.0);
    assert_eq!(plan.allocation.wants.amount, 30_000.0);
    assert_eq!(plan.allocation.savings.amount, 20_000.0);
    assert_eq!(plan.cash_flow.surplus, 35_000.0);
}

#[test]
fn breakdown_skips_zero_categories_and_notes_empty_groups() {
    let plan = BudgetPlanService::generate(&sample_inputs());

    let names: Vec<&str> = plan
        .expense_breakdown
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Rent", "Food", "Transport"]);
    let total_pct: f64 = plan.expense_breakdown.iter().map(|i| i.percentage).sum();
    assert!((total_pct - 100.0).abs() < 1e-9);

    assert!(plan.assumptions.iter().any(|a| a.contains("No fixed expenses")));
    assert!(plan.assumptions.iter().any(|a| a.contains("No variable expenses")));
    assert!(!plan.assumptions.iter().any(|a| a.contains("No core expenses")));
}

#[test]
fn savings_target_defaults_to_six_months_of_expenses() {
    let mut inputs = sample_inputs();
    inputs.current_savings = 135_000.0;
    let plan = BudgetPlanService::generate(&inputs);
    assert_eq!(plan.savings_progress.target, 270_000.0);
    assert_eq!(plan.savings_progress.percentage, 50.0);

    inputs.target_amount = 100_000.0;
    let plan = BudgetPlanService::generate(&inputs);
    assert_eq!(plan.savings_progress.target, 100_000.0);
    assert_eq!(plan.savings_progress.percentage, 100.0);
}

#[test]
fn rule_selection_thresholds() {
    assert_eq!(
        BudgetPlanService::select_rule(30.0, GoalHorizon::ShortTerm),
        AllocationRule::SixtyTwentyTwenty
    );
    assert_eq!(
        BudgetPlanService::select_rule(5.0, GoalHorizon::LongTerm),
        AllocationRule::SixtyTwentyTwenty
    );
    assert_eq!(
        BudgetPlanService::select_rule(29.9, GoalHorizon::ShortTerm),
        AllocationRule::FiftyThirtyTwenty
    );
    assert_eq!(
        BudgetPlanService::select_rule(19.99, GoalHorizon::ShortTerm),
        AllocationRule::SeventyTwentyTen
    );
}

#[test]
fn percentage_savings_scale_with_income() {
    let inputs = BudgetInputs {
        primary_income: 40_000.0,
        passive_income: 10_000.0,
        savings_type: SavingsType::Percentage,
        savings_percentage: 10.0,
        ..BudgetInputs::default()
    };
    let plan = BudgetPlanService::generate(&inputs);
    assert_eq!(plan.summary.suggested_savings, 5_000.0);
    assert_eq!(plan.allocation.rule, AllocationRule::SeventyTwentyTen);
    assert!(plan.assumptions.iter().any(|a| a.contains("10%")));
}

#[test]
fn allocation_percentages_always_sum_to_hundred() {
    for income in [1_000.0, 45_000.0, 100_000.0, 2_500_000.0] {
        for savings in [0.0, 50.0, 9_000.0, 25_000.0, 80_000.0] {
            for horizon in [GoalHorizon::ShortTerm, GoalHorizon::LongTerm] {
                let inputs = BudgetInputs {
                    primary_income: income,
                    savings_amount: savings,
                    goal_type: horizon,
                    ..BudgetInputs::default()
                };
                let allocation = BudgetPlanService::generate(&inputs).allocation;
                let sum = allocation.needs.percentage
                    + allocation.wants.percentage
                    + allocation.savings.percentage;
                assert_eq!(sum, 100.0);
            }
        }
    }
}

#[test]
fn zero_expenses_never_produce_nan() {
    let inputs = BudgetInputs {
        primary_income: 10_000.0,
        ..BudgetInputs::default()
    };
    let plan = BudgetPlanService::generate(&inputs);
    assert!(plan.expense_breakdown.is_empty());
    assert_eq!(plan.savings_progress.target, 0.0);
    assert_eq!(plan.savings_progress.percentage, 0.0);
    assert!(plan.cash_flow.savings_rate.is_finite());
    assert_eq!(
        plan.assumptions
            .iter()
            .filter(|a| a.ends_with("assumed to be zero."))
            .count(),
        3
    );
}

#[test]
fn zero_income_is_explained() {
    let plan = BudgetPlanService::generate(&BudgetInputs::default());
    assert_eq!(plan.cash_flow.savings_rate, 0.0);
    assert_eq!(plan.allocation.needs.amount, 0.0);
    assert!(plan.assumptions[0].starts_with("No income was provided"));
}
