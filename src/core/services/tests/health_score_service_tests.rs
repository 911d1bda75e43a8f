use crate::core::services::{BudgetPlanService, HealthScoreService};
use crate::domain::budget::BudgetInputs;
use crate::domain::insight::HealthFactor;

fn score_of(inputs: &BudgetInputs) -> crate::domain::insight::HealthScore {
    let plan = BudgetPlanService::generate(inputs);
    HealthScoreService::score(inputs, &plan)
}

#[test]
fn strong_household_scores_full_marks() {
    let inputs = BudgetInputs {
        primary_income: 100_000.0,
        rent: 20_000.0,
        food: 10_000.0,
        savings_amount: 30_000.0,
        current_savings: 200_000.0,
        retirement_contribution: 5_000.0,
        target_amount: 500_000.0,
        ..BudgetInputs::default()
    };
    let health = score_of(&inputs);
    assert_eq!(health.score, 100.0);
    assert!(health.explanation.contains("excellent"));
    assert!(health.explanation.contains(
        "Strongest areas: healthy savings rate, positive cash flow, emergency fund coverage."
    ));
}

#[test]
fn empty_inputs_only_earn_debt_points() {
    let health = score_of(&BudgetInputs::default());
    assert_eq!(health.score, 15.0);
    assert!(health.explanation.contains("needs improvement"));
    assert!(health.explanation.ends_with("Strongest areas: manageable debt."));
}

#[test]
fn factor_tiers_follow_thresholds() {
    let inputs = BudgetInputs {
        primary_income: 100_000.0,
        rent: 50_000.0,
        loan_emi: 25_000.0,
        savings_amount: 12_000.0,
        current_savings: 160_000.0,
        ..BudgetInputs::default()
    };
    let health = score_of(&inputs);
    let points = |factor: HealthFactor| {
        health
            .factors
            .iter()
            .find(|entry| entry.factor == factor)
            .map(|entry| entry.points)
            .unwrap()
    };
    // 12% savings, 13% surplus, 2.1 months of cover, 25% debt.
    assert_eq!(points(HealthFactor::SavingsRate), 15.0);
    assert_eq!(points(HealthFactor::CashFlow), 18.0);
    assert_eq!(points(HealthFactor::EmergencyFund), 8.0);
    assert_eq!(points(HealthFactor::DebtRatio), 5.0);
    assert_eq!(points(HealthFactor::Planning), 0.0);
    assert_eq!(health.score, 46.0);
    assert!(health.explanation.contains("fair"));
}

#[test]
fn debt_without_income_scores_zero_instead_of_nan() {
    let inputs = BudgetInputs {
        loan_emi: 5_000.0,
        ..BudgetInputs::default()
    };
    let health = score_of(&inputs);
    assert_eq!(health.score, 0.0);
    assert!(health.explanation.contains("No factor is contributing"));
}

#[test]
fn score_stays_within_bounds_across_tiers() {
    let amounts = [0.0, 1.0, 5_000.0, 20_000.0, 45_000.0, 150_000.0];
    for income in [0.0, 10_000.0, 100_000.0] {
        for &savings in &amounts {
            for &rent in &amounts {
                for &emi in &amounts {
                    for &cushion in &amounts {
                        let inputs = BudgetInputs {
                            primary_income: income,
                            savings_amount: savings,
                            rent,
                            loan_emi: emi,
                            current_savings: cushion,
                            retirement_contribution: savings / 10.0,
                            target_amount: cushion * 2.0,
                            ..BudgetInputs::default()
                        };
                        let health = score_of(&inputs);
                        assert!(
                            (0.0..=100.0).contains(&health.score),
                            "score {} out of range for {:?}",
                            health.score,
                            inputs
                        );
                    }
                }
            }
        }
    }
}
