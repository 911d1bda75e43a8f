use super::sample_inputs;
use crate::core::services::{BudgetPlanService, ProjectionService};
use crate::domain::budget::{BudgetInputs, SpendingBehavior};

#[test]
fn saver_projection_compounds_two_percent() {
    let inputs = BudgetInputs {
        spending_behavior: SpendingBehavior::Saver,
        ..sample_inputs()
    };
    let plan = BudgetPlanService::generate(&inputs);
    let projection = ProjectionService::project(&inputs, &plan);

    assert_eq!(projection.points.len(), 12);
    assert_eq!(projection.points[0].savings, 20_000.0);
    assert_eq!(projection.points[11].month, 12);
    assert_eq!(projection.points[11].savings, 20_000.0 * 1.02f64.powi(11));

    let sum: f64 = projection.points.iter().map(|p| p.savings).sum();
    assert_eq!(projection.summary.total_savings_year, sum);
    assert_eq!(projection.points[11].cumulative, sum);
    assert_eq!(projection.summary.average_monthly_savings, sum / 12.0);
    assert!(projection.summary.projected_growth > 24.0);

    assert_eq!(ProjectionService::project(&inputs, &plan), projection);
}

#[test]
fn other_behaviours_drift_down() {
    for behavior in [SpendingBehavior::Balanced, SpendingBehavior::Spender] {
        let inputs = BudgetInputs {
            spending_behavior: behavior,
            ..sample_inputs()
        };
        let plan = BudgetPlanService::generate(&inputs);
        let projection = ProjectionService::project(&inputs, &plan);
        assert_eq!(projection.points[11].savings, 20_000.0 * 0.98f64.powi(11));
        assert!(projection.summary.projected_growth < 0.0);
    }
}

#[test]
fn zero_savings_project_flat_zero() {
    let inputs = BudgetInputs::default();
    let plan = BudgetPlanService::generate(&inputs);
    let projection = ProjectionService::project(&inputs, &plan);
    assert!(projection.points.iter().all(|p| p.savings == 0.0));
    assert_eq!(projection.summary.projected_growth, 0.0);
}
