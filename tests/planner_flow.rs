use std::collections::BTreeMap;

use financewise_core::{
    config::PlannerSettings,
    core::services::{
        BudgetPlanService, HealthScoreService, ProjectionService, RecommendationService,
    },
    domain::{BudgetInputs, GoalHorizon, KnowledgeLevel},
};

fn form(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn form_fields_flow_through_every_calculation() {
    let fields = form(&[
        ("primaryIncome", "80,000"),
        ("secondaryIncome", ""),
        ("rent", "25000"),
        ("food", "8000"),
        ("loanEmi", "10000"),
        ("entertainment", "4000"),
        ("savingsType", "percentage"),
        ("savingsPercentage", "25"),
        ("goalType", "long-term"),
        ("currentSavings", "300000"),
        ("knowledgeLevel", "beginner"),
    ]);
    let inputs = BudgetInputs::from_fields(&fields).unwrap();
    assert_eq!(inputs.primary_income, 80_000.0);
    assert_eq!(inputs.secondary_income, 0.0);
    assert_eq!(inputs.goal_type, GoalHorizon::LongTerm);
    assert_eq!(inputs.knowledge_level, KnowledgeLevel::Beginner);

    let plan = BudgetPlanService::generate(&inputs);
    assert_eq!(plan.summary.total_income, 80_000.0);
    assert_eq!(plan.summary.total_expenses, 47_000.0);
    assert_eq!(plan.summary.suggested_savings, 20_000.0);
    assert_eq!(plan.allocation.rule.to_string(), "60/20/20");

    let health = HealthScoreService::score(&inputs, &plan);
    assert!((0.0..=100.0).contains(&health.score));
    assert!(health.explanation.contains("/100"));

    let recs = RecommendationService::recommend(&inputs, &plan);
    assert!((3..=5).contains(&recs.recommendations.len()));
    assert_eq!(recs.action_plan.len(), 3);

    let projection = ProjectionService::project(&inputs, &plan);
    assert_eq!(projection.points.len(), 12);
    let last = projection.points.last().unwrap();
    assert!((last.cumulative - projection.summary.total_savings_year).abs() < 1e-6);
}

#[test]
fn empty_form_produces_a_safe_plan() {
    let inputs = BudgetInputs::from_fields(&BTreeMap::new()).unwrap();
    let plan = BudgetPlanService::generate_with(&inputs, &PlannerSettings::default());
    assert_eq!(plan.summary.total_income, 0.0);
    assert_eq!(plan.cash_flow.savings_rate, 0.0);
    assert!(plan.expense_breakdown.is_empty());
    assert!(!plan.assumptions.is_empty());

    let health = HealthScoreService::score(&inputs, &plan);
    assert!(health.score.is_finite());
    let projection = ProjectionService::project(&inputs, &plan);
    assert!(projection.points.iter().all(|p| p.savings.is_finite()));
}

#[test]
fn malformed_amounts_are_rejected() {
    let fields = form(&[("rent", "twelve")]);
    let err = BudgetInputs::from_fields(&fields).unwrap_err();
    assert!(err.to_string().contains("rent"));

    let fields = form(&[("savingsPercentage", "150")]);
    assert!(BudgetInputs::from_fields(&fields).is_err());
}
