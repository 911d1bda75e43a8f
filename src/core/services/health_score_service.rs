//! Five-factor financial health rubric.
//!
//! score = savings rate (30) + cash flow (25) + emergency fund (20)
//!       + debt ratio (15) + planning (10)

use crate::core::math::{percent_of, ratio};
use crate::domain::budget::{BudgetInputs, BudgetPlan};
use crate::domain::insight::{FactorScore, HealthFactor, HealthScore};

pub struct HealthScoreService;

impl HealthScoreService {
    pub fn score(inputs: &BudgetInputs, plan: &BudgetPlan) -> HealthScore {
        let factors: Vec<FactorScore> = HealthFactor::ALL
            .iter()
            .map(|&factor| FactorScore {
                factor,
                points: Self::factor_points(factor, inputs, plan).min(factor.max_points()),
            })
            .collect();

        let score = factors
            .iter()
            .map(|entry| entry.points)
            .sum::<f64>()
            .clamp(0.0, 100.0);
        let explanation = Self::explain(score, &factors);
        tracing::debug!(score, "computed financial health score");

        HealthScore {
            score,
            explanation,
            factors,
        }
    }

    fn factor_points(factor: HealthFactor, inputs: &BudgetInputs, plan: &BudgetPlan) -> f64 {
        let income = plan.summary.total_income;
        let expenses = plan.summary.total_expenses;
        match factor {
            HealthFactor::SavingsRate => {
                let rate = plan.cash_flow.savings_rate;
                if rate >= 30.0 {
                    30.0
                } else if rate >= 20.0 {
                    22.0
                } else if rate >= 10.0 {
                    15.0
                } else if rate > 0.0 {
                    5.0
                } else {
                    0.0
                }
            }
            HealthFactor::CashFlow => match ratio(plan.cash_flow.surplus, income) {
                Some(share) if share >= 0.20 => 25.0,
                Some(share) if share >= 0.10 => 18.0,
                Some(share) if share >= 0.0 => 10.0,
                _ => 0.0,
            },
            HealthFactor::EmergencyFund => match ratio(inputs.current_savings, expenses) {
                Some(months) if months >= 6.0 => 20.0,
                Some(months) if months >= 3.0 => 14.0,
                Some(months) if months >= 1.0 => 8.0,
                Some(_) => 0.0,
                // Any savings cover a household that reports no expenses.
                None if inputs.current_savings > 0.0 => 20.0,
                None => 0.0,
            },
            HealthFactor::DebtRatio => {
                if inputs.loan_emi <= 0.0 {
                    return 15.0;
                }
                if income <= 0.0 {
                    return 0.0;
                }
                let debt_pct = percent_of(inputs.loan_emi, income);
                if debt_pct <= 20.0 {
                    10.0
                } else if debt_pct <= 40.0 {
                    5.0
                } else {
                    0.0
                }
            }
            HealthFactor::Planning => {
                let mut points = 0.0;
                if inputs.retirement_contribution > 0.0 {
                    points += 5.0;
                }
                if inputs.target_amount > 0.0 {
                    points += 5.0;
                }
                points
            }
        }
    }

    /// Qualitative band for a score.
    pub fn band(score: f64) -> &'static str {
        if score >= 85.0 {
            "excellent"
        } else if score >= 70.0 {
            "very good"
        } else if score >= 55.0 {
            "good"
        } else if score >= 40.0 {
            "fair"
        } else {
            "needs improvement"
        }
    }

    fn explain(score: f64, factors: &[FactorScore]) -> String {
        let mut contributing: Vec<&FactorScore> =
            factors.iter().filter(|entry| entry.points > 0.0).collect();
        // Stable sort keeps declaration order on ties.
        contributing.sort_by(|a, b| b.points.total_cmp(&a.points));
        let strengths: Vec<&str> = contributing
            .iter()
            .take(3)
            .map(|entry| entry.factor.label())
            .collect();

        let headline = format!(
            "Your financial health is {} ({:.0}/100).",
            Self::band(score),
            score
        );
        if strengths.is_empty() {
            format!("{headline} No factor is contributing to your score yet.")
        } else {
            format!("{headline} Strongest areas: {}.", strengths.join(", "))
        }
    }
}
