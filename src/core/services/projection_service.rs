//! Twelve-month savings trajectory using a fixed monthly drift.

use crate::core::math::percent_of;
use crate::domain::budget::{BudgetInputs, BudgetPlan, SpendingBehavior};
use crate::domain::insight::{ProjectionData, ProjectionPoint, ProjectionSummary};

pub const PROJECTION_MONTHS: u32 = 12;
const SAVER_DRIFT: f64 = 1.02;
const DEFAULT_DRIFT: f64 = 0.98;

pub struct ProjectionService;

impl ProjectionService {
    pub fn drift(behavior: SpendingBehavior) -> f64 {
        match behavior {
            SpendingBehavior::Saver => SAVER_DRIFT,
            SpendingBehavior::Balanced | SpendingBehavior::Spender => DEFAULT_DRIFT,
        }
    }

    pub fn project(inputs: &BudgetInputs, plan: &BudgetPlan) -> ProjectionData {
        let base = plan.summary.suggested_savings;
        let drift = Self::drift(inputs.spending_behavior);

        let mut cumulative = 0.0;
        let points: Vec<ProjectionPoint> = (0..PROJECTION_MONTHS)
            .map(|idx| {
                let savings = base * drift.powi(idx as i32);
                cumulative += savings;
                ProjectionPoint {
                    month: idx + 1,
                    savings,
                    cumulative,
                }
            })
            .collect();

        let first = points.first().map(|p| p.savings).unwrap_or(0.0);
        let last = points.last().map(|p| p.savings).unwrap_or(0.0);
        let summary = ProjectionSummary {
            total_savings_year: cumulative,
            average_monthly_savings: cumulative / f64::from(PROJECTION_MONTHS),
            projected_growth: percent_of(last - first, first),
        };

        ProjectionData { points, summary }
    }
}
