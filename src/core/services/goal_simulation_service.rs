//! Alternate timelines for a savings goal.

use super::goal_planning_service::{GoalPlanningService, DAYS_PER_MONTH};
use crate::config::PlannerSettings;
use crate::core::time::Clock;
use crate::domain::goal::{Feasibility, SavingsGoal, SimulationScenario};

const EXTENDED_FACTOR: f64 = 1.5;
const ACCELERATED_FACTOR: f64 = 0.67;

pub struct GoalSimulationService;

impl GoalSimulationService {
    pub fn simulate(
        goal: &SavingsGoal,
        monthly_income: f64,
        clock: &dyn Clock,
    ) -> [SimulationScenario; 3] {
        Self::simulate_with(goal, monthly_income, clock, &PlannerSettings::default())
    }

    /// Scenario A keeps the current horizon, B extends it by half, C shortens it by a third.
    pub fn simulate_with(
        goal: &SavingsGoal,
        monthly_income: f64,
        clock: &dyn Clock,
        settings: &PlannerSettings,
    ) -> [SimulationScenario; 3] {
        let current =
            GoalPlanningService::months_remaining(goal, clock.now(), settings.default_goal_months);
        let remaining = goal.remaining_amount();
        let scenario = |label: char, description: &str, months: u32| {
            let months = months.max(1);
            let required_monthly_saving = remaining / f64::from(months);
            let feasibility = if GoalPlanningService::is_affordable(
                required_monthly_saving,
                monthly_income,
                settings.feasibility_ratio,
            ) {
                Feasibility::Achievable
            } else {
                Feasibility::Difficult
            };
            SimulationScenario {
                label,
                description: description.to_string(),
                months,
                required_monthly_saving,
                required_daily_saving: required_monthly_saving / DAYS_PER_MONTH,
                feasibility,
            }
        };

        [
            scenario('A', "Current timeline", current),
            scenario(
                'B',
                "Extended timeline (+50%)",
                Self::scale_months(current, EXTENDED_FACTOR),
            ),
            scenario(
                'C',
                "Accelerated timeline (-33%)",
                Self::scale_months(current, ACCELERATED_FACTOR),
            ),
        ]
    }

    /// `max(1, ceil(months * factor))`.
    pub fn scale_months(months: u32, factor: f64) -> u32 {
        ((f64::from(months) * factor).ceil() as u32).max(1)
    }
}
