//! Required savings pace and feasibility for a savings goal.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::PlannerSettings;
use crate::core::math::ratio;
use crate::core::time::Clock;
use crate::domain::goal::{GoalPlanMetrics, SavingsGoal};

/// Length of a planning month.
pub const MONTH_MS: i64 = 30 * 24 * 60 * 60 * 1000;
/// Days per planning month, used for daily savings figures.
pub const DAYS_PER_MONTH: f64 = 30.0;

pub struct GoalPlanningService;

impl GoalPlanningService {
    pub fn plan(goal: &SavingsGoal, monthly_income: f64, clock: &dyn Clock) -> GoalPlanMetrics {
        Self::plan_with(goal, monthly_income, clock, &PlannerSettings::default())
    }

    pub fn plan_with(
        goal: &SavingsGoal,
        monthly_income: f64,
        clock: &dyn Clock,
        settings: &PlannerSettings,
    ) -> GoalPlanMetrics {
        let months_remaining =
            Self::months_remaining(goal, clock.now(), settings.default_goal_months);
        let remaining_amount = goal.remaining_amount();
        let required_monthly_saving = remaining_amount / f64::from(months_remaining);
        let required_daily_saving = required_monthly_saving / DAYS_PER_MONTH;
        let is_feasible =
            Self::is_affordable(required_monthly_saving, monthly_income, settings.feasibility_ratio);

        let (suggested_months, warning) = if is_feasible {
            (None, None)
        } else {
            let affordable = monthly_income * settings.feasibility_ratio;
            let months = ratio(remaining_amount, affordable)
                .map(|value| value.ceil().max(1.0) as u32)
                .unwrap_or(months_remaining);
            tracing::warn!(
                goal = %goal.name,
                required_monthly_saving,
                suggested_months = months,
                "savings goal exceeds affordable monthly saving"
            );
            (
                Some(months),
                Some(format!(
                    "Saving {:.2} a month is more than {:.0}% of your income. Consider extending the goal to about {} months.",
                    required_monthly_saving,
                    settings.feasibility_ratio * 100.0,
                    months
                )),
            )
        };

        GoalPlanMetrics {
            remaining_amount,
            months_remaining,
            required_monthly_saving,
            required_daily_saving,
            is_feasible,
            suggested_months,
            warning,
        }
    }

    /// Whether `monthly_saving` fits within the affordable share of income.
    ///
    /// Without a known income every goal counts as affordable.
    pub fn is_affordable(monthly_saving: f64, monthly_income: f64, feasibility_ratio: f64) -> bool {
        monthly_income <= 0.0 || monthly_saving <= monthly_income * feasibility_ratio
    }

    /// Months left until the goal is due, never less than one.
    ///
    /// A target date wins over a month count; goals with neither use `default_months`.
    pub fn months_remaining(goal: &SavingsGoal, now: DateTime<Utc>, default_months: u32) -> u32 {
        if let Some(date) = goal.target_date {
            let millis = (start_of_day(date) - now).num_milliseconds();
            let months = (millis as f64 / MONTH_MS as f64).ceil();
            return months.max(1.0) as u32;
        }
        if let Some(target_months) = goal.target_months {
            let elapsed = Self::elapsed_months(goal.created_at, now);
            return (i64::from(target_months) - elapsed).max(1) as u32;
        }
        default_months.max(1)
    }

    /// Whole planning months between `created_at` and `now`.
    pub fn elapsed_months(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        (now - created_at).num_milliseconds().max(0) / MONTH_MS
    }
}

pub(crate) fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
