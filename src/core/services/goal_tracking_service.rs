//! Compares time elapsed against money saved for a goal.

use chrono::{DateTime, Utc};

use super::goal_planning_service::{start_of_day, MONTH_MS};
use crate::config::PlannerSettings;
use crate::core::math::ratio;
use crate::core::time::Clock;
use crate::domain::goal::{SavingsGoal, TrackingLabel, TrackingStatus};

const BASE_SCORE_CAP: f64 = 70.0;
const BONUS_CAP: f64 = 30.0;
const BONUS_PER_POINT: f64 = 0.5;

pub struct GoalTrackingService;

impl GoalTrackingService {
    pub fn track(goal: &SavingsGoal, clock: &dyn Clock) -> TrackingStatus {
        Self::track_with(goal, clock, &PlannerSettings::default())
    }

    pub fn track_with(
        goal: &SavingsGoal,
        clock: &dyn Clock,
        settings: &PlannerSettings,
    ) -> TrackingStatus {
        let duration_ms = Self::duration_ms(goal, settings.default_goal_months);
        let elapsed_ms = (clock.now() - goal.created_at).num_milliseconds() as f64;
        let expected_progress = ratio(elapsed_ms, duration_ms as f64)
            .map(|fraction| (fraction * 100.0).clamp(0.0, 100.0))
            .unwrap_or(100.0);
        let actual_progress = goal.progress_percentage();

        let on_track = actual_progress >= expected_progress;
        let label = if on_track {
            TrackingLabel::OnTrack
        } else {
            TrackingLabel::BehindSchedule
        };

        TrackingStatus {
            label,
            expected_progress,
            actual_progress,
            performance_score: Self::performance_score(actual_progress, expected_progress),
        }
    }

    /// Up to 70 points for pace relative to schedule, plus up to 30 for being ahead of it.
    pub fn performance_score(actual: f64, expected: f64) -> f64 {
        let pace = ratio(actual, expected).unwrap_or(1.0);
        let base = (pace * BASE_SCORE_CAP).min(BASE_SCORE_CAP);
        let bonus = if actual >= expected {
            ((actual - expected) * BONUS_PER_POINT).min(BONUS_CAP)
        } else {
            0.0
        };
        (base + bonus).clamp(0.0, 100.0)
    }

    /// Total goal duration in milliseconds, resolved like the planning horizon.
    pub fn duration_ms(goal: &SavingsGoal, default_months: u32) -> i64 {
        if let Some(date) = goal.target_date {
            return (start_of_day(date) - goal.created_at).num_milliseconds().max(0);
        }
        let months = goal.target_months.unwrap_or(default_months);
        i64::from(months) * MONTH_MS
    }

    pub fn due_at(goal: &SavingsGoal, default_months: u32) -> DateTime<Utc> {
        goal.created_at + chrono::Duration::milliseconds(Self::duration_ms(goal, default_months))
    }
}
