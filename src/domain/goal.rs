use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Principal;
use crate::core::math::percent_of;

/// A savings goal owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub user: Principal,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_months: Option<u32>,
}

impl SavingsGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        user: Principal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            user,
            created_at,
            target_date: None,
            target_months: None,
        }
    }

    pub fn with_current_amount(mut self, amount: f64) -> Self {
        self.current_amount = amount;
        self
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn with_target_months(mut self, months: u32) -> Self {
        self.target_months = Some(months);
        self
    }

    /// Amount still missing, never negative.
    pub fn remaining_amount(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    /// Funded share of the target in percent, capped at 100.
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 100.0;
        }
        percent_of(self.current_amount, self.target_amount).min(100.0)
    }
}

/// Savings pace required to reach a goal on time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlanMetrics {
    pub remaining_amount: f64,
    pub months_remaining: u32,
    pub required_monthly_saving: f64,
    pub required_daily_saving: f64,
    pub is_feasible: bool,
    /// Horizon at which the goal becomes affordable, set only when infeasible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingLabel {
    #[serde(rename = "On track")]
    OnTrack,
    #[serde(rename = "Behind schedule")]
    BehindSchedule,
}

impl fmt::Display for TrackingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingLabel::OnTrack => f.write_str("On track"),
            TrackingLabel::BehindSchedule => f.write_str("Behind schedule"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStatus {
    pub label: TrackingLabel,
    pub expected_progress: f64,
    pub actual_progress: f64,
    pub performance_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feasibility {
    Achievable,
    Difficult,
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feasibility::Achievable => f.write_str("Achievable"),
            Feasibility::Difficult => f.write_str("Difficult"),
        }
    }
}

/// An alternate timeline for reaching a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationScenario {
    pub label: char,
    pub description: String,
    pub months: u32,
    pub required_monthly_saving: f64,
    pub required_daily_saving: f64,
    pub feasibility: Feasibility,
}
