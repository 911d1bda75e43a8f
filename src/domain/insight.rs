//! Derived views over a budget plan: health score, recommendations and projections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five factors scored by the financial health rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthFactor {
    SavingsRate,
    CashFlow,
    EmergencyFund,
    DebtRatio,
    Planning,
}

impl HealthFactor {
    pub const ALL: [HealthFactor; 5] = [
        HealthFactor::SavingsRate,
        HealthFactor::CashFlow,
        HealthFactor::EmergencyFund,
        HealthFactor::DebtRatio,
        HealthFactor::Planning,
    ];

    pub fn max_points(self) -> f64 {
        match self {
            HealthFactor::SavingsRate => 30.0,
            HealthFactor::CashFlow => 25.0,
            HealthFactor::EmergencyFund => 20.0,
            HealthFactor::DebtRatio => 15.0,
            HealthFactor::Planning => 10.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthFactor::SavingsRate => "healthy savings rate",
            HealthFactor::CashFlow => "positive cash flow",
            HealthFactor::EmergencyFund => "emergency fund coverage",
            HealthFactor::DebtRatio => "manageable debt",
            HealthFactor::Planning => "long-term planning",
        }
    }
}

impl fmt::Display for HealthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: HealthFactor,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: f64,
    pub explanation: String,
    pub factors: Vec<FactorScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub recommendations: Vec<String>,
    pub action_plan: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// One-based month number.
    pub month: u32,
    pub savings: f64,
    pub cumulative: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_savings_year: f64,
    pub average_monthly_savings: f64,
    pub projected_growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionData {
    pub points: Vec<ProjectionPoint>,
    pub summary: ProjectionSummary,
}
