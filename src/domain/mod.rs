pub mod budget;
pub mod common;
pub mod goal;
pub mod input;
pub mod insight;
pub mod transaction;

pub use budget::{
    AllocationBucket, AllocationRule, BudgetAllocation, BudgetInputs, BudgetPlan, BudgetSummary,
    CashFlow, ExpenseItem, GoalHorizon, KnowledgeLevel, SavingStyle, SavingsProgress, SavingsType,
    SpendingBehavior,
};
pub use common::Principal;
pub use goal::{Feasibility, GoalPlanMetrics, SavingsGoal, SimulationScenario, TrackingLabel, TrackingStatus};
pub use insight::{
    FactorScore, HealthFactor, HealthScore, ProjectionData, ProjectionPoint, ProjectionSummary,
    Recommendations,
};
pub use transaction::{CategoryTotal, MonthlyAggregates, TransactionData, TransactionType};
