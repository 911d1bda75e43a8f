pub mod aggregate_service;
pub mod budget_plan_service;
pub mod goal_planning_service;
pub mod goal_simulation_service;
pub mod goal_tracking_service;
pub mod health_score_service;
pub mod projection_service;
pub mod recommendation_service;
pub mod reminder_service;

pub use aggregate_service::AggregateService;
pub use budget_plan_service::BudgetPlanService;
pub use goal_planning_service::GoalPlanningService;
pub use goal_simulation_service::GoalSimulationService;
pub use goal_tracking_service::GoalTrackingService;
pub use health_score_service::HealthScoreService;
pub use projection_service::ProjectionService;
pub use recommendation_service::RecommendationService;
pub use reminder_service::ReminderService;

#[cfg(test)]
mod tests;
