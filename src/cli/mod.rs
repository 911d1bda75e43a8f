//! Non-interactive command dispatcher behind `financewise_cli`.

pub mod output;

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::{Config, ConfigManager};
use crate::core::errors::CliError;
use crate::core::math::format_amount;
use crate::core::services::{
    AggregateService, BudgetPlanService, GoalPlanningService, GoalSimulationService,
    GoalTrackingService, HealthScoreService, ProjectionService, RecommendationService,
    ReminderService,
};
use crate::core::time::{Clock, SystemClock};
use crate::domain::input::parse_amount;
use crate::domain::{
    BudgetInputs, BudgetPlan, HealthScore, ProjectionData, Recommendations, SavingsGoal,
    TransactionData,
};
use crate::utils::build_info;

pub const USAGE: &str = "financewise_cli <command>\n\
Commands:\n  \
plan <inputs.json> [--json]\n  \
goal <goal.json> <monthly-income> [--json]\n  \
aggregate <transactions.json> [YYYY-MM-DD] [--json]\n  \
reminder <action text> [YYYY-MM-DD]\n  \
version";

/// Full planner output for one set of inputs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan: BudgetPlan,
    pub health: HealthScore,
    pub recommendations: Recommendations,
    pub projection: ProjectionData,
}

impl PlanReport {
    pub fn build(inputs: &BudgetInputs, config: &Config) -> Self {
        let plan = BudgetPlanService::generate_with(inputs, &config.planner);
        Self {
            health: HealthScoreService::score(inputs, &plan),
            recommendations: RecommendationService::recommend_with(inputs, &plan, &config.planner),
            projection: ProjectionService::project(inputs, &plan),
            plan,
        }
    }
}

/// Runs a command given the arguments after the program name.
pub fn run(args: &[String]) -> Result<(), CliError> {
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "--json")
        .collect();
    let clock = SystemClock;

    match positional.as_slice() {
        ["plan", path] => {
            let config = ConfigManager::new()?.load()?;
            let inputs: BudgetInputs = read_json(Path::new(path))?;
            inputs.validate()?;
            let report = PlanReport::build(&inputs, &config);
            if json {
                print_json(&report)
            } else {
                render_plan(&report, &config);
                Ok(())
            }
        }
        ["goal", path, income] => {
            let config = ConfigManager::new()?.load()?;
            let goal: SavingsGoal = read_json(Path::new(path))?;
            let income = parse_amount("monthly-income", income)?.unwrap_or(0.0);
            render_goal(&goal, income, &clock, &config, json)
        }
        ["aggregate", path] => aggregate(Path::new(path), clock.today(), json),
        ["aggregate", path, date] => aggregate(Path::new(path), parse_date(date)?, json),
        ["reminder", text] => {
            print!("{}", ReminderService::to_icalendar(text, next_day(clock.today()), clock.now()));
            Ok(())
        }
        ["reminder", text, date] => {
            print!("{}", ReminderService::to_icalendar(text, parse_date(date)?, clock.now()));
            Ok(())
        }
        ["version"] => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        _ => Err(CliError::Usage(USAGE.to_string())),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| CliError::Input(format!("`{raw}` is not a YYYY-MM-DD date: {err}")))
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

fn money(config: &Config, amount: f64) -> String {
    format!("{} {}", config.currency, format_amount(amount))
}

fn render_plan(report: &PlanReport, config: &Config) {
    let plan = &report.plan;
    output::section("Budget Plan");
    output::field("Total income", money(config, plan.summary.total_income));
    output::field("Total expenses", money(config, plan.summary.total_expenses));
    output::field("Suggested savings", money(config, plan.summary.suggested_savings));
    output::field("Savings rate", format!("{:.1}%", plan.cash_flow.savings_rate));
    output::field("Monthly surplus", money(config, plan.cash_flow.surplus));
    output::field("Allocation rule", plan.allocation.rule);
    for (label, bucket) in [
        ("Needs", plan.allocation.needs),
        ("Wants", plan.allocation.wants),
        ("Savings", plan.allocation.savings),
    ] {
        output::field(
            label,
            format!("{} ({:.0}%)", money(config, bucket.amount), bucket.percentage),
        );
    }

    if !plan.expense_breakdown.is_empty() {
        output::section("Expenses");
        for item in &plan.expense_breakdown {
            output::field(
                &item.name,
                format!("{} ({:.1}%)", money(config, item.amount), item.percentage),
            );
        }
    }

    output::section("Financial Health");
    output::field("Score", format!("{:.0}/100", report.health.score));
    output::info(&report.health.explanation);

    output::section("Recommendations");
    for recommendation in &report.recommendations.recommendations {
        output::info(format!("- {recommendation}"));
    }
    output::section("Action Plan");
    for step in &report.recommendations.action_plan {
        output::info(step);
    }

    output::section("12-Month Projection");
    let summary = report.projection.summary;
    output::field("Total saved", money(config, summary.total_savings_year));
    output::field("Monthly average", money(config, summary.average_monthly_savings));
    output::field("Growth", format!("{:+.1}%", summary.projected_growth));

    if !plan.assumptions.is_empty() {
        output::section("Assumptions");
        for assumption in &plan.assumptions {
            output::info(format!("- {assumption}"));
        }
    }
}

fn render_goal(
    goal: &SavingsGoal,
    income: f64,
    clock: &dyn Clock,
    config: &Config,
    json: bool,
) -> Result<(), CliError> {
    let plan = GoalPlanningService::plan_with(goal, income, clock, &config.planner);
    let tracking = GoalTrackingService::track_with(goal, clock, &config.planner);
    let scenarios = GoalSimulationService::simulate_with(goal, income, clock, &config.planner);

    if json {
        return print_json(&serde_json::json!({
            "plan": plan,
            "tracking": tracking,
            "scenarios": scenarios,
        }));
    }

    output::section(format!("Goal: {}", goal.name));
    output::field(
        "Progress",
        format!(
            "{} of {} ({:.0}%)",
            money(config, goal.current_amount),
            money(config, goal.target_amount),
            goal.progress_percentage()
        ),
    );
    output::field(
        "Due",
        GoalTrackingService::due_at(goal, config.planner.default_goal_months).format("%Y-%m-%d"),
    );
    output::field("Months remaining", plan.months_remaining);
    output::field("Save per month", money(config, plan.required_monthly_saving));
    output::field("Save per day", money(config, plan.required_daily_saving));
    match &plan.warning {
        Some(warning) => output::warning(warning),
        None => output::success("This goal fits your income."),
    }
    output::field(
        "Status",
        format!(
            "{} (expected {:.0}%, actual {:.0}%, score {:.0})",
            tracking.label,
            tracking.expected_progress,
            tracking.actual_progress,
            tracking.performance_score
        ),
    );

    output::section("Scenarios");
    for scenario in &scenarios {
        output::field(
            &format!("{} {}", scenario.label, scenario.description),
            format!(
                "{} months, {} / month, {}",
                scenario.months,
                money(config, scenario.required_monthly_saving),
                scenario.feasibility
            ),
        );
    }
    Ok(())
}

fn aggregate(path: &Path, reference: NaiveDate, json: bool) -> Result<(), CliError> {
    let transactions: Vec<TransactionData> = read_json(path)?;
    let totals = AggregateService::monthly(&transactions, reference);
    if json {
        return print_json(&totals);
    }
    output::section(format!("{}-{:02}", totals.year, totals.month));
    output::field("Income", format_amount(totals.income));
    output::field("Expenses", format_amount(totals.expenses));
    output::field("Net", format_amount(totals.net));
    for category in &totals.expense_categories {
        output::field(
            &category.category,
            format!("{} ({:.1}%)", format_amount(category.amount), category.percentage),
        );
    }
    Ok(())
}
