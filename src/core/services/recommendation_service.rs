//! Rule-based recommendations and a three-step action plan.

use crate::config::PlannerSettings;
use crate::core::math::{format_amount, percent_of, ratio};
use crate::domain::budget::{BudgetInputs, BudgetPlan, KnowledgeLevel, SavingStyle};
use crate::domain::insight::Recommendations;

const MAX_RECOMMENDATIONS: usize = 5;
const MIN_RECOMMENDATIONS: usize = 3;
const HOUSING_LIMIT_PCT: f64 = 30.0;
const DISCRETIONARY_CUT: f64 = 0.20;

const GENERIC_GUIDANCE: [&str; 3] = [
    "Review your budget at the end of every month and adjust categories that ran over.",
    "Raise your savings rate by 1% each quarter until you reach at least 20% of income.",
    "Keep a written list of upcoming annual expenses so they never arrive as surprises.",
];

pub struct RecommendationService;

impl RecommendationService {
    pub fn recommend(inputs: &BudgetInputs, plan: &BudgetPlan) -> Recommendations {
        Self::recommend_with(inputs, plan, &PlannerSettings::default())
    }

    pub fn recommend_with(
        inputs: &BudgetInputs,
        plan: &BudgetPlan,
        settings: &PlannerSettings,
    ) -> Recommendations {
        let mut recommendations = Self::rule_based(inputs, plan, settings);
        for guidance in GENERIC_GUIDANCE {
            if recommendations.len() >= MIN_RECOMMENDATIONS {
                break;
            }
            recommendations.push(guidance.to_string());
        }
        recommendations.truncate(MAX_RECOMMENDATIONS);

        Recommendations {
            recommendations,
            action_plan: Self::action_plan(inputs, plan),
        }
    }

    fn rule_based(
        inputs: &BudgetInputs,
        plan: &BudgetPlan,
        settings: &PlannerSettings,
    ) -> Vec<String> {
        let mut out = Vec::new();
        let income = plan.summary.total_income;
        let monthly_savings = plan.summary.suggested_savings;

        let wants = plan.allocation.wants.amount;
        if wants > 0.0 {
            out.push(format!(
                "Cut discretionary spending by 20% to free up about {} per month.",
                format_amount(wants * DISCRETIONARY_CUT)
            ));
        }

        let fund_target = plan.summary.total_expenses * settings.emergency_fund_months;
        let gap = fund_target - inputs.current_savings;
        if gap > 0.0 {
            let message = match ratio(gap, monthly_savings).filter(|months| *months > 0.0) {
                Some(months) => format!(
                    "Your emergency fund is {} short of {} months of expenses; at your current savings rate it closes in about {} months.",
                    format_amount(gap),
                    settings.emergency_fund_months,
                    months.ceil()
                ),
                None => format!(
                    "Your emergency fund is {} short of {} months of expenses; start setting aside a fixed amount each month.",
                    format_amount(gap),
                    settings.emergency_fund_months
                ),
            };
            out.push(message);
        }

        let housing_pct = percent_of(inputs.rent, income);
        if housing_pct > HOUSING_LIMIT_PCT {
            out.push(format!(
                "Housing takes {:.0}% of your income; aim to keep rent under {:.0}%.",
                housing_pct, HOUSING_LIMIT_PCT
            ));
        }

        if inputs.secondary_income <= 0.0 && inputs.passive_income <= 0.0 {
            out.push(
                "All income comes from one source; explore a side income or dividend-paying investments."
                    .to_string(),
            );
        }

        if inputs.saving_style == SavingStyle::Manual {
            out.push(
                "Automate your savings with a standing transfer on payday so saving happens first."
                    .to_string(),
            );
        }

        out
    }

    /// Always exactly three numbered steps.
    fn action_plan(inputs: &BudgetInputs, plan: &BudgetPlan) -> Vec<String> {
        let beginner = inputs.knowledge_level == KnowledgeLevel::Beginner;
        let savings = format_amount(plan.allocation.savings.amount);

        let first = if beginner {
            "1. Track every expense for the next 30 days to see where your money goes.".to_string()
        } else {
            format!(
                "1. Compare last month's spending against the {} allocation and flag overruns.",
                plan.allocation.rule
            )
        };
        let second = match inputs.saving_style {
            SavingStyle::Manual => {
                format!("2. Set up an automatic transfer of {savings} to savings every payday.")
            }
            SavingStyle::Automatic => {
                format!("2. Check that your automatic transfer matches the {savings} savings target.")
            }
        };
        let third = if beginner {
            "3. Learn the basics of index funds and open a low-cost investment account.".to_string()
        } else {
            "3. Rebalance your investments and raise retirement contributions where possible."
                .to_string()
        };

        vec![first, second, third]
    }
}
