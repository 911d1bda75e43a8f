//! Parsing of raw form fields into typed budget inputs.
//!
//! A blank field means "not provided" and falls back to zero, while text that
//! is not a valid amount is reported instead of being silently coerced.

use std::collections::BTreeMap;

use thiserror::Error;

use super::budget::BudgetInputs;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("`{field}` is not a number: {value}")]
    NotANumber { field: String, value: String },
    #[error("`{field}` must not be negative")]
    Negative { field: String },
    #[error("`{field}` has an invalid value: {reason}")]
    InvalidChoice { field: String, reason: String },
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Parses a monthly amount. Blank input yields `Ok(None)`.
pub fn parse_amount(field: &str, raw: &str) -> Result<Option<f64>, InputError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    let value = cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InputError::NotANumber {
            field: field.to_string(),
            value: raw.trim().to_string(),
        })?;
    if value < 0.0 {
        return Err(InputError::Negative {
            field: field.to_string(),
        });
    }
    Ok(Some(value))
}

fn amount_or_zero(field: &str, raw: &str) -> Result<f64, InputError> {
    Ok(parse_amount(field, raw)?.unwrap_or(0.0))
}

fn choice<T: std::str::FromStr<Err = String> + Default>(
    field: &str,
    raw: &str,
) -> Result<T, InputError> {
    if raw.trim().is_empty() {
        return Ok(T::default());
    }
    raw.parse().map_err(|reason| InputError::InvalidChoice {
        field: field.to_string(),
        reason,
    })
}

impl BudgetInputs {
    /// Builds inputs from raw form fields keyed by their camelCase names.
    ///
    /// Missing fields keep their defaults; the first invalid field aborts parsing.
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Result<Self, InputError> {
        let mut inputs = BudgetInputs::default();
        for (key, raw) in fields {
            let field = key.as_str();
            match field {
                "primaryIncome" => inputs.primary_income = amount_or_zero(field, raw)?,
                "secondaryIncome" => inputs.secondary_income = amount_or_zero(field, raw)?,
                "passiveIncome" => inputs.passive_income = amount_or_zero(field, raw)?,
                "rent" => inputs.rent = amount_or_zero(field, raw)?,
                "food" => inputs.food = amount_or_zero(field, raw)?,
                "transport" => inputs.transport = amount_or_zero(field, raw)?,
                "utilities" => inputs.utilities = amount_or_zero(field, raw)?,
                "loanEmi" => inputs.loan_emi = amount_or_zero(field, raw)?,
                "insurance" => inputs.insurance = amount_or_zero(field, raw)?,
                "subscriptions" => inputs.subscriptions = amount_or_zero(field, raw)?,
                "education" => inputs.education = amount_or_zero(field, raw)?,
                "entertainment" => inputs.entertainment = amount_or_zero(field, raw)?,
                "shopping" => inputs.shopping = amount_or_zero(field, raw)?,
                "healthcare" => inputs.healthcare = amount_or_zero(field, raw)?,
                "miscellaneous" => inputs.miscellaneous = amount_or_zero(field, raw)?,
                "savingsType" => inputs.savings_type = choice(field, raw)?,
                "savingsAmount" => inputs.savings_amount = amount_or_zero(field, raw)?,
                "savingsPercentage" => inputs.savings_percentage = amount_or_zero(field, raw)?,
                "goalType" => inputs.goal_type = choice(field, raw)?,
                "targetAmount" => inputs.target_amount = amount_or_zero(field, raw)?,
                "currentSavings" => inputs.current_savings = amount_or_zero(field, raw)?,
                "retirementContribution" => {
                    inputs.retirement_contribution = amount_or_zero(field, raw)?
                }
                "spendingBehavior" => inputs.spending_behavior = choice(field, raw)?,
                "savingStyle" => inputs.saving_style = choice(field, raw)?,
                "knowledgeLevel" => inputs.knowledge_level = choice(field, raw)?,
                "householdSize" => {
                    let trimmed = raw.trim();
                    inputs.household_size = if trimmed.is_empty() {
                        0
                    } else {
                        trimmed.parse().map_err(|_| InputError::NotANumber {
                            field: field.to_string(),
                            value: trimmed.to_string(),
                        })?
                    };
                }
                other => return Err(InputError::UnknownField(other.to_string())),
            }
        }
        inputs.validate()?;
        Ok(inputs)
    }

    /// Checks inputs that arrived already typed, e.g. deserialized from JSON.
    ///
    /// Applies the same rules as [`BudgetInputs::from_fields`]: every amount is
    /// finite and non-negative and the savings percentage is at most 100.
    pub fn validate(&self) -> Result<(), InputError> {
        let amounts = [
            ("primaryIncome", self.primary_income),
            ("secondaryIncome", self.secondary_income),
            ("passiveIncome", self.passive_income),
            ("rent", self.rent),
            ("food", self.food),
            ("transport", self.transport),
            ("utilities", self.utilities),
            ("loanEmi", self.loan_emi),
            ("insurance", self.insurance),
            ("subscriptions", self.subscriptions),
            ("education", self.education),
            ("entertainment", self.entertainment),
            ("shopping", self.shopping),
            ("healthcare", self.healthcare),
            ("miscellaneous", self.miscellaneous),
            ("savingsAmount", self.savings_amount),
            ("savingsPercentage", self.savings_percentage),
            ("targetAmount", self.target_amount),
            ("currentSavings", self.current_savings),
            ("retirementContribution", self.retirement_contribution),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(InputError::NotANumber {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
            if value < 0.0 {
                return Err(InputError::Negative {
                    field: field.to_string(),
                });
            }
        }
        if self.savings_percentage > 100.0 {
            return Err(InputError::InvalidChoice {
                field: "savingsPercentage".into(),
                reason: "percentage above 100".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::budget::{SavingStyle, SavingsType};

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blank_is_distinct_from_zero_and_garbage() {
        assert_eq!(parse_amount("rent", "   "), Ok(None));
        assert_eq!(parse_amount("rent", "0"), Ok(Some(0.0)));
        assert_eq!(parse_amount("rent", "12,500.50"), Ok(Some(12_500.5)));
        assert!(matches!(
            parse_amount("rent", "12abc"),
            Err(InputError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_amount("rent", "inf"),
            Err(InputError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_amount("rent", "-5"),
            Err(InputError::Negative { .. })
        ));
    }

    #[test]
    fn from_fields_fills_known_fields() {
        let inputs = BudgetInputs::from_fields(&fields(&[
            ("primaryIncome", "100000"),
            ("rent", "30000"),
            ("food", ""),
            ("savingsType", "percentage"),
            ("savingsPercentage", "15"),
            ("savingStyle", "automatic"),
        ]))
        .expect("valid form");
        assert_eq!(inputs.primary_income, 100_000.0);
        assert_eq!(inputs.rent, 30_000.0);
        assert_eq!(inputs.food, 0.0);
        assert_eq!(inputs.savings_type, SavingsType::Percentage);
        assert_eq!(inputs.savings_percentage, 15.0);
        assert_eq!(inputs.saving_style, SavingStyle::Automatic);
    }

    #[test]
    fn from_fields_reports_offending_field() {
        let err = BudgetInputs::from_fields(&fields(&[("transport", "lots")])).unwrap_err();
        assert_eq!(err.to_string(), "`transport` is not a number: lots");

        let err = BudgetInputs::from_fields(&fields(&[("bonus", "1")])).unwrap_err();
        assert_eq!(err, InputError::UnknownField("bonus".into()));

        let err = BudgetInputs::from_fields(&fields(&[("savingsPercentage", "120")])).unwrap_err();
        assert!(matches!(err, InputError::InvalidChoice { .. }));
    }

    #[test]
    fn validate_rejects_typed_inputs_that_forms_would_reject() {
        let negative = BudgetInputs {
            primary_income: 1_000.0,
            rent: -5_000.0,
            ..BudgetInputs::default()
        };
        assert_eq!(
            negative.validate(),
            Err(InputError::Negative {
                field: "rent".into()
            })
        );

        let oversaving = BudgetInputs {
            savings_type: SavingsType::Percentage,
            savings_percentage: 250.0,
            ..BudgetInputs::default()
        };
        assert!(matches!(
            oversaving.validate(),
            Err(InputError::InvalidChoice { .. })
        ));

        assert_eq!(BudgetInputs::default().validate(), Ok(()));
    }
}
