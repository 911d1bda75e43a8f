use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{
    errors::{FinanceError, Result},
    utils::{ensure_dir, tmp_path, write_atomic, PathResolver},
};

/// Tunables shared by the budget and goal calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerSettings {
    /// Months of expenses an emergency fund should cover.
    pub emergency_fund_months: f64,
    /// Share of monthly income that may go to a single goal before it is deemed infeasible.
    pub feasibility_ratio: f64,
    /// Horizon used for goals without a target date or month count.
    pub default_goal_months: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            emergency_fund_months: 6.0,
            feasibility_ratio: 0.6,
            default_goal_months: 6,
        }
    }
}

impl PlannerSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.emergency_fund_months.is_finite() && self.emergency_fund_months > 0.0) {
            return Err(FinanceError::ConfigError(
                "emergencyFundMonths must be positive".into(),
            ));
        }
        if !(self.feasibility_ratio > 0.0 && self.feasibility_ratio <= 1.0) {
            return Err(FinanceError::ConfigError(
                "feasibilityRatio must be within (0, 1]".into(),
            ));
        }
        if self.default_goal_months == 0 {
            return Err(FinanceError::ConfigError(
                "defaultGoalMonths must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency code shown next to amounts in CLI output.
    pub currency: String,
    pub planner: PlannerSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "INR".into(),
            planner: PlannerSettings::default(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Loads the stored configuration, falling back to defaults when none exists yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| FinanceError::ConfigError(err.to_string()))?;
        config.planner.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.planner.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
