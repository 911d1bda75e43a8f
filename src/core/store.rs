//! Session-scoped cache of a user's goals and transactions.
//!
//! The cache lives only between `login` and `logout`; logging out persists
//! pending changes and drops everything held in memory.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::PlannerSettings;
use crate::core::errors::{FinanceError, Result};
use crate::core::services::{
    AggregateService, GoalPlanningService, GoalSimulationService, GoalTrackingService,
};
use crate::core::time::{Clock, SystemClock};
use crate::domain::common::Principal;
use crate::domain::goal::{GoalPlanMetrics, SavingsGoal, SimulationScenario, TrackingStatus};
use crate::domain::transaction::{MonthlyAggregates, TransactionData, TransactionType};
use crate::storage::{StorageBackend, UserSnapshot};

/// User-supplied fields for creating or editing a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_months: Option<u32>,
}

impl GoalDraft {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FinanceError::InvalidInput("goal name must not be empty".into()));
        }
        if !(self.target_amount.is_finite() && self.target_amount > 0.0) {
            return Err(FinanceError::InvalidInput(
                "goal target must be a positive amount".into(),
            ));
        }
        validate_amount("current amount", self.current_amount)?;
        if self.target_months == Some(0) {
            return Err(FinanceError::InvalidInput(
                "goal duration must be at least one month".into(),
            ));
        }
        Ok(())
    }
}

/// User-supplied fields for recording a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub notes: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub payment_type: String,
    pub transaction_type: TransactionType,
}

/// Everything the goal detail view shows for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInsights {
    pub goal: SavingsGoal,
    pub monthly_income: f64,
    pub plan: GoalPlanMetrics,
    pub tracking: TrackingStatus,
    pub scenarios: [SimulationScenario; 3],
}

struct Session {
    user: Principal,
    goals: Vec<SavingsGoal>,
    transactions: Vec<TransactionData>,
    dirty: bool,
}

/// Facade that coordinates the signed-in user's data, persistence and derived views.
pub struct FinanceStore {
    session: Option<Session>,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
    settings: PlannerSettings,
}

impl FinanceStore {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self::with_clock(storage, Box::new(SystemClock))
    }

    pub fn with_clock(storage: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Self {
        Self {
            session: None,
            storage,
            clock,
            settings: PlannerSettings::default(),
        }
    }

    pub fn set_settings(&mut self, settings: PlannerSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Opens a session for `user`, replacing any session that is already open.
    pub fn login(&mut self, user: Principal) -> Result<()> {
        if user.is_anonymous() {
            return Err(FinanceError::InvalidInput(
                "principal must not be empty".into(),
            ));
        }
        self.logout()?;
        let snapshot = self.storage.load(&user)?;
        tracing::info!(
            user = %user,
            goals = snapshot.goals.len(),
            transactions = snapshot.transactions.len(),
            "session opened"
        );
        self.session = Some(Session {
            user,
            goals: snapshot.goals,
            transactions: snapshot.transactions,
            dirty: false,
        });
        Ok(())
    }

    /// Persists pending changes and clears the cache. A no-op without a session.
    pub fn logout(&mut self) -> Result<()> {
        if self.session.as_ref().is_some_and(|session| session.dirty) {
            self.save()?;
        }
        if let Some(session) = self.session.take() {
            tracing::info!(user = %session.user, "session closed");
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&Principal> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.dirty)
    }

    pub fn save(&mut self) -> Result<PathBuf> {
        let session = self.session.as_mut().ok_or(FinanceError::NotAuthenticated)?;
        let snapshot = UserSnapshot {
            saved_at: Some(Utc::now()),
            goals: session.goals.clone(),
            transactions: session.transactions.clone(),
            ..UserSnapshot::empty(session.user.clone())
        };
        let path = self.storage.save(&snapshot)?;
        session.dirty = false;
        tracing::info!(user = %session.user, path = %path.display(), "snapshot saved");
        Ok(path)
    }

    pub fn goals(&self) -> Result<&[SavingsGoal]> {
        Ok(&self.session()?.goals)
    }

    pub fn goal(&self, id: Uuid) -> Result<&SavingsGoal> {
        self.session()?
            .goals
            .iter()
            .find(|goal| goal.id == id)
            .ok_or(FinanceError::GoalNotFound(id))
    }

    pub fn create_goal(&mut self, draft: GoalDraft) -> Result<SavingsGoal> {
        draft.validate()?;
        let now = self.clock.now();
        let session = self.session_mut()?;
        let goal = SavingsGoal {
            id: Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            target_amount: draft.target_amount,
            current_amount: draft.current_amount,
            user: session.user.clone(),
            created_at: now,
            target_date: draft.target_date,
            target_months: draft.target_months,
        };
        session.goals.push(goal.clone());
        session.dirty = true;
        tracing::info!(goal = %goal.name, id = %goal.id, "goal created");
        Ok(goal)
    }

    /// Replaces the editable fields of a goal, keeping its identity and creation time.
    pub fn edit_goal(&mut self, id: Uuid, draft: GoalDraft) -> Result<SavingsGoal> {
        draft.validate()?;
        let session = self.session_mut()?;
        let goal = session
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(FinanceError::GoalNotFound(id))?;
        goal.name = draft.name.trim().to_string();
        goal.target_amount = draft.target_amount;
        goal.current_amount = draft.current_amount;
        goal.target_date = draft.target_date;
        goal.target_months = draft.target_months;
        let updated = goal.clone();
        session.dirty = true;
        tracing::info!(id = %id, "goal edited");
        Ok(updated)
    }

    /// Sets the amount saved so far.
    pub fn update_goal_progress(&mut self, id: Uuid, current_amount: f64) -> Result<SavingsGoal> {
        validate_amount("current amount", current_amount)?;
        let session = self.session_mut()?;
        let goal = session
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(FinanceError::GoalNotFound(id))?;
        goal.current_amount = current_amount;
        let updated = goal.clone();
        session.dirty = true;
        tracing::info!(id = %id, current_amount, "goal progress updated");
        Ok(updated)
    }

    pub fn delete_goal(&mut self, id: Uuid) -> Result<SavingsGoal> {
        let session = self.session_mut()?;
        let idx = session
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(FinanceError::GoalNotFound(id))?;
        session.dirty = true;
        tracing::info!(id = %id, "goal deleted");
        Ok(session.goals.remove(idx))
    }

    pub fn transactions(&self) -> Result<&[TransactionData]> {
        Ok(&self.session()?.transactions)
    }

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<TransactionData> {
        validate_amount("amount", draft.amount)?;
        if draft.amount == 0.0 {
            return Err(FinanceError::InvalidInput(
                "transaction amount must be greater than zero".into(),
            ));
        }
        let now = self.clock.now();
        let session = self.session_mut()?;
        let txn = TransactionData {
            id: Uuid::new_v4(),
            amount: draft.amount,
            category: draft.category.trim().to_string(),
            notes: draft.notes,
            date: draft.date,
            payment_type: draft.payment_type,
            user: session.user.clone(),
            created_at: now,
            transaction_type: draft.transaction_type,
        };
        session.transactions.push(txn.clone());
        session.dirty = true;
        tracing::info!(id = %txn.id, amount = txn.amount, "transaction recorded");
        Ok(txn)
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> Result<TransactionData> {
        let session = self.session_mut()?;
        let idx = session
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(FinanceError::TransactionNotFound(id))?;
        session.dirty = true;
        tracing::info!(id = %id, "transaction deleted");
        Ok(session.transactions.remove(idx))
    }

    pub fn monthly_aggregates(&self, reference: NaiveDate) -> Result<MonthlyAggregates> {
        Ok(AggregateService::monthly(&self.session()?.transactions, reference))
    }

    pub fn current_month_aggregates(&self) -> Result<MonthlyAggregates> {
        self.monthly_aggregates(self.clock.today())
    }

    /// Plans, tracks and simulates a goal against this month's recorded income.
    pub fn goal_insights(&self, id: Uuid) -> Result<GoalInsights> {
        let goal = self.goal(id)?.clone();
        let monthly_income = self.current_month_aggregates()?.income;
        let clock = self.clock.as_ref();
        Ok(GoalInsights {
            plan: GoalPlanningService::plan_with(&goal, monthly_income, clock, &self.settings),
            tracking: GoalTrackingService::track_with(&goal, clock, &self.settings),
            scenarios: GoalSimulationService::simulate_with(
                &goal,
                monthly_income,
                clock,
                &self.settings,
            ),
            monthly_income,
            goal,
        })
    }

    fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(FinanceError::NotAuthenticated)
    }

    fn session_mut(&mut self) -> Result<&mut Session> {
        self.session.as_mut().ok_or(FinanceError::NotAuthenticated)
    }
}

fn validate_amount(label: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(FinanceError::InvalidInput(format!(
            "{label} must be a non-negative amount"
        )));
    }
    Ok(())
}
