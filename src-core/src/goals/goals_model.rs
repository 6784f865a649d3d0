use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::schema::goals;

pub const GOAL_PRIORITIES: [&str; 3] = ["high", "medium", "low"];

/// A savings target with a time horizon.
#[derive(Debug, Clone, Queryable, Identifiable, Insertable, Serialize, Deserialize)]
#[diesel(table_name = goals)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub time_horizon: String,
    pub priority: String,
    pub created_at: NaiveDateTime,
}

impl Goal {
    pub fn from_new(new: NewGoal) -> Self {
        Goal {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            time_horizon: new.time_horizon,
            priority: new.priority,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub time_horizon: String,
    pub priority: String,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("Goal name must not be empty"));
        }
        if self.target_amount <= 0.0 || !self.target_amount.is_finite() {
            return Err(invalid("Goal target amount must be positive"));
        }
        if self.current_amount < 0.0 || !self.current_amount.is_finite() {
            return Err(invalid("Goal current amount must be non-negative"));
        }
        if !GOAL_PRIORITIES.contains(&self.priority.as_str()) {
            return Err(invalid("Goal priority must be 'high', 'medium' or 'low'"));
        }
        Ok(())
    }
}

/// Progress of one goal against the portfolio's total value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub current: f64,
    pub target: f64,
    /// current / target, as a percentage. Not capped at 100.
    pub progress_percent: f64,
}

impl GoalProgress {
    /// Progress of one goal against the current portfolio value.
    ///
    /// The tracked amount is whichever is higher of the manually recorded
    /// contribution and the live portfolio total, so progress is monotonic
    /// in portfolio value for a fixed target.
    pub fn compute(goal: &Goal, portfolio_value: f64) -> Self {
        let current = goal.current_amount.max(portfolio_value);
        let progress_percent = if goal.target_amount > 0.0 {
            current / goal.target_amount * 100.0
        } else {
            0.0
        };

        GoalProgress {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            current,
            target: goal.target_amount,
            progress_percent,
        }
    }
}

fn invalid(msg: &str) -> Error {
    Error::Validation(ValidationError::InvalidInput(msg.to_string()))
}
