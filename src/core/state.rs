//! Run report models

use crate::core::{notification::Notification, outcome::Outcome, step::StepRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Overall run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// No step failed
    Completed,
    /// Some step failed
    Failed,
}

/// Everything one pipeline run decided
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique execution ID
    pub execution_id: Uuid,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the notification decision was dispatched
    pub completed_at: DateTime<Utc>,

    /// Evaluated steps, in order
    pub steps: Vec<StepRecord>,

    /// Summary message derived from the step outcomes
    pub message: String,

    /// Whether the message was sent or suppressed
    pub notification: Notification,
}

impl RunReport {
    pub fn status(&self) -> ExecutionStatus {
        if self.steps.iter().any(|s| s.outcome == Outcome::Failed) {
            ExecutionStatus::Failed
        } else {
            ExecutionStatus::Completed
        }
    }

    /// Outcome of a step, if it was evaluated
    pub fn outcome(&self, step_name: &str) -> Option<Outcome> {
        self.steps
            .iter()
            .find(|s| s.name == step_name)
            .map(|s| s.outcome)
    }

    pub fn notified(&self) -> bool {
        self.notification.is_send()
    }
}
