//! Summary message derivation and the send/suppress decision

use crate::core::{outcome::Outcome, step::StepRecord};
use serde::{Deserialize, Serialize};

pub const TESTS_STEP: &str = "tests";
pub const DEPLOY_STEP: &str = "deploy";

pub const TESTS_FAILED: &str = "Tests failed";
pub const DEPLOYMENT_SUCCEEDED: &str = "Deployment completed successfully";
pub const DEPLOYMENT_FAILED: &str = "Deployment failed";

/// Outcomes accumulated over one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcomes {
    pub tests: Option<Outcome>,
    /// Absent when the chain stopped before deploying
    pub deploy: Option<Outcome>,
}

impl RunOutcomes {
    pub fn from_records(records: &[StepRecord]) -> Self {
        let outcome_of = |name: &str| {
            records
                .iter()
                .find(|record| record.name == name)
                .map(|record| record.outcome)
        };

        Self {
            tests: outcome_of(TESTS_STEP),
            deploy: outcome_of(DEPLOY_STEP),
        }
    }

    /// The one summary message for this run
    ///
    /// # Panics
    /// Panics on a combination a run cannot produce: deploy after failed
    /// tests, a missing tests step, or a Skipped deploy.
    pub fn message(&self) -> &'static str {
        match (self.tests, self.deploy) {
            (Some(Outcome::Failed), None) => TESTS_FAILED,
            (Some(Outcome::Succeeded | Outcome::Skipped), Some(Outcome::Succeeded)) => {
                DEPLOYMENT_SUCCEEDED
            }
            (Some(Outcome::Succeeded | Outcome::Skipped), Some(Outcome::Failed)) => {
                DEPLOYMENT_FAILED
            }
            (tests, deploy) => panic!(
                "run produced tests={:?} deploy={:?}, which no step chain can yield",
                tests, deploy
            ),
        }
    }
}

/// What to do with the summary message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "message", rename_all = "lowercase")]
pub enum Notification {
    Send(String),
    Suppress,
}

impl Notification {
    pub fn decide(enabled: bool, message: &str) -> Self {
        if enabled {
            Notification::Send(message.to_string())
        } else {
            Notification::Suppress
        }
    }

    pub fn is_send(&self) -> bool {
        matches!(self, Notification::Send(_))
    }
}
