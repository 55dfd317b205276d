//! Pipeline orchestration

use crate::collaborators::{Logger, NotificationSettings, Notifier, Project};
use crate::core::{
    notification::{Notification, RunOutcomes, DEPLOY_STEP, TESTS_STEP},
    outcome::{is_success, Outcome},
    state::RunReport,
    step::{run_chain, Step},
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Test-then-deploy pipeline
///
/// Owns its collaborators but no per-run state: every call to [`Pipeline::run`]
/// builds its own steps, so runs are independent of each other.
pub struct Pipeline<S, N, L> {
    settings: S,
    notifier: N,
    logger: L,
}

impl<S, N, L> Pipeline<S, N, L>
where
    S: NotificationSettings,
    N: Notifier,
    L: Logger,
{
    pub fn new(settings: S, notifier: N, logger: L) -> Self {
        Self {
            settings,
            notifier,
            logger,
        }
    }

    /// Test and deploy the project, then notify
    ///
    /// Deploy only runs when the tests step did not fail. Exactly one summary
    /// message is derived and it is sent at most once.
    pub fn run<P: Project + ?Sized>(&self, project: &P) -> RunReport {
        let execution_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!("Starting pipeline run ({})", execution_id);

        let steps = [self.tests_step::<P>(), self.deploy_step::<P>()];
        let records = run_chain(&steps, project);

        let message = RunOutcomes::from_records(&records).message();
        let notification = Notification::decide(self.settings.notifications_enabled(), message);
        self.dispatch(&notification);

        info!("Pipeline run finished ({}): {}", execution_id, message);

        RunReport {
            execution_id,
            started_at,
            completed_at: Utc::now(),
            steps: records,
            message: message.to_string(),
            notification,
        }
    }

    fn tests_step<P: Project + ?Sized>(&self) -> Step<'_, P> {
        Step::new(TESTS_STEP, |project: &P| {
            if !project.has_tests() {
                return Outcome::Skipped;
            }
            Outcome::from_success(is_success(&project.run_tests()))
        })
        .on_succeeded(move || self.logger.info("Tests passed"))
        .on_failed(move || self.logger.error("Tests failed"))
        .on_skipped(move || self.logger.info("No tests"))
    }

    fn deploy_step<P: Project + ?Sized>(&self) -> Step<'_, P> {
        Step::new(DEPLOY_STEP, |project: &P| {
            Outcome::from_success(is_success(&project.deploy()))
        })
        .on_succeeded(move || self.logger.info("Deployment successful"))
        .on_failed(move || self.logger.error("Deployment failed"))
    }

    fn dispatch(&self, notification: &Notification) {
        match notification {
            Notification::Send(message) => {
                self.logger.info("Sending email");
                self.notifier.send(message);
            }
            Notification::Suppress => self.logger.info("Email disabled"),
        }
    }
}
