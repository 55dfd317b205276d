//! Scenario tests - full runs against recording collaborators

mod helpers;

use deploy_pipeline::core::{ExecutionStatus, Notification, Outcome, DEPLOY_STEP, TESTS_STEP};
use helpers::*;

/// Tests pass, deploy passes, notifications on
#[test]
fn test_successful_run_notifies_success() {
    let project = MockProject::with_tests("success", "success");

    let observed = run_observed(&project, true);

    assert_eq!(
        observed.logs,
        vec!["Tests passed", "Deployment successful", "Sending email"]
    );
    assert_eq!(observed.sent, vec!["Deployment completed successfully"]);
    assert_eq!(observed.report.outcome(TESTS_STEP), Some(Outcome::Succeeded));
    assert_eq!(observed.report.outcome(DEPLOY_STEP), Some(Outcome::Succeeded));
    assert_eq!(observed.report.status(), ExecutionStatus::Completed);
    assert_eq!(project.test_runs(), 1);
    assert_eq!(project.deploys(), 1);
}

/// Tests fail, notifications on: deploy never invoked
#[test]
fn test_failing_tests_skip_deploy() {
    let project = MockProject::with_tests("failure", "success");

    let observed = run_observed(&project, true);

    assert_eq!(observed.logs, vec!["Tests failed", "Sending email"]);
    assert_eq!(observed.sent, vec!["Tests failed"]);
    assert_eq!(project.deploys(), 0);
    assert_eq!(observed.report.outcome(DEPLOY_STEP), None);
    assert_eq!(observed.report.status(), ExecutionStatus::Failed);
}

/// No tests, deploy passes, notifications off
#[test]
fn test_no_tests_with_notifications_disabled() {
    let project = MockProject::without_tests("success");

    let observed = run_observed(&project, false);

    assert_eq!(
        observed.logs,
        vec!["No tests", "Deployment successful", "Email disabled"]
    );
    assert!(observed.sent.is_empty());
    assert_eq!(observed.report.notification, Notification::Suppress);
    assert_eq!(observed.report.message, "Deployment completed successfully");
    assert_eq!(project.test_runs(), 0);
}

/// Tests pass, deploy fails
#[test]
fn test_failed_deploy_notifies_failure() {
    let project = MockProject::with_tests("success", "failure");

    let observed = run_observed(&project, true);

    assert_eq!(
        observed.logs,
        vec!["Tests passed", "Deployment failed", "Sending email"]
    );
    assert_eq!(observed.sent, vec!["Deployment failed"]);
    assert_eq!(observed.report.status(), ExecutionStatus::Failed);
}

/// No tests, deploy fails, notifications off
#[test]
fn test_no_tests_and_failed_deploy() {
    let project = MockProject::without_tests("");

    let observed = run_observed(&project, false);

    assert_eq!(observed.logs, vec!["No tests", "Deployment failed", "Email disabled"]);
    assert_eq!(observed.report.message, "Deployment failed");
    assert!(observed.sent.is_empty());
}

/// Failure lines go to the error level, everything else to info
#[test]
fn test_log_levels() {
    let project = MockProject::with_tests("success", "failure");
    let settings = FixedSettings::new(true);
    let notifier = RecordingNotifier::default();
    let logger = RecordingLogger::default();

    deploy_pipeline::core::Pipeline::new(&settings, &notifier, &logger).run(&project);

    assert_eq!(
        logger.entries(),
        vec![
            (Level::Info, "Tests passed".to_string()),
            (Level::Error, "Deployment failed".to_string()),
            (Level::Info, "Sending email".to_string()),
        ]
    );
}
