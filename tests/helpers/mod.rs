//! Test utility functions for deploy-pipeline

#![allow(dead_code)]

use deploy_pipeline::collaborators::{Logger, NotificationSettings, Notifier, Project};
use deploy_pipeline::core::{Pipeline, RunReport};
use std::cell::{Cell, RefCell};

/// Log level recorded by [`RecordingLogger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Mock project that returns predefined results and counts calls
pub struct MockProject {
    has_tests: bool,
    tests_result: String,
    deploy_result: String,
    test_runs: Cell<usize>,
    deploys: Cell<usize>,
}

impl MockProject {
    pub fn new(has_tests: bool, tests_result: &str, deploy_result: &str) -> Self {
        Self {
            has_tests,
            tests_result: tests_result.to_string(),
            deploy_result: deploy_result.to_string(),
            test_runs: Cell::new(0),
            deploys: Cell::new(0),
        }
    }

    /// Project with a test suite
    pub fn with_tests(tests_result: &str, deploy_result: &str) -> Self {
        Self::new(true, tests_result, deploy_result)
    }

    /// Project without a test suite
    pub fn without_tests(deploy_result: &str) -> Self {
        Self::new(false, "success", deploy_result)
    }

    pub fn test_runs(&self) -> usize {
        self.test_runs.get()
    }

    pub fn deploys(&self) -> usize {
        self.deploys.get()
    }
}

impl Project for MockProject {
    fn has_tests(&self) -> bool {
        self.has_tests
    }

    fn run_tests(&self) -> String {
        self.test_runs.set(self.test_runs.get() + 1);
        self.tests_result.clone()
    }

    fn deploy(&self) -> String {
        self.deploys.set(self.deploys.get() + 1);
        self.deploy_result.clone()
    }
}

/// Logger that records every line with its level
#[derive(Default)]
pub struct RecordingLogger {
    lines: RefCell<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|(_, line)| line.clone()).collect()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.borrow().iter().filter(|(_, l)| l == line).count()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push((Level::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines.borrow_mut().push((Level::Error, message.to_string()));
    }
}

/// Notifier that records every sent message
#[derive(Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, message: &str) {
        self.sent.borrow_mut().push(message.to_string());
    }
}

/// Settings with a fixed flag that counts how often it is read
pub struct FixedSettings {
    enabled: bool,
    reads: Cell<usize>,
}

impl FixedSettings {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl NotificationSettings for FixedSettings {
    fn notifications_enabled(&self) -> bool {
        self.reads.set(self.reads.get() + 1);
        self.enabled
    }
}

/// Everything observed during one pipeline run
pub struct Observed {
    pub report: RunReport,
    pub logs: Vec<String>,
    pub sent: Vec<String>,
    pub settings_reads: usize,
}

/// Run a fresh pipeline against the project with recording collaborators
pub fn run_observed(project: &MockProject, notifications_enabled: bool) -> Observed {
    let settings = FixedSettings::new(notifications_enabled);
    let notifier = RecordingNotifier::default();
    let logger = RecordingLogger::default();

    let report = Pipeline::new(&settings, &notifier, &logger).run(project);

    Observed {
        report,
        logs: logger.lines(),
        sent: notifier.sent(),
        settings_reads: settings.reads(),
    }
}
