//! deploy-pipeline - run a project's tests, deploy it, and send one summary

pub mod cli;
pub mod collaborators;
pub mod core;

// Re-export commonly used types
pub use collaborators::{Logger, NotificationSettings, Notifier, Project};
pub use collaborators::{
    CommandNotifier, CommandProject, ConsoleNotifier, ShellCommand, TracingLogger,
};
pub use crate::core::{
    ExecutionStatus, Notification, Outcome, Pipeline, RunReport, Step, StepRecord,
};
pub use crate::core::config::PipelineConfig;
