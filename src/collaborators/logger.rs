//! Logger backed by `tracing`

use crate::collaborators::Logger;

/// Forwards pipeline log lines to the installed tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "pipeline", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "pipeline", "{}", message);
    }
}
