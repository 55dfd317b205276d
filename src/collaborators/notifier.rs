//! Summary notifiers

use crate::cli::output::{style, MAIL};
use crate::collaborators::{Notifier, ShellCommand};
use tracing::{info, warn};

/// Prints the summary to stderr, keeping stdout for the run report
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn send(&self, message: &str) {
        eprintln!("{} {}", MAIL, style(message).bold());
    }
}

/// Pipes the summary into a shell command, such as a mailer
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    command: ShellCommand,
}

impl CommandNotifier {
    pub fn new(command: ShellCommand) -> Self {
        Self { command }
    }
}

impl Notifier for CommandNotifier {
    fn send(&self, message: &str) {
        info!("Sending summary via: {}", self.command.command());
        if let Err(e) = self.command.run(Some(message)) {
            warn!("Notification command failed: {}", e);
        }
    }
}
