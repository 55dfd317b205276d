//! CLI output formatting

use crate::core::{ExecutionStatus, Notification, Outcome, RunReport, StepRecord};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "- ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static MAIL: Emoji<'_, '_> = Emoji("📧 ", "@ ");

/// Format a step outcome for display
pub fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Succeeded => style("SUCCEEDED").green().to_string(),
        Outcome::Failed => style("FAILED").red().to_string(),
        Outcome::Skipped => style("SKIPPED").dim().to_string(),
    }
}

/// Format an execution status for display
pub fn format_status(status: ExecutionStatus) -> String {
    match status {
        ExecutionStatus::Completed => style("COMPLETED").green().to_string(),
        ExecutionStatus::Failed => style("FAILED").red().to_string(),
    }
}

/// Format one evaluated step
pub fn format_step_record(record: &StepRecord) -> String {
    let icon = match record.outcome {
        Outcome::Succeeded => CHECK,
        Outcome::Failed => CROSS,
        Outcome::Skipped => SKIP,
    };

    format!(
        "{} {} {}",
        icon,
        style(&record.name).cyan(),
        format_outcome(record.outcome)
    )
}

/// Format the notification decision
pub fn format_notification(notification: &Notification) -> String {
    match notification {
        Notification::Send(message) => format!("{} Notified: {}", MAIL, style(message).bold()),
        Notification::Suppress => format!("{} Notification {}", INFO, style("disabled").dim()),
    }
}

/// Format a full run report as multi-line text
pub fn format_run_report(report: &RunReport) -> String {
    let mut lines = vec![format!(
        "{} Run {} {}",
        INFO,
        style(&report.execution_id.to_string()[..8]).dim(),
        format_status(report.status())
    )];

    lines.extend(report.steps.iter().map(|record| format!("  {}", format_step_record(record))));
    lines.push(format!("  {}", format_notification(&report.notification)));

    lines.join("\n")
}
