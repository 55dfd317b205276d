//! Capabilities the pipeline consumes, and the implementations the binary wires

pub mod command;
pub mod logger;
pub mod notifier;

pub use command::{CommandError, CommandProject, ShellCommand};
pub use logger::TracingLogger;
pub use notifier::{CommandNotifier, ConsoleNotifier};

/// The project being tested and deployed
///
/// `run_tests` and `deploy` return a result string. Only the exact value
/// [`SUCCESS_MARKER`](crate::core::outcome::SUCCESS_MARKER) counts as success.
pub trait Project {
    fn has_tests(&self) -> bool;

    fn run_tests(&self) -> String;

    fn deploy(&self) -> String;
}

/// Sink for pipeline log lines
pub trait Logger {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Transport for the end-of-run summary
pub trait Notifier {
    /// Send the message. Delivery failures are not reported back.
    fn send(&self, message: &str);
}

/// Configuration read by the notification policy
pub trait NotificationSettings {
    fn notifications_enabled(&self) -> bool;
}

impl<T: Project + ?Sized> Project for &T {
    fn has_tests(&self) -> bool {
        (**self).has_tests()
    }

    fn run_tests(&self) -> String {
        (**self).run_tests()
    }

    fn deploy(&self) -> String {
        (**self).deploy()
    }
}

impl<T: Logger + ?Sized> Logger for &T {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

impl<T: NotificationSettings + ?Sized> NotificationSettings for &T {
    fn notifications_enabled(&self) -> bool {
        (**self).notifications_enabled()
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}
