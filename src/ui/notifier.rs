//! Notification sink used by the grid controller and the import workflow.

use super::messages::{error, info, success, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Destructive,
}

/// Fire-and-forget user notifications (toasts in a GUI, colored lines here).
pub trait Notifier {
    fn notify(&self, title: &str, description: &str, severity: Severity);
}

/// Prints notifications on the terminal through the message helpers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        let line = format!("{title}: {description}");
        match severity {
            Severity::Info => info(line),
            Severity::Success => success(line),
            Severity::Warning => warning(line),
            Severity::Destructive => error(line),
        }
    }
}
