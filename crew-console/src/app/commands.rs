//! Commands sent to the App from background tasks
//!
//! Requests run on the tokio runtime and report back over an unbounded
//! channel; the UI loop drains it once per frame so every state change
//! happens on the UI thread.

use crew_console_sdk::BackendResult;

use crate::loader::CrewPanel;

#[derive(Debug)]
pub enum AppCommand {
    /// A crew finished loading, successfully or not
    CrewLoaded(CrewPanel),

    /// The in-flight run settled
    RunFinished(BackendResult<Option<String>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}
