//! Run trigger state machine
//!
//! `Idle -> Running -> ReportShown | ErrorShown`, and back to `Running` on the
//! next trigger. A run can only start from a settled state with a non-blank
//! topic, so at most one request is ever in flight.

use crew_console_sdk::{BackendResult, Crew, CrewBackend, RunRequest};
use tracing::{info, warn};

/// Shown when the backend answers with an empty body
pub const NO_REPORT: &str = "No report received";

/// Shown when the run request fails
pub const RUN_ERROR: &str = "Error running the backend";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    ReportShown(String),
    ErrorShown(String),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Whether a run may start for `topic`
    pub fn can_start(&self, topic: &str) -> bool {
        !self.is_running() && !topic.trim().is_empty()
    }

    /// Enter `Running` and build the request, or return `None` if a run is
    /// not allowed right now
    pub fn start(&mut self, topic: &str, crew: Crew) -> Option<RunRequest> {
        if !self.can_start(topic) {
            return None;
        }

        *self = RunState::Running;
        Some(RunRequest {
            topic: topic.to_string(),
            crew_name: crew,
        })
    }

    /// Settle a run with the backend outcome
    ///
    /// Ignored unless a run is in flight.
    pub fn finish(&mut self, outcome: BackendResult<Option<String>>) {
        if !self.is_running() {
            return;
        }

        *self = match outcome {
            Ok(Some(report)) if !report.is_empty() => RunState::ReportShown(report),
            Ok(_) => RunState::ErrorShown(NO_REPORT.to_string()),
            Err(e) => {
                warn!(error = %e, "crew run failed");
                RunState::ErrorShown(RUN_ERROR.to_string())
            }
        };
    }

    pub fn report(&self) -> Option<&str> {
        match self {
            RunState::ReportShown(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RunState::ErrorShown(message) => Some(message),
            _ => None,
        }
    }
}

/// Send a run request to the backend
pub async fn execute(
    backend: &dyn CrewBackend,
    request: RunRequest,
) -> BackendResult<Option<String>> {
    info!(crew = request.crew_name.key(), topic = %request.topic, "running crew");
    let outcome = backend.run_crew(&request).await;
    if let Ok(report) = &outcome {
        info!(
            crew = request.crew_name.key(),
            bytes = report.as_ref().map_or(0, |r| r.len()),
            "crew run finished"
        );
    }
    outcome
}
