//! Main application state

use chrono::{DateTime, Local};
use crew_console_sdk::{Crew, CrewBackend};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::app::{AppCommand, NotificationManager};
use crate::loader::CrewGraphs;
use crate::run::RunState;

/// Main application state
pub struct App {
    pub backend: Arc<dyn CrewBackend>,

    // Run form
    pub selected_crew: Crew,
    pub topic: String,
    pub is_editing: bool,

    // Crew graphs, filled in as loads complete
    pub crew_graphs: CrewGraphs,
    pub pending_loads: usize,
    pub panel_scroll: BTreeMap<Crew, u16>,
    pub panel_viewport: Viewport,

    // Run trigger
    pub run_state: RunState,
    pub run_started: Option<DateTime<Local>>,
    pub report_scroll: u16,
    pub report_viewport: Viewport,

    pub notifications: NotificationManager,
    pub spinner_frame: usize,
    pub should_quit: bool,

    // Background task plumbing
    pub(crate) command_tx: mpsc::UnboundedSender<AppCommand>,
    pub(crate) command_rx: mpsc::UnboundedReceiver<AppCommand>,
    pub(crate) tokio_handle: tokio::runtime::Handle,
}

/// Inner size of a scrollable pane as of the last drawn frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}
