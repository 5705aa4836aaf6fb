//! Application state and module organization
//!
//! This module contains the main App struct and re-exports all functionality
//! organized by domain.

use crew_console_sdk::{Crew, CrewBackend};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::loader::CrewGraphs;
use crate::run::RunState;

mod models;
pub use models::*;

mod commands;
pub use commands::*;

mod notifications;
pub use notifications::*;

mod crew_ops;
mod navigation;

impl App {
    /// Create the app; background requests are spawned on `tokio_handle`
    pub fn new(backend: Arc<dyn CrewBackend>, tokio_handle: tokio::runtime::Handle) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        Self {
            backend,
            selected_crew: Crew::default(),
            topic: String::new(),
            is_editing: false,
            crew_graphs: CrewGraphs::new(),
            pending_loads: 0,
            panel_scroll: BTreeMap::new(),
            panel_viewport: Viewport::default(),
            run_state: RunState::Idle,
            run_started: None,
            report_scroll: 0,
            report_viewport: Viewport::default(),
            notifications: NotificationManager::new(),
            spinner_frame: 0,
            should_quit: false,
            command_tx,
            command_rx,
            tokio_handle,
        }
    }

    /// Advance animations and drop expired notifications
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        self.notifications.cleanup_expired();
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.spinner_frame]
    }
}

const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
