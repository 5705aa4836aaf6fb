//! Crew loading and run execution

use chrono::Local;
use std::sync::Arc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{info, warn};

use crew_console_sdk::Crew;

use super::*;
use crate::loader::{self, CrewPanel};
use crate::run;

impl App {
    /// Fetch every crew graph in the background
    ///
    /// Each crew is committed on its own when it arrives. Ignored while a
    /// previous load is still pending.
    pub fn start_loading(&mut self) {
        if self.is_loading() {
            return;
        }

        for crew in Crew::ALL {
            let backend = Arc::clone(&self.backend);
            let tx = self.command_tx.clone();
            self.pending_loads += 1;

            self.tokio_handle.spawn(async move {
                let panel = loader::load_crew(backend.as_ref(), crew).await;
                let _ = tx.send(AppCommand::CrewLoaded(panel));
            });
        }
    }

    /// Rebuild every crew graph from scratch
    pub fn reload(&mut self) {
        if self.is_loading() {
            return;
        }
        self.notifications.info("Reloading", "Fetching crew workflows");
        self.start_loading();
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    pub fn panel(&self, crew: Crew) -> Option<&CrewPanel> {
        self.crew_graphs.get(&crew)
    }

    /// Whether the run action is available right now
    pub fn can_run(&self) -> bool {
        self.run_state.can_start(&self.topic)
    }

    /// Start a run for the selected crew and the current topic
    ///
    /// Returns `false` when a run is already in flight or the topic is blank.
    pub fn trigger_run(&mut self) -> bool {
        let Some(request) = self.run_state.start(&self.topic, self.selected_crew) else {
            if !self.run_state.is_running() {
                self.notifications
                    .warning("Nothing to run", "Enter a topic before running a crew");
            }
            return false;
        };

        info!(crew = request.crew_name.key(), "run triggered");
        self.is_editing = false;
        self.report_scroll = 0;
        self.run_started = Some(Local::now());

        let backend = Arc::clone(&self.backend);
        let tx = self.command_tx.clone();
        self.tokio_handle.spawn(async move {
            let outcome = run::execute(backend.as_ref(), request).await;
            let _ = tx.send(AppCommand::RunFinished(outcome));
        });

        true
    }

    /// Drain results from background tasks (non-blocking)
    pub fn poll_commands(&mut self) {
        loop {
            match self.command_rx.try_recv() {
                Ok(command) => self.apply_command(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // App holds a sender, so this only happens during teardown
                    warn!("command channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::CrewLoaded(panel) => {
                self.pending_loads = self.pending_loads.saturating_sub(1);
                self.panel_scroll.remove(&panel.crew);
                self.crew_graphs.insert(panel.crew, panel);
            }
            AppCommand::RunFinished(outcome) => {
                self.run_started = None;
                self.run_state.finish(outcome);

                if self.run_state.report().is_some() {
                    self.notifications.success("Run complete", "Report received");
                } else if let Some(message) = self.run_state.error() {
                    let message = message.to_string();
                    self.notifications.error("Run failed", message);
                }
            }
        }
    }
}
