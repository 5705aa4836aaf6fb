//! CLI argument parsing

use clap::{Parser, Subcommand};
use crew_console_sdk::Crew;
use std::path::PathBuf;

use crate::config::DEFAULT_BACKEND_URL;

/// Crew Console CLI Arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "crew-console",
    version,
    about = "Browse crew workflows and run them against the crew backend"
)]
pub struct Args {
    /// Base address of the crew backend
    #[arg(long, env = "CREW_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Log file (defaults to the user data directory)
    #[arg(long, env = "CREW_CONSOLE_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive terminal UI (default)
    Tui,

    /// Load crew graphs and print them
    Graph {
        /// Only this crew (research, technical_doc)
        #[arg(long)]
        crew: Option<Crew>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run a crew once and print the report
    Run {
        /// Crew to run (research, technical_doc)
        #[arg(long, default_value_t = Crew::default())]
        crew: Crew,

        /// Topic to submit
        #[arg(long)]
        topic: String,
    },
}
