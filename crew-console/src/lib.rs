// Application state and key handling
pub mod app;

// HTTP backend client
pub mod backend;

// CLI arguments and resolved configuration
pub mod cli;
pub mod config;

// Crew description -> renderable graph
pub mod graph;

// Crew graph loading
pub mod loader;

// Tracing setup
pub mod logging;

// Run trigger state machine
pub mod run;

// Terminal setup and restore
pub mod terminal;

// TUI rendering
pub mod ui;
