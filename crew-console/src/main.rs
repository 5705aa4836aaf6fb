use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crew_console::app::App;
use crew_console::backend::HttpBackend;
use crew_console::cli::{Args, Command};
use crew_console::config::Config;
use crew_console::loader::{self, CrewGraphs, CrewPanel};
use crew_console::run::{self, RunState};
use crew_console::terminal::TerminalGuard;
use crew_console::{logging, ui};
use crew_console_sdk::{Crew, CrewBackend};

fn main() -> Result<()> {
    // Values from .env feed the clap `env` fallbacks
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_args(&args);

    let tokio_runtime = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    let backend: Arc<dyn CrewBackend> = Arc::new(HttpBackend::new(config.backend_url.clone()));

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            logging::init_file(&config.log_file)?;
            info!(backend = %config.backend_url, "starting crew console");
            run_tui(backend, tokio_runtime.handle().clone())
        }
        Command::Graph { crew, json } => {
            logging::init_stderr()?;
            let graphs = match crew {
                Some(crew) => {
                    let panel = tokio_runtime.block_on(loader::load_crew(backend.as_ref(), crew));
                    CrewGraphs::from([(crew, panel)])
                }
                None => tokio_runtime.block_on(loader::load_all(backend.as_ref())),
            };
            print_graphs(&graphs, json)
        }
        Command::Run { crew, topic } => {
            logging::init_stderr()?;
            run_once(backend.as_ref(), &tokio_runtime, crew, &topic)
        }
    }
}

fn run_tui(backend: Arc<dyn CrewBackend>, handle: tokio::runtime::Handle) -> Result<()> {
    // Restores the terminal on every exit path
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(backend, handle);
    app.start_loading();

    run_app(&mut terminal, &mut app)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll_commands();
        app.tick();

        terminal.draw(|f| ui::ui(f, &mut *app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }
    }
}

fn run_once(
    backend: &dyn CrewBackend,
    tokio_runtime: &tokio::runtime::Runtime,
    crew: Crew,
    topic: &str,
) -> Result<()> {
    let mut state = RunState::Idle;
    let Some(request) = state.start(topic, crew) else {
        bail!("topic must not be blank");
    };

    let outcome = tokio_runtime.block_on(run::execute(backend, request));
    state.finish(outcome);

    match state {
        RunState::ReportShown(report) => {
            println!("{}", report);
            Ok(())
        }
        RunState::ErrorShown(message) => bail!(message),
        other => bail!("run did not settle: {:?}", other),
    }
}

fn print_graphs(graphs: &CrewGraphs, json: bool) -> Result<()> {
    if json {
        let mut value = serde_json::Map::new();
        for panel in graphs.values() {
            value.insert(panel.crew.key().to_string(), panel_json(panel)?);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for panel in graphs.values() {
        println!("== {} ({})", panel.label(), panel.crew.key());
        if let Some(error) = &panel.error {
            println!("   {}", error);
            continue;
        }
        for node in &panel.graph.nodes {
            println!(
                "   [{}] {} ({}, {})",
                node.subtitle, node.title, node.position.x, node.position.y
            );
        }
        for edge in &panel.graph.edges {
            println!("   {} -> {}  #{}", edge.source, edge.target, edge.id);
        }
    }
    Ok(())
}

fn panel_json(panel: &CrewPanel) -> Result<serde_json::Value> {
    Ok(serde_json::json!({
        "label": panel.label(),
        "nodes": serde_json::to_value(&panel.graph.nodes)?,
        "edges": serde_json::to_value(&panel.graph.edges)?,
        "error": panel.error,
    }))
}
