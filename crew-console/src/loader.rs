//! Loading crew graphs from the backend
//!
//! Each crew is fetched and built on its own. A failure is stored on that
//! crew's panel and never reaches the other crew or the caller.

use std::collections::BTreeMap;

use crew_console_sdk::{Crew, CrewBackend};
use futures::future::join_all;
use tracing::{info, warn};

use crate::graph::{build_graph, RenderableGraph};

/// Shown in place of a graph that could not be loaded
pub const LOAD_ERROR: &str = "Could not load the workflow";

/// What the screen knows about one crew
#[derive(Debug, Clone, PartialEq)]
pub struct CrewPanel {
    pub crew: Crew,
    pub graph: RenderableGraph,
    pub error: Option<String>,
}

impl CrewPanel {
    pub fn loaded(crew: Crew, graph: RenderableGraph) -> Self {
        Self {
            crew,
            graph,
            error: None,
        }
    }

    pub fn failed(crew: Crew) -> Self {
        Self {
            crew,
            graph: RenderableGraph::default(),
            error: Some(LOAD_ERROR.to_string()),
        }
    }

    pub fn label(&self) -> &'static str {
        self.crew.label()
    }
}

/// Panels keyed by crew
pub type CrewGraphs = BTreeMap<Crew, CrewPanel>;

/// Fetch one crew and build its graph
pub async fn load_crew(backend: &dyn CrewBackend, crew: Crew) -> CrewPanel {
    match backend.get_crew(crew).await {
        Ok(description) => {
            let graph = build_graph(&description);
            info!(
                crew = crew.key(),
                nodes = graph.nodes.len(),
                edges = graph.edges.len(),
                "crew graph loaded"
            );
            CrewPanel::loaded(crew, graph)
        }
        Err(e) => {
            warn!(crew = crew.key(), error = %e, "failed to load crew graph");
            CrewPanel::failed(crew)
        }
    }
}

/// Fetch every crew concurrently and collect the panels
pub async fn load_all(backend: &dyn CrewBackend) -> CrewGraphs {
    join_all(Crew::ALL.into_iter().map(|crew| load_crew(backend, crew)))
        .await
        .into_iter()
        .map(|panel| (panel.crew, panel))
        .collect()
}
