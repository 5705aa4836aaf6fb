//! Crew description to renderable graph transformation
//!
//! Tasks become nodes laid out in a single vertical column, in the order the
//! backend returned them. Agents are matched to tasks by position only: agent
//! `i` is the agent of task `i`. The backend has to keep both lists aligned;
//! nothing here can detect a mismatch.

use crew_console_sdk::CrewDescription;
use serde::Serialize;

/// Subtitle used when a task has no agent at its position
pub const UNKNOWN_AGENT: &str = "Unknown";

/// Horizontal position shared by every node
pub const COLUMN_X: i32 = 300;

/// Vertical distance between consecutive nodes
pub const ROW_SPACING: i32 = 200;

/// Vertical position of the first node
pub const ROW_OFFSET: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A task node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    /// Name of the agent assigned to the task
    pub subtitle: String,
    pub position: Position,
}

/// Visual style of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeStyle {
    pub animated: bool,
    pub stroke: &'static str,
    pub dash: &'static str,
}

impl EdgeStyle {
    /// Style of every edge between sequential tasks
    pub const SEQUENCE: EdgeStyle = EdgeStyle {
        animated: true,
        stroke: "#005B7F",
        dash: "4 2",
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    /// Unique even when several edges join the same pair of tasks
    pub id: String,
    pub source: String,
    pub target: String,
    pub style: EdgeStyle,
}

/// Nodes and edges of one crew, ready to draw
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderableGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl RenderableGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Edges running from `source` to `target`, in input order
    pub fn edges_between<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
    ) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.source == source && e.target == target)
    }
}

/// Position of the node at `index` in the column
pub fn node_position(index: usize) -> Position {
    let row = i32::try_from(index).unwrap_or(i32::MAX);
    Position {
        x: COLUMN_X,
        y: row.saturating_mul(ROW_SPACING).saturating_add(ROW_OFFSET),
    }
}

/// Identifier of the edge at `index`
pub fn edge_id(source: &str, target: &str, index: usize) -> String {
    format!("seq-{}-{}-{}", source, target, index)
}

/// Build the graph for a crew description
///
/// Edge endpoints are copied as-is, even when they name no task.
pub fn build_graph(description: &CrewDescription) -> RenderableGraph {
    let agents = description.agents();

    let nodes = description
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let agent_name = agents
                .get(idx)
                .and_then(|agent| agent.id.as_deref())
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_AGENT);

            GraphNode {
                id: task.id.clone(),
                title: task.id.clone(),
                subtitle: agent_name.to_string(),
                position: node_position(idx),
            }
        })
        .collect();

    let edges = description
        .edges()
        .iter()
        .enumerate()
        .map(|(i, edge)| GraphEdge {
            id: edge_id(&edge.source, &edge.target, i),
            source: edge.source.clone(),
            target: edge.target.clone(),
            style: EdgeStyle::SEQUENCE,
        })
        .collect();

    RenderableGraph { nodes, edges }
}
