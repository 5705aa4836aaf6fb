use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export async trait for convenience
pub use async_trait::async_trait;

/// The crews exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crew {
    Research,
    TechnicalDoc,
}

impl Crew {
    /// Every crew, in display order
    pub const ALL: [Crew; 2] = [Crew::Research, Crew::TechnicalDoc];

    /// Key used as `crew_name` on the wire
    pub fn key(self) -> &'static str {
        match self {
            Crew::Research => "research",
            Crew::TechnicalDoc => "technical_doc",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Crew::Research => "Research",
            Crew::TechnicalDoc => "Technical Doc Generation",
        }
    }

    /// Next crew in display order, wrapping around
    pub fn next(self) -> Crew {
        match self {
            Crew::Research => Crew::TechnicalDoc,
            Crew::TechnicalDoc => Crew::Research,
        }
    }

    /// Previous crew in display order, wrapping around
    pub fn previous(self) -> Crew {
        // Two entries: previous and next coincide
        self.next()
    }
}

impl Default for Crew {
    fn default() -> Self {
        Crew::ALL[0]
    }
}

impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Crew {
    type Err = UnknownCrew;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crew::ALL
            .into_iter()
            .find(|crew| crew.key() == s)
            .ok_or_else(|| UnknownCrew(s.to_string()))
    }
}

/// Returned when parsing a crew key that is not one of [`Crew::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown crew '{0}' (expected one of: research, technical_doc)")]
pub struct UnknownCrew(pub String);

/// A task as returned by `get_crew`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub id: String,
}

/// An agent as returned by `get_crew`
///
/// Agents carry no task key: agent `i` belongs to task `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    #[serde(default)]
    pub id: Option<String>,
}

/// A directed edge between two task ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub source: String,
    pub target: String,
}

/// Response body of `GET /get_crew`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrewDescription {
    pub tasks: Vec<TaskDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeDescriptor>>,
}

impl CrewDescription {
    /// Agents, treating an absent list as empty
    pub fn agents(&self) -> &[AgentDescriptor] {
        self.agents.as_deref().unwrap_or_default()
    }

    /// Edges, treating an absent list as empty
    pub fn edges(&self) -> &[EdgeDescriptor] {
        self.edges.as_deref().unwrap_or_default()
    }
}

/// Request body of `POST /run_crew`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRequest {
    pub topic: String,
    pub crew_name: Crew,
}

/// Errors raised while talking to the crew backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Access to the crew backend
/// Implemented over HTTP by the console and by fakes in tests
#[async_trait]
pub trait CrewBackend: Send + Sync {
    /// Fetch the task/agent/edge description of a crew
    async fn get_crew(&self, crew: Crew) -> BackendResult<CrewDescription>;

    /// Run a crew on a topic, returning the report body (`None` when empty)
    async fn run_crew(&self, request: &RunRequest) -> BackendResult<Option<String>>;
}
