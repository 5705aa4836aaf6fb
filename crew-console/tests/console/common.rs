//! Common fixtures and fake backends for console tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crew_console::app::App;
use crew_console::ui;
use ratatui::{backend::TestBackend, Terminal};
use crew_console_sdk::{
    async_trait, AgentDescriptor, BackendError, BackendResult, Crew, CrewBackend,
    CrewDescription, EdgeDescriptor, RunRequest, TaskDescriptor,
};

/// Scripted answer of the fake backend
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(u16),
    Transport,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> BackendResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(BackendError::Status {
                status: *status,
                url: "http://fake/".to_string(),
            }),
            Reply::Transport => Err(BackendError::Transport("connection refused".to_string())),
        }
    }
}

/// In-memory backend with scripted replies
pub struct FakeBackend {
    crews: Mutex<HashMap<Crew, Reply<CrewDescription>>>,
    run_reply: Mutex<Reply<Option<String>>>,
    pub get_calls: AtomicUsize,
    pub run_calls: AtomicUsize,
    pub last_request: Mutex<Option<RunRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            crews: Mutex::new(HashMap::new()),
            run_reply: Mutex::new(Reply::Ok(Some("report".to_string()))),
            get_calls: AtomicUsize::new(0),
            run_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_crew(self, crew: Crew, reply: Reply<CrewDescription>) -> Self {
        self.set_crew(crew, reply);
        self
    }

    /// Change what later `get_crew` calls return for `crew`
    pub fn set_crew(&self, crew: Crew, reply: Reply<CrewDescription>) {
        self.crews.lock().unwrap().insert(crew, reply);
    }

    pub fn get_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn with_run_reply(self, reply: Reply<Option<String>>) -> Self {
        *self.run_reply.lock().unwrap() = reply;
        self
    }

    pub fn run_count(&self) -> usize {
        self.run_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CrewBackend for FakeBackend {
    async fn get_crew(&self, crew: Crew) -> BackendResult<CrewDescription> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.crews
            .lock()
            .unwrap()
            .get(&crew)
            .cloned()
            .unwrap_or(Reply::Status(404))
            .resolve()
    }

    async fn run_crew(&self, request: &RunRequest) -> BackendResult<Option<String>> {
        self.run_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.run_reply.lock().unwrap().resolve()
    }
}

pub fn tasks(ids: &[&str]) -> Vec<TaskDescriptor> {
    ids.iter()
        .map(|id| TaskDescriptor { id: id.to_string() })
        .collect()
}

pub fn agents(ids: &[&str]) -> Vec<AgentDescriptor> {
    ids.iter()
        .map(|id| AgentDescriptor {
            id: Some(id.to_string()),
        })
        .collect()
}

pub fn edge(source: &str, target: &str) -> EdgeDescriptor {
    EdgeDescriptor {
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Two tasks, two agents, one edge
pub fn two_task_description() -> CrewDescription {
    CrewDescription {
        tasks: tasks(&["t1", "t2"]),
        agents: Some(agents(&["a1", "a2"])),
        edges: Some(vec![edge("t1", "t2")]),
    }
}

/// Shape of the research crew: researcher then reporting analyst
pub fn research_description() -> CrewDescription {
    CrewDescription {
        tasks: tasks(&["research_task", "reporting_task"]),
        agents: Some(agents(&["researcher", "reporting_analyst"])),
        edges: Some(vec![edge("research_task", "reporting_task")]),
    }
}

/// Shape of the technical doc crew: search, draft, review
pub fn technical_doc_description() -> CrewDescription {
    CrewDescription {
        tasks: tasks(&["code_search_task", "draft_doc_task", "review_doc_task"]),
        agents: Some(agents(&["code_searcher", "technical_writer", "doc_reviewer"])),
        edges: Some(vec![
            edge("code_search_task", "draft_doc_task"),
            edge("draft_doc_task", "review_doc_task"),
        ]),
    }
}

/// Poll the app until `done` holds or the timeout expires
pub fn wait_for(app: &mut App, done: impl Fn(&App) -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        app.poll_commands();
        if done(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

/// Draw one frame of the full screen and return it as text, one row per line
pub fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
