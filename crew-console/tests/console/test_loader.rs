//! Per-crew loading and failure containment

use std::sync::atomic::Ordering;

use super::common::*;
use crew_console::loader::*;
use crew_console_sdk::Crew;

#[tokio::test]
async fn test_load_crew_builds_graph() {
    let backend = FakeBackend::new().with_crew(Crew::Research, Reply::Ok(research_description()));

    let panel = load_crew(&backend, Crew::Research).await;
    assert_eq!(panel.crew, Crew::Research);
    assert!(panel.error.is_none());
    assert_eq!(panel.graph.nodes.len(), 2);
    assert_eq!(panel.graph.nodes[0].subtitle, "researcher");
    assert_eq!(panel.label(), "Research");
}

#[tokio::test]
async fn test_failed_load_is_empty_with_error() {
    let backend = FakeBackend::new().with_crew(Crew::Research, Reply::Status(500));

    let panel = load_crew(&backend, Crew::Research).await;
    assert!(panel.graph.is_empty());
    assert_eq!(panel.error.as_deref(), Some(LOAD_ERROR));
}

#[tokio::test]
async fn test_one_failure_does_not_affect_the_other_crew() {
    let backend = FakeBackend::new()
        .with_crew(Crew::Research, Reply::Transport)
        .with_crew(Crew::TechnicalDoc, Reply::Ok(technical_doc_description()));

    let graphs = load_all(&backend).await;
    assert_eq!(graphs.len(), 2);
    assert_eq!(backend.get_calls.load(Ordering::SeqCst), 2);

    let research = &graphs[&Crew::Research];
    assert_eq!(research.error.as_deref(), Some(LOAD_ERROR));
    assert!(research.graph.nodes.is_empty());

    let technical = &graphs[&Crew::TechnicalDoc];
    assert!(technical.error.is_none());
    assert_eq!(technical.graph.nodes.len(), 3);
    assert_eq!(technical.graph.edges.len(), 2);
}

#[tokio::test]
async fn test_both_failures_still_yield_every_panel() {
    let backend = FakeBackend::new();

    let graphs = load_all(&backend).await;
    for crew in Crew::ALL {
        assert_eq!(graphs[&crew].error.as_deref(), Some(LOAD_ERROR));
    }
}

#[tokio::test]
async fn test_panels_are_keyed_in_display_order() {
    let backend = FakeBackend::new()
        .with_crew(Crew::Research, Reply::Ok(research_description()))
        .with_crew(Crew::TechnicalDoc, Reply::Ok(technical_doc_description()));

    let graphs = load_all(&backend).await;
    let keys: Vec<_> = graphs.keys().copied().collect();
    assert_eq!(keys, Crew::ALL.to_vec());
}
