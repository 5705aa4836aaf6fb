//! Graph transformation properties

use std::collections::HashSet;

use super::common::*;
use crew_console::graph::*;
use crew_console_sdk::{AgentDescriptor, CrewDescription};

#[test]
fn test_two_tasks_two_agents_one_edge() {
    let graph = build_graph(&two_task_description());

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[0].title, "t1");
    assert_eq!(graph.nodes[1].title, "t2");
    assert_eq!(graph.nodes[0].subtitle, "a1");
    assert_eq!(graph.nodes[1].subtitle, "a2");

    assert_eq!(graph.edges.len(), 1);
    let edge = &graph.edges[0];
    assert!(edge.id.contains("t1"));
    assert!(edge.id.contains("t2"));
    assert_eq!(edge.source, "t1");
    assert_eq!(edge.target, "t2");
    assert_eq!(edge.style, EdgeStyle::SEQUENCE);
    assert!(edge.style.animated);
}

#[test]
fn test_missing_agents_use_placeholder() {
    let description = CrewDescription {
        tasks: tasks(&["t1"]),
        agents: Some(vec![]),
        edges: None,
    };

    let graph = build_graph(&description);
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].subtitle, UNKNOWN_AGENT);
    assert!(!graph.nodes[0].subtitle.is_empty());
}

#[test]
fn test_absent_agent_list_uses_placeholder_for_every_task() {
    let description = CrewDescription {
        tasks: tasks(&["a", "b", "c"]),
        agents: None,
        edges: None,
    };

    let graph = build_graph(&description);
    assert!(graph.nodes.iter().all(|n| n.subtitle == UNKNOWN_AGENT));
    assert!(graph.edges.is_empty());
}

#[test]
fn test_shorter_agent_list_pads_with_placeholder() {
    let description = CrewDescription {
        tasks: tasks(&["t1", "t2", "t3"]),
        agents: Some(agents(&["only"])),
        edges: None,
    };

    let subtitles: Vec<_> = build_graph(&description)
        .nodes
        .into_iter()
        .map(|n| n.subtitle)
        .collect();
    assert_eq!(subtitles, vec!["only", UNKNOWN_AGENT, UNKNOWN_AGENT]);
}

#[test]
fn test_empty_agent_id_uses_placeholder() {
    let description = CrewDescription {
        tasks: tasks(&["t1"]),
        agents: Some(vec![AgentDescriptor {
            id: Some(String::new()),
        }]),
        edges: None,
    };

    assert_eq!(build_graph(&description).nodes[0].subtitle, UNKNOWN_AGENT);
}

#[test]
fn test_node_count_matches_task_count() {
    for n in 0..6 {
        let ids: Vec<String> = (0..n).map(|i| format!("task_{}", i)).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let description = CrewDescription {
            tasks: tasks(&refs),
            agents: Some(agents(&["x", "y"])),
            edges: None,
        };

        let graph = build_graph(&description);
        assert_eq!(graph.nodes.len(), n);
        for (i, node) in graph.nodes.iter().enumerate() {
            let expected = ["x", "y"].get(i).copied().unwrap_or(UNKNOWN_AGENT);
            assert_eq!(node.subtitle, expected);
        }
    }
}

#[test]
fn test_repeated_edges_get_unique_ids() {
    let description = CrewDescription {
        tasks: tasks(&["t1", "t2"]),
        agents: None,
        edges: Some(vec![edge("t1", "t2"), edge("t1", "t2"), edge("t1", "t2")]),
    };

    let graph = build_graph(&description);
    assert_eq!(graph.edges.len(), 3);

    let ids: HashSet<_> = graph.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(graph.edges[2].id, "seq-t1-t2-2");
}

#[test]
fn test_nodes_form_a_vertical_column_in_task_order() {
    let graph = build_graph(&technical_doc_description());

    assert!(graph.nodes.iter().all(|n| n.position.x == COLUMN_X));
    let ys: Vec<_> = graph.nodes.iter().map(|n| n.position.y).collect();
    assert_eq!(ys, vec![50, 250, 450]);
    assert_eq!(graph.nodes[1].id, "draft_doc_task");
}

#[test]
fn test_description_parses_with_optional_lists_missing() {
    let json = r#"{ "tasks": [{ "id": "t1" }] }"#;
    let description: CrewDescription = serde_json::from_str(json).unwrap();
    assert!(description.agents().is_empty());
    assert!(description.edges().is_empty());

    let json = r#"{ "tasks": [{ "id": "t1" }], "agents": null, "edges": [] }"#;
    let description: CrewDescription = serde_json::from_str(json).unwrap();
    assert_eq!(build_graph(&description).nodes[0].subtitle, UNKNOWN_AGENT);
}

#[test]
fn test_description_without_tasks_is_rejected() {
    let json = r#"{ "agents": [], "edges": [] }"#;
    assert!(serde_json::from_str::<CrewDescription>(json).is_err());
}
