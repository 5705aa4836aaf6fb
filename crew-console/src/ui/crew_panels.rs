//! Crew panels: one per crew, side by side

use crew_console_sdk::Crew;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{BRAND, DARK, RUNNING};
use crate::app::App;
use crate::graph::RenderableGraph;

pub fn render_crew_panels(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            Crew::ALL
                .iter()
                .map(|_| Constraint::Ratio(1, Crew::ALL.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (crew, column) in Crew::ALL.into_iter().zip(columns.iter()) {
        render_crew_panel(f, *column, app, crew);
    }
}

fn render_crew_panel(f: &mut Frame, area: Rect, app: &App, crew: Crew) {
    let is_selected = crew == app.selected_crew;

    let border_color = match (is_selected, app.run_state.is_running()) {
        (true, true) => RUNNING,
        (true, false) => BRAND,
        (false, _) => Color::DarkGray,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", crew.label()))
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let offset = app.panel_offset(crew).min(app.max_panel_scroll(crew));
    let paragraph = Paragraph::new(panel_lines(app, crew))
        .block(block)
        .scroll((offset, 0));

    f.render_widget(paragraph, area);
}

/// Content of one crew panel: loading line, error or graph
pub fn panel_lines(app: &App, crew: Crew) -> Vec<Line<'static>> {
    match app.panel(crew) {
        None => vec![Line::from(Span::styled(
            format!("{} Loading workflow...", app.spinner_char()),
            Style::default().fg(Color::Gray),
        ))],
        Some(panel) => match &panel.error {
            Some(error) => vec![Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))],
            None => graph_lines(&panel.graph, app.spinner_frame),
        },
    }
}

/// Draw a graph as a single column of task boxes
///
/// Nodes are stacked in layout order. An edge between two consecutive nodes
/// is drawn as a connector; every other edge is listed under the column.
pub fn graph_lines(graph: &RenderableGraph, frame: usize) -> Vec<Line<'static>> {
    if graph.nodes.is_empty() {
        return vec![Line::from(Span::styled(
            "No tasks",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut nodes: Vec<_> = graph.nodes.iter().collect();
    nodes.sort_by_key(|n| (n.position.y, n.position.x));

    let border = Style::default().fg(DARK);
    let edge_style = Style::default().fg(BRAND);
    // Animated edges alternate between two glyphs
    let pipe = if frame % 2 == 0 { "│" } else { "┆" };

    let mut lines = Vec::new();
    let mut drawn = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let width = node.title.chars().count().max(node.subtitle.chars().count()) + 2;

        lines.push(Line::from(Span::styled(
            format!("┌{}┐", "─".repeat(width)),
            border,
        )));
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(
                format!("{:<w$}", node.title, w = width - 2),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │", border),
        ]));
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(
                format!("{:^w$}", node.subtitle, w = width - 2),
                Style::default().fg(Color::White).bg(BRAND),
            ),
            Span::styled(" │", border),
        ]));
        lines.push(Line::from(Span::styled(
            format!("└{}┘", "─".repeat(width)),
            border,
        )));

        if let Some(next) = nodes.get(i + 1) {
            let linked: Vec<_> = graph.edges_between(&node.id, &next.id).collect();

            if linked.is_empty() {
                lines.push(Line::from(""));
            } else {
                let glyph = if linked.iter().any(|e| e.style.animated) {
                    pipe
                } else {
                    "│"
                };
                lines.push(Line::from(Span::styled(format!("  {}", glyph), edge_style)));
                lines.push(Line::from(Span::styled("  ▼", edge_style)));
                drawn.extend(linked.iter().map(|e| e.id.clone()));
            }
        }
    }

    let others: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| !drawn.contains(&e.id))
        .collect();

    if !others.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Other links:",
            Style::default().fg(Color::Gray),
        )));
        for edge in others {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::raw(edge.source.clone()),
                Span::styled(" ─▶ ", edge_style),
                Span::raw(edge.target.clone()),
            ]));
        }
    }

    lines
}
