//! Run form: crew selector, topic input, run button and run error

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{BRAND, RUNNING};
use crate::app::App;

/// Rows taken by the form, borders included
pub const RUN_FORM_HEIGHT: u16 = 7;

const TOPIC_PLACEHOLDER: &str = "Enter the topic to research";

pub fn render_run_form(f: &mut Frame, area: Rect, app: &App) {
    let label = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    let crew_line = Line::from(vec![
        Span::styled("Crew:  ", label),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.selected_crew.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);

    let topic_span = if app.is_editing {
        Span::styled(
            format!("{}█", app.topic),
            Style::default().fg(Color::Yellow),
        )
    } else if app.topic.is_empty() {
        Span::styled(TOPIC_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.topic.as_str(), Style::default().fg(Color::White))
    };
    let topic_line = Line::from(vec![Span::styled("Topic: ", label), topic_span]);

    let button = if app.run_state.is_running() {
        let elapsed = app
            .run_started
            .map(|start| (Local::now() - start).num_seconds().max(0))
            .unwrap_or(0);
        Span::styled(
            format!(" {} Running... ({}s) ", app.spinner_char(), elapsed),
            Style::default()
                .fg(Color::Black)
                .bg(RUNNING)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.can_run() {
        Span::styled(
            " Run Crew ",
            Style::default()
                .fg(Color::White)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " Run Crew ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    };

    let mut lines = vec![crew_line, topic_line, Line::from(""), Line::from(button)];

    if let Some(error) = app.run_state.error() {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    }

    let border = if app.is_editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Run Crew "),
    );
    f.render_widget(form, area);
}
