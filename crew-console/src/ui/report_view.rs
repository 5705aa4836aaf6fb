//! Generated report pane

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub fn render_report(f: &mut Frame, area: Rect, app: &App) {
    let Some(report) = app.run_state.report() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Generated report ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    // Shown verbatim: no markdown rendering
    let paragraph = Paragraph::new(report)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((app.report_scroll.min(app.max_report_scroll()), 0));

    f.render_widget(paragraph, area);
}

/// Number of rows the report takes once wrapped to `width`
pub fn report_height(report: &str, width: u16) -> usize {
    Paragraph::new(report)
        .wrap(Wrap { trim: false })
        .line_count(width)
}
