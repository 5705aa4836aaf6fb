//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            "Crew Console v0.1.0 - IT Analyst Agency",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("      "),
    ];

    if app.is_loading() {
        spans.push(Span::styled(
            format!("{} loading crews  ", app.spinner_char()),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled("[Q]", Style::default().add_modifier(Modifier::BOLD)));
    spans.push(Span::raw("uit"));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn hint<'a>(key: &'a str, label: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(label),
    ]
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.is_editing {
        Line::from_iter(
            [
                [
                    Span::styled(
                        "TYPE",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" the topic  "),
                ],
                hint("[Enter/Esc]", " Done  "),
                hint("[Backspace]", " Delete"),
            ]
            .into_iter()
            .flatten(),
        )
    } else {
        Line::from_iter(
            [
                hint("[←→]", " Crew  "),
                hint("[I/Enter]", " Edit topic  "),
                hint("[R]", " Run  "),
                hint("[↑↓]", " Scroll report  "),
                hint("[PgUp/PgDn]", " Scroll crew  "),
                hint("[Shift+L]", " Reload  "),
                hint("[Q]", " Quit"),
            ]
            .into_iter()
            .flatten(),
        )
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
