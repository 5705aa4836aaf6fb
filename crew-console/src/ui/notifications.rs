//! Notification rendering for user-visible feedback

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NotificationLevel};

/// Render active notifications as an overlay at the bottom of `area`
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let notifications = app.notifications.get_active();

    if notifications.is_empty() {
        return;
    }

    // Newest last, at most three visible
    let visible: Vec<_> = notifications.iter().rev().take(3).rev().collect();
    let height = (visible.len() * 4) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(height)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .split(chunks[1]);

    let notification_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            visible
                .iter()
                .map(|_| Constraint::Length(4))
                .collect::<Vec<_>>(),
        )
        .split(columns[1]);

    for (idx, notification) in visible.iter().enumerate() {
        let (bg_color, fg_color, icon) = match notification.level {
            NotificationLevel::Error => (Color::Red, Color::White, "✗"),
            NotificationLevel::Warning => (Color::Yellow, Color::Black, "⚠"),
            NotificationLevel::Info => (Color::Blue, Color::White, "ℹ"),
            NotificationLevel::Success => (Color::Green, Color::White, "✓"),
        };

        let text = vec![
            Line::from(vec![Span::styled(
                format!("{} {} ", icon, notification.title),
                Style::default()
                    .fg(fg_color)
                    .bg(bg_color)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(notification.message.clone()),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(bg_color));

        let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

        f.render_widget(Clear, notification_chunks[idx]);
        f.render_widget(paragraph, notification_chunks[idx]);
    }
}
