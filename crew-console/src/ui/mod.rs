//! UI rendering functions for the crew console TUI
//!
//! One screen: run form on top, the generated report (once there is one)
//! and the two crew panels below it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

use crate::app::{App, Viewport};

mod crew_panels;
mod header_footer;
mod notifications;
mod report_view;
mod run_form;

pub use crew_panels::{graph_lines, panel_lines, render_crew_panels};
pub use header_footer::{render_footer, render_header};
pub use notifications::render_notifications;
pub use report_view::{render_report, report_height};
pub use run_form::{render_run_form, RUN_FORM_HEIGHT};

/// Brand blue used for agents, edges and the run button
pub const BRAND: Color = Color::Rgb(0, 91, 127);

/// Highlight while a run is in flight
pub const RUNNING: Color = Color::Rgb(255, 152, 0);

/// Node border color
pub const DARK: Color = Color::Rgb(0, 45, 61);

/// Main UI rendering function
///
/// Records the inner size of the scrollable panes so key handling can bound
/// scrolling to what is actually drawn.
pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(RUN_FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let (report_area, panels_area) = if app.run_state.report().is_some() {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);
        (Some(body[0]), body[1])
    } else {
        (None, chunks[2])
    };

    app.report_viewport = report_area.map(inner).unwrap_or_default();
    app.panel_viewport = inner(panels_area);
    let app = &*app;

    render_header(f, chunks[0], app);
    render_run_form(f, chunks[1], app);
    if let Some(area) = report_area {
        render_report(f, area, app);
    }
    render_crew_panels(f, panels_area, app);
    render_footer(f, chunks[3], app);

    render_notifications(f, app, chunks[2]);
}

/// Size inside a bordered block
fn inner(area: Rect) -> Viewport {
    Viewport {
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
