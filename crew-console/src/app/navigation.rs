//! Keyboard handling, crew selection and topic editing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crew_console_sdk::Crew;

use super::*;
use crate::ui;

impl App {
    pub fn select_next_crew(&mut self) {
        self.selected_crew = self.selected_crew.next();
    }

    pub fn select_previous_crew(&mut self) {
        self.selected_crew = self.selected_crew.previous();
    }

    pub fn start_editing(&mut self) {
        self.is_editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.is_editing = false;
    }

    pub fn push_char(&mut self, c: char) {
        self.topic.push(c);
    }

    pub fn pop_char(&mut self) {
        self.topic.pop();
    }

    pub fn scroll_report_up(&mut self) {
        self.report_scroll = self
            .report_scroll
            .min(self.max_report_scroll())
            .saturating_sub(1);
    }

    pub fn scroll_report_down(&mut self) {
        if self.report_scroll < self.max_report_scroll() {
            self.report_scroll += 1;
        }
    }

    /// Last scroll offset that still fills the report pane
    ///
    /// Before the first frame the pane width is unknown, so lines are
    /// counted unwrapped.
    pub fn max_report_scroll(&self) -> u16 {
        let Some(report) = self.run_state.report() else {
            return 0;
        };
        let height = if self.report_viewport.width == 0 {
            report.lines().count()
        } else {
            ui::report_height(report, self.report_viewport.width)
        };
        let height = u16::try_from(height).unwrap_or(u16::MAX);
        height.saturating_sub(self.report_viewport.height)
    }

    pub fn panel_offset(&self, crew: Crew) -> u16 {
        self.panel_scroll.get(&crew).copied().unwrap_or(0)
    }

    /// Scroll the selected crew panel up
    pub fn scroll_panel_up(&mut self) {
        let crew = self.selected_crew;
        let offset = self
            .panel_offset(crew)
            .min(self.max_panel_scroll(crew))
            .saturating_sub(1);
        self.panel_scroll.insert(crew, offset);
    }

    /// Scroll the selected crew panel down
    pub fn scroll_panel_down(&mut self) {
        let crew = self.selected_crew;
        let offset = self.panel_offset(crew);
        if offset < self.max_panel_scroll(crew) {
            self.panel_scroll.insert(crew, offset + 1);
        }
    }

    pub fn max_panel_scroll(&self, crew: Crew) -> u16 {
        let height = u16::try_from(ui::panel_lines(self, crew).len()).unwrap_or(u16::MAX);
        height.saturating_sub(self.panel_viewport.height)
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.is_editing {
            match key.code {
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Enter | KeyCode::Esc => self.stop_editing(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.select_next_crew();
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.select_previous_crew();
            }
            KeyCode::Char('i') | KeyCode::Enter => {
                self.start_editing();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.trigger_run();
            }
            KeyCode::Char('L') => {
                self.reload();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_report_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_report_down();
            }
            KeyCode::PageUp | KeyCode::Char('K') => {
                self.scroll_panel_up();
            }
            KeyCode::PageDown | KeyCode::Char('J') => {
                self.scroll_panel_down();
            }
            _ => {}
        }
    }
}
