use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::picker::picker_render;
use crate::theme;

const HINTS: &[(&str, &str)] = &[
    ("↑/↓", "Move"),
    ("Space", "Toggle"),
    ("r", "Reset"),
    ("Enter", "Apply"),
    ("Esc", "Cancel"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        picker_render::render_list(self, frame, layout[0]);
        self.render_help_line(frame, layout[1]);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        // A config warning takes over the help line for the session
        if let Some(warning) = &self.warning {
            let line = Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(theme::help_line::WARNING),
            ));
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let key_style = Style::default().fg(theme::help_line::KEY);
        let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
        let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

        let mut spans = Vec::with_capacity(HINTS.len() * 4 + 1);
        spans.push(Span::raw(" "));

        for (i, (key, desc)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2022} ", sep_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, desc_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
