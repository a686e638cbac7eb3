//! # Button Component
//!
//! A bordered, single-line button. Stateless; activation is handled by the
//! parent since it knows which request the button stands for.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct Button {
    pub label: &'static str,
    pub focused: bool,
    /// Request in flight; the button ignores activation until it completes.
    pub pending: bool,
}

impl Button {
    pub fn new(label: &'static str, focused: bool, pending: bool) -> Self {
        Self {
            label,
            focused,
            pending,
        }
    }

    fn caption(&self) -> String {
        if self.pending {
            format!("{} (busy)", self.label)
        } else {
            self.label.to_string()
        }
    }
}

impl Component for Button {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let text_style = if self.pending {
            Style::default().add_modifier(Modifier::DIM)
        } else if self.focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let paragraph = Paragraph::new(self.caption())
            .style(text_style)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(border_style));
        frame.render_widget(paragraph, area);
    }
}
