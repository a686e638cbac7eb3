//! # Form Component
//!
//! A bordered group of single-line text fields submitted together.
//!
//! ## State Management
//!
//! Field values are internal state; they persist across submissions.
//! `focused` and `pending` are props synced from the parent each frame.
//! Values are only read when the form emits `FormEvent::Submit`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Enter pressed; the current field values in declaration order.
    Submit(Vec<String>),
    ContentChanged,
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
}

pub struct Form {
    pub title: &'static str,
    pub fields: Vec<TextField>,
    /// Index of the field with keyboard focus (Prop)
    pub focused: Option<usize>,
    /// A submission is in flight (Prop)
    pub pending: bool,
}

impl Form {
    pub fn new(title: &'static str, labels: &[&'static str]) -> Self {
        Self {
            title,
            fields: labels
                .iter()
                .map(|&label| TextField {
                    label,
                    value: String::new(),
                })
                .collect(),
            focused: None,
            pending: false,
        }
    }

    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Rows needed: one per field plus borders.
    pub fn height(&self) -> u16 {
        self.fields.len() as u16 + 2
    }

    fn label_width(&self) -> usize {
        self.fields.iter().map(|f| f.label.width()).max().unwrap_or(0)
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        let index = self.focused?;
        self.fields.get_mut(index)
    }
}

/// The widest suffix of `value` that fits in `width` columns.
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (index, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    &value[start..]
}

impl Component for Form {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.pending {
            format!(" {} (sending...) ", self.title)
        } else {
            format!(" {} ", self.title)
        };
        let border_style = if self.focused.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);

        let label_width = self.label_width();
        let prefix_width = label_width + 2; // "label: "
        let value_width = (inner.width as usize).saturating_sub(prefix_width + 1);

        let mut cursor = None;
        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let is_focused = self.focused == Some(index);
                let shown = visible_tail(&field.value, value_width);
                if is_focused {
                    cursor = Some(Position::new(
                        inner.x + (prefix_width + shown.width()) as u16,
                        inner.y + index as u16,
                    ));
                }
                let label_style = if is_focused {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                Line::from(vec![
                    Span::styled(format!("{:>label_width$}: ", field.label), label_style),
                    Span::raw(shown.to_string()),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);

        if let Some(position) = cursor
            && inner.contains(position)
        {
            frame.set_cursor_position(position);
        }
    }
}

impl EventHandler for Form {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Activate => Some(FormEvent::Submit(self.values())),
            TuiEvent::InputChar(c) => {
                self.focused_field_mut()?.value.push(*c);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Fields are single-line
                let flattened = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
                self.focused_field_mut()?.value.push_str(&flattened);
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                self.focused_field_mut()?.value.pop();
                Some(FormEvent::ContentChanged)
            }
            _ => None,
        }
    }
}
