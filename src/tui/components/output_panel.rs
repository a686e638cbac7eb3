//! # OutputPanel Component
//!
//! Renders the shared output region. Remote and user-supplied text passes
//! through `sanitize_terminal` before reaching the terminal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::output::{Block as OutputBlock, OutputRegion, Tone, sanitize_terminal};
use crate::tui::component::Component;

const ORANGE: Color = Color::Rgb(255, 165, 0);

pub struct OutputPanel<'a> {
    pub region: &'a OutputRegion,
}

impl<'a> OutputPanel<'a> {
    pub fn new(region: &'a OutputRegion) -> Self {
        Self { region }
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Red => Color::Red,
        Tone::Orange => ORANGE,
    }
}

/// Styled lines for the region's content; a hint when nothing has run yet.
pub fn output_lines(region: &OutputRegion) -> Vec<Line<'static>> {
    let Some(content) = region.content() else {
        return vec![Line::from(Span::styled(
            "Press a button or submit a form to see results here.",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    content
        .blocks
        .iter()
        .map(|block| match block {
            OutputBlock::Heading { level, text } => {
                let style = if *level <= 3 {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                };
                Line::from(Span::styled(sanitize_terminal(text), style))
            }
            OutputBlock::Paragraph(text) => Line::from(sanitize_terminal(text)),
            OutputBlock::Field { label, value } => Line::from(vec![
                Span::styled(
                    format!("{}: ", sanitize_terminal(label)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(sanitize_terminal(value)),
            ]),
            OutputBlock::Alert {
                icon,
                tone,
                message,
            } => Line::from(Span::styled(
                format!("{icon} {}", sanitize_terminal(message)),
                Style::default()
                    .fg(tone_color(*tone))
                    .add_modifier(Modifier::BOLD),
            )),
        })
        .collect()
}

impl Component for OutputPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(output_lines(self.region))
            .block(Block::bordered().title(" Output "))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
