//! # TitleBar Component
//!
//! Top status bar: which API the handlers talk to and the latest status.
//!
//! Stateless: everything comes in as props.
//!
//! 1. **Status message**: `"Postboard (api: https://…) | Fetch post..."`
//! 2. **Default**: `"Postboard (api: https://…)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Base URL of the API (e.g. "https://jsonplaceholder.typicode.com/")
    pub base_url: String,
    /// Status message (e.g. "Fetch post...", "Create post: done")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(base_url: String, status_message: String) -> Self {
        Self {
            base_url,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Postboard (api: {})", self.base_url)
        } else {
            format!("Postboard (api: {}) | {}", self.base_url, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
