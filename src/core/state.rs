//! # Application State
//!
//! Core business state for Postboard. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── output: OutputRegion          // the one shared result area
//! ├── handlers: [HandlerState; 4]   // Idle → Pending → Succeeded | Failed
//! ├── status_message: String        // status bar text
//! └── base_url: String              // API the handlers talk to
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::dispatcher::HandlerId;
use crate::core::output::OutputRegion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandlerState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

pub struct App {
    pub output: OutputRegion,
    handlers: [HandlerState; HandlerId::ALL.len()],
    pub status_message: String,
    pub base_url: String,
}

impl App {
    pub fn new(base_url: String) -> Self {
        Self {
            output: OutputRegion::new(),
            handlers: [HandlerState::Idle; HandlerId::ALL.len()],
            status_message: String::from("Welcome to Postboard!"),
            base_url,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.base_url.to_string())
    }

    pub fn handler_state(&self, handler: HandlerId) -> HandlerState {
        self.handlers[handler.index()]
    }

    pub fn set_handler_state(&mut self, handler: HandlerId, state: HandlerState) {
        self.handlers[handler.index()] = state;
    }

    pub fn is_pending(&self, handler: HandlerId) -> bool {
        self.handler_state(handler) == HandlerState::Pending
    }
}
