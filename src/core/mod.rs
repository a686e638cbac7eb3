//! # Core Application Logic
//!
//! This module contains Postboard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Dispatcher (I/O)     │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  One-shot  │
//!             │  Adapter   │          │    CLI     │
//!             │ (ratatui)  │          │  (main.rs) │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`dispatcher`]: The four request handlers
//! - [`output`]: The output region and its renderings
//! - [`present`]: Error presentation policy and result templates
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod dispatcher;
pub mod output;
pub mod present;
pub mod state;
