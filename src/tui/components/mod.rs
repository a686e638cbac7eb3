//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: API base URL and status message
//! - `Button`: a labelled control that triggers one request
//! - `OutputPanel`: the shared output region
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Form`: text fields that emit `FormEvent::Submit` with their values
//!
//! Components receive external data as props rather than reading `App`
//! directly:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! OutputPanel::new(&app.output).render(frame, area);
//! ```

pub mod button;
pub mod form;
pub mod output_panel;
mod title_bar;

pub use button::Button;
pub use form::{Form, FormEvent};
pub use output_panel::OutputPanel;
pub use title_bar::TitleBar;
