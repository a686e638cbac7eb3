//! # Actions
//!
//! Everything that can happen in Postboard becomes an `Action`.
//! User presses a button? That's `Action::Trigger(Request::FetchPost)`.
//! A request finishes? That's `Action::Completed { handler, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what I/O to start.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::api::{ActionError, Post};
use crate::core::dispatcher::{HandlerId, Request};
use crate::core::output::OutputContent;
use crate::core::present;
use crate::core::state::{App, HandlerState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A control was activated; the request carries the form values read at that moment.
    Trigger(Request),
    /// A handler finished.
    Completed {
        handler: HandlerId,
        result: Result<Post, ActionError>,
    },
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Dispatch(Request),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Trigger(request) => {
            let handler = request.handler();
            if app.handler_state(handler) == HandlerState::Pending {
                debug!("Ignoring {handler:?} trigger: previous invocation still pending");
                app.status_message = format!("{} is still running", handler.label());
                return Effect::None;
            }
            app.set_handler_state(handler, HandlerState::Pending);
            app.status_message = format!("{}...", handler.label());
            Effect::Dispatch(request)
        }
        Action::Completed { handler, result } => {
            match result {
                Ok(post) => {
                    app.output.replace(success_content(handler, &post));
                    app.set_handler_state(handler, HandlerState::Succeeded);
                    app.status_message = format!("{}: done", handler.label());
                }
                Err(err) => {
                    present::present(&mut app.output, err.kind, &err.message);
                    app.set_handler_state(handler, HandlerState::Failed);
                    app.status_message = format!("{}: failed ({})", handler.label(), err.kind);
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn success_content(handler: HandlerId, post: &Post) -> OutputContent {
    match handler {
        HandlerId::FetchPost | HandlerId::XhrPost => present::post_content(post),
        HandlerId::CreatePost => present::submitted_content(post),
        HandlerId::UpdatePost => present::updated_content(post),
    }
}
