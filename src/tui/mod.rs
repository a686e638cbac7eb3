//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Everything runs on one thread. Requests are spawned onto the tokio
//! runtime and report back through an `mpsc` channel as
//! `Action::Completed`, which the loop drains between input events. State
//! is therefore only ever touched by `update()` on this thread, one action
//! at a time. The screen is redrawn only after an input event or a
//! completion.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::PostDraft;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::dispatcher::{HandlerId, Request, RequestDispatcher};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{Form, FormEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const CREATE_FIELDS: [&str; 2] = ["Title", "Body"];
const UPDATE_FIELDS: [&str; 3] = ["ID", "Title", "Body"];

/// Which control has keyboard focus. Form variants carry the field index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FetchButton,
    XhrButton,
    Create(usize),
    Update(usize),
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::FetchButton => Focus::XhrButton,
            Focus::XhrButton => Focus::Create(0),
            Focus::Create(i) if i + 1 < CREATE_FIELDS.len() => Focus::Create(i + 1),
            Focus::Create(_) => Focus::Update(0),
            Focus::Update(i) if i + 1 < UPDATE_FIELDS.len() => Focus::Update(i + 1),
            Focus::Update(_) => Focus::FetchButton,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::FetchButton => Focus::Update(UPDATE_FIELDS.len() - 1),
            Focus::XhrButton => Focus::FetchButton,
            Focus::Create(0) => Focus::XhrButton,
            Focus::Create(i) => Focus::Create(i - 1),
            Focus::Update(0) => Focus::Create(CREATE_FIELDS.len() - 1),
            Focus::Update(i) => Focus::Update(i - 1),
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub create_form: Form,
    pub update_form: Form,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        let mut tui = Self {
            focus: Focus::FetchButton,
            create_form: Form::new("Create post", &CREATE_FIELDS),
            update_form: Form::new("Update post", &UPDATE_FIELDS),
        };
        tui.sync_focus();
        tui
    }

    /// Pushes App-derived props into the components.
    pub fn sync_props(&mut self, app: &App) {
        self.create_form.pending = app.is_pending(HandlerId::CreatePost);
        self.update_form.pending = app.is_pending(HandlerId::UpdatePost);
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.create_form.focused = match self.focus {
            Focus::Create(i) => Some(i),
            _ => None,
        };
        self.update_form.focused = match self.focus {
            Focus::Update(i) => Some(i),
            _ => None,
        };
    }

    /// Routes one input event. Returns the core action it produces, if any.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Quit => return Some(Action::Quit),
            TuiEvent::Resize => return None,
            TuiEvent::NextFocus => {
                self.focus = self.focus.next();
                self.sync_focus();
                return None;
            }
            TuiEvent::PrevFocus => {
                self.focus = self.focus.prev();
                self.sync_focus();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::FetchButton => {
                matches!(event, TuiEvent::Activate).then_some(Action::Trigger(Request::FetchPost))
            }
            Focus::XhrButton => {
                matches!(event, TuiEvent::Activate).then_some(Action::Trigger(Request::XhrPost))
            }
            Focus::Create(_) => match self.create_form.handle_event(event)? {
                FormEvent::Submit(values) => {
                    let [title, body]: [String; 2] = values.try_into().ok()?;
                    Some(Action::Trigger(Request::CreatePost(PostDraft::new(title, body))))
                }
                FormEvent::ContentChanged => None,
            },
            Focus::Update(_) => match self.update_form.handle_event(event)? {
                FormEvent::Submit(values) => {
                    let [id, title, body]: [String; 3] = values.try_into().ok()?;
                    Some(Action::Trigger(Request::UpdatePost {
                        id: id.trim().to_string(),
                        draft: PostDraft::new(title, body),
                    }))
                }
                FormEvent::ContentChanged => None,
            },
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Runs the interactive UI until the user quits.
///
/// Must be called from within a tokio runtime; requests are spawned onto it.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let dispatcher = RequestDispatcher::new(config);
    let mut app = App::from_config(config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &dispatcher, &mut app, &mut tui));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    dispatcher: &RequestDispatcher,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<()> {
    // Completions from request tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.sync_props(app);
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let mut events = Vec::new();
        if let Some(first) = poll_event_timeout(Duration::from_millis(100))? {
            events.push(first);
            // Drain everything already queued before the next draw
            while let Some(event) = poll_event_immediate()? {
                events.push(event);
            }
        }

        let mut should_quit = false;
        for event in events {
            needs_redraw = true;
            let Some(action) = tui.handle_event(&event) else {
                continue;
            };
            match update(app, action) {
                Effect::Dispatch(request) => {
                    // Detached: the completion comes back through `rx`
                    drop(dispatcher.dispatch(request, tx.clone()));
                }
                Effect::Quit => should_quit = true,
                Effect::None => {}
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if update(app, action) != Effect::None {
                warn!("Unexpected effect from a completion");
            }
        }

        if should_quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}
