use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::dispatcher::HandlerId;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{Button, OutputPanel, TitleBar};
use crate::tui::{Focus, TuiState};

const KEY_HINTS: &str = "Tab/↓ next · Shift+Tab/↑ previous · Enter activate/submit · Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([
        Length(1),
        Length(3),
        Length(tui.create_form.height()),
        Length(tui.update_form.height()),
        Min(3),
        Length(1),
    ]);
    let [title_area, buttons_area, create_area, update_area, output_area, hints_area] =
        layout.areas(frame.area());

    TitleBar::new(app.base_url.clone(), app.status_message.clone()).render(frame, title_area);

    let [fetch_area, xhr_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(buttons_area);
    Button::new(
        HandlerId::FetchPost.label(),
        tui.focus == Focus::FetchButton,
        app.is_pending(HandlerId::FetchPost),
    )
    .render(frame, fetch_area);
    Button::new(
        HandlerId::XhrPost.label(),
        tui.focus == Focus::XhrButton,
        app.is_pending(HandlerId::XhrPost),
    )
    .render(frame, xhr_area);

    tui.create_form.render(frame, create_area);
    tui.update_form.render(frame, update_area);

    OutputPanel::new(&app.output).render(frame, output_area);

    frame.render_widget(
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        hints_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;
    use crate::core::present;
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();
        tui.sync_props(&app);
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("Welcome to Postboard!"));
        assert!(text.contains("Fetch post"));
        assert!(text.contains("XHR post"));
        assert!(text.contains("Create post"));
        assert!(text.contains("Update post"));
        assert!(text.contains("Output"));
    }

    #[test]
    fn test_draw_ui_shows_error_and_busy_state() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.set_handler_state(HandlerId::XhrPost, crate::core::state::HandlerState::Pending);
        present::present(&mut app.output, ErrorKind::Client, "Error 404: Client error.");
        let mut tui = TuiState::new();
        tui.sync_props(&app);
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("XHR post (busy)"));
        assert!(text.contains("Error 404: Client error."));
    }
}
