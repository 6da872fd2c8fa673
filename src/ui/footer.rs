//! Footer bar: key hints and transient status messages.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme::{PRIMARY_COLOR, SUCCESS_COLOR};

/// Renders the footer with key hints, or the current status message.
pub fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(status) = &app.status {
        let message = Paragraph::new(Span::styled(
            status.as_str(),
            Style::default().fg(SUCCESS_COLOR),
        ));
        frame.render_widget(message, area);
        return;
    }

    let layout_hint = if app.dev_mode {
        " Condensed"
    } else {
        " Developer"
    };

    let hints = Line::from(vec![
        hint_key("[j/k]"),
        hint_label(" Navigate  "),
        hint_key("[d]"),
        hint_label(layout_hint),
        hint_label("  "),
        hint_key("[c]"),
        hint_label(" Copy  "),
        hint_key("[o]"),
        hint_label(" Open  "),
        hint_key("[q]"),
        hint_label(" Quit"),
    ]);

    frame.render_widget(Paragraph::new(hints), area);
}

fn hint_key(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(PRIMARY_COLOR))
}

fn hint_label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::White))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Network, UserTransaction};
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn draw_footer(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render_footer(app, frame, frame.area()))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_footer_hints_name_the_other_layout() {
        let txn = UserTransaction::from_json(&json!({}));
        let condensed = App::new(txn.clone(), Network::Mainnet, false);
        assert!(draw_footer(&condensed).contains("Developer"));

        let dev = App::new(txn, Network::Mainnet, true);
        assert!(draw_footer(&dev).contains("Condensed"));
    }

    #[test]
    fn test_footer_status_replaces_hints() {
        let txn = UserTransaction::from_json(&json!({}));
        let mut app = App::new(txn, Network::Mainnet, false);
        app.status = Some("Copied to clipboard".to_string());

        let content = draw_footer(&app);
        assert!(content.contains("Copied to clipboard"));
        assert!(!content.contains("Navigate"));
    }
}
