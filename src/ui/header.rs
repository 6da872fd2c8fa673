//! Header bar: transaction identity and network badge.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::format::truncate_hash;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_panel_block;

/// Renders the header with the transaction hash, version and network.
pub fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let block = create_panel_block("lazymove");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_hash_len = (inner.width as usize).saturating_sub(30).max(12);
    let line = Line::from(vec![
        Span::styled(
            truncate_hash(&app.txn.hash, max_hash_len),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  v{}", app.txn.version),
            Style::default().fg(MUTED_COLOR),
        ),
        Span::styled(
            format!("  [{}]", app.network),
            Style::default().fg(WARNING_COLOR),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
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

    #[test]
    fn test_header_shows_hash_and_network() {
        let txn = UserTransaction::from_json(&json!({
            "hash": "0x8a1e3f0c",
            "version": "123"
        }));
        let app = App::new(txn, Network::Testnet, false);

        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| render_header(&app, frame, frame.area()))
            .unwrap();

        let content = terminal.backend().to_string();
        assert!(content.contains("0x8a1e3f0c"));
        assert!(content.contains("v123"));
        assert!(content.contains("[Testnet]"));
    }
}
