//! UI helper functions for creating styled blocks.

use ratatui::{
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, TITLE_STYLE};

/// Creates the standard bordered panel block with a title.
#[must_use]
pub fn create_panel_block(title: &str) -> Block<'_> {
    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {} ", title)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(TITLE_STYLE)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_panel_block_renders_title() {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(create_panel_block("Transaction"), frame.area());
            })
            .unwrap();

        let content = terminal.backend().to_string();
        assert!(content.contains("Transaction"));
    }
}
