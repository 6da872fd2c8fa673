//! Application state and update logic.

use crate::domain::{Network, UserTransaction};
use crate::ui::overview;

// ============================================================================
// Actions
// ============================================================================

/// Application actions triggered by user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ToggleLayout,
    MoveSelectionUp,
    MoveSelectionDown,
    JumpToTop,
    JumpToBottom,
    CopyValue,
    OpenInBrowser,
}

// ============================================================================
// App State
// ============================================================================

/// The main application state: one loaded transaction plus view state.
///
/// Rendering is a pure function of this state; every update is followed by a
/// full redraw.
#[derive(Debug)]
pub struct App {
    /// The transaction being viewed.
    pub txn: UserTransaction,
    /// Network the transaction was loaded from.
    pub network: Network,
    /// Active layout: developer (true) or condensed (false).
    pub dev_mode: bool,
    /// Index of the selected overview row.
    pub selected_row: usize,
    /// Transient status message shown in the footer.
    pub status: Option<String>,
    /// Whether the application should exit.
    pub exit: bool,
}

impl App {
    /// Create the app for a loaded user transaction.
    #[must_use]
    pub fn new(txn: UserTransaction, network: Network, dev_mode: bool) -> Self {
        Self {
            txn,
            network,
            dev_mode,
            selected_row: 0,
            status: None,
            exit: false,
        }
    }

    /// Apply an action to the state.
    pub fn update(&mut self, action: Action) {
        self.status = None;

        match action {
            Action::Quit => self.exit = true,
            Action::ToggleLayout => {
                self.dev_mode = !self.dev_mode;
                self.clamp_selection();
            }
            Action::MoveSelectionUp => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            Action::MoveSelectionDown => {
                self.selected_row = (self.selected_row + 1).min(self.last_row());
            }
            Action::JumpToTop => self.selected_row = 0,
            Action::JumpToBottom => self.selected_row = self.last_row(),
            Action::CopyValue => self.copy_selected_value(),
            Action::OpenInBrowser => self.open_in_browser(),
        }
    }

    fn last_row(&self) -> usize {
        overview::row_count(&self.txn, self.dev_mode).saturating_sub(1)
    }

    fn clamp_selection(&mut self) {
        self.selected_row = self.selected_row.min(self.last_row());
    }

    /// Copy the selected row's value to the system clipboard.
    fn copy_selected_value(&mut self) {
        let Some(value) = overview::row_value_at(&self.txn, self.dev_mode, self.selected_row)
        else {
            return;
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(value)) {
            Ok(()) => self.status = Some("Copied to clipboard".to_string()),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.status = Some("Clipboard not available".to_string());
            }
        }
    }

    /// Open the transaction in the web explorer.
    fn open_in_browser(&mut self) {
        let url = self.network.explorer_txn_url(&self.txn.version);
        match open::that(&url) {
            Ok(()) => self.status = Some(format!("Opened {url}")),
            Err(e) => {
                tracing::warn!("failed to open browser: {e}");
                self.status = Some("Failed to open browser".to_string());
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_app(dev_mode: bool) -> App {
        let txn = UserTransaction::from_json(&json!({
            "type": "user_transaction",
            "version": "100",
            "sender": "0xabc",
            "gas_used": "10",
            "gas_unit_price": "100",
            "success": true
        }));
        App::new(txn, Network::Mainnet, dev_mode)
    }

    #[test]
    fn test_quit() {
        let mut app = sample_app(false);
        app.update(Action::Quit);
        assert!(app.exit);
    }

    #[test]
    fn test_toggle_layout_clamps_selection() {
        let mut app = sample_app(true);
        app.update(Action::JumpToBottom);
        let dev_last = app.selected_row;

        app.update(Action::ToggleLayout);
        assert!(!app.dev_mode);
        assert!(
            app.selected_row <= dev_last,
            "selection must stay within the new layout's bounds"
        );
        assert!(app.selected_row < overview::row_count(&app.txn, app.dev_mode));
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = sample_app(false);
        app.update(Action::MoveSelectionUp);
        assert_eq!(app.selected_row, 0);

        for _ in 0..100 {
            app.update(Action::MoveSelectionDown);
        }
        assert_eq!(
            app.selected_row,
            overview::row_count(&app.txn, app.dev_mode) - 1
        );

        app.update(Action::JumpToTop);
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_status_cleared_on_next_action() {
        let mut app = sample_app(false);
        app.status = Some("Copied to clipboard".to_string());

        app.update(Action::MoveSelectionDown);
        assert!(app.status.is_none());
    }
}
