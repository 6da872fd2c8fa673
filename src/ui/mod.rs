//! UI rendering for the lazymove TUI.
//!
//! # Module Organization
//!
//! - [`overview`] - the transaction overview panel (both layouts)
//! - [`header`] / [`footer`] - application chrome
//! - [`helpers`] - shared block builders

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

pub mod footer;
pub mod header;
pub mod helpers;
pub mod overview;

/// Top-level render entry point, called on every draw.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Overview
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    header::render_header(app, frame, chunks[0]);
    overview::render_overview(app, frame, chunks[1]);
    footer::render_footer(app, frame, chunks[2]);
}

// ============================================================================
// Tests
// ============================================================================
