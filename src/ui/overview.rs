//! User transaction overview panel.
//!
//! Builds the labeled rows describing a user transaction and renders them as
//! a key-value table. Two layouts exist: the developer layout (full field set,
//! grouped with the signature/hash block, tooltips per row) and the condensed
//! layout (a flatter subset with simpler formatting). Row sets and orderings
//! deliberately differ between the two.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::app::App;
use crate::domain::{UserTransaction, detect_coin_transfer};
use crate::format::{
    format_apt_amount, format_full_timestamp, format_gas, format_timestamp_secs,
    format_timestamp_usecs, gas_fee_octas, render_debug, render_pretty,
};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::tooltip::learn_more_tooltip;

// ============================================================================
// Types
// ============================================================================

/// How a row value should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain field value.
    Plain,
    /// Account address.
    Address,
    /// Successful execution status.
    Success,
    /// Failed execution status.
    Failure,
    /// Currency amount.
    Amount,
    /// Serialized structured data, possibly multi-line.
    Json,
}

/// A row in the transaction overview.
#[derive(Debug, Clone, PartialEq)]
pub enum OverviewRow {
    /// Labeled key-value row.
    Field {
        label: &'static str,
        value: String,
        kind: ValueKind,
        tooltip: Option<&'static str>,
    },
    /// Separator between the main block and the signature/hash block.
    Divider,
}

fn field(
    label: &'static str,
    value: String,
    kind: ValueKind,
    tooltip_key: Option<&str>,
) -> OverviewRow {
    OverviewRow::Field {
        label,
        value,
        kind,
        tooltip: tooltip_key.and_then(learn_more_tooltip),
    }
}

// ============================================================================
// Row Building
// ============================================================================

/// Builds the overview rows for the active layout.
#[must_use]
pub fn build_overview_rows(txn: &UserTransaction, dev_mode: bool) -> Vec<OverviewRow> {
    if dev_mode {
        build_developer_rows(txn)
    } else {
        build_condensed_rows(txn)
    }
}

/// Developer layout: full field set in fixed order, transfer rows when the
/// payload is a recognized APT transfer, then the signature/hash block.
#[must_use]
pub fn build_developer_rows(txn: &UserTransaction) -> Vec<OverviewRow> {
    let status = if txn.success { "Success" } else { "Failed" };
    let status_kind = if txn.success {
        ValueKind::Success
    } else {
        ValueKind::Failure
    };

    let mut rows = vec![
        field("Status:", status.to_string(), status_kind, Some("status")),
        field(
            "Sender:",
            txn.sender.clone(),
            ValueKind::Address,
            Some("sender"),
        ),
    ];

    if let Some(transfer) = detect_coin_transfer(txn) {
        rows.push(field(
            "Receiver:",
            transfer.receiver,
            ValueKind::Address,
            Some("receiver"),
        ));
        rows.push(field(
            "Amount:",
            format_apt_amount(&transfer.amount),
            ValueKind::Amount,
            Some("amount"),
        ));
    }

    rows.push(field(
        "Version:",
        txn.version.clone(),
        ValueKind::Plain,
        Some("version"),
    ));
    rows.push(field(
        "Sequence Number:",
        txn.sequence_number.clone(),
        ValueKind::Plain,
        Some("sequence_number"),
    ));
    rows.push(field(
        "Expiration Timestamp:",
        format_timestamp_secs(&txn.expiration_timestamp_secs),
        ValueKind::Plain,
        Some("expiration_timestamp_secs"),
    ));
    rows.push(field(
        "Timestamp:",
        format_timestamp_usecs(&txn.timestamp),
        ValueKind::Plain,
        Some("timestamp"),
    ));
    rows.push(field(
        "Gas Fee:",
        format!("{} ({})", gas_fee_display(txn), format_gas(&txn.gas_used)),
        ValueKind::Amount,
        Some("gas_fee"),
    ));
    rows.push(field(
        "Gas Unit Price:",
        format_apt_amount(&txn.gas_unit_price),
        ValueKind::Amount,
        Some("gas_unit_price"),
    ));
    rows.push(field(
        "Max Gas Limit:",
        format_gas(&txn.max_gas_amount),
        ValueKind::Plain,
        Some("max_gas_amount"),
    ));
    rows.push(field(
        "VM Status:",
        txn.vm_status.clone(),
        ValueKind::Plain,
        Some("vm_status"),
    ));

    rows.push(OverviewRow::Divider);

    rows.push(field(
        "Signature:",
        txn.signature
            .as_ref()
            .map(render_pretty)
            .unwrap_or_else(|| "None".to_string()),
        ValueKind::Json,
        Some("signature"),
    ));
    rows.push(field(
        "State Change Hash:",
        txn.state_change_hash.clone(),
        ValueKind::Plain,
        Some("state_change_hash"),
    ));
    rows.push(field(
        "Event Root Hash:",
        txn.event_root_hash.clone(),
        ValueKind::Plain,
        Some("event_root_hash"),
    ));
    rows.push(field(
        "Accumulator Root Hash:",
        txn.accumulator_root_hash.clone(),
        ValueKind::Plain,
        Some("accumulator_root_hash"),
    ));

    rows
}

/// Condensed layout: flat subset with its own ordering, human-readable
/// expiration, compact signature, and the raw commit timestamp last.
#[must_use]
pub fn build_condensed_rows(txn: &UserTransaction) -> Vec<OverviewRow> {
    let status = if txn.success { "Success" } else { "Failed" };
    let status_kind = if txn.success {
        ValueKind::Success
    } else {
        ValueKind::Failure
    };

    vec![
        field("Sender:", txn.sender.clone(), ValueKind::Address, None),
        field(
            "Sequence Number:",
            txn.sequence_number.clone(),
            ValueKind::Plain,
            None,
        ),
        field(
            "Expiration Timestamp:",
            format_full_timestamp(&txn.expiration_timestamp_secs),
            ValueKind::Plain,
            None,
        ),
        field("Version:", txn.version.clone(), ValueKind::Plain, None),
        field("Status:", status.to_string(), status_kind, None),
        field(
            "State Change Hash:",
            txn.state_change_hash.clone(),
            ValueKind::Plain,
            None,
        ),
        field(
            "Event Root Hash:",
            txn.event_root_hash.clone(),
            ValueKind::Plain,
            None,
        ),
        field(
            "Gas Used:",
            format_gas(&txn.gas_used),
            ValueKind::Plain,
            None,
        ),
        field(
            "Max Gas Limit:",
            format_gas(&txn.max_gas_amount),
            ValueKind::Plain,
            None,
        ),
        field(
            "Gas Unit Price:",
            format_apt_amount(&txn.gas_unit_price),
            ValueKind::Amount,
            None,
        ),
        field("Gas Fee:", gas_fee_display(txn), ValueKind::Amount, None),
        field("VM Status:", txn.vm_status.clone(), ValueKind::Plain, None),
        field(
            "Signature:",
            txn.signature
                .as_ref()
                .map(render_debug)
                .unwrap_or_else(|| "None".to_string()),
            ValueKind::Json,
            None,
        ),
        field(
            "Accumulator Root Hash:",
            txn.accumulator_root_hash.clone(),
            ValueKind::Plain,
            None,
        ),
        field("Timestamp:", txn.timestamp.clone(), ValueKind::Plain, None),
    ]
}

/// Exact gas fee (gas_used x gas_unit_price) formatted as APT.
fn gas_fee_display(txn: &UserTransaction) -> String {
    gas_fee_octas(&txn.gas_used, &txn.gas_unit_price)
        .map(|octas| format_apt_amount(&octas))
        .unwrap_or_else(|| "unknown".to_string())
}

// ============================================================================
// Navigation Helpers
// ============================================================================

/// Number of rows in the active layout, for selection bounds.
#[must_use]
pub fn row_count(txn: &UserTransaction, dev_mode: bool) -> usize {
    build_overview_rows(txn, dev_mode).len()
}

/// Value of the row at `index`, for copy. `None` on the divider.
#[must_use]
pub fn row_value_at(txn: &UserTransaction, dev_mode: bool, index: usize) -> Option<String> {
    match build_overview_rows(txn, dev_mode).into_iter().nth(index) {
        Some(OverviewRow::Field { value, .. }) => Some(value),
        _ => None,
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders the overview for the app's active layout.
pub fn render_overview(app: &App, frame: &mut Frame, area: Rect) {
    let rows = build_overview_rows(&app.txn, app.dev_mode);
    let selected = app.selected_row.min(rows.len().saturating_sub(1));

    // Developer layout reserves a line for the selected row's tooltip.
    let (table_area, tooltip_area) = if app.dev_mode {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    // Keep the selection in view: scroll past rows above it when it would
    // fall below the midpoint of the viewport.
    let half_view = (table_area.height / 2) as usize;
    let scroll_offset = selected.saturating_sub(half_view);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .map(|(idx, row)| build_table_row(row, idx == selected))
        .collect();

    let table = Table::new(table_rows, [Constraint::Length(22), Constraint::Min(40)])
        .block(Block::default())
        .column_spacing(2);
    frame.render_widget(table, table_area);

    if let Some(tooltip_area) = tooltip_area {
        let tooltip = match rows.get(selected) {
            Some(OverviewRow::Field {
                tooltip: Some(text),
                ..
            }) => *text,
            _ => "",
        };
        let tooltip_line = Paragraph::new(tooltip).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(tooltip_line, tooltip_area);
    }
}

fn build_table_row<'a>(row: &'a OverviewRow, is_selected: bool) -> Row<'a> {
    match row {
        OverviewRow::Field {
            label, value, kind, ..
        } => {
            let label_style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(WARNING_COLOR)
                    .add_modifier(Modifier::BOLD)
            };
            let value_style = if is_selected {
                Style::default().fg(Color::Black).bg(PRIMARY_COLOR)
            } else {
                value_kind_style(*kind)
            };

            let height = value.lines().count().max(1) as u16;
            Row::new(vec![
                Cell::from(*label).style(label_style),
                Cell::from(value.as_str()).style(value_style),
            ])
            .height(height)
        }
        OverviewRow::Divider => {
            let style = Style::default().fg(MUTED_COLOR);
            Row::new(vec![
                Cell::from("").style(style),
                Cell::from("─".repeat(40)).style(style),
            ])
        }
    }
}

fn value_kind_style(kind: ValueKind) -> Style {
    match kind {
        ValueKind::Plain => Style::default().fg(PRIMARY_COLOR),
        ValueKind::Address => Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
        ValueKind::Success => Style::default()
            .fg(SUCCESS_COLOR)
            .add_modifier(Modifier::BOLD),
        ValueKind::Failure => Style::default()
            .fg(ERROR_COLOR)
            .add_modifier(Modifier::BOLD),
        ValueKind::Amount => Style::default().fg(SUCCESS_COLOR),
        ValueKind::Json => Style::default().fg(MUTED_COLOR),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Network;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn transfer_txn() -> UserTransaction {
        UserTransaction::from_json(&json!({
            "type": "user_transaction",
            "version": "573856054",
            "hash": "0x8a1e3f0c",
            "state_change_hash": "0xsc",
            "event_root_hash": "0xev",
            "accumulator_root_hash": "0xacc",
            "gas_used": "521",
            "success": true,
            "vm_status": "Executed successfully",
            "sender": "0xabc123",
            "sequence_number": "42",
            "max_gas_amount": "20000",
            "gas_unit_price": "100",
            "expiration_timestamp_secs": "1700000600",
            "timestamp": "1700000000123456",
            "payload": {
                "type": "entry_function_payload",
                "function": "0x1::coin::transfer",
                "type_arguments": ["0x1::aptos_coin::AptosCoin"],
                "arguments": ["0xdef456", "150000000"]
            },
            "signature": { "type": "ed25519_signature", "public_key": "0xkey" }
        }))
    }

    fn labels(rows: &[OverviewRow]) -> Vec<&'static str> {
        rows.iter()
            .map(|row| match row {
                OverviewRow::Field { label, .. } => *label,
                OverviewRow::Divider => "---",
            })
            .collect()
    }

    fn value_of(rows: &[OverviewRow], wanted: &str) -> Option<String> {
        rows.iter().find_map(|row| match row {
            OverviewRow::Field { label, value, .. } if *label == wanted => Some(value.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_developer_row_order_with_transfer() {
        let rows = build_developer_rows(&transfer_txn());
        assert_eq!(
            labels(&rows),
            vec![
                "Status:",
                "Sender:",
                "Receiver:",
                "Amount:",
                "Version:",
                "Sequence Number:",
                "Expiration Timestamp:",
                "Timestamp:",
                "Gas Fee:",
                "Gas Unit Price:",
                "Max Gas Limit:",
                "VM Status:",
                "---",
                "Signature:",
                "State Change Hash:",
                "Event Root Hash:",
                "Accumulator Root Hash:",
            ]
        );
    }

    #[test]
    fn test_condensed_row_order() {
        let rows = build_condensed_rows(&transfer_txn());
        assert_eq!(
            labels(&rows),
            vec![
                "Sender:",
                "Sequence Number:",
                "Expiration Timestamp:",
                "Version:",
                "Status:",
                "State Change Hash:",
                "Event Root Hash:",
                "Gas Used:",
                "Max Gas Limit:",
                "Gas Unit Price:",
                "Gas Fee:",
                "VM Status:",
                "Signature:",
                "Accumulator Root Hash:",
                "Timestamp:",
            ]
        );
    }

    #[test]
    fn test_transfer_rows_only_in_developer_layout_when_detected() {
        let rows = build_developer_rows(&transfer_txn());
        assert_eq!(value_of(&rows, "Receiver:"), Some("0xdef456".to_string()));
        assert_eq!(value_of(&rows, "Amount:"), Some("1.5 APT".to_string()));

        // No payload at all: transfer rows absent, nothing errors
        let bare = UserTransaction::from_json(&json!({ "type": "user_transaction" }));
        let rows = build_developer_rows(&bare);
        assert_eq!(value_of(&rows, "Receiver:"), None);
        assert_eq!(value_of(&rows, "Amount:"), None);
    }

    /// Toggling the layout must not change underlying field values, only the
    /// row set, ordering and formatters.
    #[test]
    fn test_layouts_share_field_values() {
        let txn = transfer_txn();
        let dev = build_developer_rows(&txn);
        let condensed = build_condensed_rows(&txn);

        for label in [
            "Sender:",
            "Version:",
            "Sequence Number:",
            "State Change Hash:",
            "VM Status:",
            "Gas Unit Price:",
        ] {
            assert_eq!(
                value_of(&dev, label),
                value_of(&condensed, label),
                "value mismatch for {label}"
            );
        }

        // Same fee amount in both; developer layout appends the gas used
        let dev_fee = value_of(&dev, "Gas Fee:").unwrap();
        let condensed_fee = value_of(&condensed, "Gas Fee:").unwrap();
        assert_eq!(condensed_fee, "0.000521 APT");
        assert_eq!(dev_fee, "0.000521 APT (521 Gas Units)");

        // Divergent formatters: condensed signature is single-line, raw timestamp
        let dev_sig = value_of(&dev, "Signature:").unwrap();
        let condensed_sig = value_of(&condensed, "Signature:").unwrap();
        assert!(dev_sig.lines().count() > 1);
        assert_eq!(condensed_sig.lines().count(), 1);
        assert_eq!(
            value_of(&condensed, "Timestamp:"),
            Some("1700000000123456".to_string())
        );
    }

    #[test]
    fn test_only_developer_rows_carry_tooltips() {
        let txn = transfer_txn();

        for row in build_developer_rows(&txn) {
            if let OverviewRow::Field { label, tooltip, .. } = row {
                assert!(tooltip.is_some(), "developer row {label} missing tooltip");
            }
        }
        for row in build_condensed_rows(&txn) {
            if let OverviewRow::Field { label, tooltip, .. } = row {
                assert!(tooltip.is_none(), "condensed row {label} has a tooltip");
            }
        }
    }

    #[test]
    fn test_row_value_at() {
        let txn = transfer_txn();
        assert_eq!(
            row_value_at(&txn, false, 0),
            Some("0xabc123".to_string()) // condensed: Sender first
        );
        // Developer layout divider yields no copyable value
        let divider_index = build_developer_rows(&txn)
            .iter()
            .position(|row| matches!(row, OverviewRow::Divider))
            .unwrap();
        assert_eq!(row_value_at(&txn, true, divider_index), None);
    }

    #[test]
    fn test_render_both_layouts() {
        let txn = transfer_txn();

        for dev_mode in [true, false] {
            let app = App::new(txn.clone(), Network::Mainnet, dev_mode);
            let mut terminal =
                Terminal::new(TestBackend::new(110, 40)).expect("terminal creation");
            terminal
                .draw(|frame| render_overview(&app, frame, frame.area()))
                .expect("draw should succeed");

            let content = terminal.backend().to_string();
            assert!(content.contains("Sender:"), "dev_mode={dev_mode}");
            assert!(content.contains("0xabc123"), "dev_mode={dev_mode}");

            if dev_mode {
                assert!(content.contains("Receiver:"));
                assert!(!content.contains("Gas Used:"));
            } else {
                assert!(content.contains("Gas Used:"));
                assert!(!content.contains("Receiver:"));
            }
        }
    }
}
