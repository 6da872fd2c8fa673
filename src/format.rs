//! Formatting helpers for displaying Aptos chain data.
//!
//! All chain quantities arrive as decimal strings; every formatter falls back
//! to echoing its input when parsing fails, so a malformed record degrades to
//! a wrong-looking value instead of an error.

use serde_json::Value;

use crate::constants::OCTAS_PER_APT;

// ============================================================================
// Timestamp Formatting
// ============================================================================

/// Format a Unix-microseconds string into an absolute UTC time.
///
/// The fullnode serves the commit `timestamp` field in microseconds.
#[must_use]
pub fn format_timestamp_usecs(usecs: &str) -> String {
    let Ok(us) = usecs.parse::<u64>() else {
        return usecs.to_string();
    };
    format_abs_timestamp((us / 1_000_000) as i64)
}

/// Format a Unix-seconds string into an absolute UTC time.
///
/// Used for `expiration_timestamp_secs`, which the API serves in seconds.
#[must_use]
pub fn format_timestamp_secs(secs: &str) -> String {
    let Ok(s) = secs.parse::<i64>() else {
        return secs.to_string();
    };
    format_abs_timestamp(s)
}

fn format_abs_timestamp(secs: i64) -> String {
    if secs == 0 {
        return "Timestamp not available".to_string();
    }

    let datetime = chrono::DateTime::from_timestamp(secs, 0).unwrap_or_else(chrono::Utc::now);

    datetime.format("%a, %d %b %Y %H:%M:%S").to_string()
}

/// Human-readable timestamp used by the condensed layout, from Unix seconds.
#[must_use]
pub fn format_full_timestamp(secs: &str) -> String {
    let Ok(s) = secs.parse::<i64>() else {
        return secs.to_string();
    };
    if s == 0 {
        return "Timestamp not available".to_string();
    }

    let datetime = chrono::DateTime::from_timestamp(s, 0).unwrap_or_else(chrono::Utc::now);

    datetime.format("%m/%d/%Y %H:%M:%S").to_string()
}

// ============================================================================
// Currency and Gas Formatting
// ============================================================================

/// Format an octas amount string as APT (8 decimal places).
///
/// The whole part is comma-grouped and trailing zeros in the fractional part
/// are trimmed: `150000000` -> `1.5 APT`, `100` -> `0.000001 APT`.
#[must_use]
pub fn format_apt_amount(octas: &str) -> String {
    let Ok(octas) = octas.parse::<u128>() else {
        return octas.to_string();
    };

    let whole = octas / OCTAS_PER_APT;
    let frac = octas % OCTAS_PER_APT;

    if frac == 0 {
        return format!("{} APT", format_with_commas(whole));
    }

    let frac_str = format!("{frac:08}");
    format!(
        "{}.{} APT",
        format_with_commas(whole),
        frac_str.trim_end_matches('0')
    )
}

/// Format a gas-unit quantity with comma grouping.
#[must_use]
pub fn format_gas(gas: &str) -> String {
    let Ok(units) = gas.parse::<u128>() else {
        return gas.to_string();
    };
    format!("{} Gas Units", format_with_commas(units))
}

/// Compute the gas fee in octas as the exact product gas_used x gas_unit_price.
///
/// Both operands are on-chain u64 quantities whose product exceeds the range a
/// double can represent exactly, so the multiplication is done in u128 where
/// it can never overflow or round.
#[must_use]
pub fn gas_fee_octas(gas_used: &str, gas_unit_price: &str) -> Option<String> {
    let used = gas_used.parse::<u128>().ok()?;
    let price = gas_unit_price.parse::<u128>().ok()?;
    used.checked_mul(price).map(|fee| fee.to_string())
}

/// Format a number with commas for thousands separators.
#[must_use]
pub fn format_with_commas(n: u128) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ============================================================================
// Structured Data Rendering
// ============================================================================

/// Compact single-line JSON serialization for opaque structures.
#[must_use]
pub fn render_debug(value: &Value) -> String {
    value.to_string()
}

/// Multi-line pretty JSON for inspectable structures.
#[must_use]
pub fn render_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// ============================================================================
// Hash Formatting
// ============================================================================

/// Truncate a hash or address with a middle ellipsis to fit `max_len`.
#[must_use]
pub fn truncate_hash(hash: &str, max_len: usize) -> String {
    if hash.len() <= max_len {
        return hash.to_string();
    }

    if max_len < 7 {
        return hash.chars().take(max_len).collect();
    }

    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = hash.chars().take(prefix_len).collect();
    let suffix: String = hash.chars().skip(hash.len() - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Tests
// ============================================================================
