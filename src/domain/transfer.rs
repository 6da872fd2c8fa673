//! Detection of native-coin transfers in user transaction payloads.
//!
//! A user transaction counts as an APT transfer in two cases:
//!
//! 1. the payload invokes `0x1::coin::transfer` and its first type argument
//!    is `0x1::aptos_coin::AptosCoin`, or
//! 2. the payload invokes `0x1::aptos_account::transfer`, which creates the
//!    receiver account on demand and is always APT-denominated.
//!
//! In both cases the first positional argument is the receiver address and the
//! second is the amount in octas.

use serde_json::Value;

use crate::constants::{ACCOUNT_TRANSFER_FUNCTION, APTOS_COIN_TYPE, COIN_TRANSFER_FUNCTION};
use crate::domain::transaction::{TransactionPayload, UserTransaction};

// ============================================================================
// Coin Transfer
// ============================================================================

/// Receiver and amount extracted from a recognized APT transfer payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinTransfer {
    /// Receiver account address.
    pub receiver: String,
    /// Transferred amount in octas, decimal string.
    pub amount: String,
}

/// Decide whether a transaction is a recognizable APT transfer.
///
/// Pure derivation with no side effects; re-evaluated on every render.
/// Returns `None` for absent payloads, non-entry-function payloads,
/// unrecognized functions, and malformed argument lists.
#[must_use]
pub fn detect_coin_transfer(txn: &UserTransaction) -> Option<CoinTransfer> {
    let payload = match &txn.payload {
        Some(TransactionPayload::EntryFunction(payload)) => payload,
        _ => return None,
    };

    let type_argument = payload.type_arguments.first();
    let is_coin_transfer = payload.function == COIN_TRANSFER_FUNCTION
        && type_argument.is_some_and(|tag| tag == APTOS_COIN_TYPE);
    let is_account_transfer = payload.function == ACCOUNT_TRANSFER_FUNCTION;

    if !is_coin_transfer && !is_account_transfer {
        return None;
    }

    // Guard against malformed payloads missing positional arguments.
    if payload.arguments.len() < 2 {
        return None;
    }

    let receiver = argument_as_string(&payload.arguments[0])?;
    let amount = argument_as_string(&payload.arguments[1])?;

    Some(CoinTransfer { receiver, amount })
}

/// Arguments are opaque JSON; accept strings (the API encoding for addresses
/// and u64 amounts) and bare numbers, reject anything else.
fn argument_as_string(argument: &Value) -> Option<String> {
    match argument {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
