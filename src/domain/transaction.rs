//! Transaction types for the Aptos blockchain.
//!
//! The fullnode REST API serves transactions as JSON objects discriminated by
//! a `type` tag. Numeric chain quantities (version, gas, timestamps, amounts)
//! arrive as decimal strings and are kept as strings here; formatting and
//! arithmetic happen at display time.

use serde_json::Value;

use crate::constants::ENTRY_FUNCTION_PAYLOAD_TYPE;

// ============================================================================
// Transaction Variant
// ============================================================================

/// Aptos ledger transaction variants, as tagged by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TxnVariant {
    /// A transaction submitted by an account.
    User,
    /// A submitted transaction not yet committed to the ledger.
    Pending,
    /// A block prologue written by consensus.
    BlockMetadata,
    /// A state checkpoint marker.
    StateCheckpoint,
    /// The genesis transaction.
    Genesis,
    /// Unrecognized variant tag.
    #[default]
    Unknown,
}

impl TxnVariant {
    /// Returns the human-readable name of the variant.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::User => "User",
            Self::Pending => "Pending",
            Self::BlockMetadata => "Block Metadata",
            Self::StateCheckpoint => "State Checkpoint",
            Self::Genesis => "Genesis",
            Self::Unknown => "Unknown",
        }
    }

    /// Determine the transaction variant from the JSON `type` tag.
    #[must_use]
    pub fn from_json(txn_json: &Value) -> Self {
        match txn_json["type"].as_str() {
            Some("user_transaction") => Self::User,
            Some("pending_transaction") => Self::Pending,
            Some("block_metadata_transaction") => Self::BlockMetadata,
            Some("state_checkpoint_transaction") => Self::StateCheckpoint,
            Some("genesis_transaction") => Self::Genesis,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for TxnVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Transaction Payload
// ============================================================================

/// Transaction payload variants.
///
/// Only the entry-function variant carries data the viewer inspects; the
/// remaining variants are tracked so unrecognized payloads stay distinguishable
/// from absent ones.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionPayload {
    /// Invocation of a published on-chain function by fully-qualified name.
    EntryFunction(EntryFunctionPayload),
    /// An inline Move script.
    Script,
    /// A multisig-wrapped payload.
    Multisig,
    /// Unrecognized payload variant tag.
    Unknown,
}

impl TransactionPayload {
    /// Parse a payload from its JSON representation.
    ///
    /// Returns `None` when the value is not a JSON object; payload shape is
    /// never guaranteed by the API contract.
    #[must_use]
    pub fn from_json(payload_json: &Value) -> Option<Self> {
        if !payload_json.is_object() {
            return None;
        }

        match payload_json["type"].as_str() {
            Some(ENTRY_FUNCTION_PAYLOAD_TYPE) => Some(Self::EntryFunction(
                EntryFunctionPayload::from_json(payload_json),
            )),
            Some("script_payload") => Some(Self::Script),
            Some("multisig_payload") => Some(Self::Multisig),
            _ => Some(Self::Unknown),
        }
    }
}

/// Entry-function payload: a function identifier plus typed arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryFunctionPayload {
    /// Fully-qualified function identifier, e.g. `0x1::coin::transfer`.
    pub function: String,
    /// Ordered type arguments as type-tag strings.
    pub type_arguments: Vec<String>,
    /// Ordered positional arguments; values are opaque to the viewer.
    pub arguments: Vec<Value>,
}

impl EntryFunctionPayload {
    fn from_json(payload_json: &Value) -> Self {
        let function = payload_json["function"].as_str().unwrap_or("").to_string();

        let type_arguments = payload_json["type_arguments"]
            .as_array()
            .map(|args| {
                args.iter()
                    .filter_map(|arg| arg.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let arguments = payload_json["arguments"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        Self {
            function,
            type_arguments,
            arguments,
        }
    }
}

// ============================================================================
// User Transaction
// ============================================================================

/// A ledger-committed user transaction with the fields the overview displays.
///
/// Parsing is tolerant: absent fields fall back to placeholder values rather
/// than failing, since the record has already been discriminated as a user
/// transaction by the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserTransaction {
    /// Ledger version (global transaction index), decimal string.
    pub version: String,
    /// Transaction hash, `0x`-prefixed hex.
    pub hash: String,
    /// Hash of the state change set.
    pub state_change_hash: String,
    /// Root hash of the emitted event tree.
    pub event_root_hash: String,
    /// Root hash of the transaction accumulator after this transaction.
    pub accumulator_root_hash: String,
    /// Gas consumed, decimal string of gas units.
    pub gas_used: String,
    /// Whether execution succeeded.
    pub success: bool,
    /// VM status string (e.g. "Executed successfully").
    pub vm_status: String,
    /// Sender account address.
    pub sender: String,
    /// Sender's sequence number, decimal string.
    pub sequence_number: String,
    /// Maximum gas the sender allowed, decimal string of gas units.
    pub max_gas_amount: String,
    /// Price per gas unit in octas, decimal string.
    pub gas_unit_price: String,
    /// Expiration time, decimal string of Unix seconds.
    pub expiration_timestamp_secs: String,
    /// Commit time, decimal string of Unix microseconds.
    pub timestamp: String,
    /// Transaction payload, if present and recognizable.
    pub payload: Option<TransactionPayload>,
    /// Signature structure, kept opaque for display.
    pub signature: Option<Value>,
}

impl UserTransaction {
    /// Parse a user transaction from its JSON representation.
    #[must_use]
    pub fn from_json(txn_json: &Value) -> Self {
        Self {
            version: string_field(txn_json, "version", "0"),
            hash: string_field(txn_json, "hash", "unknown"),
            state_change_hash: string_field(txn_json, "state_change_hash", "unknown"),
            event_root_hash: string_field(txn_json, "event_root_hash", "unknown"),
            accumulator_root_hash: string_field(txn_json, "accumulator_root_hash", "unknown"),
            gas_used: string_field(txn_json, "gas_used", "0"),
            success: txn_json["success"].as_bool().unwrap_or(false),
            vm_status: string_field(txn_json, "vm_status", "unknown"),
            sender: string_field(txn_json, "sender", "unknown"),
            sequence_number: string_field(txn_json, "sequence_number", "0"),
            max_gas_amount: string_field(txn_json, "max_gas_amount", "0"),
            gas_unit_price: string_field(txn_json, "gas_unit_price", "0"),
            expiration_timestamp_secs: string_field(txn_json, "expiration_timestamp_secs", "0"),
            timestamp: string_field(txn_json, "timestamp", "0"),
            payload: txn_json
                .get("payload")
                .and_then(TransactionPayload::from_json),
            signature: txn_json.get("signature").cloned(),
        }
    }
}

/// Extract a string field, falling back to a placeholder.
///
/// The API serializes u64 quantities as strings, but a raw number is accepted
/// too for robustness against hand-written fixture files.
fn string_field(txn_json: &Value, key: &str, fallback: &str) -> String {
    match &txn_json[key] {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => fallback.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user_txn() -> Value {
        json!({
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
                "arguments": ["0xdef", "500"]
            },
            "signature": {
                "type": "ed25519_signature",
                "public_key": "0xkey",
                "signature": "0xsig"
            }
        })
    }

    #[test]
    fn test_variant_discrimination() {
        let cases = [
            ("user_transaction", TxnVariant::User),
            ("pending_transaction", TxnVariant::Pending),
            ("block_metadata_transaction", TxnVariant::BlockMetadata),
            ("state_checkpoint_transaction", TxnVariant::StateCheckpoint),
            ("genesis_transaction", TxnVariant::Genesis),
            ("validator_transaction", TxnVariant::Unknown),
        ];

        for (tag, expected) in cases {
            let value = json!({ "type": tag });
            assert_eq!(TxnVariant::from_json(&value), expected, "tag={tag}");
        }

        // Missing tag entirely
        assert_eq!(TxnVariant::from_json(&json!({})), TxnVariant::Unknown);
    }

    #[test]
    fn test_user_transaction_from_json() {
        let txn = UserTransaction::from_json(&sample_user_txn());

        assert_eq!(txn.version, "573856054");
        assert_eq!(txn.sender, "0xabc123");
        assert_eq!(txn.sequence_number, "42");
        assert_eq!(txn.gas_used, "521");
        assert_eq!(txn.gas_unit_price, "100");
        assert_eq!(txn.max_gas_amount, "20000");
        assert!(txn.success);
        assert_eq!(txn.vm_status, "Executed successfully");
        assert_eq!(txn.timestamp, "1700000000123456");
        assert_eq!(txn.expiration_timestamp_secs, "1700000600");

        let Some(TransactionPayload::EntryFunction(payload)) = txn.payload else {
            panic!("expected entry function payload");
        };
        assert_eq!(payload.function, "0x1::coin::transfer");
        assert_eq!(payload.type_arguments, vec!["0x1::aptos_coin::AptosCoin"]);
        assert_eq!(payload.arguments.len(), 2);

        assert!(txn.signature.is_some());
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let txn = UserTransaction::from_json(&json!({ "type": "user_transaction" }));

        assert_eq!(txn.version, "0");
        assert_eq!(txn.sender, "unknown");
        assert!(!txn.success);
        assert!(txn.payload.is_none());
        assert!(txn.signature.is_none());
    }

    #[test]
    fn test_numeric_fields_accepted_as_numbers() {
        let txn = UserTransaction::from_json(&json!({
            "version": 99, "gas_used": 5
        }));
        assert_eq!(txn.version, "99");
        assert_eq!(txn.gas_used, "5");
    }

    #[test]
    fn test_payload_variants() {
        let script = TransactionPayload::from_json(&json!({ "type": "script_payload" }));
        assert_eq!(script, Some(TransactionPayload::Script));

        let multisig = TransactionPayload::from_json(&json!({ "type": "multisig_payload" }));
        assert_eq!(multisig, Some(TransactionPayload::Multisig));

        let unknown = TransactionPayload::from_json(&json!({ "type": "module_bundle_payload" }));
        assert_eq!(unknown, Some(TransactionPayload::Unknown));

        // Not an object at all
        assert_eq!(TransactionPayload::from_json(&json!("payload")), None);
    }

    #[test]
    fn test_entry_function_payload_tolerates_malformed_lists() {
        let payload = TransactionPayload::from_json(&json!({
            "type": "entry_function_payload",
            "function": "0x1::coin::transfer",
            "type_arguments": "not-an-array",
            "arguments": null
        }));

        let Some(TransactionPayload::EntryFunction(payload)) = payload else {
            panic!("expected entry function payload");
        };
        assert!(payload.type_arguments.is_empty());
        assert!(payload.arguments.is_empty());
    }
}
