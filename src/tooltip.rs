//! Explanatory tooltip text for transaction overview fields.

// ============================================================================
// Tooltip Lookup
// ============================================================================

/// Returns the help text for a transaction field key, if one exists.
#[must_use]
pub fn learn_more_tooltip(field: &str) -> Option<&'static str> {
    match field {
        "status" => Some("Whether the transaction executed successfully on-chain."),
        "sender" => Some("Address of the account that signed and submitted the transaction."),
        "receiver" => Some("Address receiving the transferred coins."),
        "amount" => Some("Amount of APT transferred, in the smallest unit (octas)."),
        "version" => Some("Global index of the transaction in the ledger history."),
        "sequence_number" => {
            Some("Per-sender counter; each transaction from an account increments it by one.")
        }
        "expiration_timestamp_secs" => {
            Some("Time after which the transaction can no longer be committed.")
        }
        "timestamp" => Some("Time at which the transaction was committed to the ledger."),
        "gas_fee" => Some("Total execution cost: gas used multiplied by the gas unit price."),
        "gas_unit_price" => Some("Price in octas the sender paid per unit of gas."),
        "max_gas_amount" => Some("Upper bound on gas units the sender allowed this transaction."),
        "vm_status" => Some("Raw execution status reported by the Move virtual machine."),
        "signature" => Some("Cryptographic signature authorizing this transaction."),
        "state_change_hash" => Some("Hash of the set of state changes this transaction produced."),
        "event_root_hash" => Some("Root hash of the events emitted by this transaction."),
        "accumulator_root_hash" => {
            Some("Root hash of the ledger accumulator after this transaction.")
        }
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
