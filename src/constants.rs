//! Chain-level constants for the Aptos network.

// ============================================================================
// Currency
// ============================================================================

/// Number of octas in one APT (APT has 8 decimal places).
pub const OCTAS_PER_APT: u128 = 100_000_000;

// ============================================================================
// Coin Transfer Identifiers
// ============================================================================

/// Entry function for a plain coin transfer between existing accounts.
///
/// Only counts as an APT transfer when the first type argument is
/// [`APTOS_COIN_TYPE`].
pub const COIN_TRANSFER_FUNCTION: &str = "0x1::coin::transfer";

/// Entry function for a transfer that creates the receiver account on demand.
///
/// Always denominated in APT, so no type argument is required.
pub const ACCOUNT_TRANSFER_FUNCTION: &str = "0x1::aptos_account::transfer";

/// Type tag of the native coin.
pub const APTOS_COIN_TYPE: &str = "0x1::aptos_coin::AptosCoin";

// ============================================================================
// Payload Variant Tags
// ============================================================================

/// JSON `type` tag of the entry-function payload variant.
pub const ENTRY_FUNCTION_PAYLOAD_TYPE: &str = "entry_function_payload";
