//! Domain types for the Aptos transaction viewer.
//!
//! # Module Organization
//!
//! - [`transaction`] - ledger transaction model and JSON parsing
//! - [`transfer`] - native-coin transfer detection
//! - [`network`] - network endpoints
//! - [`error`] - client error type

pub mod error;
pub mod network;
pub mod transaction;
pub mod transfer;

pub use error::ExplorerError;
pub use network::Network;
pub use transaction::{TransactionPayload, TxnVariant, UserTransaction};
pub use transfer::{CoinTransfer, detect_coin_transfer};
