//! Network configuration for Aptos networks.
//!
//! Defines the supported Aptos networks together with their fullnode REST
//! endpoints and web explorer links.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network Configuration
// ============================================================================

/// Aptos network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// Aptos mainnet - the production network.
    #[default]
    Mainnet,
    /// Aptos testnet.
    Testnet,
    /// Aptos devnet - reset frequently.
    Devnet,
    /// A locally running fullnode.
    Localnet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Testnet => "Testnet",
            Self::Devnet => "Devnet",
            Self::Localnet => "Localnet",
        }
    }

    /// Returns the fullnode REST API base URL for this network.
    ///
    /// The fullnode serves committed transactions under `/v1/transactions`.
    #[must_use]
    pub const fn fullnode_url(&self) -> &str {
        match self {
            Self::Mainnet => "https://fullnode.mainnet.aptoslabs.com/v1",
            Self::Testnet => "https://fullnode.testnet.aptoslabs.com/v1",
            Self::Devnet => "https://fullnode.devnet.aptoslabs.com/v1",
            Self::Localnet => "http://localhost:8080/v1",
        }
    }

    /// Returns the web explorer URL for a transaction version.
    #[must_use]
    pub fn explorer_txn_url(&self, version: &str) -> String {
        format!(
            "https://explorer.aptoslabs.com/txn/{}?network={}",
            version,
            self.as_str().to_lowercase()
        )
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "devnet" => Ok(Self::Devnet),
            "localnet" | "local" => Ok(Self::Localnet),
            other => Err(format!(
                "unknown network '{other}' (expected mainnet, testnet, devnet or localnet)"
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
