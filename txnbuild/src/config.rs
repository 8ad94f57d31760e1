//! # Build Configuration & Constants
//!
//! Every network-level number the builder relies on lives here. If you find
//! yourself typing `100` or `10_000_000` somewhere else, import it from here
//! instead.
//!
//! The constants are fixed by the network protocol. [`BuildConfig`] is the
//! part a caller may vary: which network to sign for and what base fee to
//! pay per operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Network Passphrases
// ---------------------------------------------------------------------------

/// The public network. Signatures made with this passphrase move real value.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// The test network. Reset periodically, funded by friendbot.
pub const TEST_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

/// Minimum fee per operation, in stroops.
pub const DEFAULT_BASE_FEE: u32 = 100;

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Stroops per whole unit. Amounts carry seven decimal places on the wire.
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

/// Maximum fractional digits in a decimal amount string.
pub const AMOUNT_DECIMALS: usize = 7;

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Maximum operations per transaction. Zero is rejected too.
pub const MAX_OPERATIONS: usize = crate::xdr::MAX_OPERATIONS;

/// Maximum signatures on one envelope.
pub const MAX_SIGNATURES: usize = crate::xdr::MAX_SIGNATURES;

/// Maximum bytes of a text memo.
pub const MAX_MEMO_TEXT_LENGTH: usize = crate::xdr::MAX_MEMO_TEXT;

// ---------------------------------------------------------------------------
// BuildConfig
// ---------------------------------------------------------------------------

/// Errors loading a [`BuildConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed build config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("network passphrase must not be empty")]
    EmptyPassphrase,

    #[error("base fee must be at least 1 stroop")]
    ZeroBaseFee,
}

/// The caller-tunable knobs of a build.
///
/// Defaults to the test network and [`DEFAULT_BASE_FEE`]. Missing JSON
/// fields fall back to those defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Fee charged per operation when the transaction carries no explicit fee.
    pub base_fee: u32,
    /// Passphrase identifying the network the transaction is signed for.
    pub network_passphrase: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_fee: DEFAULT_BASE_FEE,
            network_passphrase: TEST_NETWORK_PASSPHRASE.to_string(),
        }
    }
}

impl BuildConfig {
    pub fn testnet() -> Self {
        Self::default()
    }

    pub fn public() -> Self {
        Self {
            network_passphrase: PUBLIC_NETWORK_PASSPHRASE.to_string(),
            ..Self::default()
        }
    }

    pub fn with_base_fee(mut self, base_fee: u32) -> Self {
        self.base_fee = base_fee;
        self
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network_passphrase.is_empty() {
            return Err(ConfigError::EmptyPassphrase);
        }
        if self.base_fee == 0 {
            return Err(ConfigError::ZeroBaseFee);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_testnet() {
        let config = BuildConfig::default();
        assert_eq!(config.base_fee, 100);
        assert_eq!(config.network_passphrase, TEST_NETWORK_PASSPHRASE);
    }

    #[test]
    fn test_passphrases_are_distinct() {
        // Signing for the wrong network is the classic way to lose an afternoon.
        assert_ne!(PUBLIC_NETWORK_PASSPHRASE, TEST_NETWORK_PASSPHRASE);
        assert_eq!(BuildConfig::public().network_passphrase, PUBLIC_NETWORK_PASSPHRASE);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(BuildConfig::from_json("{}").unwrap(), BuildConfig::default());
    }

    #[test]
    fn test_json_overrides() {
        let config = BuildConfig::from_json(r#"{"base_fee": 250}"#).unwrap();
        assert_eq!(config.base_fee, 250);
        assert_eq!(config.network_passphrase, TEST_NETWORK_PASSPHRASE);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(matches!(
            BuildConfig::from_json(r#"{"base_fee": 0}"#),
            Err(ConfigError::ZeroBaseFee)
        ));
        assert!(matches!(
            BuildConfig::from_json(r#"{"network_passphrase": ""}"#),
            Err(ConfigError::EmptyPassphrase)
        ));
        assert!(matches!(
            BuildConfig::from_json("not json"),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn test_limit_constants_sanity() {
        assert_eq!(MAX_OPERATIONS, 100);
        assert_eq!(MAX_SIGNATURES, 20);
        assert_eq!(MAX_MEMO_TEXT_LENGTH, 28);
        assert_eq!(STROOPS_PER_UNIT, 10i64.pow(AMOUNT_DECIMALS as u32));
    }
}
