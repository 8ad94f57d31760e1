//! Fee policy: how much a transaction pays when the caller doesn't say.

use super::error::{Result, TransactionError};
use crate::config::{BuildConfig, DEFAULT_BASE_FEE};

/// Computes the wire fee from the operation count.
///
/// The network charges per operation, so the default is
/// `base_fee * operation_count`. An explicit non-zero fee always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    base_fee: u32,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_FEE)
    }
}

impl FeePolicy {
    pub fn new(base_fee: u32) -> Self {
        Self { base_fee }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.base_fee)
    }

    pub fn base_fee(&self) -> u32 {
        self.base_fee
    }

    /// Returns the fee to put on the wire.
    ///
    /// `Some(0)` counts as "not set", matching how the network treats a zero fee.
    pub fn fee_for(&self, explicit: Option<u32>, operation_count: usize) -> Result<u32> {
        if let Some(fee) = explicit.filter(|fee| *fee > 0) {
            return Ok(fee);
        }
        u32::try_from(operation_count)
            .ok()
            .and_then(|count| self.base_fee.checked_mul(count))
            .ok_or_else(|| {
                TransactionError::validation(format!(
                    "fee overflow: {} stroops x {operation_count} operations",
                    self.base_fee
                ))
            })
    }
}
