//! The source-account capability consumed by the transaction builder.
//!
//! The builder never owns account state. It asks an [`Account`] for its
//! address and for the next sequence number, and the account is responsible
//! for persisting the increment wherever it keeps its state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-account replay counter. Signed on the wire.
pub type SequenceNumber = i64;

/// Errors an account implementation can report while handing out sequence numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("invalid sequence number {0:?}")]
    InvalidSequence(String),

    #[error("sequence number overflow")]
    SequenceOverflow,

    /// The backing store could not be reached or refused the update.
    #[error("account lookup failed: {0}")]
    Lookup(String),
}

/// The aspects of an account needed to construct a transaction.
pub trait Account {
    /// The account's address (`G...`).
    fn account_id(&self) -> &str;

    /// Consumes and returns the next sequence number.
    ///
    /// Each call must return a strictly greater value than the last.
    fn increment_sequence_number(&mut self) -> Result<SequenceNumber, AccountError>;
}

/// An in-memory account: an address and its current sequence number.
///
/// Suitable when the caller already fetched the account's state and just
/// needs to drive the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleAccount {
    account_id: String,
    sequence: SequenceNumber,
}

impl SimpleAccount {
    pub fn new(account_id: impl Into<String>, sequence: SequenceNumber) -> Self {
        Self {
            account_id: account_id.into(),
            sequence,
        }
    }

    /// Builds an account from the decimal sequence string that ledger APIs return.
    pub fn from_sequence_str(
        account_id: impl Into<String>,
        sequence: &str,
    ) -> Result<Self, AccountError> {
        let sequence = sequence
            .trim()
            .parse::<SequenceNumber>()
            .map_err(|_| AccountError::InvalidSequence(sequence.to_string()))?;
        Ok(Self::new(account_id, sequence))
    }

    /// The last sequence number handed out (or loaded).
    pub fn sequence(&self) -> SequenceNumber {
        self.sequence
    }
}

impl Account for SimpleAccount {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn increment_sequence_number(&mut self) -> Result<SequenceNumber, AccountError> {
        self.sequence = self
            .sequence
            .checked_add(1)
            .ok_or(AccountError::SequenceOverflow)?;
        Ok(self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_returns_next_value() {
        let mut account = SimpleAccount::new("GABC", 3556091187167235);
        assert_eq!(account.increment_sequence_number(), Ok(3556091187167236));
        assert_eq!(account.increment_sequence_number(), Ok(3556091187167237));
        assert_eq!(account.sequence(), 3556091187167237);
    }

    #[test]
    fn parse_sequence_string() {
        let account = SimpleAccount::from_sequence_str("GABC", "9605939170639897").unwrap();
        assert_eq!(account.sequence(), 9605939170639897);
        assert_eq!(account.account_id(), "GABC");
    }

    #[test]
    fn malformed_sequence_string_rejected() {
        let err = SimpleAccount::from_sequence_str("GABC", "12ab").unwrap_err();
        assert_eq!(err, AccountError::InvalidSequence("12ab".to_string()));
    }

    #[test]
    fn overflow_is_an_error_not_a_wrap() {
        let mut account = SimpleAccount::new("GABC", i64::MAX);
        assert_eq!(
            account.increment_sequence_number(),
            Err(AccountError::SequenceOverflow)
        );
        assert_eq!(account.sequence(), i64::MAX);
    }

    #[test]
    fn json_roundtrip() {
        let account = SimpleAccount::new("GABC", 42);
        let json = serde_json::to_string(&account).unwrap();
        let recovered: SimpleAccount = serde_json::from_str(&json).unwrap();
        assert_eq!(account, recovered);
    }
}
