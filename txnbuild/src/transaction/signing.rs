//! Transaction signing.
//!
//! Signing is a separate step from building because the key may not be
//! available at construction time (hardware wallet, remote signer, a second
//! party co-signing). Each [`SignedTransaction::sign`] call consumes the value
//! and returns a new one with one more signature, so the body that was
//! signed is always the body that gets serialized.

use tracing::debug;

use super::builder::BuiltTransaction;
use super::error::{Result, TransactionError};
use crate::config::MAX_SIGNATURES;
use crate::crypto::{hash_transaction, KeyError, Signer};
use crate::xdr::{DecoratedSignature, TransactionEnvelope};

/// An envelope carrying one or more signatures, in signing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    envelope: TransactionEnvelope,
    network_passphrase: String,
}

impl SignedTransaction {
    /// Wraps a built transaction in an envelope with no signatures yet.
    pub(crate) fn from_built(built: BuiltTransaction) -> Self {
        Self {
            envelope: built.to_envelope(),
            network_passphrase: built.network_passphrase().to_string(),
        }
    }

    /// Resumes signing an envelope produced elsewhere, e.g. decoded from
    /// base64 received from a co-signer.
    pub fn from_envelope(envelope: TransactionEnvelope, network_passphrase: impl Into<String>) -> Self {
        Self {
            envelope,
            network_passphrase: network_passphrase.into(),
        }
    }

    pub fn envelope(&self) -> &TransactionEnvelope {
        &self.envelope
    }

    pub fn into_envelope(self) -> TransactionEnvelope {
        self.envelope
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.envelope.signatures
    }

    pub fn network_passphrase(&self) -> &str {
        &self.network_passphrase
    }

    pub fn hash(&self) -> Result<[u8; 32]> {
        Ok(hash_transaction(&self.envelope.tx, &self.network_passphrase)?)
    }

    /// Hashes the envelope's body, signs the hash and appends the signature.
    ///
    /// A body that cannot be hashed fails here as [`TransactionError::Crypto`],
    /// unlike [`hash`](Self::hash) which reports the underlying encoding error.
    pub fn sign<S: Signer + ?Sized>(mut self, signer: &S) -> Result<Self> {
        if self.envelope.signatures.len() >= MAX_SIGNATURES {
            return Err(TransactionError::validation(format!(
                "envelope already carries the maximum of {MAX_SIGNATURES} signatures"
            )));
        }
        let hash = self
            .hash()
            .map_err(|e| KeyError::Hash(e.to_string()))?;
        let signature = signer.sign_decorated(&hash)?;
        debug!(
            hint = %hex::encode(signature.hint),
            signatures = self.envelope.signatures.len() + 1,
            "signed transaction"
        );
        self.envelope.signatures.push(signature);
        Ok(self)
    }

    pub fn to_xdr(&self) -> Result<Vec<u8>> {
        self.envelope.marshal_binary()
    }

    pub fn to_base64(&self) -> Result<String> {
        self.envelope.to_base64()
    }
}
