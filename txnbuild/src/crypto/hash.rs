//! # Hashing Utilities
//!
//! SHA-256 is the only hash the ledger uses. Two constructions matter:
//!
//! - **Network ID**: `SHA-256(passphrase)`. Mixed into every transaction
//!   hash so a signature made for one network is worthless on another.
//! - **Transaction hash**: the value that actually gets signed:
//!
//! ```text
//! SHA-256( network_id || ENVELOPE_TYPE_TX (u32, BE) || XDR(transaction) )
//! ```

use sha2::{Digest, Sha256};

use crate::xdr::{Transaction, WriteXdr, XdrError, ENVELOPE_TYPE_TX};

/// Compute the SHA-256 hash of the input data.
///
/// ```
/// use txnbuild::crypto::sha256;
///
/// let hash = sha256(b"ledger");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Derive the network ID from its passphrase.
pub fn network_id(passphrase: &str) -> [u8; 32] {
    sha256(passphrase.as_bytes())
}

/// Compute the signature payload hash of `tx` on the network named by `passphrase`.
///
/// Fails only if the transaction cannot be encoded (e.g. an oversized memo).
pub fn hash_transaction(tx: &Transaction, passphrase: &str) -> Result<[u8; 32], XdrError> {
    let body = tx.to_xdr()?;
    let mut hasher = Sha256::new();
    hasher.update(network_id(passphrase));
    hasher.update((ENVELOPE_TYPE_TX as u32).to_be_bytes());
    hasher.update(&body);
    Ok(hasher.finalize().into())
}
