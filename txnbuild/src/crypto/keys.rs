//! # Key Management
//!
//! Ed25519 keypairs for ledger accounts, and the [`Signer`] capability the
//! signing pipeline consumes.
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (thanks, ed25519-dalek).
//! - [`Keypair::random`] uses `OsRng`. If your OS RNG is broken, you have
//!   bigger problems than a transaction builder.
//! - Key bytes are never logged, and `Debug` prints the address only.

use ed25519_dalek::{
    Signature as DalekSignature, Signer as _, SigningKey, Verifier as _, VerifyingKey,
};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

use crate::identity::strkey::{self, StrKeyError, VersionByte};
use crate::xdr::DecoratedSignature;

/// Errors that can occur during key operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("invalid secret seed: {0}")]
    InvalidSecret(#[from] StrKeyError),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("hashing failed: {0}")]
    Hash(String),
}

/// Anything that can turn a transaction hash into a decorated signature.
///
/// [`Keypair`] is the in-process implementation. Hardware wallets and
/// remote signers implement this trait to plug into the same pipeline.
pub trait Signer {
    /// Signs a 32-byte transaction hash.
    fn sign_decorated(&self, hash: &[u8; 32]) -> Result<DecoratedSignature, KeyError>;
}

/// An account keypair wrapping an Ed25519 signing key.
///
/// Deliberately not `Serialize`: exporting a secret should be a conscious
/// call to [`Keypair::secret`], not a side effect of dumping a struct to JSON.
///
/// ```
/// use txnbuild::crypto::Keypair;
///
/// let kp = Keypair::random();
/// let sig = kp.sign(b"pay alice 10 XLM");
/// assert!(kp.verify(b"pay alice 10 XLM", &sig));
/// ```
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Constructs a keypair deterministically from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Parses an `S...` secret seed.
    pub fn from_secret(secret: &str) -> Result<Self, KeyError> {
        let seed = strkey::decode(VersionByte::Seed, secret)?;
        Ok(Self::from_seed(&seed))
    }

    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key().to_bytes()
    }

    /// The account address (`G...`).
    pub fn address(&self) -> String {
        strkey::encode(VersionByte::AccountId, &self.public_key_bytes())
    }

    /// The secret seed (`S...`). **Handle with care.**
    pub fn secret(&self) -> String {
        strkey::encode(VersionByte::Seed, &self.signing_key.to_bytes())
    }

    /// Last four bytes of the public key. Lets verifiers match a signature
    /// to a candidate signer without trying every key on the account.
    pub fn hint(&self) -> [u8; 4] {
        let key = self.public_key_bytes();
        [key[28], key[29], key[30], key[31]]
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Sign a message. Ed25519 is deterministic: same key, same message, same bytes.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }

    /// Verify a raw signature against this keypair's public key.
    ///
    /// Anything that isn't exactly 64 bytes simply fails.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let Ok(bytes) = <[u8; 64]>::try_from(signature) else {
            return false;
        };
        self.verifying_key()
            .verify(message, &DalekSignature::from_bytes(&bytes))
            .is_ok()
    }
}

impl Signer for Keypair {
    fn sign_decorated(&self, hash: &[u8; 32]) -> Result<DecoratedSignature, KeyError> {
        let signature = self
            .signing_key
            .try_sign(hash)
            .map_err(|e| KeyError::Signing(e.to_string()))?;
        Ok(DecoratedSignature {
            hint: self.hint(),
            signature: signature.to_bytes().to_vec(),
        })
    }
}

impl Clone for Keypair {
    /// Every copy of a private key is another thing to protect. Clone sparingly.
    fn clone(&self) -> Self {
        Self::from_seed(&self.signing_key.to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({})", self.address())
    }
}

impl PartialEq for Keypair {
    /// Compares public keys only.
    fn eq(&self, other: &Self) -> bool {
        self.public_key_bytes() == other.public_key_bytes()
    }
}

impl Eq for Keypair {}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "SBPQUZ6G4FZNWFHKUWC5BEYWF6R52E3SEP7R3GWYSM2XTKGF5LNTWW4R";
    const ADDRESS: &str = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";

    #[test]
    fn test_secret_derives_known_address() {
        let kp = Keypair::from_secret(SEED).unwrap();
        assert_eq!(kp.address(), ADDRESS);
        assert_eq!(kp.secret(), SEED);
    }

    #[test]
    fn test_address_is_rejected_as_secret() {
        assert!(matches!(
            Keypair::from_secret(ADDRESS),
            Err(KeyError::InvalidSecret(StrKeyError::VersionMismatch { .. }))
        ));
    }

    #[test]
    fn test_hint_is_key_suffix() {
        let kp = Keypair::from_secret(SEED).unwrap();
        assert_eq!(kp.hint(), kp.public_key_bytes()[28..]);
    }

    #[test]
    fn keypair_sign_verify_roundtrip() {
        let kp = Keypair::random();
        let sig = kp.sign(b"bump sequence");
        assert!(kp.verify(b"bump sequence", &sig));
        assert!(!kp.verify(b"bump sequence again", &sig));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let kp1 = Keypair::random();
        let kp2 = Keypair::random();
        let sig = kp1.sign(b"message");
        assert!(!kp2.verify(b"message", &sig));
    }

    #[test]
    fn truncated_signature_fails_verification() {
        let kp = Keypair::random();
        let sig = kp.sign(b"message");
        assert!(!kp.verify(b"message", &sig[..63]));
    }

    #[test]
    fn test_decorated_signature_is_deterministic() {
        let kp = Keypair::from_secret(SEED).unwrap();
        let hash = [9u8; 32];
        let a = kp.sign_decorated(&hash).unwrap();
        let b = kp.sign_decorated(&hash).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hint, kp.hint());
        assert!(kp.verify(&hash, &a.signature));
    }

    #[test]
    fn test_debug_hides_secret() {
        let kp = Keypair::from_secret(SEED).unwrap();
        let debug = format!("{:?}", kp);
        assert!(debug.contains(ADDRESS));
        assert!(!debug.contains(SEED));
    }

    #[test]
    fn test_clone_preserves_identity() {
        let kp = Keypair::random();
        assert_eq!(kp.clone(), kp);
    }
}
