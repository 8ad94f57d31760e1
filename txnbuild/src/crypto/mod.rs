//! # Cryptographic Primitives
//!
//! Every hash and every signature the builder produces flows through here.
//! Both are thin, type-safe wrappers around audited implementations:
//!
//! - **Ed25519** (`ed25519-dalek`) for signatures.
//! - **SHA-256** (`sha2`) for network IDs and transaction hashes.
//!
//! We don't roll our own crypto. If you're tempted to optimize these
//! functions, please reconsider.

pub mod hash;
pub mod keys;

pub use hash::{hash_transaction, network_id, sha256};
pub use keys::{KeyError, Keypair, Signer};
