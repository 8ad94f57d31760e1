// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Ledger Transaction Builder
//!
//! Assembles ledger transactions from a source account and an ordered list
//! of operations, signs them, and encodes the result as the base64 XDR
//! envelope the network accepts.
//!
//! ## Architecture
//!
//! - **xdr**: The wire format. Big-endian, 4-byte aligned, strict on decode.
//! - **identity**: StrKey addresses and the source-account capability.
//! - **crypto**: Ed25519 keypairs, the `Signer` capability, and
//!   network-separated transaction hashing.
//! - **transaction**: Operations, the builder, signing and encoding.
//! - **config**: Network constants and the per-build configuration.
//!
//! ## Example
//!
//! ```
//! use txnbuild::crypto::Keypair;
//! use txnbuild::identity::SimpleAccount;
//! use txnbuild::transaction::{Operation, Timebounds, TransactionBuilder};
//!
//! let keypair = Keypair::random();
//! let mut source = SimpleAccount::new(keypair.address(), 42);
//!
//! let envelope = TransactionBuilder::new(&mut source)
//!     .operation(Operation::Inflation)
//!     .timebounds(Timebounds::with_timeout(0, 300))
//!     .build_sign_encode(&[&keypair])
//!     .unwrap();
//!
//! assert!(!envelope.is_empty());
//! ```
//!
//! ## Design Philosophy
//!
//! 1. Nothing defaults to "valid forever". Time validity is always a choice.
//! 2. A signature covers exactly the bytes that get submitted.
//! 3. If it touches money, it has tests. Plural.

pub mod config;
pub mod crypto;
pub mod identity;
pub mod transaction;
pub mod xdr;
