//! # Transaction Module
//!
//! Construction, signing and encoding of ledger transactions.
//!
//! ## Architecture
//!
//! ```text
//! timebounds.rs - Explicit time-validity windows
//! memo.rs       - Memo variants and their size limits
//! asset.rs      - Native and credit assets
//! amount.rs     - Decimal amount and price parsing
//! operation/    - The closed set of operations and their wire conversion
//! fee.rs        - Default fee policy
//! builder.rs    - TransactionBuilder -> BuiltTransaction
//! signing.rs    - BuiltTransaction -> SignedTransaction
//! envelope.rs   - XDR and base64 encoding of envelopes
//! error.rs      - TransactionError
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: [`TransactionBuilder::build`] claims a sequence number from
//!    the source [`Account`](crate::identity::Account), converts every
//!    operation and returns an immutable [`BuiltTransaction`].
//! 2. **Sign**: [`BuiltTransaction::sign`] and [`SignedTransaction::sign`]
//!    each consume their input and return a [`SignedTransaction`] with one
//!    more signature.
//! 3. **Encode**: [`SignedTransaction::to_base64`] produces the envelope
//!    that gets submitted to the network.
//!
//! ## Design Decisions
//!
//! - Every state transition consumes the previous state. There is no way to
//!   mutate a body after it has been hashed, so a signature always covers
//!   exactly the bytes that get serialized.
//! - Time validity is a required choice. Either attach a [`Timebounds`] or
//!   say [`without_timebounds`](TransactionBuilder::without_timebounds)
//!   explicitly.
//! - Amounts are decimal strings. No floating point anywhere near money.

pub mod amount;
pub mod asset;
pub mod builder;
pub mod envelope;
pub mod error;
pub mod fee;
pub mod memo;
pub mod operation;
pub mod signing;
pub mod timebounds;

pub use asset::Asset;
pub use builder::{BuiltTransaction, TransactionBuilder};
pub use error::{Result, Stage, TransactionError};
pub use fee::FeePolicy;
pub use memo::Memo;
pub use operation::{
    AccountFlag, AccountMerge, AccountSigner, AllowTrust, BumpSequence, ChangeTrust,
    CreateAccount, CreatePassiveOffer, ManageData, ManageOffer, Operation, OperationKind,
    PathPayment, Payment, SetOptions,
};
pub use signing::SignedTransaction;
pub use timebounds::Timebounds;
