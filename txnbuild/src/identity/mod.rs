//! # Identity Module
//!
//! Everything that names an account or a key on the ledger:
//!
//! 1. **StrKey**: the checksummed base32 text form of keys (`G...`, `S...`,
//!    `T...`, `X...`). This is what users see and paste into
//!    payment fields.
//! 2. **Account**: the capability the transaction builder consumes to learn
//!    the source address and claim the next sequence number.

pub mod account;
pub mod strkey;

pub use account::{Account, AccountError, SequenceNumber, SimpleAccount};
pub use strkey::{StrKeyError, VersionByte};
