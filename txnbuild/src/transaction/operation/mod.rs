//! # Operations
//!
//! A transaction is an ordered list of operations. Each variant carries the
//! fields a caller thinks in (addresses as `G...` strings, decimal amounts,
//! [`Asset`](super::Asset)s) and knows how to validate itself and produce its
//! wire body.
//!
//! [`Operation`] is a closed enum, so adding a variant forces every match in
//! the crate to handle it.
//!
//! ```text
//! payment.rs  - CreateAccount, Payment, PathPayment
//! offer.rs    - ManageOffer, CreatePassiveOffer
//! trust.rs    - ChangeTrust, AllowTrust
//! options.rs  - SetOptions, AccountFlag, AccountSigner
//! account.rs  - AccountMerge, ManageData, BumpSequence
//! ```

pub mod account;
pub mod offer;
pub mod options;
pub mod payment;
pub mod trust;

pub use account::{AccountMerge, BumpSequence, ManageData};
pub use offer::{CreatePassiveOffer, ManageOffer};
pub use options::{AccountFlag, AccountSigner, SetOptions};
pub use payment::{CreateAccount, PathPayment, Payment};
pub use trust::{AllowTrust, ChangeTrust};

use std::fmt;

use super::error::Result;
use crate::xdr::{self, AccountId, OperationBody};

/// Names an operation variant in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    CreateAccount,
    Payment,
    PathPayment,
    ManageOffer,
    CreatePassiveOffer,
    SetOptions,
    ChangeTrust,
    AllowTrust,
    AccountMerge,
    Inflation,
    ManageData,
    BumpSequence,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One step of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateAccount(CreateAccount),
    Payment(Payment),
    PathPayment(PathPayment),
    ManageOffer(ManageOffer),
    CreatePassiveOffer(CreatePassiveOffer),
    SetOptions(SetOptions),
    ChangeTrust(ChangeTrust),
    AllowTrust(AllowTrust),
    AccountMerge(AccountMerge),
    /// Runs the weekly inflation payout. Carries no fields.
    Inflation,
    ManageData(ManageData),
    BumpSequence(BumpSequence),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::CreateAccount(_) => OperationKind::CreateAccount,
            Self::Payment(_) => OperationKind::Payment,
            Self::PathPayment(_) => OperationKind::PathPayment,
            Self::ManageOffer(_) => OperationKind::ManageOffer,
            Self::CreatePassiveOffer(_) => OperationKind::CreatePassiveOffer,
            Self::SetOptions(_) => OperationKind::SetOptions,
            Self::ChangeTrust(_) => OperationKind::ChangeTrust,
            Self::AllowTrust(_) => OperationKind::AllowTrust,
            Self::AccountMerge(_) => OperationKind::AccountMerge,
            Self::Inflation => OperationKind::Inflation,
            Self::ManageData(_) => OperationKind::ManageData,
            Self::BumpSequence(_) => OperationKind::BumpSequence,
        }
    }

    /// Validates the operation and converts it to its wire form.
    ///
    /// The operation inherits the transaction's source account.
    pub fn to_wire(&self) -> Result<xdr::Operation> {
        let body = match self {
            Self::CreateAccount(op) => op.to_body()?,
            Self::Payment(op) => op.to_body()?,
            Self::PathPayment(op) => op.to_body()?,
            Self::ManageOffer(op) => op.to_body()?,
            Self::CreatePassiveOffer(op) => op.to_body()?,
            Self::SetOptions(op) => op.to_body()?,
            Self::ChangeTrust(op) => op.to_body()?,
            Self::AllowTrust(op) => op.to_body()?,
            Self::AccountMerge(op) => op.to_body()?,
            Self::Inflation => OperationBody::Inflation,
            Self::ManageData(op) => op.to_body()?,
            Self::BumpSequence(op) => op.to_body()?,
        };
        Ok(xdr::Operation {
            source_account: None,
            body,
        })
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Operation {
                fn from(op: $variant) -> Self {
                    Self::$variant(op)
                }
            }
        )*
    };
}

impl_from_variant!(
    CreateAccount,
    Payment,
    PathPayment,
    ManageOffer,
    CreatePassiveOffer,
    SetOptions,
    ChangeTrust,
    AllowTrust,
    AccountMerge,
    ManageData,
    BumpSequence,
);

/// Parses a `G...` address; malformed addresses are encoding errors.
pub(crate) fn parse_account(address: &str) -> Result<AccountId> {
    Ok(AccountId::from_address(address)?)
}
