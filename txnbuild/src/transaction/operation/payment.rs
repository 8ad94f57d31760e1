//! Operations that move value between accounts.

use super::parse_account;
use crate::transaction::amount::parse_amount;
use crate::transaction::error::{Result, TransactionError};
use crate::transaction::Asset;
use crate::xdr::{CreateAccountOp, OperationBody, PathPaymentOp, PaymentOp, MAX_PATH_LENGTH};

/// Funds a new account with a starting balance of lumens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccount {
    pub destination: String,
    pub amount: String,
}

impl CreateAccount {
    pub fn new(destination: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            amount: amount.into(),
        }
    }

    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        Ok(OperationBody::CreateAccount(CreateAccountOp {
            destination: parse_account(&self.destination)?,
            starting_balance: parse_amount(&self.amount)?,
        }))
    }
}

/// Sends an amount of an asset to an existing account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub destination: String,
    pub amount: String,
    /// Required. `None` exists so an incompletely filled-in payment fails
    /// loudly at build time instead of defaulting to lumens.
    pub asset: Option<Asset>,
}

impl Payment {
    pub fn new(destination: impl Into<String>, amount: impl Into<String>, asset: Asset) -> Self {
        Self {
            destination: destination.into(),
            amount: amount.into(),
            asset: Some(asset),
        }
    }

    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        let destination = parse_account(&self.destination)?;
        let amount = parse_amount(&self.amount)?;
        let asset = self
            .asset
            .as_ref()
            .ok_or_else(|| TransactionError::validation("you must specify an asset for payment"))?
            .to_wire()?;
        Ok(OperationBody::Payment(PaymentOp {
            destination,
            asset,
            amount,
        }))
    }
}

/// Sends one asset and delivers another, converting through the order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPayment {
    pub send_asset: Asset,
    /// The most of `send_asset` the sender is willing to spend.
    pub send_max: String,
    pub destination: String,
    pub dest_asset: Asset,
    /// The exact amount of `dest_asset` the destination receives.
    pub dest_amount: String,
    /// Intermediate assets to convert through, at most five.
    pub path: Vec<Asset>,
}

impl PathPayment {
    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        if self.path.len() > MAX_PATH_LENGTH {
            return Err(TransactionError::validation(format!(
                "payment path has {} assets, maximum is {MAX_PATH_LENGTH}",
                self.path.len()
            )));
        }
        let path = self
            .path
            .iter()
            .map(Asset::to_wire)
            .collect::<Result<Vec<_>>>()?;
        Ok(OperationBody::PathPayment(PathPaymentOp {
            send_asset: self.send_asset.to_wire()?,
            send_max: parse_amount(&self.send_max)?,
            destination: parse_account(&self.destination)?,
            dest_asset: self.dest_asset.to_wire()?,
            dest_amount: parse_amount(&self.dest_amount)?,
            path,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEST: &str = "GB7BDSZU2Y27LYNLALKKALB52WS2IZWYBDGY6EQBLEED3TJOCVMZRH7H";

    #[test]
    fn create_account_converts_amount_to_stroops() {
        let body = CreateAccount::new(DEST, "10").to_body().unwrap();
        assert!(matches!(
            body,
            OperationBody::CreateAccount(CreateAccountOp { starting_balance: 100_000_000, .. })
        ));
    }

    #[test]
    fn payment_without_asset_fails() {
        let payment = Payment {
            destination: DEST.to_string(),
            amount: "10".to_string(),
            asset: None,
        };
        let err = payment.to_body().unwrap_err();
        assert!(matches!(err, TransactionError::Validation(_)));
        assert!(err.to_string().contains("specify an asset"));
    }

    #[test]
    fn payment_to_bad_address_is_encoding_error() {
        let err = Payment::new("GBROKEN", "10", Asset::native())
            .to_body()
            .unwrap_err();
        assert!(matches!(err, TransactionError::Encoding(_)));
    }

    #[test]
    fn path_payment_path_is_bounded() {
        let op = PathPayment {
            send_asset: Asset::native(),
            send_max: "10".to_string(),
            destination: DEST.to_string(),
            dest_asset: Asset::native(),
            dest_amount: "1".to_string(),
            path: vec![Asset::native(); 6],
        };
        assert!(matches!(op.to_body(), Err(TransactionError::Validation(_))));
    }
}
