//! Trust-line operations.

use super::parse_account;
use crate::transaction::amount::{parse_amount, MAX_AMOUNT};
use crate::transaction::error::{Result, TransactionError};
use crate::transaction::Asset;
use crate::xdr::{AllowTrustOp, ChangeTrustOp, OperationBody};

/// Creates, updates or removes a trust line from the source account to an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTrust {
    pub line: Asset,
    /// `None` trusts up to the maximum. `"0"` removes the trust line.
    pub limit: Option<String>,
}

impl ChangeTrust {
    pub fn new(line: Asset, limit: impl Into<String>) -> Self {
        Self {
            line,
            limit: Some(limit.into()),
        }
    }

    pub fn unlimited(line: Asset) -> Self {
        Self { line, limit: None }
    }

    pub fn remove_trustline(line: Asset) -> Self {
        Self::new(line, "0")
    }

    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        if self.line.is_native() {
            return Err(TransactionError::validation(
                "trustline cannot be extended to a native (XLM) asset",
            ));
        }
        let limit = match &self.limit {
            Some(limit) => parse_amount(limit)?,
            None => MAX_AMOUNT,
        };
        Ok(OperationBody::ChangeTrust(ChangeTrustOp {
            line: self.line.to_wire()?,
            limit,
        }))
    }
}

/// Lets the issuer authorize (or deauthorize) another account's trust line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowTrust {
    pub trustor: String,
    /// Only the code is sent; the issuer is the transaction's source.
    pub asset: Asset,
    pub authorize: bool,
}

impl AllowTrust {
    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        let trustor = parse_account(&self.trustor).map_err(|e| {
            TransactionError::validation(format!("failed to set trustor address: {e}"))
        })?;
        Ok(OperationBody::AllowTrust(AllowTrustOp {
            trustor,
            asset: self.asset.to_allow_trust_asset()?,
            authorize: self.authorize,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::AllowTrustAsset;

    const KP0: &str = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";
    const KP1: &str = "GAS4V4O2B7DW5T7IQRPEEVCRXMDZESKISR7DVIGKZQYYV3OSQ5SH5LVP";

    #[test]
    fn native_trustline_rejected() {
        let err = ChangeTrust::new(Asset::native(), "10").to_body().unwrap_err();
        assert!(err.to_string().contains("native (XLM)"));
    }

    #[test]
    fn unlimited_uses_max_amount() {
        let OperationBody::ChangeTrust(body) = ChangeTrust::unlimited(Asset::credit("ABCD", KP1))
            .to_body()
            .unwrap()
        else {
            panic!("wrong body");
        };
        assert_eq!(body.limit, i64::MAX);
    }

    #[test]
    fn remove_trustline_sets_zero_limit() {
        let OperationBody::ChangeTrust(body) =
            ChangeTrust::remove_trustline(Asset::credit("ABCD", KP1))
                .to_body()
                .unwrap()
        else {
            panic!("wrong body");
        };
        assert_eq!(body.limit, 0);
    }

    #[test]
    fn allow_trust_sends_code_only() {
        let op = AllowTrust {
            trustor: KP1.to_string(),
            asset: Asset::credit("ABCD", KP0),
            authorize: true,
        };
        let OperationBody::AllowTrust(body) = op.to_body().unwrap() else {
            panic!("wrong body");
        };
        assert_eq!(body.asset, AllowTrustAsset::CreditAlphanum4(*b"ABCD"));
        assert!(body.authorize);
    }

    #[test]
    fn allow_trust_native_is_validation_error() {
        let op = AllowTrust {
            trustor: KP1.to_string(),
            asset: Asset::native(),
            authorize: true,
        };
        assert!(matches!(op.to_body(), Err(TransactionError::Validation(_))));
    }

    #[test]
    fn allow_trust_bad_trustor_is_validation_error() {
        let op = AllowTrust {
            trustor: "GNOPE".to_string(),
            asset: Asset::credit("ABCD", KP0),
            authorize: false,
        };
        let err = op.to_body().unwrap_err();
        assert!(matches!(err, TransactionError::Validation(_)));
        assert!(err.to_string().contains("trustor"));
    }
}
