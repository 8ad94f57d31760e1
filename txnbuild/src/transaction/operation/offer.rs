//! Order-book operations.

use crate::transaction::amount::{parse_amount, parse_price};
use crate::transaction::error::Result;
use crate::transaction::Asset;
use crate::xdr::{CreatePassiveOfferOp, ManageOfferOp, OperationBody};

/// Placeholder buying asset used when deleting an offer. The network only
/// looks at the offer ID and the zero amount.
const DELETE_OFFER_CODE: &str = "FAKE";
const DELETE_OFFER_ISSUER: &str = "GBAQPADEYSKYMYXTMASBUIS5JI3LMOAWSTM2CHGDBJ3QDDPNCSO3DVAA";

/// Creates, updates or deletes an offer.
///
/// `offer_id == 0` creates a new offer. A non-zero ID updates that offer, and
/// an amount of `"0"` on an existing ID deletes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageOffer {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: String,
    /// Price of one unit of `selling` in terms of `buying`, as a decimal.
    pub price: String,
    pub offer_id: u64,
}

impl ManageOffer {
    pub fn create(
        selling: Asset,
        buying: Asset,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self::update(selling, buying, amount, price, 0)
    }

    pub fn update(
        selling: Asset,
        buying: Asset,
        amount: impl Into<String>,
        price: impl Into<String>,
        offer_id: u64,
    ) -> Self {
        Self {
            selling,
            buying,
            amount: amount.into(),
            price: price.into(),
            offer_id,
        }
    }

    pub fn delete(offer_id: u64) -> Self {
        Self::update(
            Asset::native(),
            Asset::credit(DELETE_OFFER_CODE, DELETE_OFFER_ISSUER),
            "0",
            "1",
            offer_id,
        )
    }

    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        Ok(OperationBody::ManageOffer(ManageOfferOp {
            selling: self.selling.to_wire()?,
            buying: self.buying.to_wire()?,
            amount: parse_amount(&self.amount)?,
            price: parse_price(&self.price)?,
            offer_id: self.offer_id,
        }))
    }
}

/// An offer that never takes an existing offer at the same price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePassiveOffer {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: String,
    pub price: String,
}

impl CreatePassiveOffer {
    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        Ok(OperationBody::CreatePassiveOffer(CreatePassiveOfferOp {
            selling: self.selling.to_wire()?,
            buying: self.buying.to_wire()?,
            amount: parse_amount(&self.amount)?,
            price: parse_price(&self.price)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionError;
    use crate::xdr::Price;

    const ISSUER: &str = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";

    #[test]
    fn create_has_zero_offer_id() {
        let op = ManageOffer::create(Asset::native(), Asset::credit("ABCD", ISSUER), "100", "0.01");
        let OperationBody::ManageOffer(body) = op.to_body().unwrap() else {
            panic!("wrong body");
        };
        assert_eq!(body.offer_id, 0);
        assert_eq!(body.amount, 1_000_000_000);
        assert_eq!(body.price, Price { n: 1, d: 100 });
    }

    #[test]
    fn delete_zeroes_amount() {
        let OperationBody::ManageOffer(body) = ManageOffer::delete(2921622).to_body().unwrap()
        else {
            panic!("wrong body");
        };
        assert_eq!(body.offer_id, 2921622);
        assert_eq!(body.amount, 0);
        assert_eq!(body.price, Price { n: 1, d: 1 });
    }

    #[test]
    fn bad_price_is_rejected() {
        let op = CreatePassiveOffer {
            selling: Asset::native(),
            buying: Asset::credit("ABCD", ISSUER),
            amount: "10".to_string(),
            price: "one".to_string(),
        };
        assert!(matches!(op.to_body(), Err(TransactionError::Validation(_))));
    }
}
