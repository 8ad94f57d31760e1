//! Operations on the source account itself.

use super::parse_account;
use crate::transaction::error::{Result, TransactionError};
use crate::xdr::{BumpSequenceOp, ManageDataOp, OperationBody, MAX_DATA_LENGTH};

/// Closes the source account and sends its lumens to `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMerge {
    pub destination: String,
}

impl AccountMerge {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        Ok(OperationBody::AccountMerge(parse_account(&self.destination)?))
    }
}

/// Sets, updates or deletes a named data entry on the source account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageData {
    pub name: String,
    /// `None` deletes the entry.
    pub value: Option<Vec<u8>>,
}

impl ManageData {
    pub fn set(name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn remove(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        if self.name.is_empty() || self.name.len() > MAX_DATA_LENGTH {
            return Err(TransactionError::validation(format!(
                "data name must be 1 to {MAX_DATA_LENGTH} bytes, got {}",
                self.name.len()
            )));
        }
        if let Some(value) = &self.value {
            if value.len() > MAX_DATA_LENGTH {
                return Err(TransactionError::validation(format!(
                    "data value must be at most {MAX_DATA_LENGTH} bytes, got {}",
                    value.len()
                )));
            }
        }
        Ok(OperationBody::ManageData(ManageDataOp {
            data_name: self.name.clone(),
            data_value: self.value.clone(),
        }))
    }
}

/// Jumps the source account's sequence number forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpSequence {
    pub bump_to: i64,
}

impl BumpSequence {
    pub fn new(bump_to: i64) -> Self {
        Self { bump_to }
    }

    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        if self.bump_to < 0 {
            return Err(TransactionError::validation(
                "bump_to must not be negative",
            ));
        }
        Ok(OperationBody::BumpSequence(BumpSequenceOp {
            bump_to: self.bump_to,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manage_data_set_and_remove() {
        let OperationBody::ManageData(set) = ManageData::set("Fruit preference", "Apple")
            .to_body()
            .unwrap()
        else {
            panic!("wrong body");
        };
        assert_eq!(set.data_value.as_deref(), Some(&b"Apple"[..]));

        let OperationBody::ManageData(removed) = ManageData::remove("Fruit preference")
            .to_body()
            .unwrap()
        else {
            panic!("wrong body");
        };
        assert_eq!(removed.data_value, None);
    }

    #[test]
    fn manage_data_limits() {
        assert!(ManageData::remove("").to_body().is_err());
        assert!(ManageData::remove("n".repeat(65)).to_body().is_err());
        assert!(ManageData::set("name", vec![0u8; 65]).to_body().is_err());
        assert!(ManageData::set("n".repeat(64), vec![0u8; 64]).to_body().is_ok());
    }

    #[test]
    fn negative_bump_rejected() {
        assert!(matches!(
            BumpSequence::new(-1).to_body(),
            Err(TransactionError::Validation(_))
        ));
    }

    #[test]
    fn merge_needs_valid_destination() {
        assert!(matches!(
            AccountMerge::new("G").to_body(),
            Err(TransactionError::Encoding(_))
        ));
    }
}
