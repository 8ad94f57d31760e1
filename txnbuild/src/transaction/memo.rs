//! Transaction memos.

use serde::{Deserialize, Serialize};

use super::error::{Result, TransactionError};
use crate::config::MAX_MEMO_TEXT_LENGTH;
use crate::xdr;

/// Free-form data attached to a transaction, typically so an exchange can
/// route a deposit to the right customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Memo {
    #[default]
    None,
    /// Up to 28 bytes of UTF-8.
    Text(String),
    Id(u64),
    Hash([u8; 32]),
    /// Hash of the transaction this one refunds.
    Return([u8; 32]),
}

impl Memo {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn to_wire(&self) -> Result<xdr::Memo> {
        Ok(match self {
            Self::None => xdr::Memo::None,
            Self::Text(text) => {
                if text.len() > MAX_MEMO_TEXT_LENGTH {
                    return Err(TransactionError::Encoding(format!(
                        "memo text is {} bytes, maximum is {}",
                        text.len(),
                        MAX_MEMO_TEXT_LENGTH
                    )));
                }
                xdr::Memo::Text(text.clone())
            }
            Self::Id(id) => xdr::Memo::Id(*id),
            Self::Hash(hash) => xdr::Memo::Hash(*hash),
            Self::Return(hash) => xdr::Memo::Return(*hash),
        })
    }
}

impl From<xdr::Memo> for Memo {
    fn from(memo: xdr::Memo) -> Self {
        match memo {
            xdr::Memo::None => Self::None,
            xdr::Memo::Text(text) => Self::Text(text),
            xdr::Memo::Id(id) => Self::Id(id),
            xdr::Memo::Hash(hash) => Self::Hash(hash),
            xdr::Memo::Return(hash) => Self::Return(hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_at_limit_is_accepted() {
        let memo = Memo::text("x".repeat(28));
        assert!(memo.to_wire().is_ok());
    }

    #[test]
    fn text_over_limit_is_an_encoding_error() {
        let err = Memo::text("x".repeat(29)).to_wire().unwrap_err();
        assert!(matches!(err, TransactionError::Encoding(_)));
    }

    #[test]
    fn limit_counts_bytes_not_chars() {
        // 10 snowmen are 30 bytes.
        let err = Memo::text("☃".repeat(10)).to_wire().unwrap_err();
        assert!(err.to_string().contains("30 bytes"));
    }

    #[test]
    fn wire_conversion_roundtrip() {
        let memos = [
            Memo::None,
            Memo::text("Twas brillig"),
            Memo::Id(314159),
            Memo::Hash([1u8; 32]),
            Memo::Return([2u8; 32]),
        ];
        for memo in memos {
            assert_eq!(Memo::from(memo.to_wire().unwrap()), memo);
        }
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&Memo::Id(7)).unwrap();
        assert_eq!(json, r#"{"type":"id","value":7}"#);
        assert_eq!(serde_json::from_str::<Memo>(&json).unwrap(), Memo::Id(7));
    }
}
