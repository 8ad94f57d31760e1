//! Assets: the native lumen or a credit issued by an account.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{Result, TransactionError};
use crate::xdr::{self, AccountId, AllowTrustAsset};

/// An asset as callers describe it: a code and the issuer's address.
///
/// Codes of 1 to 4 characters encode as alphanum4, 5 to 12 as alphanum12.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Asset {
    Native,
    Credit { code: String, issuer: String },
}

impl Asset {
    pub fn native() -> Self {
        Self::Native
    }

    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self::Credit {
            code: code.into(),
            issuer: issuer.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    pub fn to_wire(&self) -> Result<xdr::Asset> {
        match self {
            Self::Native => Ok(xdr::Asset::Native),
            Self::Credit { code, issuer } => {
                let issuer = AccountId::from_address(issuer)?;
                match validate_code(code)? {
                    CodeWidth::Four => Ok(xdr::Asset::CreditAlphanum4 {
                        code: pad_code(code),
                        issuer,
                    }),
                    CodeWidth::Twelve => Ok(xdr::Asset::CreditAlphanum12 {
                        code: pad_code(code),
                        issuer,
                    }),
                }
            }
        }
    }

    /// The issuer-less form used by allow-trust. Native has no such form.
    pub fn to_allow_trust_asset(&self) -> Result<AllowTrustAsset> {
        match self {
            Self::Native => Err(TransactionError::validation(
                "trustline doesn't exist for a native (XLM) asset",
            )),
            Self::Credit { code, .. } => match validate_code(code)? {
                CodeWidth::Four => Ok(AllowTrustAsset::CreditAlphanum4(pad_code(code))),
                CodeWidth::Twelve => Ok(AllowTrustAsset::CreditAlphanum12(pad_code(code))),
            },
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Credit { code, issuer } => write!(f, "{code}:{issuer}"),
        }
    }
}

impl From<&xdr::Asset> for Asset {
    fn from(asset: &xdr::Asset) -> Self {
        match asset {
            xdr::Asset::Native => Self::Native,
            xdr::Asset::CreditAlphanum4 { code, issuer } => Self::credit(
                unpad_code(code),
                issuer.to_address(),
            ),
            xdr::Asset::CreditAlphanum12 { code, issuer } => Self::credit(
                unpad_code(code),
                issuer.to_address(),
            ),
        }
    }
}

enum CodeWidth {
    Four,
    Twelve,
}

fn validate_code(code: &str) -> Result<CodeWidth> {
    if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(TransactionError::validation(format!(
            "asset code {code:?} must be ASCII alphanumeric"
        )));
    }
    match code.len() {
        1..=4 => Ok(CodeWidth::Four),
        5..=12 => Ok(CodeWidth::Twelve),
        len => Err(TransactionError::validation(format!(
            "asset code must be 1 to 12 characters, got {len}"
        ))),
    }
}

/// Right-pads the code with zero bytes. Callers validate the length first.
fn pad_code<const N: usize>(code: &str) -> [u8; N] {
    let mut out = [0u8; N];
    out[..code.len()].copy_from_slice(code.as_bytes());
    out
}

fn unpad_code(code: &[u8]) -> String {
    code.iter()
        .take_while(|b| **b != 0)
        .map(|b| char::from(*b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUER: &str = "GAS4V4O2B7DW5T7IQRPEEVCRXMDZESKISR7DVIGKZQYYV3OSQ5SH5LVP";

    #[test]
    fn short_code_is_alphanum4() {
        let wire = Asset::credit("ABCD", ISSUER).to_wire().unwrap();
        assert!(matches!(wire, xdr::Asset::CreditAlphanum4 { code, .. } if &code == b"ABCD"));
    }

    #[test]
    fn code_is_zero_padded() {
        let wire = Asset::credit("USD", ISSUER).to_wire().unwrap();
        assert!(matches!(wire, xdr::Asset::CreditAlphanum4 { code, .. } if code == *b"USD\0"));
    }

    #[test]
    fn long_code_is_alphanum12() {
        let wire = Asset::credit("LONGCODE", ISSUER).to_wire().unwrap();
        assert!(matches!(wire, xdr::Asset::CreditAlphanum12 { .. }));
        assert_eq!(Asset::from(&wire), Asset::credit("LONGCODE", ISSUER));
    }

    #[test]
    fn bad_codes_rejected() {
        for code in ["", "THIRTEENCHARS", "AB-C"] {
            let err = Asset::credit(code, ISSUER).to_wire().unwrap_err();
            assert!(matches!(err, TransactionError::Validation(_)), "{code}");
        }
    }

    #[test]
    fn bad_issuer_is_an_encoding_error() {
        let err = Asset::credit("ABCD", "GNOTANADDRESS").to_wire().unwrap_err();
        assert!(matches!(err, TransactionError::Encoding(_)));
    }

    #[test]
    fn native_has_no_allow_trust_form() {
        assert!(matches!(
            Asset::native().to_allow_trust_asset(),
            Err(TransactionError::Validation(_))
        ));
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&Asset::native()).unwrap();
        assert_eq!(json, r#"{"type":"native"}"#);
        let asset: Asset =
            serde_json::from_str(&format!(r#"{{"type":"credit","code":"ABCD","issuer":"{ISSUER}"}}"#))
                .unwrap();
        assert_eq!(asset.to_string(), format!("ABCD:{ISSUER}"));
    }
}
