//! Account configuration: flags, thresholds, home domain and signers.

use serde::{Deserialize, Serialize};

use super::parse_account;
use crate::transaction::error::{Result, TransactionError};
use crate::xdr::{self, OperationBody, SetOptionsOp, SignerKey, MAX_HOME_DOMAIN};

/// Account authorization flags. Only meaningful on issuing accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountFlag {
    /// Holders need the issuer's approval before they can hold the asset.
    AuthRequired,
    /// The issuer can freeze a holder's balance.
    AuthRevocable,
    /// Neither flag can ever be changed again, and the account can't be merged.
    AuthImmutable,
}

impl AccountFlag {
    pub fn bits(self) -> u32 {
        match self {
            Self::AuthRequired => 1,
            Self::AuthRevocable => 2,
            Self::AuthImmutable => 4,
        }
    }
}

/// OR's a flag list together. An empty list means "leave unchanged".
fn flag_mask(flags: &[AccountFlag]) -> Option<u32> {
    if flags.is_empty() {
        return None;
    }
    Some(flags.iter().fold(0, |mask, flag| mask | flag.bits()))
}

/// A signer to add, reweight or remove (weight 0) on the source account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSigner {
    /// A `G...` key, `T...` pre-authorized transaction hash or `X...` hash-x.
    pub address: String,
    pub weight: u8,
}

impl AccountSigner {
    pub fn new(address: impl Into<String>, weight: u8) -> Self {
        Self {
            address: address.into(),
            weight,
        }
    }
}

/// Changes account settings. Every field left as `None` (or empty) is
/// omitted from the wire and keeps its current value on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetOptions {
    pub inflation_destination: Option<String>,
    pub set_flags: Vec<AccountFlag>,
    pub clear_flags: Vec<AccountFlag>,
    pub master_weight: Option<u8>,
    pub low_threshold: Option<u8>,
    pub medium_threshold: Option<u8>,
    pub high_threshold: Option<u8>,
    pub home_domain: Option<String>,
    pub signer: Option<AccountSigner>,
}

impl SetOptions {
    pub(crate) fn to_body(&self) -> Result<OperationBody> {
        let inflation_dest = self
            .inflation_destination
            .as_deref()
            .map(parse_account)
            .transpose()?;

        if let Some(domain) = &self.home_domain {
            if domain.len() > MAX_HOME_DOMAIN {
                return Err(TransactionError::validation(format!(
                    "home domain must be {MAX_HOME_DOMAIN} characters or less"
                )));
            }
        }

        let signer = match &self.signer {
            Some(signer) => Some(xdr::Signer {
                key: SignerKey::from_address(&signer.address)?,
                weight: u32::from(signer.weight),
            }),
            None => None,
        };

        Ok(OperationBody::SetOptions(SetOptionsOp {
            inflation_dest,
            clear_flags: flag_mask(&self.clear_flags),
            set_flags: flag_mask(&self.set_flags),
            master_weight: self.master_weight.map(u32::from),
            low_threshold: self.low_threshold.map(u32::from),
            med_threshold: self.medium_threshold.map(u32::from),
            high_threshold: self.high_threshold.map(u32::from),
            home_domain: self.home_domain.clone(),
            signer,
        }))
    }
}
