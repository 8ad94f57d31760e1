//! Wire structures of the ledger's transaction format.
//!
//! These mirror the network's XDR definitions one-to-one. They carry no
//! business rules: validation happens when the user-facing types in
//! [`crate::transaction`] are converted into these.

use super::{ReadXdr, WriteXdr, XdrError, XdrReader, XdrWriter};
use crate::identity::strkey::{self, StrKeyError, VersionByte};

/// Maximum bytes in a text memo.
pub const MAX_MEMO_TEXT: usize = 28;
/// Maximum bytes in an account's home domain.
pub const MAX_HOME_DOMAIN: usize = 32;
/// Maximum bytes in a data entry name or value.
pub const MAX_DATA_LENGTH: usize = 64;
/// Maximum intermediate hops in a path payment.
pub const MAX_PATH_LENGTH: usize = 5;
/// Maximum operations in one transaction.
pub const MAX_OPERATIONS: usize = 100;
/// Maximum signatures attached to one envelope.
pub const MAX_SIGNATURES: usize = 20;
/// Maximum raw signature length.
pub const MAX_SIGNATURE_LENGTH: usize = 64;

/// Discriminant mixed into the transaction hash for plain transaction envelopes.
pub const ENVELOPE_TYPE_TX: i32 = 2;

fn invalid(type_name: &'static str, value: i32) -> XdrError {
    XdrError::InvalidDiscriminant { type_name, value }
}

// ---------------------------------------------------------------------------
// Keys and accounts
// ---------------------------------------------------------------------------

/// A public key. Ed25519 is the only key type the network defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519([u8; 32]),
}

/// Accounts are identified by their master public key.
pub type AccountId = PublicKey;

impl PublicKey {
    /// Parses a `G...` address.
    pub fn from_address(address: &str) -> Result<Self, StrKeyError> {
        strkey::decode(VersionByte::AccountId, address).map(Self::Ed25519)
    }

    pub fn to_address(&self) -> String {
        match self {
            Self::Ed25519(key) => strkey::encode(VersionByte::AccountId, key),
        }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        match self {
            Self::Ed25519(key) => key,
        }
    }
}

impl WriteXdr for PublicKey {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        match self {
            Self::Ed25519(key) => {
                w.write_i32(0);
                w.write_fixed_opaque(key);
            }
        }
        Ok(())
    }
}

impl ReadXdr for PublicKey {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        match r.read_i32()? {
            0 => Ok(Self::Ed25519(r.read_fixed_opaque()?)),
            other => Err(invalid("PublicKey", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Assets and prices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    Native,
    CreditAlphanum4 { code: [u8; 4], issuer: AccountId },
    CreditAlphanum12 { code: [u8; 12], issuer: AccountId },
}

impl WriteXdr for Asset {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        match self {
            Self::Native => w.write_i32(0),
            Self::CreditAlphanum4 { code, issuer } => {
                w.write_i32(1);
                w.write_fixed_opaque(code);
                issuer.write_xdr(w)?;
            }
            Self::CreditAlphanum12 { code, issuer } => {
                w.write_i32(2);
                w.write_fixed_opaque(code);
                issuer.write_xdr(w)?;
            }
        }
        Ok(())
    }
}

impl ReadXdr for Asset {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        match r.read_i32()? {
            0 => Ok(Self::Native),
            1 => Ok(Self::CreditAlphanum4 {
                code: r.read_fixed_opaque()?,
                issuer: AccountId::read_xdr(r)?,
            }),
            2 => Ok(Self::CreditAlphanum12 {
                code: r.read_fixed_opaque()?,
                issuer: AccountId::read_xdr(r)?,
            }),
            other => Err(invalid("Asset", other)),
        }
    }
}

/// A price expressed as the fraction `n / d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl WriteXdr for Price {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_i32(self.n);
        w.write_i32(self.d);
        Ok(())
    }
}

impl ReadXdr for Price {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(Self {
            n: r.read_i32()?,
            d: r.read_i32()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Time bounds and memo
// ---------------------------------------------------------------------------

/// Validity window in unix seconds. `max_time == 0` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

impl WriteXdr for TimeBounds {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_u64(self.min_time);
        w.write_u64(self.max_time);
        Ok(())
    }
}

impl ReadXdr for TimeBounds {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(Self {
            min_time: r.read_u64()?,
            max_time: r.read_u64()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Memo {
    #[default]
    None,
    Text(String),
    Id(u64),
    Hash([u8; 32]),
    Return([u8; 32]),
}

impl WriteXdr for Memo {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        match self {
            Self::None => w.write_i32(0),
            Self::Text(text) => {
                w.write_i32(1);
                w.write_string(text, MAX_MEMO_TEXT)?;
            }
            Self::Id(id) => {
                w.write_i32(2);
                w.write_u64(*id);
            }
            Self::Hash(hash) => {
                w.write_i32(3);
                w.write_fixed_opaque(hash);
            }
            Self::Return(hash) => {
                w.write_i32(4);
                w.write_fixed_opaque(hash);
            }
        }
        Ok(())
    }
}

impl ReadXdr for Memo {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        match r.read_i32()? {
            0 => Ok(Self::None),
            1 => Ok(Self::Text(r.read_string(MAX_MEMO_TEXT)?)),
            2 => Ok(Self::Id(r.read_u64()?)),
            3 => Ok(Self::Hash(r.read_fixed_opaque()?)),
            4 => Ok(Self::Return(r.read_fixed_opaque()?)),
            other => Err(invalid("Memo", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Signers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignerKey {
    Ed25519([u8; 32]),
    PreAuthTx([u8; 32]),
    HashX([u8; 32]),
}

impl SignerKey {
    /// Parses a `G...`, `T...` or `X...` StrKey into a signer key.
    pub fn from_address(address: &str) -> Result<Self, StrKeyError> {
        let (version, payload) = strkey::decode_any(address)?;
        match version {
            VersionByte::AccountId => Ok(Self::Ed25519(payload)),
            VersionByte::PreAuthTx => Ok(Self::PreAuthTx(payload)),
            VersionByte::HashX => Ok(Self::HashX(payload)),
            VersionByte::Seed => Err(StrKeyError::VersionMismatch {
                expected: VersionByte::AccountId,
                got: VersionByte::Seed,
            }),
        }
    }
}

impl WriteXdr for SignerKey {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        let (discriminant, key) = match self {
            Self::Ed25519(key) => (0, key),
            Self::PreAuthTx(key) => (1, key),
            Self::HashX(key) => (2, key),
        };
        w.write_i32(discriminant);
        w.write_fixed_opaque(key);
        Ok(())
    }
}

impl ReadXdr for SignerKey {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        match r.read_i32()? {
            0 => Ok(Self::Ed25519(r.read_fixed_opaque()?)),
            1 => Ok(Self::PreAuthTx(r.read_fixed_opaque()?)),
            2 => Ok(Self::HashX(r.read_fixed_opaque()?)),
            other => Err(invalid("SignerKey", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

impl WriteXdr for Signer {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        self.key.write_xdr(w)?;
        w.write_u32(self.weight);
        Ok(())
    }
}

impl ReadXdr for Signer {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(Self {
            key: SignerKey::read_xdr(r)?,
            weight: r.read_u32()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Operation bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    pub starting_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOp {
    pub destination: AccountId,
    pub asset: Asset,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPaymentOp {
    pub send_asset: Asset,
    pub send_max: i64,
    pub destination: AccountId,
    pub dest_asset: Asset,
    pub dest_amount: i64,
    pub path: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub offer_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePassiveOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetOptionsOp {
    pub inflation_dest: Option<AccountId>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub med_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String>,
    pub signer: Option<Signer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTrustOp {
    pub line: Asset,
    pub limit: i64,
}

/// The asset code of an allow-trust operation; the issuer is implied by the source account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowTrustAsset {
    CreditAlphanum4([u8; 4]),
    CreditAlphanum12([u8; 12]),
}

impl WriteXdr for AllowTrustAsset {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        match self {
            Self::CreditAlphanum4(code) => {
                w.write_i32(1);
                w.write_fixed_opaque(code);
            }
            Self::CreditAlphanum12(code) => {
                w.write_i32(2);
                w.write_fixed_opaque(code);
            }
        }
        Ok(())
    }
}

impl ReadXdr for AllowTrustAsset {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        match r.read_i32()? {
            1 => Ok(Self::CreditAlphanum4(r.read_fixed_opaque()?)),
            2 => Ok(Self::CreditAlphanum12(r.read_fixed_opaque()?)),
            other => Err(invalid("AllowTrustAsset", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowTrustOp {
    pub trustor: AccountId,
    pub asset: AllowTrustAsset,
    pub authorize: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageDataOp {
    pub data_name: String,
    pub data_value: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpSequenceOp {
    pub bump_to: i64,
}

/// Operation type codes as assigned by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum OperationType {
    CreateAccount = 0,
    Payment = 1,
    PathPayment = 2,
    ManageOffer = 3,
    CreatePassiveOffer = 4,
    SetOptions = 5,
    ChangeTrust = 6,
    AllowTrust = 7,
    AccountMerge = 8,
    Inflation = 9,
    ManageData = 10,
    BumpSequence = 11,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    PathPayment(PathPaymentOp),
    ManageOffer(ManageOfferOp),
    CreatePassiveOffer(CreatePassiveOfferOp),
    SetOptions(SetOptionsOp),
    ChangeTrust(ChangeTrustOp),
    AllowTrust(AllowTrustOp),
    AccountMerge(AccountId),
    Inflation,
    ManageData(ManageDataOp),
    BumpSequence(BumpSequenceOp),
}

impl OperationBody {
    pub fn operation_type(&self) -> OperationType {
        match self {
            Self::CreateAccount(_) => OperationType::CreateAccount,
            Self::Payment(_) => OperationType::Payment,
            Self::PathPayment(_) => OperationType::PathPayment,
            Self::ManageOffer(_) => OperationType::ManageOffer,
            Self::CreatePassiveOffer(_) => OperationType::CreatePassiveOffer,
            Self::SetOptions(_) => OperationType::SetOptions,
            Self::ChangeTrust(_) => OperationType::ChangeTrust,
            Self::AllowTrust(_) => OperationType::AllowTrust,
            Self::AccountMerge(_) => OperationType::AccountMerge,
            Self::Inflation => OperationType::Inflation,
            Self::ManageData(_) => OperationType::ManageData,
            Self::BumpSequence(_) => OperationType::BumpSequence,
        }
    }
}

impl WriteXdr for OperationBody {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_i32(self.operation_type() as i32);
        match self {
            Self::CreateAccount(op) => {
                op.destination.write_xdr(w)?;
                w.write_i64(op.starting_balance);
            }
            Self::Payment(op) => {
                op.destination.write_xdr(w)?;
                op.asset.write_xdr(w)?;
                w.write_i64(op.amount);
            }
            Self::PathPayment(op) => {
                op.send_asset.write_xdr(w)?;
                w.write_i64(op.send_max);
                op.destination.write_xdr(w)?;
                op.dest_asset.write_xdr(w)?;
                w.write_i64(op.dest_amount);
                w.write_array(&op.path, MAX_PATH_LENGTH)?;
            }
            Self::ManageOffer(op) => {
                op.selling.write_xdr(w)?;
                op.buying.write_xdr(w)?;
                w.write_i64(op.amount);
                op.price.write_xdr(w)?;
                w.write_u64(op.offer_id);
            }
            Self::CreatePassiveOffer(op) => {
                op.selling.write_xdr(w)?;
                op.buying.write_xdr(w)?;
                w.write_i64(op.amount);
                op.price.write_xdr(w)?;
            }
            Self::SetOptions(op) => {
                w.write_option(op.inflation_dest.as_ref())?;
                w.write_option(op.clear_flags.as_ref())?;
                w.write_option(op.set_flags.as_ref())?;
                w.write_option(op.master_weight.as_ref())?;
                w.write_option(op.low_threshold.as_ref())?;
                w.write_option(op.med_threshold.as_ref())?;
                w.write_option(op.high_threshold.as_ref())?;
                match &op.home_domain {
                    Some(domain) => {
                        w.write_bool(true);
                        w.write_string(domain, MAX_HOME_DOMAIN)?;
                    }
                    None => w.write_bool(false),
                }
                w.write_option(op.signer.as_ref())?;
            }
            Self::ChangeTrust(op) => {
                op.line.write_xdr(w)?;
                w.write_i64(op.limit);
            }
            Self::AllowTrust(op) => {
                op.trustor.write_xdr(w)?;
                op.asset.write_xdr(w)?;
                w.write_bool(op.authorize);
            }
            Self::AccountMerge(destination) => destination.write_xdr(w)?,
            Self::Inflation => {}
            Self::ManageData(op) => {
                w.write_string(&op.data_name, MAX_DATA_LENGTH)?;
                match &op.data_value {
                    Some(value) => {
                        w.write_bool(true);
                        w.write_var_opaque(value, MAX_DATA_LENGTH)?;
                    }
                    None => w.write_bool(false),
                }
            }
            Self::BumpSequence(op) => w.write_i64(op.bump_to),
        }
        Ok(())
    }
}

impl ReadXdr for OperationBody {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        let body = match r.read_i32()? {
            0 => Self::CreateAccount(CreateAccountOp {
                destination: AccountId::read_xdr(r)?,
                starting_balance: r.read_i64()?,
            }),
            1 => Self::Payment(PaymentOp {
                destination: AccountId::read_xdr(r)?,
                asset: Asset::read_xdr(r)?,
                amount: r.read_i64()?,
            }),
            2 => Self::PathPayment(PathPaymentOp {
                send_asset: Asset::read_xdr(r)?,
                send_max: r.read_i64()?,
                destination: AccountId::read_xdr(r)?,
                dest_asset: Asset::read_xdr(r)?,
                dest_amount: r.read_i64()?,
                path: r.read_array(MAX_PATH_LENGTH)?,
            }),
            3 => Self::ManageOffer(ManageOfferOp {
                selling: Asset::read_xdr(r)?,
                buying: Asset::read_xdr(r)?,
                amount: r.read_i64()?,
                price: Price::read_xdr(r)?,
                offer_id: r.read_u64()?,
            }),
            4 => Self::CreatePassiveOffer(CreatePassiveOfferOp {
                selling: Asset::read_xdr(r)?,
                buying: Asset::read_xdr(r)?,
                amount: r.read_i64()?,
                price: Price::read_xdr(r)?,
            }),
            5 => Self::SetOptions(SetOptionsOp {
                inflation_dest: r.read_option()?,
                clear_flags: r.read_option()?,
                set_flags: r.read_option()?,
                master_weight: r.read_option()?,
                low_threshold: r.read_option()?,
                med_threshold: r.read_option()?,
                high_threshold: r.read_option()?,
                home_domain: if r.read_bool()? {
                    Some(r.read_string(MAX_HOME_DOMAIN)?)
                } else {
                    None
                },
                signer: r.read_option()?,
            }),
            6 => Self::ChangeTrust(ChangeTrustOp {
                line: Asset::read_xdr(r)?,
                limit: r.read_i64()?,
            }),
            7 => Self::AllowTrust(AllowTrustOp {
                trustor: AccountId::read_xdr(r)?,
                asset: AllowTrustAsset::read_xdr(r)?,
                authorize: r.read_bool()?,
            }),
            8 => Self::AccountMerge(AccountId::read_xdr(r)?),
            9 => Self::Inflation,
            10 => Self::ManageData(ManageDataOp {
                data_name: r.read_string(MAX_DATA_LENGTH)?,
                data_value: if r.read_bool()? {
                    Some(r.read_var_opaque(MAX_DATA_LENGTH)?)
                } else {
                    None
                },
            }),
            11 => Self::BumpSequence(BumpSequenceOp {
                bump_to: r.read_i64()?,
            }),
            other => return Err(invalid("OperationBody", other)),
        };
        Ok(body)
    }
}

/// An operation as it appears inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Overrides the transaction's source account for this operation only.
    pub source_account: Option<AccountId>,
    pub body: OperationBody,
}

impl WriteXdr for Operation {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_option(self.source_account.as_ref())?;
        self.body.write_xdr(w)
    }
}

impl ReadXdr for Operation {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(Self {
            source_account: r.read_option()?,
            body: OperationBody::read_xdr(r)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Transaction and envelope
// ---------------------------------------------------------------------------

/// The signable transaction body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub source_account: AccountId,
    pub fee: u32,
    pub seq_num: i64,
    pub time_bounds: Option<TimeBounds>,
    pub memo: Memo,
    pub operations: Vec<Operation>,
}

impl WriteXdr for Transaction {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        self.source_account.write_xdr(w)?;
        w.write_u32(self.fee);
        w.write_i64(self.seq_num);
        w.write_option(self.time_bounds.as_ref())?;
        self.memo.write_xdr(w)?;
        w.write_array(&self.operations, MAX_OPERATIONS)?;
        // ext: reserved union, only v0 is defined.
        w.write_i32(0);
        Ok(())
    }
}

impl ReadXdr for Transaction {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        let tx = Self {
            source_account: AccountId::read_xdr(r)?,
            fee: r.read_u32()?,
            seq_num: r.read_i64()?,
            time_bounds: r.read_option()?,
            memo: Memo::read_xdr(r)?,
            operations: r.read_array(MAX_OPERATIONS)?,
        };
        match r.read_i32()? {
            0 => Ok(tx),
            other => Err(invalid("Transaction.ext", other)),
        }
    }
}

/// A signature paired with the last four bytes of the signing public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Vec<u8>,
}

impl WriteXdr for DecoratedSignature {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_fixed_opaque(&self.hint);
        w.write_var_opaque(&self.signature, MAX_SIGNATURE_LENGTH)
    }
}

impl ReadXdr for DecoratedSignature {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(Self {
            hint: r.read_fixed_opaque()?,
            signature: r.read_var_opaque(MAX_SIGNATURE_LENGTH)?,
        })
    }
}

/// A transaction together with its signatures, in signing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEnvelope {
    pub tx: Transaction,
    pub signatures: Vec<DecoratedSignature>,
}

impl WriteXdr for TransactionEnvelope {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        self.tx.write_xdr(w)?;
        w.write_array(&self.signatures, MAX_SIGNATURES)
    }
}

impl ReadXdr for TransactionEnvelope {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(Self {
            tx: Transaction::read_xdr(r)?,
            signatures: r.read_array(MAX_SIGNATURES)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";

    fn account() -> AccountId {
        AccountId::from_address(ADDRESS).unwrap()
    }

    #[test]
    fn public_key_address_roundtrip() {
        assert_eq!(account().to_address(), ADDRESS);
    }

    #[test]
    fn public_key_encodes_type_then_key() {
        let bytes = account().to_xdr().unwrap();
        assert_eq!(bytes.len(), 36);
        assert_eq!(hex::encode(&bytes[..8]), "00000000e0dc6de1");
    }

    #[test]
    fn credit_asset_layout() {
        let asset = Asset::CreditAlphanum4 {
            code: *b"ABCD",
            issuer: account(),
        };
        let bytes = asset.to_xdr().unwrap();
        assert_eq!(hex::encode(&bytes[..8]), "0000000141424344");
        assert_eq!(Asset::from_xdr(&bytes).unwrap(), asset);
    }

    #[test]
    fn memo_text_over_limit_fails_to_encode() {
        let memo = Memo::Text("x".repeat(MAX_MEMO_TEXT + 1));
        assert!(matches!(
            memo.to_xdr(),
            Err(XdrError::LengthExceeded { .. })
        ));
    }

    #[test]
    fn unknown_operation_type_rejected() {
        let bytes = 12i32.to_be_bytes();
        assert_eq!(
            OperationBody::from_xdr(&bytes),
            Err(XdrError::InvalidDiscriminant {
                type_name: "OperationBody",
                value: 12,
            })
        );
    }

    #[test]
    fn set_options_roundtrip_with_every_field() {
        let body = OperationBody::SetOptions(SetOptionsOp {
            inflation_dest: Some(account()),
            clear_flags: Some(1),
            set_flags: Some(2),
            master_weight: Some(10),
            low_threshold: Some(1),
            med_threshold: Some(2),
            high_threshold: Some(3),
            home_domain: Some("example.com".to_string()),
            signer: Some(Signer {
                key: SignerKey::HashX([7u8; 32]),
                weight: 4,
            }),
        });
        let bytes = body.to_xdr().unwrap();
        assert_eq!(OperationBody::from_xdr(&bytes).unwrap(), body);
    }

    #[test]
    fn transaction_ext_must_be_zero() {
        let tx = Transaction {
            source_account: account(),
            fee: 100,
            seq_num: 1,
            time_bounds: None,
            memo: Memo::None,
            operations: vec![Operation {
                source_account: None,
                body: OperationBody::Inflation,
            }],
        };
        let mut bytes = tx.to_xdr().unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 1;
        assert!(matches!(
            Transaction::from_xdr(&bytes),
            Err(XdrError::InvalidDiscriminant { value: 1, .. })
        ));
    }

    #[test]
    fn signer_key_rejects_seed() {
        let seed = "SBPQUZ6G4FZNWFHKUWC5BEYWF6R52E3SEP7R3GWYSM2XTKGF5LNTWW4R";
        assert!(SignerKey::from_address(seed).is_err());
        assert_eq!(
            SignerKey::from_address(ADDRESS).unwrap(),
            SignerKey::Ed25519(*account().as_bytes())
        );
    }
}
