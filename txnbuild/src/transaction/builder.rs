//! Transaction construction via the builder pattern.
//!
//! [`TransactionBuilder`] collects operations, memo, fee and time validity,
//! then [`build`](TransactionBuilder::build) runs the pipeline once and hands
//! back an immutable [`BuiltTransaction`]. The builder is consumed either
//! way: a failed build cannot be retried, and a successful one cannot be
//! edited after the fact.
//!
//! The builder does not sign. That happens in [`super::signing`], which keeps
//! construction testable without key material.

use tracing::{debug, trace};

use super::error::{Result, Stage, TransactionError};
use super::fee::FeePolicy;
use super::memo::Memo;
use super::operation::Operation;
use super::signing::SignedTransaction;
use super::timebounds::Timebounds;
use crate::config::{BuildConfig, MAX_OPERATIONS};
use crate::crypto::{hash_transaction, Signer};
use crate::identity::Account;
use crate::xdr::{self, AccountId, TransactionEnvelope};

// ---------------------------------------------------------------------------
// BuiltTransaction
// ---------------------------------------------------------------------------

/// A fully assembled, not yet signed transaction.
///
/// Holds the wire body and the passphrase of the network it will be signed
/// for. Nothing about it can change; signing produces a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTransaction {
    tx: xdr::Transaction,
    network_passphrase: String,
}

impl BuiltTransaction {
    pub(crate) fn new(tx: xdr::Transaction, network_passphrase: String) -> Self {
        Self {
            tx,
            network_passphrase,
        }
    }

    /// The wire body, exactly as it will be hashed and signed.
    pub fn transaction(&self) -> &xdr::Transaction {
        &self.tx
    }

    pub fn network_passphrase(&self) -> &str {
        &self.network_passphrase
    }

    pub fn fee(&self) -> u32 {
        self.tx.fee
    }

    pub fn sequence_number(&self) -> i64 {
        self.tx.seq_num
    }

    /// The network-specific hash that signers sign.
    pub fn hash(&self) -> Result<[u8; 32]> {
        Ok(hash_transaction(&self.tx, &self.network_passphrase)?)
    }

    pub fn hash_hex(&self) -> Result<String> {
        self.hash().map(hex::encode)
    }

    /// An envelope with no signatures yet, for handing to an external signer.
    pub fn to_envelope(&self) -> TransactionEnvelope {
        TransactionEnvelope {
            tx: self.tx.clone(),
            signatures: Vec::new(),
        }
    }

    pub fn to_xdr(&self) -> Result<Vec<u8>> {
        self.to_envelope().marshal_binary()
    }

    pub fn to_base64(&self) -> Result<String> {
        self.to_envelope().to_base64()
    }

    /// Signs and moves into the signed state.
    pub fn sign<S: Signer + ?Sized>(self, signer: &S) -> Result<SignedTransaction> {
        SignedTransaction::from_built(self).sign(signer)
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum TimeValidity {
    Bounded(Timebounds),
    Unbounded,
}

/// Fluent builder for [`BuiltTransaction`].
///
/// # Usage
///
/// ```
/// use txnbuild::identity::SimpleAccount;
/// use txnbuild::transaction::{Asset, Payment, Timebounds, TransactionBuilder};
///
/// let mut source = SimpleAccount::new(
///     "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3",
///     9605939170639897,
/// );
/// let built = TransactionBuilder::new(&mut source)
///     .operation(Payment::new(
///         "GB7BDSZU2Y27LYNLALKKALB52WS2IZWYBDGY6EQBLEED3TJOCVMZRH7H",
///         "10",
///         Asset::native(),
///     ))
///     .timebounds(Timebounds::with_timeout(0, 300))
///     .build()
///     .unwrap();
///
/// assert_eq!(built.fee(), 100);
/// assert_eq!(built.sequence_number(), 9605939170639898);
/// ```
///
/// A time-validity choice is mandatory: call either
/// [`timebounds`](Self::timebounds) or
/// [`without_timebounds`](Self::without_timebounds).
pub struct TransactionBuilder<'a> {
    source: &'a mut dyn Account,
    operations: Vec<Operation>,
    memo: Memo,
    fee: Option<u32>,
    time_validity: Option<TimeValidity>,
    config: BuildConfig,
}

impl<'a> TransactionBuilder<'a> {
    /// Creates a builder for the test network with the default base fee.
    pub fn new(source: &'a mut dyn Account) -> Self {
        Self::with_config(source, BuildConfig::default())
    }

    pub fn with_config(source: &'a mut dyn Account, config: BuildConfig) -> Self {
        Self {
            source,
            operations: Vec::new(),
            memo: Memo::None,
            fee: None,
            time_validity: None,
            config,
        }
    }

    /// Appends an operation. Order is preserved on the wire.
    pub fn operation(mut self, operation: impl Into<Operation>) -> Self {
        self.operations.push(operation.into());
        self
    }

    pub fn operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    pub fn memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    /// Sets an explicit fee in stroops, overriding the per-operation default.
    pub fn fee(mut self, fee: u32) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn timebounds(mut self, timebounds: Timebounds) -> Self {
        self.time_validity = Some(TimeValidity::Bounded(timebounds));
        self
    }

    /// Omits timebounds from the wire entirely: valid until the sequence
    /// number is used.
    pub fn without_timebounds(mut self) -> Self {
        self.time_validity = Some(TimeValidity::Unbounded);
        self
    }

    pub fn network_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.config.network_passphrase = passphrase.into();
        self
    }

    pub fn base_fee(mut self, base_fee: u32) -> Self {
        self.config.base_fee = base_fee;
        self
    }

    /// Runs the build pipeline.
    ///
    /// Steps, in order: resolve the source address, claim the next sequence
    /// number, convert each operation, attach timebounds, convert the memo,
    /// apply the fee policy. The first failure aborts the build. Once the
    /// sequence number has been claimed it stays claimed, even if a later
    /// step fails.
    pub fn build(mut self) -> Result<BuiltTransaction> {
        self.config
            .validate()
            .map_err(|e| TransactionError::Config(e.to_string()))?;
        let time_validity = self.time_validity.ok_or_else(|| {
            TransactionError::Config(
                "no time validity chosen: call timebounds() or without_timebounds()".to_string(),
            )
        })?;
        if self.operations.is_empty() {
            return Err(TransactionError::validation(
                "transaction must contain at least one operation",
            ));
        }
        if self.operations.len() > MAX_OPERATIONS {
            return Err(TransactionError::validation(format!(
                "transaction has {} operations, maximum is {MAX_OPERATIONS}",
                self.operations.len()
            )));
        }

        let source_account = AccountId::from_address(self.source.account_id())?;
        let seq_num = self.source.increment_sequence_number()?;
        debug!(
            source = self.source.account_id(),
            seq_num,
            operations = self.operations.len(),
            "building transaction"
        );

        let mut operations = Vec::with_capacity(self.operations.len());
        for (index, operation) in self.operations.iter().enumerate() {
            let kind = operation.kind();
            let wire = operation.to_wire().map_err(|source| TransactionError::Operation {
                index,
                kind,
                source: Box::new(source),
            })?;
            trace!(index, %kind, "converted operation");
            operations.push(wire);
        }

        let time_bounds = match time_validity {
            TimeValidity::Bounded(timebounds) => Some(timebounds.to_wire()?),
            TimeValidity::Unbounded => None,
        };
        let memo = self.memo.to_wire()?;
        let fee = FeePolicy::from_config(&self.config).fee_for(self.fee, operations.len())?;

        debug!(seq_num, fee, "transaction built");
        Ok(BuiltTransaction::new(
            xdr::Transaction {
                source_account,
                fee,
                seq_num,
                time_bounds,
                memo,
                operations,
            },
            self.config.network_passphrase,
        ))
    }

    /// Builds, signs with each signer in turn and returns the base64 envelope.
    ///
    /// A failure is wrapped with the stage it happened in. At least one
    /// signer is required; an empty slice fails in the sign stage before any
    /// sequence number is claimed.
    pub fn build_sign_encode(self, signers: &[&dyn Signer]) -> Result<String> {
        if signers.is_empty() {
            return Err(TransactionError::validation("at least one signer required")
                .in_stage(Stage::Sign));
        }
        let built = self.build().map_err(|e| e.in_stage(Stage::Build))?;
        let mut signed = SignedTransaction::from_built(built);
        for signer in signers {
            signed = signed.sign(*signer).map_err(|e| e.in_stage(Stage::Sign))?;
        }
        signed.to_base64().map_err(|e| e.in_stage(Stage::Encode))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
