//! Error taxonomy for the build → sign → encode pipeline.

use std::fmt;

use thiserror::Error;

use super::operation::OperationKind;
use crate::crypto::KeyError;
use crate::identity::{AccountError, StrKeyError};
use crate::xdr::XdrError;

/// Convenience alias used throughout the transaction module.
pub type Result<T> = std::result::Result<T, TransactionError>;

/// The pipeline stage a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Build,
    Sign,
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Sign => write!(f, "sign"),
            Self::Encode => write!(f, "encode"),
        }
    }
}

/// Everything that can go wrong between "here are my operations" and
/// "here is your base64 envelope".
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The builder was misconfigured (e.g. no explicit time-validity choice).
    #[error("config error: {0}")]
    Config(String),

    /// A business rule was violated: bad time window, native asset where a
    /// credit asset is required, malformed amount, and so on.
    #[error("validation error: {0}")]
    Validation(String),

    /// An address, memo or wire structure could not be encoded or decoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("crypto error: {0}")]
    Crypto(#[from] KeyError),

    #[error("sequence error: {0}")]
    Sequence(#[from] AccountError),

    /// An operation failed wire conversion. `index` is its position in the
    /// transaction, starting at 0.
    #[error("failed to build operation {index} ({kind}): {source}")]
    Operation {
        index: usize,
        kind: OperationKind,
        #[source]
        source: Box<TransactionError>,
    },

    /// Raised by the combined build/sign/encode helper.
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<TransactionError>,
    },
}

impl TransactionError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn in_stage(self, stage: Stage) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Strips operation and stage wrappers, returning the underlying cause.
    pub fn root_cause(&self) -> &TransactionError {
        match self {
            Self::Operation { source, .. } | Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<XdrError> for TransactionError {
    fn from(err: XdrError) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<StrKeyError> for TransactionError {
    fn from(err: StrKeyError) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<base64::DecodeError> for TransactionError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Encoding(format!("invalid base64: {err}"))
    }
}
