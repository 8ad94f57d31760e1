//! Envelope serialization: canonical XDR bytes and base64 for transport.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

use super::error::Result;
use crate::xdr::{ReadXdr, TransactionEnvelope, WriteXdr};

impl TransactionEnvelope {
    /// Canonical XDR encoding. Encoding the same envelope twice yields the same bytes.
    pub fn marshal_binary(&self) -> Result<Vec<u8>> {
        let bytes = self.to_xdr()?;
        trace!(bytes = bytes.len(), signatures = self.signatures.len(), "encoded envelope");
        Ok(bytes)
    }

    /// Strict XDR decoding; trailing bytes are rejected.
    pub fn unmarshal_binary(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_xdr(bytes)?)
    }

    /// Base64 (standard alphabet, padded) of the XDR encoding.
    pub fn to_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.marshal_binary()?))
    }

    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = STANDARD.decode(text.trim())?;
        Self::unmarshal_binary(&bytes)
    }
}
