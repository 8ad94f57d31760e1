//! # XDR Codec
//!
//! The ledger speaks XDR (RFC 4506) on the wire: big-endian 32-bit words,
//! everything padded to 4-byte alignment, unions prefixed by a signed 32-bit
//! discriminant, optionals prefixed by a 0/1 presence word.
//!
//! This module provides the two halves of the codec:
//!
//! - [`XdrWriter`] / [`WriteXdr`] - canonical, deterministic encoding.
//! - [`XdrReader`] / [`ReadXdr`] - strict decoding. Non-zero padding, bounded
//!   lengths exceeded, unknown discriminants and trailing bytes are all
//!   rejected, so `decode(encode(x)) == x` and nothing else decodes.
//!
//! The wire structures themselves live in [`types`].

pub mod types;

pub use types::*;

use thiserror::Error;

/// Errors produced while encoding or decoding XDR.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XdrError {
    /// A variable-length field is longer than its declared maximum.
    #[error("length {len} exceeds maximum {max}")]
    LengthExceeded { len: usize, max: usize },

    /// The input ended before the value was complete.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A union or enum discriminant is not one the codec knows.
    #[error("invalid discriminant {value} for {type_name}")]
    InvalidDiscriminant { type_name: &'static str, value: i32 },

    /// A boolean word was neither 0 nor 1.
    #[error("invalid boolean value {0}")]
    InvalidBool(u32),

    /// Alignment padding contained non-zero bytes.
    #[error("non-zero padding bytes")]
    NonZeroPadding,

    /// A string field did not hold valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8,

    /// Bytes were left over after decoding a complete value.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

/// Number of zero bytes needed to pad `len` up to a 4-byte boundary.
fn padding_for(len: usize) -> usize {
    (4 - len % 4) % 4
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Append-only XDR encoder.
#[derive(Debug, Default)]
pub struct XdrWriter {
    buf: Vec<u8>,
}

impl XdrWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_u32(u32::from(value));
    }

    /// Fixed-length opaque data: raw bytes plus alignment padding, no length prefix.
    pub fn write_fixed_opaque(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        self.buf.resize(self.buf.len() + padding_for(bytes.len()), 0);
    }

    /// Variable-length opaque data, length-prefixed and bounded by `max`.
    pub fn write_var_opaque(&mut self, bytes: &[u8], max: usize) -> Result<(), XdrError> {
        if bytes.len() > max {
            return Err(XdrError::LengthExceeded {
                len: bytes.len(),
                max,
            });
        }
        self.write_u32(bytes.len() as u32);
        self.write_fixed_opaque(bytes);
        Ok(())
    }

    pub fn write_string(&mut self, value: &str, max: usize) -> Result<(), XdrError> {
        self.write_var_opaque(value.as_bytes(), max)
    }

    pub fn write_option<T: WriteXdr>(&mut self, value: Option<&T>) -> Result<(), XdrError> {
        match value {
            Some(inner) => {
                self.write_bool(true);
                inner.write_xdr(self)
            }
            None => {
                self.write_bool(false);
                Ok(())
            }
        }
    }

    /// Variable-length array, count-prefixed and bounded by `max`.
    pub fn write_array<T: WriteXdr>(&mut self, items: &[T], max: usize) -> Result<(), XdrError> {
        if items.len() > max {
            return Err(XdrError::LengthExceeded {
                len: items.len(),
                max,
            });
        }
        self.write_u32(items.len() as u32);
        items.iter().try_for_each(|item| item.write_xdr(self))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Cursor-based XDR decoder over a borrowed buffer.
#[derive(Debug)]
pub struct XdrReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> XdrReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], XdrError> {
        if self.remaining() < n {
            return Err(XdrError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], XdrError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn skip_padding(&mut self, len: usize) -> Result<(), XdrError> {
        let pad = self.take(padding_for(len))?;
        if pad.iter().any(|b| *b != 0) {
            return Err(XdrError::NonZeroPadding);
        }
        Ok(())
    }

    pub fn read_u32(&mut self) -> Result<u32, XdrError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, XdrError> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, XdrError> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, XdrError> {
        Ok(i64::from_be_bytes(self.take_array()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, XdrError> {
        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(XdrError::InvalidBool(other)),
        }
    }

    pub fn read_fixed_opaque<const N: usize>(&mut self) -> Result<[u8; N], XdrError> {
        let out = self.take_array::<N>()?;
        self.skip_padding(N)?;
        Ok(out)
    }

    pub fn read_var_opaque(&mut self, max: usize) -> Result<Vec<u8>, XdrError> {
        let len = self.read_u32()? as usize;
        if len > max {
            return Err(XdrError::LengthExceeded { len, max });
        }
        let bytes = self.take(len)?.to_vec();
        self.skip_padding(len)?;
        Ok(bytes)
    }

    pub fn read_string(&mut self, max: usize) -> Result<String, XdrError> {
        let bytes = self.read_var_opaque(max)?;
        String::from_utf8(bytes).map_err(|_| XdrError::InvalidUtf8)
    }

    pub fn read_option<T: ReadXdr>(&mut self) -> Result<Option<T>, XdrError> {
        if self.read_bool()? {
            Ok(Some(T::read_xdr(self)?))
        } else {
            Ok(None)
        }
    }

    pub fn read_array<T: ReadXdr>(&mut self, max: usize) -> Result<Vec<T>, XdrError> {
        let len = self.read_u32()? as usize;
        if len > max {
            return Err(XdrError::LengthExceeded { len, max });
        }
        (0..len).map(|_| T::read_xdr(self)).collect()
    }

    /// Fails unless every input byte has been consumed.
    pub fn finish(self) -> Result<(), XdrError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(XdrError::TrailingBytes(n)),
        }
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A value with a canonical XDR encoding.
pub trait WriteXdr {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError>;

    fn to_xdr(&self) -> Result<Vec<u8>, XdrError> {
        let mut w = XdrWriter::new();
        self.write_xdr(&mut w)?;
        Ok(w.into_bytes())
    }
}

/// A value that can be decoded from XDR.
pub trait ReadXdr: Sized {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError>;

    /// Decodes a complete value; leftover bytes are an error.
    fn from_xdr(bytes: &[u8]) -> Result<Self, XdrError> {
        let mut r = XdrReader::new(bytes);
        let value = Self::read_xdr(&mut r)?;
        r.finish()?;
        Ok(value)
    }
}

impl WriteXdr for u32 {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_u32(*self);
        Ok(())
    }
}

impl ReadXdr for u32 {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.read_u32()
    }
}

impl WriteXdr for i64 {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_i64(*self);
        Ok(())
    }
}

impl ReadXdr for i64 {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.read_i64()
    }
}
