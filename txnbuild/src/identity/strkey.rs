//! # StrKey: Text Form of Keys
//!
//! Every key that a human ever sees (account addresses, secret seeds, signer
//! hashes) travels as a StrKey:
//!
//! ```text
//! version byte (1) || payload (32) || CRC16-XModem(version || payload) (2, LE)
//!     -> base32 (RFC 4648 alphabet, no padding)
//! ```
//!
//! The version byte is chosen so the first base32 character is a mnemonic:
//! `G` for accounts, `S` for seeds, `T` for pre-authorized transactions and
//! `X` for hash-x signers. The checksum catches transcription errors before
//! a payment ever reaches the wire.

use std::fmt;

use thiserror::Error;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Payload length shared by every key kind we encode.
pub const PAYLOAD_LENGTH: usize = 32;

/// Raw length of a decoded StrKey: version + payload + checksum.
const RAW_LENGTH: usize = 1 + PAYLOAD_LENGTH + 2;

/// Errors that can occur while decoding a StrKey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrKeyError {
    #[error("invalid base32 encoding")]
    InvalidBase32,

    #[error("invalid decoded length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("unknown version byte {0:#04x}")]
    UnknownVersion(u8),

    #[error("invalid version byte: expected {expected}, got {got}")]
    VersionMismatch {
        expected: VersionByte,
        got: VersionByte,
    },

    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// The kind of key a StrKey carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionByte {
    /// Ed25519 public key of an account (`G...`).
    AccountId,
    /// Ed25519 secret seed (`S...`).
    Seed,
    /// Hash of a pre-authorized transaction (`T...`).
    PreAuthTx,
    /// SHA-256 hash of a signing preimage (`X...`).
    HashX,
}

impl VersionByte {
    pub fn as_byte(self) -> u8 {
        match self {
            Self::AccountId => 6 << 3,
            Self::Seed => 18 << 3,
            Self::PreAuthTx => 19 << 3,
            Self::HashX => 23 << 3,
        }
    }

    pub fn from_byte(byte: u8) -> Result<Self, StrKeyError> {
        match byte {
            b if b == 6 << 3 => Ok(Self::AccountId),
            b if b == 18 << 3 => Ok(Self::Seed),
            b if b == 19 << 3 => Ok(Self::PreAuthTx),
            b if b == 23 << 3 => Ok(Self::HashX),
            other => Err(StrKeyError::UnknownVersion(other)),
        }
    }
}

impl fmt::Display for VersionByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountId => write!(f, "account id"),
            Self::Seed => write!(f, "seed"),
            Self::PreAuthTx => write!(f, "pre-auth tx"),
            Self::HashX => write!(f, "hash-x"),
        }
    }
}

/// Encodes a 32-byte payload under the given version byte.
pub fn encode(version: VersionByte, payload: &[u8; PAYLOAD_LENGTH]) -> String {
    let mut raw = Vec::with_capacity(RAW_LENGTH);
    raw.push(version.as_byte());
    raw.extend_from_slice(payload);
    let checksum = crc16_xmodem(&raw);
    raw.extend_from_slice(&checksum.to_le_bytes());
    base32_encode(&raw)
}

/// Decodes a StrKey, requiring it to carry `expected`.
pub fn decode(expected: VersionByte, text: &str) -> Result<[u8; PAYLOAD_LENGTH], StrKeyError> {
    let (got, payload) = decode_any(text)?;
    if got != expected {
        return Err(StrKeyError::VersionMismatch { expected, got });
    }
    Ok(payload)
}

/// Decodes a StrKey of any known kind.
pub fn decode_any(text: &str) -> Result<(VersionByte, [u8; PAYLOAD_LENGTH]), StrKeyError> {
    let raw = base32_decode(text)?;
    if raw.len() != RAW_LENGTH {
        return Err(StrKeyError::InvalidLength {
            expected: RAW_LENGTH,
            got: raw.len(),
        });
    }

    let (body, checksum) = raw.split_at(RAW_LENGTH - 2);
    let expected = crc16_xmodem(body).to_le_bytes();
    if checksum != expected {
        return Err(StrKeyError::ChecksumMismatch);
    }

    let version = VersionByte::from_byte(body[0])?;
    let mut payload = [0u8; PAYLOAD_LENGTH];
    payload.copy_from_slice(&body[1..]);
    Ok((version, payload))
}

/// Returns `true` if `text` is a well-formed account address.
pub fn is_valid_account_id(text: &str) -> bool {
    decode(VersionByte::AccountId, text).is_ok()
}

/// CRC-16/XMODEM: polynomial 0x1021, initial value 0, no reflection.
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= u16::from(*byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for byte in data {
        buffer = (buffer << 8) | u32::from(*byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

fn base32_decode(text: &str) -> Result<Vec<u8>, StrKeyError> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for c in text.bytes() {
        let value = ALPHABET
            .iter()
            .position(|a| *a == c)
            .ok_or(StrKeyError::InvalidBase32)? as u32;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    // Leftover bits must be zero, otherwise two texts would decode to the same key.
    if bits >= 5 || buffer & ((1 << bits) - 1) != 0 {
        return Err(StrKeyError::InvalidBase32);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";
    const SEED: &str = "SBPQUZ6G4FZNWFHKUWC5BEYWF6R52E3SEP7R3GWYSM2XTKGF5LNTWW4R";

    #[test]
    fn account_id_roundtrip() {
        let payload = decode(VersionByte::AccountId, ADDRESS).unwrap();
        assert_eq!(hex::encode(&payload[..4]), "e0dc6de1");
        assert_eq!(encode(VersionByte::AccountId, &payload), ADDRESS);
    }

    #[test]
    fn seed_decodes_with_seed_version() {
        let (version, payload) = decode_any(SEED).unwrap();
        assert_eq!(version, VersionByte::Seed);
        assert_eq!(encode(VersionByte::Seed, &payload), SEED);
    }

    #[test]
    fn prefixes_match_version_bytes() {
        let payload = [0u8; 32];
        assert!(encode(VersionByte::AccountId, &payload).starts_with('G'));
        assert!(encode(VersionByte::Seed, &payload).starts_with('S'));
        assert!(encode(VersionByte::PreAuthTx, &payload).starts_with('T'));
        assert!(encode(VersionByte::HashX, &payload).starts_with('X'));
    }

    #[test]
    fn version_mismatch_rejected() {
        let err = decode(VersionByte::AccountId, SEED).unwrap_err();
        assert_eq!(
            err,
            StrKeyError::VersionMismatch {
                expected: VersionByte::AccountId,
                got: VersionByte::Seed,
            }
        );
    }

    #[test]
    fn corrupted_character_fails_checksum() {
        let mut corrupted = ADDRESS.to_string();
        corrupted.replace_range(10..11, if &ADDRESS[10..11] == "A" { "B" } else { "A" });
        assert!(decode(VersionByte::AccountId, &corrupted).is_err());
    }

    #[test]
    fn lowercase_and_garbage_rejected() {
        assert_eq!(
            decode_any(&ADDRESS.to_lowercase()),
            Err(StrKeyError::InvalidBase32)
        );
        assert_eq!(decode_any("G1"), Err(StrKeyError::InvalidBase32));
        assert!(!is_valid_account_id(""));
    }

    #[test]
    fn truncated_address_rejected() {
        assert!(matches!(
            decode_any(&ADDRESS[..48]),
            Err(StrKeyError::InvalidLength { .. })
        ));
    }

    #[test]
    fn crc16_known_vector() {
        // CRC-16/XMODEM check value for "123456789".
        assert_eq!(crc16_xmodem(b"123456789"), 0x31c3);
    }
}
