//! Base58Check: Base58 text with a 4 byte double SHA-256 checksum.
//!
//! The alphabet work is delegated to the `bs58` crate (Bitcoin
//! alphabet); this module owns the checksum wrapping rule:
//!
//! `encode(payload) = Base58(payload || sha256d(payload)[0..4])`

use bs58;
use hash;
use std::{fmt, result};

pub const CHECKSUM_SIZE: usize = 4;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// the text is not valid Base58
    InvalidEncoding(bs58::decode::Error),
    /// decoded to fewer bytes than a checksum occupies
    TooShort(usize),
    /// the trailing checksum does not match the payload
    InvalidChecksum,
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::InvalidEncoding(ref err) => write!(f, "invalid base58 text: {}", err),
            &Error::TooShort(sz) => {
                write!(f, "not enough bytes for a checksum, got {} bytes", sz)
            }
            &Error::InvalidChecksum => write!(f, "base58 checksum mismatch"),
        }
    }
}
impl From<bs58::decode::Error> for Error {
    fn from(e: bs58::decode::Error) -> Self {
        Error::InvalidEncoding(e)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// the 4 byte checksum of a payload: `sha256d(payload)[0..4]`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = hash::sha256d(payload);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[0..CHECKSUM_SIZE]);
    out
}

/// encode a payload, appending its checksum before the Base58 expansion.
pub fn encode(payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    raw.extend_from_slice(payload);
    raw.extend_from_slice(&checksum(payload));
    bs58::encode(raw).into_string()
}

/// decode without verifying: returns the payload and the trailing
/// checksum bytes as found in the text. Callers that carry checksums
/// through their own validation (the extended key codec) use this and
/// verify at construction time.
pub fn decode_unchecked(text: &str) -> Result<(Vec<u8>, [u8; CHECKSUM_SIZE])> {
    let mut raw = bs58::decode(text).into_vec()?;
    if raw.len() < CHECKSUM_SIZE + 1 {
        return Err(Error::TooShort(raw.len()));
    }
    let payload_len = raw.len() - CHECKSUM_SIZE;
    let mut cs = [0u8; CHECKSUM_SIZE];
    cs.copy_from_slice(&raw[payload_len..]);
    raw.truncate(payload_len);
    Ok((raw, cs))
}

/// decode and verify the trailing checksum, returning the payload only.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let (payload, cs) = decode_unchecked(text)?;
    if checksum(&payload) != cs {
        return Err(Error::InvalidChecksum);
    }
    Ok(payload)
}
