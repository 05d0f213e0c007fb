//! secp256k1 private keys and their WIF text encoding.
//!
//! A [`PrivateKey`] couples a validated scalar with the network it is
//! meant for and whether the matching public key serializes compressed.
//! The scalar is checked once at construction; every key in circulation
//! is therefore non zero and below the curve order.
//!
//! # Examples
//!
//! ```
//! use baccore::networks::NetworkRegistry;
//! use baccore::privatekey::PrivateKey;
//!
//! let registry = NetworkRegistry::default();
//! let key = PrivateKey::generate(None);
//! let wif = key.to_wif();
//! let back = PrivateKey::from_wif(&registry, &wif).unwrap();
//! assert_eq!(key.to_buffer(), back.to_buffer());
//! ```

use hex;
use once_cell::sync::OnceCell;
use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{constants, SecretKey};
use std::sync::Arc;
use std::{fmt, result};

use networks::{self, Network, NetworkField, NetworkKey, NetworkRegistry};
use publickey::PublicKey;
use util::base58check;

pub const KEY_SIZE: usize = 32;

#[derive(Debug)]
pub enum Error {
    /// the scalar is zero or otherwise not a usable secret key
    ZeroOrInvalidScalar,
    /// the scalar is not below the secp256k1 group order
    ScalarTooLarge,
    InvalidLength(usize),
    InvalidHex(hex::FromHexError),
    /// the WIF version byte matches no registered network
    MissingNetwork(u8),
    /// the decoded WIF payload has an unexpected shape
    UnrecognizedArgument(String),
    Base58(base58check::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::ZeroOrInvalidScalar => {
                write!(f, "private key scalar is zero or invalid")
            }
            &Error::ScalarTooLarge => {
                write!(f, "private key scalar is not below the curve order")
            }
            &Error::InvalidLength(sz) => {
                write!(
                    f,
                    "invalid private key size, expected {} bytes, but received {} bytes",
                    KEY_SIZE, sz
                )
            }
            &Error::InvalidHex(ref err) => {
                write!(f, "invalid private key hexadecimal: {}", err)
            }
            &Error::MissingNetwork(version) => {
                write!(f, "no network registered for WIF version byte 0x{:02x}", version)
            }
            &Error::UnrecognizedArgument(ref s) => {
                write!(f, "unrecognized private key data: {}", s)
            }
            &Error::Base58(ref err) => {
                write!(f, "invalid WIF encoding: {}", err)
            }
        }
    }
}
impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e)
    }
}
impl From<base58check::Error> for Error {
    fn from(e: base58check::Error) -> Self {
        Error::Base58(e)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// reject the zero scalar and anything not strictly below the group
/// order. Big endian byte comparison against the order constant.
fn validate_scalar(bytes: &[u8; KEY_SIZE]) -> Result<()> {
    if bytes.iter().all(|b| *b == 0) {
        return Err(Error::ZeroOrInvalidScalar);
    }
    if bytes[..] >= constants::CURVE_ORDER[..] {
        return Err(Error::ScalarTooLarge);
    }
    Ok(())
}

/// A validated secp256k1 scalar bound to a network.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
    compressed: bool,
    network: Arc<Network>,
    public_key: OnceCell<PublicKey>,
}

impl PrivateKey {
    /// build a key from raw scalar bytes. `network` defaults to
    /// livenet; the key is compressed unless stated otherwise later.
    pub fn from_bytes(bytes: &[u8], network: Option<Arc<Network>>) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(Error::InvalidLength(bytes.len()));
        }
        let mut scalar = [0u8; KEY_SIZE];
        scalar.copy_from_slice(bytes);
        validate_scalar(&scalar)?;
        let secret = SecretKey::from_slice(&scalar).map_err(|_| Error::ZeroOrInvalidScalar)?;
        Ok(PrivateKey {
            secret: secret,
            compressed: true,
            network: network.unwrap_or_else(networks::default_network),
            public_key: OnceCell::new(),
        })
    }

    pub fn from_hex(hex_str: &str, network: Option<Arc<Network>>) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes, network)
    }

    /// draw a fresh key from the operating system RNG, retrying on the
    /// (cosmically unlikely) out of range draws.
    pub fn generate(network: Option<Arc<Network>>) -> Self {
        let network = network.unwrap_or_else(networks::default_network);
        let mut scalar = [0u8; KEY_SIZE];
        loop {
            OsRng.fill_bytes(&mut scalar);
            if let Ok(key) = Self::from_bytes(&scalar, Some(network.clone())) {
                return key;
            }
        }
    }

    /// decode a WIF string. The version byte selects the network from
    /// the registry; a trailing `0x01` marks a compressed key.
    pub fn from_wif(registry: &NetworkRegistry, wif: &str) -> Result<Self> {
        let payload = base58check::decode(wif)?;
        if payload.is_empty() {
            return Err(Error::UnrecognizedArgument("empty WIF payload".to_string()));
        }
        let version = payload[0];
        let network = registry
            .get_by(&NetworkKey::from(version), &[NetworkField::PrivateKey])
            .ok_or(Error::MissingNetwork(version))?;
        let compressed = match payload.len() {
            len if len == 1 + KEY_SIZE => false,
            len if len == 2 + KEY_SIZE && payload[1 + KEY_SIZE] == 0x01 => true,
            len => {
                return Err(Error::UnrecognizedArgument(format!(
                    "WIF payload of {} bytes",
                    len
                )))
            }
        };
        let mut key = Self::from_bytes(&payload[1..1 + KEY_SIZE], Some(network))?;
        key.compressed = compressed;
        Ok(key)
    }

    /// encode as WIF with this key's network version byte.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(2 + KEY_SIZE);
        payload.push(self.network.privatekey);
        payload.extend_from_slice(&self.secret_bytes());
        if self.compressed {
            payload.push(0x01);
        }
        base58check::encode(&payload)
    }

    /// the matching public key, computed once and cached.
    pub fn to_public_key(&self) -> &PublicKey {
        self.public_key
            .get_or_init(|| PublicKey::from_private_key(self))
    }

    pub fn to_buffer(&self) -> Vec<u8> {
        self.secret_bytes().to_vec()
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    pub fn secret_bytes(&self) -> [u8; KEY_SIZE] {
        self.secret.secret_bytes()
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn set_compressed(&mut self, compressed: bool) {
        if self.compressed != compressed {
            self.compressed = compressed;
            self.public_key = OnceCell::new();
        }
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // the scalar itself stays out of debug output
        write!(
            f,
            "PrivateKey {{ network: {}, compressed: {} }}",
            self.network, self.compressed
        )
    }
}
impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.secret_bytes()[..]))
    }
}
