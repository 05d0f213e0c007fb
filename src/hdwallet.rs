//! BIP32 style extended keys: the master key derived from a seed and
//! the Base58Check codec for `xprv`/`xpub` strings.
//!
//! The serialized payload is 78 bytes:
//!
//! ```text
//! version   (4)  network constant, big endian
//! depth     (1)
//! parent fp (4)  first 4 bytes of HASH160 of the parent public key
//! index     (4)  child index, big endian
//! chain     (32) chain code
//! key       (33) 0x00 + 32 byte scalar, or the compressed public key
//! ```
//!
//! followed by 4 checksum bytes under the Base58 expansion. Checksums
//! are only ever verified, never recomputed for the caller: a string
//! whose checksum does not match its payload is rejected as a whole.
//!
//! # Examples
//!
//! ```
//! use baccore::hdwallet::HDPrivateKey;
//! use baccore::networks::NetworkRegistry;
//!
//! let registry = NetworkRegistry::default();
//! let root = HDPrivateKey::from_seed_hex("000102030405060708090a0b0c0d0e0f", None).unwrap();
//! let parsed = HDPrivateKey::from_string(&registry, root.xprivkey()).unwrap();
//! assert_eq!(root.xprivkey(), parsed.xprivkey());
//! ```

use hex;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::{fmt, result};

use bip39::{MnemonicString, Seed};
use hash;
use networks::{self, Network, NetworkField, NetworkKey, NetworkRegistry};
use privatekey::{self, PrivateKey};
use publickey::{self, PublicKey};
use util::base58check;

pub const VERSION_SIZE: usize = 4;
pub const DEPTH_SIZE: usize = 1;
pub const PARENT_FINGERPRINT_SIZE: usize = 4;
pub const CHILD_INDEX_SIZE: usize = 4;
pub const CHAIN_CODE_SIZE: usize = 32;
pub const KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 33;
pub const CHECKSUM_SIZE: usize = base58check::CHECKSUM_SIZE;

/// full payload size, private and public alike: the private form pads
/// its 32 byte scalar with a leading zero to the public form's 33.
pub const DATA_SIZE: usize = 78;
/// payload plus trailing checksum.
pub const SERIALIZED_SIZE: usize = DATA_SIZE + CHECKSUM_SIZE;

const VERSION_START: usize = 0;
const DEPTH_START: usize = VERSION_START + VERSION_SIZE;
const PARENT_FINGERPRINT_START: usize = DEPTH_START + DEPTH_SIZE;
const CHILD_INDEX_START: usize = PARENT_FINGERPRINT_START + PARENT_FINGERPRINT_SIZE;
const CHAIN_CODE_START: usize = CHILD_INDEX_START + CHILD_INDEX_SIZE;
const PUBLIC_KEY_START: usize = CHAIN_CODE_START + CHAIN_CODE_SIZE;
// the private scalar sits after a single zero pad byte
const PRIVATE_KEY_START: usize = PUBLIC_KEY_START + 1;

/// seeds shorter than this do not carry enough entropy for a root key.
pub const MINIMUM_SEED_SIZE: usize = 16;
/// seeds longer than the HMAC block input the format allows.
pub const MAXIMUM_SEED_SIZE: usize = 64;

// domain separator of the master key HMAC
const MASTER_HMAC_KEY: &'static [u8] = b"BAC seed";

#[derive(Debug)]
pub enum Error {
    InvalidEntropyArgument(hex::FromHexError),
    NotEnoughEntropy(usize),
    TooMuchEntropy(usize),
    /// a raw buffer field has the wrong size
    StructuralError {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    InvalidSerializedSize(usize),
    InvalidChecksum,
    /// the 4 byte version constant matches no registered network
    UnknownNetworkVersion(u32),
    Base58(base58check::Error),
    Key(privatekey::Error),
    Point(publickey::Error),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::InvalidEntropyArgument(ref err) => {
                write!(f, "invalid hexadecimal seed: {}", err)
            }
            &Error::NotEnoughEntropy(sz) => {
                write!(
                    f,
                    "seed of {} bytes is below the minimum of {} bytes",
                    sz, MINIMUM_SEED_SIZE
                )
            }
            &Error::TooMuchEntropy(sz) => {
                write!(
                    f,
                    "seed of {} bytes is above the maximum of {} bytes",
                    sz, MAXIMUM_SEED_SIZE
                )
            }
            &Error::StructuralError {
                field,
                expected,
                found,
            } => {
                write!(
                    f,
                    "invalid {} buffer, expected {} bytes, but received {} bytes",
                    field, expected, found
                )
            }
            &Error::InvalidSerializedSize(sz) => {
                write!(
                    f,
                    "invalid serialized key, expected {} payload bytes, but received {} bytes",
                    DATA_SIZE, sz
                )
            }
            &Error::InvalidChecksum => {
                write!(f, "serialized key checksum does not match its payload")
            }
            &Error::UnknownNetworkVersion(version) => {
                write!(f, "no network registered for version 0x{:08x}", version)
            }
            &Error::Base58(ref err) => {
                write!(f, "invalid serialized key encoding: {}", err)
            }
            &Error::Key(ref err) => {
                write!(f, "invalid embedded private key: {}", err)
            }
            &Error::Point(ref err) => {
                write!(f, "invalid embedded public key: {}", err)
            }
        }
    }
}
impl From<base58check::Error> for Error {
    fn from(e: base58check::Error) -> Self {
        Error::Base58(e)
    }
}
impl From<privatekey::Error> for Error {
    fn from(e: privatekey::Error) -> Self {
        Error::Key(e)
    }
}
impl From<publickey::Error> for Error {
    fn from(e: publickey::Error) -> Self {
        Error::Point(e)
    }
}

pub type Result<T> = result::Result<T, Error>;

fn read_u32_be(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_be_bytes(buf)
}

fn expect_len(field: &'static str, buf: &[u8], expected: usize) -> Result<()> {
    if buf.len() != expected {
        return Err(Error::StructuralError {
            field: field,
            expected: expected,
            found: buf.len(),
        });
    }
    Ok(())
}

/// The raw fields of a serialized extended private key, before they are
/// interpreted. Each buffer is validated for size; the optional
/// checksum, when present, is verified against the other fields and
/// never recomputed on their behalf.
#[derive(Debug, Clone)]
pub struct HDPrivateKeyBuffers {
    pub version: Vec<u8>,
    pub depth: Vec<u8>,
    pub parent_fingerprint: Vec<u8>,
    pub child_index: Vec<u8>,
    pub chain_code: Vec<u8>,
    pub private_key: Vec<u8>,
    pub checksum: Option<Vec<u8>>,
}

impl HDPrivateKeyBuffers {
    pub fn validate(&self) -> Result<()> {
        expect_len("version", &self.version, VERSION_SIZE)?;
        expect_len("depth", &self.depth, DEPTH_SIZE)?;
        expect_len(
            "parent fingerprint",
            &self.parent_fingerprint,
            PARENT_FINGERPRINT_SIZE,
        )?;
        expect_len("child index", &self.child_index, CHILD_INDEX_SIZE)?;
        expect_len("chain code", &self.chain_code, CHAIN_CODE_SIZE)?;
        expect_len("private key", &self.private_key, KEY_SIZE)?;
        if let Some(ref cs) = self.checksum {
            expect_len("checksum", cs, CHECKSUM_SIZE)?;
        }
        Ok(())
    }

    /// concatenate the fields into the 78 byte payload. Assumes
    /// [`validate`](HDPrivateKeyBuffers::validate) has passed.
    pub fn to_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(DATA_SIZE);
        payload.extend_from_slice(&self.version);
        payload.extend_from_slice(&self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&self.child_index);
        payload.extend_from_slice(&self.chain_code);
        payload.push(0u8);
        payload.extend_from_slice(&self.private_key);
        payload
    }
}

/// An extended private key: a private key plus the chain code and
/// lineage metadata of the BIP32 serialization format.
pub struct HDPrivateKey {
    network: Arc<Network>,
    depth: u8,
    parent_fingerprint: [u8; PARENT_FINGERPRINT_SIZE],
    child_index: u32,
    chain_code: [u8; CHAIN_CODE_SIZE],
    private_key: PrivateKey,
    fingerprint: [u8; PARENT_FINGERPRINT_SIZE],
    xprivkey: OnceCell<String>,
    hd_public_key: OnceCell<HDPublicKey>,
}

impl HDPrivateKey {
    fn new(
        network: Arc<Network>,
        depth: u8,
        parent_fingerprint: [u8; PARENT_FINGERPRINT_SIZE],
        child_index: u32,
        chain_code: [u8; CHAIN_CODE_SIZE],
        private_key: PrivateKey,
    ) -> Self {
        let fingerprint = fingerprint_of(private_key.to_public_key());
        HDPrivateKey {
            network: network,
            depth: depth,
            parent_fingerprint: parent_fingerprint,
            child_index: child_index,
            chain_code: chain_code,
            private_key: private_key,
            fingerprint: fingerprint,
            xprivkey: OnceCell::new(),
            hd_public_key: OnceCell::new(),
        }
    }

    /// derive the master key of a seed: HMAC-SHA512 under the fixed
    /// domain separator, left half the scalar, right half the chain
    /// code. The seed must be 16 to 64 bytes.
    pub fn from_seed(seed: &[u8], network: Option<Arc<Network>>) -> Result<Self> {
        if seed.len() < MINIMUM_SEED_SIZE {
            return Err(Error::NotEnoughEntropy(seed.len()));
        }
        if seed.len() > MAXIMUM_SEED_SIZE {
            return Err(Error::TooMuchEntropy(seed.len()));
        }
        let network = network.unwrap_or_else(networks::default_network);
        let digest = hash::sha512hmac(MASTER_HMAC_KEY, seed);

        let private_key = PrivateKey::from_bytes(&digest[..KEY_SIZE], Some(network.clone()))?;
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        chain_code.copy_from_slice(&digest[KEY_SIZE..]);

        Ok(Self::new(network, 0, [0u8; 4], 0, chain_code, private_key))
    }

    pub fn from_seed_hex(seed_hex: &str, network: Option<Arc<Network>>) -> Result<Self> {
        let seed = hex::decode(seed_hex).map_err(Error::InvalidEntropyArgument)?;
        Self::from_seed(&seed, network)
    }

    /// stretch a mnemonic phrase into a seed and take its master key.
    pub fn from_mnemonic(
        mnemonic: &MnemonicString,
        passphrase: &str,
        network: Option<Arc<Network>>,
    ) -> Result<Self> {
        let seed = Seed::from_mnemonic_string(mnemonic, passphrase);
        Self::from_seed(seed.as_ref(), network)
    }

    /// assemble a key from raw field buffers. If a checksum buffer is
    /// present it is verified against the payload and the whole input
    /// rejected on mismatch.
    pub fn from_buffers(registry: &NetworkRegistry, buffers: HDPrivateKeyBuffers) -> Result<Self> {
        buffers.validate()?;
        if let Some(ref cs) = buffers.checksum {
            if base58check::checksum(&buffers.to_payload())[..] != cs[..] {
                return Err(Error::InvalidChecksum);
            }
        }

        let version = read_u32_be(&buffers.version);
        let network = registry
            .get_by(&NetworkKey::from(version), &[NetworkField::XPrivKey])
            .ok_or(Error::UnknownNetworkVersion(version))?;

        let private_key = PrivateKey::from_bytes(&buffers.private_key, Some(network.clone()))?;
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        chain_code.copy_from_slice(&buffers.chain_code);
        let mut parent_fingerprint = [0u8; PARENT_FINGERPRINT_SIZE];
        parent_fingerprint.copy_from_slice(&buffers.parent_fingerprint);

        Ok(Self::new(
            network,
            buffers.depth[0],
            parent_fingerprint,
            read_u32_be(&buffers.child_index),
            chain_code,
            private_key,
        ))
    }

    /// parse an `xprv` style string. The checksum carried by the text
    /// is verified before any field is looked at.
    pub fn from_string(registry: &NetworkRegistry, text: &str) -> Result<Self> {
        let (payload, found) = base58check::decode_unchecked(text)?;
        if base58check::checksum(&payload) != found {
            return Err(Error::InvalidChecksum);
        }
        if payload.len() != DATA_SIZE {
            return Err(Error::InvalidSerializedSize(payload.len()));
        }
        debug!("decoding extended private key of {} payload bytes", payload.len());

        let buffers = HDPrivateKeyBuffers {
            version: payload[VERSION_START..DEPTH_START].to_vec(),
            depth: payload[DEPTH_START..PARENT_FINGERPRINT_START].to_vec(),
            parent_fingerprint: payload[PARENT_FINGERPRINT_START..CHILD_INDEX_START].to_vec(),
            child_index: payload[CHILD_INDEX_START..CHAIN_CODE_START].to_vec(),
            chain_code: payload[CHAIN_CODE_START..PUBLIC_KEY_START].to_vec(),
            private_key: payload[PRIVATE_KEY_START..DATA_SIZE].to_vec(),
            checksum: None,
        };
        Self::from_buffers(registry, buffers)
    }

    /// the 78 byte payload of this key.
    pub fn to_buffer(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(DATA_SIZE);
        payload.extend_from_slice(&self.network.xprivkey.to_be_bytes());
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&self.child_index.to_be_bytes());
        payload.extend_from_slice(&self.chain_code);
        payload.push(0u8);
        payload.extend_from_slice(&self.private_key.secret_bytes());
        payload
    }

    /// the Base58Check string, computed once and cached.
    pub fn xprivkey(&self) -> &str {
        self.xprivkey
            .get_or_init(|| base58check::encode(&self.to_buffer()))
    }

    /// the matching extended public key, computed once and cached.
    pub fn hd_public_key(&self) -> &HDPublicKey {
        self.hd_public_key
            .get_or_init(|| HDPublicKey::from_hd_private_key(self))
    }

    pub fn xpubkey(&self) -> &str {
        self.hd_public_key().xpubkey()
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }
    pub fn depth(&self) -> u8 {
        self.depth
    }
    pub fn parent_fingerprint(&self) -> &[u8; PARENT_FINGERPRINT_SIZE] {
        &self.parent_fingerprint
    }
    pub fn child_index(&self) -> u32 {
        self.child_index
    }
    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_SIZE] {
        &self.chain_code
    }
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
    pub fn public_key(&self) -> &PublicKey {
        self.private_key.to_public_key()
    }
    /// first 4 bytes of HASH160 of this key's compressed public key.
    pub fn fingerprint(&self) -> &[u8; PARENT_FINGERPRINT_SIZE] {
        &self.fingerprint
    }
}

impl fmt::Debug for HDPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // keep the scalar and chain code out of debug output
        write!(
            f,
            "HDPrivateKey {{ network: {}, depth: {} }}",
            self.network, self.depth
        )
    }
}
impl fmt::Display for HDPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.xprivkey())
    }
}

fn fingerprint_of(public_key: &PublicKey) -> [u8; PARENT_FINGERPRINT_SIZE] {
    let digest = hash::hash160(&public_key.to_compressed());
    let mut out = [0u8; PARENT_FINGERPRINT_SIZE];
    out.copy_from_slice(&digest[..PARENT_FINGERPRINT_SIZE]);
    out
}

/// An extended public key: a public key plus chain code and lineage
/// metadata, sharing the private form's layout with the compressed
/// point in place of the padded scalar.
#[derive(Clone)]
pub struct HDPublicKey {
    network: Arc<Network>,
    depth: u8,
    parent_fingerprint: [u8; PARENT_FINGERPRINT_SIZE],
    child_index: u32,
    chain_code: [u8; CHAIN_CODE_SIZE],
    public_key: PublicKey,
    fingerprint: [u8; PARENT_FINGERPRINT_SIZE],
    xpubkey: OnceCell<String>,
}

impl HDPublicKey {
    pub fn from_hd_private_key(hd: &HDPrivateKey) -> Self {
        HDPublicKey {
            network: hd.network.clone(),
            depth: hd.depth,
            parent_fingerprint: hd.parent_fingerprint,
            child_index: hd.child_index,
            chain_code: hd.chain_code,
            public_key: hd.public_key().clone(),
            fingerprint: hd.fingerprint,
            xpubkey: OnceCell::new(),
        }
    }

    /// parse an `xpub` style string, verifying its checksum first.
    pub fn from_string(registry: &NetworkRegistry, text: &str) -> Result<Self> {
        let (payload, found) = base58check::decode_unchecked(text)?;
        if base58check::checksum(&payload) != found {
            return Err(Error::InvalidChecksum);
        }
        if payload.len() != DATA_SIZE {
            return Err(Error::InvalidSerializedSize(payload.len()));
        }

        let version = read_u32_be(&payload[VERSION_START..DEPTH_START]);
        let network = registry
            .get_by(&NetworkKey::from(version), &[NetworkField::XPubKey])
            .ok_or(Error::UnknownNetworkVersion(version))?;

        let public_key = PublicKey::from_der(
            &payload[PUBLIC_KEY_START..DATA_SIZE],
            Some(network.clone()),
        )?;
        let mut chain_code = [0u8; CHAIN_CODE_SIZE];
        chain_code.copy_from_slice(&payload[CHAIN_CODE_START..PUBLIC_KEY_START]);
        let mut parent_fingerprint = [0u8; PARENT_FINGERPRINT_SIZE];
        parent_fingerprint
            .copy_from_slice(&payload[PARENT_FINGERPRINT_START..CHILD_INDEX_START]);

        let fingerprint = fingerprint_of(&public_key);
        Ok(HDPublicKey {
            network: network,
            depth: payload[DEPTH_START],
            parent_fingerprint: parent_fingerprint,
            child_index: read_u32_be(&payload[CHILD_INDEX_START..CHAIN_CODE_START]),
            chain_code: chain_code,
            public_key: public_key,
            fingerprint: fingerprint,
            xpubkey: OnceCell::new(),
        })
    }

    pub fn to_buffer(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(DATA_SIZE);
        payload.extend_from_slice(&self.network.xpubkey.to_be_bytes());
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&self.child_index.to_be_bytes());
        payload.extend_from_slice(&self.chain_code);
        payload.extend_from_slice(&self.public_key.to_compressed());
        payload
    }

    pub fn xpubkey(&self) -> &str {
        self.xpubkey
            .get_or_init(|| base58check::encode(&self.to_buffer()))
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }
    pub fn depth(&self) -> u8 {
        self.depth
    }
    pub fn parent_fingerprint(&self) -> &[u8; PARENT_FINGERPRINT_SIZE] {
        &self.parent_fingerprint
    }
    pub fn child_index(&self) -> u32 {
        self.child_index
    }
    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_SIZE] {
        &self.chain_code
    }
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
    pub fn fingerprint(&self) -> &[u8; PARENT_FINGERPRINT_SIZE] {
        &self.fingerprint
    }
}

impl fmt::Debug for HDPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "HDPublicKey {{ network: {}, depth: {}, public_key: {} }}",
            self.network, self.depth, self.public_key
        )
    }
}
impl fmt::Display for HDPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.xpubkey())
    }
}
