//! secp256k1 public keys and their DER point encodings.
//!
//! Construction goes through the curve library, so a [`PublicKey`] in
//! circulation always holds a point actually on the curve. The
//! `compressed` flag only picks the serialization (33 byte compressed
//! or 65 byte uncompressed), never the point itself.

use hex;
use secp256k1::Secp256k1;
use std::sync::Arc;
use std::{fmt, result};

use networks::{self, Network};
use privatekey::PrivateKey;

pub const COMPRESSED_SIZE: usize = 33;
pub const UNCOMPRESSED_SIZE: usize = 65;

#[derive(Debug)]
pub enum Error {
    InvalidLength(usize),
    InvalidHex(hex::FromHexError),
    /// the encoded coordinates do not name a point on the curve
    PointNotOnCurve,
    UnrecognizedArgument(String),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::InvalidLength(sz) => {
                write!(
                    f,
                    "invalid public key size, expected {} or {} bytes, but received {} bytes",
                    COMPRESSED_SIZE, UNCOMPRESSED_SIZE, sz
                )
            }
            &Error::InvalidHex(ref err) => {
                write!(f, "invalid public key hexadecimal: {}", err)
            }
            &Error::PointNotOnCurve => {
                write!(f, "point is not on the secp256k1 curve")
            }
            &Error::UnrecognizedArgument(ref s) => {
                write!(f, "unrecognized public key data: {}", s)
            }
        }
    }
}
impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// A point on the secp256k1 curve bound to a network.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: secp256k1::PublicKey,
    compressed: bool,
    network: Arc<Network>,
}

impl PublicKey {
    /// the public key of a private key: scalar multiplication of the
    /// generator. Network and compression carry over from the private
    /// key.
    pub fn from_private_key(key: &PrivateKey) -> Self {
        let secp = Secp256k1::new();
        let point = secp256k1::PublicKey::from_secret_key(&secp, key.secret_key());
        PublicKey {
            point: point,
            compressed: key.is_compressed(),
            network: key.network().clone(),
        }
    }

    /// parse a DER point encoding, either 33 byte compressed or 65
    /// byte uncompressed. The prefix byte decides which serialization
    /// the key keeps using.
    pub fn from_der(bytes: &[u8], network: Option<Arc<Network>>) -> Result<Self> {
        let compressed = match bytes.len() {
            COMPRESSED_SIZE => true,
            UNCOMPRESSED_SIZE => false,
            sz => return Err(Error::InvalidLength(sz)),
        };
        let point = secp256k1::PublicKey::from_slice(bytes).map_err(|_| Error::PointNotOnCurve)?;
        Ok(PublicKey {
            point: point,
            compressed: compressed,
            network: network.unwrap_or_else(networks::default_network),
        })
    }

    pub fn from_hex(hex_str: &str, network: Option<Arc<Network>>) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::from_der(&bytes, network)
    }

    /// build from raw affine coordinates; the result serializes
    /// compressed.
    pub fn from_x_y(x: &[u8; 32], y: &[u8; 32], network: Option<Arc<Network>>) -> Result<Self> {
        let mut bytes = [0u8; UNCOMPRESSED_SIZE];
        bytes[0] = 0x04;
        bytes[1..33].copy_from_slice(x);
        bytes[33..].copy_from_slice(y);
        let point = secp256k1::PublicKey::from_slice(&bytes).map_err(|_| Error::PointNotOnCurve)?;
        Ok(PublicKey {
            point: point,
            compressed: true,
            network: network.unwrap_or_else(networks::default_network),
        })
    }

    /// serialize the point, honoring the compression flag.
    pub fn to_der(&self) -> Vec<u8> {
        if self.compressed {
            self.point.serialize().to_vec()
        } else {
            self.point.serialize_uncompressed().to_vec()
        }
    }

    /// the 33 byte compressed encoding, whatever the compression flag.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_SIZE] {
        self.point.serialize()
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }

    pub fn point(&self) -> &secp256k1::PublicKey {
        &self.point
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.to_der()))
    }
}
impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.to_der()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // the generator point in both encodings
    const G_COMPRESSED: &'static str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_UNCOMPRESSED: &'static str =
        "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
         483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    #[test]
    fn der_round_trip_compressed() {
        let key = PublicKey::from_hex(G_COMPRESSED, None).unwrap();
        assert!(key.is_compressed());
        assert_eq!(hex::encode(&key.to_der()), G_COMPRESSED);
        assert!(Arc::ptr_eq(key.network(), &networks::default_network()));
    }

    #[test]
    fn der_round_trip_uncompressed() {
        let key = PublicKey::from_hex(G_UNCOMPRESSED, None).unwrap();
        assert!(!key.is_compressed());
        assert_eq!(hex::encode(&key.to_der()), G_UNCOMPRESSED);
        // both encodings name the same point
        let compressed = PublicKey::from_hex(G_COMPRESSED, None).unwrap();
        assert_eq!(key.point(), compressed.point());
    }

    #[test]
    fn from_x_y_generator() {
        let x = hex::decode("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
            .unwrap();
        let y = hex::decode("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8")
            .unwrap();
        let mut xa = [0u8; 32];
        let mut ya = [0u8; 32];
        xa.copy_from_slice(&x);
        ya.copy_from_slice(&y);
        let key = PublicKey::from_x_y(&xa, &ya, None).unwrap();
        assert_eq!(hex::encode(&key.to_der()), G_COMPRESSED);
    }

    #[test]
    fn point_off_curve_is_rejected() {
        // x equal to the field prime cannot encode a point
        let bad = "02fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
        match PublicKey::from_hex(bad, None) {
            Err(Error::PointNotOnCurve) => (),
            other => panic!("expected off curve rejection, got {:?}", other),
        }
    }

    #[test]
    fn bad_lengths_are_rejected() {
        match PublicKey::from_der(&[2u8; 32], None) {
            Err(Error::InvalidLength(32)) => (),
            other => panic!("expected length rejection, got {:?}", other),
        }
    }
}
