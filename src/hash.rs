//! fixed size wrappers around the hash primitives the key formats use.
//!
//! All of these are pure functions with fixed output sizes; the key and
//! mnemonic code builds its checksum algebra on top of them.

use cryptoxide::digest::Digest;
use cryptoxide::hmac::Hmac;
use cryptoxide::mac::Mac;
use cryptoxide::pbkdf2::pbkdf2;
use cryptoxide::sha2::{Sha256, Sha512};

pub const SHA256_SIZE: usize = 32;
pub const SHA512_SIZE: usize = 64;
pub const HASH160_SIZE: usize = 20;

pub fn sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    let mut hasher = Sha256::new();
    let mut out = [0u8; SHA256_SIZE];
    hasher.input(data);
    hasher.result(&mut out);
    out
}

/// double SHA-256, the digest Base58Check checksums are taken from.
pub fn sha256d(data: &[u8]) -> [u8; SHA256_SIZE] {
    sha256(&sha256(data))
}

/// RIPEMD-160 of SHA-256, used for key fingerprints.
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    use ripemd160::{Digest as _, Ripemd160};
    let mut hasher = Ripemd160::new();
    hasher.update(&sha256(data)[..]);
    let digest = hasher.finalize();
    let mut out = [0u8; HASH160_SIZE];
    out.copy_from_slice(&digest[..]);
    out
}

pub fn sha512hmac(key: &[u8], data: &[u8]) -> [u8; SHA512_SIZE] {
    let mut mac = Hmac::new(Sha512::new(), key);
    let mut out = [0u8; SHA512_SIZE];
    mac.input(data);
    mac.raw_result(&mut out);
    out
}

/// PBKDF2 over HMAC-SHA512; the mnemonic seed stretching primitive.
pub fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], iterations: u32, output: &mut [u8]) {
    let mut mac = Hmac::new(Sha512::new(), password);
    pbkdf2(&mut mac, salt, iterations, output);
}
