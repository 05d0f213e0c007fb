//! The BAC wallet core library.
//!
//! This crate provides the deterministic key material a wallet needs:
//!
//! * BIP39 mnemonics: entropy to phrase, phrase validation and seed
//!   stretching (see [`bip39`]);
//! * hierarchical deterministic extended keys and their checksummed
//!   Base58 text form (see [`hdwallet`]);
//! * the private/public key value objects (see [`privatekey`] and
//!   [`publickey`]);
//! * the network parameter registry supplying the version bytes every
//!   key format depends on (see [`networks`]).
//!
//! Elliptic curve arithmetic is delegated to the `secp256k1` crate and
//! hashing to `cryptoxide`/`ripemd160`; this crate owns the byte layouts,
//! the checksum algebra and the validation rules.

#[macro_use]
extern crate log;

extern crate bip39 as bip39_dict;
extern crate bs58;
extern crate cryptoxide;
extern crate hex;
extern crate once_cell;
extern crate rand;
extern crate ripemd160;
extern crate secp256k1;
extern crate unicode_normalization;

#[cfg(test)]
#[macro_use]
extern crate lazy_static;

pub mod util;
pub mod hash;
pub mod networks;
pub mod bip39;
pub mod privatekey;
pub mod publickey;
pub mod hdwallet;
