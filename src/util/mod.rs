pub mod base58check;
pub mod bits;
