//! Bit-packing for 20-nt CRISPR protospacers.
//!
//! A guide is stored as a single `u64`: the low 40 bits hold ten... no,
//! twenty 2-bit bases (`A=00 C=01 G=10 T=11`), bit 40 holds the `pam_right`
//! strand flag, and bits 41-63 are reserved zero. Guides containing an `N`
//! collapse to the reserved [`ERROR_WORD`] sentinel instead of erroring,
//! since they still need to occupy a slot in the index.

mod base;
mod error;
mod text;
mod word;

pub use base::Base;
pub use error::CodecError;
pub use text::reverse_complement_text;
pub use word::{
    decode, encode, pam_mask, popcount, reverse_complement_bits, symbol_hamming_distance,
    ERROR_WORD, GUIDE_LEN, PAM_OFF, PAM_RIGHT_BIT,
};
