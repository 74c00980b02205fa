use crate::base::Base;
use crate::error::CodecError;

/// Protospacer length this codec is specialized for.
pub const GUIDE_LEN: usize = 20;

/// Sentinel for a guide whose protospacer contained an `N`. Cannot arise
/// from any legal encoding: bits [41..64) of a legal word are always zero.
pub const ERROR_WORD: u64 = u64::MAX;

/// Bit position of the `pam_right` strand flag.
pub const PAM_RIGHT_BIT: u32 = 2 * GUIDE_LEN as u32;

/// Mask isolating the 40 protospacer bits, i.e. `(1 << 40) - 1`.
#[must_use]
pub fn pam_mask(guide_len: usize) -> u64 {
    (1u64 << (2 * guide_len)) - 1
}

/// Mask for the default 20-nt protospacer.
pub const PAM_OFF: u64 = (1u64 << PAM_RIGHT_BIT) - 1;

/// Encode a 20-nt protospacer plus strand flag into a 64-bit guide word.
///
/// An `N` anywhere in `seq` is not a [`CodecError`]: it yields the reserved
/// [`ERROR_WORD`], per the "stored guides participate in iteration but never
/// match" contract.
///
/// # Errors
/// Returns [`CodecError::WrongLength`] if `seq` is not exactly
/// [`GUIDE_LEN`] characters, or [`CodecError::InvalidBase`] if it contains a
/// character outside `A/C/G/T/N`.
pub fn encode(seq: &str, pam_right: bool) -> Result<u64, CodecError> {
    let len = seq.chars().count();
    if len != GUIDE_LEN {
        return Err(CodecError::WrongLength { expected: GUIDE_LEN, got: len });
    }

    let mut bits: u64 = u64::from(pam_right);
    for base in seq.chars() {
        if base == 'N' {
            return Ok(ERROR_WORD);
        }
        let base = Base::try_from(base)?;
        bits = (bits << 2) | base.bits();
    }
    Ok(bits)
}

/// Decode a guide word back into its protospacer and strand flag.
///
/// Returns `None` for [`ERROR_WORD`] (no protospacer to recover).
#[must_use]
pub fn decode(word: u64, guide_len: usize) -> Option<(String, bool)> {
    if word == ERROR_WORD {
        return None;
    }
    let pam_right = (word >> (2 * guide_len)) & 1 == 1;
    let mut seq = String::with_capacity(guide_len);
    for i in (0..guide_len).rev() {
        let sym = (word >> (2 * i)) & 0b11;
        seq.push(Base::from_bits(sym).into());
    }
    Some((seq, pam_right))
}

/// Reverse-complement a packed guide word.
///
/// Complements every 2-bit symbol in the protospacer, reverses their
/// order, and toggles the strand flag. [`ERROR_WORD`] maps to itself: an
/// `N`-bearing guide has no meaningful reverse complement.
#[must_use]
pub fn reverse_complement_bits(word: u64, guide_len: usize) -> u64 {
    if word == ERROR_WORD {
        return ERROR_WORD;
    }
    let mask = pam_mask(guide_len);
    let complemented = (!word) & mask; // XOR each 2-bit symbol with 0b11.

    let mut reversed: u64 = 0;
    for i in 0..guide_len {
        let sym = (complemented >> (2 * i)) & 0b11;
        reversed |= sym << (2 * (guide_len - 1 - i));
    }

    let pam_right = (word >> (2 * guide_len)) & 1;
    let flipped_flag = 1 - pam_right;
    reversed | (flipped_flag << (2 * guide_len))
}

/// Population count, exposed as the scoring primitive the scan kernel uses
/// after masking and XOR.
#[must_use]
pub fn popcount(word: u64) -> u32 {
    word.count_ones()
}

/// Fold a masked XOR difference down to true symbol-Hamming distance: each
/// differing 2-bit base contributes exactly one set bit, instead of the one
/// or two raw bits a 2-bit XOR can produce.
#[must_use]
pub fn symbol_hamming_distance(diff: u64) -> u32 {
    let folded = (diff | (diff >> 1)) & 0x5555_5555_5555_5555;
    popcount(folded)
}
