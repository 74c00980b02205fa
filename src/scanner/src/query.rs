use codec::{encode, reverse_complement_bits, GUIDE_LEN};

use crate::error::ScannerError;

/// Both strand encodings of a query sequence, precomputed once per query so
/// the hot scan loop never re-derives them per guide.
///
/// `q1` is the query as if it sat on the `pam_right` strand; `q0` is its
/// reverse complement, as if on the `pam_left` strand. Comparing a stored
/// guide against whichever of the two shares its strand keeps the XOR
/// distance meaningful (see [`crate::offtarget::score_one`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub q1: u64,
    pub q0: u64,
    /// Set when the query sequence contained an `N`. Such a query matches
    /// nothing: [`crate::search_exact`] and [`crate::scan`] both short-circuit
    /// to an empty result rather than comparing against [`codec::ERROR_WORD`],
    /// which would otherwise spuriously match every `N`-bearing stored guide.
    pub contains_n: bool,
}

impl Query {
    /// Build both strand encodings from a 20-nt query sequence.
    ///
    /// A query containing `N` is not an error: it identifies nothing to scan
    /// for, so it is represented as a [`Query`] with `contains_n` set rather
    /// than rejected outright, letting callers report an empty result instead
    /// of failing the whole operation.
    ///
    /// # Errors
    /// Returns [`ScannerError::Codec`] if `sequence` is not exactly
    /// [`GUIDE_LEN`] characters or contains a base outside `A/C/G/T/N`.
    pub fn new(sequence: &str) -> Result<Self, ScannerError> {
        let q1 = encode(sequence, true)?;
        let contains_n = q1 == codec::ERROR_WORD;
        let q0 = if contains_n { codec::ERROR_WORD } else { reverse_complement_bits(q1, GUIDE_LEN) };
        Ok(Self { q1, q0, contains_n })
    }
}
