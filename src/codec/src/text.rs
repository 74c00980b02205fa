use crate::error::CodecError;

/// Reverse-complement a DNA string. `N` maps to `N`; any other character
/// outside `A/C/G/T/N` is rejected.
///
/// # Errors
/// Returns [`CodecError::InvalidBase`] if `seq` contains a character other
/// than `A`, `C`, `G`, `T` or `N`.
pub fn reverse_complement_text(seq: &str) -> Result<String, CodecError> {
    seq.chars()
        .rev()
        .map(|base| match base {
            'A' => Ok('T'),
            'T' => Ok('A'),
            'C' => Ok('G'),
            'G' => Ok('C'),
            'N' => Ok('N'),
            other => Err(CodecError::InvalidBase(other)),
        })
        .collect()
}
