use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected a sequence of length {expected}, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("invalid base '{0}' in sequence (expected A, C, G, T or N)")]
    InvalidBase(char),
}
