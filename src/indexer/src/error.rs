use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("record '{record}' contains {got} columns, expected {expected}")]
    ColumnCountMismatch { record: String, got: usize, expected: usize },

    #[error("record '{record}' has sequence_length {got}, expected {expected}")]
    SequenceLengthMismatch { record: String, got: usize, expected: usize },

    #[error("record '{0}' has a malformed position field")]
    MalformedPosition(String),

    #[error("record '{0}' has a malformed pam_right field (must be 0 or 1)")]
    MalformedPamRight(String),

    #[error("record '{0}' has a malformed species_id field")]
    MalformedSpeciesId(String),

    #[error("species_name {0:?} exceeds 30 bytes once encoded")]
    SpeciesNameTooLong(String),

    #[error("assembly {0:?} exceeds 30 bytes once encoded")]
    AssemblyTooLong(String),

    #[error("failed to read input CSV {0:?}")]
    OpenInput(std::path::PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Codec(#[from] codec::CodecError),
}
