use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("line {0} starts a new record but does not match '>(.*?) dna:chromosome': {1:?}")]
    HeaderUnparsable(usize, String),

    #[error("failed to open reference file {0:?}")]
    OpenReference(std::path::PathBuf, #[source] std::io::Error),

    #[error("failed to create output CSV {0:?}")]
    CreateOutput(std::path::PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
