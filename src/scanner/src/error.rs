use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("failed to open index file {0:?}")]
    OpenIndex(std::path::PathBuf, #[source] std::io::Error),

    #[error("failed to memory-map index file {0:?}")]
    MapIndex(std::path::PathBuf, #[source] std::io::Error),

    #[error("header is malformed or carries an unsupported version (magic={magic}, version={version})")]
    InvalidHeader { magic: u8, version: u32 },

    #[error("index file is too short to hold a header and metadata record ({got} bytes)")]
    Truncated { got: usize },

    #[error("metadata declares {declared} guides but the file holds {actual}")]
    GuideCountMismatch { declared: u64, actual: usize },

    #[error("guide array is not a whole number of 8-byte words ({0} trailing bytes)")]
    MisalignedGuideArray(usize),

    #[error(transparent)]
    Codec(#[from] codec::CodecError),
}
