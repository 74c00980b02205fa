use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEntity {
    File,
    Directory,
}

impl std::fmt::Display for FileEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("{0} {1:?} does not exist")]
    MissingFileEntity(FileEntity, PathBuf),

    #[error("{1:?} is not a {0}")]
    InvalidFileEntity(FileEntity, PathBuf),

    #[error("{0:?} already exists. Use --overwrite to force.")]
    CannotOverwrite(PathBuf),

    #[error("failed to serialize command line arguments")]
    Serialize(#[from] serde_yaml::Error),
}
