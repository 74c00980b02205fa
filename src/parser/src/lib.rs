//! Command line interface for the `crispr-index` binary: four subcommands
//! (`extract`, `index`, `search`, `scan`) sharing global verbosity flags.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use log::info;
use serde::Serialize;

mod error;
pub use error::{FileEntity, ParserError};

#[derive(Parser, Debug, Serialize)]
#[command(name = "crispr-index", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Set the verbosity level (-v -vv -vvv -vvvv).
    ///
    /// 0: Error | 1: Warn | 2: Info | 3: Debug | 4+: Trace. Overridden by
    /// --quiet.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable warnings; only errors are printed.
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Log the parsed arguments as YAML at info level.
    ///
    /// # Errors
    /// Returns [`ParserError::Serialize`] if `serde_yaml` fails to render
    /// `self`.
    pub fn serialize(&self) -> Result<(), ParserError> {
        let serialized = serde_yaml::to_string(self)?;
        info!("\n---- Command line args ----\n{serialized}\n---");
        Ok(())
    }
}

#[derive(Subcommand, Debug, Serialize)]
pub enum Commands {
    /// Stream a reference FASTA and emit one CSV record per PAM-adjacent
    /// protospacer candidate on either strand.
    Extract {
        /// Input reference FASTA.
        #[arg(short, long, value_parser = valid_input_file)]
        reference: PathBuf,

        /// Output CSV path.
        #[arg(short, long)]
        output: PathBuf,

        /// PAM sequence to search for, e.g. "NGG".
        #[arg(short, long, default_value = "NGG")]
        pam: String,

        /// Allow non-ACGT characters in the PAM region and append a
        /// species id column to each output row.
        #[arg(long)]
        legacy: bool,

        /// Species id to tag every emitted record with. Only takes effect
        /// when `--legacy` is set, in which case it defaults to 0.
        #[arg(long)]
        species_id: Option<u8>,

        /// Overwrite `output` if it already exists.
        #[arg(short = 'w', long)]
        overwrite: bool,
    },

    /// Consume one or more extractor CSV files and serialize a binary
    /// guide index.
    Index {
        /// Extractor CSV files, processed in order.
        #[arg(required = true, num_args = 1.., value_parser = valid_input_file)]
        inputs: Vec<PathBuf>,

        /// Output binary index path.
        #[arg(short, long)]
        output: PathBuf,

        /// Species name, stored in the index metadata.
        #[arg(long, default_value = "Unknown")]
        species: String,

        /// Genome assembly name, stored in the index metadata.
        #[arg(long, default_value = "Unknown")]
        assembly: String,

        /// Offset added to 1-based ids when reporting results.
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Species id, stored in the index metadata.
        #[arg(long, default_value_t = 0)]
        species_id: u8,

        /// Protospacer length in nucleotides.
        #[arg(long, default_value_t = 20)]
        guide_len: u8,

        /// PAM length in nucleotides.
        #[arg(long, default_value_t = 3)]
        pam_len: u8,

        /// Parse five-column CSV rows (with a trailing species id column).
        #[arg(long)]
        legacy: bool,

        /// Overwrite `output` if it already exists.
        #[arg(short = 'w', long)]
        overwrite: bool,
    },

    /// Exact-match a query sequence against an index, printing 1-based ids.
    Search {
        /// Binary guide index to search.
        #[arg(short, long, value_parser = valid_input_file)]
        index: PathBuf,

        /// 20-nt query sequence.
        sequence: String,
    },

    /// Off-target scan a query sequence against an index, printing the
    /// 5-bucket distance histogram and the matching id list.
    Scan {
        /// Binary guide index to scan.
        #[arg(short, long, value_parser = valid_input_file)]
        index: PathBuf,

        /// 20-nt query sequence.
        sequence: String,
    },
}

fn validate_entity(path: &Path, entity: FileEntity) -> Result<(), ParserError> {
    if !path.exists() {
        return Err(ParserError::MissingFileEntity(entity, path.to_path_buf()));
    }
    let valid = match entity {
        FileEntity::File => path.is_file(),
        FileEntity::Directory => path.is_dir(),
    };
    if valid {
        Ok(())
    } else {
        Err(ParserError::InvalidFileEntity(entity, path.to_path_buf()))
    }
}

fn valid_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    validate_entity(&path, FileEntity::File).map_err(|e| e.to_string())?;
    Ok(path)
}

/// Refuse to clobber an existing output file unless `overwrite` is set,
/// mirroring the teacher's `Common::can_write_file` guard.
///
/// # Errors
/// Returns [`ParserError::CannotOverwrite`] if `path` exists and
/// `overwrite` is `false`.
pub fn check_overwrite(path: &Path, overwrite: bool) -> Result<(), ParserError> {
    if path.exists() && !overwrite {
        return Err(ParserError::CannotOverwrite(path.to_path_buf()));
    }
    Ok(())
}
