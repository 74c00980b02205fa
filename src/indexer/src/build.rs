use std::{
    io::{BufRead, BufReader, BufWriter, Write},
    fs::File,
    path::{Path, PathBuf},
};

use log::info;
use tempfile::NamedTempFile;

use codec::encode;

use crate::{error::IndexerError, header::FileHeader, metadata::Metadata, record::parse_record};

/// Caller-supplied fields not derivable from the input CSVs.
pub struct IndexConfig {
    pub species: String,
    pub assembly: String,
    pub offset: u64,
    pub species_id: u8,
    pub guide_len: u8,
    pub pam_len: u8,
    pub legacy_mode: bool,
}

/// Build a binary guide index from one or more extractor CSV files, in
/// argument order (that order defines each guide's 1-based ID).
///
/// No partial index is ever written: every record across every input file
/// is parsed and encoded into an in-memory array before any bytes reach
/// `output`. The array is then serialized to a temporary file in the same
/// directory as `output` and renamed into place; on any error the temporary
/// file is discarded and `output` is left untouched.
pub fn build_index(inputs: &[PathBuf], output: &Path, config: &IndexConfig) -> Result<usize, IndexerError> {
    let guides = read_and_encode(inputs, config)?;

    let dest_dir = output.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dest_dir)?;
    write_index(temp.as_file_mut(), &guides, config)?;
    temp.persist(output).map_err(|e| IndexerError::Io(e.error))?;

    info!("Wrote {} guides to {}", guides.len(), output.display());
    Ok(guides.len())
}

fn read_and_encode(inputs: &[PathBuf], config: &IndexConfig) -> Result<Vec<u64>, IndexerError> {
    let mut guides = Vec::new();
    for path in inputs {
        let file = File::open(path).map_err(|e| IndexerError::OpenInput(path.clone(), e))?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let record = parse_record(&line, config.guide_len as usize, config.pam_len as usize, config.legacy_mode)?;
            let word = encode(&record.protospacer, record.pam_right)?;
            guides.push(word);
        }
    }
    Ok(guides)
}

fn write_index<W: Write>(mut w: W, guides: &[u64], config: &IndexConfig) -> Result<(), IndexerError> {
    FileHeader::current().write(&mut w)?;

    let metadata = Metadata {
        n_sequences: guides.len() as u64,
        sequence_length: u64::from(config.guide_len),
        offset: config.offset,
        species_id: config.species_id,
        species_name: config.species.clone(),
        assembly: config.assembly.clone(),
    };
    metadata.write(&mut w)?;

    w.write_all(&[0u8; 3])?; // pad the array start to an 8-byte boundary.

    let mut buffered = BufWriter::new(w);
    for &guide in guides {
        buffered.write_all(&guide.to_le_bytes())?;
    }
    buffered.flush()?;
    Ok(())
}
