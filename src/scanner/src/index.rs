use std::{fs::File, path::Path};

use log::info;
use memmap2::Mmap;

use indexer::{FileHeader, Metadata};

use crate::error::ScannerError;

const PADDING_LEN: usize = 3;

/// Either a memory-mapped or fully-owned backing buffer for the guide array.
/// Both expose the same `&[u8]` view over the array bytes.
enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Backing {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Backing::Mapped(mmap) => mmap,
            Backing::Owned(bytes) => bytes,
        }
    }
}

/// A loaded binary guide index: validated header and metadata, plus the
/// guide array viewed as `&[u64]`. Immutable for the lifetime of a scan.
pub struct GuideIndex {
    backing: Backing,
    pub metadata: Metadata,
    array_offset: usize,
}

impl GuideIndex {
    /// Memory-map `path` read-only. Preferred when the index may be larger
    /// than comfortably fits in RAM, or is shared across concurrent scans.
    pub fn open_mapped(path: &Path) -> Result<Self, ScannerError> {
        let file = File::open(path).map_err(|e| ScannerError::OpenIndex(path.to_path_buf(), e))?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ScannerError::MapIndex(path.to_path_buf(), e))?;
        Self::from_backing(Backing::Mapped(mmap))
    }

    /// Read `path` fully into an owned buffer.
    pub fn open_owned(path: &Path) -> Result<Self, ScannerError> {
        let bytes = std::fs::read(path).map_err(|e| ScannerError::OpenIndex(path.to_path_buf(), e))?;
        Self::from_backing(Backing::Owned(bytes))
    }

    fn from_backing(backing: Backing) -> Result<Self, ScannerError> {
        let bytes = backing.as_bytes();
        let prefix_len = FileHeader::SIZE + Metadata::SIZE;
        if bytes.len() < prefix_len {
            return Err(ScannerError::Truncated { got: bytes.len() });
        }

        let header = FileHeader::read(&bytes[..FileHeader::SIZE])
            .map_err(|_| ScannerError::InvalidHeader { magic: bytes[0], version: 0 })?;
        if !header.is_valid() {
            return Err(ScannerError::InvalidHeader { magic: header.magic, version: header.version });
        }

        let metadata = Metadata::read(&bytes[FileHeader::SIZE..prefix_len])
            .map_err(|_| ScannerError::Truncated { got: bytes.len() })?;

        let array_offset = prefix_len + PADDING_LEN;
        let array_bytes = bytes.len().saturating_sub(array_offset);
        if array_bytes % 8 != 0 {
            return Err(ScannerError::MisalignedGuideArray(array_bytes % 8));
        }
        let actual = array_bytes / 8;
        if actual as u64 != metadata.n_sequences {
            return Err(ScannerError::GuideCountMismatch { declared: metadata.n_sequences, actual });
        }

        info!(
            "Loaded index: {} guides, assembly {:?} ({:?})",
            metadata.n_sequences, metadata.assembly, metadata.species_name
        );

        Ok(Self { backing, metadata, array_offset })
    }

    /// The guide array as `&[u64]`, little-endian words interpreted
    /// natively. Safe because the backing buffer is immutable and
    /// `array_offset` is validated 8-byte aligned relative to the array's
    /// own start (the buffer itself need not be 8-byte aligned in memory;
    /// reads are performed value-by-value to sidestep alignment).
    #[must_use]
    pub fn guides(&self) -> Vec<u64> {
        let bytes = &self.backing.as_bytes()[self.array_offset..];
        bytes
            .chunks_exact(8)
            .map(|chunk| u64::from_le_bytes(chunk.try_into().expect("chunks_exact(8) yields 8 bytes")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexer::build_index;
    use indexer::IndexConfig;

    fn sample_index(dir: &Path) -> std::path::PathBuf {
        let csv = dir.join("in.csv");
        std::fs::write(&csv, "1,1,AAAAAAAAAAAAAAAAAAAAAGG,1\n2,2,NNNNNNNNNNNNNNNNNNNNAGG,1\n").unwrap();
        let output = dir.join("out.bin");
        let config = IndexConfig {
            species: "Human".to_string(),
            assembly: "GRCh38".to_string(),
            offset: 0,
            species_id: 0,
            guide_len: 20,
            pam_len: 3,
            legacy_mode: false,
        };
        build_index(&[csv], &output, &config).unwrap();
        output
    }

    #[test]
    fn owned_and_mapped_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_index(dir.path());

        let owned = GuideIndex::open_owned(&path).unwrap();
        let mapped = GuideIndex::open_mapped(&path).unwrap();
        assert_eq!(owned.guides(), mapped.guides());
        assert_eq!(owned.metadata.n_sequences, 2);
        assert_eq!(owned.guides()[1], codec::ERROR_WORD);
    }

    #[test]
    fn rejects_truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bin");
        std::fs::write(&path, [0u8; 4]).unwrap();
        assert!(matches!(GuideIndex::open_owned(&path), Err(ScannerError::Truncated { .. })));
    }
}
