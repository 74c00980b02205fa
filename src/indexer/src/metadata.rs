use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::IndexerError;

/// Fixed-width metadata record following the file header: three `u64`
/// fields, a species id byte, and two 30-byte NUL-padded ASCII strings.
/// Always exactly [`Metadata::SIZE`] bytes on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub n_sequences: u64,
    pub sequence_length: u64,
    pub offset: u64,
    pub species_id: u8,
    pub species_name: String,
    pub assembly: String,
}

impl Metadata {
    /// `u64`×3 (24) + `u8` (1) + two 30-byte strings (60) = 85 bytes.
    pub const SIZE: usize = 85;
    const NAME_FIELD_LEN: usize = 30;

    pub fn write<W: Write>(&self, mut w: W) -> Result<(), IndexerError> {
        w.write_u64::<LittleEndian>(self.n_sequences)?;
        w.write_u64::<LittleEndian>(self.sequence_length)?;
        w.write_u64::<LittleEndian>(self.offset)?;
        w.write_u8(self.species_id)?;
        w.write_all(&pad_field(&self.species_name, Self::NAME_FIELD_LEN)?)?;
        w.write_all(&pad_field(&self.assembly, Self::NAME_FIELD_LEN)?)?;
        Ok(())
    }

    pub fn read<R: Read>(mut r: R) -> Result<Self, IndexerError> {
        let n_sequences = r.read_u64::<LittleEndian>()?;
        let sequence_length = r.read_u64::<LittleEndian>()?;
        let offset = r.read_u64::<LittleEndian>()?;
        let species_id = r.read_u8()?;
        let mut species_name = [0u8; 30];
        r.read_exact(&mut species_name)?;
        let mut assembly = [0u8; 30];
        r.read_exact(&mut assembly)?;
        Ok(Self {
            n_sequences,
            sequence_length,
            offset,
            species_id,
            species_name: unpad_field(&species_name),
            assembly: unpad_field(&assembly),
        })
    }
}

fn pad_field(value: &str, len: usize) -> Result<Vec<u8>, IndexerError> {
    let bytes = value.as_bytes();
    if bytes.len() > len {
        return Err(IndexerError::SpeciesNameTooLong(value.to_string()));
    }
    let mut padded = vec![0u8; len];
    padded[..bytes.len()].copy_from_slice(bytes);
    Ok(padded)
}

fn unpad_field(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
