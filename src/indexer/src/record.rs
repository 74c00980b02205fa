use crate::error::IndexerError;

/// One parsed input row, ready to be encoded into a guide word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub chromosome: String,
    pub position: u64,
    pub protospacer: String,
    pub pam_right: bool,
}

/// Parse one CSV row of `chromosome, position, sequence, pam_right[, species_id]`
/// and slice the protospacer out of `sequence`, dropping the PAM from
/// whichever side it sits on.
///
/// # Errors
/// Returns [`IndexerError::ColumnCountMismatch`] if the row has neither 4
/// nor 5 columns (depending on `legacy_mode`), or
/// [`IndexerError::SequenceLengthMismatch`] if `sequence` is not exactly
/// `guide_len + pam_len` characters.
pub fn parse_record(
    record: &str,
    guide_len: usize,
    pam_len: usize,
    legacy_mode: bool,
) -> Result<InputRecord, IndexerError> {
    let fields: Vec<&str> = record.split(',').collect();
    let expected = if legacy_mode { 5 } else { 4 };
    if fields.len() != expected {
        return Err(IndexerError::ColumnCountMismatch {
            record: record.to_string(),
            got: fields.len(),
            expected,
        });
    }

    let chromosome = fields[0].to_string();
    let position: u64 = fields[1]
        .parse()
        .map_err(|_| IndexerError::MalformedPosition(record.to_string()))?;
    let sequence = fields[2];
    let pam_right = match fields[3] {
        "1" => true,
        "0" => false,
        _ => return Err(IndexerError::MalformedPamRight(record.to_string())),
    };

    if sequence.len() != guide_len + pam_len {
        return Err(IndexerError::SequenceLengthMismatch {
            record: record.to_string(),
            got: sequence.len(),
            expected: guide_len + pam_len,
        });
    }

    let protospacer = if pam_right {
        sequence[..guide_len].to_string()
    } else {
        sequence[pam_len..].to_string()
    };

    Ok(InputRecord { chromosome, position, protospacer, pam_right })
}
