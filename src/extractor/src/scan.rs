use std::io::BufRead;

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{error::ExtractorError, pam::Pam, record::GuideRecord, window::Window};
use codec::GUIDE_LEN;

static CHROMOSOME_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">(.*?) dna:chromosome").expect("static regex is valid"));

/// Configuration for one extraction pass over a reference stream.
pub struct ScanConfig {
    pub pam: Pam,
    pub legacy_mode: bool,
    pub species_id: Option<u8>,
}

/// Stream `reference` line by line, maintaining a per-chromosome rolling
/// window, and invoke `emit` for every PAM hit on either strand.
///
/// This is the extractor's core state machine: it holds no state across
/// calls, only across lines within the same call.
pub fn scan<R, F>(reference: R, config: &ScanConfig, mut emit: F) -> Result<usize, ExtractorError>
where
    R: BufRead,
    F: FnMut(&GuideRecord) -> Result<(), ExtractorError>,
{
    let capacity = config.pam.len() + GUIDE_LEN;
    let rc_pam = config.pam.reverse_complement();
    let mut window = Window::new(capacity);
    let mut chromosome = String::new();
    let mut hits = 0usize;

    for (line_no, line) in reference.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            chromosome = CHROMOSOME_HEADER
                .captures(&line)
                .map(|caps| caps[1].to_string())
                .ok_or_else(|| ExtractorError::HeaderUnparsable(line_no + 1, line.clone()))?;
            info!("Processing chromosome {chromosome}...");
            window.reset();
            continue;
        }

        for base in line.trim().bytes() {
            let Some(position) = window.push(base) else { continue };
            let contents = window.contents();

            // Left-PAM strand: protospacer read off the '-' strand, PAM at
            // the window's left edge must match the PAM pattern's reverse
            // complement.
            if rc_pam.matches(&contents, false, config.legacy_mode) {
                let sequence = String::from_utf8_lossy(&contents).into_owned();
                emit(&GuideRecord {
                    chromosome: chromosome.clone(),
                    position,
                    sequence,
                    pam_right: false,
                    species_id: config.species_id,
                })?;
                hits += 1;
            }
            // Right-PAM strand: protospacer read off the '+' strand, PAM at
            // the window's right edge matches the pattern as configured.
            if config.pam.matches(&contents, true, config.legacy_mode) {
                let sequence = String::from_utf8_lossy(&contents).into_owned();
                emit(&GuideRecord {
                    chromosome: chromosome.clone(),
                    position,
                    sequence,
                    pam_right: true,
                    species_id: config.species_id,
                })?;
                hits += 1;
            }
        }
    }
    Ok(hits)
}
