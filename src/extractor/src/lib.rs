//! Streams a reference FASTA and emits one record per PAM-adjacent
//! protospacer candidate on either strand.

mod csv_writer;
mod error;
mod pam;
mod record;
mod scan;
mod window;

pub use csv_writer::CsvWriter;
pub use error::ExtractorError;
pub use pam::Pam;
pub use record::GuideRecord;
pub use scan::{scan, ScanConfig};
