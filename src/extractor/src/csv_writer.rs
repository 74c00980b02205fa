use std::{fs::File, io::{BufWriter, Write}, path::Path};

use crate::{error::ExtractorError, record::GuideRecord};

/// Thin buffered writer for the extractor's CSV output. One [`GuideRecord`]
/// per line, no header.
pub struct CsvWriter {
    sink: BufWriter<File>,
}

impl CsvWriter {
    pub fn create(path: &Path) -> Result<Self, ExtractorError> {
        let file = File::create(path)
            .map_err(|e| ExtractorError::CreateOutput(path.to_path_buf(), e))?;
        Ok(Self { sink: BufWriter::new(file) })
    }

    pub fn write_record(&mut self, record: &GuideRecord) -> Result<(), ExtractorError> {
        writeln!(self.sink, "{}", record.to_csv_row())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ExtractorError> {
        self.sink.flush()?;
        Ok(())
    }
}
