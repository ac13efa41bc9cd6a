use std::io::Write;

use super::OutputFormat;
use crate::hit::ResolvedHit;

/// Streaming CSV writer for one output table.
///
/// The header is written on construction; each accepted hit then becomes one record,
/// in the order it is handed over.
pub struct RowWriter<W: Write> {
    writer: csv::Writer<W>,
    format: OutputFormat,
    rows_written: usize,
}

impl<W: Write> RowWriter<W> {
    /// Create a writer and emit the header row
    pub fn new(output: W, format: OutputFormat) -> Result<Self, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);
        writer.write_record(format.header())?;
        Ok(Self {
            writer,
            format,
            rows_written: 0,
        })
    }

    /// Append the row for one hit
    pub fn write_hit(&mut self, hit: &ResolvedHit) -> Result<(), csv::Error> {
        self.writer.write_record(self.format.row(hit))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of data rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows and return the underlying output
    pub fn finish(mut self) -> Result<W, std::io::Error> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()))
    }
}
