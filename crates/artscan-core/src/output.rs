//! Table output for the finalized record set.
//!
//! Degraded records keep every column: a missing dimensional value is an
//! empty CSV field or a JSON `null`, never a zero and never a dropped
//! column. That is the contract downstream consumers depend on.

use std::io::Write;

use crate::error::Result;
use crate::types::{ImageCollection, ImageRecord};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Single pretty-printed JSON array
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "jsonl" | "jsonlines" | "ndjson" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// Writes a finalized collection as a table.
pub struct TableWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer over `writer`.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write the whole collection in the configured format.
    pub fn write_collection(&mut self, collection: &ImageCollection) -> Result<()> {
        match self.format {
            OutputFormat::Csv => self.write_csv(collection),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, collection)?;
                writeln!(self.writer)?;
                Ok(())
            }
            OutputFormat::JsonLines => {
                for record in collection {
                    serde_json::to_writer(&mut self.writer, record)?;
                    writeln!(self.writer)?;
                }
                Ok(())
            }
        }
    }

    fn write_csv(&mut self, collection: &ImageCollection) -> Result<()> {
        let mut csv = csv::Writer::from_writer(&mut self.writer);
        csv.write_record(["filename", "height", "width", "channels", "file_size"])?;
        for record in collection {
            csv.write_record(csv_row(record))?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn csv_row(record: &ImageRecord) -> [String; 5] {
    [
        record.filename.clone(),
        opt_field(record.height),
        opt_field(record.width),
        opt_field(record.channels),
        record.file_size.to_string(),
    ]
}

/// Empty field is the missing-value marker.
fn opt_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
