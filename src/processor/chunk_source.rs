//! Chunked reading of trip records
//!
//! Pulls bounded batches of raw rows from a CSV input in source order. Only
//! one chunk of raw rows is alive at a time; it is dropped once folded.
//!
//! Records are read as bytes. Encoding problems surface per field during
//! normalization, so only read failures end the input.

use crate::error::{Result, TripError};
use crate::models::RawRow;
use crate::normalizer::ColumnMapping;
use csv::{ByteRecordsIntoIter, ReaderBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// A lazily consumed, ordered sequence of raw row chunks
pub trait ChunkSource {
    /// Column positions shared by every row this source yields
    fn column_mapping(&self) -> &ColumnMapping;

    /// Next chunk in source order, `None` once the input is exhausted
    fn next_chunk(&mut self) -> Result<Option<Vec<RawRow>>>;
}

/// Chunk source over CSV text with a header row
pub struct CsvChunkSource<R: Read> {
    records: ByteRecordsIntoIter<R>,
    mapping: ColumnMapping,
    chunk_size: usize,
    rows_read: u64,
    exhausted: bool,
}

impl CsvChunkSource<BufReader<File>> {
    /// Open a CSV file on disk
    pub fn from_path(path: &Path, chunk_size: usize) -> Result<Self> {
        if !path.is_file() {
            return Err(TripError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        debug!("Opened trip input {}", path.display());
        Self::new(BufReader::with_capacity(64 * 1024, file), chunk_size)
    }
}

impl<R: Read> CsvChunkSource<R> {
    /// Wrap a reader, resolving the required columns from its header row
    pub fn new(reader: R, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(TripError::configuration("chunk_size must be at least 1"));
        }

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mapping = ColumnMapping::from_headers(&headers)?;
        debug!(
            "Resolved {} required columns from a {} column header",
            crate::constants::columns::REQUIRED.len(),
            mapping.column_count()
        );

        Ok(Self {
            records: csv_reader.into_byte_records(),
            mapping,
            chunk_size,
            rows_read: 0,
            exhausted: false,
        })
    }

    /// Rows handed out so far
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }
}

impl<R: Read> ChunkSource for CsvChunkSource<R> {
    fn column_mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    fn next_chunk(&mut self) -> Result<Option<Vec<RawRow>>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut chunk = Vec::with_capacity(self.chunk_size.min(crate::constants::DEFAULT_CHUNK_SIZE));
        while chunk.len() < self.chunk_size {
            match self.records.next() {
                Some(record) => {
                    let record = record.inspect_err(|_| self.exhausted = true)?;
                    self.rows_read += 1;
                    chunk.push(RawRow::new(self.rows_read, record));
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }

        Ok((!chunk.is_empty()).then_some(chunk))
    }
}
