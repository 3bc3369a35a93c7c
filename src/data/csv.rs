// CSV record source implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;

use super::{DataError, DataSource, SourceType, UserRecord};
use crate::utils::validate_records;

/// CSV record source
///
/// The file must start with a `gamerTag,realName` header row.
pub struct CsvSource {
    path: PathBuf,
    name: String,
    delimiter: u8,
}

impl CsvSource {
    /// Create a new comma-delimited CSV record source
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        CsvSource {
            name: path.to_string_lossy().to_string(),
            path,
            delimiter: b',',
        }
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse records from any reader
    pub fn parse_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<UserRecord>, DataError> {
        let mut csv_reader = ::csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(::csv::Trim::None)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: UserRecord = result?;
            records.push(record);
        }

        validate_records(&records)?;
        Ok(records)
    }
}

impl DataSource for CsvSource {
    fn read(&self) -> Result<Vec<UserRecord>, DataError> {
        let file = File::open(&self.path)?;
        let records = Self::parse_reader(BufReader::new(file), self.delimiter)?;

        debug!("Read {} records from {}", records.len(), self.name);
        Ok(records)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source_type(&self) -> SourceType {
        SourceType::Csv
    }
}
