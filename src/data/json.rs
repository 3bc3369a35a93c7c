// JSON record source implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

use super::{DataError, DataSource, SourceType, UserRecord};
use crate::utils::validate_records;

/// JSON record source
///
/// Reads a top-level array of objects shaped like
/// `{ "gamerTag": "...", "realName": "..." }`.
pub struct JsonSource {
    path: PathBuf,
    name: String,
}

impl JsonSource {
    /// Create a new JSON record source
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        JsonSource {
            name: path.to_string_lossy().to_string(),
            path,
        }
    }

    /// Parse records from a JSON string
    pub fn parse_str(contents: &str) -> Result<Vec<UserRecord>, DataError> {
        let records: Vec<UserRecord> = serde_json::from_str(contents)?;
        validate_records(&records)?;
        Ok(records)
    }
}

impl DataSource for JsonSource {
    fn read(&self) -> Result<Vec<UserRecord>, DataError> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let records: Vec<UserRecord> = serde_json::from_reader(reader)?;
        validate_records(&records)?;

        debug!("Read {} records from {}", records.len(), self.name);
        Ok(records)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source_type(&self) -> SourceType {
        SourceType::Json
    }
}
