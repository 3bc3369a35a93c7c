// Data module for user records and their sources
// Author: Gabriel Demetrios Lafis

mod csv;
mod json;

pub use self::csv::*;
pub use self::json::*;

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in sample dataset, in the order the pipeline receives it
pub const USERS: &[UserRecord] = &[
    UserRecord::from_static("BrianD", "Brian Doheny"),
    UserRecord::from_static("The Law", "Lawrence Pemberton"),
    UserRecord::from_static("Jenny Matrix", "Jennifer Matthews"),
];

/// A user with a display handle and a full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    gamer_tag: Cow<'static, str>,
    real_name: Cow<'static, str>,
}

impl UserRecord {
    /// Create a new record
    pub fn new(gamer_tag: impl Into<String>, real_name: impl Into<String>) -> Self {
        UserRecord {
            gamer_tag: Cow::Owned(gamer_tag.into()),
            real_name: Cow::Owned(real_name.into()),
        }
    }

    /// Create a record from string literals, usable in constants
    pub const fn from_static(gamer_tag: &'static str, real_name: &'static str) -> Self {
        UserRecord {
            gamer_tag: Cow::Borrowed(gamer_tag),
            real_name: Cow::Borrowed(real_name),
        }
    }

    /// Display handle, may contain whitespace
    pub fn gamer_tag(&self) -> &str {
        &self.gamer_tag
    }

    /// Full name
    pub fn real_name(&self) -> &str {
        &self.real_name
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.gamer_tag, self.real_name)
    }
}

/// Get the built-in sample dataset
pub fn sample_users() -> &'static [UserRecord] {
    USERS
}

/// Represents a source of user records
pub trait DataSource {
    /// Read all records, preserving source order
    fn read(&self) -> Result<Vec<UserRecord>, DataError>;

    /// Get the source name
    fn name(&self) -> &str;

    /// Get the source type
    fn source_type(&self) -> SourceType;
}

/// Represents a source type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Static,
    Json,
    Csv,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SourceType::Static => write!(f, "static"),
            SourceType::Json => write!(f, "json"),
            SourceType::Csv => write!(f, "csv"),
        }
    }
}

/// The built-in sample dataset as a data source
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSource;

impl StaticSource {
    /// Create a new static source
    pub fn new() -> Self {
        StaticSource
    }
}

impl DataSource for StaticSource {
    fn read(&self) -> Result<Vec<UserRecord>, DataError> {
        Ok(USERS.to_vec())
    }

    fn name(&self) -> &str {
        "sample"
    }

    fn source_type(&self) -> SourceType {
        SourceType::Static
    }
}

/// Pick a file source from an explicit format or the file extension
pub fn source_for_path<P: AsRef<Path>>(
    path: P,
    format: Option<&str>,
) -> Result<Box<dyn DataSource>, DataError> {
    let path = path.as_ref();
    let format = match format {
        Some(format) => format.to_lowercase(),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default(),
    };

    match format.as_str() {
        "json" => Ok(Box::new(JsonSource::new(path))),
        "csv" => Ok(Box::new(CsvSource::new(path))),
        other => Err(DataError::NotSupported(format!(
            "record format '{}' for {}",
            other,
            path.display()
        ))),
    }
}

/// Represents an error in the data module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}
