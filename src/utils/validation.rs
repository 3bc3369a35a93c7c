// Validation utilities
// Author: Gabriel Demetrios Lafis

use crate::data::{DataError, UserRecord};

/// Validate that a string value is not empty
pub fn validate_not_empty(value: &str, name: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("'{}' cannot be empty", name))
    } else {
        Ok(())
    }
}

/// Validate records read from an external source
///
/// Gamer tags may be anything, including empty; real names must be present.
pub fn validate_records(records: &[UserRecord]) -> Result<(), DataError> {
    for (index, record) in records.iter().enumerate() {
        validate_not_empty(record.real_name(), "realName")
            .map_err(|msg| DataError::Validation(format!("record {}: {}", index, msg)))?;
    }

    Ok(())
}
