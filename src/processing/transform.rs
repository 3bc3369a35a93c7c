// Transform stages for the record pipeline
// Author: Gabriel Demetrios Lafis

use crate::data::UserRecord;
use super::{Stage, StageType};

/// Project a record to its real name
pub fn real_name(user: &UserRecord) -> String {
    user.real_name().to_string()
}

/// Uppercase a string using the standard Unicode case mapping
pub fn capitalize(user: String) -> String {
    user.to_uppercase()
}

/// Turn a record into a string value
pub struct ProjectStage {
    name: String,
    projection: Box<dyn Fn(&UserRecord) -> String + Send + Sync>,
}

impl ProjectStage {
    /// Create a new projection stage
    pub fn new<F>(name: &str, projection: F) -> Self
    where
        F: Fn(&UserRecord) -> String + Send + Sync + 'static,
    {
        ProjectStage {
            name: name.to_string(),
            projection: Box::new(projection),
        }
    }

    /// Create a projection to the record's real name
    pub fn real_name() -> Self {
        Self::new("real_name", real_name)
    }

    /// Create a projection to the record's gamer tag
    pub fn gamer_tag() -> Self {
        Self::new("gamer_tag", |user| user.gamer_tag().to_string())
    }

    /// Apply the projection
    pub fn apply(&self, user: &UserRecord) -> String {
        (self.projection)(user)
    }
}

impl Stage for ProjectStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn stage_type(&self) -> StageType {
        StageType::Project
    }
}

/// Map one string value to another
pub struct MapStage {
    name: String,
    func: Box<dyn Fn(String) -> String + Send + Sync>,
}

impl MapStage {
    /// Create a new map stage
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        MapStage {
            name: name.to_string(),
            func: Box::new(func),
        }
    }

    /// Create an uppercasing stage
    pub fn capitalize() -> Self {
        Self::new("capitalize", capitalize)
    }

    /// Create a stage that trims surrounding whitespace
    pub fn trim() -> Self {
        Self::new("trim", |value| value.trim().to_string())
    }

    /// Apply the mapping
    pub fn apply(&self, value: String) -> String {
        (self.func)(value)
    }
}

impl Stage for MapStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn stage_type(&self) -> StageType {
        StageType::Transform
    }
}
