// Filter stage for the record pipeline
// Author: Gabriel Demetrios Lafis

use crate::data::UserRecord;
use super::{Stage, StageType};

/// Boxed record predicate
pub type Predicate = Box<dyn Fn(&UserRecord) -> bool + Send + Sync>;

/// Check whether a gamer tag has a space somewhere after its first character
///
/// Only the first space is looked at: a tag that starts with a space is
/// rejected even when it contains more spaces later on.
pub fn has_space(user: &UserRecord) -> bool {
    user.gamer_tag().find(' ').map_or(false, |index| index > 0)
}

/// Keep records matching a predicate
pub struct FilterStage {
    name: String,
    predicate: Predicate,
}

impl FilterStage {
    /// Create a new filter stage with a predicate function
    pub fn new<F>(name: &str, predicate: F) -> Self
    where
        F: Fn(&UserRecord) -> bool + Send + Sync + 'static,
    {
        FilterStage {
            name: name.to_string(),
            predicate: Box::new(predicate),
        }
    }

    /// Create a filter that keeps records whose gamer tag has an inner space
    pub fn has_space() -> Self {
        Self::new("has_space", has_space)
    }

    /// Create a filter that keeps records whose gamer tag contains a substring
    pub fn tag_contains(substring: &str) -> Self {
        let substring = substring.to_string();
        Self::new(
            &format!("tag_contains_{}", substring),
            move |user| user.gamer_tag().contains(&substring),
        )
    }

    /// Evaluate the predicate for a record
    pub fn matches(&self, user: &UserRecord) -> bool {
        (self.predicate)(user)
    }
}

impl Stage for FilterStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn stage_type(&self) -> StageType {
        StageType::Filter
    }
}
