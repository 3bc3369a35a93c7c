// Processing module for the record pipeline
// Author: Gabriel Demetrios Lafis

mod consumer;
mod filter;
mod transform;

pub use consumer::*;
pub use filter::*;
pub use transform::*;

use std::fmt;

use log::{debug, info};
use thiserror::Error;

use crate::data::UserRecord;

/// Common behaviour of pipeline stages
pub trait Stage {
    /// Get the stage name
    fn name(&self) -> &str;

    /// Get the stage type
    fn stage_type(&self) -> StageType;
}

/// Represents a stage type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageType {
    Filter,
    Project,
    Transform,
}

impl fmt::Display for StageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StageType::Filter => write!(f, "filter"),
            StageType::Project => write!(f, "project"),
            StageType::Transform => write!(f, "map"),
        }
    }
}

/// Represents an error in the processing module
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Counts for one completed pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pipeline: String,
    pub input: usize,
    pub delivered: usize,
}

/// Filter, project and transform a sequence of records
///
/// Stages run in a fixed order: the filter decides which records go on, the
/// projection turns each kept record into a string, and the transform maps
/// that string to the value handed to the consumer. Output order always
/// follows input order.
pub struct RecordPipeline {
    name: String,
    filter: FilterStage,
    project: ProjectStage,
    transform: MapStage,
}

impl RecordPipeline {
    /// Create a new pipeline from plain functions
    pub fn new<P, T1, T2>(name: &str, predicate: P, project: T1, transform: T2) -> Self
    where
        P: Fn(&UserRecord) -> bool + Send + Sync + 'static,
        T1: Fn(&UserRecord) -> String + Send + Sync + 'static,
        T2: Fn(String) -> String + Send + Sync + 'static,
    {
        Self::from_stages(
            name,
            FilterStage::new("filter", predicate),
            ProjectStage::new("project", project),
            MapStage::new("transform", transform),
        )
    }

    /// Create a new pipeline from named stages
    pub fn from_stages(
        name: &str,
        filter: FilterStage,
        project: ProjectStage,
        transform: MapStage,
    ) -> Self {
        RecordPipeline {
            name: name.to_string(),
            filter,
            project,
            transform,
        }
    }

    /// Create the reference pipeline: keep tags with an inner space, take
    /// the real name, uppercase it
    pub fn reference(name: &str) -> Self {
        Self::from_stages(
            name,
            FilterStage::has_space(),
            ProjectStage::real_name(),
            MapStage::capitalize(),
        )
    }

    /// Get the pipeline name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Describe the stages in execution order
    pub fn describe(&self) -> String {
        let stages: [&dyn Stage; 3] = [&self.filter, &self.project, &self.transform];
        stages
            .iter()
            .map(|stage| format!("{}({})", stage.stage_type(), stage.name()))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Lazily produce the output values for a sequence of records
    pub fn iter<'a>(&'a self, records: &'a [UserRecord]) -> impl Iterator<Item = String> + 'a {
        records
            .iter()
            .filter(move |user| {
                let keep = self.filter.matches(user);
                if !keep {
                    debug!("{}: dropped {}", self.name, user);
                }
                keep
            })
            .map(move |user| self.project.apply(user))
            .map(move |value| self.transform.apply(value))
    }

    /// Collect the output values for a sequence of records
    pub fn process(&self, records: &[UserRecord]) -> Vec<String> {
        self.iter(records).collect()
    }

    /// Run the pipeline, handing every output value to the consumer
    ///
    /// Stops at the first consumer error; values for later records are
    /// never produced.
    pub fn run<C: Consumer + ?Sized>(
        &self,
        records: &[UserRecord],
        consumer: &mut C,
    ) -> Result<RunSummary, ProcessingError> {
        debug!("{}: running {}", self.name, self.describe());

        let mut delivered = 0;
        for value in self.iter(records) {
            consumer.consume(value)?;
            delivered += 1;
        }

        info!(
            "{}: delivered {} of {} records",
            self.name,
            delivered,
            records.len()
        );

        Ok(RunSummary {
            pipeline: self.name.clone(),
            input: records.len(),
            delivered,
        })
    }
}

impl fmt::Debug for RecordPipeline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RecordPipeline")
            .field("name", &self.name)
            .field("stages", &self.describe())
            .finish()
    }
}
