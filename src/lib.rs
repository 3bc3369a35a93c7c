// Record Pipeline
// Author: Gabriel Demetrios Lafis

//! # Record Pipeline
//!
//! Filters a sequence of user records and transforms the survivors through
//! a three-stage pipeline: filter, project, map.
//!
//! ## Features
//!
//! - Built-in sample dataset, plus JSON and CSV record sources
//! - Stages built from closures, `fn` items or named constructors
//! - Lazy iteration or push-style delivery to a consumer
//! - Five call-style examples that all print the same output
//!
//! ## Example
//!
//! ```rust
//! use record_pipeline::{
//!     data::sample_users,
//!     processing::{CollectConsumer, RecordPipeline},
//! };
//!
//! let pipeline = RecordPipeline::reference("example");
//!
//! let mut consumer = CollectConsumer::new();
//! let summary = pipeline.run(sample_users(), &mut consumer).unwrap();
//!
//! assert_eq!(summary.delivered, 2);
//! assert_eq!(
//!     consumer.into_values(),
//!     vec!["LAWRENCE PEMBERTON".to_string(), "JENNIFER MATTHEWS".to_string()]
//! );
//! ```

pub mod data;
pub mod processing;
pub mod runner;
pub mod utils;

// Re-export main types
pub use data::{sample_users, UserRecord, USERS};
pub use processing::{RecordPipeline, RunSummary};
pub use runner::{run_examples, CallStyle};
pub use utils::Config;
