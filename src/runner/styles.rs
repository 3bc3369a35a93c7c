// Call styles for building the example pipelines
// Author: Gabriel Demetrios Lafis

use std::fmt;
use std::io::{self, Write};

use crate::data::UserRecord;
use crate::processing::{
    capitalize, consumer_fn, has_space, real_name, ProcessingError, RecordPipeline, RunSummary,
    WriterConsumer,
};

/// The ways the example pipeline's functions can be written
///
/// Every style builds the same filter, projection, transform and consumer;
/// only the way the functions are declared differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallStyle {
    /// Closures with inferred types
    Simple,
    /// Closures with typed parameters
    Intermediate,
    /// Closures with typed parameters and return types
    Advanced,
    /// `fn` items declared inside the builder
    InlineFunctions,
    /// Top-level functions passed by path
    NamedFunctions,
}

impl CallStyle {
    /// All styles, in example order
    pub fn all() -> [CallStyle; 5] {
        [
            CallStyle::Simple,
            CallStyle::Intermediate,
            CallStyle::Advanced,
            CallStyle::InlineFunctions,
            CallStyle::NamedFunctions,
        ]
    }

    /// Look up a style by its example number (1 to 5)
    pub fn from_number(number: u8) -> Option<CallStyle> {
        match number {
            1 => Some(CallStyle::Simple),
            2 => Some(CallStyle::Intermediate),
            3 => Some(CallStyle::Advanced),
            4 => Some(CallStyle::InlineFunctions),
            5 => Some(CallStyle::NamedFunctions),
            _ => None,
        }
    }

    /// Example number of this style
    pub fn number(&self) -> u8 {
        match self {
            CallStyle::Simple => 1,
            CallStyle::Intermediate => 2,
            CallStyle::Advanced => 3,
            CallStyle::InlineFunctions => 4,
            CallStyle::NamedFunctions => 5,
        }
    }

    /// Header line printed before the example's results
    pub fn header(&self) -> &'static str {
        match self {
            CallStyle::Simple => "EXAMPLE 1 - Simple (no types)",
            CallStyle::Intermediate => {
                "EXAMPLE 2 - Intermediate (parameter types but not function types)"
            }
            CallStyle::Advanced => "EXAMPLE 3 - Advanced (parameter types and function types)",
            CallStyle::InlineFunctions => {
                "EXAMPLE 4 - Old school v1 (inline function declarations, no types)"
            }
            CallStyle::NamedFunctions => {
                "EXAMPLE 5 - Old school v2 (calling named functions, with types)"
            }
        }
    }

    /// Build this style's pipeline
    pub fn pipeline(&self) -> RecordPipeline {
        let name = format!("example{}", self.number());

        match self {
            CallStyle::Simple => RecordPipeline::new(
                &name,
                |user| user.gamer_tag().find(' ').map_or(false, |index| index > 0),
                |user| user.real_name().to_string(),
                |user| user.to_uppercase(),
            ),
            CallStyle::Intermediate => RecordPipeline::new(
                &name,
                |user: &UserRecord| user.gamer_tag().find(' ').map_or(false, |index| index > 0),
                |user: &UserRecord| user.real_name().to_string(),
                |user: String| user.to_uppercase(),
            ),
            CallStyle::Advanced => RecordPipeline::new(
                &name,
                |user: &UserRecord| -> bool {
                    user.gamer_tag().find(' ').map_or(false, |index| index > 0)
                },
                |user: &UserRecord| -> String { user.real_name().to_string() },
                |user: String| -> String { user.to_uppercase() },
            ),
            CallStyle::InlineFunctions => {
                fn keep(user: &UserRecord) -> bool {
                    match user.gamer_tag().find(' ') {
                        Some(index) => index > 0,
                        None => false,
                    }
                }
                fn project(user: &UserRecord) -> String {
                    return user.real_name().to_string();
                }
                fn transform(user: String) -> String {
                    return user.to_uppercase();
                }

                RecordPipeline::new(&name, keep, project, transform)
            }
            CallStyle::NamedFunctions => RecordPipeline::new(&name, has_space, real_name, capitalize),
        }
    }

    /// Run this style's pipeline, writing one line per result
    pub fn run<W: Write>(
        &self,
        records: &[UserRecord],
        out: &mut W,
    ) -> Result<RunSummary, ProcessingError> {
        let pipeline = self.pipeline();

        match self {
            CallStyle::Simple => {
                pipeline.run(records, &mut consumer_fn(|user| writeln!(out, "{}", user)))
            }
            CallStyle::Intermediate => pipeline.run(
                records,
                &mut consumer_fn(|user: String| writeln!(out, "{}", user)),
            ),
            CallStyle::Advanced => pipeline.run(
                records,
                &mut consumer_fn(|user: String| -> io::Result<()> { writeln!(out, "{}", user) }),
            ),
            CallStyle::InlineFunctions => {
                fn print_line(out: &mut dyn Write, user: String) -> io::Result<()> {
                    return writeln!(out, "{}", user);
                }

                pipeline.run(records, &mut consumer_fn(|user| print_line(&mut *out, user)))
            }
            CallStyle::NamedFunctions => pipeline.run(records, &mut WriterConsumer::new(out)),
        }
    }
}

impl fmt::Display for CallStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}
