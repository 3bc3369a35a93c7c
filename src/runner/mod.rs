// Runner for the call-style examples
// Author: Gabriel Demetrios Lafis

mod styles;

pub use styles::*;

use std::io::Write;

use log::info;

use crate::data::UserRecord;
use crate::processing::{ProcessingError, RunSummary};
use crate::utils::{AppError, AppResult};

/// Run each style in order, writing a blank line and the style's header
/// before its results
pub fn run_examples<W: Write>(
    styles: &[CallStyle],
    records: &[UserRecord],
    out: &mut W,
) -> Result<Vec<RunSummary>, ProcessingError> {
    let mut summaries = Vec::with_capacity(styles.len());

    for style in styles {
        writeln!(out)?;
        writeln!(out, "{}", style.header())?;

        let summary = style.run(records, out)?;
        summaries.push(summary);
    }

    out.flush()?;
    info!("Ran {} examples over {} records", summaries.len(), records.len());

    Ok(summaries)
}

/// Turn example numbers into styles; an empty list selects every style
pub fn resolve_styles(numbers: &[u8]) -> AppResult<Vec<CallStyle>> {
    if numbers.is_empty() {
        return Ok(CallStyle::all().to_vec());
    }

    numbers
        .iter()
        .map(|&number| {
            CallStyle::from_number(number).ok_or_else(|| {
                AppError::Config(format!("Unknown example style {}, expected 1 to 5", number))
            })
        })
        .collect()
}
