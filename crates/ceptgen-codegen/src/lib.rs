pub mod keys;
pub mod selector;
pub mod stringify;
pub mod writer;

pub use stringify::{
    INDENT, after_all_steps, before_all_steps, stringify, stringify_single_step, stringify_step,
};
pub use writer::LineWriter;

use ceptgen_common::diagnostics::Diagnostics;
use ceptgen_common::schema::{self, ParseError};

/// Convert raw recording JSON into a CodeceptJS scenario.
///
/// Empty input is a recoverable no-result case: it is reported once and
/// yields `Ok(None)` without touching the parser. Malformed JSON surfaces as
/// a `ParseError`; everything downstream of a successful parse degrades
/// per-step instead of failing.
pub fn convert_recording(
    content: &str,
    diags: &mut Diagnostics,
) -> Result<Option<String>, ParseError> {
    if content.is_empty() {
        diags.warn("no recording found, create and export a recording before trying again");
        return Ok(None);
    }

    let flow = schema::parse_recording(content)?;
    Ok(Some(stringify::stringify(&flow, diags)))
}
