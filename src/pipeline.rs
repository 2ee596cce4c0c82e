// src/pipeline.rs
use std::io::BufRead;

use log::{debug, info, warn};
use thiserror::Error;

use crate::blame::AuthorResolver;
use crate::parse::parse_error_line;
use crate::sanitize::strip_ansi;
use crate::tally::AuthorTally;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input stream itself failed mid-read. Fatal: no report is
    /// produced, since the tally can no longer be trusted to be complete.
    #[error("error reading input: {0}")]
    Input(#[from] std::io::Error),
}

/// End-of-run state: the finished tally plus line counters for the summary.
#[derive(Debug)]
pub struct RunSummary {
    pub tally: AuthorTally,
    /// Every line consumed from the input, matched or not.
    pub lines_read: u64,
    /// Lines the error pattern matched.
    pub lines_matched: u64,
}

/// Drains `input` line by line, attributing each matched error to an author.
///
/// Strictly sequential: one blame lookup completes (or fails) before the
/// next line is read. Resolver failures are recovered locally into sentinel
/// identities and never abort the run.
///
/// # Errors
/// Returns [`PipelineError::Input`] only if reading the stream fails.
pub fn run<R: BufRead>(
    mut input: R,
    resolver: &dyn AuthorResolver,
) -> Result<RunSummary, PipelineError> {
    let mut tally = AuthorTally::new();
    let mut lines_read = 0u64;
    let mut lines_matched = 0u64;

    // Raw bytes, decoded lossily: stray non-UTF-8 bytes in compiler output
    // must not abort the run. Only a real read failure is fatal.
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let raw = String::from_utf8_lossy(&buf);
        debug!("raw line: {raw:?}");

        let line = strip_ansi(&raw);
        if line != raw {
            debug!("stripped line (changed): {line:?}");
        }

        if let Some(diag) = parse_error_line(&line) {
            lines_matched += 1;
            debug!("matched: file {:?} line {:?}", diag.path, diag.line);

            let outcome = resolver.resolve(&diag.path, &diag.line);
            if let Err(e) = &outcome {
                warn!("blame lookup failed for {}:{}: {e}", diag.path, diag.line);
            }
            let identity = tally.attribute(outcome);
            debug!("attributed {}:{} to {identity:?}", diag.path, diag.line);
        }
        lines_read += 1;
    }

    info!("finished reading input: {lines_read} lines processed, {lines_matched} matched the error pattern");

    Ok(RunSummary {
        tally,
        lines_read,
        lines_matched,
    })
}
