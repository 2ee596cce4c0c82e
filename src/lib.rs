//! Attributes tsc compiler errors to the git authors of the offending lines.
//!
//! The whole crate is one linear pipeline: sanitize a stdin line, match it
//! against the fixed tsc error pattern, `git blame` the reported line, and
//! tally errors per author. The bin renders the sorted table at end of input.

pub mod blame;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod sanitize;
pub mod tally;
