// src/report.rs
use std::fmt::Write as _;

use crate::tally::AuthorTally;

const HEADER: &str = "--- TypeScript Error Report by Author ---";
const SEPARATOR: &str = "---------------------------------------";
const EMPTY_MESSAGE: &str =
    "No TypeScript errors matching the pattern were attributed to authors.";

/// Renders the final per-author table.
///
/// Rows are ordered by count descending, author ascending on ties. The
/// trailing total always equals the number of matched diagnostics.
#[must_use]
pub fn render(tally: &AuthorTally) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{HEADER}");

    if tally.is_empty() {
        let _ = writeln!(out, "{EMPTY_MESSAGE}");
        let _ = writeln!(out, "{SEPARATOR}");
        return out;
    }

    let mut rows: Vec<(&str, u64)> = tally.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut total = 0u64;
    for (author, count) in &rows {
        let _ = writeln!(out, "{author:<40}: {count} errors");
        total += count;
    }
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "Total TypeScript errors attributed: {total}");
    out
}
