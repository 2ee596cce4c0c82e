// src/parse.rs
use regex::Regex;
use std::sync::LazyLock;

/// Matches tsc's default error format: `path/to/file.ts(123,45): error TS2322: ...`.
/// The path class covers the characters tsc emits on every platform,
/// including Windows separators, `~`, `@` scoped paths and drive colons.
static TS_ERROR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\w./\\~@%:-]+)\((\d+),(\d+)\):\serror\sTS\d+:")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// File and line extracted from one matched compiler error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDiagnostic {
    /// Path with backslashes normalized to forward slashes.
    pub path: String,
    /// 1-based line number, kept verbatim as text for `git blame -L`.
    pub line: String,
}

/// Parses one sanitized line against the fixed tsc error pattern.
///
/// Returns `None` for anything that is not an error line — blank lines,
/// summary lines, warnings. The column number is matched but discarded.
#[must_use]
pub fn parse_error_line(line: &str) -> Option<ParsedDiagnostic> {
    if line.is_empty() {
        return None;
    }
    let caps = TS_ERROR_RE.captures(line)?;
    Some(ParsedDiagnostic {
        path: caps[1].replace('\\', "/"),
        line: caps[2].to_string(),
    })
}
