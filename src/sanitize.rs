// src/sanitize.rs
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `ESC [ <params> <letter>` — color codes and cursor movement emitted by
/// tsc (and most watch-mode wrappers) when stdout looks like a terminal.
static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Removes every ANSI escape sequence from `line`.
///
/// Total and idempotent: text without escapes is returned borrowed and
/// unchanged, and stripping twice yields the same result as once.
#[must_use]
pub fn strip_ansi(line: &str) -> Cow<'_, str> {
    ANSI_RE.replace_all(line, "")
}
