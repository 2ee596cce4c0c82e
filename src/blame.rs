// src/blame.rs
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;
use thiserror::Error;

/// `--line-porcelain` prints one `author <name>` line per blamed line.
/// `author-mail` / `author-time` share the prefix but not the whitespace.
static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^author\s+(.*)").unwrap_or_else(|_| panic!("Invalid Regex")));

#[derive(Debug, Error)]
pub enum BlameError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("git blame failed for {path}:{line}: {stderr}")]
    Execution {
        path: String,
        line: String,
        /// Trimmed stderr with newlines collapsed to spaces.
        stderr: String,
    },

    #[error("error scanning git blame output for {1}:{2}: {0}")]
    Scan(String, String, String),
}

/// Resolves a file/line pair to the author who last touched that line.
///
/// `Ok(Some(author))` is a successful attribution; `Ok(None)` means the
/// lookup ran but produced no author field — a "no attribution available"
/// result, deliberately distinct from the error cases.
pub trait AuthorResolver {
    /// # Errors
    /// Returns [`BlameError`] if the file is missing, the blame command
    /// exits non-zero, or its output cannot be scanned.
    fn resolve(&self, path: &str, line: &str) -> Result<Option<String>, BlameError>;
}

/// The real resolver: one `git blame` subprocess per lookup, scoped to a
/// single line. No caching, no batching — callers are expected to be cheap.
#[derive(Debug, Default)]
pub struct GitBlame;

impl AuthorResolver for GitBlame {
    fn resolve(&self, path: &str, line: &str) -> Result<Option<String>, BlameError> {
        if !Path::new(path).exists() {
            return Err(BlameError::FileNotFound(PathBuf::from(path)));
        }

        let range = format!("{line},{line}");
        let output = Command::new("git")
            .args(["blame", "-L", range.as_str(), "--line-porcelain", path])
            .output()
            .map_err(|e| BlameError::Execution {
                path: path.to_string(),
                line: line.to_string(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BlameError::Execution {
                path: path.to_string(),
                line: line.to_string(),
                stderr: collapse(&stderr),
            });
        }

        Ok(scan_author_bytes(&output.stdout))
    }
}

/// Scans raw porcelain output for the author field.
///
/// Git emits author names verbatim, so old repos can carry non-UTF-8 bytes;
/// those are decoded lossily rather than failing the lookup.
#[must_use]
pub fn scan_author_bytes(porcelain: &[u8]) -> Option<String> {
    scan_author(&String::from_utf8_lossy(porcelain))
}

/// Finds the first `author <name>` line in porcelain output.
#[must_use]
pub fn scan_author(porcelain: &str) -> Option<String> {
    porcelain
        .lines()
        .find_map(|l| AUTHOR_RE.captures(l))
        .map(|caps| caps[1].trim().to_string())
}

fn collapse(stderr: &str) -> String {
    stderr.trim().replace('\n', " ")
}
