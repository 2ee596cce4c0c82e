// tests/unit_blame.rs
//! Filesystem-facing tests for the real `git blame` resolver.

use tsblame_core::blame::{AuthorResolver, BlameError, GitBlame};

#[test]
fn missing_path_short_circuits_before_spawning() {
    let err = GitBlame
        .resolve("tests/fixtures/does_not_exist.ts", "3")
        .expect_err("missing file must be an error");
    match err {
        BlameError::FileNotFound(path) => {
            assert!(path.ends_with("does_not_exist.ts"));
        }
        other => panic!("expected FileNotFound, got {other}"),
    }
}

#[test]
fn untracked_file_is_an_execution_error() {
    // A file outside any repository exists on disk, so the resolver gets
    // past the existence check and git blame itself fails.
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("orphan.ts");
    std::fs::write(&file, "const x: number = 1;\n").expect("write fixture");

    let path = file.to_string_lossy().into_owned();
    let err = GitBlame
        .resolve(&path, "1")
        .expect_err("blame outside a repo must fail");
    assert!(matches!(err, BlameError::Execution { .. }), "got {err}");
}
