use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

fn set(tokens: &[&str]) -> PatternSet {
    PatternSet::from_tokens(tokens.iter().copied())
}

#[test]
fn exact_name_match() {
    let patterns = set(&["node_modules"]);
    assert!(patterns.is_ignored("node_modules", "node_modules", true));
    assert!(!patterns.is_ignored("src", "src", true));
}

#[test]
fn exact_name_does_not_match_substrings() {
    // `build` must not match the unrelated name `rebuild.txt`.
    let patterns = set(&["build/"]);
    assert!(patterns.is_ignored("build", "build", true));
    assert!(!patterns.is_ignored("rebuild.txt", "rebuild.txt", false));
}

#[test]
fn leading_star_matches_suffix() {
    let patterns = set(&["*.pyc"]);
    assert!(patterns.is_ignored("module.pyc", "src/module.pyc", false));
    assert!(!patterns.is_ignored("module.py", "src/module.py", false));
}

#[test]
fn star_pattern_does_not_match_unrelated_names() {
    // `*.log` must not match `rebuild.txt`.
    let patterns = set(&["*.log"]);
    assert!(patterns.is_ignored("app.log", "app.log", false));
    assert!(!patterns.is_ignored("rebuild.txt", "rebuild.txt", false));
    assert!(!patterns.is_ignored("logbook.md", "logbook.md", false));
}

#[test]
fn rooted_pattern_anchors_to_walk_root() {
    let patterns = set(&["/docs"]);
    assert!(patterns.is_ignored("docs", "docs", true));
    // Same name deeper in the tree is not anchored.
    assert!(!patterns.is_ignored("docs", "src/docs", true));
}

#[test]
fn rooted_pattern_with_glob() {
    let patterns = set(&["/out*"]);
    assert!(patterns.is_ignored("output", "output", true));
    assert!(!patterns.is_ignored("output", "src/output", true));
}

#[test]
fn embedded_wildcard_matches_name() {
    let patterns = set(&["cache-*-tmp"]);
    assert!(patterns.is_ignored("cache-123-tmp", "cache-123-tmp", true));
    assert!(!patterns.is_ignored("cache-123", "cache-123", true));
}

#[test]
fn directory_suffix_form() {
    let patterns = set(&["coverage"]);
    assert!(patterns.is_ignored("coverage", "coverage", true));
    // Non-directory entries still match via the name rule; the directory
    // suffix form only ever adds matches for directories.
    assert!(patterns.is_ignored("coverage", "coverage", false));
}

#[test]
fn trailing_slash_is_stripped() {
    let patterns = set(&["build/"]);
    assert!(patterns.is_ignored("build", "build", true));
    // The simplified semantics also match a plain file of the same name.
    assert!(patterns.is_ignored("build", "build", false));
}

#[test]
fn no_negation_support() {
    // A `!` line is treated as an ordinary (never-matching) token, not as an
    // un-ignore directive.
    let patterns = set(&["*.log", "!keep.log"]);
    assert!(patterns.is_ignored("keep.log", "keep.log", false));
}

#[test]
fn invalid_glob_is_skipped() {
    let patterns = set(&["[invalid", "node_modules"]);
    assert_eq!(patterns.len(), 1);
    assert!(patterns.is_ignored("node_modules", "node_modules", true));
}

#[test]
fn hard_excluded_fragments_ignore_pattern_set() {
    let patterns = set(&[]);
    assert!(patterns.is_empty());
    assert!(patterns.is_ignored(
        "some-extension",
        ".vscode/extensions/some-extension",
        true
    ));
    assert!(!patterns.is_ignored("src", "src", true));
}

#[test]
fn is_ignored_is_deterministic() {
    let patterns = set(&["*.pyc", "/docs", "build"]);
    for _ in 0..3 {
        assert!(patterns.is_ignored("a.pyc", "x/a.pyc", false));
        assert!(!patterns.is_ignored("a.py", "x/a.py", false));
    }
}

#[test]
fn load_merges_defaults_with_exclusion_file() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(
        dir.path().join(EXCLUSION_FILE_NAME),
        "# comment\n\n*.log\nbuild/\n",
    )
    .expect("write exclusion file");

    let patterns = PatternSet::load(dir.path());
    // Defaults still apply.
    assert!(patterns.is_ignored("node_modules", "node_modules", true));
    // File patterns are merged, comments and blanks skipped.
    assert!(patterns.is_ignored("app.log", "app.log", false));
    assert!(patterns.is_ignored("build", "build", true));
    assert!(!patterns.is_ignored("rebuild.txt", "rebuild.txt", false));
}

#[test]
fn load_without_exclusion_file_uses_defaults() {
    let dir = TempDir::new().expect("create temp dir");
    let patterns = PatternSet::load(dir.path());
    assert!(patterns.is_ignored(".git", ".git", true));
    assert!(!patterns.is_ignored("README.md", "README.md", false));
}
