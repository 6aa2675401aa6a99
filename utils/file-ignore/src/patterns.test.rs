use super::*;

#[test]
fn default_patterns_cover_all_groups() {
    let all = default_patterns();
    let expected_len = VCS_METADATA_EXCLUDES.len()
        + DEPENDENCY_DIRECTORY_EXCLUDES.len()
        + BUILD_OUTPUT_EXCLUDES.len()
        + EDITOR_OS_CRUFT_EXCLUDES.len();
    assert_eq!(all.len(), expected_len);
}

#[test]
fn defaults_include_common_exclusions() {
    let all = default_patterns();
    for expected in [
        ".git",
        "node_modules",
        "__pycache__",
        "dist",
        "*.pyc",
        ".DS_Store",
    ] {
        assert!(all.contains(&expected), "missing default pattern {expected}");
    }
}

#[test]
fn hard_exclude_fragments_not_empty() {
    assert!(!HARD_EXCLUDE_FRAGMENTS.is_empty());
}
