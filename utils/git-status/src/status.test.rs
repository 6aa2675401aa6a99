use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

#[test]
fn parses_common_codes() {
    let status = GitStatus::parse_porcelain(
        " M src/lib.rs\nA  new.rs\n?? scratch.txt\nD  gone.rs\nUU conflict.rs\n",
    );
    assert_eq!(status.lookup("src/lib.rs"), Some(FileStatus::Modified));
    assert_eq!(status.lookup("new.rs"), Some(FileStatus::Added));
    assert_eq!(status.lookup("scratch.txt"), Some(FileStatus::Untracked));
    assert_eq!(status.lookup("gone.rs"), Some(FileStatus::Deleted));
    assert_eq!(status.lookup("conflict.rs"), Some(FileStatus::Conflicted));
    assert_eq!(status.lookup("untouched.rs"), None);
}

#[test]
fn rename_lines_keep_the_new_path() {
    let status = GitStatus::parse_porcelain("R  old_name.rs -> new_name.rs\n");
    assert_eq!(status.lookup("new_name.rs"), Some(FileStatus::Renamed));
    assert_eq!(status.lookup("old_name.rs"), None);
}

#[test]
fn untracked_directory_entries_lose_the_trailing_slash() {
    let status = GitStatus::parse_porcelain("?? newdir/\n");
    assert_eq!(status.lookup("newdir"), Some(FileStatus::Untracked));
}

#[test]
fn quoted_paths_are_unquoted() {
    let status = GitStatus::parse_porcelain("?? \"odd name.txt\"\n");
    assert_eq!(status.lookup("odd name.txt"), Some(FileStatus::Untracked));
}

#[test]
fn staged_and_worktree_modifications_both_read_as_modified() {
    let status = GitStatus::parse_porcelain("M  staged.rs\nMM both.rs\n");
    assert_eq!(status.lookup("staged.rs"), Some(FileStatus::Modified));
    assert_eq!(status.lookup("both.rs"), Some(FileStatus::Modified));
}

#[test]
fn malformed_lines_are_skipped() {
    let status = GitStatus::parse_porcelain("M\n\n!! vendored.rs\n M ok.rs\n");
    assert_eq!(status.len(), 1);
    assert_eq!(status.lookup("ok.rs"), Some(FileStatus::Modified));
}

#[test]
fn load_outside_a_repository_is_empty() {
    let dir = TempDir::new().expect("create temp dir");
    let status = GitStatus::load(dir.path());
    assert!(status.is_empty());
    assert_eq!(status.lookup("anything"), None);
}

#[test]
fn empty_provider_always_misses() {
    assert_eq!(EmptyStatus.lookup("src/lib.rs"), None);
}
