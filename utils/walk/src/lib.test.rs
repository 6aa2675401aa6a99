use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use seetree_file_ignore::PatternSet;

use super::*;

fn touch(path: &Path) {
    fs::write(path, b"").expect("write file");
}

fn mkdir(path: &Path) {
    fs::create_dir_all(path).expect("create dir");
}

fn entry_rel_paths(root: &Path, patterns: &PatternSet) -> Vec<String> {
    walk(root, patterns)
        .expect("walk")
        .filter_map(|event| match event {
            WalkEvent::Entry(entry) => Some(entry.rel_path),
            WalkEvent::Denied { .. } => None,
        })
        .collect()
}

#[test]
fn default_patterns_prune_dependency_directories() {
    let dir = TempDir::new().expect("create temp dir");
    mkdir(&dir.path().join("src"));
    touch(&dir.path().join("src/a.py"));
    mkdir(&dir.path().join("node_modules"));
    touch(&dir.path().join("node_modules/x.js"));
    touch(&dir.path().join("README.md"));

    let patterns = PatternSet::load(dir.path());
    let yielded = entry_rel_paths(dir.path(), &patterns);
    assert_eq!(yielded, vec!["src", "src/a.py", "README.md"]);
}

#[test]
fn exclusion_file_patterns_prune_files_and_directories() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join(".gitignore"), "*.log\nbuild/\n").expect("write exclusion file");
    touch(&dir.path().join("app.log"));
    touch(&dir.path().join("rebuild.txt"));
    mkdir(&dir.path().join("build"));
    touch(&dir.path().join("build/out.bin"));

    let patterns = PatternSet::load(dir.path());
    let yielded = entry_rel_paths(dir.path(), &patterns);
    // `.gitignore` itself is still listed; only the excluded entries vanish.
    assert_eq!(yielded, vec![".gitignore", "rebuild.txt"]);
}

#[test]
fn ignored_directory_contributes_zero_entries() {
    let dir = TempDir::new().expect("create temp dir");
    mkdir(&dir.path().join("skipme/nested"));
    touch(&dir.path().join("skipme/nested/kept-name.txt"));
    touch(&dir.path().join("kept.txt"));

    let patterns = PatternSet::from_tokens(["skipme"]);
    let yielded = entry_rel_paths(dir.path(), &patterns);
    assert!(yielded.iter().all(|p| !p.starts_with("skipme")));
    assert_eq!(yielded, vec!["kept.txt"]);
}

#[test]
fn directories_precede_files_and_names_sort_case_insensitively() {
    let dir = TempDir::new().expect("create temp dir");
    mkdir(&dir.path().join("Zeta"));
    mkdir(&dir.path().join("alpha"));
    touch(&dir.path().join("Beta.txt"));
    touch(&dir.path().join("apple.txt"));

    let patterns = PatternSet::from_tokens([]);
    let yielded = entry_rel_paths(dir.path(), &patterns);
    assert_eq!(yielded, vec!["alpha", "Zeta", "apple.txt", "Beta.txt"]);
}

#[test]
fn walk_is_idempotent_on_an_unmodified_tree() {
    let dir = TempDir::new().expect("create temp dir");
    mkdir(&dir.path().join("a/b"));
    touch(&dir.path().join("a/b/c.txt"));
    touch(&dir.path().join("d.txt"));

    let patterns = PatternSet::load(dir.path());
    let first = entry_rel_paths(dir.path(), &patterns);
    let second = entry_rel_paths(dir.path(), &patterns);
    assert_eq!(first, second);
}

#[test]
fn is_last_marks_the_final_sibling() {
    let dir = TempDir::new().expect("create temp dir");
    mkdir(&dir.path().join("a"));
    touch(&dir.path().join("a/only.txt"));
    touch(&dir.path().join("b.txt"));

    let patterns = PatternSet::from_tokens([]);
    let entries: Vec<TreeEntry> = walk(dir.path(), &patterns)
        .expect("walk")
        .filter_map(|event| match event {
            WalkEvent::Entry(entry) => Some(entry),
            WalkEvent::Denied { .. } => None,
        })
        .collect();

    let flags: Vec<(String, usize, bool)> = entries
        .into_iter()
        .map(|e| (e.rel_path, e.depth, e.is_last))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("a".to_string(), 0, false),
            ("a/only.txt".to_string(), 1, true),
            ("b.txt".to_string(), 0, true),
        ]
    );
}

#[cfg(unix)]
#[test]
fn unreadable_directory_yields_denied_and_siblings_continue() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("create temp dir");
    mkdir(&dir.path().join("locked"));
    touch(&dir.path().join("locked/hidden.txt"));
    touch(&dir.path().join("zzz.txt"));

    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::read_dir(&locked).is_ok() {
        // Running with CAP_DAC_READ_SEARCH (e.g. as root); the directory
        // cannot be made unreadable, so there is nothing to observe.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
        return;
    }

    let patterns = PatternSet::from_tokens([]);
    let events: Vec<WalkEvent> = walk(dir.path(), &patterns).expect("walk").collect();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");

    let denied_at = events
        .iter()
        .position(|event| {
            matches!(event, WalkEvent::Denied { depth, path } if *depth == 1 && *path == locked)
        })
        .expect("denied event for the locked directory");
    let after: Vec<&str> = events[denied_at + 1..]
        .iter()
        .filter_map(|event| match event {
            WalkEvent::Entry(entry) => Some(entry.rel_path.as_str()),
            WalkEvent::Denied { .. } => None,
        })
        .collect();
    assert_eq!(after, vec!["zzz.txt"]);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_listed_as_a_file() {
    let dir = TempDir::new().expect("create temp dir");
    touch(&dir.path().join("real.txt"));
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("broken"))
        .expect("symlink");

    let patterns = PatternSet::from_tokens([]);
    let entries: Vec<TreeEntry> = walk(dir.path(), &patterns)
        .expect("walk")
        .filter_map(|event| match event {
            WalkEvent::Entry(entry) => Some(entry),
            WalkEvent::Denied { .. } => None,
        })
        .collect();

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["broken", "real.txt"]);
    assert!(entries.iter().all(|e| !e.is_dir));
}

#[test]
fn missing_root_is_fatal() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("does-not-exist");
    let patterns = PatternSet::from_tokens([]);
    let err = walk(&missing, &patterns).err().expect("walk must fail");
    assert!(matches!(err, WalkError::RootNotFound(_)));
}

#[test]
fn file_root_is_fatal() {
    let dir = TempDir::new().expect("create temp dir");
    let file = dir.path().join("plain.txt");
    touch(&file);
    let patterns = PatternSet::from_tokens([]);
    assert!(walk(&file, &patterns).is_err());
}
