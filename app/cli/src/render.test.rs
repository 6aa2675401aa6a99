use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use seetree_file_ignore::PatternSet;
use seetree_git_status::EmptyStatus;
use seetree_git_status::FileStatus;
use seetree_git_status::GitStatus;
use seetree_git_status::StatusProvider;
use seetree_walk::TreeEntry;
use seetree_walk::WalkEvent;
use seetree_walk::walk;

use super::*;

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip to the terminating `m` of the CSI sequence.
            for esc in chars.by_ref() {
                if esc == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn render_tree(root: &std::path::Path, status: &dyn StatusProvider) -> String {
    let patterns = PatternSet::load(root);
    let walker = walk(root, &patterns).expect("walk");
    let mut buf = Vec::new();
    Renderer::new(&mut buf, status)
        .render(walker)
        .expect("render");
    String::from_utf8(buf).expect("utf8 output")
}

#[test]
fn renders_guides_connectors_and_icons() {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir(dir.path().join("sub")).expect("mkdir");
    fs::write(dir.path().join("sub/file.txt"), b"").expect("write");
    fs::write(dir.path().join("last.md"), b"").expect("write");

    let output = render_tree(dir.path(), &EmptyStatus);
    let plain = strip_ansi(&output);
    assert_eq!(
        plain,
        "\n\
         🌳 Project Structure\n\
         ==================\n\
         ├── 📂 sub\n\
         │   └── 📝 file.txt\n\
         └── 📝 last.md\n"
    );
}

#[test]
fn nested_last_directories_render_blank_guides() {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir_all(dir.path().join("outer/inner")).expect("mkdir");
    fs::write(dir.path().join("outer/inner/deep.txt"), b"").expect("write");

    let output = render_tree(dir.path(), &EmptyStatus);
    let plain = strip_ansi(&output);
    assert!(plain.contains("└── 📂 outer\n"));
    assert!(plain.contains("    └── 📂 inner\n"));
    assert!(plain.contains("        └── 📝 deep.txt\n"));
}

#[test]
fn status_markers_are_appended() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("changed.rs"), b"").expect("write");
    fs::write(dir.path().join("clean.rs"), b"").expect("write");

    let status = GitStatus::parse_porcelain(" M changed.rs\n");
    assert_eq!(status.lookup("changed.rs"), Some(FileStatus::Modified));

    let output = render_tree(dir.path(), &status);
    let plain = strip_ansi(&output);
    assert!(plain.contains("changed.rs [M]\n"));
    assert!(plain.contains("clean.rs\n"));
    assert!(!plain.contains("clean.rs ["));
}

#[test]
fn denied_subtree_renders_an_inline_marker_and_siblings_follow() {
    let locked = TreeEntry {
        path: PathBuf::from("/project/locked"),
        rel_path: "locked".to_string(),
        name: "locked".to_string(),
        is_dir: true,
        depth: 0,
        is_last: false,
    };
    let after = TreeEntry {
        path: PathBuf::from("/project/after.txt"),
        rel_path: "after.txt".to_string(),
        name: "after.txt".to_string(),
        is_dir: false,
        depth: 0,
        is_last: true,
    };
    let events = vec![
        WalkEvent::Entry(locked),
        WalkEvent::Denied {
            depth: 1,
            path: PathBuf::from("/project/locked"),
        },
        WalkEvent::Entry(after),
    ];

    let mut buf = Vec::new();
    Renderer::new(&mut buf, &EmptyStatus)
        .render(events)
        .expect("render");
    let plain = strip_ansi(&String::from_utf8(buf).expect("utf8 output"));
    assert_eq!(
        plain,
        "\n\
         🌳 Project Structure\n\
         ==================\n\
         ├── 📂 locked\n\
         │   └── ⛔ [permission denied]\n\
         └── 📝 after.txt\n"
    );
}

#[test]
fn ignored_directories_do_not_render() {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir(dir.path().join("node_modules")).expect("mkdir");
    fs::write(dir.path().join("node_modules/x.js"), b"").expect("write");
    fs::write(dir.path().join("kept.py"), b"").expect("write");

    let output = render_tree(dir.path(), &EmptyStatus);
    assert!(!output.contains("node_modules"));
    assert!(output.contains("kept.py"));
}
