use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn seetree() -> Command {
    Command::cargo_bin("seetree").expect("seetree binary")
}

#[test]
fn renders_a_tree_and_exits_zero() {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir(dir.path().join("src")).expect("mkdir");
    fs::write(dir.path().join("src/a.py"), b"").expect("write");
    fs::create_dir(dir.path().join("node_modules")).expect("mkdir");
    fs::write(dir.path().join("node_modules/x.js"), b"").expect("write");
    fs::write(dir.path().join("README.md"), b"").expect("write");

    let assert = seetree()
        .arg(dir.path())
        .arg("--no-status")
        .assert()
        .success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(output.contains("Project Structure"));
    assert!(output.contains("src"));
    assert!(output.contains("a.py"));
    assert!(output.contains("README.md"));
    assert!(!output.contains("node_modules"));
    assert!(!output.contains("x.js"));

    // Directories come before files at the same level.
    let src_at = output.find("src").expect("src listed");
    let readme_at = output.find("README.md").expect("readme listed");
    assert!(src_at < readme_at);
}

#[test]
fn missing_root_fails_with_no_tree() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("no-such-dir");

    let assert = seetree().arg(&missing).assert().failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("root directory not found"));
}

#[cfg(unix)]
#[test]
fn unreadable_subtrees_do_not_fail_the_run() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir(dir.path().join("locked")).expect("mkdir");
    fs::write(dir.path().join("locked/hidden.txt"), b"").expect("write");
    fs::write(dir.path().join("visible.txt"), b"").expect("write");

    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::read_dir(&locked).is_ok() {
        // Privileged runs can read the directory regardless of its mode.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
        return;
    }

    let assert = seetree()
        .arg(dir.path())
        .arg("--no-status")
        .assert()
        .success();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");

    let output = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(output.contains("[permission denied]"));
    assert!(!output.contains("hidden.txt"));
    assert!(output.contains("visible.txt"));
}
