//! End-to-end tests driving the built binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cursor-chat-formatter"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary")
}

#[test]
fn no_arguments_exits_with_error() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("provide the path"), "stderr: {stderr}");
}

#[test]
fn missing_file_exits_with_error() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &["nope.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File does not exist"), "stderr: {stderr}");
    assert!(stderr.contains("nope.md"), "stderr: {stderr}");
}

#[test]
fn formats_file_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.md");
    fs::write(&path, "**User**\nHello\n---\n**Cursor**\nHi there\n").unwrap();

    let output = run_in(dir.path(), &["chat.md"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("chat.md"), "stdout: {stdout}");

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "\n\n## 👤 用户\n\nHello\n\n---\n\n\n## 🤖 AI\n\nHi there\n"
    );
}

#[test]
fn dry_run_prints_and_keeps_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.md");
    let original = "**Cursor**\n## 🎯 Plan\n- step one\n";
    fs::write(&path, original).unwrap();

    let output = run_in(dir.path(), &["--dry-run", "chat.md"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("### 🎯 Plan"));
    assert!(stdout.contains("  - step one"));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn labels_from_config_and_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.md");
    fs::write(&path, "**User**\nq\n---\n**Cursor**\na").unwrap();
    fs::write(
        dir.path().join("labels.toml"),
        "[labels]\nuser = \"Me\"\nassistant = \"Bot\"\n",
    )
    .unwrap();

    let output = run_in(
        dir.path(),
        &["-c", "labels.toml", "--assistant-label", "Cursor", "chat.md"],
    );

    assert_eq!(output.status.code(), Some(0));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("## 👤 Me\n"));
    assert!(written.contains("## 🤖 Cursor\n"));
}

#[test]
fn invalid_utf8_reports_processing_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.md");
    fs::write(&path, [0xff, 0xfe, 0xc3]).unwrap();

    let output = run_in(dir.path(), &["bad.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to process file"), "stderr: {stderr}");
    assert_eq!(fs::read(&path).unwrap(), [0xff, 0xfe, 0xc3]);
}

#[cfg(unix)]
#[test]
fn read_only_file_reports_processing_failure() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.md");
    let original = "**User**\nHello\n";
    fs::write(&path, original).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

    // Root ignores file permissions.
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let output = run_in(dir.path(), &["chat.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to process file"), "stderr: {stderr}");
    assert!(stderr.contains("ermission denied"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
