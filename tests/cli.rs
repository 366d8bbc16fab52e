/*!
 * Integration tests for the dirsnap binary
 */

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn dirsnap() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dirsnap"))
}

#[test]
fn test_stdout_output_with_default_excludes() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("bin")).unwrap();
    fs::write(root.join("src").join("main.c"), "// entry\nint main;\n").unwrap();
    fs::write(root.join("bin").join("out.o"), "junk\n").unwrap();

    dirsnap()
        .arg(&root)
        .args(["--output", "stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("proj/\n├── src/\n│   └── main.c"))
        .stdout(predicate::str::contains("// File: proj\\src\\main.c\n\nint main;\n"))
        .stdout(predicate::str::contains("bin").not())
        .stdout(predicate::str::contains("// entry").not());
}

#[test]
fn test_custom_excludes_replace_defaults() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir_all(root.join("bin")).unwrap();
    fs::create_dir_all(root.join("target")).unwrap();
    fs::write(root.join("bin").join("tool.sh"), "echo hi\n").unwrap();
    fs::write(root.join("target").join("junk"), "junk\n").unwrap();

    dirsnap()
        .arg(&root)
        .args(["--output", "stdout", "-e", "target"])
        .assert()
        .success()
        .stdout(predicate::str::contains("// File: proj\\bin\\tool.sh"))
        .stdout(predicate::str::contains("target").not());
}

#[test]
fn test_file_output() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "alpha\n").unwrap();
    let out = temp_dir.path().join("snapshot.txt");

    dirsnap()
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(
        content,
        "proj/\n└── a.txt\n\n\n\n\n// File: proj\\a.txt\n\nalpha\n\n\n\n\n\n"
    );
}

#[test]
fn test_report_goes_to_stderr() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "alpha\n").unwrap();

    dirsnap()
        .arg(&root)
        .args(["--output", "stdout", "--report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SNAPSHOT COMPLETE").not())
        .stderr(predicate::str::contains("SNAPSHOT COMPLETE"));
}

#[test]
fn test_missing_root_fails() {
    let temp_dir = tempdir().unwrap();

    dirsnap()
        .arg(temp_dir.path().join("missing"))
        .args(["--output", "stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target directory not found"));
}

#[test]
fn test_generate_completions() {
    dirsnap()
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dirsnap"));
}

#[test]
#[ignore] // Requires a running tmux session
          // Run manually with: cargo test --test cli -- --ignored
fn test_clipboard_output_in_tmux() {
    if std::env::var("TMUX").is_err() {
        return;
    }

    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.txt"), "alpha\n").unwrap();

    dirsnap().arg(&root).assert().success();

    let output = std::process::Command::new("tmux")
        .args(["show-buffer"])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("proj/\n└── a.txt"));
}
