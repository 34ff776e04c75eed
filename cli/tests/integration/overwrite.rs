//! Overwrite policy integration tests for the copyr CLI.
//!
//! - Single files: refuse unless -f, -i has no effect
//! - Directory entries: skip unless -f, or ask with -i

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

/// Source `tree/{a.txt,b.txt}`, destination `tree/a.txt` already present.
fn conflicting_trees() -> (TempDir, TempDir) {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::create_dir(src.path().join("tree")).unwrap();
    fs::write(src.path().join("tree/a.txt"), "new a").unwrap();
    fs::write(src.path().join("tree/b.txt"), "new b").unwrap();

    fs::create_dir(dst.path().join("tree")).unwrap();
    fs::write(dst.path().join("tree/a.txt"), "old a").unwrap();

    (src, dst)
}

#[test]
fn test_refuse_existing_file_without_force() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "new content").unwrap();
    fs::write(dst.path().join("test.txt"), "old content").unwrap();

    let mut cmd = cargo_bin_cmd!("copyr");
    cmd.arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("Cannot overwrite"));

    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "old content"
    );
}

#[test]
fn test_force_overwrites_existing_file() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "new").unwrap();
    fs::write(dst.path().join("test.txt"), "old but longer").unwrap();

    let mut cmd = cargo_bin_cmd!("copyr");
    cmd.arg("-f")
        .arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "new"
    );
}

#[test]
fn test_interactive_does_not_apply_to_single_file() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "new").unwrap();
    fs::write(dst.path().join("test.txt"), "old").unwrap();

    let mut cmd = cargo_bin_cmd!("copyr");
    cmd.arg("-i")
        .arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overwrite '").not());

    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "old"
    );
}

#[test]
fn test_directory_skips_existing_without_force() {
    let (src, dst) = conflicting_trees();

    let mut cmd = cargo_bin_cmd!("copyr");
    cmd.arg("-rv")
        .arg(src.path().join("tree"))
        .arg(dst.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping "));

    assert_eq!(
        fs::read_to_string(dst.path().join("tree/a.txt")).unwrap(),
        "old a"
    );
    assert_eq!(
        fs::read_to_string(dst.path().join("tree/b.txt")).unwrap(),
        "new b"
    );
}

#[test]
fn test_directory_force_overwrites() {
    let (src, dst) = conflicting_trees();

    let mut cmd = cargo_bin_cmd!("copyr");
    cmd.arg("-rf")
        .arg(src.path().join("tree"))
        .arg(dst.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("tree/a.txt")).unwrap(),
        "new a"
    );
}

#[rstest]
#[case::lower_y("y\n", true)]
#[case::upper_y("Y\n", true)]
#[case::yes("yes\n", true)]
#[case::no("n\n", false)]
#[case::empty_line("\n", false)]
#[case::eof("", false)]
#[case::other("sure\n", false)]
fn test_interactive_prompt_answers(#[case] answer: &str, #[case] overwritten: bool) {
    let (src, dst) = conflicting_trees();

    let mut cmd = cargo_bin_cmd!("copyr");
    cmd.arg("-ri")
        .arg(src.path().join("tree"))
        .arg(dst.path())
        .write_stdin(answer)
        .assert()
        .success()
        .stderr(predicate::str::contains("overwrite '"))
        .stderr(predicate::str::contains("a.txt"));

    let expected = if overwritten { "new a" } else { "old a" };
    assert_eq!(
        fs::read_to_string(dst.path().join("tree/a.txt")).unwrap(),
        expected
    );
    // Non-conflicting siblings are copied without asking
    assert_eq!(
        fs::read_to_string(dst.path().join("tree/b.txt")).unwrap(),
        "new b"
    );
}

#[test]
fn test_interactive_and_force_conflict() {
    let (src, dst) = conflicting_trees();

    let mut cmd = cargo_bin_cmd!("copyr");
    cmd.arg("-r")
        .arg("-i")
        .arg("-f")
        .arg(src.path().join("tree"))
        .arg(dst.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert_eq!(
        fs::read_to_string(dst.path().join("tree/a.txt")).unwrap(),
        "old a"
    );
}

#[cfg(unix)]
#[test]
fn test_interrupt_at_prompt_stops_without_overwriting() {
    use std::io::{Read, Write};
    use std::process::{Command, Stdio};
    use std::thread;
    use std::time::Duration;

    let (src, dst) = conflicting_trees();

    let mut child = Command::new(env!("CARGO_BIN_EXE_copyr"))
        .arg("-ri")
        .arg(src.path().join("tree"))
        .arg(dst.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    let mut stderr = child.stderr.take().unwrap();

    // Wait until the prompt is showing
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !seen.ends_with(b"[y/N] ") {
        assert_eq!(stderr.read(&mut byte).unwrap(), 1, "copyr exited early");
        seen.push(byte[0]);
    }

    // SAFETY: the pid belongs to a child we spawned and have not reaped
    let rc = unsafe { libc::kill(child.id() as libc::pid_t, libc::SIGINT) };
    assert_eq!(rc, 0);
    thread::sleep(Duration::from_millis(300));

    stdin.write_all(b"y\n").unwrap();
    drop(stdin);

    let mut rest = String::new();
    stderr.read_to_string(&mut rest).unwrap();
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(rest.contains("Interrupted"), "stderr: {rest}");
    assert_eq!(
        fs::read_to_string(dst.path().join("tree/a.txt")).unwrap(),
        "old a"
    );
}
