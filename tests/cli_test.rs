// End-to-end tests for the s3crc binary
// Tests cover: encodings, stdin, JSON output, per-file errors, exit status

#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn s3crc(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_s3crc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn write(dir: &Path, name: &str, data: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path.display().to_string()
}

#[test]
fn test_stdin_base64_default() {
    let output = s3crc(&["-"], b"123456789");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "rosUhgp5mIg=  stdin\n");
}

#[test]
fn test_hex_flags() {
    let output = s3crc(&["--hex", "-"], b"123456789");
    assert_eq!(stdout(&output), "ae8b14860a799888  stdin\n");

    let output = s3crc(&["--uppercase", "-"], b"123456789");
    assert_eq!(stdout(&output), "AE8B14860A799888  stdin\n");

    // --hex wins over --uppercase
    let output = s3crc(&["--uppercase", "--hex", "-"], b"123456789");
    assert_eq!(stdout(&output), "ae8b14860a799888  stdin\n");
}

#[test]
fn test_glob_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.bin", b"");
    let b = write(dir.path(), "b.bin", b"hello world");
    let pattern = format!("{}/*.bin", dir.path().display());

    let output = s3crc(&["--json", &pattern], b"");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "file": a, "crc64": "AAAAAAAAAAA=" },
            { "file": b, "crc64": "jSnVw/bqjr4=" },
        ])
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_does_not_stop_others() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.txt", b"123456789");
    let broken = dir.path().join("b.txt");
    fs::create_dir(&broken).unwrap();
    let c = write(dir.path(), "c.txt", b"hello world");
    let pattern = format!("{}/*.txt", dir.path().display());

    let output = s3crc(&["--hex", &pattern], b"");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!("ae8b14860a799888  {a}\n8d29d5c3f6ea8ebe  {c}\n")
    );
    let stderr = stderr(&output);
    assert!(stderr.contains(&format!("error on {}: ", broken.display())));
    assert!(stderr.contains("Is a directory"));
}

#[test]
fn test_parallel_jobs_same_output() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..10u8 {
        write(dir.path(), &format!("{i}.dat"), &vec![i; 1000]);
    }
    let pattern = format!("{}/*.dat", dir.path().display());

    let sequential = s3crc(&[&pattern], b"");
    let parallel = s3crc(&["-j", "4", &pattern], b"");
    assert_eq!(stdout(&sequential), stdout(&parallel));
    assert_eq!(stdout(&parallel).lines().count(), 10);
}

#[test]
fn test_no_match_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = format!("{}/*.none", dir.path().display());

    let output = s3crc(&[&pattern], b"");
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let output = s3crc(&["--json", &pattern], b"");
    assert_eq!(stdout(&output), "[]\n");
}

#[test]
fn test_requires_a_pattern() {
    let output = s3crc(&[], b"");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_zero_buffer_size_rejected() {
    let output = s3crc(&["--buffer-size", "0", "-"], b"data");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("buffer_size"));
}
