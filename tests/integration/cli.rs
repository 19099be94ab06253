//! CLI tests: stdin/stdout contract and exit status

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn octconf(
    args: &[&str],
    stdin: &str,
) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_octconf"))
        .args(args)
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start octconf");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_stdin_to_stdout() {
    let out = octconf(&[], "def CONFIG := ((0o1, 0o2), (0o3, 0o4))");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "CONFIG = [[1, 2], [3, 4]]\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn test_error_goes_to_stderr_with_failure_status() {
    let out = octconf(&["-"], "def A := ![MISSING]");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&out.stderr),
        "Error: undefined constant 'MISSING' at 1:10\n"
    );
}

#[test]
fn test_file_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.def");
    let output = dir.path().join("out.toml");
    std::fs::write(&input, "def A := (0o1,)\ndef B := ![A]\n").unwrap();

    let out = octconf(
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        "",
    );
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "A = [1]\nB = [1]\n");
}

#[test]
fn test_failure_writes_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.toml");

    let out = octconf(&["-o", output.to_str().unwrap()], "def A := @");
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn test_max_depth_flag() {
    let out = octconf(&["--max-depth", "1"], "def A := ((0o1))");
    assert!(!out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stderr),
        "Error: arrays nested deeper than 1 levels at 1:11\n"
    );
}

#[test]
fn test_deep_chain_of_cached_values_fails_cleanly() {
    let mut source = String::from("def A0 := (0o1)\n");
    for i in 1..2_000 {
        source.push_str(&format!("def A{} := (![A{}])\n", i, i - 1));
    }

    let out = octconf(&[], &source);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&out.stderr),
        "Error: reference chain or array nesting deeper than 256 levels\n"
    );
}

#[test]
fn test_config_file_sets_depth() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[eval]\nmax_depth = 1\n").unwrap();

    let out = octconf(&["--config", config.to_str().unwrap()], "def A := ((0o1))");
    assert!(!out.status.success());

    let out = octconf(
        &["--config", config.to_str().unwrap(), "--max-depth", "4"],
        "def A := ((0o1))",
    );
    assert!(out.status.success());
}

#[test]
fn test_missing_input_file() {
    let out = octconf(&["/nonexistent/octconf/input.def"], "");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error: failed to read /nonexistent/octconf/input.def"));
}

#[test]
fn test_empty_input_prints_empty_line() {
    let out = octconf(&[], "");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "\n");
}
