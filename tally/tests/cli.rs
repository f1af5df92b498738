use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tally"))
}

struct CommandResult {
    status: Option<i32>,
    stdout: String,
    stderr: String,
}

fn run_cmd(args: &[&str], input: Option<&str>) -> CommandResult {
    let mut cmd = Command::new(bin_path());
    cmd.args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

    let mut child = cmd.spawn().expect("binary should start");
    if let Some(input) = input {
        let mut handle = child.stdin.take().expect("stdin is piped");
        handle
            .write_all(input.as_bytes())
            .expect("stdin should accept input");
    }

    let output = child.wait_with_output().expect("binary should finish");
    CommandResult {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[test]
fn evaluates_inline_expression() {
    let result = run_cmd(&["-e", "12/3"], None);
    assert_eq!(result.status, Some(0));
    assert_eq!(result.stdout, "4\n");
}

#[test]
fn evaluates_each_statement() {
    let result = run_cmd(&["-e", "1+2*3; 7/2;"], None);
    assert_eq!(result.status, Some(0));
    assert_eq!(result.stdout, "9\n3.5\n");
}

#[test]
fn reads_stdin() {
    let result = run_cmd(&["--stdin"], Some("33.5 + 0.5\n;\n2 - 3\n"));
    assert_eq!(result.status, Some(0));
    assert_eq!(result.stdout, "34\n-1\n");
}

#[test]
fn reads_file() {
    let dir = std::env::temp_dir().join(format!("tally_cli_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("input.tl");
    std::fs::write(&path, "10 - 4 - 3;\n").unwrap();

    let result = run_cmd(&[path.to_str().unwrap()], None);
    assert_eq!(result.status, Some(0));
    assert_eq!(result.stdout, "3\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_io_failure() {
    let result = run_cmd(&["/definitely/not/here.tl"], None);
    assert_eq!(result.status, Some(2));
    assert!(result.stderr.contains("error:"), "{}", result.stderr);
}

#[test]
fn division_by_zero_reports_diagnostic() {
    let result = run_cmd(&["-e", "5/0"], None);
    assert_eq!(result.status, Some(1));
    assert!(result.stdout.is_empty());
    assert!(
        result.stderr.contains("cannot divide by zero"),
        "{}",
        result.stderr
    );
}

#[test]
fn quiet_suppresses_diagnostics() {
    let result = run_cmd(&["-q", "-e", "1 +"], None);
    assert_eq!(result.status, Some(1));
    assert!(result.stderr.is_empty(), "{}", result.stderr);
}

#[test]
fn dumps_tokens() {
    let result = run_cmd(&["--tokens", "-e", "x += 1.5; if"], None);
    assert_eq!(result.status, Some(0));
    let lines: Vec<_> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "1:1\tSymbol x @0..1",
            "1:3\tPlus += @2..4",
            "1:6\tFloat 1.5 @5..8",
            "1:9\tTerminator ; @8..9",
            "1:11\tIf if @10..12",
        ]
    );
}

#[test]
fn token_locations_follow_lines() {
    let result = run_cmd(&["--tokens", "--stdin"], Some("1 +
  2."));
    assert_eq!(result.status, Some(0));
    let lines: Vec<_> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["1:1\tInteger 1 @0..1", "1:3\tPlus + @2..3", "2:3\tFloat 2 @6..8"]
    );
}

#[test]
fn strict_rejects_unknown_words() {
    let result = run_cmd(&["--strict", "--tokens", "-e", "if foo"], None);
    assert_eq!(result.status, Some(1));
    assert!(
        result.stderr.contains("unknown keyword 'foo'"),
        "{}",
        result.stderr
    );
}
