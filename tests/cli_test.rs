use std::path::Path;
use std::process::{Command, Output};

use calc::DEFAULT_ANSWER_FILENAME;
use tempfile::TempDir;

fn run_calc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calc"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run calc")
}

fn assert_calc_output(dir: &Path, args: &[&str], expected_code: i32, expected_stdout: &str) {
    let output = run_calc(dir, args);
    assert_eq!(
        output.status.code(),
        Some(expected_code),
        "exit code of calc {:?}",
        args
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        expected_stdout,
        "stdout of calc {:?}",
        args
    );
}

fn read_answer_file(dir: &TempDir) -> Option<String> {
    std::fs::read_to_string(dir.path().join(DEFAULT_ANSWER_FILENAME)).ok()
}

#[test]
fn compute_writes_answer_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(dir.path(), &["5", "+", "3"], 0, "5.000 + 3.000 = 8.000000\n");
    assert_eq!(read_answer_file(&dir).as_deref(), Some("8.000000"));
}

#[test]
fn answers_chain_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(dir.path(), &["5", "+", "3"], 0, "5.000 + 3.000 = 8.000000\n");
    assert_calc_output(dir.path(), &["ans", "x", "2"], 0, "8.000 x 2.000 = 16.000000\n");
    assert_calc_output(dir.path(), &["ans"], 0, "Last saved answer: 16.000000\n");
}

#[test]
fn negative_operands_are_not_flags() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(
        dir.path(),
        &["-2", "-", "-3"],
        0,
        "-2.000 - -3.000 = 1.000000\n",
    );
}

#[test]
fn clear_then_ans_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(dir.path(), &["1", "+", "1"], 0, "1.000 + 1.000 = 2.000000\n");
    assert_calc_output(dir.path(), &["clear"], 0, "Saved answer cleared successfully.\n");
    assert_eq!(read_answer_file(&dir).as_deref(), Some(""));
    assert_calc_output(dir.path(), &["ans"], 0, "Last saved answer: 0.000000\n");
}

#[test]
fn ans_without_answer_file_defaults_to_zero() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(
        dir.path(),
        &["ans"],
        0,
        "No previous answer found. Defaulting to 0.\nLast saved answer: 0.000000\n",
    );
    assert_eq!(read_answer_file(&dir), None);
}

#[test]
fn division_by_zero_fails_and_keeps_answer() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(dir.path(), &["6", "/", "2"], 0, "6.000 / 2.000 = 3.000000\n");
    assert_calc_output(
        dir.path(),
        &["10", "/", "0"],
        1,
        "Error: Division by zero is undefined.\n",
    );
    assert_eq!(read_answer_file(&dir).as_deref(), Some("3.000000"));
}

#[test]
fn unsupported_operator_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(
        dir.path(),
        &["7", "%", "2"],
        1,
        "Error: Invalid operation '%'. Supported operators: +, -, x, *, /\n",
    );
    assert_eq!(read_answer_file(&dir), None);
}

#[test]
fn invalid_operand_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(
        dir.path(),
        &["3.1.4", "+", "1"],
        1,
        "Error: Invalid first number '3.1.4'.\n",
    );
    assert_calc_output(
        dir.path(),
        &["1", "+", "--5"],
        1,
        "Error: Invalid second number '--5'.\n",
    );
    assert_eq!(read_answer_file(&dir), None);
}

#[test]
fn incorrect_format_fails_without_touching_answer() {
    let dir = tempfile::tempdir().unwrap();
    assert_calc_output(dir.path(), &["2", "x", "2"], 0, "2.000 x 2.000 = 4.000000\n");
    for args in [
        vec![],
        vec!["5"],
        vec!["--help"],
        vec!["--version"],
        vec!["1", "+", "2", "+", "3"],
        vec!["--", "5", "+", "3"],
        vec!["--", "ans"],
    ] {
        assert_calc_output(
            dir.path(),
            &args,
            1,
            "Incorrect format. Type 'calc help' for usage instructions.\n",
        );
    }
    assert_eq!(read_answer_file(&dir).as_deref(), Some("4.000000"));
}

#[cfg(unix)]
#[test]
fn non_utf8_operand_is_an_invalid_operand() {
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_calc"))
        .arg("1")
        .arg("+")
        .arg(std::ffi::OsStr::from_bytes(b"2\xff"))
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run calc");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Error: Invalid second number '2\u{FFFD}'.\n"
    );
    assert_eq!(read_answer_file(&dir), None);
}

#[test]
fn help_succeeds_without_touching_answer() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_calc(dir.path(), &["help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout)
        .starts_with("Welcome to the Enhanced Simple Calculator!\n"));
    assert_eq!(read_answer_file(&dir), None);
}

#[test]
fn unwritable_answer_file_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory can't be opened for writing as a file.
    std::fs::create_dir(dir.path().join(DEFAULT_ANSWER_FILENAME)).unwrap();
    assert_calc_output(
        dir.path(),
        &["1", "+", "2"],
        0,
        "1.000 + 2.000 = 3.000000\nError: Unable to write to file.\n",
    );
    assert_calc_output(
        dir.path(),
        &["clear"],
        0,
        "Error: Unable to clear answer file.\n",
    );
}
