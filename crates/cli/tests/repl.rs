use assert_cmd::Command;
use predicates::prelude::*;

fn termcalc() -> Command {
    Command::cargo_bin("termcalc").unwrap()
}

#[test]
fn adds_two_numbers() {
    termcalc()
        .arg("--quiet")
        .write_stdin("5 + 3\nq\n")
        .assert()
        .success()
        .stdout("5 + 3 = 8\n");
}

#[test]
fn division_by_zero_reports_error_without_result() {
    termcalc()
        .arg("--quiet")
        .write_stdin("10 / 0\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=").not())
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn invalid_first_operand_recovers() {
    termcalc()
        .arg("--quiet")
        .write_stdin("abc\n5 + 3\nq\n")
        .assert()
        .success()
        .stdout("5 + 3 = 8\n")
        .stderr(predicate::str::contains("invalid number: 'abc'"));
}

#[test]
fn invalid_operator_reports_error() {
    termcalc()
        .arg("--quiet")
        .write_stdin("7 % 2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=").not())
        .stderr(predicate::str::contains("invalid operator: '%'"));
}

#[test]
fn quit_sentinel_exits_successfully() {
    termcalc()
        .arg("--quiet")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn uppercase_quit_sentinel_also_exits() {
    termcalc()
        .arg("--quiet")
        .write_stdin("Q\n")
        .assert()
        .success();
}

#[test]
fn interactive_mode_prints_banner_and_prompts() {
    termcalc()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("termcalc - console calculator"))
        .stdout(predicate::str::contains("Enter first number"))
        .stdout(predicate::str::contains("Exiting calculator."));
}

#[test]
fn one_token_per_line_input_works() {
    termcalc()
        .arg("--quiet")
        .write_stdin("6\n*\n7\nq\n")
        .assert()
        .success()
        .stdout("6 * 7 = 42\n");
}
