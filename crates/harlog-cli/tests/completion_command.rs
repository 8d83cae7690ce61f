use assert_cmd::Command;
use predicates::prelude::*;

fn harlog() -> Command {
    Command::cargo_bin("harlog").unwrap()
}

#[test]
fn test_completion_bash_generates_script() {
    harlog()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_harlog()"))
        .stdout(predicate::str::contains("complete -F _harlog"));
}

#[test]
fn test_completion_zsh_generates_script() {
    harlog()
        .arg("completion")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef harlog"));
}

#[test]
fn test_completion_rejects_unknown_shell() {
    harlog()
        .arg("completion")
        .arg("tcsh")
        .assert()
        .failure();
}
