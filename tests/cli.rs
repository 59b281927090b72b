#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn cli(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("league-cli").unwrap();
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn record_then_score() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("game.db.json");

    cli(&db).args(["record", "--name", "Chris"]).assert().success();
    cli(&db)
        .args(["record", "--name", "Chris"])
        .assert()
        .success()
        .stdout("Chris: 2\n");
    cli(&db)
        .args(["score", "--name", "Chris"])
        .assert()
        .success()
        .stdout("2\n");
    cli(&db)
        .args(["score", "--name", "Cleo"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn play_reads_stdin_and_league_is_ranked() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("game.db.json");

    cli(&db)
        .arg("play")
        .write_stdin("Cleo wins\nChris wins\nChris wins\nhello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ignored: hello"))
        .stderr(predicate::str::contains("3 win(s) recorded"));

    cli(&db)
        .arg("league")
        .assert()
        .success()
        .stdout("1 | Chris | 2\n2 | Cleo | 1\n");
}

#[test]
fn empty_database_lists_nothing() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("game.db.json");

    cli(&db).arg("league").assert().success().stdout("");
    assert_eq!(std::fs::read_to_string(&db).unwrap(), "[]");
}

#[test]
fn corrupted_database_fails() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("game.db.json");
    std::fs::write(&db, "oops").unwrap();

    cli(&db)
        .arg("league")
        .assert()
        .failure()
        .stderr(predicate::str::contains("decoding league"));
}
