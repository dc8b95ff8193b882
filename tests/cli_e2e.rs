use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn taskpad(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taskpad").unwrap();
    cmd.env("TASKPAD_STORE", store);
    cmd
}

#[test]
fn empty_list_prints_hint() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    taskpad(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks"))
        .stdout(predicate::str::contains("╔").not());
}

#[test]
fn add_then_list_shows_a_table() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    taskpad(&store)
        .args(["add", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    taskpad(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("ID"))
        .stdout(predicate::str::contains("Priority"))
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("╔"));
}

#[test]
fn tasks_persist_across_invocations_with_sequential_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    taskpad(&store).args(["add", "first"]).assert().success();
    taskpad(&store).args(["add", "second"]).assert().success();

    taskpad(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("first"))
        .stdout(predicate::str::contains("second"));

    taskpad(&store).args(["rm", "0"]).assert().success();
    taskpad(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("first").not())
        .stdout(predicate::str::contains("second"));
}

#[test]
fn edit_changes_priority_in_listing() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    taskpad(&store).args(["add", "a task"]).assert().success();
    taskpad(&store)
        .args(["edit", "0", "--priority", "7"])
        .assert()
        .success();

    taskpad(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("7"));
}

#[test]
fn filter_matches_tag_substrings() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    taskpad(&store)
        .args(["add", "report", "--tags", "work,urgent"])
        .assert()
        .success();
    taskpad(&store)
        .args(["add", "groceries", "--tags", "home"])
        .assert()
        .success();

    taskpad(&store)
        .args(["filter", "urg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("groceries").not());
}

#[test]
fn filter_with_no_matches_renders_header_only_table() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    taskpad(&store)
        .args(["filter", "nosuchtag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID"))
        .stdout(predicate::str::contains("╚"));
}

#[test]
fn unknown_subcommand_fails_with_usage() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");

    taskpad(&store).arg("frobnicate").assert().failure();
}

#[test]
fn corrupt_store_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store.json");
    std::fs::write(&store, "not json at all").unwrap();

    taskpad(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks"));
}
