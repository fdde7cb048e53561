//! # CLI Tests
//!
//! Runs the `boom` binary against a temporary home. Commands that would touch the
//! clipboard or the browser are left to the library tests.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{TestEnv, SAMPLE_DATA};
use predicates::prelude::*;

#[test]
fn test_first_run_shows_onboarding() {
    let env = TestEnv::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("You don't have anything yet!"))
        .stdout(predicate::str::contains("$ boom <list-name>"));

    assert!(!env.data_path().exists());
}

#[test]
fn test_create_list_and_add_item() {
    let env = TestEnv::new();

    env.cmd()
        .arg("urls")
        .assert()
        .success()
        .stdout("Boom! Created a new list called \"urls\".\n");

    env.cmd()
        .args(["urls", "github", "https://github.com"])
        .assert()
        .success()
        .stdout("Boom! \"github\" in \"urls\" is \"https://github.com\". Got it.\n");

    env.cmd()
        .assert()
        .success()
        .stdout("  urls (1)\n");

    let storage = env.storage();
    assert_eq!(
        storage.find_item("github").unwrap().value(),
        "https://github.com"
    );
}

#[test]
fn test_echo_prints_raw_value() {
    let env = TestEnv::with_sample_data();

    env.cmd()
        .args(["echo", "github"])
        .assert()
        .success()
        .stdout("https://github.com\n");

    env.cmd()
        .args(["e", "snippets", "sig"])
        .assert()
        .success()
        .stdout("- me\n");
}

#[test]
fn test_echo_missing_item() {
    let env = TestEnv::with_sample_data();

    env.cmd()
        .args(["echo", "urls", "nope"])
        .assert()
        .success()
        .stdout("\"nope\" not found in \"urls\".\n");
}

#[test]
fn test_piped_value_becomes_item() {
    let env = TestEnv::with_sample_data();

    env.cmd()
        .args(["snippets", "todo"])
        .write_stdin("buy milk\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"todo\" in \"snippets\" is \"buy milk\""));

    assert_eq!(
        env.storage().find_item("todo").unwrap().value(),
        "buy milk"
    );
}

#[test]
fn test_delete_list_answered_no() {
    let env = TestEnv::with_sample_data();

    env.cmd()
        .args(["urls", "delete"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You sure you want to delete everything in \"urls\"? (y/n):",
        ))
        .stdout(predicate::str::contains("Just kidding then."));

    assert_eq!(env.read_data(), SAMPLE_DATA);
}

#[test]
fn test_delete_list_answered_yes() {
    let env = TestEnv::with_sample_data();

    env.cmd()
        .args(["urls", "delete"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Boom! Deleted all your urls."));

    assert!(!env.storage().list_exists("urls"));
}

#[test]
fn test_delete_item_from_list() {
    let env = TestEnv::with_sample_data();

    env.cmd()
        .args(["urls", "blog", "delete"])
        .assert()
        .success()
        .stdout("Boom! \"blog\" is gone forever.\n");

    assert!(!env.storage().item_exists("blog"));
}

#[test]
fn test_version_flag() {
    let env = TestEnv::new();

    env.cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(format!(
            "You're running boom {}. Congratulations!\n",
            env!("CARGO_PKG_VERSION")
        ));
}

#[test]
fn test_help_and_unknown_flags() {
    let env = TestEnv::new();

    env.cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("boom switch <storage>"));

    env.cmd()
        .arg("--frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("- boom: help"));
}

#[test]
fn test_storage_and_switch() {
    let env = TestEnv::new();

    env.cmd()
        .arg("storage")
        .assert()
        .success()
        .stdout("You're currently using json.\n");

    env.cmd()
        .args(["switch", "redis"])
        .assert()
        .success()
        .stdout("We couldn't find that storage engine. Check the name and try again.\n");
    assert!(!env.config_path().exists());

    env.cmd()
        .args(["switch", "gist"])
        .assert()
        .success()
        .stdout("Boom! We've switched you over to gist.\n");
    assert!(env.read_config().contains("backend = \"gist\""));
}

#[test]
fn test_gist_without_token_fails() {
    let env = TestEnv::new();
    env.write_config("backend = \"gist\"\n");

    env.cmd()
        .arg("urls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("gist"));

    // Switching back still works
    env.cmd()
        .args(["switch", "json"])
        .assert()
        .success();
    assert!(env.read_config().contains("backend = \"json\""));
}

#[test]
fn test_unknown_configured_backend_fails() {
    let env = TestEnv::new();
    env.write_config("backend = \"redis\"\n");

    env.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("redis"));
}

#[test]
fn test_corrupt_data_file_fails() {
    let env = TestEnv::new();
    env.write_data("[1, 2,");

    env.cmd()
        .arg("newlist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    assert_eq!(env.read_data(), "[1, 2,");
}

#[test]
fn test_empty_stdin_creates_list_without_item() {
    let env = TestEnv::new();

    env.cmd()
        .args(["newlist", "item"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("Boom! Created a new list called \"newlist\".\n");

    let storage = env.storage();
    assert!(storage.list("newlist").unwrap().is_empty());
}

#[test]
fn test_fresh_gist_config_stays_offline_for_reads() {
    let env = TestEnv::new();
    let config = "backend = \"gist\"\n\n[gist]\ntoken = \"secret\"\napi_url = \"http://127.0.0.1:9\"\n";
    env.write_config(config);

    env.cmd()
        .arg("storage")
        .assert()
        .success()
        .stdout("You're currently using gist.\n");

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("You don't have anything yet!"));

    assert_eq!(env.read_config(), config);
}
