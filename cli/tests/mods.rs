//! # a3sm CLI Mods Integration Tests
//!
//! File: cli/tests/mods.rs
//!
//! ## Overview
//!
//! Integration tests for `a3sm mods <server> {add|delete|list}`: workshop
//! downloads via the fake steamcmd, the lowercase normalization of
//! downloaded content, and the bookkeeping in `server.ini`.
//!
#![cfg(unix)]

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_mods_add_by_url_downloads_and_registers() {
    let env = TestEnv::new();
    let dir = env.write_server("srv", "Test", &[]);
    env.write_global_config(&[dir.as_path()]);

    // Pre-seed the content directory steamcmd "downloaded", with the
    // mixed-case entries workshop packages typically carry.
    let content = dir.join("steamapps/workshop/content/107410/999");
    fs::create_dir_all(content.join("Addons")).unwrap();
    fs::write(content.join("Addons/MyMod.pbo"), "x").unwrap();

    env.cmd()
        .args(["mods", "Test", "add", "https://example.com/?id=999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 mod(s) to 'Test'."));

    let log = env.tool_log("steamcmd");
    assert!(log.contains("+workshop_download_item 107410 999"));

    // The installed set now carries the resolved ID.
    let record = fs::read_to_string(dir.join("server.ini")).unwrap();
    assert!(record.contains("mods=999"));

    // Every entry of the mod's content directory was lowercased.
    assert!(content.join("addons/mymod.pbo").is_file());
    assert!(!content.join("Addons").exists());
}

#[test]
fn test_mods_add_several_in_input_order() {
    let env = TestEnv::new();
    let dir = env.write_server("srv", "Test", &[]);
    env.write_global_config(&[dir.as_path()]);

    env.cmd()
        .args(["mods", "Test", "add", "999", "123"])
        .assert()
        .failure(); // a raw unknown ID is not resolvable without a URL

    env.cmd()
        .args([
            "mods",
            "Test",
            "add",
            "https://example.com/?id=999",
            "https://example.com/?id=123",
        ])
        .assert()
        .success();

    let log = env.tool_log("steamcmd");
    let nine = log.find("+workshop_download_item 107410 999").unwrap();
    let onetwothree = log.find("+workshop_download_item 107410 123").unwrap();
    assert!(nine < onetwothree, "downloads must follow input order");
}

#[test]
fn test_mods_add_unresolvable_token_fails() {
    let env = TestEnv::new();
    let dir = env.write_server("srv", "Test", &[]);
    env.write_global_config(&[dir.as_path()]);

    env.cmd()
        .args(["mods", "Test", "add", "notanid"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Cannot resolve mod reference 'notanid'.",
        ));

    // steamcmd must not have been invoked for an unresolvable token.
    assert!(!env.tool_log("steamcmd").contains("+workshop_download_item"));
}

#[test]
fn test_mods_list_prints_installed_set() {
    let env = TestEnv::new();
    let dir = env.write_server("srv", "Test", &["111", "222"]);
    env.write_global_config(&[dir.as_path()]);

    env.cmd()
        .args(["mods", "Test", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("111").and(predicate::str::contains("222")),
        );
}

#[test]
fn test_mods_list_empty_set() {
    let env = TestEnv::new();
    let dir = env.write_server("srv", "Test", &[]);
    env.write_global_config(&[dir.as_path()]);

    env.cmd()
        .args(["mods", "Test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mods installed on 'Test'."));
}

#[test]
fn test_mods_delete_strips_server_and_instances() {
    let env = TestEnv::new();
    let dir = env.write_server("srv", "Test", &["999"]);
    env.write_instance(&dir, "main", 2302, &["999"]);
    env.write_global_config(&[dir.as_path()]);

    env.cmd()
        .args(["mods", "Test", "delete", "999"])
        .assert()
        .success();

    let record = fs::read_to_string(dir.join("server.ini")).unwrap();
    assert!(!record.contains("999"));
}

#[test]
fn test_mods_delete_requires_membership() {
    let env = TestEnv::new();
    let dir = env.write_server("srv", "Test", &["111"]);
    env.write_global_config(&[dir.as_path()]);

    env.cmd()
        .args(["mods", "Test", "delete", "999"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot resolve mod reference"));
}
