//! Integration tests for the credentials file.

use serde_json::{json, Value};
use shopify_publisher::prompt::{PromptError, ScriptedPrompter};
use shopify_publisher::store::{ConfigStore, StoreError};
use shopify_publisher::{AccessToken, Credentials};
use std::fs;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> ConfigStore {
    ConfigStore::new(dir.path().join("config.json"))
}

#[test]
fn test_existing_file_is_returned_without_prompting() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{ "shopName": "acme", "accessToken": "shpat_abc" }"#,
    )
    .unwrap();
    let mut prompter = ScriptedPrompter::new();

    let credentials = store.load(&mut prompter).unwrap();

    assert_eq!(
        credentials,
        Credentials {
            shop_name: "acme".to_string(),
            access_token: AccessToken::new("shpat_abc"),
        }
    );
    assert!(prompter.recorded().is_empty());
}

#[test]
fn test_existing_file_is_not_validated() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{ "shopName": "Not A Valid Shop!", "accessToken": "" }"#,
    )
    .unwrap();

    let credentials = store.load(&mut ScriptedPrompter::new()).unwrap();

    assert_eq!(credentials.shop_name, "Not A Valid Shop!");
    assert!(credentials.access_token.is_empty());
}

#[test]
fn test_missing_file_prompts_once_and_writes_json() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut prompter = ScriptedPrompter::new().text("acme").text("tok");

    let credentials = store.load(&mut prompter).unwrap();

    assert_eq!(credentials.shop_name, "acme");
    assert_eq!(credentials.access_token.as_ref(), "tok");
    assert_eq!(prompter.recorded().len(), 2);

    let contents = fs::read_to_string(store.path()).unwrap();
    let written: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(written, json!({ "shopName": "acme", "accessToken": "tok" }));
    assert!(contents.contains("\n  \"shopName\": \"acme\""));

    assert!(!dir.path().join("config.tmp").exists());
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_interrupted_earlier_write_does_not_block_next_run() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    // Left over by a run that died before renaming into place.
    fs::write(dir.path().join("config.tmp"), r#"{ "shopName": "ac"#).unwrap();

    let credentials = store
        .load(&mut ScriptedPrompter::new().text("acme").text("tok"))
        .unwrap();

    assert!(!dir.path().join("config.tmp").exists());
    let reloaded = store.load(&mut ScriptedPrompter::new()).unwrap();
    assert_eq!(reloaded, credentials);
}

#[test]
fn test_second_load_reads_what_first_load_wrote() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let first = store
        .load(&mut ScriptedPrompter::new().text("acme").text("tok"))
        .unwrap();
    let mut prompter = ScriptedPrompter::new();
    let second = store.load(&mut prompter).unwrap();

    assert_eq!(first, second);
    assert!(prompter.recorded().is_empty());
}

#[test]
fn test_cancelled_prompt_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut prompter = ScriptedPrompter::new().text("acme").cancel();

    let result = store.load(&mut prompter);

    assert!(matches!(
        result,
        Err(StoreError::Prompt(PromptError::Cancelled))
    ));
    assert!(!store.path().exists());
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "{ shopName: acme").unwrap();

    let result = store.load(&mut ScriptedPrompter::new());

    assert!(matches!(result, Err(StoreError::Parse { .. })));
}

#[test]
fn test_unwritable_location_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new(dir.path().join("missing-dir").join("config.json"));

    let result = store.load(&mut ScriptedPrompter::new().text("acme").text("tok"));

    assert!(matches!(result, Err(StoreError::Write { .. })));
}
