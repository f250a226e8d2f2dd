//! End-to-end tests for the publishing session.
//!
//! Each test runs the full driver against a mock Admin API, a scripted
//! prompter and a temporary credentials file.

use serde_json::{json, Value};
use shopify_publisher::prompt::ScriptedPrompter;
use shopify_publisher::publications::PublicationsError;
use shopify_publisher::store::{ConfigStore, StoreError};
use shopify_publisher::{driver, ClientConfig, ConfigError, Error, HostUrl};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRAPHQL_PATH: &str = "/admin/api/2021-07/graphql.json";

struct Harness {
    server: MockServer,
    _dir: TempDir,
    store: ConfigStore,
}

impl Harness {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        Self {
            server: MockServer::start().await,
            _dir: dir,
            store,
        }
    }

    async fn with_credentials() -> Self {
        let harness = Self::new().await;
        fs::write(
            harness.store.path(),
            r#"{ "shopName": "acme", "accessToken": "tok" }"#,
        )
        .unwrap();
        harness
    }

    fn config(&self) -> ClientConfig {
        ClientConfig::builder()
            .host(HostUrl::new(self.server.uri()).unwrap())
            .build()
    }

    async fn mock_operation(&self, marker: &str, data: Value, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(body_string_contains(marker))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    async fn mock_all_publications(&self) {
        self.mock_operation(
            "query publications",
            json!({
                "publications": {
                    "edges": [
                        { "node": { "gid": "gid://shopify/Publication/1", "name": "Online Store" } }
                    ]
                }
            }),
            1,
        )
        .await;
    }

    async fn mock_all_publications_never(&self) {
        self.mock_operation("query publications", json!({}), 0).await;
    }

    async fn mock_product_publications(&self, expected_calls: u64) {
        self.mock_operation(
            "query productPublications",
            json!({ "product": { "resourcePublications": { "edges": [] } } }),
            expected_calls,
        )
        .await;
    }

    async fn mock_publish(&self, user_errors: Value, expected_calls: u64) {
        self.mock_operation(
            "mutation publishablePublish",
            json!({ "publishablePublish": { "userErrors": user_errors } }),
            expected_calls,
        )
        .await;
    }

    async fn run(&self, prompter: &mut ScriptedPrompter) -> (Result<(), Error>, String) {
        let mut out = Vec::new();
        let result = driver::run(&self.store, &self.config(), prompter, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }
}

#[tokio::test]
async fn test_first_run_captures_credentials_and_lists_publications() {
    let harness = Harness::new().await;
    harness.mock_all_publications().await;
    let mut prompter = ScriptedPrompter::new().text("acme").text("tok").text("");

    let (result, output) = harness.run(&mut prompter).await;

    result.unwrap();
    let written: Value =
        serde_json::from_str(&fs::read_to_string(harness.store.path()).unwrap()).unwrap();
    assert_eq!(written, json!({ "shopName": "acme", "accessToken": "tok" }));

    assert!(output.contains("\nAll publications (1)\n"));
    assert!(output.contains("* Online Store (gid://shopify/Publication/1)\n"));
    assert!(output.ends_with("Done!\n"));
}

#[tokio::test]
async fn test_empty_product_id_ends_session_without_more_calls() {
    let harness = Harness::with_credentials().await;
    harness.mock_all_publications().await;
    harness.mock_product_publications(0).await;
    harness.mock_publish(json!([]), 0).await;
    let mut prompter = ScriptedPrompter::new().text("");

    let (result, output) = harness.run(&mut prompter).await;

    result.unwrap();
    assert!(output.ends_with("Done!\n"));
    assert!(prompter.is_exhausted());
}

#[tokio::test]
async fn test_whitespace_product_id_is_looked_up_not_treated_as_stop() {
    let harness = Harness::with_credentials().await;
    harness.mock_all_publications().await;
    harness.mock_product_publications(1).await;
    let mut prompter = ScriptedPrompter::new().text("  ").choice(0).text("");

    let (result, output) = harness.run(&mut prompter).await;

    result.unwrap();
    assert!(output.contains("Skipped.\n"));
    assert!(prompter.is_exhausted());
}

#[tokio::test]
async fn test_cancelled_product_id_ends_session() {
    let harness = Harness::with_credentials().await;
    harness.mock_all_publications().await;
    harness.mock_product_publications(0).await;
    let mut prompter = ScriptedPrompter::new().cancel();

    let (result, output) = harness.run(&mut prompter).await;

    result.unwrap();
    assert!(output.ends_with("Done!\n"));
}

#[tokio::test]
async fn test_skip_returns_to_product_prompt_without_publishing() {
    let harness = Harness::with_credentials().await;
    harness.mock_all_publications().await;
    harness.mock_product_publications(1).await;
    harness.mock_publish(json!([]), 0).await;
    let mut prompter = ScriptedPrompter::new().text("42").choice(0).text("");

    let (result, output) = harness.run(&mut prompter).await;

    result.unwrap();
    let prompts: Vec<&str> = prompter
        .recorded()
        .iter()
        .map(|p| p.prompt.as_str())
        .collect();
    assert_eq!(
        prompts,
        vec![
            "Product ID (leave empty to finish)",
            "Publish to",
            "Product ID (leave empty to finish)",
        ]
    );
    assert_eq!(prompter.recorded()[1].items, vec!["Skip", "Online Store"]);
    assert!(output.contains("\nProduct publications (0)\n"));
    assert!(output.contains("Skipped.\n"));
}

#[tokio::test]
async fn test_selected_publication_is_published() {
    let harness = Harness::with_credentials().await;
    harness.mock_all_publications().await;
    harness.mock_product_publications(1).await;
    harness.mock_publish(json!([]), 1).await;
    let mut prompter = ScriptedPrompter::new().text("42").choice(1).text("");

    let (result, output) = harness.run(&mut prompter).await;

    result.unwrap();
    assert!(output.contains("Published product 42 to Online Store.\n"));
    assert!(output.ends_with("Done!\n"));
}

#[tokio::test]
async fn test_user_errors_abort_the_session() {
    let harness = Harness::with_credentials().await;
    harness.mock_all_publications().await;
    harness.mock_product_publications(1).await;
    harness
        .mock_publish(json!([{ "field": null, "message": "already published" }]), 1)
        .await;
    // A second product id is queued but must never be asked for.
    let mut prompter = ScriptedPrompter::new().text("42").choice(1).text("43");

    let (result, output) = harness.run(&mut prompter).await;

    match result {
        Err(Error::Publications(PublicationsError::UnableToPublish { user_errors })) => {
            assert_eq!(user_errors[0].message, "already published");
        }
        other => panic!("Expected UnableToPublish, got {other:?}"),
    }
    assert!(!prompter.is_exhausted());
    assert!(!output.contains("Done!"));
}

#[tokio::test]
async fn test_malformed_credentials_fail_before_any_request() {
    let harness = Harness::new().await;
    fs::write(harness.store.path(), "not json").unwrap();
    harness.mock_all_publications_never().await;

    let (result, output) = harness.run(&mut ScriptedPrompter::new()).await;

    assert!(matches!(
        result,
        Err(Error::Store(StoreError::Parse { .. }))
    ));
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_invalid_shop_name_is_a_config_error() {
    let harness = Harness::new().await;
    fs::write(
        harness.store.path(),
        r#"{ "shopName": "acme.example.com", "accessToken": "tok" }"#,
    )
    .unwrap();

    let (result, _) = harness.run(&mut ScriptedPrompter::new()).await;

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidShopDomain { .. }))
    ));
}
