//! Manifest enrichment specs
//!
//! composer.json problems degrade the payload, never the run.

use crate::prelude::*;

fn deploy_echo(temp: &Project, server: &StubServer) -> SpecOutput {
    temp.shopmon()
        .args(&["deploy", "--", "echo", "ok"])
        .env("SHOPMON_API_KEY", "token")
        .env("SHOPMON_BASE_URL", &server.url())
        .env("SHOPMON_DEPLOYMENT_VERSION_REFERENCE", "ref")
        .code(0)
}

#[test]
fn malformed_manifest_warns_and_sends_empty_map() {
    let server = StubServer::serve(vec![StubResponse::ok("{}")]);
    let temp = Project::empty();
    temp.file("composer.json", "invalid json");

    deploy_echo(&temp, &server).stderr_has("Warning: Failed to read composer.json");

    let body: serde_json::Value =
        serde_json::from_str(&server.requests()[0].body_text()).unwrap();
    assert_eq!(body["composer"], serde_json::json!({}));
}

#[test]
fn missing_manifest_sends_empty_map_without_warning() {
    let server = StubServer::serve(vec![StubResponse::ok("{}")]);
    let temp = Project::empty();

    let output = deploy_echo(&temp, &server);
    assert!(
        !output.stderr().contains("Warning: Failed to read composer.json"),
        "a missing manifest is not an error"
    );

    let body: serde_json::Value =
        serde_json::from_str(&server.requests()[0].body_text()).unwrap();
    assert_eq!(body["composer"], serde_json::json!({}));
}

#[test]
fn dependencies_flow_into_the_record() {
    let server = StubServer::serve(vec![StubResponse::ok("{}")]);
    let temp = Project::empty();
    temp.file(
        "composer.json",
        r#"{
            "name": "shopware/production",
            "require": {
                "php": ">=8.1",
                "shopware/core": "6.5.0.0",
                "symfony/flex": "^2.0"
            },
            "require-dev": {
                "phpunit/phpunit": "^9.5"
            }
        }"#,
    );

    deploy_echo(&temp, &server);

    let body: serde_json::Value =
        serde_json::from_str(&server.requests()[0].body_text()).unwrap();
    assert_eq!(
        body["composer"],
        serde_json::json!({
            "php": ">=8.1",
            "shopware/core": "6.5.0.0",
            "symfony/flex": "^2.0"
        })
    );
}
