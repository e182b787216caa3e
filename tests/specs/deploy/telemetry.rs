//! Telemetry wire specs against a stub monitoring endpoint.

use crate::prelude::*;

#[test]
fn posts_record_and_prints_deployment_info() {
    let server = StubServer::serve(vec![StubResponse::ok(
        r#"{"result":{"data":{"url":"https://shopmon.fos.gg/d/1","deployment_id":"abc123"}}}"#,
    )]);
    let temp = Project::empty();
    temp.file(
        "composer.json",
        r#"{"require":{"php":">=8.1"},"require-dev":{"x":"1.0"}}"#,
    );

    temp.shopmon()
        .args(&["deploy", "--", "echo", "deploying"])
        .env("SHOPMON_API_KEY", "secret-token")
        .env("SHOPMON_BASE_URL", &server.url())
        .env("SHOPMON_SHOP_ID", "42")
        .env("SHOPMON_DEPLOYMENT_VERSION_REFERENCE", "v2.0.0")
        .code(0)
        .stdout_is("deploying\n")
        .stderr_has("Deployment URL: https://shopmon.fos.gg/d/1")
        .stderr_has("Deployment ID: abc123");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/trpc/cli.createDeployment");
    assert_eq!(request.header("Authorization"), Some("Bearer secret-token"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(&request.body_text()).unwrap();
    assert_eq!(body["command"], "echo deploying");
    assert_eq!(body["return_code"], 0);
    assert_eq!(body["shop_id"], 42);
    assert_eq!(body["reference"], "v2.0.0");
    assert_eq!(body["composer"], serde_json::json!({"php": ">=8.1"}));
    // Output travels out-of-band; it is never embedded in the record.
    assert!(body.get("output").is_none());
    assert!(body["start_date"].as_str().unwrap().contains('T'));
    assert!(body["execution_time"].as_f64().unwrap() >= 0.0);
}

#[test]
fn uploads_compressed_output_when_presigned() {
    let upload = StubServer::serve(vec![StubResponse::ok("")]);
    let body = format!(
        r#"{{"result":{{"data":{{"deployment_id":"d1","upload_url":"{}/out.zst"}}}}}}"#,
        upload.url()
    );
    let server = StubServer::serve(vec![StubResponse::ok(&body)]);
    let temp = Project::empty();

    temp.shopmon()
        .args(&["deploy", "--", "echo", "captured"])
        .env("SHOPMON_API_KEY", "token")
        .env("SHOPMON_BASE_URL", &server.url())
        .env("SHOPMON_DEPLOYMENT_VERSION_REFERENCE", "ref")
        .code(0)
        .stderr_has("Deployment ID: d1");

    let uploads = upload.requests();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].method, "PUT");
    assert_eq!(uploads[0].path, "/out.zst");

    let decompressed = zstd::stream::decode_all(uploads[0].body.as_slice()).unwrap();
    assert_eq!(decompressed, b"captured\n");
}

#[test]
fn flat_response_shape_works_too() {
    let server = StubServer::serve(vec![StubResponse::ok(
        r#"{"url":"https://x","deployment_id":"flat-1"}"#,
    )]);
    let temp = Project::empty();

    temp.shopmon()
        .args(&["deploy", "--", "echo", "ok"])
        .env("SHOPMON_API_KEY", "token")
        .env("SHOPMON_BASE_URL", &server.url())
        .env("SHOPMON_DEPLOYMENT_VERSION_REFERENCE", "ref")
        .code(0)
        .stderr_has("Deployment URL: https://x")
        .stderr_has("Deployment ID: flat-1");
}

#[test]
fn redirect_reply_is_a_failed_submission_not_a_deployment() {
    let server = StubServer::serve(vec![StubResponse::status(
        399,
        r#"{"deployment_id":"not-real"}"#,
    )]);
    let temp = Project::empty();

    let output = temp
        .shopmon()
        .args(&["deploy", "--", "echo", "ok"])
        .env("SHOPMON_API_KEY", "token")
        .env("SHOPMON_BASE_URL", &server.url())
        .env("SHOPMON_DEPLOYMENT_VERSION_REFERENCE", "ref")
        .code(0)
        .stdout_is("ok\n")
        .stderr_has("Warning: Failed to send telemetry")
        .stderr_has("399");

    assert!(
        !output.stderr().contains("Deployment ID"),
        "a 3xx body must not be read as a deployment reply"
    );
}

#[test]
fn server_error_warns_but_keeps_the_run_alive() {
    let server = StubServer::serve(vec![StubResponse::status(500, "boom")]);
    let temp = Project::empty();

    temp.shopmon()
        .args(&["deploy", "--", "echo", "ok"])
        .env("SHOPMON_API_KEY", "token")
        .env("SHOPMON_BASE_URL", &server.url())
        .env("SHOPMON_DEPLOYMENT_VERSION_REFERENCE", "ref")
        .code(0)
        .stdout_is("ok\n")
        .stderr_has("Warning: Failed to send telemetry")
        .stderr_has("500")
        .stderr_has("boom");
}
