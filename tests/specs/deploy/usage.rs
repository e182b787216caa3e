//! Deploy usage specs
//!
//! Malformed invocations must fail before any process is spawned.

use crate::prelude::*;

#[test]
fn missing_separator_is_rejected() {
    Project::empty()
        .shopmon()
        .args(&["deploy", "echo", "hi"])
        .env("SHOPMON_API_KEY", "token")
        .fails()
        .stdout_is("")
        .stderr_has("unexpected argument");
}

#[test]
fn separator_with_no_command_shows_usage() {
    Project::empty()
        .shopmon()
        .args(&["deploy", "--"])
        .env("SHOPMON_API_KEY", "token")
        .code(2)
        .stdout_is("")
        .stderr_has("usage: shopmon deploy -- <command>")
        .stderr_has("shopmon deploy -- php artisan migrate");
}

#[test]
fn deploy_without_arguments_shows_usage() {
    Project::empty()
        .shopmon()
        .args(&["deploy"])
        .env("SHOPMON_API_KEY", "token")
        .code(2)
        .stdout_is("")
        .stderr_has("usage: shopmon deploy -- <command>");
}

#[test]
fn missing_api_key_is_rejected_before_running() {
    Project::empty()
        .shopmon()
        .args(&["deploy", "--", "echo", "hi"])
        .code(1)
        .stdout_is("")
        .stderr_has("SHOPMON_API_KEY environment variable must be set");
}
