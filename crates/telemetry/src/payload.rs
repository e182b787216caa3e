// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry payload construction.

use std::collections::BTreeMap;
use std::process::Command;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use shopmon_core::Config;
use shopmon_exec::ExecutionResult;

/// Wire record POSTed to the monitoring endpoint.
///
/// Serialized exactly once per invocation. Optional fields are omitted from
/// the JSON body entirely rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<i64>,
    /// The literal command line that was executed, space-joined.
    pub command: String,
    /// Inline output for endpoints without presigned upload support.
    /// `None` in the primary flow, where output travels out-of-band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub return_code: i32,
    /// RFC3339, timezone-qualified.
    pub start_date: String,
    /// RFC3339, timezone-qualified.
    pub end_date: String,
    /// Wall-clock seconds.
    pub execution_time: f64,
    pub composer: BTreeMap<String, String>,
    #[serde(
        default,
        rename = "reference",
        skip_serializing_if = "Option::is_none"
    )]
    pub version_reference: Option<String>,
}

/// Build the telemetry record for one execution.
///
/// Pure composition except for the version-reference lookup, which never
/// fails the build — it degrades to an absent field.
pub fn build_payload(
    config: &Config,
    result: &ExecutionResult,
    command: &str,
    composer: BTreeMap<String, String>,
) -> Payload {
    Payload {
        shop_id: config.shop_id,
        command: command.to_string(),
        output: None,
        return_code: result.return_code,
        start_date: result.started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        end_date: result.finished_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        execution_time: result.execution_time,
        composer,
        version_reference: version_reference(config),
    }
}

/// Resolve the version reference: explicit configuration override first,
/// then the git HEAD revision of the working directory, else nothing.
fn version_reference(config: &Config) -> Option<String> {
    if let Some(reference) = &config.version_reference {
        return Some(reference.clone());
    }

    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() {
        None
    } else {
        Some(sha)
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
