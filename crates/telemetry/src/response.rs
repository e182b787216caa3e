// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed decoding of the monitoring service's deployment reply.

use serde::Deserialize;

/// Fields of interest from a `createDeployment` reply.
///
/// The endpoint has no fixed schema beyond these optionally-present keys,
/// so unknown fields are ignored and every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TelemetryResponse {
    /// Human-facing deployment URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Identifier assigned to this deployment.
    #[serde(default)]
    pub deployment_id: Option<String>,
    /// Presigned target for the compressed output upload.
    #[serde(default)]
    pub upload_url: Option<String>,
}

impl TelemetryResponse {
    /// Decode a response body.
    ///
    /// The tRPC endpoint wraps its data as `{"result": {"data": {...}}}`;
    /// when that envelope is present it is unwrapped, otherwise the body is
    /// used as-is.
    pub fn decode(body: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let data = match value.pointer("/result/data") {
            Some(data) => data.clone(),
            None => value,
        };
        serde_json::from_value(data)
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
