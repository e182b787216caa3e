// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transmission of telemetry records and the compressed output upload.

use std::io::Write;
use std::time::Duration;

use shopmon_core::Config;

use crate::error::TelemetryError;
use crate::payload::Payload;
use crate::response::TelemetryResponse;

const DEPLOYMENT_PATH: &str = "/trpc/cli.createDeployment";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the orchestrator and the wire, so specs can substitute a
/// fake transmitter.
pub trait Telemetry {
    fn send_and_parse(
        &self,
        payload: &Payload,
        output: Option<&str>,
    ) -> Result<TelemetryResponse, TelemetryError>;
}

/// Blocking client for the monitoring service.
///
/// Both the record submission and the presigned upload ride one agent with
/// a fixed timeout. Nothing is retried.
pub struct TelemetryClient {
    agent: ureq::Agent,
    base_url: String,
    auth_token: Option<String>,
}

impl TelemetryClient {
    pub fn new(config: &Config) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.api_token.clone(),
        }
    }

    /// Submit the payload and decode the reply.
    ///
    /// When the reply names an upload target and `output` was supplied, the
    /// zstd-compressed output is PUT there. An upload failure is logged as
    /// a warning and does not fail this call — the record submission has
    /// already succeeded at that point.
    pub fn send_and_parse(
        &self,
        payload: &Payload,
        output: Option<&str>,
    ) -> Result<TelemetryResponse, TelemetryError> {
        let body = serde_json::to_string(payload).map_err(TelemetryError::Serialize)?;

        let url = format!("{}{}", self.base_url, DEPLOYMENT_PATH);
        let mut request = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json");
        // Omit the header entirely when no token is configured; never send
        // an empty-valued Authorization header.
        if let Some(token) = &self.auth_token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }

        let response = match request.send_string(&body) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(TelemetryError::Status { status, body });
            }
            Err(err) => return Err(TelemetryError::Transport(Box::new(err))),
        };

        // The transport only classifies 4xx/5xx as errors; a 3xx the agent
        // did not follow still arrives here and is not a success either.
        let status = response.status();
        if !(200..300).contains(&status) {
            let body = response.into_string().unwrap_or_default();
            return Err(TelemetryError::Status { status, body });
        }

        let text = response.into_string().map_err(TelemetryError::ReadBody)?;
        let parsed =
            TelemetryResponse::decode(&text).map_err(TelemetryError::MalformedResponse)?;

        let upload_url = parsed.upload_url.as_deref().filter(|u| !u.is_empty());
        if let (Some(upload_url), Some(output)) = (upload_url, output) {
            if let Err(err) = self.upload_output(upload_url, output) {
                tracing::warn!(error = %err, "failed to upload deployment output");
            }
        }

        Ok(parsed)
    }

    /// zstd-compress the output and PUT it to the presigned URL.
    ///
    /// No headers beyond transport defaults; the URL itself carries the
    /// authorization.
    fn upload_output(&self, upload_url: &str, output: &str) -> Result<(), TelemetryError> {
        let compressed = compress(output.as_bytes()).map_err(TelemetryError::Compress)?;

        match self.agent.put(upload_url).send_bytes(&compressed) {
            Ok(response) => {
                let status = response.status();
                if (200..300).contains(&status) {
                    Ok(())
                } else {
                    let body = response.into_string().unwrap_or_default();
                    Err(TelemetryError::UploadStatus { status, body })
                }
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(TelemetryError::UploadStatus { status, body })
            }
            Err(err) => Err(TelemetryError::UploadTransport(Box::new(err))),
        }
    }
}

impl Telemetry for TelemetryClient {
    fn send_and_parse(
        &self,
        payload: &Payload,
        output: Option<&str>,
    ) -> Result<TelemetryResponse, TelemetryError> {
        TelemetryClient::send_and_parse(self, payload, output)
    }
}

/// Produce a single finalized zstd frame. A partial frame is useless to the
/// storage side, so the encoder is always finished before the buffer is
/// handed to the transport.
fn compress(input: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = zstd::stream::Encoder::new(Vec::new(), 0)?;
    encoder.write_all(input)?;
    encoder.finish()
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
