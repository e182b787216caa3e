// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry transmission errors.
//!
//! Every variant here is classified as an enrichment failure by the
//! orchestrator: logged, never fatal to the deployment run.

/// Errors from submitting a deployment record or uploading its output.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The payload could not be serialized. Not retried.
    #[error("failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Connection, DNS, TLS, or timeout failure on the submission.
    #[error("failed to send request: {0}")]
    Transport(#[source] Box<ureq::Error>),

    /// The endpoint answered outside [200, 300).
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The 2xx response body could not be read.
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] std::io::Error),

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The zstd encoder failed while compressing the output.
    #[error("failed to compress output: {0}")]
    Compress(#[source] std::io::Error),

    /// The presigned upload answered outside [200, 300).
    #[error("upload returned status {status}: {body}")]
    UploadStatus { status: u16, body: String },

    /// Connection-level failure on the presigned upload.
    #[error("failed to upload output: {0}")]
    UploadTransport(#[source] Box<ureq::Error>),
}
