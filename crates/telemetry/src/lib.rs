// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shopmon-telemetry: payload construction and transmission of deployment
//! records to the monitoring service, including the compressed output
//! upload to a presigned URL.

pub mod client;
pub mod error;
pub mod payload;
pub mod response;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use client::{Telemetry, TelemetryClient};
pub use error::TelemetryError;
pub use payload::{build_payload, Payload};
pub use response::TelemetryResponse;
