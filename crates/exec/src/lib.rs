// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shopmon-exec: blocking command execution with combined output capture.

pub mod error;
pub mod result;
pub mod run;

pub use error::ExecError;
pub use result::ExecutionResult;
pub use run::execute;
