// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured outcome of a single command execution.

use chrono::{DateTime, Utc};

/// Immutable record of one command run.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Combined stdout + stderr. Ordering between the two streams is
    /// best-effort, not byte-interleaved.
    pub output: String,
    /// Exit code of the process; 1 when it could not start or died
    /// without a usable status.
    pub return_code: i32,
    /// Taken immediately before the spawn.
    pub started_at: DateTime<Utc>,
    /// Taken immediately after the process terminated.
    pub finished_at: DateTime<Utc>,
    /// Wall-clock seconds, never negative.
    pub execution_time: f64,
}

impl ExecutionResult {
    pub fn new(
        output: String,
        return_code: i32,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let elapsed_ms = (finished_at - started_at).num_milliseconds().max(0);
        Self {
            output,
            return_code,
            started_at,
            finished_at,
            execution_time: elapsed_ms as f64 / 1000.0,
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
