// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking spawn-and-wait execution.

use std::process::{Command, Stdio};

use shopmon_core::Clock;

use crate::error::ExecError;
use crate::result::ExecutionResult;

/// Run a whitespace-tokenized command line, capturing stdout and stderr
/// into one combined buffer.
///
/// Tokenization is plain whitespace splitting: no quoting, redirection, or
/// pipe support. This is a documented limitation of the deploy wrapper,
/// not something to paper over here.
///
/// The only failure is an empty command line. A process that cannot be
/// spawned, or that terminated without an exit status, is reported as a
/// successful result with exit code 1 — the caller still gets timestamps
/// and whatever output was captured.
pub fn execute(command_line: &str, clock: &impl Clock) -> Result<ExecutionResult, ExecError> {
    let mut tokens = command_line.split_whitespace();
    let program = tokens.next().ok_or(ExecError::EmptyCommand)?;
    let args: Vec<&str> = tokens.collect();

    let started_at = clock.now();
    let outcome = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();
    let finished_at = clock.now();

    let (output, return_code) = match outcome {
        Ok(out) => {
            let mut merged = out.stdout;
            merged.extend_from_slice(&out.stderr);
            (
                String::from_utf8_lossy(&merged).into_owned(),
                out.status.code().unwrap_or(1),
            )
        }
        Err(err) => {
            tracing::debug!(command = program, error = %err, "failed to spawn command");
            (String::new(), 1)
        }
    };

    Ok(ExecutionResult::new(
        output,
        return_code,
        started_at,
        finished_at,
    ))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
