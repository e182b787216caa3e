// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit-status plumbing for the deploy pipeline.
//!
//! Nothing below `main()` terminates the process. A failure that should end
//! the invocation before the target command runs comes back as an
//! `ExitError`: code 2 for invocation mistakes, code 1 for everything else
//! (missing API key, an unrunnable command line). Once the target command
//! has run there is no `ExitError` at all — its own exit code is the
//! pipeline's success value.

use std::fmt;

use shopmon_exec::ExecError;

/// A failure paired with the exit code `main()` should terminate with.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invocation mistake, reported with the usage text. Exit code 2
    /// matches what the argument parser itself exits with.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// A runner refusal happens before anything is spawned and maps to exit
/// code 1, the same code an unlaunchable command produces.
impl From<ExecError> for ExitError {
    fn from(err: ExecError) -> Self {
        Self::new(1, format!("failed to execute command: {err}"))
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
