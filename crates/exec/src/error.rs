// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

/// Errors the runner itself can report.
///
/// A command that spawns but fails — or cannot be spawned at all — is not a
/// runner error; it is reported as an [`crate::ExecutionResult`] carrying a
/// non-zero exit code. Callers rely on that distinction.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The command line tokenized to nothing.
    #[error("no command given")]
    EmptyCommand,
}
