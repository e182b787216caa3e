// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment pipeline: run the command, echo its output, report telemetry.
//!
//! The pipeline is strictly linear. Once the target command has produced a
//! result, everything downstream is best-effort: enrichment failures warn
//! and continue, and the returned exit code is always the target command's
//! own.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use shopmon_core::{read_composer_data, Clock, Config};
use shopmon_exec::execute;
use shopmon_telemetry::{build_payload, Telemetry};

use crate::exit_error::ExitError;

/// Dependency manifest read from the working directory.
pub const COMPOSER_MANIFEST: &str = "composer.json";

const USAGE: &str = "usage: shopmon deploy -- <command>\n\nExample:\n  shopmon deploy -- php artisan migrate";

/// Run the deployment pipeline and return the target command's exit code.
pub fn run(
    config: &Config,
    command_args: &[String],
    composer_manifest: &Path,
    stdout: &mut impl Write,
    telemetry: &impl Telemetry,
    clock: &impl Clock,
) -> Result<i32, ExitError> {
    // The argument parser strips the `--` separator; an empty vector means
    // nothing followed it.
    if command_args.is_empty() {
        return Err(ExitError::usage(USAGE));
    }
    let command = command_args.join(" ");

    let result = execute(&command, clock)?;

    // Echo the captured output before any diagnostics so ordering on the
    // caller's terminal is stable.
    if let Err(err) = write!(stdout, "{}", result.output).and_then(|()| stdout.flush()) {
        tracing::warn!(error = %err, "failed to echo command output");
    }

    let composer = match read_composer_data(composer_manifest) {
        Ok(composer) => composer,
        Err(err) => {
            eprintln!("\nWarning: Failed to read composer.json: {err}");
            BTreeMap::new()
        }
    };

    let payload = build_payload(config, &result, &command, composer);
    match telemetry.send_and_parse(&payload, Some(&result.output)) {
        Ok(response) => {
            if let Some(url) = response.url.as_deref().filter(|url| !url.is_empty()) {
                eprintln!("\nDeployment URL: {url}");
            }
            if let Some(id) = response
                .deployment_id
                .as_deref()
                .filter(|id| !id.is_empty())
            {
                eprintln!("Deployment ID: {id}");
            }
        }
        Err(err) => eprintln!("\nWarning: Failed to send telemetry: {err}"),
    }

    Ok(result.return_code)
}

#[cfg(test)]
#[path = "deploy_tests.rs"]
mod tests;
