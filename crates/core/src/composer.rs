// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! composer.json manifest reading.
//!
//! Only the `require` section contributes to telemetry; `require-dev` is
//! ignored. A missing manifest is not an error — projects without one just
//! report an empty dependency map.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Errors from reading a composer manifest.
#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    require: BTreeMap<String, String>,
}

/// Read the `require` section of a composer.json file as a flat
/// package-name → version-constraint map.
pub fn read_composer_data(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, String>, ComposerError> {
    let path = path.as_ref();

    let raw = match std::fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(err) => {
            return Err(ComposerError::Read {
                path: path.display().to_string(),
                source: err,
            })
        }
    };

    let manifest: ComposerManifest =
        serde_json::from_slice(&raw).map_err(|source| ComposerError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    Ok(manifest.require)
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
