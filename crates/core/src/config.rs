// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide configuration, resolved once at startup.
//!
//! Components never read ambient environment state; `main()` builds a
//! [`Config`] and passes it down by reference.

/// Production monitoring endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://shopmon.fos.gg";

const ENV_BASE_URL: &str = "SHOPMON_BASE_URL";
const ENV_API_KEY: &str = "SHOPMON_API_KEY";
const ENV_SHOP_ID: &str = "SHOPMON_SHOP_ID";
const ENV_VERSION_REFERENCE: &str = "SHOPMON_DEPLOYMENT_VERSION_REFERENCE";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the monitoring service, without trailing slash handling.
    pub base_url: String,
    /// Bearer token for the monitoring API; `None` omits the header.
    pub api_token: Option<String>,
    /// Shop identifier; non-numeric values coerce to `None`.
    pub shop_id: Option<i64>,
    /// Explicit version reference, takes precedence over the git lookup.
    pub version_reference: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary lookup function.
    ///
    /// Empty values count as absent, matching unset-vs-empty environment
    /// variable semantics.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_token: get(ENV_API_KEY),
            shop_id: get(ENV_SHOP_ID).and_then(|raw| raw.parse::<i64>().ok()),
            version_reference: get(ENV_VERSION_REFERENCE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
