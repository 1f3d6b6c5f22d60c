//! Process configuration, read once from the environment.

use lb_inventory_provider::ApiCredentials;
use thiserror::Error;

use crate::policy::{CallPolicies, PageRetryPolicy};

/// Account whose zones are listed.
pub const ACCOUNT_ID_VAR: &str = "CF_ACCT_ID";
/// Email address sent as `X-Auth-Email`.
pub const API_EMAIL_VAR: &str = "CF_API_EMAIL";
/// Global API key sent as `X-Auth-Key`.
pub const API_KEY_VAR: &str = "CF_API_KEY";
/// Optional pagination retry policy (`unbounded` or a positive integer).
pub const PAGE_RETRIES_VAR: &str = "LB_INVENTORY_PAGE_RETRIES";

/// Configuration error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("No {0} provided.")]
    Missing(&'static str),

    /// An optional variable holds a value that cannot be used
    #[error("Invalid {var} value: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Everything the run needs, resolved before the first API call.
#[derive(Debug, Clone)]
pub struct Config {
    pub account_id: String,
    pub credentials: ApiCredentials,
    pub page_retry: PageRetryPolicy,
    pub policies: CallPolicies,
}

impl Config {
    /// Build the configuration from a variable lookup.
    ///
    /// Required variables are checked in the order account id, email, key;
    /// the first missing one is reported and the rest are not looked at.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = required(&lookup, ACCOUNT_ID_VAR)?;
        let api_email = required(&lookup, API_EMAIL_VAR)?;
        let api_key = required(&lookup, API_KEY_VAR)?;

        let page_retry = match lookup(PAGE_RETRIES_VAR).filter(|v| !v.is_empty()) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: PAGE_RETRIES_VAR,
                value,
            })?,
            None => PageRetryPolicy::default(),
        };

        Ok(Self {
            account_id,
            credentials: ApiCredentials::new(api_email, api_key),
            page_retry,
            policies: CallPolicies::default(),
        })
    }
}

/// Lookup backed by the process environment.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
}
