//! Builds the client configuration from the environment (and `.env`).

use std::time::Duration;

use anyhow::{Context, Result};
use ivvy_api::ClientConfig;

pub const BASE_URL_VAR: &str = "IVVY_BASE_URL";
pub const AUTHORIZATION_VAR: &str = "IVVY_AUTHORIZATION";
pub const TIMEOUT_VAR: &str = "IVVY_TIMEOUT_SECS";

pub fn load() -> Result<ClientConfig> {
    dotenvy::dotenv().ok();
    from_lookup(|key| std::env::var(key).ok())
}

/// Reads settings through `lookup` so tests need not touch the process env.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();
    if let Some(base_url) = lookup(BASE_URL_VAR) {
        config = config.with_base_url(&base_url);
    }
    if let Some(authorization) = lookup(AUTHORIZATION_VAR) {
        config = config.with_authorization(&authorization);
    }
    if let Some(secs) = lookup(TIMEOUT_VAR) {
        let secs: u64 = secs
            .parse()
            .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_VAR))?;
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}
