use crate::app_config::AppConfig;
use crate::validate::UnknownFieldPolicy;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("CRAWLMOCK_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("CRAWLMOCK_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("CRAWLMOCK_LOG_LEVEL", "info");

    let creator_ids_path = PathBuf::from(or_default(
        "CRAWLMOCK_CREATOR_IDS_PATH",
        "./config/creator_ids.yaml",
    ));

    let unknown_fields = or_default("CRAWLMOCK_UNKNOWN_FIELDS", "ignore")
        .parse::<UnknownFieldPolicy>()
        .map_err(|reason| invalid("CRAWLMOCK_UNKNOWN_FIELDS", reason))?;

    let max_body_bytes = or_default("CRAWLMOCK_MAX_BODY_BYTES", "16777216")
        .parse::<usize>()
        .map_err(|e| invalid("CRAWLMOCK_MAX_BODY_BYTES", e.to_string()))?;
    if max_body_bytes == 0 {
        return Err(invalid(
            "CRAWLMOCK_MAX_BODY_BYTES",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        bind_addr,
        log_level,
        creator_ids_path,
        unknown_fields,
        max_body_bytes,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
