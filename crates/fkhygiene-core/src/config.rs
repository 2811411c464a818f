use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => match raw.as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                other => Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: format!("expected a boolean, got \"{other}\""),
                }),
            },
        }
    };

    let api_base = or_default("FKHYGIENE_API_BASE", "https://2.rome.api.flipkart.com");
    let output_dir = PathBuf::from(or_default("FKHYGIENE_OUTPUT_DIR", "./flipkart_outputs"));
    let log_level = or_default("FKHYGIENE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("FKHYGIENE_REQUEST_TIMEOUT_SECS", "30")?;
    let retry_after_default_secs = parse_u64("FKHYGIENE_RETRY_AFTER_DEFAULT_SECS", "60")?;
    let proxy_url = lookup("FKHYGIENE_PROXY_URL").ok();
    let accept_invalid_certs = parse_bool("FKHYGIENE_ACCEPT_INVALID_CERTS", false)?;

    Ok(AppConfig {
        api_base,
        output_dir,
        log_level,
        request_timeout_secs,
        retry_after_default_secs,
        proxy_url,
        accept_invalid_certs,
    })
}
