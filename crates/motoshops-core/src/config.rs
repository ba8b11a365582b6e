use crate::app_config::{AppConfig, Environment, ShopSource};
use crate::ConfigError;

pub const DEFAULT_CSV_PATH: &str = "./data/eu_motorcycle_repairs.csv";
pub const DEFAULT_REMOTE_TABLE: &str = "motorcycle_shops";
pub const DEFAULT_USER_AGENT: &str = "motoshops/0.1 (repair-directory)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load application configuration with the shop source forced to a CSV
/// location, when one is given.
///
/// Remote-source variables are not consulted under an override, so a
/// half-configured remote setup does not block a one-off CSV run.
///
/// # Errors
///
/// Returns `ConfigError` if any remaining env var is invalid.
pub fn load_app_config_with_csv(location: Option<&str>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(with_csv_override(|key| std::env::var(key), location))
}

fn with_csv_override<'a, F>(
    lookup: F,
    location: Option<&'a str>,
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a
where
    F: Fn(&str) -> Result<String, std::env::VarError> + 'a,
{
    move |key| match (key, location) {
        ("MOTOSHOPS_SOURCE", Some(_)) => Ok("csv".to_string()),
        ("MOTOSHOPS_CSV_PATH", Some(location)) => Ok(location.to_string()),
        _ => lookup(key),
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("MOTOSHOPS_ENV", "development"))?;
    let bind_addr = parse_addr("MOTOSHOPS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MOTOSHOPS_LOG_LEVEL", "info");

    let source = match or_default("MOTOSHOPS_SOURCE", "csv").as_str() {
        "csv" => ShopSource::csv(&or_default("MOTOSHOPS_CSV_PATH", DEFAULT_CSV_PATH)),
        "remote" => ShopSource::RemoteTable {
            base_url: require("MOTOSHOPS_REMOTE_URL")?,
            api_key: require("MOTOSHOPS_REMOTE_KEY")?,
            table: or_default("MOTOSHOPS_REMOTE_TABLE", DEFAULT_REMOTE_TABLE),
        },
        other => {
            return Err(ConfigError::InvalidEnvVar {
                var: "MOTOSHOPS_SOURCE".to_string(),
                reason: format!("expected \"csv\" or \"remote\", got \"{other}\""),
            })
        }
    };

    let request_timeout_secs = parse_u64("MOTOSHOPS_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MOTOSHOPS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("MOTOSHOPS_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        source,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MOTOSHOPS_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
