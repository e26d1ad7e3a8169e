use std::path::PathBuf;
use std::str::FromStr;

use chrono::Datelike;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_CATEGORY_KEYS: &str = "shop,amenity,office,craft";

const REFERENCE_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key), chrono::Utc::now().year())
}

/// Build application configuration using the provided env-var lookup function.
///
/// `current_year` is the fallback for `BIZFIND_REFERENCE_YEAR`.
fn build_app_config<F>(lookup: F, current_year: i32) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        parse_number(&or_default(var, default)).map_err(|reason| invalid(var, reason))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        parse_number(&or_default(var, default)).map_err(|reason| invalid(var, reason))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        parse_number(&or_default(var, default)).map_err(|reason| invalid(var, reason))
    };

    let log_level = or_default("BIZFIND_LOG_LEVEL", "warn");
    let geocoder_url = or_default(
        "BIZFIND_GEOCODER_URL",
        "https://nominatim.openstreetmap.org/",
    );
    let overpass_url = or_default(
        "BIZFIND_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let user_agent = or_default(
        "BIZFIND_USER_AGENT",
        "bizfind/0.1 (local-business-finder)",
    );

    let request_timeout_secs = parse_u64("BIZFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let inter_request_delay_ms = parse_u64("BIZFIND_INTER_REQUEST_DELAY_MS", "1000")?;
    let result_limit = parse_u32("BIZFIND_RESULT_LIMIT", "100")?;
    let sample_count = parse_usize("BIZFIND_SAMPLE_COUNT", "50")?;

    let search_radius_deg = parse_radius(&or_default("BIZFIND_SEARCH_RADIUS_DEG", "0.02"))
        .map_err(|reason| invalid("BIZFIND_SEARCH_RADIUS_DEG", reason))?;

    let category_keys =
        parse_category_keys(&or_default("BIZFIND_CATEGORY_KEYS", DEFAULT_CATEGORY_KEYS))
            .map_err(|reason| invalid("BIZFIND_CATEGORY_KEYS", reason))?;

    let default_location = or_default("BIZFIND_DEFAULT_LOCATION", "Nashville, TN");
    if default_location.trim().is_empty() {
        return Err(invalid(
            "BIZFIND_DEFAULT_LOCATION",
            "must be non-empty".to_string(),
        ));
    }

    let reference_year = match lookup("BIZFIND_REFERENCE_YEAR") {
        Ok(raw) => parse_reference_year(&raw)
            .map_err(|reason| invalid("BIZFIND_REFERENCE_YEAR", reason))?,
        Err(_) => current_year,
    };

    let vocabulary_path = lookup("BIZFIND_VOCABULARY_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        log_level,
        geocoder_url,
        overpass_url,
        user_agent,
        request_timeout_secs,
        inter_request_delay_ms,
        search_radius_deg,
        result_limit,
        category_keys,
        sample_count,
        default_location,
        reference_year,
        vocabulary_path,
    })
}

fn parse_number<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| e.to_string())
}

/// Radius must be a positive number of degrees no larger than one.
fn parse_radius(raw: &str) -> Result<f64, String> {
    let radius = parse_number::<f64>(raw)?;
    if radius > 0.0 && radius <= 1.0 {
        Ok(radius)
    } else {
        Err(format!("{radius} is outside (0, 1]"))
    }
}

fn parse_reference_year(raw: &str) -> Result<i32, String> {
    let year = parse_number::<i32>(raw)?;
    if REFERENCE_YEARS.contains(&year) {
        Ok(year)
    } else {
        Err(format!("{year} is outside 1..=9999"))
    }
}

/// Splits a comma-separated key list, dropping blanks and duplicates.
fn parse_category_keys(raw: &str) -> Result<Vec<String>, String> {
    let mut keys: Vec<String> = Vec::new();
    for key in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
        {
            return Err(format!("invalid category key '{key}'"));
        }
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    if keys.is_empty() {
        return Err("at least one category key is required".to_string());
    }
    Ok(keys)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
