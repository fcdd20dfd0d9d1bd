use std::str::FromStr;

use metatag_core::sanitize::url_scheme;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Public base URL of the site, without a trailing slash. Item
    /// permalinks, and so every fallback canonical link, are built under it.
    pub site_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `SITE_URL`             | `http://localhost:3000`    |
    ///
    /// Panics on malformed numbers or a `SITE_URL` that is not an absolute
    /// `http(s)` URL, so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: var("HOST", "0.0.0.0"),
            port: parse_var("PORT", &var("PORT", "3000")),
            cors_origins,
            request_timeout_secs: parse_var(
                "REQUEST_TIMEOUT_SECS",
                &var("REQUEST_TIMEOUT_SECS", "30"),
            ),
            shutdown_timeout_secs: parse_var(
                "SHUTDOWN_TIMEOUT_SECS",
                &var("SHUTDOWN_TIMEOUT_SECS", "30"),
            ),
            site_url: normalize_site_url(&var("SITE_URL", "http://localhost:3000")),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> T
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}"))
}

/// Trim whitespace and trailing slashes; require an `http` or `https` scheme.
fn normalize_site_url(raw: &str) -> String {
    let site_url = raw.trim().trim_end_matches('/');
    let scheme = url_scheme(site_url).map(str::to_ascii_lowercase);
    match scheme.as_deref() {
        Some("http" | "https") => site_url.to_string(),
        _ => panic!("SITE_URL must be an absolute http(s) URL, got '{raw}'"),
    }
}
