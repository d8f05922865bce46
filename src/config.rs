use std::env;
use std::time::Duration;

/// Base URL used when neither the builder nor the environment overrides it.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Environment variable consulted for the API base URL.
pub const API_BASE_ENV: &str = "STOREFRONT_API_URL";

/// Page size for the Shop grid and the limit baked into the Home rails.
pub const PAGE_SIZE: u32 = 6;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the API base URL: explicit override wins, then the
/// `STOREFRONT_API_URL` environment variable, then the built-in default.
/// A trailing slash is stripped so paths can be joined with a plain `/`.
pub fn resolve_api_base(override_url: Option<&str>) -> String {
    let base = match override_url {
        Some(url) => url.to_string(),
        None => match env::var(API_BASE_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_API_BASE.to_string(),
        },
    };
    base.trim_end_matches('/').to_string()
}
