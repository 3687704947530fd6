//! Runtime configuration.
//!
//! The API origin is baked in at build time from `HOUSE_HISAB_API_URL`
//! (empty means same origin) and can be overridden per browser by setting
//! `localStorage["hh_api_url"]`.

use gloo_storage::{LocalStorage, Storage};

pub const API_PREFIX: &str = "/api/v1";
pub const API_URL_KEY: &str = "hh_api_url";
pub const PREFS_KEY: &str = "hh_txn_prefs";

/// Rows shown in each dashboard bar chart.
pub const TOP_LIMIT: u32 = 8;
/// The dashboard reports on non-posting (planned) entries.
pub const DASHBOARD_POSTING: bool = false;

const BUILD_API_URL: Option<&str> = option_env!("HOUSE_HISAB_API_URL");

pub fn api_base() -> String {
    let stored: Option<String> = LocalStorage::get(API_URL_KEY).ok();
    resolve_base(stored.as_deref(), BUILD_API_URL)
}

fn resolve_base(stored: Option<&str>, built: Option<&str>) -> String {
    let pick = stored
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(built.map(str::trim))
        .unwrap_or("");
    pick.trim_end_matches('/').to_string()
}

/// Absolute URL for an API path such as `/transactions`.
pub fn api_url(base: &str, path: &str) -> String {
    format!("{base}{API_PREFIX}{path}")
}
