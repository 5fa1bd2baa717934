use std::path::PathBuf;

use chrono::Utc;

pub const BASE_URL: &str = "https://www.smallslive.com";
pub const CALENDAR_URL: &str = "https://www.smallslive.com/events/calendar/";
pub const PAGE_CACHE_DIR: &str = "cache";
pub const OUTPUT_DIR: &str = "cache/json";

/// Everything a run needs to know, decided once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin that relative detail page links are resolved against.
    pub base_url: String,
    pub calendar_url: String,
    /// Raw HTML pages, one file per calendar month and per event.
    pub page_cache: PathBuf,
    /// Per-day JSON output.
    pub output: PathBuf,
    /// Stem of the cached calendar page, e.g. `November`.
    pub month: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            calendar_url: CALENDAR_URL.into(),
            page_cache: PAGE_CACHE_DIR.into(),
            output: OUTPUT_DIR.into(),
            month: current_month(),
        }
    }
}

impl Config {
    pub fn calendar_page(&self) -> String {
        format!("{}.html", self.month)
    }

    pub fn event_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

pub fn current_month() -> String {
    Utc::now().format("%B").to_string()
}
