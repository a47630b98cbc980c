use leptos::prelude::*;

use super::api_utils::api_base;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_LOOKUP_LIMIT: usize = 20;

/// Application settings, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin, paths such as `/item/list` are appended to it
    pub api_base: String,
    /// Keep the access token in sessionStorage across page reloads
    pub persist_session: bool,
    /// Rows per page in entity lists
    pub page_size: usize,
    /// Rows per batch in lookup dialogs
    pub lookup_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            persist_session: false,
            page_size: DEFAULT_PAGE_SIZE,
            lookup_limit: DEFAULT_LOOKUP_LIMIT,
        }
    }
}

impl AppConfig {
    /// Compile-time overrides on top of the browser location
    pub fn from_env() -> Self {
        Self::from_overrides(
            api_base(),
            option_env!("MARKET_PERSIST_SESSION"),
            option_env!("MARKET_PAGE_SIZE"),
            option_env!("MARKET_LOOKUP_LIMIT"),
        )
    }

    pub fn from_overrides(
        api_base: String,
        persist_session: Option<&str>,
        page_size: Option<&str>,
        lookup_limit: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base,
            persist_session: parse_flag(persist_session),
            page_size: parse_positive(page_size).unwrap_or(defaults.page_size),
            lookup_limit: parse_positive(lookup_limit).unwrap_or(defaults.lookup_limit),
        }
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|v| *v > 0)
}

/// Hook to access the configuration provided by `App`
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
