use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const API_URL_VAR: &str = "GITHUB_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the search endpoint hangs off.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Self {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!(%err, "no .env file loaded");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup(API_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { api_base_url }
    }

    /// A command-line value wins over the environment.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        self
    }
}
