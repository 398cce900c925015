use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://jira.despegar.com";
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub credentials_path: PathBuf,
}

impl Config {
    /// Reads overrides from the environment (and `.env`, once loaded).
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("JIRA_BASE_URL").ok(),
            env::var("JIRA_CREDENTIALS").ok(),
        )
    }

    fn from_vars(base_url: Option<String>, credentials_path: Option<String>) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            credentials_path: credentials_path
                .filter(|path| !path.is_empty())
                .unwrap_or_else(|| DEFAULT_CREDENTIALS_PATH.to_string())
                .into(),
        }
    }
}
