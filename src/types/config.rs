use serde::Deserialize;

/// Layered TOML configuration. Every field is optional; [`crate::config`]
/// fills in defaults and applies environment overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FundlensConfig {
    pub backend: Option<BackendConfig>,
    pub github: Option<GitHubConfig>,
    pub tracker: Option<TrackerConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub poll_max_attempts: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubConfig {
    pub api_url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerConfig {
    pub path: Option<String>,
}
