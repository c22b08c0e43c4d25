use thiserror::Error;

#[derive(Error, Debug)]
pub enum FundlensError {
    #[error("invalid GitHub repository reference: {0}")]
    InvalidRepoRef(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("GitHub API rate limit reached (HTTP {0}); retry later or configure a token")]
    RateLimited(u16),

    #[error("GitHub API request failed: HTTP {status} for {url}")]
    GitHubStatus { status: u16, url: String },

    #[error("backend not reachable at {0}; start the fundlens backend first")]
    BackendUnavailable(String),

    #[error("backend request failed: HTTP {status} for {url}")]
    BackendStatus { status: u16, url: String },

    #[error("analysis still pending after {attempts} polls ({seconds}s); run `status` again later")]
    PollTimeout { attempts: u32, seconds: u64 },

    #[error("cannot infer ecosystem from {0}; pass --ecosystem")]
    UnknownEcosystem(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FundlensError>;
