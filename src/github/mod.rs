//! Thin client for the public GitHub REST API v3.
//!
//! Unauthenticated by default; a configured token raises the rate limit.
//! 403/429 responses surface as a dedicated rate-limit error instead of a
//! generic failure.

use crate::error::{FundlensError, Result};
use crate::matching::RepoSignals;
use crate::types::scoring::ScoreInput;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("fundlens/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `owner/repo`, parsed from either the short form or a full github.com URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn parse(reference: &str) -> Result<Self> {
        let trimmed = reference.trim().trim_end_matches(".git");
        let path = match trimmed.find("github.com/") {
            Some(idx) => &trimmed[idx + "github.com/".len()..],
            None => trimmed,
        };
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            // A non-github.com URL leaves its scheme or host in the first
            // segment; owners never contain ':' or '.'.
            [owner, repo, ..] if !owner.contains([':', '.']) => Ok(Self {
                owner: (*owner).to_string(),
                repo: (*repo).to_string(),
            }),
            _ => Err(FundlensError::InvalidRepoRef(reference.to_string())),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub full_name: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub pushed_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
}

impl RepoRecord {
    pub fn score_input(&self) -> ScoreInput {
        ScoreInput {
            stars: self.stargazers_count,
            forks: self.forks_count,
            watchers: self.watchers_count,
            open_issues: self.open_issues_count,
            pushed_at: self.pushed_at,
            has_description: self
                .description
                .as_ref()
                .is_some_and(|d| !d.trim().is_empty()),
            has_topics: !self.topics.is_empty(),
        }
    }

    pub fn signals(&self) -> RepoSignals {
        RepoSignals {
            description: self.description.clone(),
            topics: self.topics.clone(),
            language: self.language.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub login: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
}

pub struct GitHubClient {
    http: reqwest::blocking::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn repo(&self, reference: &RepoRef) -> Result<RepoRecord> {
        self.get_json(&format!(
            "{}/repos/{}/{}",
            self.api_url, reference.owner, reference.repo
        ))
    }

    pub fn user(&self, login: &str) -> Result<UserRecord> {
        self.get_json(&format!("{}/users/{}", self.api_url, login))
    }

    pub fn user_repos(&self, login: &str) -> Result<Vec<RepoRecord>> {
        self.get_json(&format!(
            "{}/users/{}/repos?sort=updated&per_page=100",
            self.api_url, login
        ))
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "github request");
        let mut request = self.http.get(url).header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        let response = request.send()?;
        let status = response.status();
        if status.as_u16() == 403 || status.as_u16() == 429 {
            return Err(FundlensError::RateLimited(status.as_u16()));
        }
        if !status.is_success() {
            return Err(FundlensError::GitHubStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json()?)
    }
}
