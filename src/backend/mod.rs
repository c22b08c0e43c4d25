//! Client for the fundlens backend REST contract.
//!
//! The backend owns all matching/report logic; this side only submits URLs,
//! polls status, and renders whatever JSON comes back. A connection failure
//! maps to a dedicated "backend not running" error so the CLI can print an
//! instructional message instead of a raw transport error.

pub mod poll;

use crate::error::{FundlensError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8765";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoStatus {
    Pending,
    Analyzed,
    Error,
}

impl RepoStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RepoStatus::Pending)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub repo_id: String,
    pub status: RepoStatus,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusRecord {
    pub status: RepoStatus,
    #[serde(default)]
    pub repo_name: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Report endpoints that share the `GET /api/repos/{id}/<kind>` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    Fundability,
    Dna,
    Velocity,
    Portfolio,
}

impl ReportKind {
    pub fn path_segment(self) -> &'static str {
        match self {
            ReportKind::Fundability => "fundability",
            ReportKind::Dna => "dna",
            ReportKind::Velocity => "velocity",
            ReportKind::Portfolio => "portfolio",
        }
    }
}

pub struct BackendClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn submit(&self, github_url: &str) -> Result<SubmitResponse> {
        self.post_json(
            "/api/repos/submit",
            &serde_json::json!({ "github_url": github_url }),
        )
    }

    pub fn status(&self, repo_id: &str) -> Result<StatusRecord> {
        self.get_json(&format!("/api/repos/{repo_id}"))
    }

    pub fn matches(&self, repo_id: &str, limit: u32) -> Result<Value> {
        self.get_json(&format!("/api/repos/{repo_id}/matches?limit={limit}"))
    }

    pub fn report(&self, repo_id: &str, kind: ReportKind) -> Result<Value> {
        self.get_json(&format!("/api/repos/{repo_id}/{}", kind.path_segment()))
    }

    pub fn generate_application(&self, repo_id: &str, funding_id: &str) -> Result<Value> {
        self.post_json(
            &format!("/api/repos/{repo_id}/generate-application"),
            &serde_json::json!({ "funding_id": funding_id }),
        )
    }

    pub fn roadmap(&self, repo_id: &str, funding_ids: &[String]) -> Result<Value> {
        self.post_json(
            &format!("/api/repos/{repo_id}/roadmap"),
            &serde_json::json!({ "funding_ids": funding_ids }),
        )
    }

    pub fn scan_org(&self, org: &str) -> Result<Value> {
        self.post_json("/api/org/scan", &serde_json::json!({ "org": org }))
    }

    pub fn analyze_dependencies(&self, content: &str, ecosystem: &str) -> Result<Value> {
        self.post_json(
            "/api/dependencies/analyze",
            &serde_json::json!({ "content": content, "ecosystem": ecosystem }),
        )
    }

    pub fn funding_sources(&self) -> Result<Value> {
        self.get_json("/api/funding-sources")
    }

    pub fn stats(&self) -> Result<Value> {
        self.get_json("/api/stats")
    }

    pub fn leaderboard(&self) -> Result<Value> {
        self.get_json("/api/leaderboard")
    }

    pub fn trending(&self) -> Result<Value> {
        self.get_json("/api/trending")
    }

    pub fn bounties(&self) -> Result<Value> {
        self.get_json("/api/bounties")
    }

    pub fn settings(&self) -> Result<Value> {
        self.get_json("/api/settings")
    }

    pub fn update_settings(&self, settings: &Value) -> Result<Value> {
        self.post_json("/api/settings", settings)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "backend GET");
        let response = self.http.get(&url).send().map_err(|e| self.map_connect(e))?;
        self.decode(response, &url)
    }

    fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "backend POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| self.map_connect(e))?;
        self.decode(response, &url)
    }

    fn decode<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::blocking::Response,
        url: &str,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(FundlensError::BackendStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json()?)
    }

    fn map_connect(&self, error: reqwest::Error) -> FundlensError {
        if error.is_connect() {
            FundlensError::BackendUnavailable(self.base_url().to_string())
        } else {
            FundlensError::Http(error)
        }
    }
}
