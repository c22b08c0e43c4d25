use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline state for a saved funding application.
/// Transitions saved -> applied -> following_up -> won | lost; `set-status`
/// accepts any target so a user can correct mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Saved,
    Applied,
    FollowingUp,
    Won,
    Lost,
}

/// One tracked funding application, persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationEntry {
    pub id: String,
    pub repo_id: String,
    pub funding_id: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: String,
    pub date_added: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_applied: Option<DateTime<Utc>>,
}
