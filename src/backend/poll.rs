//! Bounded status polling.
//!
//! The dashboard polled every 2 seconds with no upper bound, which spins
//! forever against a dead backend. Here the loop is capped: a fixed interval
//! between polls and a maximum attempt count, after which the caller gets a
//! timeout error with the elapsed budget. Polling stops at the first
//! terminal status (`analyzed` or `error`) and issues no further requests.

use super::{BackendClient, StatusRecord};
use crate::error::{FundlensError, Result};
use std::time::Duration;
use tracing::info;

pub const DEFAULT_INTERVAL_SECS: u64 = 2;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 90;

#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Seam over "one status fetch" so the loop is testable without a server.
pub trait StatusSource {
    fn fetch_status(&self, repo_id: &str) -> Result<StatusRecord>;
}

impl StatusSource for BackendClient {
    fn fetch_status(&self, repo_id: &str) -> Result<StatusRecord> {
        self.status(repo_id)
    }
}

pub fn wait_for_analysis(
    source: &impl StatusSource,
    repo_id: &str,
    policy: PollPolicy,
) -> Result<StatusRecord> {
    wait_with_sleep(source, repo_id, policy, |interval| {
        std::thread::sleep(interval)
    })
}

fn wait_with_sleep(
    source: &impl StatusSource,
    repo_id: &str,
    policy: PollPolicy,
    mut sleep: impl FnMut(Duration),
) -> Result<StatusRecord> {
    let attempts = policy.max_attempts.max(1);
    for attempt in 1..=attempts {
        let record = source.fetch_status(repo_id)?;
        if record.status.is_terminal() {
            info!(repo_id, attempt, status = ?record.status, "analysis settled");
            return Ok(record);
        }
        if attempt < attempts {
            sleep(policy.interval);
        }
    }
    Err(FundlensError::PollTimeout {
        attempts,
        seconds: policy.interval.as_secs() * u64::from(attempts),
    })
}
