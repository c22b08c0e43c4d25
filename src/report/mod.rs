//! Output rendering.
//!
//! One generic viewer covers every opaque backend report (fundability, DNA,
//! velocity, portfolio, org scans, dependency risk) instead of a bespoke
//! renderer per kind; locally computed results get their own shaped output.

pub mod json;
pub mod md;

use crate::error::Result;
use crate::types::funding::FunderMatch;
use crate::types::scoring::{RepoScore, ScoreBreakdown};
use crate::types::tracker::ApplicationEntry;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Md,
    Json,
}

pub fn render_score(
    reference: &str,
    breakdown: &ScoreBreakdown,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::pretty(breakdown),
        OutputFormat::Md => Ok(md::score_card(reference, breakdown)),
    }
}

pub fn render_funder_matches(
    reference: &str,
    matches: &[FunderMatch],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::pretty(matches),
        OutputFormat::Md => Ok(md::funder_matches(reference, matches)),
    }
}

pub fn render_profile(
    login: &str,
    repos: &[RepoScore],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::pretty(repos),
        OutputFormat::Md => Ok(md::profile(login, repos)),
    }
}

pub fn render_tracker(entries: &[ApplicationEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::pretty(entries),
        OutputFormat::Md => Ok(md::tracker(entries)),
    }
}

/// Generic viewer for backend-owned JSON.
pub fn render_report(title: &str, value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::pretty(value),
        OutputFormat::Md => Ok(md::generic_report(title, value)),
    }
}
