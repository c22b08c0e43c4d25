use crate::backend::ReportKind;
use crate::report::OutputFormat;
use crate::types::tracker::ApplicationStatus;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fundlens",
    version,
    about = "Match GitHub repositories to OSS funding sources"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "md", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a repository's fundability from public GitHub metadata
    Score(ScoreCommand),
    /// Match a repository against the built-in funder catalog
    Funders(ScoreCommand),
    /// Submit a repository URL to the backend for analysis
    Submit(SubmitCommand),
    /// Check the analysis status of a submitted repository
    Status(RepoIdCommand),
    /// Fetch backend funding matches for an analyzed repository
    Matches(MatchesCommand),
    /// Fetch a backend report (fundability, dna, velocity, portfolio)
    Report(ReportCommand),
    /// Generate an application draft for one funding program
    Apply(ApplyCommand),
    /// Build a milestone roadmap across selected funding programs
    Roadmap(RoadmapCommand),
    /// Scan every public repository of a GitHub organization
    Org(OrgCommand),
    /// Score a GitHub user's public repositories
    Profile(ProfileCommand),
    /// Analyze a dependency manifest for at-risk packages
    Deps(DepsCommand),
    /// List all known funding sources
    Sources,
    /// Show platform statistics
    Stats,
    /// Show trending repositories
    Trending,
    /// Show open bounties
    Bounties,
    /// Show the funding leaderboard
    Leaderboard,
    /// Show or update backend settings
    Settings(SettingsCommand),
    /// Manage the local application tracker
    #[command(subcommand)]
    Track(TrackCommands),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Repository as owner/repo or a github.com URL
    pub repo: String,
}

#[derive(Args)]
pub struct SubmitCommand {
    /// Full GitHub repository URL
    pub github_url: String,
    /// Poll until analysis reaches a terminal status
    #[arg(long)]
    pub wait: bool,
}

#[derive(Args)]
pub struct RepoIdCommand {
    /// Backend repo id returned by submit
    pub repo_id: String,
}

#[derive(Args)]
pub struct MatchesCommand {
    pub repo_id: String,
    #[arg(long, default_value_t = 30)]
    pub limit: u32,
}

#[derive(Args)]
pub struct ReportCommand {
    pub repo_id: String,
    #[arg(long, value_enum)]
    pub kind: ReportKind,
}

#[derive(Args)]
pub struct ApplyCommand {
    pub repo_id: String,
    #[arg(long)]
    pub funding_id: String,
}

#[derive(Args)]
pub struct RoadmapCommand {
    pub repo_id: String,
    /// Funding program ids to plan against (repeatable)
    #[arg(long = "funding-id", required = true)]
    pub funding_ids: Vec<String>,
}

#[derive(Args)]
pub struct OrgCommand {
    /// GitHub organization login
    pub org: String,
}

#[derive(Args)]
pub struct ProfileCommand {
    /// GitHub user login
    pub login: String,
    /// How many repositories to show, best first
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Args)]
pub struct SettingsCommand {
    /// Path to a JSON file to POST as the new settings
    #[arg(long)]
    pub update: Option<PathBuf>,
}

#[derive(Args)]
pub struct DepsCommand {
    /// Path to a dependency manifest (package.json, requirements.txt, ...)
    pub path: PathBuf,
    /// Package ecosystem; inferred from the file name when omitted
    #[arg(long)]
    pub ecosystem: Option<String>,
}

#[derive(Subcommand)]
pub enum TrackCommands {
    /// Save a (repo, funding program) pair; duplicates are rejected
    Add(TrackAddCommand),
    /// List tracked applications
    List(TrackListCommand),
    /// Move an application to a new pipeline status
    SetStatus(TrackSetStatusCommand),
    /// Attach notes to an application
    Note(TrackNoteCommand),
    /// Remove an application from the tracker
    Remove(TrackIdCommand),
}

#[derive(Args)]
pub struct TrackAddCommand {
    pub repo_id: String,
    pub funding_id: String,
}

#[derive(Args)]
pub struct TrackListCommand {
    /// Only show applications in this status
    #[arg(long, value_enum)]
    pub status: Option<ApplicationStatus>,
}

#[derive(Args)]
pub struct TrackSetStatusCommand {
    pub id: String,
    #[arg(value_enum)]
    pub status: ApplicationStatus,
}

#[derive(Args)]
pub struct TrackNoteCommand {
    pub id: String,
    pub notes: String,
}

#[derive(Args)]
pub struct TrackIdCommand {
    pub id: String,
}
