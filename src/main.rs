mod backend;
mod cli;
mod config;
mod error;
mod github;
mod matching;
mod report;
mod score;
mod tracker;
mod types;

use crate::backend::poll;
use crate::backend::{BackendClient, RepoStatus};
use crate::error::{FundlensError, Result};
use crate::github::{GitHubClient, RepoRef};
use crate::report::OutputFormat;
use crate::tracker::store::JsonFileStore;
use crate::tracker::{AddOutcome, Tracker};
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PENDING: i32 = 1;
    pub const ANALYSIS_ERROR: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let settings = config::load_settings(&cwd)?;
    let format = cli.format;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let reference = RepoRef::parse(&cmd.repo)?;
            let client = GitHubClient::new(&settings.github_api_url, settings.github_token)?;
            let record = client.repo(&reference)?;
            let breakdown = score::compute(&record.score_input(), Utc::now());
            println!(
                "{}",
                report::render_score(&reference.to_string(), &breakdown, format)?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Funders(cmd) => {
            let reference = RepoRef::parse(&cmd.repo)?;
            let client = GitHubClient::new(&settings.github_api_url, settings.github_token)?;
            let record = client.repo(&reference)?;
            let breakdown = score::compute(&record.score_input(), Utc::now());
            let matches = matching::match_programs(&record.signals(), breakdown.total);
            println!(
                "{}",
                report::render_funder_matches(&reference.to_string(), &matches, format)?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Submit(cmd) => {
            // Validate the reference locally before bothering the backend.
            RepoRef::parse(&cmd.github_url)?;
            let client = BackendClient::new(&settings.backend_url)?;
            let accepted = client.submit(&cmd.github_url)?;
            println!("repo id: {}", accepted.repo_id);
            if let Some(message) = &accepted.message {
                println!("{message}");
            }
            if !cmd.wait {
                if accepted.status == RepoStatus::Pending {
                    println!("analysis pending; run `fundlens status {}`", accepted.repo_id);
                    return Ok(exit_code::PENDING);
                }
                return Ok(exit_code::SUCCESS);
            }
            let record = poll::wait_for_analysis(&client, &accepted.repo_id, settings.poll)?;
            print_status(&accepted.repo_id, &record);
            Ok(status_exit_code(record.status))
        }
        cli::Commands::Status(cmd) => {
            let client = BackendClient::new(&settings.backend_url)?;
            let record = client.status(&cmd.repo_id)?;
            print_status(&cmd.repo_id, &record);
            Ok(status_exit_code(record.status))
        }
        cli::Commands::Matches(cmd) => {
            let client = BackendClient::new(&settings.backend_url)?;
            let value = client.matches(&cmd.repo_id, cmd.limit)?;
            println!("{}", report::render_report("Funding matches", &value, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Report(cmd) => {
            let client = BackendClient::new(&settings.backend_url)?;
            let value = client.report(&cmd.repo_id, cmd.kind)?;
            let title = format!("Report: {}", cmd.kind.path_segment());
            println!("{}", report::render_report(&title, &value, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Apply(cmd) => {
            let client = BackendClient::new(&settings.backend_url)?;
            let value = client.generate_application(&cmd.repo_id, &cmd.funding_id)?;
            println!(
                "{}",
                report::render_report("Application draft", &value, format)?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Roadmap(cmd) => {
            let client = BackendClient::new(&settings.backend_url)?;
            let value = client.roadmap(&cmd.repo_id, &cmd.funding_ids)?;
            println!("{}", report::render_report("Funding roadmap", &value, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Org(cmd) => {
            let client = BackendClient::new(&settings.backend_url)?;
            let value = client.scan_org(&cmd.org)?;
            let title = format!("Org scan: {}", cmd.org);
            println!("{}", report::render_report(&title, &value, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Profile(cmd) => {
            let client = GitHubClient::new(&settings.github_api_url, settings.github_token)?;
            let user = client.user(&cmd.login)?;
            let now = Utc::now();
            let mut repos: Vec<types::scoring::RepoScore> = client
                .user_repos(&user.login)?
                .iter()
                .map(|record| {
                    let breakdown = score::compute(&record.score_input(), now);
                    types::scoring::RepoScore {
                        name: record
                            .full_name
                            .clone()
                            .unwrap_or_else(|| format!("{}/?", user.login)),
                        total: breakdown.total,
                        tier: breakdown.tier,
                        stars: record.stargazers_count,
                    }
                })
                .collect();
            repos.sort_by(|a, b| b.total.cmp(&a.total).then(b.stars.cmp(&a.stars)));
            repos.truncate(cmd.top);
            let header = format!(
                "{} ({} public repos, {} followers)",
                user.login, user.public_repos, user.followers
            );
            println!("{}", report::render_profile(&header, &repos, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Deps(cmd) => {
            let content = std::fs::read_to_string(&cmd.path)?;
            let ecosystem = match cmd.ecosystem {
                Some(ecosystem) => ecosystem,
                None => infer_ecosystem(&cmd.path)?.to_string(),
            };
            let client = BackendClient::new(&settings.backend_url)?;
            let value = client.analyze_dependencies(&content, &ecosystem)?;
            let title = format!("Dependency risk ({ecosystem})");
            println!("{}", report::render_report(&title, &value, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Sources => simple_get(&settings, format, "Funding sources", |c| {
            c.funding_sources()
        }),
        cli::Commands::Stats => simple_get(&settings, format, "Platform stats", |c| c.stats()),
        cli::Commands::Trending => {
            simple_get(&settings, format, "Trending repositories", |c| c.trending())
        }
        cli::Commands::Bounties => {
            simple_get(&settings, format, "Open bounties", |c| c.bounties())
        }
        cli::Commands::Leaderboard => {
            simple_get(&settings, format, "Leaderboard", |c| c.leaderboard())
        }
        cli::Commands::Settings(cmd) => {
            let client = BackendClient::new(&settings.backend_url)?;
            let value = match cmd.update {
                Some(path) => {
                    let body: serde_json::Value =
                        serde_json::from_str(&std::fs::read_to_string(path)?)?;
                    client.update_settings(&body)?
                }
                None => client.settings()?,
            };
            println!("{}", report::render_report("Backend settings", &value, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Track(track) => run_track(track, &settings, format),
    }
}

fn simple_get(
    settings: &config::Settings,
    format: OutputFormat,
    title: &str,
    fetch: impl Fn(&BackendClient) -> Result<serde_json::Value>,
) -> Result<i32> {
    let client = BackendClient::new(&settings.backend_url)?;
    let value = fetch(&client)?;
    println!("{}", report::render_report(title, &value, format)?);
    Ok(exit_code::SUCCESS)
}

fn run_track(
    command: cli::TrackCommands,
    settings: &config::Settings,
    format: OutputFormat,
) -> Result<i32> {
    let mut tracker = Tracker::new(JsonFileStore::new(&settings.tracker_path));
    match command {
        cli::TrackCommands::Add(cmd) => {
            match tracker.add(&cmd.repo_id, &cmd.funding_id, Utc::now())? {
                AddOutcome::Added(id) => {
                    println!("added: {id}");
                    Ok(exit_code::SUCCESS)
                }
                AddOutcome::AlreadyTracked(id) => {
                    println!("not added: already tracked as {id}");
                    Ok(exit_code::PENDING)
                }
            }
        }
        cli::TrackCommands::List(cmd) => {
            let mut entries = tracker.list()?;
            if let Some(status) = cmd.status {
                entries.retain(|entry| entry.status == status);
            }
            println!("{}", report::render_tracker(&entries, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::TrackCommands::SetStatus(cmd) => {
            if tracker.set_status(&cmd.id, cmd.status, Utc::now())? {
                println!("updated: {}", cmd.id);
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("no tracked application with id {}", cmd.id);
                Ok(exit_code::PENDING)
            }
        }
        cli::TrackCommands::Note(cmd) => {
            if tracker.set_notes(&cmd.id, &cmd.notes)? {
                println!("updated: {}", cmd.id);
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("no tracked application with id {}", cmd.id);
                Ok(exit_code::PENDING)
            }
        }
        cli::TrackCommands::Remove(cmd) => {
            if tracker.remove(&cmd.id)? {
                println!("removed: {}", cmd.id);
                Ok(exit_code::SUCCESS)
            } else {
                eprintln!("no tracked application with id {}", cmd.id);
                Ok(exit_code::PENDING)
            }
        }
    }
}

fn print_status(repo_id: &str, record: &backend::StatusRecord) {
    let status = match record.status {
        RepoStatus::Pending => "pending",
        RepoStatus::Analyzed => "analyzed",
        RepoStatus::Error => "error",
    };
    match &record.repo_name {
        Some(name) => println!("{repo_id} ({name}): {status}"),
        None => println!("{repo_id}: {status}"),
    }
    if let Some(message) = &record.error_message {
        eprintln!("backend: {message}");
    }
}

fn status_exit_code(status: RepoStatus) -> i32 {
    match status {
        RepoStatus::Pending => exit_code::PENDING,
        RepoStatus::Analyzed => exit_code::SUCCESS,
        RepoStatus::Error => exit_code::ANALYSIS_ERROR,
    }
}

fn infer_ecosystem(path: &Path) -> Result<&'static str> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let ecosystem = match name.as_str() {
        "package.json" | "package-lock.json" => "npm",
        "requirements.txt" | "pyproject.toml" | "pipfile" => "pypi",
        "cargo.toml" | "cargo.lock" => "cargo",
        "go.mod" | "go.sum" => "go",
        "gemfile" | "gemfile.lock" => "rubygems",
        _ => return Err(FundlensError::UnknownEcosystem(name)),
    };
    Ok(ecosystem)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
