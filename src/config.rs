use crate::backend::poll::{PollPolicy, DEFAULT_INTERVAL_SECS, DEFAULT_MAX_ATTEMPTS};
use crate::error::{FundlensError, Result};
use crate::types::config::FundlensConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "fundlens.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".fundlens/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/fundlens/config.toml";
pub const DEFAULT_TRACKER_FILE: &str = ".fundlens/tracker.json";

pub const BACKEND_URL_ENV: &str = "FUNDLENS_BACKEND_URL";
pub const GITHUB_TOKEN_ENV: &str = "FUNDLENS_GITHUB_TOKEN";

/// Fully resolved settings after layering files, defaults, and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub backend_url: String,
    pub poll: PollPolicy,
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub tracker_path: PathBuf,
}

pub fn load_settings(cwd: &Path) -> Result<Settings> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let global = home
        .as_ref()
        .map(|h| h.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let config = load_config_layered(cwd, global.as_deref())?.unwrap_or_default();
    Ok(resolve(config, home.as_deref(), cwd))
}

fn resolve(config: FundlensConfig, home: Option<&Path>, cwd: &Path) -> Settings {
    let backend = config.backend.unwrap_or_default();
    let github = config.github.unwrap_or_default();
    let tracker = config.tracker.unwrap_or_default();

    let backend_url = std::env::var(BACKEND_URL_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .or(backend.base_url)
        .unwrap_or_else(|| crate::backend::DEFAULT_BASE_URL.to_string());

    let github_token = std::env::var(GITHUB_TOKEN_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .or(github.token);

    let tracker_path = tracker
        .path
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            home.map(|h| h.join(DEFAULT_TRACKER_FILE))
                .unwrap_or_else(|| cwd.join(DEFAULT_TRACKER_FILE))
        });

    Settings {
        backend_url,
        poll: PollPolicy {
            interval: Duration::from_secs(
                backend.poll_interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS),
            ),
            max_attempts: backend.poll_max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        },
        github_api_url: github
            .api_url
            .unwrap_or_else(|| crate::github::DEFAULT_API_URL.to_string()),
        github_token,
        tracker_path,
    }
}

/// Merge global, project, and local files in that order; later layers win
/// per-key. Returns None when no file exists at any layer.
pub(crate) fn load_config_layered(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<FundlensConfig>> {
    let layers = [
        global_path.map(Path::to_path_buf),
        Some(root.join(DEFAULT_CONFIG_FILE)),
        Some(root.join(DEFAULT_LOCAL_FILE)),
    ];

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    for layer in layers.into_iter().flatten() {
        if merge_file_if_exists(&mut merged, &layer)? {
            found = true;
        }
    }
    if !found {
        return Ok(None);
    }

    let config: FundlensConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| FundlensError::ConfigParse(e.to_string()))?;
    Ok(Some(config))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)
        .map_err(|e| FundlensError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, value);
    Ok(true)
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_config_files_yields_none() {
        let dir = TempDir::new().expect("temp dir should be created");
        let config =
            load_config_layered(dir.path(), None).expect("load should not fail");
        assert!(config.is_none());
    }

    #[test]
    fn layers_merge_global_project_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[backend]
base_url = "http://global:8765"
poll_max_attempts = 30

[github]
token = "global-token"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[backend]
base_url = "http://project:8765"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".fundlens")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[backend]
poll_interval_secs = 5
"#,
        )
        .expect("local override should write");

        let config = load_config_layered(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let backend = config.backend.expect("backend section should exist");
        assert_eq!(backend.base_url.as_deref(), Some("http://project:8765"));
        assert_eq!(backend.poll_interval_secs, Some(5));
        assert_eq!(backend.poll_max_attempts, Some(30));
        assert_eq!(
            config.github.and_then(|g| g.token).as_deref(),
            Some("global-token")
        );
    }

    #[test]
    fn resolve_fills_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let settings = resolve(FundlensConfig::default(), None, dir.path());
        assert_eq!(settings.github_api_url, crate::github::DEFAULT_API_URL);
        assert_eq!(settings.poll.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(
            settings.poll.interval,
            Duration::from_secs(DEFAULT_INTERVAL_SECS)
        );
        assert!(settings
            .tracker_path
            .ends_with(".fundlens/tracker.json"));
    }
}
