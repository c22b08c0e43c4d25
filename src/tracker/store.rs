use crate::error::Result;
use crate::types::tracker::ApplicationEntry;
use std::path::PathBuf;

/// Persistence seam for the tracker. The file store is the production
/// implementation; tests swap in [`MemoryStore`].
pub trait TrackerStore {
    fn load(&self) -> Result<Vec<ApplicationEntry>>;
    fn save(&mut self, entries: &[ApplicationEntry]) -> Result<()>;
}

/// Whole-file JSON persistence under a fixed path, the CLI counterpart of the
/// dashboard's single local-storage key. Read-modify-write is not atomic
/// across processes; accepted limitation.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrackerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ApplicationEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, entries: &[ApplicationEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Vec<ApplicationEntry>,
}

impl TrackerStore for MemoryStore {
    fn load(&self) -> Result<Vec<ApplicationEntry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[ApplicationEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}
