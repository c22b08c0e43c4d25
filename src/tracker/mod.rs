//! Local application tracker.
//!
//! Saved funding matches move through a fixed pipeline
//! (saved -> applied -> following_up -> won | lost). Entries are keyed by a
//! generated id and de-duplicated on the (repo_id, funding_id) pair.

pub mod store;

use crate::error::Result;
use crate::types::tracker::{ApplicationEntry, ApplicationStatus};
use chrono::{DateTime, Utc};
use store::TrackerStore;

/// Outcome of a save attempt; the duplicate case carries the existing id.
#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    AlreadyTracked(String),
}

pub struct Tracker<S: TrackerStore> {
    store: S,
}

impl<S: TrackerStore> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<ApplicationEntry>> {
        self.store.load()
    }

    /// Save a (repo, funding program) pair. A second save of the same pair is
    /// a no-op reported as [`AddOutcome::AlreadyTracked`].
    pub fn add(&mut self, repo_id: &str, funding_id: &str, now: DateTime<Utc>) -> Result<AddOutcome> {
        let mut entries = self.store.load()?;
        if let Some(existing) = entries
            .iter()
            .find(|entry| entry.repo_id == repo_id && entry.funding_id == funding_id)
        {
            return Ok(AddOutcome::AlreadyTracked(existing.id.clone()));
        }

        let id = generate_id(repo_id, funding_id, now);
        entries.push(ApplicationEntry {
            id: id.clone(),
            repo_id: repo_id.to_string(),
            funding_id: funding_id.to_string(),
            status: ApplicationStatus::Saved,
            notes: String::new(),
            date_added: now,
            date_applied: None,
        });
        self.store.save(&entries)?;
        Ok(AddOutcome::Added(id))
    }

    /// Move an entry to a new pipeline state. Entering `applied` stamps
    /// `date_applied` the first time.
    pub fn set_status(
        &mut self,
        id: &str,
        status: ApplicationStatus,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let mut entries = self.store.load()?;
        let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) else {
            return Ok(false);
        };
        entry.status = status;
        if status == ApplicationStatus::Applied && entry.date_applied.is_none() {
            entry.date_applied = Some(now);
        }
        self.store.save(&entries)?;
        Ok(true)
    }

    pub fn set_notes(&mut self, id: &str, notes: &str) -> Result<bool> {
        let mut entries = self.store.load()?;
        let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) else {
            return Ok(false);
        };
        entry.notes = notes.to_string();
        self.store.save(&entries)?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let mut entries = self.store.load()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.store.save(&entries)?;
        Ok(true)
    }
}

fn generate_id(repo_id: &str, funding_id: &str, now: DateTime<Utc>) -> String {
    // Timestamp plus a pair-derived suffix; unique enough for a single-user
    // local file.
    let mut suffix: u32 = 0;
    for byte in repo_id.bytes().chain(funding_id.bytes()) {
        suffix = suffix.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    format!("app-{}-{:08x}", now.timestamp_millis(), suffix)
}
