//! File I/O for per-tab toggle state.
//!
//! Each tab's state lives in its own JSON file named from the tab id. The
//! store is self-healing: any record that cannot be trusted (unreadable,
//! empty, corrupt, wrong envelope, or anchored to a pane the multiplexer no
//! longer knows) is deleted on sight so a known-bad record is never retried.

use crate::error::ToggleError;
use crate::mux::{MuxHost, TabId};
use crate::state::{PersistedRecord, ToggleState};
use crate::validate::is_live;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default state directory: `<state dir>/toggle-pane/`
///
/// Falls back to the config directory, then the current directory, when the
/// platform has no state dir.
pub fn default_state_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::config_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toggle-pane")
}

/// Persistence store holding one state record per tab.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// Creation is idempotent; failure disables the toggle feature for the
    /// process lifetime (the caller decides how to surface that).
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ToggleError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| ToggleError::StorageUnavailable(format!("{}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    /// Open a store at the platform default location
    pub fn open_default() -> Result<Self, ToggleError> {
        Self::open(default_state_dir())
    }

    /// Path of the record file for a tab
    pub fn state_file(&self, tab: TabId) -> PathBuf {
        self.dir.join(format!("toggle_state_tab_{tab}.json"))
    }

    /// Load the state for `tab`, re-validated against the host.
    ///
    /// Returns `None` when no trustworthy record exists. The toggle pane is
    /// the anchor of the record: if it is stale the entire record is
    /// discarded, whereas a stale invoker only has that field cleared.
    pub fn load(&self, host: &dyn MuxHost, tab: TabId) -> Option<ToggleState> {
        let path = self.state_file(tab);
        if !path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Failed to read toggle state for tab {tab}: {e}");
                self.remove(tab);
                return None;
            }
        };

        if contents.trim().is_empty() {
            log::warn!("Empty toggle state file for tab {tab}, removing");
            self.remove(tab);
            return None;
        }

        let record: PersistedRecord = match serde_json::from_str(&contents) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Corrupt toggle state for tab {tab}: {e}");
                self.remove(tab);
                return None;
            }
        };

        if record.tab_id != tab {
            log::warn!(
                "Toggle state file for tab {tab} claims tab {}, removing",
                record.tab_id
            );
            self.remove(tab);
            return None;
        }

        let mut state = record.state;

        // Anchor validation: a record whose toggle pane is gone is worthless.
        if !is_live(host, state.pane_id, tab) {
            log::debug!(
                "Stored toggle pane {:?} for tab {tab} is gone, discarding record",
                state.pane_id
            );
            self.remove(tab);
            return None;
        }

        // Invoker validation is lenient: keep the record, drop the field.
        if state.invoker_id.is_some() && !is_live(host, state.invoker_id, tab) {
            log::debug!(
                "Stored invoker {:?} for tab {tab} is gone, clearing",
                state.invoker_id
            );
            state.invoker_id = None;
        }

        Some(state)
    }

    /// Persist the state for `tab`.
    ///
    /// The anchor pane is re-validated at call time: an invalid or absent
    /// toggle pane turns the save into a delete, since a record with no live
    /// toggle pane carries no information worth persisting.
    pub fn save(&self, host: &dyn MuxHost, tab: TabId, state: &ToggleState) -> Result<()> {
        if !is_live(host, state.pane_id, tab) {
            self.remove(tab);
            return Ok(());
        }

        let record = PersistedRecord::new(tab, *state);
        let contents = match serde_json::to_string_pretty(&record) {
            Ok(contents) => contents,
            Err(e) => {
                // Never leave a stale file behind for a record we failed to encode.
                self.remove(tab);
                return Err(e).context(format!("Failed to encode toggle state for tab {tab}"));
            }
        };

        let path = self.state_file(tab);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write toggle state to {path:?}"))?;

        log::debug!("Saved toggle state for tab {tab} to {path:?}");
        Ok(())
    }

    /// Delete the record file for a tab. Deleting an absent file is not an
    /// error.
    pub fn remove(&self, tab: TabId) {
        let path = self.state_file(tab);
        match std::fs::remove_file(&path) {
            Ok(()) => log::debug!("Removed toggle state file {path:?}"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to remove toggle state file {path:?}: {e}"),
        }
    }
}
