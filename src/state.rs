//! Toggle state data model and its on-disk envelope.
//!
//! One [`ToggleState`] exists per tab. In memory pane references are
//! `Option<PaneId>`; on the wire the legacy `-1` sentinel is preserved so
//! records written by prior installations keep loading.

use crate::mux::{PaneId, TabId};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-tab toggle pane state.
///
/// `pane_id` is the anchor of the record: a state whose toggle pane is gone
/// carries no information worth keeping, while a stale `invoker_id` only
/// costs us the return-focus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleState {
    /// The current toggle pane, if one exists
    #[serde(with = "pane_ref", default)]
    pub pane_id: Option<PaneId>,

    /// The pane that regains focus when the toggle pane is hidden
    #[serde(with = "pane_ref", default)]
    pub invoker_id: Option<PaneId>,

    /// Whether the toggle pane was zoomed when last hidden.
    ///
    /// Meaningful only while `pane_id` is set; reset to `false` whenever the
    /// toggle pane is recreated or cleared.
    #[serde(default)]
    pub zoomed: bool,
}

impl ToggleState {
    /// Whether this state is the all-none default (nothing worth keeping)
    pub fn is_default(&self) -> bool {
        self.pane_id.is_none() && self.invoker_id.is_none() && !self.zoomed
    }

    /// Drop the toggle pane reference and its zoom memory
    pub fn clear_pane(&mut self) {
        self.pane_id = None;
        self.zoomed = false;
    }
}

/// On-disk envelope around a [`ToggleState`].
///
/// The tab id cross-validates the record against the file's logical key;
/// the timestamp (unix seconds) is diagnostic only and never consulted by
/// reconciliation logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    /// The tab this record belongs to
    pub tab_id: TabId,
    /// Unix seconds at write time (informational)
    pub timestamp: u64,
    /// The toggle state itself
    pub state: ToggleState,
}

impl PersistedRecord {
    /// Wrap a state in an envelope stamped with the current time
    pub fn new(tab_id: TabId, state: ToggleState) -> Self {
        Self {
            tab_id,
            timestamp: unix_now(),
            state,
        }
    }
}

/// Current unix time in seconds (0 if the clock is before the epoch)
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Serde adapter mapping `Option<PaneId>` to the wire's `-1` sentinel.
mod pane_ref {
    use crate::mux::PaneId;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<PaneId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_i64(*id as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PaneId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            Ok(None)
        } else {
            Ok(Some(raw as PaneId))
        }
    }
}
