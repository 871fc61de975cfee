//! Typed error variants for the toggle-pane crate.
//!
//! This module provides structured error types so callers at the crate
//! boundary can match on specific failure modes instead of relying on
//! opaque `anyhow` strings. Internal plumbing still uses `anyhow` with
//! context; only conditions a host may want to surface to the user are
//! promoted to variants here.

use crate::mux::{PaneId, TabId};
use thiserror::Error;

/// Top-level error type for toggle operations.
///
/// No variant is fatal to the process: the worst outcome is a disabled
/// feature ([`ToggleError::Disabled`]) after the state directory could not
/// be created.
#[derive(Debug, Error)]
pub enum ToggleError {
    // -----------------------------------------------------------------------
    // Storage
    // -----------------------------------------------------------------------
    /// The process-wide state directory could not be created or verified.
    ///
    /// Raised once at store construction; thereafter every toggle attempt
    /// no-ops with [`ToggleError::Disabled`].
    #[error("toggle state directory unavailable: {0}")]
    StorageUnavailable(String),

    /// The toggle feature is disabled for this process because the state
    /// directory was unavailable at startup.
    #[error("toggle pane disabled: {0}")]
    Disabled(String),

    // -----------------------------------------------------------------------
    // Host operations
    // -----------------------------------------------------------------------
    /// The host failed to create the toggle pane by splitting the acting
    /// pane. The tab's state has already been reset.
    #[error("failed to split pane {pane}: {reason}")]
    SplitFailed {
        /// The pane the split was requested from.
        pane: PaneId,
        /// Host-reported failure description.
        reason: String,
    },

    /// The self-healing retry after an inconsistent hide was itself unable
    /// to complete. Indicates a violated invariant; the toggle is aborted.
    #[error("toggle retry exhausted for tab {tab}")]
    RetryExhausted {
        /// The tab whose toggle could not be reconciled.
        tab: TabId,
    },
}
