//! Per-tab toggleable scratch pane management for terminal multiplexers.
//!
//! A "toggle pane" is a hidden/shown scratch pane that a user can summon and
//! dismiss with a single key binding, returning focus afterwards to the pane
//! that invoked it. The host multiplexer owns the actual pane/tab objects and
//! is reached through the [`MuxHost`] trait; this crate owns the
//! state-reconciliation engine around them:
//!
//! - Per-tab toggle state (which pane is the scratch pane, which pane gets
//!   focus back, whether zoom should be restored) — [`state`]
//! - Durable one-file-per-tab persistence with self-healing corruption and
//!   staleness recovery — [`storage`]
//! - An in-memory cache over the store, authoritative once loaded — [`cache`]
//! - Liveness validation of stored pane references against the host — [`validate`]
//! - The toggle decision algorithm (create / show / hide), zoom handling and
//!   orphan cleanup on pane/tab removal — [`engine`]
//!
//! The crate is single-threaded by design: every operation is a fast,
//! synchronous state transition driven by the host's event loop (a key-bound
//! toggle request or a pane/tab removal notification).
//!
//! # Example
//!
//! ```no_run
//! use toggle_pane::{SplitDirection, ToggleConfig, TogglePane};
//!
//! let config = ToggleConfig::default().with_direction(SplitDirection::Right);
//! let mut toggler = TogglePane::new(config);
//! assert!(!toggler.is_disabled());
//! // The host then wires `toggler.toggle(&mut host, acting_pane, tab)` to a
//! // key binding, and the lifecycle hooks to its pane/tab removal events.
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod mux;
pub mod state;
pub mod storage;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main types for convenience
pub use cache::StateCache;
pub use config::ToggleConfig;
pub use engine::TogglePane;
pub use error::ToggleError;
pub use mux::{MuxHost, PaneId, SplitDirection, SplitSize, TabId};
pub use state::{PersistedRecord, ToggleState};
pub use storage::StateStore;
