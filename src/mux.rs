//! Host multiplexer surface.
//!
//! The multiplexer is the sole source of truth for pane and tab existence.
//! Everything this crate needs from it is expressed here as
//! Option/Result-bearing accessors so that the validator and the
//! reconciliation engine never observe a raised host error directly.

use serde::{Deserialize, Serialize};

/// Unique identifier for a pane (opaque, host-assigned)
pub type PaneId = u64;

/// Unique identifier for a tab (opaque, host-assigned)
pub type TabId = u64;

/// Direction of the split used to create the toggle pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// New pane appears on the left edge of the acting pane
    Left,
    /// New pane appears on the right edge of the acting pane
    Right,
    /// New pane appears above the acting pane
    Top,
    /// New pane appears below the acting pane
    #[default]
    Bottom,
}

/// Size of the toggle pane created by a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitSize {
    /// Percentage of the acting pane's extent (clamped by the host)
    Percent(u8),
    /// Absolute size in terminal cells
    Cells(u16),
}

impl Default for SplitSize {
    fn default() -> Self {
        SplitSize::Percent(30)
    }
}

/// Operations the host multiplexer provides to the toggle engine.
///
/// Implementations wrap the host's native pane/tab API. Lookup methods
/// return `None` (never panic or propagate host exceptions) when the
/// referenced object is gone; mutating methods return an error that the
/// engine recovers from by resetting the affected tab's state.
pub trait MuxHost {
    /// Whether a pane with this id currently exists anywhere in the mux
    fn pane_exists(&self, pane: PaneId) -> bool;

    /// The tab that owns this pane, if the pane (and its tab) still exist
    fn tab_of_pane(&self, pane: PaneId) -> Option<TabId>;

    /// Give input focus to the pane
    fn activate_pane(&mut self, pane: PaneId) -> anyhow::Result<()>;

    /// The currently zoomed pane of the tab, if any.
    ///
    /// Zoom is tab-scoped and exclusive: at most one pane is zoomed at a time.
    fn zoomed_pane(&self, tab: TabId) -> Option<PaneId>;

    /// Set (`Some`) or clear (`None`) the zoomed pane of the tab
    fn set_zoomed(&mut self, tab: TabId, pane: Option<PaneId>) -> anyhow::Result<()>;

    /// Create a new pane by splitting `from`, returning the new pane's id.
    ///
    /// The host is expected to give the new pane input focus, matching the
    /// behavior of an interactive split.
    fn split_pane(
        &mut self,
        from: PaneId,
        direction: SplitDirection,
        size: SplitSize,
    ) -> anyhow::Result<PaneId>;

    /// Show a user-facing notification (toast)
    fn notify(&mut self, message: &str);
}
