//! Configuration for the toggle pane.
//!
//! All fields have serde defaults so hosts can embed a partial
//! `[toggle_pane]` table in their own config file and only override what
//! they care about.

use crate::mux::{SplitDirection, SplitSize};
use serde::{Deserialize, Serialize};

/// Default values, split out so serde and `Default` share one source
mod defaults {
    use crate::mux::{SplitDirection, SplitSize};

    pub fn direction() -> SplitDirection {
        SplitDirection::Bottom
    }

    pub fn size() -> SplitSize {
        SplitSize::default()
    }

    pub fn bool_true() -> bool {
        true
    }
}

/// Behavior switches for the toggle pane engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleConfig {
    /// Where the toggle pane is created relative to the acting pane
    #[serde(default = "defaults::direction")]
    pub direction: SplitDirection,

    /// How large the toggle pane is when created
    #[serde(default = "defaults::size")]
    pub size: SplitSize,

    /// Update the remembered invoker on every toggle from a non-toggle pane
    /// (when false, only the first invoker is remembered until cleared)
    #[serde(default)]
    pub always_refresh_invoker: bool,

    /// Zoom the toggle pane whenever it is created or shown
    #[serde(default)]
    pub auto_zoom_toggle_pane: bool,

    /// Zoom the invoker pane after hiding the toggle pane
    #[serde(default)]
    pub auto_zoom_invoker: bool,

    /// Capture the toggle pane's zoom state on hide and restore it on the
    /// next show
    #[serde(default = "defaults::bool_true")]
    pub remember_zoomed: bool,

    /// Emit verbose engine decisions at debug level
    #[serde(default)]
    pub debug: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            direction: defaults::direction(),
            size: defaults::size(),
            always_refresh_invoker: false,
            auto_zoom_toggle_pane: false,
            auto_zoom_invoker: false,
            remember_zoomed: defaults::bool_true(),
            debug: false,
        }
    }
}

impl ToggleConfig {
    /// Create a config with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the split direction
    pub fn with_direction(mut self, direction: SplitDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the split size
    pub fn with_size(mut self, size: SplitSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the invoker is refreshed on every toggle
    pub fn with_always_refresh_invoker(mut self, enabled: bool) -> Self {
        self.always_refresh_invoker = enabled;
        self
    }

    /// Set whether the toggle pane auto-zooms when shown
    pub fn with_auto_zoom_toggle_pane(mut self, enabled: bool) -> Self {
        self.auto_zoom_toggle_pane = enabled;
        self
    }

    /// Set whether the invoker auto-zooms after a hide
    pub fn with_auto_zoom_invoker(mut self, enabled: bool) -> Self {
        self.auto_zoom_invoker = enabled;
        self
    }

    /// Set whether the toggle pane's zoom state is remembered across hides
    pub fn with_remember_zoomed(mut self, enabled: bool) -> Self {
        self.remember_zoomed = enabled;
        self
    }
}
