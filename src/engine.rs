//! Reconciliation engine: the toggle algorithm and lifecycle pruning.
//!
//! [`TogglePane`] decides, on each invocation, whether to create, show, or
//! hide the tab's toggle pane, keeps invoker tracking and zoom memory up to
//! date, and persists every transition through the state cache. Pane/tab
//! removal notifications prune stale references outside of a toggle.
//!
//! Everything runs synchronously on the host's event loop; the one
//! re-entrant path (hide with an unreachable invoker) is an explicit loop
//! bounded to a single retry over freshly reset state.

use crate::cache::StateCache;
use crate::config::ToggleConfig;
use crate::error::ToggleError;
use crate::mux::{MuxHost, PaneId, TabId};
use crate::state::ToggleState;
use crate::storage::StateStore;
use crate::validate::is_live;

/// Maximum passes through the toggle algorithm for one invocation: the
/// original attempt plus one self-healing retry after a full state reset.
const MAX_TOGGLE_PASSES: u32 = 2;

/// Per-process toggle pane engine.
///
/// Holds the configuration and the per-tab state cache. When the state
/// directory cannot be created the engine constructs in disabled form:
/// every toggle no-ops with a logged error, and the first attempt raises a
/// one-time user notification through the host.
pub struct TogglePane {
    config: ToggleConfig,
    cache: Option<StateCache>,
    disabled_reason: Option<String>,
    notified_unavailable: bool,
}

impl TogglePane {
    /// Create an engine persisting to the platform default state directory.
    ///
    /// Storage unavailability does not fail construction; it produces a
    /// disabled engine (see [`ToggleError::Disabled`]).
    pub fn new(config: ToggleConfig) -> Self {
        match StateStore::open_default() {
            Ok(store) => Self::with_store(config, store),
            Err(e) => Self::disabled(config, e.to_string()),
        }
    }

    /// Create a disabled engine that no-ops every toggle.
    ///
    /// For hosts that open a custom store themselves and want the same
    /// degraded behavior when that fails: the first toggle attempt raises a
    /// one-time notification, every attempt logs an error.
    pub fn disabled(config: ToggleConfig, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::error!("Toggle pane disabled: {reason}");
        Self {
            config,
            cache: None,
            disabled_reason: Some(reason),
            notified_unavailable: false,
        }
    }

    /// Create an engine over an already-opened store (custom directories,
    /// tests)
    pub fn with_store(config: ToggleConfig, store: StateStore) -> Self {
        Self {
            config,
            cache: Some(StateCache::new(store)),
            disabled_reason: None,
            notified_unavailable: false,
        }
    }

    /// Whether the engine was disabled by an unavailable state directory
    pub fn is_disabled(&self) -> bool {
        self.cache.is_none()
    }

    /// Read-only snapshot of a tab's toggle state (for host UIs).
    ///
    /// Uses the same cached/loaded path as [`TogglePane::toggle`]; a
    /// disabled engine reports the default state.
    pub fn state(&mut self, host: &dyn MuxHost, tab: TabId) -> ToggleState {
        match self.cache.as_mut() {
            Some(cache) => cache.get(host, tab),
            None => ToggleState::default(),
        }
    }

    /// Toggle the scratch pane for `tab`, acting from `acting_pane`.
    ///
    /// Exactly one of three things happens: the toggle pane is created (no
    /// valid one exists), shown (acting pane is elsewhere), or hidden
    /// (acting pane *is* the toggle pane). Focus, zoom, and persisted state
    /// are updated accordingly. Recoverable inconsistencies reset the tab's
    /// state and, for the hide case, re-run the algorithm once.
    pub fn toggle(
        &mut self,
        host: &mut dyn MuxHost,
        acting_pane: PaneId,
        tab: TabId,
    ) -> Result<(), ToggleError> {
        let Some(cache) = self.cache.as_mut() else {
            let reason = self
                .disabled_reason
                .clone()
                .unwrap_or_else(|| "state directory unavailable".to_string());
            if !self.notified_unavailable {
                host.notify(&format!("Toggle pane disabled: {reason}"));
                self.notified_unavailable = true;
            }
            log::error!("Toggle request for tab {tab} ignored: {reason}");
            return Err(ToggleError::Disabled(reason));
        };

        for pass in 1..=MAX_TOGGLE_PASSES {
            let mut state = cache.get(host, tab);
            if self.config.debug {
                log::debug!(
                    "Toggle pass {pass} for tab {tab} from pane {acting_pane}: {state:?}"
                );
            }

            let pane_live = is_live(host, state.pane_id, tab);
            let acting_is_toggle = state.pane_id == Some(acting_pane);

            // Invoker update: remember who to return focus to.
            if !acting_is_toggle
                && (state.invoker_id.is_none() || self.config.always_refresh_invoker)
            {
                state.invoker_id = Some(acting_pane);
            }
            if state.invoker_id.is_none() {
                if acting_is_toggle && pane_live {
                    // Toggle pane visible with no recorded invoker: an
                    // inconsistent prior state that the hide path below
                    // resolves with a reset. Warn, don't correct.
                    log::warn!(
                        "Tab {tab}: toggle pane {acting_pane} has no recorded invoker"
                    );
                } else {
                    state.invoker_id = Some(acting_pane);
                }
            }

            if pane_live && acting_is_toggle {
                // Hide: return focus to the invoker.
                let invoker = match state.invoker_id {
                    Some(invoker) if is_live(host, Some(invoker), tab) => invoker,
                    _ => {
                        // Toggle pane visible but no reachable return target.
                        // Reset and re-run once from the top.
                        log::warn!(
                            "Tab {tab}: invoker {:?} unreachable while hiding, resetting",
                            state.invoker_id
                        );
                        if let Err(e) = cache.reset(host, tab) {
                            log::warn!("Failed to reset toggle state for tab {tab}: {e:#}");
                        }
                        continue;
                    }
                };

                if self.config.remember_zoomed {
                    state.zoomed = host.zoomed_pane(tab) == Some(acting_pane);
                }

                if let Err(e) =
                    focus_with_zoom(host, tab, invoker, self.config.auto_zoom_invoker)
                {
                    log::warn!("Tab {tab}: failed to focus invoker {invoker}: {e:#}");
                    if let Err(e) = cache.reset(host, tab) {
                        log::warn!("Failed to reset toggle state for tab {tab}: {e:#}");
                    }
                    return Ok(());
                }

                persist(cache, host, tab, state);
                return Ok(());
            }

            if pane_live {
                // Show: the acting pane is an invoker; bring the toggle
                // pane to the front.
                let Some(target) = state.pane_id else {
                    // pane_live guarantees Some; treat a miss as a violated
                    // invariant and fall through to the retry bound.
                    continue;
                };

                let zoom = (state.zoomed && self.config.remember_zoomed)
                    || self.config.auto_zoom_toggle_pane;
                if let Err(e) = focus_with_zoom(host, tab, target, zoom) {
                    log::warn!("Tab {tab}: failed to show toggle pane {target}: {e:#}");
                    if let Err(e) = cache.reset(host, tab) {
                        log::warn!("Failed to reset toggle state for tab {tab}: {e:#}");
                    }
                    return Ok(());
                }

                persist(cache, host, tab, state);
                return Ok(());
            }

            // Create: no valid toggle pane for this tab.
            if state.pane_id.is_some() {
                log::debug!(
                    "Tab {tab}: stored toggle pane {:?} is stale, clearing",
                    state.pane_id
                );
                state.clear_pane();
            }
            if state.invoker_id.is_none() {
                state.invoker_id = Some(acting_pane);
            }

            let new_pane =
                match host.split_pane(acting_pane, self.config.direction, self.config.size) {
                    Ok(new_pane) => new_pane,
                    Err(e) => {
                        // Never persist a record for a pane that was never
                        // created.
                        log::warn!("Tab {tab}: failed to create toggle pane: {e:#}");
                        if let Err(e) = cache.reset(host, tab) {
                            log::warn!("Failed to reset toggle state for tab {tab}: {e:#}");
                        }
                        return Err(ToggleError::SplitFailed {
                            pane: acting_pane,
                            reason: format!("{e:#}"),
                        });
                    }
                };

            log::info!("Tab {tab}: created toggle pane {new_pane} from pane {acting_pane}");
            state.pane_id = Some(new_pane);
            state.zoomed = false;

            if self.config.auto_zoom_toggle_pane
                && let Err(e) = host.set_zoomed(tab, Some(new_pane))
            {
                log::warn!("Tab {tab}: failed to zoom new toggle pane {new_pane}: {e:#}");
            }

            persist(cache, host, tab, state);
            return Ok(());
        }

        log::error!("Tab {tab}: toggle retry exhausted, aborting");
        Err(ToggleError::RetryExhausted { tab })
    }

    /// Host notification that a pane was removed.
    ///
    /// `tab` is passed when the host can still resolve the removed pane's
    /// tab; otherwise the cached states are scanned for a matching
    /// reference. Clears whichever fields pointed at the pane, persists the
    /// change, and drops the in-memory entry once fully default.
    pub fn pane_removed(&mut self, host: &dyn MuxHost, pane: PaneId, tab: Option<TabId>) {
        let Some(cache) = self.cache.as_mut() else {
            return;
        };

        let tab = tab.or_else(|| host.tab_of_pane(pane)).or_else(|| {
            cache
                .iter()
                .find(|(_, state)| state.pane_id == Some(pane) || state.invoker_id == Some(pane))
                .map(|(tab, _)| tab)
        });
        let Some(tab) = tab else {
            return;
        };

        let mut state = cache.get(host, tab);
        let mut changed = false;

        if state.pane_id == Some(pane) {
            state.clear_pane();
            changed = true;
            if state.invoker_id == Some(pane) {
                state.invoker_id = None;
            }
        } else if state.invoker_id == Some(pane) {
            state.invoker_id = None;
            changed = true;
        }

        if !changed {
            // Unrelated removal; don't keep a synthetic default entry around.
            if state.is_default() {
                cache.forget(tab);
            }
            return;
        }

        log::debug!("Tab {tab}: pruned removed pane {pane} from toggle state");
        persist(cache, host, tab, state);
        if state.is_default() {
            cache.forget(tab);
        }
    }

    /// Host notification that a tab was removed.
    ///
    /// Forces the tab's state to default (deleting its persisted record)
    /// and drops the in-memory entry. Repeating the call is a no-op.
    pub fn tab_removed(&mut self, host: &dyn MuxHost, tab: TabId) {
        let Some(cache) = self.cache.as_mut() else {
            return;
        };
        if let Err(e) = cache.reset(host, tab) {
            log::warn!("Failed to clear toggle state for removed tab {tab}: {e:#}");
        }
    }
}

/// Focus `target` with an intended zoom outcome.
///
/// Zoom is tab-scoped and exclusive, so any current zoom is cleared before
/// activation and the target re-zoomed afterwards; activating with a stale
/// zoom in place would maximize the wrong pane.
fn focus_with_zoom(
    host: &mut dyn MuxHost,
    tab: TabId,
    target: PaneId,
    zoomed: bool,
) -> anyhow::Result<()> {
    use anyhow::Context;

    host.set_zoomed(tab, None)
        .with_context(|| format!("clearing zoom in tab {tab}"))?;
    host.activate_pane(target)
        .with_context(|| format!("activating pane {target}"))?;
    if zoomed {
        host.set_zoomed(tab, Some(target))
            .with_context(|| format!("zooming pane {target}"))?;
    }
    Ok(())
}

/// Write-through persistence with a logged, non-fatal failure path.
fn persist(cache: &mut StateCache, host: &dyn MuxHost, tab: TabId, state: ToggleState) {
    if let Err(e) = cache.put(host, tab, state) {
        log::warn!("Failed to persist toggle state for tab {tab}: {e:#}");
    }
}
