//! Liveness validation for stored pane references.
//!
//! The multiplexer is the sole source of truth for pane existence, so a
//! cached or loaded pane id is never trusted before being re-checked here.
//! Every host-side failure (pane gone, tab gone, lookup error) is converted
//! into `false` rather than propagated.

use crate::mux::{MuxHost, PaneId, TabId};

/// Whether `pane` still exists and still belongs to `tab`.
///
/// A `None` reference is never live.
pub fn is_live(host: &dyn MuxHost, pane: Option<PaneId>, tab: TabId) -> bool {
    let Some(pane) = pane else {
        return false;
    };
    if !host.pane_exists(pane) {
        return false;
    }
    host.tab_of_pane(pane) == Some(tab)
}
