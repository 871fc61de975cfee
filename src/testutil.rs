//! Minimal in-memory host for unit tests.
//!
//! Integration tests carry their own richer fake in `tests/common`; this
//! stub only covers what the unit tests in `src/` need.

use crate::mux::{MuxHost, PaneId, SplitDirection, SplitSize, TabId};
use std::collections::HashMap;

/// In-memory pane/tab registry implementing [`MuxHost`].
pub(crate) struct StubHost {
    panes: HashMap<PaneId, TabId>,
    zoomed: HashMap<TabId, PaneId>,
    next_pane_id: PaneId,
}

impl StubHost {
    pub fn new() -> Self {
        Self {
            panes: HashMap::new(),
            zoomed: HashMap::new(),
            next_pane_id: 100,
        }
    }

    pub fn add_pane(&mut self, pane: PaneId, tab: TabId) {
        self.panes.insert(pane, tab);
    }

    pub fn remove_pane(&mut self, pane: PaneId) {
        self.panes.remove(&pane);
        self.zoomed.retain(|_, zoomed| *zoomed != pane);
    }
}

impl MuxHost for StubHost {
    fn pane_exists(&self, pane: PaneId) -> bool {
        self.panes.contains_key(&pane)
    }

    fn tab_of_pane(&self, pane: PaneId) -> Option<TabId> {
        self.panes.get(&pane).copied()
    }

    fn activate_pane(&mut self, pane: PaneId) -> anyhow::Result<()> {
        anyhow::ensure!(self.panes.contains_key(&pane), "pane {pane} not found");
        Ok(())
    }

    fn zoomed_pane(&self, tab: TabId) -> Option<PaneId> {
        self.zoomed.get(&tab).copied()
    }

    fn set_zoomed(&mut self, tab: TabId, pane: Option<PaneId>) -> anyhow::Result<()> {
        match pane {
            Some(pane) => {
                anyhow::ensure!(self.panes.contains_key(&pane), "pane {pane} not found");
                self.zoomed.insert(tab, pane);
            }
            None => {
                self.zoomed.remove(&tab);
            }
        }
        Ok(())
    }

    fn split_pane(
        &mut self,
        from: PaneId,
        _direction: SplitDirection,
        _size: SplitSize,
    ) -> anyhow::Result<PaneId> {
        let tab = self
            .tab_of_pane(from)
            .ok_or_else(|| anyhow::anyhow!("pane {from} not found"))?;
        let id = self.next_pane_id;
        self.next_pane_id += 1;
        self.panes.insert(id, tab);
        Ok(id)
    }

    fn notify(&mut self, _message: &str) {}
}
