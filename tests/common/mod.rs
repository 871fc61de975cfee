//! Shared test host: an in-memory multiplexer fake.
#![allow(dead_code)]

use std::collections::HashMap;
use toggle_pane::{MuxHost, PaneId, SplitDirection, SplitSize, TabId};

/// Scriptable in-memory multiplexer implementing [`MuxHost`].
///
/// Tracks pane ownership, per-tab focus and zoom, records notifications,
/// and supports failure injection for split/activate.
pub struct FakeMux {
    panes: HashMap<PaneId, TabId>,
    active: HashMap<TabId, PaneId>,
    zoomed: HashMap<TabId, PaneId>,
    next_pane_id: PaneId,
    /// Notifications shown to the user, in order
    pub notifications: Vec<String>,
    /// When true, `split_pane` fails
    pub fail_split: bool,
    /// When true, `activate_pane` fails
    pub fail_activate: bool,
    /// Number of successful splits performed
    pub split_count: usize,
}

impl FakeMux {
    pub fn new() -> Self {
        Self {
            panes: HashMap::new(),
            active: HashMap::new(),
            zoomed: HashMap::new(),
            next_pane_id: 100,
            notifications: Vec::new(),
            fail_split: false,
            fail_activate: false,
            split_count: 0,
        }
    }

    /// Register a pane in a tab and make it the tab's active pane
    pub fn add_pane(&mut self, pane: PaneId, tab: TabId) {
        self.panes.insert(pane, tab);
        self.active.insert(tab, pane);
    }

    /// Destroy a pane (focus and zoom referencing it are dropped)
    pub fn remove_pane(&mut self, pane: PaneId) {
        self.panes.remove(&pane);
        self.active.retain(|_, active| *active != pane);
        self.zoomed.retain(|_, zoomed| *zoomed != pane);
    }

    /// Destroy a tab and every pane in it
    pub fn remove_tab(&mut self, tab: TabId) {
        self.panes.retain(|_, owner| *owner != tab);
        self.active.remove(&tab);
        self.zoomed.remove(&tab);
    }

    /// The pane currently holding focus in a tab
    pub fn active_pane(&self, tab: TabId) -> Option<PaneId> {
        self.active.get(&tab).copied()
    }
}

impl MuxHost for FakeMux {
    fn pane_exists(&self, pane: PaneId) -> bool {
        self.panes.contains_key(&pane)
    }

    fn tab_of_pane(&self, pane: PaneId) -> Option<TabId> {
        self.panes.get(&pane).copied()
    }

    fn activate_pane(&mut self, pane: PaneId) -> anyhow::Result<()> {
        anyhow::ensure!(!self.fail_activate, "activation failure injected");
        let tab = self
            .tab_of_pane(pane)
            .ok_or_else(|| anyhow::anyhow!("pane {pane} not found"))?;
        self.active.insert(tab, pane);
        Ok(())
    }

    fn zoomed_pane(&self, tab: TabId) -> Option<PaneId> {
        self.zoomed.get(&tab).copied()
    }

    fn set_zoomed(&mut self, tab: TabId, pane: Option<PaneId>) -> anyhow::Result<()> {
        match pane {
            Some(pane) => {
                anyhow::ensure!(
                    self.tab_of_pane(pane) == Some(tab),
                    "pane {pane} not in tab {tab}"
                );
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
        anyhow::ensure!(!self.fail_split, "split failure injected");
        let tab = self
            .tab_of_pane(from)
            .ok_or_else(|| anyhow::anyhow!("pane {from} not found"))?;
        let id = self.next_pane_id;
        self.next_pane_id += 1;
        self.panes.insert(id, tab);
        // Interactive splits focus the new pane
        self.active.insert(tab, id);
        self.split_count += 1;
        Ok(id)
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
