use std::collections::{BTreeSet, HashMap};

use crate::error::{LayoutError, Result};
use crate::geometry::Rect;
use crate::panel::{ListState, Panel, PanelId};

/// Outcome of positioning a panel for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First reference: the caller runs one-time setup.
    Created,
    Moved,
    Unchanged,
}

/// Registry mapping panel identities to their last known state.
///
/// Panels are flagged dirty whenever something the surface draws changes, so
/// a tick that leaves a panel alone never touches the surface for it.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    entries: HashMap<PanelId, Panel>,
    dirty: BTreeSet<PanelId>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the panel on first reference, otherwise re-position it.
    pub fn materialize(&mut self, id: PanelId, rect: Rect) -> Placement {
        use std::collections::hash_map::Entry;

        let placement = match self.entries.entry(id) {
            Entry::Occupied(mut entry) => {
                let panel = entry.get_mut();
                if panel.rect == rect {
                    Placement::Unchanged
                } else {
                    panel.rect = rect;
                    Placement::Moved
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Panel::new(id, rect));
                Placement::Created
            }
        };

        if placement != Placement::Unchanged {
            self.dirty.insert(id);
        }
        placement
    }

    pub fn remove(&mut self, id: PanelId) -> Option<Panel> {
        self.dirty.remove(&id);
        self.entries.remove(&id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.entries.get(&id)
    }

    /// Mutable access for one-time setup; the panel is marked dirty.
    pub fn panel_mut(&mut self, id: PanelId) -> Result<&mut Panel> {
        let panel = self
            .entries
            .get_mut(&id)
            .ok_or(LayoutError::PanelNotFound(id))?;
        self.dirty.insert(id);
        Ok(panel)
    }

    /// Set every panel's highlight to whether it holds focus.
    pub fn apply_highlight(&mut self, focused: Option<PanelId>) {
        for (id, panel) in self.entries.iter_mut() {
            let highlighted = Some(*id) == focused;
            if panel.highlighted != highlighted {
                panel.highlighted = highlighted;
                self.dirty.insert(*id);
            }
        }
    }

    /// Store the live selection and scroll offset of a list panel.
    pub fn update_list(&mut self, id: PanelId, list: ListState, offset: usize) -> Result<()> {
        let panel = self
            .entries
            .get_mut(&id)
            .ok_or(LayoutError::PanelNotFound(id))?;
        if panel.list != Some(list) || panel.scroll_offset != offset {
            panel.list = Some(list);
            panel.scroll_offset = offset;
            self.dirty.insert(id);
        }
        Ok(())
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Drain dirty panels in identity order.
    pub fn take_dirty(&mut self) -> Vec<Panel> {
        let ids = std::mem::take(&mut self.dirty);
        ids.into_iter()
            .filter_map(|id| self.entries.get(&id).cloned())
            .collect()
    }
}
