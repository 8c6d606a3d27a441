//! Tab selector overlay over one leaf.
//!
//! Opening detaches every session of the leaf from live rendering
//! (`unswallowed`) and shows their thumbnails. The group's current session is
//! never touched while the overlay is up. Once the render layer reports the
//! end animation finished, [`Window::selector_done`] restores live content
//! and moves focus to the pick, or back to the current session.

use super::Window;
use crate::error::LayoutError;
use crate::selector::{Selector, SelectorEntry, SelectorMove, SelectorPhase};
use crate::session::SessionId;
use crate::signals::Signal;
use crate::split::SplitId;

impl Window {
    /// Open the selector over the leaf owning `session`
    pub fn selector_open(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let leaf = self
            .tree
            .find(session)
            .ok_or(LayoutError::SessionNotFound(session))?;
        self.selector_go(leaf, session)
    }

    /// Open the selector over `leaf`. A `target` other than the current
    /// session is picked right away and the overlay starts ending.
    pub(super) fn selector_go(&mut self, leaf: SplitId, target: SessionId) -> Result<(), LayoutError> {
        let Some(l) = self.tree.leaf(leaf) else {
            return Err(LayoutError::NotALeaf(leaf));
        };
        if l.group.len() < 2 {
            return Err(LayoutError::SingleSession(target));
        }
        if l.selector.is_some() {
            crate::debug_log!("SELECTOR", "selector already open on {:?}", leaf);
            return Ok(());
        }
        let current = l.group.current();
        let members: Vec<SessionId> = l.group.iter().collect();

        let entries: Vec<SelectorEntry> = members
            .iter()
            .map(|&id| SelectorEntry {
                session: id,
                is_current: Some(id) == current,
                missed_bell: self.session(id).is_some_and(|s| s.missed_bell),
            })
            .collect();
        for session in self.sessions.iter_mut().filter(|s| members.contains(&s.id)) {
            session.unswallowed = true;
        }

        let mut selector = Selector::new(entries.clone());
        let zoom = selector.zoom();
        let anchor = current.unwrap_or(target);
        let opacity = self.config.effective_opacity();
        self.emit(
            anchor,
            Signal::SelectorOn {
                zoom,
                opacity,
                entries,
            },
        );
        if Some(target) != current {
            selector.highlight(target);
            selector.confirm();
            self.emit(anchor, Signal::SelectorEnding);
        }
        if let Some(l) = self.tree.leaf_mut(leaf) {
            l.selector = Some(selector);
        }

        crate::debug_info!(
            "SELECTOR",
            "window {}: selector on {:?} ({} tabs, zoom {:.3})",
            self.id,
            leaf,
            members.len(),
            zoom
        );
        Ok(())
    }

    fn selector_leaf(&self, session: SessionId) -> Result<SplitId, LayoutError> {
        self.tree
            .find(session)
            .filter(|&leaf| self.tree.leaf(leaf).is_some_and(|l| l.selector.is_some()))
            .ok_or(LayoutError::SelectorInactive(session))
    }

    fn selector_mut(&mut self, session: SessionId) -> Result<&mut Selector, LayoutError> {
        let leaf = self.selector_leaf(session)?;
        self.tree
            .leaf_mut(leaf)
            .and_then(|l| l.selector.as_mut())
            .ok_or(LayoutError::SelectorInactive(session))
    }

    /// Active selector over the leaf owning `session`
    pub fn selector(&self, session: SessionId) -> Option<&Selector> {
        let leaf = self.tree.find(session)?;
        self.tree.leaf(leaf)?.selector.as_ref()
    }

    /// Move the selector highlight
    pub fn selector_move(
        &mut self,
        session: SessionId,
        direction: SelectorMove,
    ) -> Result<Option<SessionId>, LayoutError> {
        let selector = self.selector_mut(session)?;
        selector.move_highlight(direction);
        Ok(selector.highlighted())
    }

    /// Pick the highlighted entry and start ending
    pub fn selector_confirm(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let selector = self.selector_mut(session)?;
        if selector.is_ending() {
            return Ok(());
        }
        selector.confirm();
        self.emit_selector_ending(session);
        Ok(())
    }

    /// Pick `picked` directly and start ending
    pub fn selector_pick(&mut self, session: SessionId, picked: SessionId) -> Result<(), LayoutError> {
        let selector = self.selector_mut(session)?;
        if selector.is_ending() {
            return Ok(());
        }
        if !selector.highlight(picked) {
            return Err(LayoutError::SessionNotFound(picked));
        }
        selector.confirm();
        self.emit_selector_ending(session);
        Ok(())
    }

    /// Leave without a pick and start ending
    pub fn selector_cancel(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let selector = self.selector_mut(session)?;
        if selector.is_ending() {
            return Ok(());
        }
        selector.cancel();
        self.emit_selector_ending(session);
        Ok(())
    }

    fn emit_selector_ending(&mut self, session: SessionId) {
        let anchor = self.current_of(session).unwrap_or(session);
        self.emit(anchor, Signal::SelectorEnding);
    }

    /// The selector's end animation finished: restore live content and
    /// settle focus. Finishing a selector that never ended counts as a cancel.
    pub fn selector_done(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let leaf = self.selector_leaf(session)?;
        let picked = match self.tree.leaf(leaf).and_then(|l| l.selector.as_ref()) {
            Some(selector) => match selector.phase() {
                SelectorPhase::Ending { picked } => picked,
                SelectorPhase::Browsing => None,
            },
            None => return Err(LayoutError::SelectorInactive(session)),
        };

        self.selector_restore(leaf);
        let target = picked
            .filter(|&p| self.tree.group(leaf).is_some_and(|g| g.contains(p)))
            .or_else(|| self.tree.group(leaf).and_then(|g| g.current()));
        if let Some(target) = target {
            self.focus_resolved(target, leaf);
            self.miniview_check();
        }
        Ok(())
    }

    /// Drop the selector of `leaf` and reattach live content of every member
    pub(super) fn selector_restore(&mut self, leaf: SplitId) {
        let Some(l) = self.tree.leaf_mut(leaf) else {
            return;
        };
        if l.selector.take().is_none() {
            return;
        }
        let members: Vec<SessionId> = l.group.iter().collect();
        let anchor = l.group.current();
        for session in self.sessions.iter_mut().filter(|s| members.contains(&s.id)) {
            session.unswallowed = false;
        }
        if let Some(anchor) = anchor {
            self.emit(anchor, Signal::SelectorOff);
        }
        crate::debug_info!("SELECTOR", "window {}: selector on {:?} closed", self.id, leaf);
    }
}
