//! Tree-changing operations: split, close, new tab and tab jumps.

use super::Window;
use crate::error::LayoutError;
use crate::session::{SessionId, SessionSpec};
use crate::split::{Orientation, RemoveOutcome, SplitId};

/// What closing a session did to its window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The session is gone; the window lives on
    Closed,
    /// It was the window's last session; the window is marked for destruction
    WindowClosed,
}

impl Window {
    /// Split the leaf owning `session`, placing a new session in the second
    /// child. Returns the new session, which receives focus.
    pub fn split(
        &mut self,
        session: SessionId,
        orientation: Orientation,
        command: Option<String>,
    ) -> Result<SessionId, LayoutError> {
        let leaf = self
            .tree
            .find(session)
            .ok_or(LayoutError::SessionNotFound(session))?;
        self.split_leaf(leaf, orientation, command)
    }

    /// Split a leaf directly by node id
    pub fn split_leaf(
        &mut self,
        leaf: SplitId,
        orientation: Orientation,
        command: Option<String>,
    ) -> Result<SessionId, LayoutError> {
        let current = match self.tree.node(leaf) {
            None => return Err(LayoutError::NodeNotFound(leaf)),
            Some(node) => match node.as_leaf() {
                Some(l) => l.group.current(),
                None => {
                    log::warn!("window {}: split on internal node {:?}", self.id, leaf);
                    return Err(LayoutError::NotALeaf(leaf));
                }
            },
        };
        let cwd = current.and_then(|id| self.session(id)).and_then(|s| s.cwd());
        let spec = SessionSpec::from_config(&self.config)
            .with_cwd(cwd)
            .with_command(command);

        let new_session = self.spawn_session(spec)?;
        let (first, second) = match self.tree.split_leaf(leaf, orientation, new_session) {
            Ok(children) => children,
            Err(e) => {
                self.sessions.retain(|s| s.id != new_session);
                return Err(e);
            }
        };

        if let Some(kept) = current {
            self.update_tabcount(first, kept);
        }
        self.focus_resolved(new_session, second);
        self.schedule_size_job();
        self.relayout();

        log::info!(
            "window {}: split {:?}, new session {}",
            self.id,
            orientation,
            new_session
        );
        Ok(new_session)
    }

    /// Close a session.
    ///
    /// The group's current moves to the next member, else the previous one.
    /// An emptied leaf is removed and its sibling promoted. Focus moves only
    /// if the closed session held it.
    pub fn close(&mut self, session: SessionId) -> Result<CloseOutcome, LayoutError> {
        let was_focused = self.require(session)?.focused;
        let outcome = self.tree.remove_session(session)?;

        match outcome {
            RemoveOutcome::LastSession => {
                self.closing = true;
                log::info!(
                    "window {}: last session {} closed, window closing",
                    self.id,
                    session
                );
                return Ok(CloseOutcome::WindowClosed);
            }
            RemoveOutcome::LeafKept { leaf, current } => {
                self.sessions.retain(|s| s.id != session);
                if self.tree.leaf(leaf).is_some_and(|l| l.selector.is_some()) {
                    self.selector_restore(leaf);
                }
                if let Some(current) = current {
                    if was_focused {
                        self.focus_resolved(current, leaf);
                    } else {
                        self.update_tabcount(leaf, current);
                    }
                }
            }
            RemoveOutcome::Contracted { promoted } => {
                self.sessions.retain(|s| s.id != session);
                if was_focused {
                    let target = self
                        .tree
                        .first_leaf(promoted)
                        .and_then(|leaf| Some((leaf, self.tree.group(leaf)?.current()?)));
                    if let Some((leaf, current)) = target {
                        self.focus_resolved(current, leaf);
                    }
                }
            }
        }

        crate::debug_info!("SPLIT", "window {}: session {} closed", self.id, session);
        self.schedule_size_job();
        self.relayout();
        Ok(CloseOutcome::Closed)
    }

    /// Add a tab next to `session`, starting in the current tab's directory
    pub fn new_tab(&mut self, session: SessionId) -> Result<SessionId, LayoutError> {
        let cwd = self
            .current_of(session)
            .and_then(|id| self.session(id))
            .and_then(|s| s.cwd());
        self.new_tab_with_dir(session, cwd)
    }

    /// Add a tab to the leaf owning `session`, starting in `dir`.
    ///
    /// The new session inherits the current tab's character size, becomes
    /// the leaf's current session and receives focus.
    pub fn new_tab_with_dir(
        &mut self,
        session: SessionId,
        dir: Option<String>,
    ) -> Result<SessionId, LayoutError> {
        let leaf = self
            .tree
            .find(session)
            .ok_or(LayoutError::SessionNotFound(session))?;
        let mut spec = SessionSpec::from_config(&self.config).with_cwd(dir);
        if let Some(current) = self.tree.group(leaf).and_then(|g| g.current())
            && let Some(s) = self.session(current)
        {
            (spec.cols, spec.rows) = s.grid_size();
        }

        let new_session = self.spawn_session(spec)?;
        self.selector_restore(leaf);
        if let Some(group) = self.tree.group_mut(leaf) {
            group.add(new_session);
            group.set_current(new_session);
        }
        self.focus_resolved(new_session, leaf);
        self.miniview_check();
        self.schedule_size_job();
        self.relayout();

        log::info!(
            "window {}: new tab {} next to {}",
            self.id,
            new_session,
            session
        );
        Ok(new_session)
    }

    /// Jump to the 0-based `index`-th tab of the leaf owning `session`.
    ///
    /// Out-of-range indices and jumps to `session` itself do nothing.
    pub fn tab_go(&mut self, session: SessionId, index: usize) -> Result<(), LayoutError> {
        let leaf = self
            .tree
            .find(session)
            .ok_or(LayoutError::SessionNotFound(session))?;
        let Some(target) = self.tree.group(leaf).and_then(|g| g.nth(index)) else {
            return Ok(());
        };
        if target == session {
            return Ok(());
        }
        if self.config.tab_switch_uses_selector() {
            return self.selector_go(leaf, target);
        }
        self.focus_resolved(target, leaf);
        self.miniview_check();
        Ok(())
    }
}
