//! Focus router: the window's single focus slot and the native focus and
//! pointer callbacks feeding it.

use super::Window;
use crate::error::LayoutError;
use crate::session::SessionId;
use crate::signals::Signal;
use crate::split::SplitId;

impl Window {
    /// Focus `session` and make it the current tab of its leaf
    pub fn focus(&mut self, session: SessionId) -> Result<(), LayoutError> {
        self.require(session)?;
        let leaf = self
            .tree
            .find(session)
            .ok_or(LayoutError::SessionNotFound(session))?;
        self.focus_resolved(session, leaf);
        Ok(())
    }

    /// Make `session` current in `leaf`, then move focus to it.
    ///
    /// An open selector over `leaf` is dismissed first so the overlay never
    /// sees its group's current session change underneath it.
    pub(super) fn focus_resolved(&mut self, session: SessionId, leaf: SplitId) {
        self.selector_restore(leaf);
        if let Some(group) = self.tree.group_mut(leaf) {
            group.set_current(session);
        }
        self.focus_in_place(session, leaf);
    }

    /// Move the focus slot to `session` without touching its group's
    /// current session
    pub(super) fn focus_in_place(&mut self, session: SessionId, leaf: SplitId) {
        let previous: Vec<SessionId> = self
            .sessions
            .iter_mut()
            .filter(|s| s.id != session && s.focused)
            .map(|s| {
                s.focused = false;
                s.id
            })
            .collect();
        for id in previous {
            self.emit(id, Signal::FocusOut);
        }

        let Some(target) = self.session_mut(session) else {
            return;
        };
        target.focused = true;
        target.missed_bell = false;
        let title = target.title();
        let icon = target.icon_name();
        self.emit(session, Signal::FocusIn);
        let title = self.display_title(title);
        self.binding.set_title(&title);
        self.binding.set_icon(&icon);
        self.update_tabcount(leaf, session);

        crate::debug_info!("FOCUS", "window {}: session {} focused", self.id, session);
    }

    /// Move focus to the next session in tab order.
    ///
    /// Only acts when `session` holds focus. Staying inside the same leaf
    /// goes through the selector overlay when tabs are hidden and a tab zoom
    /// is configured.
    pub fn focus_next(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let target = self.tree.next_session(session);
        self.focus_step(session, target)
    }

    /// Move focus to the previous session in tab order
    pub fn focus_prev(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let target = self.tree.prev_session(session);
        self.focus_step(session, target)
    }

    fn focus_step(
        &mut self,
        session: SessionId,
        target: Option<SessionId>,
    ) -> Result<(), LayoutError> {
        if !self.require(session)?.focused {
            self.miniview_check();
            return Ok(());
        }
        if let Some(target) = target.filter(|&t| t != session) {
            let from = self.tree.find(session);
            let to = self
                .tree
                .find(target)
                .ok_or(LayoutError::SessionNotFound(target))?;
            if from == Some(to) && self.config.tab_switch_uses_selector() {
                self.selector_go(to, target)?;
            } else {
                self.focus_resolved(target, to);
            }
        }
        self.miniview_check();
        Ok(())
    }

    /// Native window gained input focus
    pub fn on_window_focus_in(&mut self) {
        if !self.focused {
            self.binding.set_urgent(false);
        }
        self.focused = true;

        let focused = self.focused_session();
        if self.config.mouse_over_focus
            && let Some(under) = self.session_under_pointer()
            && Some(under) != focused
        {
            if let Some(leaf) = self.tree.find(under) {
                crate::debug_info!(
                    "FOCUS",
                    "window {}: pointer over {}, focusing it",
                    self.id,
                    under
                );
                self.focus_in_place(under, leaf);
            }
            return;
        }

        let Some(session) = focused else {
            return;
        };
        let selector_up = self
            .tree
            .find(session)
            .and_then(|leaf| self.tree.leaf(leaf))
            .is_some_and(|l| l.selector.is_some());
        // The selector takes input instead of the session while it is up
        if !selector_up {
            self.emit(session, Signal::FocusIn);
        }
    }

    /// Native window lost input focus. The focus slot is kept so focus-in
    /// can restore it.
    pub fn on_window_focus_out(&mut self) {
        self.focused = false;
        if let Some(session) = self.focused_session() {
            self.emit(session, Signal::FocusOut);
        }
    }

    /// Mouse button pressed over `session`
    pub fn on_mouse_down(&mut self, session: SessionId) -> Result<(), LayoutError> {
        if self.focused_session() == Some(session) {
            return Ok(());
        }
        self.require(session)?;
        let leaf = self
            .tree
            .find(session)
            .ok_or(LayoutError::SessionNotFound(session))?;
        self.focus_in_place(session, leaf);
        Ok(())
    }

    /// Pointer entered `session`. Focuses it under the mouse-over-focus
    /// policy while the window is focused.
    pub fn on_mouse_in(&mut self, session: SessionId) -> Result<(), LayoutError> {
        if !self.config.mouse_over_focus || !self.focused {
            return Ok(());
        }
        self.require(session)?;
        let leaf = self
            .tree
            .find(session)
            .ok_or(LayoutError::SessionNotFound(session))?;
        self.focus_in_place(session, leaf);
        Ok(())
    }

    /// Pointer moved to window coordinates `(x, y)`
    pub fn on_pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    fn session_under_pointer(&self) -> Option<SessionId> {
        let (x, y) = self.pointer?;
        self.session_at(x, y)
    }
}
