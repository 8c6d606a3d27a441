//! Notifications coming from session content.

use super::{CloseOutcome, Window};
use crate::error::LayoutError;
use crate::session::SessionId;
use crate::signals::Signal;

impl Window {
    /// The session rang its bell
    pub fn on_bell(&mut self, session: SessionId) -> Result<(), LayoutError> {
        self.require(session)?;
        if !self.config.disable_visual_bell {
            self.emit(session, Signal::Bell);
            if self.config.bell_rings {
                self.emit(session, Signal::BellRing);
            }
            if let Some(leaf) = self.tree.find(session)
                && let Some(current) = self.tree.group(leaf).and_then(|g| g.current())
                && current != session
            {
                if let Some(s) = self.session_mut(session) {
                    s.missed_bell = true;
                }
                self.update_tabcount(leaf, current);
            }
        }
        if self.config.urg_bell && !self.focused {
            self.binding.set_urgent(true);
        }
        Ok(())
    }

    /// The session's title changed
    pub fn on_title_changed(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let s = self.require(session)?;
        let title = s.title();
        if s.focused {
            let shown = self.display_title(title.clone());
            self.binding.set_title(&shown);
        }
        self.emit(session, Signal::TabTitle(title));
        if !self.config.notabs
            && let Some(leaf) = self.tree.find(session)
            && let Some(group) = self.tree.group(leaf)
            && group.len() > 1
            && let Some(current) = group.current()
        {
            self.update_tabcount(leaf, current);
        }
        Ok(())
    }

    /// The session's icon name changed
    pub fn on_icon_changed(&mut self, session: SessionId) -> Result<(), LayoutError> {
        let s = self.require(session)?;
        if s.focused {
            let icon = s.icon_name();
            self.binding.set_icon(&icon);
        }
        Ok(())
    }

    /// The session's process exited. Held sessions stay open.
    pub fn on_session_exited(
        &mut self,
        session: SessionId,
    ) -> Result<Option<CloseOutcome>, LayoutError> {
        if self.require(session)?.hold {
            crate::debug_info!("SPLIT", "session {} exited, held open", session);
            return Ok(None);
        }
        self.close(session).map(Some)
    }

    /// Keep (or stop keeping) `session` open after its process exits
    pub fn set_hold(&mut self, session: SessionId, hold: bool) -> Result<(), LayoutError> {
        self.require(session)?;
        if let Some(s) = self.session_mut(session) {
            s.hold = hold;
        }
        Ok(())
    }
}
