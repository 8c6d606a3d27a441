//! Tab count badges, tab bars and miniview visibility.

use super::Window;
use crate::error::LayoutError;
use crate::session::SessionId;
use crate::signals::{Signal, TabEntry};
use crate::split::SplitId;

impl Window {
    /// Refresh the tab badges and tab bars of every session in `leaf`.
    ///
    /// The "i/n" label is taken from `subject`'s position in the group.
    pub(super) fn update_tabcount(&mut self, leaf: SplitId, subject: SessionId) {
        let Some(group) = self.tree.group(leaf).cloned() else {
            return;
        };
        let n = group.len();
        let k = group
            .position(subject)
            .or_else(|| group.current().and_then(|c| group.position(c)))
            .map_or(0, |(k, _)| k);
        let missed = group.missed_bell_count(|id| self.session(id).is_some_and(|s| s.missed_bell));
        let missed_label = if missed > 0 {
            missed.to_string()
        } else {
            String::new()
        };
        let tabs: Vec<TabEntry> = group
            .iter()
            .map(|id| TabEntry {
                session: id,
                title: self.session(id).map(|s| s.title()).unwrap_or_default(),
            })
            .collect();
        let show_bar = !self.config.notabs;

        for (i, tab) in tabs.iter().enumerate() {
            let id = tab.session;
            let was_shown = self.session(id).is_some_and(|s| s.tabbar_shown);
            if n > 1 {
                self.emit(
                    id,
                    Signal::TabCountOn {
                        label: format!("{}/{}", k, n),
                        missed: missed_label.clone(),
                    },
                );
                if show_bar {
                    let is_current = group.current() == Some(id);
                    let (before, after) = if is_current {
                        (tabs[..i].to_vec(), tabs[i + 1..].to_vec())
                    } else {
                        (Vec::new(), Vec::new())
                    };
                    self.emit(
                        id,
                        Signal::TabBarOn {
                            left: i as f64 / n as f64,
                            right: (i + 1) as f64 / n as f64,
                            title: tab.title.clone(),
                            before,
                            after,
                        },
                    );
                    self.set_tabbar_shown(id, true);
                } else if was_shown {
                    self.emit(id, Signal::TabBarOff);
                    self.set_tabbar_shown(id, false);
                }
            } else {
                self.emit(id, Signal::TabCountOff);
                if was_shown {
                    self.emit(id, Signal::TabBarOff);
                    self.set_tabbar_shown(id, false);
                }
            }
            let signal = if missed > 0 {
                Signal::TabMissedOn
            } else {
                Signal::TabMissedOff
            };
            self.emit(id, signal);
        }
    }

    fn set_tabbar_shown(&mut self, session: SessionId, shown: bool) {
        if let Some(s) = self.session_mut(session) {
            s.tabbar_shown = shown;
        }
    }

    /// Refresh tab badges of every leaf
    pub fn update_all_tabcounts(&mut self) {
        for leaf in self.tree.flatten() {
            if let Some(current) = self.tree.group(leaf).and_then(|g| g.current()) {
                self.update_tabcount(leaf, current);
            }
        }
    }

    /// Re-sync miniviews after a tab switch: a shown miniview stays on for
    /// the focused session and goes off for hidden tabs
    pub fn miniview_check(&mut self) {
        let mut updates = Vec::new();
        for session in self.sessions.iter().filter(|s| s.miniview_shown) {
            if session.focused {
                updates.push((session.id, Signal::MiniviewOn));
            } else if self.current_of(session.id) != Some(session.id) {
                updates.push((session.id, Signal::MiniviewOff));
            }
        }
        for (id, signal) in updates {
            self.emit(id, signal);
        }
    }

    /// Toggle the miniview of `session`
    pub fn miniview_toggle(&mut self, session: SessionId) -> Result<bool, LayoutError> {
        self.require(session)?;
        let shown = match self.session_mut(session) {
            Some(s) => {
                s.miniview_shown = !s.miniview_shown;
                s.miniview_shown
            }
            None => return Err(LayoutError::SessionNotFound(session)),
        };
        let signal = if shown {
            Signal::MiniviewOn
        } else {
            Signal::MiniviewOff
        };
        self.emit(session, signal);
        Ok(shown)
    }

    /// Hide the miniview of `session` if shown
    pub fn miniview_hide(&mut self, session: SessionId) -> Result<(), LayoutError> {
        self.require(session)?;
        if let Some(s) = self.session_mut(session)
            && s.miniview_shown
        {
            s.miniview_shown = false;
            self.emit(session, Signal::MiniviewOff);
        }
        Ok(())
    }
}
