//! Session group: the ordered tab stack occupying one leaf of the split tree.

use crate::session::SessionId;

/// Ordered sessions sharing one leaf, with a designated current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGroup {
    /// Sessions in insertion order
    sessions: Vec<SessionId>,
    /// Current (visible) session, always a member when set
    current: Option<SessionId>,
}

impl SessionGroup {
    /// Create a group holding a single session, which becomes current
    pub fn new(session: SessionId) -> Self {
        Self {
            sessions: vec![session],
            current: Some(session),
        }
    }

    /// Append a session at the end. Duplicates are ignored.
    ///
    /// The first session added to an empty group becomes current.
    pub fn add(&mut self, session: SessionId) {
        if self.contains(session) {
            return;
        }
        self.sessions.push(session);
        if self.current.is_none() {
            self.current = Some(session);
        }
    }

    /// Remove a session, returning whether it was a member.
    ///
    /// Removing the current session makes the next member current, else the
    /// previous one, else none.
    pub fn remove(&mut self, session: SessionId) -> bool {
        let Some(idx) = self.index_of(session) else {
            return false;
        };
        self.sessions.remove(idx);
        if self.current == Some(session) {
            // After removal the next member slides into `idx`
            self.current = self
                .sessions
                .get(idx)
                .or_else(|| idx.checked_sub(1).and_then(|i| self.sessions.get(i)))
                .copied();
        }
        true
    }

    pub fn contains(&self, session: SessionId) -> bool {
        self.sessions.contains(&session)
    }

    /// Current session of the group
    pub fn current(&self) -> Option<SessionId> {
        self.current
    }

    /// Make a member current. Returns false when `session` is not a member.
    pub fn set_current(&mut self, session: SessionId) -> bool {
        if !self.contains(session) {
            return false;
        }
        self.current = Some(session);
        true
    }

    /// 1-based position of a member and the total count, for "i/n" labels
    pub fn position(&self, session: SessionId) -> Option<(usize, usize)> {
        self.index_of(session).map(|i| (i + 1, self.sessions.len()))
    }

    /// 0-based index of a member
    pub fn index_of(&self, session: SessionId) -> Option<usize> {
        self.sessions.iter().position(|&s| s == session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn first(&self) -> Option<SessionId> {
        self.sessions.first().copied()
    }

    pub fn last(&self) -> Option<SessionId> {
        self.sessions.last().copied()
    }

    /// Member at a 0-based index
    pub fn nth(&self, index: usize) -> Option<SessionId> {
        self.sessions.get(index).copied()
    }

    /// Member following `session` in order, without wrapping
    pub fn after(&self, session: SessionId) -> Option<SessionId> {
        self.index_of(session).and_then(|i| self.nth(i + 1))
    }

    /// Member preceding `session` in order, without wrapping
    pub fn before(&self, session: SessionId) -> Option<SessionId> {
        self.index_of(session)
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.nth(i))
    }

    /// Members in order
    pub fn iter(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.sessions.iter().copied()
    }

    /// Count members for which `missed` reports an unseen bell
    pub fn missed_bell_count(&self, missed: impl Fn(SessionId) -> bool) -> usize {
        self.sessions.iter().filter(|&&s| missed(s)).count()
    }
}
