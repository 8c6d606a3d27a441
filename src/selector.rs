//! Selector overlay state: a zoomed-out grid of a leaf's tabs.
//!
//! The overlay only tracks which thumbnail is highlighted and whether it is
//! on its way out. Focus changes happen in the window once the overlay has
//! finished ending (see `Window::selector_done`).

use crate::session::SessionId;

/// One thumbnail in the selector grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorEntry {
    pub session: SessionId,
    /// Entry is the leaf's current session
    pub is_current: bool,
    pub missed_bell: bool,
}

/// Lifecycle of an open selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPhase {
    /// Accepting navigation input
    Browsing,
    /// Animating out; `picked` is `None` when cancelled
    Ending { picked: Option<SessionId> },
}

/// Highlight movement in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMove {
    Left,
    Right,
    Up,
    Down,
}

/// Open selector overlay over one leaf
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    entries: Vec<SelectorEntry>,
    highlighted: usize,
    zoom: f64,
    columns: usize,
    phase: SelectorPhase,
}

impl Selector {
    /// Open over `entries`, highlighting the current one
    pub fn new(entries: Vec<SelectorEntry>) -> Self {
        let highlighted = entries.iter().position(|e| e.is_current).unwrap_or(0);
        let count = entries.len();
        Self {
            entries,
            highlighted,
            zoom: Self::zoom_for(count),
            columns: Self::columns_for(count),
            phase: SelectorPhase::Browsing,
        }
    }

    /// Zoom factor for `count` thumbnails: `1 / (sqrt(count) * 0.8)`, at most 1
    pub fn zoom_for(count: usize) -> f64 {
        if count == 0 {
            return 1.0;
        }
        (1.0 / ((count as f64).sqrt() * 0.8)).min(1.0)
    }

    /// Grid width for `count` thumbnails
    pub fn columns_for(count: usize) -> usize {
        ((count as f64).sqrt().ceil() as usize).max(1)
    }

    pub fn entries(&self) -> &[SelectorEntry] {
        &self.entries
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    pub fn is_ending(&self) -> bool {
        matches!(self.phase, SelectorPhase::Ending { .. })
    }

    /// Session under the highlight
    pub fn highlighted(&self) -> Option<SessionId> {
        self.entries.get(self.highlighted).map(|e| e.session)
    }

    /// Move the highlight to `session`. Returns false if it is not shown.
    pub fn highlight(&mut self, session: SessionId) -> bool {
        match self.entries.iter().position(|e| e.session == session) {
            Some(idx) => {
                self.highlighted = idx;
                true
            }
            None => false,
        }
    }

    /// Move the highlight one cell, staying inside the grid
    pub fn move_highlight(&mut self, direction: SelectorMove) {
        if self.is_ending() || self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        let idx = self.highlighted;
        self.highlighted = match direction {
            SelectorMove::Left => idx.saturating_sub(1),
            SelectorMove::Right => (idx + 1).min(last),
            SelectorMove::Up => idx.checked_sub(self.columns).unwrap_or(idx),
            SelectorMove::Down => {
                let below = idx + self.columns;
                if below <= last { below } else { idx }
            }
        };
    }

    /// Start ending with the highlighted entry picked
    pub fn confirm(&mut self) -> Option<SessionId> {
        let picked = self.highlighted();
        self.phase = SelectorPhase::Ending { picked };
        picked
    }

    /// Start ending without a pick
    pub fn cancel(&mut self) {
        self.phase = SelectorPhase::Ending { picked: None };
    }
}
