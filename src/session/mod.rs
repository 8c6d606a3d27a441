//! Session state and the contracts with the terminal content provider.
//!
//! A `Session` is one terminal instance. It is owned by its `Window`, and
//! belongs to exactly one `SessionGroup` (one leaf of the split tree).
//! The tree never stores sessions directly, only their ids.

mod content;

pub use content::{SessionContent, SessionFactory, SessionSpec, SizeHints};

/// Unique identifier of a session within its window
pub type SessionId = u64;

/// One terminal instance hosted by a window
pub struct Session {
    /// Identifier, stable for the session's lifetime
    pub(crate) id: SessionId,
    /// Terminal widget behind this session
    pub(crate) content: Box<dyn SessionContent>,
    /// Whether this session holds the window's focus slot
    pub(crate) focused: bool,
    /// Keep the session open after its process exits
    pub(crate) hold: bool,
    /// A bell rang while this session was not the current tab
    pub(crate) missed_bell: bool,
    /// Last size hints reported by the content, clamped
    pub(crate) hints: SizeHints,
    /// Initial size request already applied to the window
    pub(crate) size_done: bool,
    /// Live content detached while a selector overlay shows its thumbnail
    pub(crate) unswallowed: bool,
    /// Whether the tab bar is currently shown for this session
    pub(crate) tabbar_shown: bool,
    /// Whether the miniview is toggled on for this session
    pub(crate) miniview_shown: bool,
}

impl Session {
    /// Create a session around freshly spawned content
    pub(crate) fn new(id: SessionId, content: Box<dyn SessionContent>, hold: bool) -> Self {
        let hints = content.size_hints().clamped();
        Self {
            id,
            content,
            focused: false,
            hold,
            missed_bell: false,
            hints,
            size_done: false,
            unswallowed: false,
            tabbar_shown: false,
            miniview_shown: false,
        }
    }

    /// Session identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Whether this session holds the window's focus slot
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether a bell was missed while this session was hidden
    pub fn has_missed_bell(&self) -> bool {
        self.missed_bell
    }

    /// Whether the session outlives its process
    pub fn is_held(&self) -> bool {
        self.hold
    }

    /// Cached size hints
    pub fn hints(&self) -> SizeHints {
        self.hints
    }

    /// Whether the live content is detached for the selector overlay
    pub fn is_unswallowed(&self) -> bool {
        self.unswallowed
    }

    /// Whether the miniview is shown
    pub fn miniview_shown(&self) -> bool {
        self.miniview_shown
    }

    /// Title reported by the content
    pub fn title(&self) -> String {
        self.content.title()
    }

    /// Icon name reported by the content
    pub fn icon_name(&self) -> String {
        self.content.icon_name()
    }

    /// Working directory reported by the content
    pub fn cwd(&self) -> Option<String> {
        self.content.cwd()
    }

    /// Current terminal size in character cells
    pub fn grid_size(&self) -> (usize, usize) {
        self.content.size()
    }

    /// Re-read and cache the content's size hints
    pub(crate) fn refresh_hints(&mut self) -> SizeHints {
        self.hints = self.content.size_hints().clamped();
        self.hints
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("focused", &self.focused)
            .field("hold", &self.hold)
            .field("missed_bell", &self.missed_bell)
            .field("hints", &self.hints)
            .field("size_done", &self.size_done)
            .finish_non_exhaustive()
    }
}
