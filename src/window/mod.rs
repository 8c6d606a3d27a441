//! One native window: its split tree, its sessions and the focus router.
//!
//! A `Window` exclusively owns its tree and sessions. Sessions are always
//! addressed by [`SessionId`] and resolved through [`SplitTree::find`], so a
//! contraction between two events never leaves a stale node reference behind.
//!
//! The implementation is spread over sub-modules by concern:
//! - `ops`: split, close, new tab, tab jumps
//! - `focus`: the focus router and native focus/pointer callbacks
//! - `tabs`: tab count badges, tab bars and the miniview
//! - `notify`: bell, title, icon and exit notifications from content
//! - `sizing`: the deferred size negotiation job
//! - `geometry`: top-down bounds and per-session character sizes
//! - `selector`: the tab selector overlay
//! - `cmdbox`: command overlay timers

mod cmdbox;
mod focus;
mod geometry;
mod notify;
mod ops;
mod selector;
mod sizing;
mod tabs;

use splitterm_config::Config;

use crate::error::LayoutError;
use crate::manager::WindowId;
use crate::session::{Session, SessionFactory, SessionId, SessionSpec};
use crate::signals::{Signal, SignalSink, WindowBinding};
use crate::split::SplitTree;

pub use cmdbox::{Cmdbox, CmdboxTimer};
pub use ops::CloseOutcome;

/// Marker for a scheduled size recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SizeJob {
    /// Number of schedule requests folded into this job
    coalesced: u32,
}

/// One native window hosting a split tree of sessions
pub struct Window {
    id: WindowId,
    config: Config,
    tree: SplitTree,
    /// Every hosted session, in creation order
    sessions: Vec<Session>,
    binding: Box<dyn WindowBinding>,
    sink: Box<dyn SignalSink>,
    factory: Box<dyn SessionFactory>,
    /// Native window holds input focus
    focused: bool,
    /// Last session was closed; the window awaits destruction
    closing: bool,
    size_job: Option<SizeJob>,
    /// Last known pointer position, for mouse-over focus
    pointer: Option<(f32, f32)>,
    /// Last size reported by the binding
    size: Option<(i32, i32)>,
    cmdbox: Cmdbox,
    next_session_id: SessionId,
}

impl Window {
    /// Create a window with one leaf holding a freshly spawned session.
    ///
    /// The session is focused and its initial size request will be applied
    /// by the first size job.
    pub fn new(
        id: WindowId,
        config: Config,
        binding: Box<dyn WindowBinding>,
        sink: Box<dyn SignalSink>,
        mut factory: Box<dyn SessionFactory>,
    ) -> Result<Self, LayoutError> {
        let spec = SessionSpec::from_config(&config);
        let content = factory
            .spawn(&spec)
            .map_err(|e| LayoutError::Spawn(format!("{:#}", e)))?;

        let first = 1;
        let session = Session::new(first, content, spec.hold);

        let mut window = Self {
            id,
            config,
            tree: SplitTree::new(first),
            sessions: vec![session],
            binding,
            sink,
            factory,
            focused: false,
            closing: false,
            size_job: None,
            pointer: None,
            size: None,
            cmdbox: Cmdbox::default(),
            next_session_id: first + 1,
        };

        let root = window.tree.root();
        window.focus_in_place(first, root);
        window.schedule_size_job();

        log::info!("window {} created with session {}", id, first);
        Ok(window)
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tree(&self) -> &SplitTree {
        &self.tree
    }

    /// Whether the native window holds input focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the last session was closed and the window awaits teardown
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Last size reported through [`Window::on_window_resized`]
    pub fn size(&self) -> Option<(i32, i32)> {
        self.size
    }

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// All sessions in creation order
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Session holding the window's focus slot
    pub fn focused_session(&self) -> Option<SessionId> {
        self.sessions.iter().find(|s| s.focused).map(|s| s.id)
    }

    /// Current session of the leaf owning `session`
    pub fn current_of(&self, session: SessionId) -> Option<SessionId> {
        let leaf = self.tree.find(session)?;
        self.tree.group(leaf)?.current()
    }

    fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    /// Resolve a session, logging unknown ids as caller errors
    fn require(&self, id: SessionId) -> Result<&Session, LayoutError> {
        self.session(id).ok_or_else(|| {
            log::warn!("window {}: unknown session {}", self.id, id);
            LayoutError::SessionNotFound(id)
        })
    }

    /// Spawn content for a new session and register it, without placing it
    /// in the tree
    fn spawn_session(&mut self, spec: SessionSpec) -> Result<SessionId, LayoutError> {
        let content = self.factory.spawn(&spec).map_err(|e| {
            log::error!("window {}: session spawn failed: {:#}", self.id, e);
            LayoutError::Spawn(format!("{:#}", e))
        })?;
        let id = self.next_session_id;
        self.next_session_id += 1;
        let mut session = Session::new(id, content, spec.hold);
        // Only the window's first session asks for its requested size
        session.size_done = true;
        self.sessions.push(session);
        Ok(id)
    }

    /// Window title for a session title, falling back to the configured one
    fn display_title(&self, title: String) -> String {
        if title.is_empty() {
            self.config.window_title.clone()
        } else {
            title
        }
    }

    fn emit(&mut self, session: SessionId, signal: Signal) {
        crate::debug_trace!("SIGNAL", "session {} <- {:?}", session, signal);
        self.sink.emit(session, signal);
    }

    /// Replace the window's configuration
    ///
    /// Every session's size-done marker is cleared so requested sizes are
    /// applied again by the next size job.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        for session in &mut self.sessions {
            session.size_done = false;
        }
        self.schedule_size_job();
    }

    /// Cancel deferred work and destroy the native window
    pub(crate) fn teardown(&mut self) {
        if self.size_job.take().is_some() {
            crate::debug_log!("SIZE", "window {}: pending size job cancelled", self.id);
        }
        self.cmdbox.cancel();
        self.sessions.clear();
        self.binding.destroy();
        log::info!("window {} destroyed", self.id);
    }

    /// Check tree structure and the single-focus rule
    pub fn check_invariants(&self) -> Result<(), LayoutError> {
        self.tree.check_invariants()?;
        let focused = self.sessions.iter().filter(|s| s.focused).count();
        if focused > 1 {
            return Err(LayoutError::InconsistentTree(format!(
                "{} sessions focused",
                focused
            )));
        }
        let placed = self.tree.sessions();
        if !self.closing && placed.len() != self.sessions.len() {
            return Err(LayoutError::InconsistentTree(format!(
                "{} sessions placed but {} hosted",
                placed.len(),
                self.sessions.len()
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("tree", &self.tree)
            .field("sessions", &self.sessions)
            .field("focused", &self.focused)
            .field("closing", &self.closing)
            .field("size_job", &self.size_job)
            .finish_non_exhaustive()
    }
}
