//! Contracts with the terminal widget that backs each session.

use anyhow::Result;

/// Size hints reported by a session's content.
///
/// `step_*` is the character cell size, `min_*` the smallest usable content
/// size and `req_*` the size the content asks for when first shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHints {
    pub min_w: i32,
    pub min_h: i32,
    pub step_x: i32,
    pub step_y: i32,
    pub req_w: i32,
    pub req_h: i32,
}

impl SizeHints {
    /// Create hints from the six reported values
    pub fn new(min_w: i32, min_h: i32, step_x: i32, step_y: i32, req_w: i32, req_h: i32) -> Self {
        Self {
            min_w,
            min_h,
            step_x,
            step_y,
            req_w,
            req_h,
        }
    }

    /// Clamp every value to at least 1
    ///
    /// Zero or negative hints would otherwise end up as divisors in the
    /// cell-size and zoom math.
    pub fn clamped(self) -> Self {
        Self {
            min_w: self.min_w.max(1),
            min_h: self.min_h.max(1),
            step_x: self.step_x.max(1),
            step_y: self.step_y.max(1),
            req_w: self.req_w.max(1),
            req_h: self.req_h.max(1),
        }
    }
}

impl Default for SizeHints {
    fn default() -> Self {
        Self::new(1, 1, 1, 1, 1, 1)
    }
}

/// Terminal widget hosted by a session.
///
/// Implemented by the host's terminal widget (and by mocks in tests). All
/// calls happen on the event-loop thread.
pub trait SessionContent {
    /// Current size hints, queried whenever the content signals a change
    fn size_hints(&self) -> SizeHints;

    /// Title set by the running program
    fn title(&self) -> String;

    /// Icon name set by the running program
    fn icon_name(&self) -> String;

    /// Working directory of the foreground process, if known
    fn cwd(&self) -> Option<String>;

    /// Resize the terminal grid in character cells
    fn resize(&mut self, cols: usize, rows: usize);

    /// Current grid size as `(cols, rows)`
    fn size(&self) -> (usize, usize);
}

/// Parameters for spawning a new session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSpec {
    /// Command to run instead of the user's shell
    pub command: Option<String>,
    /// Starting working directory
    pub cwd: Option<String>,
    /// Initial width in character cells
    pub cols: usize,
    /// Initial height in character cells
    pub rows: usize,
    /// Start the shell as a login shell
    pub login_shell: bool,
    /// Keep the session open after its process exits
    pub hold: bool,
}

impl SessionSpec {
    /// Launch parameters sized from the configured initial terminal size
    pub fn from_config(config: &splitterm_config::Config) -> Self {
        Self {
            command: None,
            cwd: None,
            cols: config.cols,
            rows: config.rows,
            login_shell: config.login_shell,
            hold: false,
        }
    }

    /// Builder-style working directory override
    pub fn with_cwd(mut self, cwd: Option<String>) -> Self {
        self.cwd = cwd;
        self
    }

    /// Builder-style command override
    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command;
        self
    }
}

/// Creates terminal content for new sessions
pub trait SessionFactory {
    /// Spawn the content for a new session
    fn spawn(&mut self, spec: &SessionSpec) -> Result<Box<dyn SessionContent>>;
}
