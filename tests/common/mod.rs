//! Shared integration test helpers for splitterm.
//!
//! Provides mock terminal content, a mock session factory, and a recording
//! window binding and signal sink that all write into one shared [`Log`].
//!
//! ```ignore
//! mod common;
//! use common::Harness;
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per test file.

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, bail};
use parking_lot::Mutex;
use splitterm::config::Config;
use splitterm::{
    SessionContent, SessionFactory, SessionId, SessionSpec, Signal, SignalSink, SizeConstraints,
    SizeHints, Window, WindowBinding,
};

/// Hints reported by mock content unless a test overrides them
pub fn default_hints() -> SizeHints {
    SizeHints::new(100, 50, 10, 20, 800, 480)
}

/// Mutable state behind one mock terminal
#[derive(Debug, Clone)]
pub struct ContentState {
    pub hints: SizeHints,
    pub title: String,
    pub icon: String,
    pub cwd: Option<String>,
    pub size: (usize, usize),
    pub resizes: Vec<(usize, usize)>,
}

pub type SharedContent = Arc<Mutex<ContentState>>;

pub struct MockContent(SharedContent);

impl SessionContent for MockContent {
    fn size_hints(&self) -> SizeHints {
        self.0.lock().hints
    }

    fn title(&self) -> String {
        self.0.lock().title.clone()
    }

    fn icon_name(&self) -> String {
        self.0.lock().icon.clone()
    }

    fn cwd(&self) -> Option<String> {
        self.0.lock().cwd.clone()
    }

    fn resize(&mut self, cols: usize, rows: usize) {
        let mut state = self.0.lock();
        state.size = (cols, rows);
        state.resizes.push((cols, rows));
    }

    fn size(&self) -> (usize, usize) {
        self.0.lock().size
    }
}

/// Everything the factory spawned, in spawn order
#[derive(Default)]
pub struct Spawned {
    pub specs: Vec<SessionSpec>,
    pub contents: Vec<SharedContent>,
    /// Hints given to the next spawned content
    pub next_hints: Option<SizeHints>,
    /// Make the next spawn fail
    pub fail_next: bool,
}

pub type SharedSpawned = Arc<Mutex<Spawned>>;

pub struct MockFactory(SharedSpawned);

impl SessionFactory for MockFactory {
    fn spawn(&mut self, spec: &SessionSpec) -> Result<Box<dyn SessionContent>> {
        let mut spawned = self.0.lock();
        if std::mem::take(&mut spawned.fail_next) {
            bail!("pty allocation failed");
        }
        let n = spawned.contents.len() + 1;
        let state = Arc::new(Mutex::new(ContentState {
            hints: spawned.next_hints.unwrap_or_else(default_hints),
            title: format!("term {}", n),
            icon: format!("icon {}", n),
            cwd: spec.cwd.clone().or_else(|| Some(format!("/home/user/{}", n))),
            size: (spec.cols, spec.rows),
            resizes: Vec::new(),
        }));
        spawned.specs.push(spec.clone());
        spawned.contents.push(state.clone());
        Ok(Box::new(MockContent(state)))
    }
}

/// Call made on the window binding
#[derive(Debug, Clone, PartialEq)]
pub enum BindingCall {
    Resize(i32, i32),
    Constraints(SizeConstraints),
    Title(String),
    Icon(String),
    Urgent(bool),
    Destroy,
}

/// Everything the engine emitted
#[derive(Debug, Default)]
pub struct Log {
    pub signals: Vec<(SessionId, Signal)>,
    pub window_signals: Vec<Signal>,
    pub binding: Vec<BindingCall>,
}

impl Log {
    pub fn signals_for(&self, session: SessionId) -> Vec<Signal> {
        self.signals
            .iter()
            .filter(|(s, _)| *s == session)
            .map(|(_, signal)| signal.clone())
            .collect()
    }

    pub fn has(&self, session: SessionId, signal: &Signal) -> bool {
        self.signals.iter().any(|(s, sig)| *s == session && sig == signal)
    }

    pub fn count(&self, session: SessionId, signal: &Signal) -> usize {
        self.signals
            .iter()
            .filter(|(s, sig)| *s == session && sig == signal)
            .count()
    }

    pub fn resizes(&self) -> Vec<(i32, i32)> {
        self.binding
            .iter()
            .filter_map(|call| match call {
                BindingCall::Resize(w, h) => Some((*w, *h)),
                _ => None,
            })
            .collect()
    }

    pub fn constraints(&self) -> Vec<SizeConstraints> {
        self.binding
            .iter()
            .filter_map(|call| match call {
                BindingCall::Constraints(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn last_title(&self) -> Option<String> {
        self.binding.iter().rev().find_map(|call| match call {
            BindingCall::Title(t) => Some(t.clone()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.signals.clear();
        self.window_signals.clear();
        self.binding.clear();
    }
}

pub type SharedLog = Arc<Mutex<Log>>;

pub struct RecordingSink(SharedLog);

impl SignalSink for RecordingSink {
    fn emit(&mut self, session: SessionId, signal: Signal) {
        self.0.lock().signals.push((session, signal));
    }

    fn emit_window(&mut self, signal: Signal) {
        self.0.lock().window_signals.push(signal);
    }
}

pub struct RecordingBinding(SharedLog);

impl WindowBinding for RecordingBinding {
    fn resize_window(&mut self, width: i32, height: i32) {
        self.0.lock().binding.push(BindingCall::Resize(width, height));
    }

    fn set_size_constraints(&mut self, constraints: SizeConstraints) {
        self.0.lock().binding.push(BindingCall::Constraints(constraints));
    }

    fn set_title(&mut self, title: &str) {
        self.0.lock().binding.push(BindingCall::Title(title.to_string()));
    }

    fn set_icon(&mut self, name: &str) {
        self.0.lock().binding.push(BindingCall::Icon(name.to_string()));
    }

    fn set_urgent(&mut self, urgent: bool) {
        self.0.lock().binding.push(BindingCall::Urgent(urgent));
    }

    fn destroy(&mut self) {
        self.0.lock().binding.push(BindingCall::Destroy);
    }
}

/// Boxed collaborators for one window plus handles to inspect them
pub struct Mocks {
    pub binding: Box<dyn WindowBinding>,
    pub sink: Box<dyn SignalSink>,
    pub factory: Box<dyn SessionFactory>,
    pub log: SharedLog,
    pub spawned: SharedSpawned,
}

pub fn mocks() -> Mocks {
    let log = SharedLog::default();
    let spawned = SharedSpawned::default();
    Mocks {
        binding: Box::new(RecordingBinding(log.clone())),
        sink: Box::new(RecordingSink(log.clone())),
        factory: Box::new(MockFactory(spawned.clone())),
        log,
        spawned,
    }
}

/// A window wired to recording mocks
pub struct Harness {
    pub window: Window,
    pub log: SharedLog,
    pub spawned: SharedSpawned,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let m = mocks();
        let window = Window::new(1, config, m.binding, m.sink, m.factory)
            .expect("first session spawns");
        Self {
            window,
            log: m.log,
            spawned: m.spawned,
        }
    }

    /// Content of session `id` (sessions are numbered in spawn order from 1)
    pub fn content(&self, id: SessionId) -> SharedContent {
        self.spawned.lock().contents[(id - 1) as usize].clone()
    }

    /// Hints for the next spawned session
    pub fn set_next_hints(&self, hints: SizeHints) {
        self.spawned.lock().next_hints = Some(hints);
    }

    pub fn signals(&self, session: SessionId) -> Vec<Signal> {
        self.log.lock().signals_for(session)
    }

    pub fn clear_log(&self) {
        self.log.lock().clear();
    }

    /// Ids of `window`'s focused sessions
    pub fn focused(&self) -> Vec<SessionId> {
        self.window
            .sessions()
            .filter(|s| s.is_focused())
            .map(|s| s.id())
            .collect()
    }

    /// Members of the leaf owning `session`, in order
    pub fn group_of(&self, session: SessionId) -> Vec<SessionId> {
        let tree = self.window.tree();
        tree.find(session)
            .and_then(|leaf| tree.group(leaf))
            .map(|g| g.iter().collect())
            .unwrap_or_default()
    }

    pub fn assert_invariants(&self) {
        self.window.check_invariants().expect("window invariants hold");
        assert!(self.focused().len() <= 1, "more than one focused session");
    }
}
