//! Command overlay timers.
//!
//! The overlay's text entry lives outside the engine. The window only tracks
//! whether the overlay is up, when input focus moves into it, and when a
//! hidden overlay gets torn down. Both timers are deadlines; re-arming one
//! replaces it, so they never stack.

use std::time::{Duration, Instant};

use super::Window;
use crate::signals::Signal;

/// Timer that fired during [`Window::poll_timers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdboxTimer {
    /// Input focus was handed to the overlay
    FocusHandoff,
    /// The hidden overlay was destroyed
    Teardown,
}

/// Command overlay state of one window
#[derive(Debug, Clone, Default)]
pub struct Cmdbox {
    /// Overlay is shown
    up: bool,
    /// Overlay widget exists (shown, or hidden awaiting teardown)
    alive: bool,
    /// Overlay holds keyboard input
    has_input: bool,
    focus_deadline: Option<Instant>,
    teardown_deadline: Option<Instant>,
}

impl Cmdbox {
    pub fn is_up(&self) -> bool {
        self.up
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn has_input(&self) -> bool {
        self.has_input
    }

    pub fn focus_deadline(&self) -> Option<Instant> {
        self.focus_deadline
    }

    pub fn teardown_deadline(&self) -> Option<Instant> {
        self.teardown_deadline
    }

    /// Show the overlay: re-arm the focus timer, cancel any teardown
    pub(crate) fn open(&mut self, now: Instant, focus_delay: Duration) {
        self.up = true;
        self.alive = true;
        self.has_input = false;
        self.focus_deadline = Some(now + focus_delay);
        self.teardown_deadline = None;
    }

    /// Hide the overlay: cancel the focus timer, re-arm the teardown timer
    pub(crate) fn close(&mut self, now: Instant, teardown_delay: Duration) {
        self.up = false;
        self.has_input = false;
        self.focus_deadline = None;
        self.teardown_deadline = Some(now + teardown_delay);
    }

    /// Fire every timer whose deadline is at or before `now`
    pub(crate) fn poll(&mut self, now: Instant) -> Vec<CmdboxTimer> {
        let mut fired = Vec::new();
        if self.focus_deadline.is_some_and(|d| d <= now) {
            self.focus_deadline = None;
            self.has_input = true;
            fired.push(CmdboxTimer::FocusHandoff);
        }
        if self.teardown_deadline.is_some_and(|d| d <= now) {
            self.teardown_deadline = None;
            self.alive = false;
            fired.push(CmdboxTimer::Teardown);
        }
        fired
    }

    /// Earliest pending deadline
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match (self.focus_deadline, self.teardown_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Drop both timers and the overlay
    pub(crate) fn cancel(&mut self) {
        *self = Self::default();
    }
}

impl Window {
    /// Show the command overlay
    pub fn cmdbox_open(&mut self, now: Instant) {
        let delay = Duration::from_millis(self.config.cmdbox_focus_delay_ms);
        self.cmdbox.open(now, delay);
        self.sink.emit_window(Signal::CmdboxShow);
        crate::debug_info!("CMDBOX", "window {} overlay shown", self.id);
    }

    /// Hide the command overlay and hand input back to the focused session
    pub fn cmdbox_close(&mut self, now: Instant) {
        let delay = Duration::from_millis(self.config.cmdbox_teardown_delay_ms);
        self.cmdbox.close(now, delay);
        self.sink.emit_window(Signal::CmdboxHide);
        crate::debug_info!("CMDBOX", "window {} overlay hidden", self.id);
    }

    pub fn cmdbox(&self) -> &Cmdbox {
        &self.cmdbox
    }

    /// Fire due timers and forward each one to the sink
    pub fn poll_timers(&mut self, now: Instant) -> Vec<CmdboxTimer> {
        let fired = self.cmdbox.poll(now);
        for &timer in &fired {
            crate::debug_log!("CMDBOX", "window {} timer fired: {:?}", self.id, timer);
            self.sink.emit_window(match timer {
                CmdboxTimer::FocusHandoff => Signal::CmdboxFocus,
                CmdboxTimer::Teardown => Signal::CmdboxTeardown,
            });
        }
        fired
    }

    /// Earliest pending timer deadline of this window
    pub fn next_deadline(&self) -> Option<Instant> {
        self.cmdbox.next_deadline()
    }
}
