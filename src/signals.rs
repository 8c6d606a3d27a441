//! Abstract signals emitted to the rendering layer, and the window-system
//! binding the engine drives.
//!
//! The engine never draws anything. Visual state changes are reported as
//! [`Signal`]s addressed to a session (or to the window as a whole), and
//! native window operations go through [`WindowBinding`].

use crate::session::SessionId;

/// One tab shown in a tab bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub session: SessionId,
    pub title: String,
}

/// Abstract visual signal for the rendering/theme layer
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Session gained keyboard focus
    FocusIn,
    /// Session lost keyboard focus
    FocusOut,
    /// Visual bell
    Bell,
    /// Audible bell
    BellRing,
    /// Tab count badge shown, e.g. label "2/3"; `missed` is empty or the
    /// number of members with an unseen bell
    TabCountOn { label: String, missed: String },
    /// Tab count badge hidden (group of one)
    TabCountOff,
    /// At least one member of the group has a missed bell
    TabMissedOn,
    /// No member of the group has a missed bell
    TabMissedOff,
    /// Tab bar shown. `left`/`right` are the tab's span as fractions of the
    /// bar width. `before`/`after` list the other tabs of the group and are
    /// only filled for the group's current session.
    TabBarOn {
        left: f64,
        right: f64,
        title: String,
        before: Vec<TabEntry>,
        after: Vec<TabEntry>,
    },
    /// Tab bar hidden
    TabBarOff,
    /// Title shown for the session's tab changed
    TabTitle(String),
    /// Miniview shown
    MiniviewOn,
    /// Miniview hidden
    MiniviewOff,
    /// Selector overlay shown over the session's leaf; `opacity` is the
    /// background opacity in percent
    SelectorOn {
        zoom: f64,
        opacity: u8,
        entries: Vec<crate::selector::SelectorEntry>,
    },
    /// Selector overlay is animating out
    SelectorEnding,
    /// Selector overlay removed
    SelectorOff,
    /// Command overlay shown
    CmdboxShow,
    /// Command overlay hidden
    CmdboxHide,
    /// Keyboard input moves into the command overlay
    CmdboxFocus,
    /// Hidden command overlay is destroyed
    CmdboxTeardown,
}

/// Receiver of render signals
pub trait SignalSink {
    /// Deliver a signal targeting one session
    fn emit(&mut self, session: SessionId, signal: Signal);

    /// Deliver a signal targeting the window chrome itself
    fn emit_window(&mut self, signal: Signal) {
        log::trace!("window signal dropped: {:?}", signal);
    }
}

/// Size constraints pushed to the native window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeConstraints {
    pub min_w: i32,
    pub min_h: i32,
    pub step_x: i32,
    pub step_y: i32,
}

/// Native window operations driven by the engine
pub trait WindowBinding {
    /// Resize the native window
    fn resize_window(&mut self, width: i32, height: i32);

    /// Set minimum size and resize step
    fn set_size_constraints(&mut self, constraints: SizeConstraints);

    fn set_title(&mut self, title: &str);

    fn set_icon(&mut self, name: &str);

    /// Request or clear user attention
    fn set_urgent(&mut self, urgent: bool);

    /// Tear down the native window
    fn destroy(&mut self);
}
