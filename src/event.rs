//! Events delivered by the binding layer.
//!
//! Native toolkit callbacks are translated into these values and fed to
//! [`WindowManager::dispatch`](crate::manager::WindowManager::dispatch).

use crate::manager::WindowId;
use crate::selector::SelectorMove;
use crate::session::SessionId;
use crate::split::Orientation;

/// Something that happened to, or was requested for, a session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Split the session's leaf; the new session runs `command` if given
    Split {
        orientation: Orientation,
        command: Option<String>,
    },
    Close,
    /// Add a tab in the current tab's directory
    NewTab,
    /// Add a tab starting in the given directory
    NewTabIn(Option<String>),
    /// Jump to the 0-based n-th tab of the leaf
    TabGo(usize),
    Focus,
    FocusNext,
    FocusPrev,
    Bell,
    TitleChanged,
    IconChanged,
    /// The session's process exited
    Exited,
    SizeHintsChanged,
    MouseDown,
    MouseIn,
    MiniviewToggle,
    MiniviewHide,
    ResizeSplit {
        orientation: Orientation,
        delta: f32,
    },
    SelectorOpen,
    SelectorMove(SelectorMove),
    SelectorConfirm,
    SelectorPick(SessionId),
    SelectorCancel,
    /// The selector's end animation finished
    SelectorDone,
}

/// Something that happened to a native window
#[derive(Debug, Clone, PartialEq)]
pub enum WindowAction {
    FocusIn,
    FocusOut,
    Resized { width: i32, height: i32 },
    PointerMoved { x: f32, y: f32 },
    CmdboxOpen,
    CmdboxClose,
    /// The user closed the native window
    Close,
}

/// Event routed by window id
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Session {
        window: WindowId,
        session: SessionId,
        action: SessionAction,
    },
    Window {
        window: WindowId,
        action: WindowAction,
    },
}

impl Event {
    pub fn session(window: WindowId, session: SessionId, action: SessionAction) -> Self {
        Event::Session {
            window,
            session,
            action,
        }
    }

    pub fn window(window: WindowId, action: WindowAction) -> Self {
        Event::Window { window, action }
    }

    /// Window the event is addressed to
    pub fn target(&self) -> WindowId {
        match self {
            Event::Session { window, .. } | Event::Window { window, .. } => *window,
        }
    }
}
