//! Registry of every open window.
//!
//! All window lifecycle goes through [`WindowManager::create_window`] and
//! [`WindowManager::destroy_window`]; there is no static window list. The
//! manager is also the single entry point for binding-layer events.

use std::time::Instant;

use splitterm_config::Config;

use crate::error::LayoutError;
use crate::event::{Event, SessionAction, WindowAction};
use crate::session::SessionFactory;
use crate::signals::{SignalSink, WindowBinding};
use crate::window::{CloseOutcome, Window};

/// Unique identifier of a window
pub type WindowId = u64;

/// Owns all windows, in creation order
pub struct WindowManager {
    windows: Vec<Window>,
    config: Config,
    next_window_id: WindowId,
}

impl WindowManager {
    pub fn new(config: Config) -> Self {
        Self {
            windows: Vec::new(),
            config,
            next_window_id: 1,
        }
    }

    /// Configuration handed (cloned) to new windows
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open a window with one leaf and one session
    pub fn create_window(
        &mut self,
        binding: Box<dyn WindowBinding>,
        sink: Box<dyn SignalSink>,
        factory: Box<dyn SessionFactory>,
    ) -> Result<WindowId, LayoutError> {
        let id = self.next_window_id;
        let window = Window::new(id, self.config.clone(), binding, sink, factory)?;
        self.next_window_id += 1;
        self.windows.push(window);
        Ok(id)
    }

    /// Destroy a window, cancelling its size job and timers
    pub fn destroy_window(&mut self, id: WindowId) -> Result<(), LayoutError> {
        let idx = self
            .windows
            .iter()
            .position(|w| w.id() == id)
            .ok_or(LayoutError::WindowNotFound(id))?;
        let mut window = self.windows.remove(idx);
        window.teardown();
        Ok(())
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Result<&mut Window, LayoutError> {
        self.get_mut(id).ok_or_else(|| {
            log::warn!("event for unknown window {}", id);
            LayoutError::WindowNotFound(id)
        })
    }

    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Route an event to its window
    pub fn dispatch(&mut self, event: Event) -> Result<(), LayoutError> {
        self.dispatch_at(event, Instant::now())
    }

    /// Route an event, using `now` as the clock for timer-arming actions
    pub fn dispatch_at(&mut self, event: Event, now: Instant) -> Result<(), LayoutError> {
        crate::debug_trace!("EVENT", "{:?}", event);
        match event {
            Event::Window { window, action } => {
                if action == WindowAction::Close {
                    return self.destroy_window(window);
                }
                let win = self.window_mut(window)?;
                match action {
                    WindowAction::FocusIn => win.on_window_focus_in(),
                    WindowAction::FocusOut => win.on_window_focus_out(),
                    WindowAction::Resized { width, height } => win.on_window_resized(width, height),
                    WindowAction::PointerMoved { x, y } => win.on_pointer_moved(x, y),
                    WindowAction::CmdboxOpen => win.cmdbox_open(now),
                    WindowAction::CmdboxClose => win.cmdbox_close(now),
                    WindowAction::Close => {}
                }
                Ok(())
            }
            Event::Session {
                window,
                session,
                action,
            } => {
                let win = self.window_mut(window)?;
                match action {
                    SessionAction::Split {
                        orientation,
                        command,
                    } => win.split(session, orientation, command).map(drop),
                    SessionAction::Close => win.close(session).map(|outcome| {
                        if outcome == CloseOutcome::WindowClosed {
                            log::info!("window {} marked for destruction", window);
                        }
                    }),
                    SessionAction::NewTab => win.new_tab(session).map(drop),
                    SessionAction::NewTabIn(dir) => win.new_tab_with_dir(session, dir).map(drop),
                    SessionAction::TabGo(index) => win.tab_go(session, index),
                    SessionAction::Focus => win.focus(session),
                    SessionAction::FocusNext => win.focus_next(session),
                    SessionAction::FocusPrev => win.focus_prev(session),
                    SessionAction::Bell => win.on_bell(session),
                    SessionAction::TitleChanged => win.on_title_changed(session),
                    SessionAction::IconChanged => win.on_icon_changed(session),
                    SessionAction::Exited => win.on_session_exited(session).map(drop),
                    SessionAction::SizeHintsChanged => win.on_size_hints_changed(session),
                    SessionAction::MouseDown => win.on_mouse_down(session),
                    SessionAction::MouseIn => win.on_mouse_in(session),
                    SessionAction::MiniviewToggle => win.miniview_toggle(session).map(drop),
                    SessionAction::MiniviewHide => win.miniview_hide(session),
                    SessionAction::ResizeSplit { orientation, delta } => {
                        win.resize_split(session, orientation, delta).map(drop)
                    }
                    SessionAction::SelectorOpen => win.selector_open(session),
                    SessionAction::SelectorMove(direction) => {
                        win.selector_move(session, direction).map(drop)
                    }
                    SessionAction::SelectorConfirm => win.selector_confirm(session),
                    SessionAction::SelectorPick(picked) => win.selector_pick(session, picked),
                    SessionAction::SelectorCancel => win.selector_cancel(session),
                    SessionAction::SelectorDone => win.selector_done(session),
                }
            }
        }
    }

    /// One event-loop turn of deferred work: run pending size jobs and reap
    /// windows whose last session closed. Returns the number of size jobs run.
    pub fn run_pending(&mut self) -> usize {
        let ran = self
            .windows
            .iter_mut()
            .map(Window::run_size_job)
            .filter(|&ran| ran)
            .count();

        let closing: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| w.is_closing())
            .map(|w| w.id())
            .collect();
        for id in closing {
            if let Err(e) = self.destroy_window(id) {
                log::warn!("failed to reap window {}: {}", id, e);
            }
        }
        ran
    }

    /// Fire due timers in every window
    pub fn poll_timers(&mut self, now: Instant) {
        for window in &mut self.windows {
            window.poll_timers(now);
        }
    }

    /// Earliest timer deadline over all windows
    pub fn next_deadline(&self) -> Option<Instant> {
        self.windows.iter().filter_map(Window::next_deadline).min()
    }

    /// Refresh the tab badges of every window
    pub fn update_all(&mut self) {
        for window in &mut self.windows {
            window.update_all_tabcounts();
        }
    }

    /// Push a new configuration to the manager and every window
    pub fn sync_config(&mut self, config: Config) {
        for window in &mut self.windows {
            window.set_config(config.clone());
        }
        self.config = config;
        log::info!("configuration synced to {} windows", self.windows.len());
    }
}
