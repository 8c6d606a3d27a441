//! Single-threaded tokio driver for a [`WindowManager`].
//!
//! The loop receives [`Event`]s over an unbounded channel, dispatches each
//! batch, then runs the deferred work of that turn (due timers, size jobs,
//! window reaping). While idle it sleeps until the nearest timer deadline.
//!
//! Windows hold non-`Send` collaborators, so the loop must run on the
//! thread that owns the manager (`block_on`, a current-thread runtime or a
//! `LocalSet`).

use anyhow::{Result, bail};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::error::LayoutError;
use crate::event::Event;
use crate::manager::WindowManager;

/// Event loop owning a window manager
pub struct EventLoop {
    manager: WindowManager,
    rx: mpsc::UnboundedReceiver<Event>,
    /// Stop once the last window is gone
    exit_when_empty: bool,
}

impl EventLoop {
    /// Create a loop and the sender the binding layer feeds events into
    pub fn new(manager: WindowManager) -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                manager,
                rx,
                exit_when_empty: true,
            },
            tx,
        )
    }

    /// Keep running after the last window closed, until the channel closes
    pub fn keep_running_when_empty(mut self) -> Self {
        self.exit_when_empty = false;
        self
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut WindowManager {
        &mut self.manager
    }

    /// Run until every sender is dropped, or until the last window closes.
    ///
    /// Caller errors are logged and absorbed. An inconsistent tree aborts
    /// the loop.
    pub async fn run(mut self) -> Result<WindowManager> {
        log::info!("event loop started with {} windows", self.manager.window_count());
        // Windows created before the loop still have their first size job queued
        self.turn();
        loop {
            let deadline = self.manager.next_deadline().map(Instant::from_std);
            tokio::select! {
                maybe_event = self.rx.recv() => {
                    match maybe_event {
                        Some(event) => {
                            self.handle(event)?;
                            // Drain the rest of this batch before deferred work
                            while let Ok(event) = self.rx.try_recv() {
                                self.handle(event)?;
                            }
                        }
                        None => {
                            log::info!("event channel closed, stopping event loop");
                            break;
                        }
                    }
                }
                _ = async {
                    if let Some(deadline) = deadline {
                        sleep_until(deadline).await;
                    }
                }, if deadline.is_some() => {}
            }
            self.turn();
            if self.exit_when_empty && self.manager.is_empty() {
                log::info!("last window closed, stopping event loop");
                break;
            }
        }
        Ok(self.manager)
    }

    /// Deferred work of one loop turn
    fn turn(&mut self) {
        let now = Instant::now().into_std();
        self.manager.poll_timers(now);
        let ran = self.manager.run_pending();
        if ran > 0 {
            crate::debug_log!("EVENT", "turn ran {} size jobs", ran);
        }
    }

    fn handle(&mut self, event: Event) -> Result<()> {
        let now = Instant::now().into_std();
        match self.manager.dispatch_at(event, now) {
            Ok(()) => Ok(()),
            Err(LayoutError::InconsistentTree(msg)) => {
                crate::debug_error!("EVENT", "inconsistent tree: {}", msg);
                bail!("split tree invariant violated: {}", msg)
            }
            Err(e) => {
                log::warn!("event ignored: {}", e);
                Ok(())
            }
        }
    }
}
