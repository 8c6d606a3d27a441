//! Deferred size negotiation.
//!
//! Size-hint changes only schedule a job. The job runs on a later event-loop
//! turn (`WindowManager::run_pending`), so a burst of changes costs a single
//! walk over the latest tree.

use super::{SizeJob, Window};
use crate::error::LayoutError;
use crate::session::SessionId;
use crate::signals::SizeConstraints;
use crate::sizing::{self, SizeInfo};

impl Window {
    /// The session's content reported new size hints
    pub fn on_size_hints_changed(&mut self, session: SessionId) -> Result<(), LayoutError> {
        self.require(session)?;
        if let Some(s) = self.session_mut(session) {
            let hints = s.refresh_hints();
            crate::debug_trace!("SIZE", "session {} hints {:?}", session, hints);
        }
        self.schedule_size_job();
        Ok(())
    }

    /// Schedule a size recompute unless one is already pending
    pub fn schedule_size_job(&mut self) {
        if let Some(job) = self.size_job.as_mut() {
            job.coalesced += 1;
            crate::debug_trace!(
                "SIZE",
                "window {}: size job already pending ({} coalesced)",
                self.id,
                job.coalesced
            );
        } else {
            self.size_job = Some(SizeJob { coalesced: 0 });
        }
    }

    pub fn has_pending_size_job(&self) -> bool {
        self.size_job.is_some()
    }

    /// Run the pending size job, if any. Returns whether one ran.
    pub fn run_size_job(&mut self) -> bool {
        if self.size_job.take().is_none() {
            return false;
        }
        self.recompute_size();
        true
    }

    /// Cancel the pending job and recompute immediately
    pub fn sizing_handle(&mut self) -> SizeInfo {
        self.size_job = None;
        self.recompute_size()
    }

    fn recompute_size(&mut self) -> SizeInfo {
        let root = self.tree.root();
        let sessions = &mut self.sessions;
        let info = sizing::walk(&self.tree, root, &mut |id| {
            match sessions.iter_mut().find(|s| s.id == id) {
                Some(s) => {
                    let pending = !s.size_done;
                    s.size_done = true;
                    SizeInfo::from_hints(s.hints, pending)
                }
                None => SizeInfo::default(),
            }
        });

        self.binding.set_size_constraints(SizeConstraints {
            min_w: info.min_w,
            min_h: info.min_h,
            step_x: info.step_x,
            step_y: info.step_y,
        });
        crate::debug_log!(
            "SIZE",
            "window {}: min {}x{} step {}x{}",
            self.id,
            info.min_w,
            info.min_h,
            info.step_x,
            info.step_y
        );
        if info.pending {
            crate::debug_info!(
                "SIZE",
                "window {}: resizing to requested {}x{}",
                self.id,
                info.req_w,
                info.req_h
            );
            self.binding.resize_window(info.req_w, info.req_h);
        }
        info
    }
}
