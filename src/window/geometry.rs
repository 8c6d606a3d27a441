//! Top-down geometry: pane bounds, split ratios and per-session grid sizes.

use super::Window;
use crate::error::LayoutError;
use crate::session::SessionId;
use crate::split::{DividerRect, Orientation, PaneBounds};

impl Window {
    /// The native window was resized to `width` x `height` pixels
    pub fn on_window_resized(&mut self, width: i32, height: i32) {
        self.size = Some((width.max(1), height.max(1)));
        self.relayout();
    }

    /// Recompute bounds from the last known window size and resize every
    /// session to fit its leaf
    pub(super) fn relayout(&mut self) {
        let Some((width, height)) = self.size else {
            return;
        };
        let divider_width = self.config.divider_width;
        self.tree.calculate_bounds(
            PaneBounds::new(0.0, 0.0, width as f32, height as f32),
            divider_width,
        );

        for leaf in self.tree.flatten() {
            let (Some(node), Some(group)) = (self.tree.node(leaf), self.tree.group(leaf)) else {
                continue;
            };
            let bounds = node.bounds;
            for id in group.iter() {
                let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) else {
                    continue;
                };
                let grid = bounds.grid_size(session.hints.step_x as f32, session.hints.step_y as f32);
                if session.content.size() != grid {
                    crate::debug_log!(
                        "LAYOUT",
                        "session {} -> {}x{} cells",
                        id,
                        grid.0,
                        grid.1
                    );
                    session.content.resize(grid.0, grid.1);
                }
            }
        }
    }

    /// Move the divider of the nearest split enclosing `session` along
    /// `orientation`. Positive `delta` grows the first child.
    pub fn resize_split(
        &mut self,
        session: SessionId,
        orientation: Orientation,
        delta: f32,
    ) -> Result<f32, LayoutError> {
        let ratio = self.tree.adjust_ratio(session, orientation, delta)?;
        self.relayout();
        Ok(ratio)
    }

    /// Session shown at window coordinates `(x, y)`, once a size is known
    pub fn session_at(&self, x: f32, y: f32) -> Option<SessionId> {
        self.size?;
        let leaf = self.tree.leaf_at(x, y)?;
        self.tree.group(leaf)?.current()
    }

    /// Divider rectangles of the current layout
    pub fn dividers(&self) -> Vec<DividerRect> {
        if self.size.is_none() {
            return Vec::new();
        }
        self.tree.collect_dividers(self.config.divider_width)
    }
}
