//! Default value functions for configuration.
//!
//! Each sub-module groups related free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.

mod misc;
mod window;

// ── Window & tabs ──────────────────────────────────────────────────────────
pub use window::{cols, divider_width, opacity, rows, tab_zoom, window_title};

// ── Timers & primitives ────────────────────────────────────────────────────
pub use misc::{bool_false, bool_true, cmdbox_focus_delay_ms, cmdbox_teardown_delay_ms};
