//! Core `Config` struct definition.
//!
//! Sub-modules:
//! - [`loading`]: `load` / `load_from` (YAML file I/O) and path helpers
//! - [`validation`]: semantic checks applied after parsing

mod loading;
mod validation;

use serde::{Deserialize, Serialize};

/// Layout engine configuration.
///
/// Every field carries a serde default so partial YAML files are accepted.
/// Each window works on its own clone of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Window & Display
    // ========================================================================
    /// Title used for new windows before any session reports one
    #[serde(default = "crate::defaults::window_title")]
    pub window_title: String,

    /// Initial terminal width in character cells
    #[serde(default = "crate::defaults::cols")]
    pub cols: usize,

    /// Initial terminal height in character cells
    #[serde(default = "crate::defaults::rows")]
    pub rows: usize,

    /// Whether sessions render translucent backgrounds
    #[serde(default = "crate::defaults::bool_false")]
    pub translucent: bool,

    /// Background opacity in percent (0-100), used when `translucent` is set
    #[serde(default = "crate::defaults::opacity")]
    pub opacity: u8,

    /// Width in pixels of the divider between the two children of a split
    #[serde(default = "crate::defaults::divider_width")]
    pub divider_width: f32,

    // ========================================================================
    // Focus
    // ========================================================================
    /// Focus follows the mouse pointer between panes
    #[serde(default = "crate::defaults::bool_false")]
    pub mouse_over_focus: bool,

    // ========================================================================
    // Tabs
    // ========================================================================
    /// Hide the tab bar; tab switching goes through the selector overlay instead
    #[serde(default = "crate::defaults::bool_false")]
    pub notabs: bool,

    /// Selector zoom used for tab switching (< 0.01 disables the selector path)
    #[serde(default = "crate::defaults::tab_zoom")]
    pub tab_zoom: f64,

    // ========================================================================
    // Bell
    // ========================================================================
    /// Suppress visual bell signals entirely
    #[serde(default = "crate::defaults::bool_false")]
    pub disable_visual_bell: bool,

    /// Emit the ringing animation in addition to the bell flash
    #[serde(default = "crate::defaults::bool_true")]
    pub bell_rings: bool,

    /// Mark the window urgent when a bell arrives while it is unfocused
    #[serde(default = "crate::defaults::bool_true")]
    pub urg_bell: bool,

    // ========================================================================
    // Shell
    // ========================================================================
    /// Spawn new sessions as login shells
    #[serde(default = "crate::defaults::bool_false")]
    pub login_shell: bool,

    // ========================================================================
    // Command overlay
    // ========================================================================
    /// Delay before input focus moves into the command overlay
    #[serde(default = "crate::defaults::cmdbox_focus_delay_ms")]
    pub cmdbox_focus_delay_ms: u64,

    /// Delay before a closed command overlay is torn down
    #[serde(default = "crate::defaults::cmdbox_teardown_delay_ms")]
    pub cmdbox_teardown_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: crate::defaults::window_title(),
            cols: crate::defaults::cols(),
            rows: crate::defaults::rows(),
            translucent: crate::defaults::bool_false(),
            opacity: crate::defaults::opacity(),
            divider_width: crate::defaults::divider_width(),
            mouse_over_focus: crate::defaults::bool_false(),
            notabs: crate::defaults::bool_false(),
            tab_zoom: crate::defaults::tab_zoom(),
            disable_visual_bell: crate::defaults::bool_false(),
            bell_rings: crate::defaults::bool_true(),
            urg_bell: crate::defaults::bool_true(),
            login_shell: crate::defaults::bool_false(),
            cmdbox_focus_delay_ms: crate::defaults::cmdbox_focus_delay_ms(),
            cmdbox_teardown_delay_ms: crate::defaults::cmdbox_teardown_delay_ms(),
        }
    }
}

impl Config {
    /// Whether tab switches inside one leaf should animate through the selector
    pub fn tab_switch_uses_selector(&self) -> bool {
        self.notabs && self.tab_zoom >= 0.01
    }

    /// Effective background opacity in percent
    pub fn effective_opacity(&self) -> u8 {
        if self.translucent { self.opacity } else { 100 }
    }

    /// Builder-style override of the initial terminal size
    pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }
}
