//! Default values for window, pane and tab settings.

pub fn cols() -> usize {
    80
}

pub fn rows() -> usize {
    24
}

pub fn window_title() -> String {
    "splitterm".to_string()
}

pub fn opacity() -> u8 {
    100 // Fully opaque by default
}

pub fn divider_width() -> f32 {
    1.0 // 1 pixel divider between split children
}

pub fn tab_zoom() -> f64 {
    0.5 // Selector animation zoom; values below 0.01 disable the selector for tab switching
}
