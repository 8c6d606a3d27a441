//! Default values that do not belong to a single focused subsystem.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

// ── Command overlay ────────────────────────────────────────────────────────

pub fn cmdbox_focus_delay_ms() -> u64 {
    200
}

pub fn cmdbox_teardown_delay_ms() -> u64 {
    5000
}
