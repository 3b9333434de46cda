//! Platform-specific key bindings

/// Submit shortcut display for help text.
/// Ctrl+S works on all platforms.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
