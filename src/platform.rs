//! Platform-specific key hints

/// Submit shortcut display for form help text.
/// Ctrl+S on every platform; Cmd is swallowed by most macOS terminals.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Compact form of [`SUBMIT_SHORTCUT`] for the status bar
pub const SUBMIT_HINT: &str = "^S:send";
