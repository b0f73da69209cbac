//! Platform-specific key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Ctrl+Enter display for help text
/// - macOS: "Ctrl+Return"
/// - Linux/Windows: "Ctrl+Enter"
#[cfg(target_os = "macos")]
pub const CTRL_ENTER_SHORTCUT: &str = "Ctrl+Return";

#[cfg(not(target_os = "macos"))]
pub const CTRL_ENTER_SHORTCUT: &str = "Ctrl+Enter";

/// Whether `key` is Ctrl+Enter.
///
/// Most terminals without the kitty keyboard protocol deliver Ctrl+Enter
/// as Ctrl+J (line feed), so both are accepted.
pub fn is_ctrl_enter(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Enter | KeyCode::Char('j'))
}

/// Whether `key` is the form submit shortcut
pub fn is_submit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s')
}
