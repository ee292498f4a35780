//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for closing the creation dialog
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const CLOSE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const CLOSE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Close dialog shortcut display
/// - macOS: "Cmd+W"
/// - Linux/Windows: "Ctrl+W"
#[cfg(target_os = "macos")]
pub const CLOSE_SHORTCUT: &str = "Cmd+W";

#[cfg(not(target_os = "macos"))]
pub const CLOSE_SHORTCUT: &str = "Ctrl+W";
