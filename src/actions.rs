use crate::window::WindowState;
use eframe::egui::Key;

/// Everything a user can ask the surface to do, from the keyboard, the
/// context menu or the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleFullscreen,
    ToggleCursor,
    ToggleBorderless,
    ChangeColor,
    ChangeTextColor,
    ChangeText,
    Close,
}

impl Action {
    /// Entries of the context menu, in display order. `None` is a separator.
    pub const MENU: &'static [Option<Action>] = &[
        Some(Action::ToggleFullscreen),
        Some(Action::ToggleCursor),
        Some(Action::ToggleBorderless),
        Some(Action::ChangeColor),
        Some(Action::ChangeTextColor),
        Some(Action::ChangeText),
        None,
        Some(Action::Close),
    ];

    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape | Key::Q => Some(Action::Close),
            Key::F => Some(Action::ToggleFullscreen),
            Key::M => Some(Action::ToggleCursor),
            Key::B => Some(Action::ToggleBorderless),
            Key::C => Some(Action::ChangeColor),
            Key::T => Some(Action::ChangeTextColor),
            _ => None,
        }
    }

    /// Menu label; toggles describe what selecting them will do.
    pub fn label(self, window: &WindowState) -> &'static str {
        match self {
            Action::ToggleFullscreen if window.is_fullscreen() => "Exit full screen",
            Action::ToggleFullscreen => "Enter full screen",
            Action::ToggleCursor if window.is_cursor_visible() => "Hide mouse cursor",
            Action::ToggleCursor => "Show mouse cursor",
            Action::ToggleBorderless if window.is_borderless() => "Show window border",
            Action::ToggleBorderless => "Hide window border",
            Action::ChangeColor => "Change Color...",
            Action::ChangeTextColor => "Change Text Color...",
            Action::ChangeText => "Change Text...",
            Action::Close => "Exit",
        }
    }
}
