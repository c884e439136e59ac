use crate::font::FontSpec;
use crate::geometry::Geometry;
use crate::window::WindowState;
use eframe::egui::Color32;

/// Everything the surface paints, plus the window it paints into.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub background: Color32,
    pub foreground: Color32,
    pub font: FontSpec,
    pub text: Option<String>,
    pub window: WindowState,
    /// Last known outer position and inner size of the window.
    pub geometry: Option<Geometry>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            foreground: Color32::WHITE,
            font: FontSpec::default(),
            text: None,
            window: WindowState::default(),
            geometry: None,
        }
    }
}

impl DisplayState {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Text worth painting; empty text has no size to fit.
    pub fn visible_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    pub fn color(&self, target: ColorTarget) -> Color32 {
        match target {
            ColorTarget::Background => self.background,
            ColorTarget::Foreground => self.foreground,
        }
    }

    pub fn set_color(&mut self, target: ColorTarget, color: Color32) {
        match target {
            ColorTarget::Background => self.background = color,
            ColorTarget::Foreground => self.foreground = color,
        }
    }
}

/// Which of the two surface colors a dialog edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Background,
    Foreground,
}

impl ColorTarget {
    pub fn dialog_title(self) -> &'static str {
        match self {
            ColorTarget::Background => "Change Color",
            ColorTarget::Foreground => "Change Text Color",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_not_visible() {
        let mut state = DisplayState::default();
        assert_eq!(state.visible_text(), None);
        state.set_text("");
        assert_eq!(state.visible_text(), None);
        state.set_text("hi");
        assert_eq!(state.visible_text(), Some("hi"));
    }

    #[test]
    fn colors_by_target() {
        let mut state = DisplayState::default();
        state.set_color(ColorTarget::Foreground, Color32::RED);
        assert_eq!(state.color(ColorTarget::Foreground), Color32::RED);
        assert_eq!(state.color(ColorTarget::Background), Color32::BLACK);
    }
}
