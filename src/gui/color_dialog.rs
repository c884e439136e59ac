use super::DialogEvent;
use crate::color::{parse_color, to_hex};
use crate::state::ColorTarget;
use eframe::egui::{self, color_picker, Color32};

/// Picks a new background or text color, previewing every change.
#[derive(Debug, Clone)]
pub struct ColorDialog {
    target: ColorTarget,
    original: Color32,
    current: Color32,
    input: String,
    input_invalid: bool,
}

impl ColorDialog {
    pub fn new(target: ColorTarget, current: Color32) -> Self {
        Self {
            target,
            original: current,
            current,
            input: to_hex(current),
            input_invalid: false,
        }
    }

    pub fn target(&self) -> ColorTarget {
        self.target
    }

    pub fn current(&self) -> Color32 {
        self.current
    }

    pub fn set_color(&mut self, color: Color32) -> DialogEvent<Color32> {
        self.current = color;
        self.input = to_hex(color);
        self.input_invalid = false;
        DialogEvent::Preview(color)
    }

    /// Apply a typed color string; unparsable input leaves the color alone.
    pub fn set_input(&mut self, input: &str) -> DialogEvent<Color32> {
        self.input = input.to_owned();
        match parse_color(input) {
            Some(color) => {
                self.input_invalid = false;
                self.current = color;
                DialogEvent::Preview(color)
            }
            None => {
                self.input_invalid = true;
                DialogEvent::None
            }
        }
    }

    pub fn accept(&self) -> DialogEvent<Color32> {
        DialogEvent::Accepted(self.current)
    }

    pub fn cancel(&self) -> DialogEvent<Color32> {
        DialogEvent::Cancelled(self.original)
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> DialogEvent<Color32> {
        let mut event = DialogEvent::None;
        let mut open = true;
        egui::Window::new(self.target.dialog_title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                let mut color = self.current;
                if color_picker::color_picker_color32(ui, &mut color, color_picker::Alpha::Opaque) {
                    event = self.set_color(color);
                }
                ui.horizontal(|ui| {
                    ui.label("Color");
                    let mut input = self.input.clone();
                    if ui.text_edit_singleline(&mut input).changed() {
                        event = self.set_input(&input);
                    }
                });
                if self.input_invalid {
                    let error = ui.visuals().error_fg_color;
                    ui.colored_label(error, "Unknown color");
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        event = self.accept();
                    }
                    if ui.button("Cancel").clicked() {
                        event = self.cancel();
                    }
                });
            });
        if !open && !event.is_final() {
            event = self.cancel();
        }
        event
    }
}
