use super::DialogEvent;
use eframe::egui;

/// Multi-line editor for the displayed text, previewing every edit.
#[derive(Debug, Clone)]
pub struct TextDialog {
    original: String,
    text: String,
}

impl TextDialog {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            original: text.clone(),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> DialogEvent<String> {
        self.text = text.into();
        DialogEvent::Preview(self.text.clone())
    }

    pub fn accept(&self) -> DialogEvent<String> {
        DialogEvent::Accepted(self.text.clone())
    }

    pub fn cancel(&self) -> DialogEvent<String> {
        DialogEvent::Cancelled(self.original.clone())
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> DialogEvent<String> {
        let mut event = DialogEvent::None;
        let mut open = true;
        egui::Window::new("Change Text")
            .collapsible(false)
            .default_size([600.0, 200.0])
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                let edit = egui::TextEdit::multiline(&mut self.text)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY);
                let response = ui.add(edit);
                if response.changed() {
                    event = DialogEvent::Preview(self.text.clone());
                }
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
