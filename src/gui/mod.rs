mod color_dialog;
mod text_dialog;

pub use color_dialog::ColorDialog;
pub use text_dialog::TextDialog;

use crate::actions::Action;
use crate::fit::fit_scale;
use crate::font::{FontSpec, BASE_FONT_SIZE};
use crate::generator::TextGenerator;
use crate::geometry::Geometry;
use crate::state::{ColorTarget, DisplayState};
use crate::window::ViewportCtx;
use eframe::egui;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const APP_TITLE: &str = "Flashlight";

/// Upper bound on relayouts when the scaled text still overshoots.
const MAX_SHRINK_STEPS: usize = 8;

/// What a dialog reports back after a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent<T> {
    None,
    /// The value changed while the dialog stays open.
    Preview(T),
    Accepted(T),
    /// Closed without accepting; carries the value to restore.
    Cancelled(T),
}

impl<T> DialogEvent<T> {
    pub fn is_final(&self) -> bool {
        matches!(self, DialogEvent::Accepted(_) | DialogEvent::Cancelled(_))
    }
}

#[derive(Debug, Clone)]
enum Dialog {
    Color(ColorDialog),
    Text(TextDialog),
}

/// Viewport for the surface window as configured at startup.
pub fn viewport(state: &DisplayState) -> egui::ViewportBuilder {
    let mut builder = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_min_inner_size([64.0, 48.0])
        .with_fullscreen(state.window.is_fullscreen())
        .with_decorations(!state.window.is_borderless());
    if let Some(g) = state.geometry {
        builder = builder.with_inner_size(g.size()).with_position(g.position());
    }
    builder
}

/// The single screen-filling window.
pub struct FlashlightApp {
    pub state: DisplayState,
    generator: Option<TextGenerator>,
    dialog: Option<Dialog>,
    first_frame: bool,
    menu_open: bool,
}

impl FlashlightApp {
    /// Create the surface, running the text command once if there is one.
    pub fn new(state: DisplayState, generator: Option<TextGenerator>) -> Self {
        let mut app = Self {
            state,
            generator,
            dialog: None,
            first_frame: true,
            menu_open: false,
        };
        if let Some(generator) = app.generator.as_mut() {
            let text = generator.start(Instant::now());
            app.state.set_text(text);
        }
        app
    }

    pub fn generator(&self) -> Option<&TextGenerator> {
        self.generator.as_ref()
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Refresh command output when due. Returns how long until the next
    /// refresh.
    pub fn refresh(&mut self, now: Instant) -> Option<Duration> {
        let generator = self.generator.as_mut()?;
        if let Some(text) = generator.poll(now) {
            tracing::debug!(len = text.len(), "text refreshed from command");
            self.state.set_text(text);
        }
        generator.time_until_next(now)
    }

    pub fn perform(&mut self, ctx: &impl ViewportCtx, action: Action) {
        tracing::debug!(?action, "perform");
        match action {
            Action::ToggleFullscreen => self.state.window.toggle_fullscreen(ctx),
            Action::ToggleCursor => self.state.window.toggle_cursor(ctx),
            Action::ToggleBorderless => self.state.window.toggle_borderless(ctx),
            Action::ChangeColor => self.open_color_dialog(ColorTarget::Background),
            Action::ChangeTextColor => self.open_color_dialog(ColorTarget::Foreground),
            Action::ChangeText => {
                let text = self.state.text.clone().unwrap_or_default();
                self.open_dialog(Dialog::Text(TextDialog::new(text)));
            }
            Action::Close => {
                if let Some(generator) = self.generator.as_mut() {
                    generator.stop();
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
        ctx.request_repaint();
    }

    /// Dispatch a key press. Keys belong to the dialog while one is open.
    pub fn handle_key(&mut self, ctx: &impl ViewportCtx, key: egui::Key) -> bool {
        if self.dialog_open() {
            return false;
        }
        match Action::from_key(key) {
            Some(action) => {
                self.perform(ctx, action);
                true
            }
            None => false,
        }
    }

    pub fn apply_color_event(
        &mut self,
        target: ColorTarget,
        event: &DialogEvent<egui::Color32>,
    ) {
        apply_color(&mut self.state, target, event);
    }

    pub fn apply_text_event(&mut self, event: &DialogEvent<String>) {
        apply_text(&mut self.state, event);
    }

    /// Close the open dialog as if Cancel was pressed.
    pub fn cancel_dialog(&mut self) {
        match self.dialog.take() {
            Some(Dialog::Color(dlg)) => self.apply_color_event(dlg.target(), &dlg.cancel()),
            Some(Dialog::Text(dlg)) => self.apply_text_event(&dlg.cancel()),
            None => {}
        }
    }

    /// Run one frame of the surface and any open dialog.
    pub fn show(&mut self, ctx: &egui::Context) {
        if self.first_frame {
            self.first_frame = false;
            if !self.state.window.is_cursor_visible() {
                ctx.send_viewport_cmd(egui::ViewportCommand::CursorVisible(false));
            }
        }

        self.track_geometry(ctx);
        if let Some(wait) = self.refresh(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
        self.handle_keys(ctx);

        let frame = egui::Frame::none().fill(self.state.background);
        let chosen = egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| self.surface_ui(ui))
            .inner;
        if let Some(action) = chosen {
            self.perform(ctx, action);
        }

        self.show_dialog(ctx);

        if !self.state.window.is_cursor_visible() && !self.dialog_open() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }
    }

    fn open_color_dialog(&mut self, target: ColorTarget) {
        let current = self.state.color(target);
        self.open_dialog(Dialog::Color(ColorDialog::new(target, current)));
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        self.cancel_dialog();
        self.dialog = Some(dialog);
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Self { state, dialog, .. } = self;
        let done = match dialog {
            Some(Dialog::Color(dlg)) => {
                let event = dlg.ui(ctx);
                apply_color(state, dlg.target(), &event);
                event.is_final()
            }
            Some(Dialog::Text(dlg)) => {
                let event = dlg.ui(ctx);
                apply_text(state, &event);
                event.is_final()
            }
            None => false,
        };
        if done {
            *dialog = None;
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Escape on an open context menu only dismisses the menu.
        if self.dialog_open() || self.menu_open || ctx.wants_keyboard_input() {
            return;
        }
        let keys: Vec<egui::Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } if !modifiers.ctrl && !modifiers.alt && !modifiers.command => Some(*key),
                    _ => None,
                })
                .collect()
        });
        for key in keys {
            self.handle_key(ctx, key);
        }
    }

    fn track_geometry(&mut self, ctx: &egui::Context) {
        if self.state.window.is_fullscreen() {
            return;
        }
        let (inner, outer) = ctx.input(|i| (i.viewport().inner_rect, i.viewport().outer_rect));
        if let (Some(inner), Some(outer)) = (inner, outer) {
            self.state.geometry = Some(Geometry {
                width: inner.width().max(0.0) as u32,
                height: inner.height().max(0.0) as u32,
                x: outer.min.x.max(0.0) as u32,
                y: outer.min.y.max(0.0) as u32,
            });
        }
    }

    fn surface_ui(&mut self, ui: &mut egui::Ui) -> Option<Action> {
        let rect = ui.max_rect();
        let response = ui.interact(
            rect,
            egui::Id::new("flashlight_surface"),
            egui::Sense::click_and_drag(),
        );

        if let Some(text) = self.state.visible_text() {
            paint_text(ui.painter(), rect, text, &self.state.font, self.state.foreground);
        }

        let mut chosen = None;
        if response.double_clicked() {
            chosen = Some(Action::ToggleFullscreen);
        } else if response.drag_started_by(egui::PointerButton::Primary)
            && !self.state.window.is_fullscreen()
        {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }

        let window = &self.state.window;
        let mut menu_open = false;
        let _ = response.context_menu(|ui| {
            menu_open = true;
            for entry in Action::MENU {
                match entry {
                    Some(action) => {
                        if ui.button(action.label(window)).clicked() {
                            chosen = Some(*action);
                            ui.close_menu();
                        }
                    }
                    None => {
                        ui.separator();
                    }
                }
            }
        });
        self.menu_open = menu_open;
        chosen
    }
}

impl eframe::App for FlashlightApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::from(self.state.background).to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

fn apply_color(
    state: &mut DisplayState,
    target: ColorTarget,
    event: &DialogEvent<egui::Color32>,
) {
    match event {
        DialogEvent::None => {}
        DialogEvent::Preview(c) | DialogEvent::Accepted(c) | DialogEvent::Cancelled(c) => {
            state.set_color(target, *c);
        }
    }
}

fn apply_text(state: &mut DisplayState, event: &DialogEvent<String>) {
    match event {
        DialogEvent::None => {}
        DialogEvent::Preview(t) | DialogEvent::Accepted(t) | DialogEvent::Cancelled(t) => {
            state.set_text(t.clone());
        }
    }
}

fn layout(
    painter: &egui::Painter,
    text: &str,
    font: &FontSpec,
    size: f32,
    color: egui::Color32,
) -> Arc<egui::Galley> {
    let mut job =
        egui::text::LayoutJob::simple(text.to_owned(), font.font_id(size), color, f32::INFINITY);
    job.halign = egui::Align::Center;
    painter.ctx().fonts(|f| f.layout_job(job))
}

/// Paint `text` as large as fits inside `rect`, centered, each line
/// centered horizontally.
pub fn paint_text(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    font: &FontSpec,
    color: egui::Color32,
) {
    let natural = layout(painter, text, font, BASE_FONT_SIZE, color);
    let Some(scale) = fit_scale(natural.size(), rect.size()) else {
        return;
    };

    // Fonts are rasterized at whole physical pixel sizes, so round down.
    let px = 1.0 / painter.ctx().pixels_per_point();
    let snap = |size: f32| ((size / px).floor() * px).max(px);

    let mut size = snap(BASE_FONT_SIZE * scale);
    let mut galley = layout(painter, text, font, size, color);
    for _ in 0..MAX_SHRINK_STEPS {
        let overshoot = (galley.size().x / rect.width()).max(galley.size().y / rect.height());
        if overshoot <= 1.0 || size <= px {
            break;
        }
        size = snap((size / overshoot).min(size - px));
        galley = layout(painter, text, font, size, color);
    }

    let placed = egui::Align2::CENTER_CENTER.align_size_within_rect(galley.size(), rect);
    let pos = placed.min - galley.rect.min.to_vec2();
    painter.galley(pos, galley, color);
}
