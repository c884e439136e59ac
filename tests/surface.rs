use eframe::egui::{self, epaint, pos2, vec2, Color32, Key, Pos2, Rect, ViewportCommand};
use flashlight::actions::Action;
use flashlight::generator::TextGenerator;
use flashlight::gui::{self, DialogEvent, FlashlightApp};
use flashlight::geometry::Geometry;
use flashlight::state::{ColorTarget, DisplayState};
use flashlight::window::WindowState;
use std::time::{Duration, Instant};

use mock_ctx::MockCtx;

/// Drives whole frames of an app through a headless egui context.
struct Harness {
    ctx: egui::Context,
    time: f64,
    commands: Vec<ViewportCommand>,
    shapes: Vec<epaint::ClippedShape>,
}

impl Harness {
    const SCREEN: Rect = Rect {
        min: Pos2::ZERO,
        max: Pos2 { x: 800.0, y: 600.0 },
    };

    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            time: 0.0,
            commands: Vec::new(),
            shapes: Vec::new(),
        }
    }

    fn frame(&mut self, app: &mut FlashlightApp, events: Vec<egui::Event>) {
        self.time += 0.05;
        let input = egui::RawInput {
            screen_rect: Some(Self::SCREEN),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let output = self.ctx.run(input, |ctx| app.show(ctx));
        if let Some(viewport) = output.viewport_output.get(&egui::ViewportId::ROOT) {
            self.commands.extend(viewport.commands.iter().cloned());
        }
        self.shapes = output.shapes;
    }

    fn hover(&mut self, app: &mut FlashlightApp, pos: Pos2) {
        self.frame(app, vec![egui::Event::PointerMoved(pos)]);
    }

    fn button(&mut self, app: &mut FlashlightApp, pos: Pos2, button: egui::PointerButton) {
        for pressed in [true, false] {
            let event = egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers: egui::Modifiers::NONE,
            };
            self.frame(app, vec![event]);
        }
    }

    fn key(&mut self, app: &mut FlashlightApp, key: Key, modifiers: egui::Modifiers) {
        let event = egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        };
        self.frame(app, vec![event]);
    }

    fn drag(&mut self, app: &mut FlashlightApp, from: Pos2, to: Pos2) {
        let press = |pressed| egui::Event::PointerButton {
            pos: if pressed { from } else { to },
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        self.hover(app, from);
        self.frame(app, vec![press(true)]);
        self.frame(app, vec![egui::Event::PointerMoved(to)]);
        self.frame(app, vec![press(false)]);
    }

    /// Center of the painted text `label`, if it was drawn last frame.
    fn label_center(&self, label: &str) -> Option<Pos2> {
        self.shapes.iter().find_map(|clipped| match &clipped.shape {
            epaint::Shape::Text(t) if t.galley.text() == label => Some(
                Rect::from_min_size(t.pos + t.galley.rect.min.to_vec2(), t.galley.size()).center(),
            ),
            _ => None,
        })
    }

    fn sent_start_drag(&self) -> bool {
        self.commands.iter().any(|c| matches!(c, ViewportCommand::StartDrag))
    }
}

fn windowed_app() -> FlashlightApp {
    let state = DisplayState {
        window: WindowState::new(false, false, true),
        ..Default::default()
    };
    FlashlightApp::new(state, None)
}

#[test]
fn keys_drive_window_state() {
    let ctx = MockCtx::default();
    let mut app = windowed_app();

    assert!(app.handle_key(&ctx, Key::F));
    assert!(app.state.window.is_fullscreen());
    assert!(app.handle_key(&ctx, Key::M));
    assert!(!app.state.window.is_cursor_visible());
    assert!(!app.handle_key(&ctx, Key::Z));

    assert!(app.handle_key(&ctx, Key::Q));
    let cmds = ctx.take();
    assert!(matches!(cmds.last(), Some(ViewportCommand::Close)));
}

#[test]
fn keys_are_ignored_while_a_dialog_is_open() {
    let ctx = MockCtx::default();
    let mut app = windowed_app();
    assert!(app.handle_key(&ctx, Key::C));
    assert!(app.dialog_open());
    assert!(!app.handle_key(&ctx, Key::F));
    assert!(!app.state.window.is_fullscreen());
}

#[test]
fn cancelled_color_dialog_restores_color() {
    let ctx = MockCtx::default();
    let mut app = windowed_app();
    app.perform(&ctx, Action::ChangeColor);

    app.apply_color_event(ColorTarget::Background, &DialogEvent::Preview(Color32::RED));
    assert_eq!(app.state.background, Color32::RED);

    app.cancel_dialog();
    assert!(!app.dialog_open());
    assert_eq!(app.state.background, Color32::BLACK);
}

#[test]
fn opening_another_dialog_cancels_the_first() {
    let ctx = MockCtx::default();
    let mut app = windowed_app();
    app.state.set_text("before");
    app.perform(&ctx, Action::ChangeText);
    app.apply_text_event(&DialogEvent::Preview("during".into()));
    assert_eq!(app.state.text.as_deref(), Some("during"));

    app.perform(&ctx, Action::ChangeTextColor);
    assert!(app.dialog_open());
    assert_eq!(app.state.text.as_deref(), Some("before"));
}

#[cfg(unix)]
#[test]
fn command_text_is_shown_immediately_and_refreshed() {
    let generator = TextGenerator::new("echo hi", Some(1.0));
    let mut app = FlashlightApp::new(DisplayState::default(), Some(generator));
    assert_eq!(app.state.text.as_deref(), Some("hi"));

    app.state.set_text("stale");
    let now = Instant::now();
    let wait = app.refresh(now).unwrap();
    assert!(wait <= Duration::from_secs(1));
    assert_eq!(app.state.text.as_deref(), Some("stale"));

    let wait = app.refresh(now + Duration::from_millis(1100)).unwrap();
    assert_eq!(app.state.text.as_deref(), Some("hi"));
    assert!(wait <= Duration::from_secs(1));
}

#[cfg(unix)]
#[test]
fn close_stops_refresh() {
    let ctx = MockCtx::default();
    let generator = TextGenerator::new("echo hi", Some(1.0));
    let mut app = FlashlightApp::new(DisplayState::default(), Some(generator));
    app.perform(&ctx, Action::Close);
    assert!(!app.generator().unwrap().is_running());
    assert_eq!(app.refresh(Instant::now() + Duration::from_secs(5)), None);
}

#[test]
fn viewport_reflects_startup_state() {
    let state = DisplayState {
        window: WindowState::new(false, true, true),
        geometry: Some(Geometry {
            width: 800,
            height: 600,
            x: 10,
            y: 20,
        }),
        ..Default::default()
    };
    let builder = gui::viewport(&state);
    assert_eq!(builder.fullscreen, Some(false));
    assert_eq!(builder.decorations, Some(false));
    assert_eq!(builder.inner_size, Some(vec2(800.0, 600.0)));
    assert_eq!(builder.position, Some(pos2(10.0, 20.0)));
    assert_eq!(builder.title.as_deref(), Some(gui::APP_TITLE));
}

#[test]
fn double_click_toggles_fullscreen() {
    let mut app = windowed_app();
    let mut h = Harness::new();
    let center = Harness::SCREEN.center();

    h.hover(&mut app, center);
    h.button(&mut app, center, egui::PointerButton::Primary);
    assert!(!app.state.window.is_fullscreen());
    h.button(&mut app, center, egui::PointerButton::Primary);

    assert!(app.state.window.is_fullscreen());
    assert!(h
        .commands
        .iter()
        .any(|c| matches!(c, ViewportCommand::Fullscreen(true))));
}

#[test]
fn dragging_moves_only_a_windowed_surface() {
    let mut app = windowed_app();
    let mut h = Harness::new();
    h.drag(&mut app, pos2(400.0, 300.0), pos2(450.0, 340.0));
    assert!(h.sent_start_drag());

    let state = DisplayState {
        window: WindowState::new(true, false, true),
        ..Default::default()
    };
    let mut app = FlashlightApp::new(state, None);
    let mut h = Harness::new();
    h.drag(&mut app, pos2(400.0, 300.0), pos2(450.0, 340.0));
    assert!(!h.sent_start_drag());
}

#[test]
fn context_menu_choice_is_performed() {
    let mut app = windowed_app();
    let mut h = Harness::new();
    let center = Harness::SCREEN.center();

    h.hover(&mut app, center);
    h.button(&mut app, center, egui::PointerButton::Secondary);
    h.frame(&mut app, vec![]);
    let item = h
        .label_center("Enter full screen")
        .expect("context menu shows the fullscreen entry");

    h.hover(&mut app, item);
    h.button(&mut app, item, egui::PointerButton::Primary);
    assert!(app.state.window.is_fullscreen());
}

#[test]
fn escape_with_context_menu_open_keeps_running() {
    let mut app = windowed_app();
    let mut h = Harness::new();
    let center = Harness::SCREEN.center();

    h.hover(&mut app, center);
    h.button(&mut app, center, egui::PointerButton::Secondary);
    h.frame(&mut app, vec![]);
    assert!(h.label_center("Exit").is_some());

    h.key(&mut app, Key::Escape, egui::Modifiers::NONE);
    assert!(!h.commands.iter().any(|c| matches!(c, ViewportCommand::Close)));
}

#[test]
fn shifted_keys_still_trigger_actions() {
    let mut app = windowed_app();
    let mut h = Harness::new();
    h.frame(&mut app, vec![]);

    h.key(&mut app, Key::F, egui::Modifiers::SHIFT);
    assert!(app.state.window.is_fullscreen());

    h.key(&mut app, Key::F, egui::Modifiers::CTRL);
    assert!(app.state.window.is_fullscreen());

    h.key(&mut app, Key::Q, egui::Modifiers::SHIFT);
    assert!(h.commands.iter().any(|c| matches!(c, ViewportCommand::Close)));
}
