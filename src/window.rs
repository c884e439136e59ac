use eframe::egui;

/// The parts of `egui::Context` the window logic needs, so tests can record
/// viewport commands without opening a window.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Window,
    Borderless,
    Fullscreen,
}

/// Fullscreen, borderless and cursor flags of the surface window.
///
/// Decoration changes are only sent while windowed. A borderless toggle made
/// in fullscreen is remembered and applied when fullscreen is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    fullscreen: bool,
    borderless: bool,
    cursor_visible: bool,
    /// Whether the window currently carries decorations.
    decorated: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new(false, false, true)
    }
}

impl WindowState {
    /// State matching a window created with these flags.
    pub fn new(fullscreen: bool, borderless: bool, cursor_visible: bool) -> Self {
        Self {
            fullscreen,
            borderless,
            cursor_visible,
            decorated: !borderless,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_borderless(&self) -> bool {
        self.borderless
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    pub fn mode(&self) -> WindowMode {
        if self.fullscreen {
            WindowMode::Fullscreen
        } else if self.borderless {
            WindowMode::Borderless
        } else {
            WindowMode::Window
        }
    }

    pub fn set_fullscreen(&mut self, ctx: &impl ViewportCtx, fullscreen: bool) {
        if self.fullscreen == fullscreen {
            return;
        }
        tracing::debug!(from = self.fullscreen, to = fullscreen, "fullscreen updated");
        self.fullscreen = fullscreen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        if !fullscreen {
            self.sync_decorations(ctx);
        }
        ctx.request_repaint();
    }

    pub fn toggle_fullscreen(&mut self, ctx: &impl ViewportCtx) {
        self.set_fullscreen(ctx, !self.fullscreen);
    }

    pub fn set_borderless(&mut self, ctx: &impl ViewportCtx, borderless: bool) {
        if self.borderless != borderless {
            tracing::debug!(from = self.borderless, to = borderless, "borderless updated");
        }
        self.borderless = borderless;
        if !self.fullscreen {
            self.sync_decorations(ctx);
        }
    }

    pub fn toggle_borderless(&mut self, ctx: &impl ViewportCtx) {
        self.set_borderless(ctx, !self.borderless);
    }

    pub fn set_cursor_visible(&mut self, ctx: &impl ViewportCtx, visible: bool) {
        if self.cursor_visible == visible {
            return;
        }
        tracing::debug!(visible, "cursor visibility updated");
        self.cursor_visible = visible;
        ctx.send_viewport_cmd(egui::ViewportCommand::CursorVisible(visible));
    }

    pub fn toggle_cursor(&mut self, ctx: &impl ViewportCtx) {
        self.set_cursor_visible(ctx, !self.cursor_visible);
    }

    pub fn set_mode(&mut self, ctx: &impl ViewportCtx, mode: WindowMode) {
        if self.mode() == mode {
            return;
        }
        match mode {
            WindowMode::Window => {
                self.set_borderless(ctx, false);
                self.set_fullscreen(ctx, false);
            }
            WindowMode::Borderless => {
                self.set_borderless(ctx, true);
                self.set_fullscreen(ctx, false);
            }
            WindowMode::Fullscreen => self.set_fullscreen(ctx, true),
        }
    }

    fn sync_decorations(&mut self, ctx: &impl ViewportCtx) {
        let want = !self.borderless;
        if self.decorated != want {
            self.decorated = want;
            ctx.send_viewport_cmd(egui::ViewportCommand::Decorations(want));
        }
    }
}
