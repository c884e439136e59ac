use crate::color::Color;
use crate::font::FontSpec;
use crate::generator::TextGenerator;
use crate::geometry::Geometry;
use crate::settings::Settings;
use crate::state::DisplayState;
use crate::window::WindowState;
use anyhow::Context as _;
use clap::Parser;
use eframe::egui::Color32;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flashlight")]
#[command(about = "Fill the screen with a solid color", long_about = None)]
pub struct Cli {
    /// Show the contents of FILE ('-' reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Color to use for the background (#FFF, #FFFFFF or name)
    #[arg(short = 'c', long, value_name = "COLOR", help_heading = "Style")]
    pub color: Option<Color>,

    /// Color to use for text
    #[arg(short = 'T', long, value_name = "COLOR", help_heading = "Style")]
    pub text_color: Option<Color>,

    /// Font for text: sans, mono or a path to a TTF/OTF file
    #[arg(short = 'F', long, value_name = "FONT", help_heading = "Style")]
    pub font: Option<FontSpec>,

    /// Display text
    #[arg(short = 't', long, value_name = "TEXT", help_heading = "Content")]
    pub text: Option<String>,

    /// Run CMD and show its output
    #[arg(short = 'C', long, value_name = "CMD", help_heading = "Content")]
    pub command: Option<String>,

    /// Rerun CMD every SECONDS seconds
    #[arg(short = 'n', long, value_name = "SECONDS", help_heading = "Content")]
    pub interval: Option<f64>,

    /// Start in fullscreen mode (the default)
    #[arg(short = 'f', long, conflicts_with = "window", help_heading = "Window")]
    pub fullscreen: bool,

    /// Start in window mode
    #[arg(short = 'w', long, help_heading = "Window")]
    pub window: bool,

    /// Hide the mouse cursor
    #[arg(short = 'm', long, help_heading = "Window")]
    pub hide_cursor: bool,

    /// Run the window without a border
    #[arg(short = 'b', long, help_heading = "Window")]
    pub borderless: bool,

    /// Set the size and position of the window
    #[arg(short = 'g', long, value_name = "WxH+X+Y", help_heading = "Window")]
    pub geometry: Option<Geometry>,

    /// Settings file (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Everything needed to open the surface.
#[derive(Debug)]
pub struct Launch {
    pub state: DisplayState,
    pub generator: Option<TextGenerator>,
}

impl Cli {
    /// Settings file to read: `--config`, else the per-user default.
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Settings::default_path)
    }

    /// Merge the options over `settings` and load any text content.
    ///
    /// `stdin` is only read when FILE is `-`.
    pub fn resolve(self, settings: &Settings, stdin: impl Read) -> anyhow::Result<Launch> {
        let background = match self.color {
            Some(c) => c.into(),
            None => settings.background()?.map_or(Color32::BLACK, Color32::from),
        };
        let foreground = match self.text_color {
            Some(c) => c.into(),
            None => settings.foreground()?.map_or(Color32::WHITE, Color32::from),
        };
        let font = match self.font {
            Some(f) => f,
            None => settings.font_spec()?.unwrap_or_default(),
        };

        let text = match &self.file {
            Some(path) => Some(read_text(path, stdin)?),
            None => self.text,
        };

        let windowed = self.window || (settings.window && !self.fullscreen);
        let window = WindowState::new(
            !windowed,
            self.borderless || settings.borderless,
            !(self.hide_cursor || settings.hide_cursor),
        );

        let interval = self.interval.or(settings.interval);
        let generator = match self.command {
            Some(cmd) => Some(TextGenerator::new(cmd, interval)),
            None => {
                if self.interval.is_some() {
                    tracing::warn!("--interval has no effect without --command");
                }
                None
            }
        };

        Ok(Launch {
            state: DisplayState {
                background,
                foreground,
                font,
                text,
                window,
                geometry: self.geometry,
            },
            generator,
        })
    }
}

/// Text shown for FILE, with trailing newlines removed.
pub fn read_text(path: &Path, mut stdin: impl Read) -> anyhow::Result<String> {
    let mut text = String::new();
    if path.as_os_str() == "-" {
        stdin
            .read_to_string(&mut text)
            .context("failed to read text from stdin")?;
    } else {
        text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(text.trim_end_matches('\n').to_owned())
}
