use clap::Parser;
use flashlight::cli::Cli;
use flashlight::gui::{self, FlashlightApp};
use flashlight::logging;
use flashlight::settings::Settings;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = match cli.settings_path() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    logging::init(settings.debug_logging, settings.log_file.as_ref().map(PathBuf::from));

    let launch = cli.resolve(&settings, std::io::stdin().lock())?;
    // Load the font before the window exists so a bad file aborts early.
    let fonts = launch.state.font.definitions()?;

    tracing::info!(
        fullscreen = launch.state.window.is_fullscreen(),
        font = %launch.state.font,
        command = ?launch.generator.as_ref().map(|g| g.command()),
        "starting flashlight"
    );

    let native_options = eframe::NativeOptions {
        viewport: gui::viewport(&launch.state),
        ..Default::default()
    };

    eframe::run_native(
        gui::APP_TITLE,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Box::new(FlashlightApp::new(launch.state, launch.generator))
        }),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
