mod app;
mod config;
mod effects;
mod input;
mod nav;
mod notify;
mod paths;
mod sound;
mod ui;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::DashApp;
use crate::config::{apply_cli_args, cli_args, load_cfg};
use crate::nav::Catalog;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("console_dash=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut config = load_cfg();
    let loaded = config.clone();
    if let Err(e) = apply_cli_args(&mut config, cli_args(&args)) {
        warn!("{}; ignoring command line overrides", e);
        config = loaded;
    }
    info!(
        "Starting on {} (sound: {}, effects: {}, gamepad: {})",
        config.start_tab, config.sound_enabled, config.effects_enabled, config.gamepad_enabled
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Console Dash")
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 360.0])
            .with_fullscreen(config.fullscreen),
        ..Default::default()
    };

    eframe::run_native(
        "Console Dash",
        options,
        Box::new(move |cc| {
            let mut fonts = eframe::egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            crate::ui::apply_theme(&cc.egui_ctx);

            let app = DashApp::new(&config, Catalog::builtin()?)?;
            Ok(Box::new(app))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: console-dash [OPTIONS]

Options:
    --fullscreen      Start in fullscreen mode
    --mute            Disable sound cues
    --no-gamepad      Do not scan for gamepads
    --no-effects      Disable sparkles, background drift and icon glow
    --tab <key>       Start on a tab: home, games, music, video, settings
    --help            Show this message

Settings are read from $XDG_CONFIG_HOME/console-dash/settings.json.
Set RUST_LOG to change log verbosity (default: console_dash=info).
"#;
