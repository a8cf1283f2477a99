use anyhow::{anyhow, Context};
use eframe::egui;
use inkguide::config::AppConfig;
use inkguide::gui::GuideOverlayApp;
use inkguide::settings_store::SettingsStore;
use inkguide::{icon, logging};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("resolve configuration")?;
    logging::init(config.debug_logging, config.log_file.clone());
    tracing::info!(settings = %config.settings_path.display(), "starting inkguide");

    let settings_store = SettingsStore::new(config.settings_path.clone());
    let report = settings_store.load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Inkguiding")
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_fullscreen(true)
            .with_mouse_passthrough(true)
            .with_icon(icon::icon_data(64)),
        ..Default::default()
    };

    eframe::run_native(
        "Inkguiding",
        native_options,
        Box::new(move |_cc| Box::new(GuideOverlayApp::new(&config, settings_store, report))),
    )
    .map_err(|err| anyhow!("overlay event loop failed: {err}"))?;

    tracing::info!("inkguide exited");
    Ok(())
}
