mod app;
mod color;
mod config;
mod data;
mod ml;
mod services;
mod state;
mod ui;

use app::DiabetesApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::default();
    log::info!(
        "Starting with dataset {} and model {}",
        config.dataset_path.display(),
        config.model_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Prediksi Diabetes",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render png/jpg/etc.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DiabetesApp::new(config)))
        }),
    )
}
