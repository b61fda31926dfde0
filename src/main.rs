use dropzone::store::MockStore;
use dropzone::{AppConfig, AppError, ConfigError, DropZone, Route};
use eframe::CreationContext;
use log::{error, info};
use std::sync::Arc;

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;
    let store = Arc::new(MockStore::seeded().map_err(ConfigError::Parse)?);
    let route = Route::parse(&std::env::args().nth(1).unwrap_or_default());
    info!("Starting at {:?}", route);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DropZone",
        options,
        Box::new(move |cc: &CreationContext| {
            Box::new(DropZone::new(cc, runtime, store, config, route))
        }),
    )
    .map_err(|e| AppError::Window(e.to_string()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("dropzone=info"))
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
