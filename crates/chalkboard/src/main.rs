//! Chalkboard: a school roster administration GUI

use eframe::egui;

mod app;
mod dialogs;
mod state;
mod ui;
mod validation;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Chalkboard");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Chalkboard")
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([640.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chalkboard",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
