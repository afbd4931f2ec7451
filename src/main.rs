// Seasonal Calendar
// Main entry point

use seasonal_calendar::services::config::{AppConfig, ConfigService};
use seasonal_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Seasonal Calendar");

    let config = ConfigService::load().unwrap_or_else(|e| {
        log::error!("Failed to load configuration: {:#}; using defaults", e);
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Seasonal Calendar")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Seasonal Calendar",
        options,
        Box::new(move |cc| create_app(cc, config)),
    )
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: AppConfig,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    let app = CalendarApp::new(cc, config)?;
    Ok(Box::new(app))
}
