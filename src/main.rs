// Event Board Application
// Main entry point

use event_board::services::settings::ConfigService;
use event_board::ui_egui::EventBoardApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Event Board");

    let config_service = ConfigService::new();
    log::info!("Loading configuration from {:?}", config_service.path());
    let config = config_service.load();
    if let Err(err) = &config {
        log::error!("{:#}", err);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Event Board")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Event Board",
        options,
        Box::new(move |cc| Ok(Box::new(EventBoardApp::new(cc, config)))),
    )
}
