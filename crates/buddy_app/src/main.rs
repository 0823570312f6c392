#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assets;
mod buddies;
mod constants;
mod effects;
mod tray;

use buddy_logging::LogDestination;

fn main() -> eframe::Result {
    buddy_logging::initialize(LogDestination::Both);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(buddy_core::APP_NAME)
            .with_inner_size(constants::SELECTION_WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        buddy_core::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(app::DeskmatesApp::new(cc)))),
    )
}
