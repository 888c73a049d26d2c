mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::QuakeScopeApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional catalog path on the command line, loaded before the first
    // frame so the dashboard opens populated.
    let catalog_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QuakeScope – Earthquake Dashboard",
        options,
        Box::new(move |_cc| {
            let mut app = QuakeScopeApp::default();
            if let Some(path) = &catalog_path {
                ui::panels::load_into_state(&mut app.state, path);
            }
            Ok(Box::new(app))
        }),
    )
}
