use eframe::egui::Ui;

pub mod charts;
pub mod panels;
pub mod table;

/// Placeholder shown by every view while no catalog is loaded.
fn empty_hint(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a catalog to view earthquakes  (File → Open…)");
    });
}
