use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} records loaded, {} at or above threshold",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// Magnitude slider row below the menu bar.
///
/// The filtered view is recomputed synchronously in the same frame the
/// slider moves.
pub fn threshold_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Min magnitude");
        let mut threshold = state.threshold;
        if ui
            .add(egui::Slider::new(&mut threshold, 0.0..=10.0).fixed_decimals(1))
            .changed()
        {
            state.set_threshold(threshold);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog / loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open earthquake catalog")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_into_state(state, &path);
    }
}

/// Load a catalog file into the state. Shared by the startup argument and
/// the file dialog; a failed load leaves the previous catalog untouched.
pub fn load_into_state(state: &mut AppState, path: &Path) {
    match loader::load_catalog(path) {
        Ok(catalog) => {
            log::info!("Loaded {} records from {}", catalog.len(), path.display());
            state.set_catalog(catalog);
        }
        Err(e) => {
            log::error!("Failed to load catalog: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
