use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use super::empty_hint;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered record table
// ---------------------------------------------------------------------------

/// Render the record table, showing only rows at or above the magnitude
/// threshold. Rows come from `state.visible_indices`, so the order is the
/// catalog's file order.
pub fn record_table(ui: &mut Ui, state: &AppState) {
    let catalog = match &state.catalog {
        Some(catalog) => catalog,
        None => {
            empty_hint(ui);
            return;
        }
    };

    let records = catalog.records();
    let visible = &state.visible_indices;

    ui.label(format!(
        "{} of {} records at magnitude ≥ {:.1}",
        visible.len(),
        records.len(),
        state.threshold
    ));
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .header(20.0, |mut header| {
            for title in ["Region", "Latitude", "Longitude", "Magnitude"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, visible.len(), |mut row| {
                let record = &records[visible[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(&record.region);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.4}", record.latitude));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.4}", record.longitude));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.1}", record.magnitude));
                });
            });
        });
}
