use eframe::egui;

use crate::state::{AppState, ViewTab};
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct QuakeScopeApp {
    pub state: AppState,
}

impl Default for QuakeScopeApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for QuakeScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar, magnitude slider, view tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
            panels::threshold_bar(ui, &mut self.state);

            ui.horizontal(|ui| {
                for tab in ViewTab::ALL {
                    if ui
                        .selectable_label(self.state.active_tab == tab, tab.label())
                        .clicked()
                    {
                        self.state.active_tab = tab;
                    }
                }
            });
        });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.active_tab {
                ViewTab::Magnitudes => charts::magnitude_pie(ui, &self.state),
                ViewTab::Records => table::record_table(ui, &self.state),
                ViewTab::Regions => charts::region_bars(ui, &self.state),
            }
        });
    }
}
