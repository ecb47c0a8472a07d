use eframe::egui;

use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CsvScoutApp {
    pub state: AppState,
}

impl eframe::App for CsvScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar, shape, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: overview + chart panels ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Upload a CSV file to start  (File → Open CSV…)");
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(ds) = &self.state.dataset {
                        panels::overview(ui, ds);
                    }
                    // Each panel decides its own visibility from the schema.
                    panels::bar_panel(ui, &mut self.state);
                    panels::distribution_panel(ui, &mut self.state);
                    panels::scatter_panel(ui, &mut self.state);
                });
        });
    }
}
