use eframe::egui;

use metric_annotator::shell::DialogShell;
use metric_annotator::state::AppState;

use crate::ui::{form, preview};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MetricAnnotatorApp {
    pub state: AppState,
    shell: DialogShell,
}

impl eframe::App for MetricAnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: input form ----
        egui::TopBottomPanel::top("form_panel").show(ctx, |ui| {
            form::form_panel(ui, &mut self.state, &mut self.shell);
        });

        // ---- Left side panel: rules ----
        egui::SidePanel::left("rules_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                form::rules_panel(ui, &mut self.state);
            });

        // ---- Central panel: annotated table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            preview::result_table(ui, &self.state);
        });
    }
}
