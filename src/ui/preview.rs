use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use metric_annotator::data::model::Classification;
use metric_annotator::state::AppState;

// ---------------------------------------------------------------------------
// Annotated table (central panel)
// ---------------------------------------------------------------------------

/// Render the last annotated table.
pub fn result_table(ui: &mut Ui, state: &AppState) {
    let Some((summary, table)) = &state.last_result else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Fill in the form and press Process");
        });
        return;
    };

    ui.label(RichText::new(summary.output.display().to_string()).weak());
    ui.separator();

    let n_cols = table.columns().len();
    let class_col = table.column_index(&summary.column);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), n_cols)
        .header(20.0, |mut header| {
            for name in table.columns() {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, table.len(), |mut row| {
                let values = &table.rows()[row.index()];
                for (i, value) in values.iter().enumerate() {
                    row.col(|ui| {
                        if Some(i) == class_col && value == Classification::Yes.as_str() {
                            ui.label(RichText::new(value).color(Color32::from_rgb(60, 160, 80)));
                        } else {
                            ui.label(value);
                        }
                    });
                }
            });
        });
}
