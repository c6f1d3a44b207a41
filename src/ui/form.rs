use eframe::egui::{self, RichText, ScrollArea, Ui};

use metric_annotator::data::rules::RuleSet;
use metric_annotator::shell::Shell;
use metric_annotator::state::AppState;

const FIELD_WIDTH: f32 = 420.0;

// ---------------------------------------------------------------------------
// Top panel – file pickers, column name, Process
// ---------------------------------------------------------------------------

/// Render the input form.
pub fn form_panel(ui: &mut Ui, state: &mut AppState, shell: &mut dyn Shell) {
    ui.add_space(4.0);
    egui::Grid::new("input_form")
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Select the first CSV file:");
            ui.add(egui::TextEdit::singleline(&mut state.primary_path).desired_width(FIELD_WIDTH));
            if ui.button("Browse").clicked() {
                state.browse_primary(shell);
            }
            ui.end_row();

            ui.label("Select the second CSV file:");
            ui.add(
                egui::TextEdit::singleline(&mut state.secondary_path).desired_width(FIELD_WIDTH),
            );
            if ui.button("Browse").clicked() {
                state.browse_secondary(shell);
            }
            ui.end_row();

            ui.label("Enter the output CSV file path:");
            ui.add(egui::TextEdit::singleline(&mut state.output_path).desired_width(FIELD_WIDTH));
            if ui.button("Save As").clicked() {
                state.browse_output(shell);
            }
            ui.end_row();

            ui.label("Enter the new column name:");
            ui.add(egui::TextEdit::singleline(&mut state.column_name).desired_width(FIELD_WIDTH));
            ui.end_row();
        });

    ui.horizontal(|ui: &mut Ui| {
        if ui.button(RichText::new("Process").strong()).clicked() {
            state.process(shell);
        }
        if let Some((summary, _)) = &state.last_result {
            ui.label(format!(
                "{} of {} metrics present",
                summary.matched, summary.rows
            ));
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Left side panel – ignore list and alias switches
// ---------------------------------------------------------------------------

/// Render the rule editor.
pub fn rules_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Rules");
    ui.separator();

    ui.checkbox(&mut state.use_alias_rules, "Controller alias rules");
    if state.use_alias_rules {
        for (alias, canonical) in RuleSet::vehicle_alias_rules() {
            ui.label(RichText::new(format!("{alias}\n  → {canonical}")).small());
        }
    }
    ui.checkbox(&mut state.strict_ignore, "Ignore list overrides aliases");
    ui.separator();

    ui.strong("Always mark 'No' (one metric per line)");
    if ui.small_button("Reset").clicked() {
        state.ignore_text = AppState::default().ignore_text;
    }
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::multiline(&mut state.ignore_text)
                    .code_editor()
                    .desired_rows(12)
                    .desired_width(f32::INFINITY),
            );
        });
}
