use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::data::loader::read_table;
use crate::data::model::Table;
use crate::data::rules::RuleSet;
use crate::job::{AnnotationJob, AnnotationSummary};
use crate::shell::{run_interactive, Notice, Shell};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The form behind the annotator window, independent of rendering.
pub struct AppState {
    /// Table to annotate.
    pub primary_path: String,

    /// Table to compare against.
    pub secondary_path: String,

    /// Where the annotated table is saved.
    pub output_path: String,

    /// Name of the new `Yes`/`No` column.
    pub column_name: String,

    /// Ignore list, one metric per line.
    pub ignore_text: String,

    /// Apply the controller alias rules.
    pub use_alias_rules: bool,

    /// Keep ignored metrics at `No` even when an alias matches.
    pub strict_ignore: bool,

    /// Result of the last successful run, for the preview table.
    pub last_result: Option<(AnnotationSummary, Table)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            primary_path: String::new(),
            secondary_path: String::new(),
            output_path: String::new(),
            column_name: String::new(),
            ignore_text: RuleSet::vehicle_ignore_list()
                .into_iter()
                .collect::<Vec<_>>()
                .join("\n"),
            use_alias_rules: true,
            strict_ignore: false,
            last_result: None,
        }
    }
}

impl AppState {
    pub fn browse_primary(&mut self, shell: &mut dyn Shell) {
        if let Some(path) = shell.pick_open_path("Select the first CSV file") {
            self.primary_path = path.display().to_string();
        }
    }

    pub fn browse_secondary(&mut self, shell: &mut dyn Shell) {
        if let Some(path) = shell.pick_open_path("Select the second CSV file") {
            self.secondary_path = path.display().to_string();
        }
    }

    pub fn browse_output(&mut self, shell: &mut dyn Shell) {
        if let Some(path) = shell.pick_save_path("Save the updated CSV file") {
            self.output_path = path.display().to_string();
        }
    }

    /// Rules built from the form: ignore list lines plus optional aliases.
    pub fn rules(&self) -> RuleSet {
        let ignore_list: BTreeSet<String> = self
            .ignore_text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        let alias_rules = if self.use_alias_rules {
            RuleSet::vehicle_alias_rules()
        } else {
            Default::default()
        };
        RuleSet {
            ignore_list,
            alias_rules,
            strict_ignore: self.strict_ignore,
        }
    }

    /// The job described by the form, or `None` if a field is blank.
    pub fn job(&self) -> Option<AnnotationJob> {
        let fields = [
            &self.primary_path,
            &self.secondary_path,
            &self.output_path,
            &self.column_name,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return None;
        }
        Some(AnnotationJob {
            primary: PathBuf::from(self.primary_path.trim()),
            secondary: PathBuf::from(self.secondary_path.trim()),
            output: PathBuf::from(self.output_path.trim()),
            column_name: self.column_name.clone(),
            rules: self.rules(),
        })
    }

    /// Run the annotation. Failures are reported through `shell` and leave
    /// the form untouched so the user can correct it and retry.
    pub fn process(&mut self, shell: &mut dyn Shell) {
        let Some(job) = self.job() else {
            shell.notify(Notice::warning("Please fill out all fields."));
            return;
        };

        let Some(summary) = run_interactive(&job, shell) else {
            return;
        };

        match read_table(&summary.output) {
            Ok(table) => self.last_result = Some((summary, table)),
            Err(e) => {
                log::warn!("Could not reload {} for preview: {e}", summary.output.display());
                self.last_result = None;
            }
        }
    }
}
