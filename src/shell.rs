use std::path::PathBuf;

use crate::error::AnnotateError;
use crate::job::{AnnotationJob, AnnotationSummary};

// ---------------------------------------------------------------------------
// Notices and the Shell capability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// What the annotator needs from its surroundings: choosing files and
/// telling the user how things went.
pub trait Shell {
    /// Ask for an existing CSV file. `None` when the user cancels.
    fn pick_open_path(&mut self, title: &str) -> Option<PathBuf>;

    /// Ask for a destination CSV file. `None` when the user cancels.
    fn pick_save_path(&mut self, title: &str) -> Option<PathBuf>;

    fn notify(&mut self, notice: Notice);
}

/// User-facing wording for a failed run.
pub fn failure_message(err: &AnnotateError) -> String {
    match err {
        AnnotateError::MissingColumn { .. } => {
            "Both CSV files must contain a 'Metric' column.".to_string()
        }
        AnnotateError::Read { .. } | AnnotateError::RaggedRow { .. } => {
            format!("Failed to read CSV files: {err}")
        }
        AnnotateError::Write { .. } => format!("Failed to save updated CSV file: {err}"),
        other => format!("Error: {other}"),
    }
}

/// Run `job` and report the outcome through `shell` instead of returning
/// the error, so an interactive caller stays usable after a failure.
pub fn run_interactive(job: &AnnotationJob, shell: &mut dyn Shell) -> Option<AnnotationSummary> {
    match job.run() {
        Ok(summary) => {
            shell.notify(Notice::info(summary.message()));
            Some(summary)
        }
        Err(e) => {
            log::error!("Annotation failed: {e:#}");
            shell.notify(Notice::error(failure_message(&e)));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Native dialogs
// ---------------------------------------------------------------------------

/// File pickers and message boxes from the desktop environment.
#[derive(Debug, Default)]
pub struct DialogShell;

impl Shell for DialogShell {
    fn pick_open_path(&mut self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
    }

    fn pick_save_path(&mut self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .set_file_name("annotated.csv")
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .save_file()
    }

    fn notify(&mut self, notice: Notice) {
        let (level, title) = match notice.level {
            NoticeLevel::Info => (rfd::MessageLevel::Info, "Success"),
            NoticeLevel::Warning => (rfd::MessageLevel::Warning, "Warning"),
            NoticeLevel::Error => (rfd::MessageLevel::Error, "Error"),
        };
        let _ = rfd::MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(notice.message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

// ---------------------------------------------------------------------------
// Console
// ---------------------------------------------------------------------------

/// Batch counterpart of [`DialogShell`]: paths come from the command line,
/// notices go to stdout/stderr.
#[derive(Debug, Default)]
pub struct ConsoleShell;

impl Shell for ConsoleShell {
    /// Always `None`: batch runs take their input paths as arguments.
    fn pick_open_path(&mut self, _title: &str) -> Option<PathBuf> {
        None
    }

    /// Always `None`: batch runs take `--output` as an argument.
    fn pick_save_path(&mut self, _title: &str) -> Option<PathBuf> {
        None
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Warning => eprintln!("warning: {}", notice.message),
            NoticeLevel::Error => eprintln!("error: {}", notice.message),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted shell: hands out queued paths and records notices.
    #[derive(Debug, Default)]
    pub struct ScriptedShell {
        pub open_paths: VecDeque<PathBuf>,
        pub save_paths: VecDeque<PathBuf>,
        pub notices: Vec<Notice>,
    }

    impl Shell for ScriptedShell {
        fn pick_open_path(&mut self, _title: &str) -> Option<PathBuf> {
            self.open_paths.pop_front()
        }

        fn pick_save_path(&mut self, _title: &str) -> Option<PathBuf> {
            self.save_paths.pop_front()
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedShell;
    use super::*;
    use crate::data::rules::RuleSet;
    use crate::error::TableRole;

    fn job_in(dir: &std::path::Path, primary: &str, secondary: &str) -> AnnotationJob {
        let p = dir.join("p.csv");
        let s = dir.join("s.csv");
        std::fs::write(&p, primary).unwrap();
        std::fs::write(&s, secondary).unwrap();
        AnnotationJob {
            primary: p,
            secondary: s,
            output: dir.join("out.csv"),
            column_name: "Seen".to_string(),
            rules: RuleSet::default(),
        }
    }

    #[test]
    fn test_run_interactive_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path(), "Metric\na\n", "Metric\na\n");
        let mut shell = ScriptedShell::default();

        let summary = run_interactive(&job, &mut shell);

        assert!(summary.is_some());
        assert_eq!(
            shell.notices,
            vec![Notice::info(format!(
                "Updated file saved to: {}",
                job.output.display()
            ))]
        );
    }

    #[test]
    fn test_run_interactive_reports_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path(), "Name\na\n", "Metric\na\n");
        let mut shell = ScriptedShell::default();

        assert!(run_interactive(&job, &mut shell).is_none());
        assert_eq!(
            shell.notices,
            vec![Notice::error("Both CSV files must contain a 'Metric' column.")]
        );
        assert!(!job.output.exists());
    }

    #[test]
    fn test_run_interactive_reports_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job_in(dir.path(), "Metric\na\n", "Metric\na\n");
        job.primary = dir.path().join("gone.csv");
        let mut shell = ScriptedShell::default();

        assert!(run_interactive(&job, &mut shell).is_none());
        assert_eq!(shell.notices.len(), 1);
        assert_eq!(shell.notices[0].level, NoticeLevel::Error);
        assert!(shell.notices[0].message.starts_with("Failed to read CSV files: "));
    }

    #[test]
    fn test_run_interactive_reports_empty_file_as_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let job = job_in(dir.path(), "", "Metric\na\n");
        let mut shell = ScriptedShell::default();

        assert!(run_interactive(&job, &mut shell).is_none());
        assert!(shell.notices[0].message.starts_with("Failed to read CSV files: "));
        assert!(!job.output.exists());
    }

    #[test]
    fn test_console_shell_never_picks_paths() {
        let mut shell = ConsoleShell;

        assert_eq!(shell.pick_open_path("Select the first CSV file"), None);
        assert_eq!(shell.pick_save_path("Save the updated CSV file"), None);
    }

    #[test]
    fn test_failure_message_for_write_error() {
        let err = AnnotateError::Write {
            path: PathBuf::from("out.csv"),
            source: csv::Error::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )),
        };

        assert!(failure_message(&err).starts_with("Failed to save updated CSV file: "));
        assert_eq!(
            failure_message(&AnnotateError::MissingColumn {
                table: TableRole::Primary
            }),
            "Both CSV files must contain a 'Metric' column."
        );
    }
}
