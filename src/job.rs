use std::path::PathBuf;

use crate::data::annotate::annotate;
use crate::data::loader::{read_table, write_table};
use crate::data::model::{Classification, METRIC_COLUMN};
use crate::data::rules::RuleSet;
use crate::error::Result;

// ---------------------------------------------------------------------------
// AnnotationJob – one read → annotate → write run
// ---------------------------------------------------------------------------

/// Everything needed for one annotation run, passed explicitly.
#[derive(Debug, Clone)]
pub struct AnnotationJob {
    /// Table to annotate.
    pub primary: PathBuf,
    /// Table to compare against.
    pub secondary: PathBuf,
    /// Destination of the annotated table.
    pub output: PathBuf,
    /// Name of the `Yes`/`No` column.
    pub column_name: String,
    pub rules: RuleSet,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub output: PathBuf,
    /// Name of the classification column.
    pub column: String,
    pub rows: usize,
    /// Rows classified `Yes`.
    pub matched: usize,
}

impl AnnotationSummary {
    /// Message shown to the user after the file was written.
    pub fn message(&self) -> String {
        format!("Updated file saved to: {}", self.output.display())
    }
}

impl AnnotationJob {
    /// Read both inputs, annotate the primary table and write it out.
    ///
    /// The output file is only created once annotation has succeeded.
    pub fn run(&self) -> Result<AnnotationSummary> {
        let primary = read_table(&self.primary)?;
        let secondary = read_table(&self.secondary)?;

        let annotated = annotate(primary, &secondary, &self.column_name, &self.rules)?;
        write_table(&self.output, &annotated)?;

        let matched = annotated
            .column_values(&self.column_name)
            .map(|values| {
                values
                    .filter(|v| *v == Classification::Yes.as_str())
                    .count()
            })
            .unwrap_or(0);

        log::info!(
            "{}: {matched} of {} '{METRIC_COLUMN}' rows present in {}",
            self.output.display(),
            annotated.len(),
            self.secondary.display()
        );

        Ok(AnnotationSummary {
            output: self.output.clone(),
            column: self.column_name.clone(),
            rows: annotated.len(),
            matched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnnotateError, TableRole};
    use std::path::Path;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn job(dir: &Path, primary: &str, secondary: &str) -> AnnotationJob {
        AnnotationJob {
            primary: write_file(dir, "file1.csv", primary),
            secondary: write_file(dir, "file2.csv", secondary),
            output: dir.join("output.csv"),
            column_name: "Presence".to_string(),
            rules: RuleSet::vehicle_checklist(),
        }
    }

    #[test]
    fn test_run_writes_annotated_file() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(
            dir.path(),
            "Metric,Unit\nmetric1,a\nmetric2,b\nmetric3,c\n",
            "Metric\nmetric2\nmetric4\n",
        );

        let summary = job.run().unwrap();

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.matched, 1);
        assert_eq!(
            std::fs::read_to_string(&job.output).unwrap(),
            "Metric,Unit,Presence\nmetric1,a,No\nmetric2,b,Yes\nmetric3,c,No\n"
        );
        assert_eq!(
            summary.message(),
            format!("Updated file saved to: {}", job.output.display())
        );
    }

    #[test]
    fn test_run_missing_column_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path(), "Metric\nmetric1\n", "NotMetric\nmetric1\n");

        let result = job.run();

        assert!(matches!(
            result,
            Err(AnnotateError::MissingColumn {
                table: TableRole::Secondary
            })
        ));
        assert!(!job.output.exists());
    }

    #[test]
    fn test_run_unreadable_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job(dir.path(), "Metric\nmetric1\n", "Metric\nmetric1\n");
        job.secondary = dir.path().join("does-not-exist.csv");

        let result = job.run();

        assert!(matches!(result, Err(AnnotateError::Read { .. })));
        assert!(!job.output.exists());
    }

    #[test]
    fn test_run_empty_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path(), "Metric\n", "Metric\n");

        let summary = job.run().unwrap();

        assert_eq!(summary.rows, 0);
        assert_eq!(
            std::fs::read_to_string(&job.output).unwrap(),
            "Metric,Presence\n"
        );
    }
}
