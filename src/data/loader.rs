use std::path::Path;

use crate::error::{AnnotateError, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Load a CSV file with a header row into a [`Table`].
///
/// Values are kept verbatim as strings. A UTF-8 BOM in front of the header is
/// dropped; rows whose field count differs from the header are an error.
pub fn read_table(path: &Path) -> Result<Table> {
    let read_err = |source| AnnotateError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(read_err)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.strip_prefix('\u{feff}').unwrap_or(h).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();
    if columns.is_empty() {
        return Err(read_err(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no header row",
        ))));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(read_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        rows.len(),
        columns,
        path.display()
    );
    Table::new(columns, rows)
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write `table` as CSV: header row first, no index column.
///
/// The header is written even when the table has no rows.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let write_err = |source| AnnotateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer.write_record(table.columns()).map_err(write_err)?;
    for row in table.rows() {
        writer.write_record(row).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    log::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_table_keeps_values_verbatim() {
        let file = create_temp_csv("Metric,Value\nspeed, 01 \n\"a,b\",\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table.columns(), &["Metric".to_string(), "Value".to_string()][..]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(0, "Value"), Some(" 01 "));
        assert_eq!(table.value(1, "Metric"), Some("a,b"));
        assert_eq!(table.value(1, "Value"), Some(""));
    }

    #[test]
    fn test_read_table_with_bom() {
        let file = create_temp_csv("\u{feff}Metric\nspeed\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table.column_index("Metric"), Some(0));
    }

    #[test]
    fn test_read_table_header_only() {
        let file = create_temp_csv("Metric\n");
        let table = read_table(file.path()).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 1);
    }

    #[test]
    fn test_read_table_empty_file() {
        let file = create_temp_csv("");
        let result = read_table(file.path());

        assert!(matches!(result, Err(AnnotateError::Read { .. })));
    }

    #[test]
    fn test_read_table_ragged_row() {
        let file = create_temp_csv("Metric,Value\nspeed,1,extra\n");
        let result = read_table(file.path());

        assert!(matches!(result, Err(AnnotateError::Read { .. })));
    }

    #[test]
    fn test_read_table_missing_file() {
        let result = read_table(Path::new("/nonexistent/input.csv"));

        assert!(matches!(result, Err(ref e) if e.is_read_error()));
    }

    #[test]
    fn test_write_table_header_for_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut table = Table::from_column("Metric", Vec::<String>::new());
        table.set_column("Presence", Vec::new()).unwrap();

        write_table(&path, &table).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Metric,Presence\n");
    }

    #[test]
    fn test_write_then_read_quoted_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::from_column("Metric", ["plain", "with,comma", "with \"quote\""]);

        write_table(&path, &table).unwrap();
        let back = read_table(&path).unwrap();

        assert_eq!(back, table);
    }

    #[test]
    fn test_write_table_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let table = Table::from_column("Metric", ["a"]);

        let result = write_table(&path, &table);

        assert!(matches!(result, Err(AnnotateError::Write { .. })));
    }
}
