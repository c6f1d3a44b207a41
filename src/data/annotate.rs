use std::collections::HashSet;

use crate::error::{AnnotateError, Result, TableRole};

use super::model::{Classification, Table, METRIC_COLUMN};
use super::rules::RuleSet;

// ---------------------------------------------------------------------------
// Membership set
// ---------------------------------------------------------------------------

/// Collect the distinct `Metric` values of `table`.
pub fn metric_set<'a>(table: &'a Table, role: TableRole) -> Result<HashSet<&'a str>> {
    table
        .column_values(METRIC_COLUMN)
        .map(|values| values.collect())
        .ok_or(AnnotateError::MissingColumn { table: role })
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a single metric against the secondary membership set.
///
/// Ignored metrics are `No`, otherwise membership decides. Alias rules run
/// afterwards and may turn any `No` into `Yes`, including an ignored metric
/// unless `rules.strict_ignore` is set.
pub fn classify(metric: &str, secondary: &HashSet<&str>, rules: &RuleSet) -> Classification {
    let ignored = rules.is_ignored(metric);
    let mut class = Classification::from(!ignored && secondary.contains(metric));

    if ignored && rules.strict_ignore {
        return class;
    }

    let aliased = rules
        .alias_rules
        .iter()
        .any(|(alias, canonical)| canonical == metric && secondary.contains(alias.as_str()));
    if aliased {
        class = Classification::Yes;
    }
    class
}

/// Annotate `primary` with a `Yes`/`No` column telling whether each row's
/// metric is present in `secondary`.
///
/// Rows keep their order; an existing column named `new_column` is
/// overwritten in place.
pub fn annotate(
    mut primary: Table,
    secondary: &Table,
    new_column: &str,
    rules: &RuleSet,
) -> Result<Table> {
    if new_column.trim().is_empty() {
        return Err(AnnotateError::EmptyColumnName);
    }
    let metric_idx = primary
        .column_index(METRIC_COLUMN)
        .ok_or(AnnotateError::MissingColumn {
            table: TableRole::Primary,
        })?;
    let secondary_set = metric_set(secondary, TableRole::Secondary)?;

    let classes: Vec<Classification> = primary
        .rows()
        .iter()
        .map(|row| classify(&row[metric_idx], &secondary_set, rules))
        .collect();

    let matched = classes.iter().filter(|c| **c == Classification::Yes).count();
    log::debug!(
        "Classified {} rows against {} distinct metrics: {matched} Yes",
        classes.len(),
        secondary_set.len()
    );

    primary.set_column(
        new_column,
        classes.into_iter().map(|c| c.as_str().to_string()).collect(),
    )?;
    Ok(primary)
}
