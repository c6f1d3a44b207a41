//! Batch front end: annotate one CSV file against another from the command
//! line. Errors end the process with a non-zero status.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use metric_annotator::data::rules::{parse_alias, RuleSet};
use metric_annotator::job::AnnotationJob;
use metric_annotator::shell::{ConsoleShell, Notice, Shell};

#[derive(Parser)]
#[command(
    name = "metric-annotate",
    version,
    about = "Mark which metrics of PRIMARY appear in SECONDARY",
    long_about = "Compare the 'Metric' columns of two CSV files and write PRIMARY \
                  with an extra Yes/No column telling whether each metric is \
                  present in SECONDARY."
)]
struct Cli {
    /// CSV file to annotate.
    #[arg(value_name = "PRIMARY")]
    primary: PathBuf,

    /// CSV file to compare against.
    #[arg(value_name = "SECONDARY")]
    secondary: PathBuf,

    /// Where to write the annotated CSV.
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Name of the new column (prompted for when omitted).
    #[arg(short, long, value_name = "NAME")]
    column: Option<String>,

    /// Metric that is always marked 'No'. Repeatable.
    #[arg(long = "ignore", value_name = "METRIC")]
    ignore: Vec<String>,

    /// Alias rule: a metric ALT in SECONDARY marks CANON in PRIMARY as present. Repeatable.
    #[arg(long = "alias", value_name = "ALT=CANON", value_parser = parse_alias)]
    alias: Vec<(String, String)>,

    /// JSON rule file with `ignore_list`, `alias_rules` and `strict_ignore`.
    #[arg(long = "rules", value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Include the built-in vehicle checklist ignore list and controller aliases.
    #[arg(long = "builtin-rules")]
    builtin_rules: bool,

    /// Never let an alias rule turn an ignored metric into 'Yes'.
    #[arg(long = "strict-ignore")]
    strict_ignore: bool,
}

impl Cli {
    fn rule_set(&self) -> Result<RuleSet> {
        let mut rules = if self.builtin_rules {
            RuleSet::vehicle_checklist()
        } else {
            RuleSet::default()
        };
        if let Some(path) = &self.rules {
            rules.merge(RuleSet::from_json_file(path)?);
        }
        rules.merge(RuleSet {
            ignore_list: self.ignore.iter().cloned().collect(),
            alias_rules: self.alias.iter().cloned().collect(),
            strict_ignore: self.strict_ignore,
        });
        Ok(rules)
    }
}

fn prompt_column_name() -> Result<String> {
    print!("Enter the name for the new column to indicate matches: ");
    io::stdout().flush().context("flushing prompt")?;
    read_column_name(&mut io::stdin().lock())
}

/// Read one line as the column name. Only the line ending is removed; the
/// name is otherwise kept exactly as typed.
fn read_column_name(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("reading column name")?;
    let name = line.trim_end_matches(['\r', '\n']).to_string();
    if name.trim().is_empty() {
        bail!("no column name given");
    }
    Ok(name)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let column_name = match &cli.column {
        Some(name) => name.clone(),
        None => prompt_column_name()?,
    };
    let rules = cli.rule_set()?;
    log::debug!(
        "{} ignored metrics, {} alias rules, strict_ignore={}",
        rules.ignore_list.len(),
        rules.alias_rules.len(),
        rules.strict_ignore
    );

    let job = AnnotationJob {
        primary: cli.primary,
        secondary: cli.secondary,
        output: cli.output,
        column_name,
        rules,
    };
    let summary = job
        .run()
        .with_context(|| format!("annotating {}", job.primary.display()))?;

    ConsoleShell.notify(Notice::info(summary.message()));
    Ok(())
}
