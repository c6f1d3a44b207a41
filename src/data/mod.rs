/// Data layer: tables, rules, annotation and CSV I/O.
///
/// Architecture:
/// ```text
///  primary.csv      secondary.csv
///        │                │
///        ▼                ▼
///   ┌──────────────────────────┐
///   │  loader   read_table()   │  parse CSV → Table
///   └──────────────────────────┘
///        │                │
///        │                ▼
///        │         Metric set  (+ RuleSet: ignore list, aliases)
///        ▼                │
///   ┌──────────────────────────┐
///   │  annotate                │  classify each primary row → Yes / No
///   └──────────────────────────┘
///        │
///        ▼
///   loader   write_table()  → output.csv
/// ```

pub mod annotate;
pub mod loader;
pub mod model;
pub mod rules;
