use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{AnnotateError, Result};

// ---------------------------------------------------------------------------
// RuleSet – overrides applied on top of plain membership
// ---------------------------------------------------------------------------

/// Overrides applied while classifying primary rows.
///
/// Loadable from JSON; every field is optional:
///
/// ```json
/// {
///   "ignore_list": ["bms_state_limits.count_chrg_status"],
///   "alias_rules": { "long.secondary.key": "primary_key" },
///   "strict_ignore": false
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSet {
    /// Metrics always classified `No`.
    pub ignore_list: BTreeSet<String>,
    /// Alternate secondary key → canonical primary key.
    pub alias_rules: BTreeMap<String, String>,
    /// When set, alias rules cannot flip an ignored metric back to `Yes`.
    pub strict_ignore: bool,
}

const VEHICLE_IGNORE_LIST: &[&str] = &[
    "bms_battery_health.count_battery_voltage",
    "bms_battery_health.count_battery_current",
    "bms_state_limits.count_chrg_status",
    "bms_state_limits.count_chrgr_highest_current",
    "bms_state_limits.count_chrgr_highest_voltage",
    "DC_DC_Conv_OutputCurrent.count__12Vconv_Outputcurrent",
];

const VEHICLE_ALIAS_RULES: &[(&str, &str)] = &[
    (
        "controller_motor_status_1_REAR.count_motorcontroller_1_controller_temp",
        "controller_motor_status_1_REAR",
    ),
    (
        "controller_motor_status_2_FRONT.count_motorcontroller_2_controller_temp",
        "controller_motor_status_2_FRONT",
    ),
];

impl RuleSet {
    /// Ignore list and controller aliases used for vehicle data-collection
    /// checklists.
    pub fn vehicle_checklist() -> Self {
        RuleSet {
            ignore_list: Self::vehicle_ignore_list(),
            alias_rules: Self::vehicle_alias_rules(),
            strict_ignore: false,
        }
    }

    pub fn vehicle_ignore_list() -> BTreeSet<String> {
        VEHICLE_IGNORE_LIST.iter().map(|s| s.to_string()).collect()
    }

    pub fn vehicle_alias_rules() -> BTreeMap<String, String> {
        VEHICLE_ALIAS_RULES
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect()
    }

    /// Read a rule set from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AnnotateError::RulesRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AnnotateError::RulesParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Add another rule set's entries to this one. `strict_ignore` is sticky.
    pub fn merge(&mut self, other: RuleSet) {
        self.ignore_list.extend(other.ignore_list);
        self.alias_rules.extend(other.alias_rules);
        self.strict_ignore |= other.strict_ignore;
    }

    pub fn is_ignored(&self, metric: &str) -> bool {
        self.ignore_list.contains(metric)
    }
}

/// Parse an `ALT=CANON` alias argument.
pub fn parse_alias(s: &str) -> std::result::Result<(String, String), String> {
    let (alias, canonical) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ALT=CANON, got '{s}'"))?;
    if alias.is_empty() || canonical.is_empty() {
        return Err(format!("both sides of '{s}' must be non-empty"));
    }
    Ok((alias.to_string(), canonical.to_string()))
}
