//! Rule-list (de)serialization.
//!
//! Drivers persist as an ordered JSON array of rule objects (see
//! `rules::ParamRule` for the field set). Omitted fields take their
//! defaults, so hand-authored configs stay terse.

use crate::rules::ParamRule;

/// Parse a persisted rule list.
pub fn parse_parameter_rules_json(s: &str) -> Result<Vec<ParamRule>, String> {
    serde_json::from_str(s).map_err(|e| format!("rule list parse error: {e}"))
}

/// Serialize a rule list into the persisted shape.
pub fn rules_to_json(rules: &[ParamRule]) -> Result<String, String> {
    serde_json::to_string(rules).map_err(|e| format!("rule list serialize error: {e}"))
}
