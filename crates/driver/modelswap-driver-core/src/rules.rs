//! Declarative parameter rules.
//!
//! This is the persisted shape: a driver's rule list serializes as an
//! ordered JSON array of these objects, camelCase field names, with every
//! field optional in the data (`chance` defaults to 1.0, everything else to
//! zero/false/empty). Resolved parameter descriptors are runtime-only and
//! never serialized.

use serde::{Deserialize, Serialize};

/// Operation a rule performs on its destination parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverOp {
    Set,
    Add,
    Random,
    Copy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamRule {
    pub kind: DriverOp,
    /// Name of the parameter this rule writes. Blank drops the rule at bind.
    pub dest_name: String,
    /// Name of the parameter Copy reads. Ignored by the other operations.
    pub source_name: String,
    /// Literal operand for Set and Add.
    pub value: f32,
    /// Random range bounds. For Int destinations `value_max` is inclusive.
    pub value_min: f32,
    pub value_max: f32,
    /// Probability for Random on Bool/Trigger destinations.
    pub chance: f32,
    /// Enable linear remapping of the copied value from
    /// [source_min, source_max] to [dest_min, dest_max].
    pub convert_range: bool,
    pub source_min: f32,
    pub source_max: f32,
    pub dest_min: f32,
    pub dest_max: f32,
}

impl Default for ParamRule {
    fn default() -> Self {
        Self {
            kind: DriverOp::Set,
            dest_name: String::new(),
            source_name: String::new(),
            value: 0.0,
            value_min: 0.0,
            value_max: 0.0,
            chance: 1.0,
            convert_range: false,
            source_min: 0.0,
            source_max: 0.0,
            dest_min: 0.0,
            dest_max: 0.0,
        }
    }
}

impl ParamRule {
    /// Convenience constructors
    pub fn set(dest: impl Into<String>, value: f32) -> Self {
        Self {
            kind: DriverOp::Set,
            dest_name: dest.into(),
            value,
            ..Self::default()
        }
    }

    pub fn add(dest: impl Into<String>, value: f32) -> Self {
        Self {
            kind: DriverOp::Add,
            dest_name: dest.into(),
            value,
            ..Self::default()
        }
    }

    pub fn random(dest: impl Into<String>, value_min: f32, value_max: f32) -> Self {
        Self {
            kind: DriverOp::Random,
            dest_name: dest.into(),
            value_min,
            value_max,
            ..Self::default()
        }
    }

    pub fn copy(dest: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind: DriverOp::Copy,
            dest_name: dest.into(),
            source_name: source.into(),
            ..Self::default()
        }
    }

    pub fn with_chance(mut self, chance: f32) -> Self {
        self.chance = chance;
        self
    }

    /// Enable range conversion with the given source and destination bounds.
    pub fn with_range(
        mut self,
        source_min: f32,
        source_max: f32,
        dest_min: f32,
        dest_max: f32,
    ) -> Self {
        self.convert_range = true;
        self.source_min = source_min;
        self.source_max = source_max;
        self.dest_min = dest_min;
        self.dest_max = dest_max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chance_is_one() {
        let rule = ParamRule::default();
        assert_eq!(rule.chance, 1.0);
        assert!(!rule.convert_range);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let s = serde_json::to_string(&DriverOp::Random).unwrap();
        assert_eq!(s, r#""random""#);
    }
}
