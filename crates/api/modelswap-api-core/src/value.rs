//! Runtime parameter values.
//!
//! `ParamValue` is the value a readable parameter holds at a point in time.
//! Triggers have no value and therefore no variant here.

use serde::{Deserialize, Serialize};

use crate::params::ParamKind;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ParamValue {
    Float(f32),
    Int(i32),
    Bool(bool),
}

impl ParamValue {
    /// Return the kind of this value.
    #[inline]
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Bool(_) => ParamKind::Bool,
        }
    }

    /// Normalize to a common scalar representation.
    /// Float as-is, Int widened, Bool as 1.0 / 0.0.
    #[inline]
    pub fn as_float(&self) -> f32 {
        match self {
            ParamValue::Float(f) => *f,
            ParamValue::Int(i) => *i as f32,
            ParamValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
