//! Parameter kinds and descriptors.
//!
//! A descriptor names one entry in a live animator's parameter table. The
//! core holds descriptors for lookup and type dispatch only; it never owns
//! the underlying parameter, and descriptors are never persisted.

use serde::{Deserialize, Serialize};

/// The closed set of parameter kinds an animator exposes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Float,
    Int,
    Bool,
    Trigger,
}

impl ParamKind {
    /// True for kinds that carry a readable value (triggers are fire-only).
    #[inline]
    pub fn is_readable(&self) -> bool {
        !matches!(self, ParamKind::Trigger)
    }
}

/// A resolved entry in an animator's parameter table.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParamDescriptor {
    pub name: String,
    pub kind: ParamKind,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
