//! Output contracts for driver application.
//!
//! Outputs carry the parameter changes written during one state-enter event
//! plus a separate list of semantic events (trigger fires, sound cues).
//! Hosts apply sounds/dialogue from events; changes land in the animator
//! directly and are recorded here for observers and tests.

use serde::{Deserialize, Serialize};

use modelswap_api_core::ParamValue;

/// One parameter written during this state-enter event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamChange {
    pub name: String,
    pub value: ParamValue,
}

/// Discrete semantic signals emitted while applying drivers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DriverEvent {
    StateEntered { state: String },
    TriggerFired { name: String },
    CueTriggered { cue: String },
}

/// Outputs collected by `DriverManager::on_state_enter`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<ParamChange>,
    #[serde(default)]
    pub events: Vec<DriverEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: ParamChange) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: DriverEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}

/// Listener for driver activity. The manager fans every change and event out
/// to each registered observer after applying a state's drivers.
pub trait DriverObserver {
    fn on_change(&mut self, _change: &ParamChange) {}
    fn on_event(&mut self, _event: &DriverEvent) {}
}
