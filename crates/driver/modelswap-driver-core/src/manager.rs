//! State-enter driver manager.
//!
//! Maps animation-state keys to driver lists and sound cues. The host's
//! state-machine callback calls `on_state_enter` with the live animator;
//! drivers bind lazily on their first invocation, enabled drivers apply in
//! insertion order, and the collected outputs fan out to every registered
//! observer before being returned.

use hashbrown::HashMap;

use modelswap_api_core::Animator;

use crate::driver::ParameterDriver;
use crate::events::{DriverEvent, DriverObserver, Outputs};

#[derive(Default)]
pub struct DriverManager {
    drivers: HashMap<String, Vec<ParameterDriver>>,
    cues: HashMap<String, Vec<String>>,
    observers: Vec<Box<dyn DriverObserver>>,
}

impl DriverManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_driver(&mut self, state: impl Into<String>, driver: ParameterDriver) {
        self.drivers.entry(state.into()).or_default().push(driver);
    }

    /// Register a sound cue emitted whenever `state` is entered.
    pub fn add_cue(&mut self, state: impl Into<String>, cue: impl Into<String>) {
        self.cues.entry(state.into()).or_default().push(cue.into());
    }

    pub fn add_observer(&mut self, observer: Box<dyn DriverObserver>) {
        self.observers.push(observer);
    }

    pub fn drivers_for(&self, state: &str) -> &[ParameterDriver] {
        self.drivers.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Handle one state-enter event: lazily bind, apply enabled drivers,
    /// emit cue events, notify observers, and return this tick's outputs.
    pub fn on_state_enter(&mut self, state: &str, animator: &mut dyn Animator) -> Outputs {
        let mut outputs = Outputs::default();
        outputs.push_event(DriverEvent::StateEntered {
            state: state.to_string(),
        });

        if let Some(drivers) = self.drivers.get_mut(state) {
            for driver in drivers.iter_mut() {
                driver.bind(animator);
                driver.apply(animator, &mut outputs);
            }
        }

        if let Some(cues) = self.cues.get(state) {
            for cue in cues {
                outputs.push_event(DriverEvent::CueTriggered { cue: cue.clone() });
            }
        }

        for observer in self.observers.iter_mut() {
            for change in &outputs.changes {
                observer.on_change(change);
            }
            for event in &outputs.events {
                observer.on_event(event);
            }
        }

        outputs
    }
}
