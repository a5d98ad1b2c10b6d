//! modelswap-driver-core: the animator parameter driver interpreter.
//!
//! A driver is an ordered list of declarative rules (Set/Add/Random/Copy)
//! that mutate a live animator's parameter table whenever an animation state
//! is entered. Rules are authored as data, bound once against a specific
//! animator instance (unresolvable rules are silently discarded for that
//! instance), and applied on every state-enter event thereafter. All failure
//! modes degrade to no-ops: this runs inside per-frame animation callbacks
//! where throwing would disrupt the host.

pub mod apply;
pub mod driver;
pub mod events;
pub mod loader;
pub mod manager;
pub mod rules;

pub use apply::RANGE_EPSILON;
pub use driver::{BindState, BoundRule, ParameterDriver};
pub use events::{DriverEvent, DriverObserver, Outputs, ParamChange};
pub use loader::{parse_parameter_rules_json, rules_to_json};
pub use manager::DriverManager;
pub use rules::{DriverOp, ParamRule};
