//! Driver lifecycle and one-shot binding.
//!
//! A driver starts `Unbound` holding its authored rules. The first `bind`
//! against an animator resolves each rule's parameter names in list order,
//! silently dropping rules whose destination (or, for Copy, source) is blank
//! or absent from the parameter table. The survivors become the active rule
//! list, `enabled` records whether any survived, and the driver enters
//! `Bound`, a terminal state. Drop decisions are permanent for this
//! instance; later binds are no-ops even against a different parameter set.

use log::debug;

use modelswap_api_core::{Animator, ParamDescriptor};

use crate::events::Outputs;
use crate::rules::{DriverOp, ParamRule};

/// Binding lifecycle. `Bound` is entered exactly once and never left.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BindState {
    Unbound,
    Bound,
}

impl Default for BindState {
    fn default() -> Self {
        BindState::Unbound
    }
}

/// A rule that survived binding, with its resolved descriptors. Descriptors
/// are lookup handles into the animator's table, not owned parameters.
#[derive(Clone, Debug)]
pub struct BoundRule {
    pub rule: ParamRule,
    pub dest: ParamDescriptor,
    pub source: Option<ParamDescriptor>,
}

#[derive(Debug, Default)]
pub struct ParameterDriver {
    rules: Vec<ParamRule>,
    active: Vec<BoundRule>,
    state: BindState,
    enabled: bool,
}

impl ParameterDriver {
    pub fn new(rules: Vec<ParamRule>) -> Self {
        Self {
            rules,
            active: Vec::new(),
            state: BindState::Unbound,
            enabled: false,
        }
    }

    #[inline]
    pub fn state(&self) -> BindState {
        self.state
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.state == BindState::Bound
    }

    /// True once bound with at least one surviving rule.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Rules that survived binding, in authored order. Empty before bind.
    pub fn active_rules(&self) -> &[BoundRule] {
        &self.active
    }

    /// Resolve this driver's rules against `animator`. Idempotent: only the
    /// first call filters; the authored rule list is consumed by it.
    pub fn bind(&mut self, animator: &dyn Animator) {
        if self.state == BindState::Bound {
            return;
        }
        let rules = std::mem::take(&mut self.rules);
        for rule in rules {
            if rule.dest_name.trim().is_empty() {
                debug!("dropping rule with blank destination");
                continue;
            }
            let Some(dest) = animator.find_parameter(&rule.dest_name) else {
                debug!("dropping rule: no parameter '{}'", rule.dest_name);
                continue;
            };
            let source = if rule.kind == DriverOp::Copy {
                if rule.source_name.trim().is_empty() {
                    debug!("dropping copy rule '{}': blank source", rule.dest_name);
                    continue;
                }
                let Some(source) = animator.find_parameter(&rule.source_name) else {
                    debug!(
                        "dropping copy rule '{}': no source parameter '{}'",
                        rule.dest_name, rule.source_name
                    );
                    continue;
                };
                Some(source)
            } else {
                None
            };
            self.active.push(BoundRule { rule, dest, source });
        }
        self.enabled = !self.active.is_empty();
        self.state = BindState::Bound;
    }

    /// Apply every active rule in order. No-op unless bound and enabled.
    pub fn apply(&self, animator: &mut dyn Animator, outputs: &mut Outputs) {
        if !self.enabled {
            return;
        }
        for rule in &self.active {
            rule.apply(animator, outputs);
        }
    }
}
