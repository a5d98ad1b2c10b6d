//! The apply interpreter.
//!
//! Dispatches one bound rule against the animator. Each operation matches
//! exhaustively over the destination kind; kinds an operation does not
//! handle are explicit no-op arms, and missing/unreadable sources abort the
//! write. Randomness comes from the thread-local generator; no seeding
//! contract is exposed.

use rand::Rng;

use modelswap_api_core::{Animator, ParamDescriptor, ParamKind, ParamValue};

use crate::driver::BoundRule;
use crate::events::{DriverEvent, Outputs, ParamChange};
use crate::rules::DriverOp;

/// Minimum source span for range conversion. Spans at or below this are
/// treated as degenerate and the raw value is copied unchanged, guarding the
/// affine remap against division by (near) zero.
pub const RANGE_EPSILON: f32 = f32::EPSILON;

impl BoundRule {
    /// Apply this rule to `animator`, recording what was written into
    /// `outputs`.
    pub fn apply(&self, animator: &mut dyn Animator, outputs: &mut Outputs) {
        match self.rule.kind {
            DriverOp::Set => self.apply_set(animator, outputs),
            DriverOp::Add => self.apply_add(animator, outputs),
            DriverOp::Random => self.apply_random(animator, outputs),
            DriverOp::Copy => self.apply_copy(animator, outputs),
        }
    }

    fn apply_set(&self, animator: &mut dyn Animator, outputs: &mut Outputs) {
        let name = &self.dest.name;
        match self.dest.kind {
            ParamKind::Float => {
                animator.write_float(name, self.rule.value);
                record(outputs, name, ParamValue::Float(self.rule.value));
            }
            ParamKind::Int => {
                let v = self.rule.value as i32;
                animator.write_int(name, v);
                record(outputs, name, ParamValue::Int(v));
            }
            ParamKind::Bool => {
                let v = self.rule.value > 0.0;
                animator.write_bool(name, v);
                record(outputs, name, ParamValue::Bool(v));
            }
            ParamKind::Trigger => {
                animator.fire_trigger(name);
                outputs.push_event(DriverEvent::TriggerFired { name: name.clone() });
            }
        }
    }

    fn apply_add(&self, animator: &mut dyn Animator, outputs: &mut Outputs) {
        let name = &self.dest.name;
        match self.dest.kind {
            ParamKind::Float => {
                let v = animator.read_float(name) + self.rule.value;
                animator.write_float(name, v);
                record(outputs, name, ParamValue::Float(v));
            }
            ParamKind::Int => {
                let v = animator.read_int(name) + self.rule.value as i32;
                animator.write_int(name, v);
                record(outputs, name, ParamValue::Int(v));
            }
            // Add has no meaning for Bool or Trigger.
            ParamKind::Bool | ParamKind::Trigger => {}
        }
    }

    fn apply_random(&self, animator: &mut dyn Animator, outputs: &mut Outputs) {
        let mut rng = rand::thread_rng();
        let name = &self.dest.name;
        let rule = &self.rule;
        match self.dest.kind {
            ParamKind::Float => {
                let v = if rule.value_max - rule.value_min > RANGE_EPSILON {
                    rng.gen_range(rule.value_min..rule.value_max)
                } else {
                    rule.value_min
                };
                animator.write_float(name, v);
                record(outputs, name, ParamValue::Float(v));
            }
            ParamKind::Int => {
                // value_max is inclusive for integer destinations.
                let lo = rule.value_min as i32;
                let hi = rule.value_max as i32;
                let v = if lo < hi { rng.gen_range(lo..=hi) } else { lo };
                animator.write_int(name, v);
                record(outputs, name, ParamValue::Int(v));
            }
            ParamKind::Bool => {
                let v = rng.gen::<f32>() < rule.chance;
                animator.write_bool(name, v);
                record(outputs, name, ParamValue::Bool(v));
            }
            ParamKind::Trigger => {
                if rng.gen::<f32>() < rule.chance {
                    animator.fire_trigger(name);
                    outputs.push_event(DriverEvent::TriggerFired { name: name.clone() });
                }
            }
        }
    }

    fn apply_copy(&self, animator: &mut dyn Animator, outputs: &mut Outputs) {
        let Some(source) = &self.source else {
            return;
        };
        let Some(raw) = read_scalar(animator, source) else {
            return;
        };
        let rule = &self.rule;
        let v = if rule.convert_range && (rule.source_max - rule.source_min).abs() > RANGE_EPSILON {
            remap(
                raw,
                rule.source_min,
                rule.source_max,
                rule.dest_min,
                rule.dest_max,
            )
        } else {
            raw
        };
        let name = &self.dest.name;
        match self.dest.kind {
            ParamKind::Float => {
                animator.write_float(name, v);
                record(outputs, name, ParamValue::Float(v));
            }
            ParamKind::Int => {
                let v = v as i32;
                animator.write_int(name, v);
                record(outputs, name, ParamValue::Int(v));
            }
            ParamKind::Bool => {
                let v = v > 0.0;
                animator.write_bool(name, v);
                record(outputs, name, ParamValue::Bool(v));
            }
            // A trigger cannot receive a copied value.
            ParamKind::Trigger => {}
        }
    }
}

/// Read a parameter's current value normalized to a scalar. Triggers have no
/// readable value, so a trigger source aborts the copy.
fn read_scalar(animator: &dyn Animator, source: &ParamDescriptor) -> Option<f32> {
    match source.kind {
        ParamKind::Float => Some(animator.read_float(&source.name)),
        ParamKind::Int => Some(animator.read_int(&source.name) as f32),
        ParamKind::Bool => Some(ParamValue::Bool(animator.read_bool(&source.name)).as_float()),
        ParamKind::Trigger => None,
    }
}

/// Affine remap of `value` from [source_min, source_max] to
/// [dest_min, dest_max]. Callers guard the source span against zero.
fn remap(value: f32, source_min: f32, source_max: f32, dest_min: f32, dest_max: f32) -> f32 {
    dest_min + (value - source_min) * (dest_max - dest_min) / (source_max - source_min)
}

fn record(outputs: &mut Outputs, name: &str, value: ParamValue) {
    outputs.push_change(ParamChange {
        name: name.to_string(),
        value,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_is_affine() {
        assert_eq!(remap(10.0, 0.0, 20.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(0.0, 0.0, 20.0, 0.0, 100.0), 0.0);
        assert_eq!(remap(20.0, 0.0, 20.0, 0.0, 100.0), 100.0);
        // Out-of-range inputs extrapolate; the interpreter does not clamp.
        assert_eq!(remap(30.0, 0.0, 20.0, 0.0, 100.0), 150.0);
        // Inverted destination ranges are legitimate.
        assert_eq!(remap(5.0, 0.0, 10.0, 1.0, 0.0), 0.5);
    }
}
