//! Model-applicability queries.
//!
//! A model is authored against one target type. A wearer may apply it when
//! the wearer's compatibility set contains that target type: every type
//! wears models authored for itself, and an extension additionally wears
//! models authored for each built-in it declared compatibility with.

use crate::ids::{is_builtin, normalize_extension_id};
use crate::registry::TargetTypeRegistry;

/// True if a model authored for `model_target` may be applied to `wearer`.
pub fn model_applies_to(
    registry: &mut TargetTypeRegistry,
    model_target: &str,
    wearer: &str,
) -> bool {
    let trimmed = model_target.trim();
    let target = if is_builtin(trimmed) {
        trimmed.to_string()
    } else {
        match normalize_extension_id(trimmed) {
            Some(t) => t,
            None => return false,
        }
    };
    registry.compatible_types(wearer).contains(&target)
}

/// All available target types that may wear a model authored for
/// `model_target`, in listing order.
pub fn wearers_for_model(registry: &mut TargetTypeRegistry, model_target: &str) -> Vec<String> {
    registry
        .list_all_available_target_types()
        .into_iter()
        .filter(|wearer| model_applies_to(registry, model_target, wearer))
        .collect()
}
