//! modelswap-targets-core: the open-ended catalogue of model target types.
//!
//! A target type answers "what kind of entity can wear a model": the fixed
//! built-ins (player character, pet, the any-AI-character wildcard) plus
//! extension types registered at runtime, one per supported AI character or
//! user-defined category. Model-selection logic queries the registry's
//! compatibility sets to decide which models may be applied to which target.

pub mod ids;
pub mod registry;
pub mod selection;

pub use ids::{
    is_builtin, is_extension, normalize_extension_id, ALL_AI_CHARACTERS, BUILTIN_TARGET_TYPES,
    CHARACTER, EXTENSION_PREFIX, PET,
};
pub use registry::{DisplayNameFn, RegistryError, TargetTypeInfo, TargetTypeRegistry};
pub use selection::{model_applies_to, wearers_for_model};
