//! modelswap-api-core: shared animator parameter types and capability traits.
//!
//! This crate defines the boundary between the ModelSwap core and its host:
//! the host exposes a live animator as a table of named, typed parameters
//! (`Animator`), and the core reads/writes those parameters through it.

pub mod animator;
pub mod params;
pub mod value;

pub use animator::Animator;
pub use params::{ParamDescriptor, ParamKind};
pub use value::ParamValue;
