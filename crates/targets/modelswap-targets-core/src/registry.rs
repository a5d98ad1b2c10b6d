//! The target-type registry.
//!
//! Extensions register here at runtime; built-ins are known a priori and
//! never occupy an entry. Entries keep registration order. Compatibility
//! sets ("this type plus every built-in it declares compatibility with")
//! are computed lazily and cached per identifier; any (re)registration or
//! unregistration of an identifier invalidates its cache entry.
//!
//! Single-threaded by design: the host engine's frame update owns the
//! registry and is the only mutator.

use std::fmt;

use hashbrown::{HashMap, HashSet};
use log::trace;
use thiserror::Error;

use crate::ids::{is_builtin, normalize_extension_id};

/// Pure resolver from a language tag to a human-readable name.
pub type DisplayNameFn = Box<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("target type id is empty or whitespace")]
    EmptyId,
    #[error("target type '{0}' is already registered")]
    AlreadyRegistered(String),
}

/// One registered extension target type. Immutable after registration.
pub struct TargetTypeInfo {
    id: String,
    compatible_builtins: Vec<String>,
    display_name: Option<DisplayNameFn>,
}

impl TargetTypeInfo {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Compatible built-ins exactly as declared at registration. Entries
    /// that do not name a valid built-in are kept here but excluded from
    /// compatibility sets.
    pub fn compatible_builtins(&self) -> &[String] {
        &self.compatible_builtins
    }

    /// Resolve the display name for a language tag, falling back to the
    /// identifier itself when no resolver was supplied.
    pub fn display_name(&self, lang: &str) -> String {
        match &self.display_name {
            Some(resolve) => resolve(lang),
            None => self.id.clone(),
        }
    }
}

impl fmt::Debug for TargetTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetTypeInfo")
            .field("id", &self.id)
            .field("compatible_builtins", &self.compatible_builtins)
            .field("display_name", &self.display_name.is_some())
            .finish()
    }
}

/// Registry of extension target types plus the derived compatibility cache.
#[derive(Default)]
pub struct TargetTypeRegistry {
    entries: Vec<TargetTypeInfo>,
    compat_cache: HashMap<String, HashSet<String>>,
}

impl TargetTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, id: &str) -> Option<&TargetTypeInfo> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Register an extension target type. The identifier is prefix-normalized
    /// first; blank input is a validation error and an already-registered
    /// identifier is a conflict. Returns the normalized identifier.
    pub fn register(
        &mut self,
        id: &str,
        compatible_builtins: &[&str],
        display_name: Option<DisplayNameFn>,
    ) -> Result<String, RegistryError> {
        let id = normalize_extension_id(id).ok_or(RegistryError::EmptyId)?;
        if self.find(&id).is_some() {
            return Err(RegistryError::AlreadyRegistered(id));
        }
        // Invalidate any compatibility set cached before this registration
        // (possible when the id was queried while still unknown).
        self.compat_cache.remove(&id);
        self.entries.push(TargetTypeInfo {
            id: id.clone(),
            compatible_builtins: compatible_builtins.iter().map(|s| s.to_string()).collect(),
            display_name,
        });
        trace!("registered target type '{id}'");
        Ok(id)
    }

    /// Remove an extension target type. Idempotent: removing an absent
    /// identifier returns false.
    pub fn unregister(&mut self, id: &str) -> bool {
        let Some(id) = normalize_extension_id(id) else {
            return false;
        };
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(pos);
        self.compat_cache.remove(&id);
        trace!("unregistered target type '{id}'");
        true
    }

    /// True if `id` is a built-in or a registered extension.
    pub fn is_registered(&self, id: &str) -> bool {
        if is_builtin(id.trim()) {
            return true;
        }
        match normalize_extension_id(id) {
            Some(id) => self.find(&id).is_some(),
            None => false,
        }
    }

    /// Look up the info for a registered extension, or `None` for unknown or
    /// blank identifiers. Built-ins carry no info entry.
    pub fn lookup(&self, id: &str) -> Option<&TargetTypeInfo> {
        let id = normalize_extension_id(id)?;
        self.find(&id)
    }

    /// The set `{id} ∪ {declared compatible built-ins}` for an extension, or
    /// the singleton `{id}` for a built-in. Blank input yields an empty set.
    /// Extension results are cached; callers receive their own copy, so
    /// mutating it never corrupts the cache.
    pub fn compatible_types(&mut self, id: &str) -> HashSet<String> {
        let trimmed = id.trim();
        if is_builtin(trimmed) {
            let mut set = HashSet::new();
            set.insert(trimmed.to_string());
            return set;
        }
        let Some(id) = normalize_extension_id(trimmed) else {
            return HashSet::new();
        };
        if let Some(cached) = self.compat_cache.get(&id) {
            return cached.clone();
        }
        let mut set = HashSet::new();
        set.insert(id.clone());
        if let Some(info) = self.find(&id) {
            for builtin in &info.compatible_builtins {
                if is_builtin(builtin) {
                    set.insert(builtin.clone());
                }
            }
        }
        self.compat_cache.insert(id, set.clone());
        set
    }

    /// Display name for any identifier: extensions resolve through their
    /// registered resolver, everything else falls back to the identifier.
    pub fn display_name(&self, id: &str, lang: &str) -> String {
        match self.lookup(id) {
            Some(info) => info.display_name(lang),
            None => id.trim().to_string(),
        }
    }

    /// Built-ins in fixed order, then extensions in registration order.
    pub fn list_all_available_target_types(&self) -> Vec<String> {
        crate::ids::BUILTIN_TARGET_TYPES
            .iter()
            .map(|s| s.to_string())
            .chain(self.entries.iter().map(|e| e.id.clone()))
            .collect()
    }
}
