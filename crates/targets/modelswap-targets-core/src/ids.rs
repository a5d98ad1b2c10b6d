//! Target-type identifiers.
//!
//! Built-in identifiers are fixed constants. Extension identifiers carry the
//! reserved `custom:` prefix, so built-in vs extension is decidable by
//! inspecting the string alone, with no registry lookup on hot paths.

/// The player character.
pub const CHARACTER: &str = "Character";
/// The player's pet.
pub const PET: &str = "Pet";
/// Wildcard matching every AI character.
pub const ALL_AI_CHARACTERS: &str = "AllAICharacters";

/// Built-in target types in their fixed listing order.
pub const BUILTIN_TARGET_TYPES: [&str; 3] = [CHARACTER, PET, ALL_AI_CHARACTERS];

/// Reserved prefix distinguishing extension identifiers from built-ins.
pub const EXTENSION_PREFIX: &str = "custom:";

/// True if `id` names one of the fixed built-in target types.
#[inline]
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_TARGET_TYPES.contains(&id)
}

/// True if `id` carries the reserved extension prefix.
#[inline]
pub fn is_extension(id: &str) -> bool {
    id.starts_with(EXTENSION_PREFIX)
}

/// Normalize a raw extension identifier: trim, prepend the reserved prefix
/// if missing. Returns `None` when nothing but whitespace (or a bare prefix)
/// remains.
pub fn normalize_extension_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix(EXTENSION_PREFIX).unwrap_or(trimmed);
    if bare.trim().is_empty() {
        return None;
    }
    Some(format!("{EXTENSION_PREFIX}{bare}"))
}
