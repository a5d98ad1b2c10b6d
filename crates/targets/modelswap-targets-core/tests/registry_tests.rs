use modelswap_targets_core::{
    model_applies_to, wearers_for_model, TargetTypeRegistry, ALL_AI_CHARACTERS,
    BUILTIN_TARGET_TYPES, CHARACTER, PET,
};

/// it should prefix unprefixed ids on register and find them via lookup
#[test]
fn register_then_lookup_returns_prefixed_info() {
    let mut reg = TargetTypeRegistry::new();
    let id = reg.register("Rascal", &[], None).unwrap();
    assert_eq!(id, "custom:Rascal");

    let info = reg.lookup("Rascal").expect("lookup via unprefixed id");
    assert_eq!(info.id(), "custom:Rascal");
    let info = reg.lookup("custom:Rascal").expect("lookup via prefixed id");
    assert_eq!(info.id(), "custom:Rascal");
}

/// it should not double-prefix an already-prefixed id
#[test]
fn register_prefixed_id_does_not_double_prefix() {
    let mut reg = TargetTypeRegistry::new();
    let id = reg.register("custom:Rascal", &[], None).unwrap();
    assert_eq!(id, "custom:Rascal");
}

#[test]
fn register_blank_id_is_rejected() {
    let mut reg = TargetTypeRegistry::new();
    assert!(reg.register("", &[], None).is_err());
    assert!(reg.register("   ", &[], None).is_err());
    assert!(reg.register("custom:", &[], None).is_err());
}

/// it should reject a duplicate registration and keep the first entry intact
#[test]
fn duplicate_registration_fails_and_registry_is_unchanged() {
    let mut reg = TargetTypeRegistry::new();
    reg.register("Rascal", &[CHARACTER], None).unwrap();

    // Same resulting id, once unprefixed and once prefixed.
    assert!(reg.register("Rascal", &[PET], None).is_err());
    assert!(reg.register("custom:Rascal", &[PET], None).is_err());

    let info = reg.lookup("Rascal").unwrap();
    assert_eq!(info.compatible_builtins(), &[CHARACTER.to_string()]);
    assert_eq!(reg.list_all_available_target_types().len(), 4);
}

#[test]
fn builtins_are_registered_without_entries() {
    let reg = TargetTypeRegistry::new();
    for id in BUILTIN_TARGET_TYPES {
        assert!(reg.is_registered(id));
        assert!(reg.lookup(id).is_none());
    }
    assert!(!reg.is_registered("custom:Unknown"));
}

#[test]
fn compatible_types_of_builtin_is_singleton() {
    let mut reg = TargetTypeRegistry::new();
    for id in BUILTIN_TARGET_TYPES {
        let set = reg.compatible_types(id);
        assert_eq!(set.len(), 1, "builtin {id}");
        assert!(set.contains(id));
    }
}

#[test]
fn compatible_types_includes_declared_valid_builtins() {
    let mut reg = TargetTypeRegistry::new();
    reg.register("Rascal", &[CHARACTER, PET], None).unwrap();

    let set = reg.compatible_types("custom:Rascal");
    assert_eq!(set.len(), 3);
    assert!(set.contains("custom:Rascal"));
    assert!(set.contains(CHARACTER));
    assert!(set.contains(PET));
}

/// it should exclude declared compatibilities that do not name a builtin
#[test]
fn compatible_types_excludes_invalid_builtins() {
    let mut reg = TargetTypeRegistry::new();
    reg.register("Rascal", &[CHARACTER, "NotABuiltin"], None)
        .unwrap();

    let set = reg.compatible_types("Rascal");
    assert_eq!(set.len(), 2);
    assert!(set.contains("custom:Rascal"));
    assert!(set.contains(CHARACTER));
    assert!(!set.contains("NotABuiltin"));
}

#[test]
fn compatible_types_of_blank_id_is_empty() {
    let mut reg = TargetTypeRegistry::new();
    assert!(reg.compatible_types("").is_empty());
    assert!(reg.compatible_types("  ").is_empty());
}

/// it should hand out defensive copies of cached compatibility sets
#[test]
fn mutating_returned_set_does_not_corrupt_cache() {
    let mut reg = TargetTypeRegistry::new();
    reg.register("Rascal", &[CHARACTER], None).unwrap();

    let mut first = reg.compatible_types("Rascal");
    first.clear();
    first.insert("bogus".to_string());

    let second = reg.compatible_types("Rascal");
    assert_eq!(second.len(), 2);
    assert!(second.contains("custom:Rascal"));
    assert!(second.contains(CHARACTER));
}

#[test]
fn unregister_unknown_returns_false() {
    let mut reg = TargetTypeRegistry::new();
    assert!(!reg.unregister("Rascal"));
    assert!(!reg.unregister(""));
}

/// it should invalidate the cache on unregister so re-registration with
/// different data recomputes
#[test]
fn reregistration_recomputes_compatibility() {
    let mut reg = TargetTypeRegistry::new();
    reg.register("Rascal", &[CHARACTER], None).unwrap();
    let set = reg.compatible_types("Rascal");
    assert!(set.contains(CHARACTER));
    assert!(!set.contains(PET));

    assert!(reg.unregister("Rascal"));
    assert!(reg.lookup("Rascal").is_none());

    reg.register("Rascal", &[PET], None).unwrap();
    let set = reg.compatible_types("Rascal");
    assert!(set.contains(PET));
    assert!(!set.contains(CHARACTER));
}

#[test]
fn listing_is_builtins_then_registration_order() {
    let mut reg = TargetTypeRegistry::new();
    reg.register("Beta", &[], None).unwrap();
    reg.register("Alpha", &[], None).unwrap();

    let all = reg.list_all_available_target_types();
    assert_eq!(
        all,
        vec![
            CHARACTER.to_string(),
            PET.to_string(),
            ALL_AI_CHARACTERS.to_string(),
            "custom:Beta".to_string(),
            "custom:Alpha".to_string(),
        ]
    );
}

#[test]
fn display_name_resolves_or_falls_back() {
    let mut reg = TargetTypeRegistry::new();
    reg.register(
        "Rascal",
        &[],
        Some(Box::new(|lang: &str| {
            if lang == "ja" {
                "ラスカル".to_string()
            } else {
                "Rascal the Raccoon".to_string()
            }
        })),
    )
    .unwrap();
    reg.register("Plain", &[], None).unwrap();

    assert_eq!(reg.display_name("Rascal", "en"), "Rascal the Raccoon");
    assert_eq!(reg.display_name("Rascal", "ja"), "ラスカル");
    assert_eq!(reg.display_name("Plain", "en"), "custom:Plain");
    assert_eq!(reg.display_name(CHARACTER, "en"), CHARACTER);
}

#[test]
fn model_applicability_follows_compatibility_sets() {
    let mut reg = TargetTypeRegistry::new();
    reg.register("Rascal", &[ALL_AI_CHARACTERS], None).unwrap();

    // Every type wears models authored for itself.
    assert!(model_applies_to(&mut reg, CHARACTER, CHARACTER));
    assert!(model_applies_to(&mut reg, "Rascal", "custom:Rascal"));
    // The extension inherits models authored for its declared builtins.
    assert!(model_applies_to(&mut reg, ALL_AI_CHARACTERS, "Rascal"));
    // But not the other builtins, and never the reverse direction.
    assert!(!model_applies_to(&mut reg, PET, "Rascal"));
    assert!(!model_applies_to(&mut reg, "Rascal", ALL_AI_CHARACTERS));

    let wearers = wearers_for_model(&mut reg, ALL_AI_CHARACTERS);
    assert_eq!(
        wearers,
        vec![ALL_AI_CHARACTERS.to_string(), "custom:Rascal".to_string()]
    );
}
