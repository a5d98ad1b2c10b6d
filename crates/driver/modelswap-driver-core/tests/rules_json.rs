use modelswap_driver_core::{parse_parameter_rules_json, rules_to_json, DriverOp, ParamRule};

/// it should round-trip the persisted camelCase rule shape
#[test]
fn rule_list_roundtrip() {
    let rules = vec![
        ParamRule::set("Speed", 2.5),
        ParamRule::copy("D", "S").with_range(0.0, 20.0, 0.0, 100.0),
        ParamRule::random("Jump", 0.0, 0.0).with_chance(0.25),
    ];
    let json = rules_to_json(&rules).unwrap();
    let parsed = parse_parameter_rules_json(&json).unwrap();
    assert_eq!(parsed, rules);
}

#[test]
fn serialized_fields_are_camel_case() {
    let json = rules_to_json(&[ParamRule::copy("D", "S").with_range(0.0, 1.0, 0.0, 10.0)]).unwrap();
    for field in [
        "destName",
        "sourceName",
        "valueMin",
        "valueMax",
        "convertRange",
        "sourceMin",
        "sourceMax",
        "destMin",
        "destMax",
        "chance",
        "kind",
    ] {
        assert!(json.contains(field), "missing field {field} in {json}");
    }
}

#[test]
fn parse_preserves_rule_order() {
    let json = r#"[
        {"kind":"add","destName":"A"},
        {"kind":"set","destName":"B"},
        {"kind":"copy","destName":"C","sourceName":"A"}
    ]"#;
    let rules = parse_parameter_rules_json(json).unwrap();
    assert_eq!(
        rules.iter().map(|r| r.kind).collect::<Vec<_>>(),
        vec![DriverOp::Add, DriverOp::Set, DriverOp::Copy]
    );
    assert_eq!(rules[2].source_name, "A");
}

#[test]
fn empty_list_roundtrip() {
    let rules = parse_parameter_rules_json("[]").unwrap();
    assert!(rules.is_empty());
    assert_eq!(rules_to_json(&rules).unwrap(), "[]");
}
