use entity_sync::{
    ParamError, ParamKind, ParamList, ParamRegistry, ParamShadow, ParamValue, MAX_PARAMS,
};

#[test]
fn ordinals_are_assigned_in_registration_order() {
    let mut registry = ParamRegistry::new_root();
    let a = registry.register(ParamKind::Byte, ParamValue::Byte(0));
    let b = registry.register(ParamKind::Float, ParamValue::Float(0.0));
    let c = registry.register(ParamKind::Bool, ParamValue::Bool(false));

    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(c.index(), 2);
    assert_eq!(registry.len(), 3);
}

#[test]
fn derived_registries_preserve_base_ordinals() {
    let mut base = ParamRegistry::new_root();
    let flags = base.register(ParamKind::Byte, ParamValue::Byte(0));
    let health = base.register(ParamKind::Float, ParamValue::Float(1.0));

    let mut derived = ParamRegistry::derive(&base);
    let extra = derived.register(ParamKind::VarInt, ParamValue::VarInt(0));

    // Every base attribute keeps its ordinal in the derivation, and new
    // ordinals continue from the base's next-free slot.
    for descriptor in base.iter() {
        let mirrored = derived.descriptor(descriptor.index()).unwrap();
        assert_eq!(mirrored.index(), descriptor.index());
        assert_eq!(mirrored.kind(), descriptor.kind());
        assert_eq!(mirrored.default(), descriptor.default());
    }
    assert_eq!(extra.index(), 2);

    // Two registries derived from the same base share the prefix.
    let mut sibling = ParamRegistry::derive(&base);
    let sibling_extra = sibling.register(ParamKind::Bool, ParamValue::Bool(false));
    assert_eq!(sibling_extra.index(), extra.index());
    assert_eq!(sibling.descriptor(flags.index()).unwrap().kind(), ParamKind::Byte);
    assert_eq!(
        sibling.descriptor(health.index()).unwrap().kind(),
        ParamKind::Float
    );
}

#[test]
fn registry_overflow_is_a_configuration_error() {
    let mut registry = ParamRegistry::new_root();
    for _ in 0..MAX_PARAMS {
        registry
            .try_register(ParamKind::Byte, ParamValue::Byte(0))
            .unwrap();
    }
    assert_eq!(
        registry.try_register(ParamKind::Byte, ParamValue::Byte(0)),
        Err(ParamError::RegistryFull { max: MAX_PARAMS })
    );
}

#[test]
fn default_must_match_declared_kind() {
    let mut registry = ParamRegistry::new_root();
    assert_eq!(
        registry.try_register(ParamKind::Byte, ParamValue::Bool(true)),
        Err(ParamError::DefaultKindMismatch {
            declared: ParamKind::Byte,
            default: ParamKind::Bool,
        })
    );
}

#[test]
fn list_preserves_insertion_order_and_last_write_wins() {
    let mut registry = ParamRegistry::new_root();
    let a = registry.register(ParamKind::Byte, ParamValue::Byte(0));
    let b = registry.register(ParamKind::VarInt, ParamValue::VarInt(0));
    let c = registry.register(ParamKind::Bool, ParamValue::Bool(false));

    let mut list = ParamList::new();
    assert!(list.is_empty());
    list.set(c, ParamValue::Bool(true));
    list.set(a, ParamValue::Byte(1));
    list.set(c, ParamValue::Bool(false));
    list.set(b, ParamValue::VarInt(9));

    // c keeps its original position; only its value was overwritten.
    let entries: Vec<(u8, ParamValue)> = list
        .iter()
        .map(|(index, _, value)| (index, value.clone()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (c.index(), ParamValue::Bool(false)),
            (a.index(), ParamValue::Byte(1)),
            (b.index(), ParamValue::VarInt(9)),
        ]
    );
    assert_eq!(list.len(), 3);
}

#[test]
fn fill_defaults_completes_a_spawn_list() {
    let mut registry = ParamRegistry::new_root();
    let a = registry.register(ParamKind::Byte, ParamValue::Byte(7));
    let b = registry.register(ParamKind::Float, ParamValue::Float(20.0));

    let mut list = ParamList::new();
    list.set(a, ParamValue::Byte(1));
    list.fill_defaults(&registry);

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(a.index()), Some(&ParamValue::Byte(1)));
    assert_eq!(list.get(b.index()), Some(&ParamValue::Float(20.0)));
}

#[test]
fn shadow_stages_only_changes_and_commits_on_apply() {
    let mut registry = ParamRegistry::new_root();
    let a = registry.register(ParamKind::Byte, ParamValue::Byte(0));
    let b = registry.register(ParamKind::Bool, ParamValue::Bool(false));

    let mut shadow = ParamShadow::new(&registry);
    let mut list = ParamList::new();

    // Values equal to the baseline are suppressed.
    assert!(!shadow.set_if_changed(&mut list, a, ParamValue::Byte(0)));
    assert!(shadow.set_if_changed(&mut list, b, ParamValue::Bool(true)));
    assert_eq!(list.len(), 1);

    // Until applied, the shadow still reports the old baseline.
    assert_eq!(shadow.get(b), Some(&ParamValue::Bool(false)));
    shadow.apply(&list);
    assert_eq!(shadow.get(b), Some(&ParamValue::Bool(true)));

    // After the commit the same value no longer diffs.
    let mut second = ParamList::new();
    assert!(!shadow.set_if_changed(&mut second, b, ParamValue::Bool(true)));
    assert!(second.is_empty());
}
