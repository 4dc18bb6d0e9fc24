use structpack_meta::{
    EnumDef, EnumEntry, FieldDef, MetaRegistry, StructDef, TypeId,
};
use structpack_serialize::{
    SerializeError, ValueVisitor, VariantSerializer, VariantSerializerOptions,
};
use structpack_variant::Variant;

fn meta() -> MetaRegistry {
    let mut meta = MetaRegistry::new();
    meta.add_enum(EnumDef::new(
        "test.Switch",
        vec![EnumEntry::new("OFF", 0), EnumEntry::new("ON", 1)],
    ));
    meta.add_struct(StructDef::new(
        "test.Item",
        vec![FieldDef::new(TypeId::Int32, "x")],
    ));
    meta.add_struct(StructDef::new(
        "test.Doc",
        vec![
            FieldDef::new(TypeId::String, "name"),
            FieldDef::with_type_name(TypeId::ArrayStruct, "items", "test.Item"),
            FieldDef::with_type_name(TypeId::Enum, "state", "test.Switch"),
        ],
    ));
    meta
}

fn doc_def(meta: &MetaRegistry) -> &StructDef {
    meta.struct_def("test.Doc").unwrap()
}

#[test]
fn nested_array_struct_builds_ordered_list() {
    let meta = meta();
    let mut sink = VariantSerializer::new(&meta);
    let items = FieldDef::with_type_name(TypeId::ArrayStruct, "items", "test.Item");
    let item = FieldDef::with_type_name(TypeId::Struct, "item", "test.Item");
    let x = FieldDef::new(TypeId::Int32, "x");

    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_array_struct(&items).unwrap();
    sink.enter_struct(&item).unwrap();
    sink.enter_int32(&x, 5).unwrap();
    sink.exit_struct(&item).unwrap();
    sink.enter_struct(&item).unwrap();
    sink.enter_int32(&x, 6).unwrap();
    sink.exit_struct(&item).unwrap();
    sink.exit_array_struct(&items).unwrap();
    sink.finished().unwrap();

    let tree = sink.into_variant();
    assert_eq!(
        tree,
        Variant::Struct(vec![(
            "items".into(),
            Variant::List(vec![
                Variant::Struct(vec![("x".into(), Variant::Int32(5))]),
                Variant::Struct(vec![("x".into(), Variant::Int32(6))]),
            ]),
        )])
    );
    assert_eq!(tree.get_path("items.1.x"), Some(&Variant::Int32(6)));
}

#[test]
fn enum_as_string_resolves_alias() {
    let meta = meta();
    let state = FieldDef::with_type_name(TypeId::Enum, "state", "test.Switch");

    let mut sink = VariantSerializer::new(&meta);
    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_enum(&state, 1).unwrap();
    sink.finished().unwrap();
    assert_eq!(
        sink.into_variant().get("state"),
        Some(&Variant::Str("ON".into()))
    );
}

#[test]
fn enum_as_int_keeps_raw_value() {
    let meta = meta();
    let state = FieldDef::with_type_name(TypeId::Enum, "state", "test.Switch");
    let options = VariantSerializerOptions {
        enum_as_string: false,
        ..Default::default()
    };

    let mut sink = VariantSerializer::with_options(&meta, options);
    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_enum(&state, 1).unwrap();
    sink.enter_enum_name(&state, "OFF").unwrap();
    sink.finished().unwrap();

    let tree = sink.into_variant();
    assert_eq!(
        tree,
        Variant::Struct(vec![
            ("state".into(), Variant::Int32(1)),
            ("state".into(), Variant::Int32(0)),
        ])
    );
}

#[test]
fn unknown_enum_value_aborts_traversal() {
    let meta = meta();
    let state = FieldDef::with_type_name(TypeId::Enum, "state", "test.Switch");
    let mut sink = VariantSerializer::new(&meta);
    sink.start_struct(doc_def(&meta)).unwrap();
    let err = sink.enter_enum(&state, 7).unwrap_err();
    assert!(matches!(err, SerializeError::Meta(_)));
}

#[test]
fn enum_arrays_follow_the_policy_element_wise() {
    let meta = meta();
    let states = FieldDef::with_type_name(TypeId::ArrayEnum, "states", "test.Switch");

    let mut sink = VariantSerializer::new(&meta);
    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_array_enum(&states, &[1, 0, 1]).unwrap();
    sink.finished().unwrap();
    assert_eq!(
        sink.into_variant().get("states"),
        Some(&Variant::ArrayString(vec![
            "ON".into(),
            "OFF".into(),
            "ON".into(),
        ]))
    );

    let options = VariantSerializerOptions {
        enum_as_string: false,
        ..Default::default()
    };
    let mut sink = VariantSerializer::with_options(&meta, options);
    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_array_enum_names(&states, &["ON".into(), "OFF".into()])
        .unwrap();
    sink.finished().unwrap();
    assert_eq!(
        sink.into_variant().get("states"),
        Some(&Variant::ArrayInt32(vec![1, 0]))
    );
}

#[test]
fn coercion_applies_before_insertion() {
    let meta = meta();
    let mut sink = VariantSerializer::new(&meta);
    let x = FieldDef::new(TypeId::Int32, "x");
    let name = FieldDef::new(TypeId::String, "name");

    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_double(&x, 7.8).unwrap();
    sink.enter_int32(&name, 42).unwrap();
    sink.finished().unwrap();

    let tree = sink.into_variant();
    assert_eq!(tree.get("x"), Some(&Variant::Int32(7)));
    assert_eq!(tree.get("name"), Some(&Variant::Str("42".into())));
}

#[test]
fn stack_underflow_leaves_builder_usable() {
    let meta = meta();
    let mut sink = VariantSerializer::new(&meta);
    let child = FieldDef::with_type_name(TypeId::Struct, "child", "test.Item");
    let x = FieldDef::new(TypeId::Int32, "x");

    sink.start_struct(doc_def(&meta)).unwrap();
    sink.exit_struct(&child).unwrap(); // closes the root
    sink.exit_struct(&child).unwrap(); // empty stack: no-op
    sink.enter_int32(&x, 5).unwrap(); // current undefined: ignored
    sink.finished().unwrap();

    assert_eq!(sink.into_variant(), Variant::Struct(vec![]));
}

#[test]
fn raw_string_decodes_into_text() {
    let meta = meta();
    let mut sink = VariantSerializer::new(&meta);
    let name = FieldDef::new(TypeId::String, "name");

    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_string_raw(&name, b"caf\xc3\xa9").unwrap();
    sink.finished().unwrap();
    assert_eq!(
        sink.into_variant().get("name"),
        Some(&Variant::Str("café".into()))
    );
}

#[test]
fn mismatched_container_fields_vanish_from_the_tree() {
    let meta = meta();
    let mut sink = VariantSerializer::new(&meta);
    let bogus = FieldDef::new(TypeId::Int32, "bogus");
    let x = FieldDef::new(TypeId::Int32, "x");

    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_struct(&bogus).unwrap(); // dropped by the adapter
    sink.enter_int32(&x, 1).unwrap(); // still lands in the root
    sink.exit_struct(&bogus).unwrap(); // dropped as well
    sink.finished().unwrap();

    assert_eq!(
        sink.into_variant(),
        Variant::Struct(vec![("x".into(), Variant::Int32(1))])
    );
}

#[test]
fn skip_flag_passes_through_without_suppression() {
    let meta = meta();
    let options = VariantSerializerOptions {
        skip_default_values: true,
        ..Default::default()
    };
    let mut sink = VariantSerializer::with_options(&meta, options);
    let x = FieldDef::new(TypeId::Int32, "x");

    sink.start_struct(doc_def(&meta)).unwrap();
    sink.enter_int32(&x, 0).unwrap();
    sink.finished().unwrap();
    assert_eq!(
        sink.into_variant().get("x"),
        Some(&Variant::Int32(0))
    );
}
