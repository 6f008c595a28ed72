use crate::{
    error::Result, from_bytes, simplify, test::builder::Builder, CompoundMap, Plain, PlainMap,
    Tag, Value,
};

#[test]
fn scalars_pass_through() {
    assert_eq!(simplify(&Value::Byte(-3)), Plain::Byte(-3));
    assert_eq!(simplify(&Value::Short(300)), Plain::Short(300));
    assert_eq!(simplify(&Value::Int(-70000)), Plain::Int(-70000));
    assert_eq!(simplify(&Value::Long(1 << 40)), Plain::Long(1 << 40));
    assert_eq!(simplify(&Value::Float(0.5)), Plain::Float(0.5));
    assert_eq!(simplify(&Value::Double(-2.75)), Plain::Double(-2.75));
    assert_eq!(
        simplify(&Value::String("abc".to_owned())),
        Plain::String("abc".to_owned())
    );
}

#[test]
fn arrays_stay_arrays() {
    assert_eq!(
        simplify(&Value::ByteArray(vec![1, 2])),
        Plain::ByteArray(vec![1, 2])
    );
    assert_eq!(simplify(&Value::IntArray(vec![3])), Plain::IntArray(vec![3]));
    assert_eq!(
        simplify(&Value::LongArray(vec![4])),
        Plain::LongArray(vec![4])
    );

    // An int array is not the same plain value as a list of ints.
    assert_ne!(
        simplify(&Value::IntArray(vec![1])),
        Plain::List(vec![Plain::Int(1)])
    );
}

#[test]
fn lists_drop_their_element_kind() {
    let list = Value::List(Tag::Int, vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(
        simplify(&list),
        Plain::List(vec![Plain::Int(1), Plain::Int(2)])
    );

    // Once simplified, an empty list of ints and an empty list of end are
    // indistinguishable.
    let ints = Value::List(Tag::Int, vec![]);
    let end = Value::List(Tag::End, vec![]);
    assert_eq!(simplify(&ints), Plain::List(vec![]));
    assert_eq!(simplify(&ints), simplify(&end));
}

#[test]
fn nested_values_simplify_recursively() {
    let tree = Value::List(
        Tag::List,
        vec![
            Value::List(Tag::Byte, vec![Value::Byte(1), Value::Byte(2)]),
            Value::List(Tag::Byte, vec![]),
        ],
    );

    assert_eq!(
        simplify(&tree),
        Plain::List(vec![
            Plain::List(vec![Plain::Byte(1), Plain::Byte(2)]),
            Plain::List(vec![]),
        ])
    );
}

#[test]
fn simplify_is_repeatable() {
    let tree = Value::Compound(CompoundMap::from_iter([
        (
            "a".to_owned(),
            Value::List(Tag::Byte, vec![Value::Byte(1)]),
        ),
        ("b".to_owned(), Value::IntArray(vec![7])),
    ]));
    let copy = tree.clone();

    assert_eq!(simplify(&tree), simplify(&tree));
    assert_eq!(tree, copy);
}

#[test]
fn document_simplify_covers_root() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .byte("a", 1)
        .string("b", "x")
        .end_compound()
        .build();

    let doc = from_bytes(&payload)?;
    let expected = PlainMap::from_iter([
        ("a".to_owned(), Plain::Byte(1)),
        ("b".to_owned(), Plain::String("x".to_owned())),
    ]);
    assert_eq!(doc.simplify(), expected);
    Ok(())
}

#[test]
fn plain_accessors() {
    assert_eq!(Plain::Byte(3).as_i64(), Some(3));
    assert_eq!(Plain::Float(1.5).as_f64(), Some(1.5));
    assert_eq!(Plain::String("x".to_owned()).as_str(), Some("x"));
    assert_eq!(Plain::List(vec![]).as_i64(), None);
    assert_eq!(Plain::Int(1).as_str(), None);
}

#[test]
fn json_projection() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .byte("hp", 20)
        .string("name", "flan")
        .start_list("pos", Tag::Double, 2)
        .double_payload(1.5)
        .double_payload(-2.0)
        .int_array("ids", &[1, 2, 3])
        .start_compound("stats")
        .long("xp", 1234567890123)
        .end_compound()
        .end_compound()
        .build();

    let doc = from_bytes(&payload)?;
    let plain = doc.simplify();

    assert_eq!(
        serde_json::to_value(&plain).unwrap(),
        serde_json::json!({
            "hp": 20,
            "name": "flan",
            "pos": [1.5, -2.0],
            "ids": [1, 2, 3],
            "stats": { "xp": 1234567890123i64 },
        })
    );
    Ok(())
}
