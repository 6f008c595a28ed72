//! Projection of the tagged tree into plain values.

use serde::Serialize;

use crate::value::{CompoundMap, Value};

/// The map type backing simplified compounds. Follows the `preserve-order`
/// feature the same way [`CompoundMap`] does.
#[cfg(feature = "preserve-order")]
pub type PlainMap = indexmap::IndexMap<String, Plain>;

#[cfg(not(feature = "preserve-order"))]
pub type PlainMap = std::collections::HashMap<String, Plain>;

/// A plain NBT value: the same payloads as [`Value`] with the wire-layout
/// bookkeeping erased. A list is just a `Vec` of its elements and no longer
/// carries a declared element kind, so an empty list of ints and an empty
/// list of compounds simplify to the same thing.
///
/// The three array kinds stay distinct from lists. They are a different
/// shape on the wire and collapsing them would turn a compact `Vec<i32>`
/// into a vector of values.
///
/// `Plain` serializes untagged, so feeding it to a self-describing format
/// gives the nested structure most tools expect:
///
/// ```
/// use nbtree::{simplify, Plain, Value};
///
/// let list = Value::List(nbtree::Tag::Short, vec![Value::Short(3), Value::Short(9)]);
/// let plain = simplify(&list);
///
/// assert_eq!(plain, Plain::List(vec![Plain::Short(3), Plain::Short(9)]));
/// assert_eq!(serde_json::to_string(&plain).unwrap(), "[3,9]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Plain {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(Vec<Plain>),
    Compound(PlainMap),
}

impl Plain {
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Plain::Byte(v) => Some(v as i64),
            Plain::Short(v) => Some(v as i64),
            Plain::Int(v) => Some(v as i64),
            Plain::Long(v) => Some(v),
            Plain::Float(v) => Some(v as i64),
            Plain::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Plain::Byte(v) => Some(v as f64),
            Plain::Short(v) => Some(v as f64),
            Plain::Int(v) => Some(v as f64),
            Plain::Long(v) => Some(v as f64),
            Plain::Float(v) => Some(v as f64),
            Plain::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Plain::String(v) => Some(v),
            _ => None,
        }
    }
}

/// Simplify a single value, recursively.
///
/// The input is untouched and the result depends on nothing else, so
/// simplifying the same tree twice gives equal results.
pub fn simplify(value: &Value) -> Plain {
    match value {
        Value::Byte(v) => Plain::Byte(*v),
        Value::Short(v) => Plain::Short(*v),
        Value::Int(v) => Plain::Int(*v),
        Value::Long(v) => Plain::Long(*v),
        Value::Float(v) => Plain::Float(*v),
        Value::Double(v) => Plain::Double(*v),
        Value::String(v) => Plain::String(v.clone()),
        Value::ByteArray(v) => Plain::ByteArray(v.clone()),
        Value::IntArray(v) => Plain::IntArray(v.clone()),
        Value::LongArray(v) => Plain::LongArray(v.clone()),
        Value::List(_, items) => Plain::List(items.iter().map(simplify).collect()),
        Value::Compound(map) => Plain::Compound(simplify_compound(map)),
    }
}

/// Simplify every entry of a compound. [`Document::simplify`] uses this on
/// the root compound.
///
/// [`Document::simplify`]: crate::Document::simplify
pub fn simplify_compound(compound: &CompoundMap) -> PlainMap {
    compound
        .iter()
        .map(|(name, value)| (name.clone(), simplify(value)))
        .collect()
}
