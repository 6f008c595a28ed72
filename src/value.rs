//! A fully-tagged tree of NBT values.

use crate::Tag;

/// The map type backing compounds.
///
/// An NBT compound does not define an order for its entries, so by default
/// this is a [`HashMap`](std::collections::HashMap). Enabling the
/// `preserve-order` feature swaps it for an
/// [`IndexMap`](https://docs.rs/indexmap/latest/indexmap/) that keeps entries
/// in the order they appeared in the document.
#[cfg(feature = "preserve-order")]
pub type CompoundMap = indexmap::IndexMap<String, Value>;

#[cfg(not(feature = "preserve-order"))]
pub type CompoundMap = std::collections::HashMap<String, Value>;

/// Value is a complete NBT value. It owns its data, and each variant
/// corresponds to exactly one [`Tag`] kind, so nothing the document encoded
/// is lost. In particular a list remembers the element kind it declared,
/// which is the only way an empty list can keep its kind.
///
/// There is no `End` variant: the end tag delimits compounds on the wire and
/// never carries a payload of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
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
    List(Tag, Vec<Value>),
    Compound(CompoundMap),
}

impl Value {
    /// The tag kind this value was decoded from.
    ///
    /// For lists this is [`Tag::List`], not the element kind.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::List(..) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Byte(v) => Some(v as u64),
            Value::Short(v) => Some(v as u64),
            Value::Int(v) => Some(v as u64),
            Value::Long(v) => Some(v as u64),
            Value::Float(v) => Some(v as u64),
            Value::Double(v) => Some(v as u64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}
