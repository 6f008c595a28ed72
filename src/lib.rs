//! nbtree decodes NBT data from *Minecraft: Java Edition* into a tree of
//! values. This format is used by the game to store various things, such as
//! the world data and player inventories.
//!
//! * For the decoding entry points see [`from_bytes`] and
//!   [`from_bytes_with_opts`].
//! * For the fully-tagged tree the decoder produces see [`Value`].
//! * For stripping the tree down to plain nested values see
//!   [`simplify`](crate::simplify()) and [`Plain`].
//!
//! ```toml
//! [dependencies]
//! nbtree = "0.1"
//! ```
//!
//! Input that starts with the gzip magic bytes is inflated before decoding,
//! so compressed files like `level.dat` can be fed in directly.
//!
//! # Quick example
//!
//! Documents decode into a [`Document`]: the name of the root compound plus
//! its entries. Every value keeps the tag kind it had on the wire. When the
//! kinds are in the way, [`Document::simplify`] projects the tree down to
//! plain values, which serialize naturally into formats like JSON:
//!
//! ```
//! use nbtree::{from_bytes, Value};
//!
//! // A document holding {"hp": 20}, stored under the empty root name.
//! let doc = from_bytes(&[
//!     0x0a, 0x00, 0x00, // compound, name ""
//!     0x01, 0x00, 0x02, b'h', b'p', 0x14, // byte entry "hp" = 20
//!     0x00, // end
//! ])?;
//!
//! assert_eq!(doc.root["hp"], Value::Byte(20));
//! assert_eq!(doc.root["hp"].tag(), nbtree::Tag::Byte);
//!
//! let plain = doc.simplify();
//! assert_eq!(serde_json::to_value(&plain).unwrap(), serde_json::json!({"hp": 20}));
//! # Ok::<(), nbtree::error::Error>(())
//! ```

pub mod error;

mod de;
mod input;
mod simplify;
mod value;

pub use de::{from_bytes, from_bytes_with_opts, Document};
pub use simplify::{simplify, simplify_compound, Plain, PlainMap};
pub use value::{CompoundMap, Value};

#[cfg(test)]
mod test;

/// An NBT tag. This names the kind of a value, it does not carry the value
/// or the name of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    /// Marks the end of a Compound, and doubles as the element kind of some
    /// empty lists. Never the kind of an actual value.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A UTF-8 string.
    String = 8,
    /// A list of payloads sharing a single declared element kind.
    List = 9,
    /// A struct-like mapping of names to values.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
}

// The set of tags is fixed by the format, so the conversions are written out
// by hand rather than derived.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

/// Options for decoding NBT data.
///
/// ```
/// use nbtree::{from_bytes_with_opts, DecodeOpts};
///
/// let doc = from_bytes_with_opts(
///     &[0x0a, 0x00, 0x00, 0x00], // empty compound
///     DecodeOpts::new().max_seq_len(1024),
/// );
/// assert!(doc.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DecodeOpts {
    pub(crate) max_seq_len: usize,
}

impl DecodeOpts {
    /// Create options with the default limits.
    pub fn new() -> Self {
        Self {
            // The largest count a list or array can encode.
            max_seq_len: i32::MAX as usize,
        }
    }

    /// Set the maximum number of elements a single list or array may declare
    /// before decoding fails. Defaults to `i32::MAX`.
    pub fn max_seq_len(mut self, max: usize) -> Self {
        self.max_seq_len = max;
        self
    }
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self::new()
    }
}
