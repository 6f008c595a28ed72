//! Decoding of NBT documents into [`Value`] trees. The entry points are
//! [`from_bytes`] and [`from_bytes_with_opts`].

use std::io::Read;
use std::mem;

use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;
use log::debug;

use crate::error::{Error, Result};
use crate::input::Input;
use crate::simplify::{simplify_compound, PlainMap};
use crate::value::{CompoundMap, Value};
use crate::{DecodeOpts, Tag};

/// First two bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A decoded NBT document: the root compound and the name it was stored
/// under. The root name is usually the empty string, but it is part of the
/// wire format so it is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub root: CompoundMap,
}

impl Document {
    /// Simplify every entry of the root compound. See
    /// [`simplify`](crate::simplify()).
    pub fn simplify(&self) -> PlainMap {
        simplify_compound(&self.root)
    }
}

/// Decode a complete NBT document from `input` with default options.
///
/// If the input starts with the gzip magic bytes it is inflated first,
/// otherwise it is decoded as-is. The document must start with a named
/// compound tag. Bytes after the end of the root compound are ignored.
pub fn from_bytes(input: &[u8]) -> Result<Document> {
    from_bytes_with_opts(input, DecodeOpts::new())
}

/// Decode a complete NBT document from `input`. See [`from_bytes`].
pub fn from_bytes_with_opts(input: &[u8], opts: DecodeOpts) -> Result<Document> {
    if input.starts_with(&GZIP_MAGIC) {
        let mut data = vec![];
        GzDecoder::new(input)
            .read_to_end(&mut data)
            .map_err(Error::decompression)?;
        debug!(
            "inflated gzip document: {} -> {} bytes",
            input.len(),
            data.len()
        );
        return Decoder::new(&data, opts).document();
    }

    Decoder::new(input, opts).document()
}

struct Decoder<'a> {
    input: Input<'a>,
    opts: DecodeOpts,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8], opts: DecodeOpts) -> Self {
        Self {
            input: Input::new(data),
            opts,
        }
    }

    fn document(&mut self) -> Result<Document> {
        let tag = self.input.consume_tag()?;
        if tag != Tag::Compound {
            return Err(Error::no_root_compound(tag.into()));
        }

        let name = self.input.consume_str()?;
        let root = self.compound()?;
        Ok(Document { name, root })
    }

    /// Decode one payload of the given kind. The tag byte and, for compound
    /// entries, the name have already been consumed by the caller.
    fn value(&mut self, tag: Tag) -> Result<Value> {
        match tag {
            Tag::Byte => Ok(Value::Byte(self.input.consume_i8()?)),
            Tag::Short => Ok(Value::Short(self.input.consume_i16()?)),
            Tag::Int => Ok(Value::Int(self.input.consume_i32()?)),
            Tag::Long => Ok(Value::Long(self.input.consume_i64()?)),
            Tag::Float => Ok(Value::Float(self.input.consume_f32()?)),
            Tag::Double => Ok(Value::Double(self.input.consume_f64()?)),
            Tag::String => Ok(Value::String(self.input.consume_str()?)),
            Tag::ByteArray => {
                let size = self.seq_len()?;
                let bs = self.input.consume_bytes(size)?;
                Ok(Value::ByteArray(bs.iter().map(|&b| b as i8).collect()))
            }
            Tag::IntArray => {
                let size = self.seq_len()?;
                let mut bs = self
                    .input
                    .consume_bytes(payload_size(size, mem::size_of::<i32>())?)?;

                let mut data = Vec::with_capacity(size);
                for _ in 0..size {
                    data.push(bs.read_i32::<BigEndian>()?);
                }
                Ok(Value::IntArray(data))
            }
            Tag::LongArray => {
                let size = self.seq_len()?;
                let mut bs = self
                    .input
                    .consume_bytes(payload_size(size, mem::size_of::<i64>())?)?;

                let mut data = Vec::with_capacity(size);
                for _ in 0..size {
                    data.push(bs.read_i64::<BigEndian>()?);
                }
                Ok(Value::LongArray(data))
            }
            Tag::List => {
                let element_tag = self.input.consume_tag()?;
                let size = self.seq_len()?;

                // Some old chunks store empty lists as a 'list of end', so if
                // the size is zero we let it slide.
                if element_tag == Tag::End && size != 0 {
                    return Err(Error::bespoke(
                        "unexpected list of type 'end' with nonzero size",
                    ));
                }

                // The declared size is wire data. Elements hit EOF before a
                // lying size gets anywhere, so let the vec grow as they
                // actually arrive.
                let mut items = vec![];
                for _ in 0..size {
                    items.push(self.value(element_tag)?);
                }
                Ok(Value::List(element_tag, items))
            }
            Tag::Compound => Ok(Value::Compound(self.compound()?)),
            // Lists of end with nonzero size are rejected above, and an end
            // tag inside a compound terminates it without a name or payload,
            // so a payload decode never starts from an end tag.
            Tag::End => Err(Error::bespoke("unexpected end tag, expected a value payload")),
        }
    }

    /// Decode the entries of a compound. The opening compound tag (and name,
    /// if any) have already been consumed; this reads up to and including the
    /// end tag.
    fn compound(&mut self) -> Result<CompoundMap> {
        let mut compound = CompoundMap::new();

        loop {
            let tag = self.input.consume_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.input.consume_str()?;
            let value = self.value(tag)?;

            // Repeated names are not really valid NBT, but decoding them is
            // harmless: the last entry wins.
            compound.insert(name, value);
        }

        Ok(compound)
    }

    /// Read a list or array element count, rejecting negative counts and
    /// counts above the configured maximum.
    fn seq_len(&mut self) -> Result<usize> {
        let size = self.input.consume_i32()?;
        if size < 0 {
            return Err(Error::invalid_size(size));
        }

        let size = size as usize;
        if size > self.opts.max_seq_len {
            return Err(Error::bespoke(format!(
                "size ({}) greater than max sequence length ({})",
                size, self.opts.max_seq_len,
            )));
        }

        Ok(size)
    }
}

fn payload_size(size: usize, multiplier: usize) -> Result<usize> {
    size.checked_mul(multiplier)
        .ok_or_else(|| Error::bespoke("size too large"))
}
