use std::{mem, str};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Tag,
};

/// Cursor over the raw document bytes.
///
/// Keeps the whole backing buffer and an offset into it rather than
/// re-slicing, so the number of bytes a decode step consumed is always
/// observable through [`position`](Input::position). The cursor only ever
/// moves forward.
pub(crate) struct Input<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Input<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Take the next `n` bytes, advancing the cursor past them.
    pub(crate) fn consume_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or_else(Error::unexpected_eof)?;
        if end > self.data.len() {
            return Err(Error::unexpected_eof());
        }
        let bs = &self.data[self.pos..end];
        self.pos = end;
        Ok(bs)
    }

    pub(crate) fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume_bytes(1)?[0])
    }

    pub(crate) fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub(crate) fn consume_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume_bytes(mem::size_of::<i16>())?;
        Ok(bs.read_i16::<BigEndian>()?)
    }

    pub(crate) fn consume_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume_bytes(mem::size_of::<i32>())?;
        Ok(bs.read_i32::<BigEndian>()?)
    }

    pub(crate) fn consume_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume_bytes(mem::size_of::<i64>())?;
        Ok(bs.read_i64::<BigEndian>()?)
    }

    pub(crate) fn consume_f32(&mut self) -> Result<f32> {
        let mut bs = self.consume_bytes(mem::size_of::<f32>())?;
        Ok(bs.read_f32::<BigEndian>()?)
    }

    pub(crate) fn consume_f64(&mut self) -> Result<f64> {
        let mut bs = self.consume_bytes(mem::size_of::<f64>())?;
        Ok(bs.read_f64::<BigEndian>()?)
    }

    pub(crate) fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    /// Length-prefixed string. The prefix is read as unsigned, so lengths
    /// above `i16::MAX` are still valid. The payload must be UTF-8.
    pub(crate) fn consume_str(&mut self) -> Result<String> {
        let mut bs = self.consume_bytes(mem::size_of::<u16>())?;
        let len = bs.read_u16::<BigEndian>()? as usize;
        let data = self.consume_bytes(len)?;
        let str = str::from_utf8(data).map_err(|_| Error::invalid_encoding(data))?;
        Ok(str.to_owned())
    }
}
