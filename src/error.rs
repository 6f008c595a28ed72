//! Contains the Error and Result type used by the decoder.

/// An error from decoding NBT data.
///
/// Carries a human readable message and a [`ErrorKind`] describing the
/// category of failure, so callers can react to the interesting cases
/// without parsing message strings.
#[derive(Debug, Clone)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// The category of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to new variants.
    Other,

    /// EOF that occurred part way through some NBT value.
    UnexpectedEof,

    /// A tag byte outside of the valid range was found where a tag was
    /// expected.
    InvalidTag,

    /// Expected UTF-8 string data but it was not valid.
    InvalidEncoding,

    /// The document did not start with a compound tag.
    NoRootCompound,

    /// The input looked like gzip data but did not inflate cleanly.
    Decompression,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == ErrorKind::UnexpectedEof
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".to_owned(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", tag),
            kind: ErrorKind::InvalidTag,
        }
    }

    pub(crate) fn invalid_encoding(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid nbt string, expected utf-8: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::InvalidEncoding,
        }
    }

    pub(crate) fn no_root_compound(tag: u8) -> Self {
        Self {
            msg: format!("invalid nbt: no root compound, found tag {}", tag),
            kind: ErrorKind::NoRootCompound,
        }
    }

    pub(crate) fn invalid_size(size: i32) -> Self {
        Self {
            msg: format!("invalid nbt: negative size: {}", size),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn decompression(e: std::io::Error) -> Self {
        Self {
            msg: format!("could not inflate gzip data: {}", e),
            kind: ErrorKind::Decompression,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::unexpected_eof(),
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Other,
            },
        }
    }
}
