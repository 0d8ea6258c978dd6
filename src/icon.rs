//! Icon sources and the base64 encoding used on the wire.
//!
//! Icon bytes are opaque: any format macOS understands works, and nothing here
//! decodes or validates them. 16x16 pixels is the recommended size.

use std::{
    borrow::Cow,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use base64::Engine as _;

/// A small green indicator.
pub const STATUS_AVAILABLE: Icon = Icon::Bytes(Cow::Borrowed(include_bytes!(
    "../assets/status_available.png"
)));
/// A small clear indicator.
pub const STATUS_NONE: Icon = Icon::Bytes(Cow::Borrowed(include_bytes!(
    "../assets/status_none.png"
)));
/// A small yellow indicator.
pub const STATUS_PARTIALLY: Icon = Icon::Bytes(Cow::Borrowed(include_bytes!(
    "../assets/status_partially.png"
)));
/// A small red indicator.
pub const STATUS_UNAVAILABLE: Icon = Icon::Bytes(Cow::Borrowed(include_bytes!(
    "../assets/status_unavailable.png"
)));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Bytes held in memory.
    Bytes(Cow<'static, [u8]>),
    /// A file read once per render.
    File(PathBuf),
}

impl Icon {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Icon::Bytes(Cow::Owned(bytes.into()))
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Icon::File(path.into())
    }

    /// Drains `reader` into an in-memory icon.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Icon::from_bytes(buf))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Icon::Bytes(_) => None,
            Icon::File(path) => Some(path),
        }
    }

    pub fn load(&self) -> io::Result<Cow<'_, [u8]>> {
        match self {
            Icon::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            Icon::File(path) => fs::read(path).map(Cow::Owned),
        }
    }
}

/// Standard alphabet, padded.
pub fn encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD.decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_uses_padded_standard_alphabet() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(&[0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn built_in_status_icons_are_png() {
        for icon in [STATUS_AVAILABLE, STATUS_NONE, STATUS_PARTIALLY, STATUS_UNAVAILABLE] {
            let bytes = icon.load().unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        }
    }

    #[test]
    fn from_reader_drains_the_stream() {
        let icon = Icon::from_reader(&b"abc"[..]).unwrap();
        assert_eq!(icon, Icon::from_bytes(b"abc".to_vec()));
    }

    #[test]
    fn missing_file_fails_to_load() {
        let icon = Icon::from_file("/definitely/not/here.png");
        assert!(icon.load().is_err());
        assert_eq!(icon.path(), Some(Path::new("/definitely/not/here.png")));
    }
}
