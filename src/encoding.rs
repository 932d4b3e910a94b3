//! Text encodings offered by the encoding selector
//!
//! Wraps `encoding_rs` so the rest of the crate never touches its API directly.
//! UTF-16 output is produced by hand since `encoding_rs` only encodes into
//! byte-oriented charsets (its UTF-16 encoders emit UTF-8).

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;

/// Labels shown in the selector when the config does not provide a list
pub const DEFAULT_ENCODING_LABELS: &[&str] = &[
    "UTF-8",
    "UTF-16LE",
    "UTF-16BE",
    "GBK",
    "GB18030",
    "Big5",
    "Shift_JIS",
    "EUC-KR",
    "windows-1252",
];

/// A character encoding a document can be read or written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextEncoding(&'static Encoding);

/// Result of decoding file bytes
#[derive(Debug)]
pub struct DecodedText<'a> {
    pub text: Cow<'a, str>,
    /// True when malformed sequences were replaced with U+FFFD
    pub had_errors: bool,
}

/// Result of encoding buffer text
#[derive(Debug)]
pub struct EncodedText<'a> {
    pub bytes: Cow<'a, [u8]>,
    /// True when some characters could not be represented
    pub had_unmappable: bool,
}

impl TextEncoding {
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    /// Look up an encoding by WHATWG label (case-insensitive, e.g. "utf-8", "gbk", "latin1")
    pub fn for_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.trim().as_bytes()).map(Self)
    }

    /// Canonical name, e.g. "UTF-8" or "Shift_JIS"
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn is_utf16(&self) -> bool {
        self.0 == encoding_rs::UTF_16LE || self.0 == encoding_rs::UTF_16BE
    }

    /// Decode raw file bytes, dropping a BOM that matches this encoding
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> DecodedText<'a> {
        let (text, had_errors) = self.0.decode_with_bom_removal(bytes);
        DecodedText { text, had_errors }
    }

    /// Encode text for writing. No BOM is emitted.
    pub fn encode<'a>(&self, text: &'a str) -> EncodedText<'a> {
        if self.0 == encoding_rs::UTF_16LE {
            let bytes = text.encode_utf16().flat_map(u16::to_le_bytes).collect();
            return EncodedText {
                bytes: Cow::Owned(bytes),
                had_unmappable: false,
            };
        }
        if self.0 == encoding_rs::UTF_16BE {
            let bytes = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
            return EncodedText {
                bytes: Cow::Owned(bytes),
                had_unmappable: false,
            };
        }

        let (bytes, _, had_unmappable) = self.0.encode(text);
        EncodedText {
            bytes,
            had_unmappable,
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a list of labels, skipping (and logging) unknown ones and duplicates
pub fn resolve_labels<S: AsRef<str>>(labels: &[S]) -> Vec<TextEncoding> {
    let mut resolved: Vec<TextEncoding> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.as_ref();
        match TextEncoding::for_label(label) {
            Some(enc) if !resolved.contains(&enc) => resolved.push(enc),
            Some(_) => tracing::debug!("Duplicate encoding label '{}' ignored", label),
            None => tracing::warn!("Unknown encoding label '{}' ignored", label),
        }
    }
    resolved
}
