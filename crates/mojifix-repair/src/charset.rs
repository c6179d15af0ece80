//! The small set of single-byte and UTF-8 codecs the repairer knows about.
//!
//! Decoding here is always *strict*: a codec either accepts the whole byte
//! slice or reports failure with `None`. Lossy decoding only happens in
//! [`force_utf8`], which the repairer reserves for its last resort.

use std::fmt;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::ConfigError;

/// A character set the detector may report and the fallback chain may try.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Charset {
    Ascii,
    Utf8,
    /// ISO-8859-1: every byte maps to the code point with the same value.
    Latin1,
    Windows1252,
}

impl Charset {
    /// Canonical label, as reported by the detector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Utf8 => "utf-8",
            Self::Latin1 => "iso-8859-1",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// Resolve a user-facing label (case-insensitive).
    ///
    /// `latin1`, `latin-1`, `l1` and `iso-8859-1` all name the same codec.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "ascii" | "us-ascii" => Some(Self::Ascii),
            "utf-8" | "utf8" => Some(Self::Utf8),
            "latin1" | "latin-1" | "l1" | "iso-8859-1" | "iso8859-1" => Some(Self::Latin1),
            "windows-1252" | "cp1252" => Some(Self::Windows1252),
            _ => None,
        }
    }

    /// Strict decode of the whole slice.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Ascii => bytes
                .is_ascii()
                .then(|| String::from_utf8_lossy(bytes).into_owned()),
            Self::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
            Self::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
            Self::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Charset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ConfigError::UnknownCharset(s.to_string()))
    }
}

/// Decode as UTF-8, substituting U+FFFD for every malformed sequence.
pub fn force_utf8(bytes: &[u8]) -> String {
    let (text, _had_errors) = UTF_8.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Parse a list of labels into a fallback chain, rejecting unknown names.
pub fn parse_chain<I, S>(labels: I) -> Result<Vec<Charset>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels.into_iter().map(|l| l.as_ref().parse()).collect()
}
