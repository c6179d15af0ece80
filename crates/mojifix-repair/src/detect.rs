//! Statistical charset detection for short cell strings.
//!
//! The detector only distinguishes the families that occur in double-encoded
//! Latin text: plain ASCII, UTF-8 and the Latin-1/Windows-1252 pair. It is a
//! heuristic with calibrated confidences, not a general-purpose detector.

use crate::charset::Charset;

/// Result of a detection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub charset: Option<Charset>,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Detection {
    pub const NONE: Detection = Detection {
        charset: None,
        confidence: 0.0,
    };

    pub fn new(charset: Charset, confidence: f64) -> Self {
        Self {
            charset: Some(charset),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Seam for swapping the detector (tests pin confidences through it).
pub trait CharsetDetector {
    fn detect(&self, bytes: &[u8]) -> Detection;
}

impl<F> CharsetDetector for F
where
    F: Fn(&[u8]) -> Detection,
{
    fn detect(&self, bytes: &[u8]) -> Detection {
        self(bytes)
    }
}

/// Default detector: ASCII check, UTF-8 validity scoring, then the Latin-1
/// class-pair model.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicDetector;

impl CharsetDetector for HeuristicDetector {
    fn detect(&self, bytes: &[u8]) -> Detection {
        if bytes.is_empty() {
            return Detection::NONE;
        }
        if bytes.is_ascii() {
            return Detection::new(Charset::Ascii, 1.0);
        }
        if let Some(sequences) = utf8_multibyte_sequences(bytes) {
            return Detection::new(Charset::Utf8, utf8_confidence(sequences));
        }
        let charset = if bytes.iter().any(|b| (0x80..=0x9F).contains(b)) {
            Charset::Windows1252
        } else {
            Charset::Latin1
        };
        Detection::new(charset, latin1_confidence(bytes))
    }
}

const ONE_CHAR_PROB: f64 = 0.5;

fn utf8_confidence(sequences: usize) -> f64 {
    if sequences < 6 {
        1.0 - 0.99 * ONE_CHAR_PROB.powi(sequences as i32)
    } else {
        0.99
    }
}

/// Count multi-byte sequences if `bytes` is valid UTF-8.
fn utf8_multibyte_sequences(bytes: &[u8]) -> Option<usize> {
    let text = std::str::from_utf8(bytes).ok()?;
    Some(text.chars().filter(|c| c.len_utf8() > 1).count())
}

// Byte classes of the Latin-1 model.
const UDF: u8 = 0; // undefined in Windows-1252
const OTH: u8 = 1; // digits, punctuation, symbols
const ASC: u8 = 2; // ASCII capital
const ASS: u8 = 3; // ASCII small
const ACV: u8 = 4; // accented capital vowel
const ACO: u8 = 5; // accented capital other
const ASV: u8 = 6; // accented small vowel
const ASO: u8 = 7; // accented small other
const CLASS_NUM: usize = 8;

// Pair likelihood: 0 illegal, 1 very unlikely, 2 normal, 3 very likely.
#[rustfmt::skip]
const CLASS_MODEL: [u8; CLASS_NUM * CLASS_NUM] = [
//  UDF OTH ASC ASS ACV ACO ASV ASO
    0,  0,  0,  0,  0,  0,  0,  0, // UDF
    0,  3,  3,  3,  3,  3,  3,  3, // OTH
    0,  3,  3,  3,  3,  3,  3,  3, // ASC
    0,  3,  3,  3,  1,  1,  3,  3, // ASS
    0,  3,  3,  3,  1,  2,  1,  2, // ACV
    0,  3,  3,  3,  3,  3,  3,  3, // ACO
    0,  3,  1,  3,  1,  1,  1,  3, // ASV
    0,  3,  1,  3,  1,  1,  3,  3, // ASO
];

fn byte_class(b: u8) -> u8 {
    match b {
        b'A'..=b'Z' => ASC,
        b'a'..=b'z' => ASS,
        0x00..=0x7F => OTH,
        0x81 | 0x8D | 0x8F | 0x90 | 0x9D => UDF,
        0x8A | 0x8C | 0x8E | 0x9F => ACO,
        0x83 | 0x9A | 0x9C | 0x9E => ASO,
        0x80..=0xBF => OTH,
        0xC6 | 0xC7 | 0xD0 | 0xD1 | 0xDD..=0xDF => ACO,
        0xD7 | 0xF7 => OTH,
        0xC0..=0xDC => ACV,
        0xE6 | 0xE7 | 0xF0 | 0xF1 | 0xFD..=0xFF => ASO,
        0xE0..=0xFC => ASV,
    }
}

/// Latin-1 prober confidence, capped at 0.73 so a valid UTF-8 reading with
/// enough multi-byte sequences always wins.
fn latin1_confidence(bytes: &[u8]) -> f64 {
    const NOT_ME: f64 = 0.01;
    let mut freq = [0usize; 4];
    let mut last = OTH;
    for &b in bytes {
        let class = byte_class(b);
        let likelihood = CLASS_MODEL[last as usize * CLASS_NUM + class as usize];
        if likelihood == 0 {
            return NOT_ME;
        }
        freq[likelihood as usize] += 1;
        last = class;
    }
    let total: usize = freq.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let score = (freq[3] as f64 - freq[1] as f64 * 20.0) / total as f64;
    score.max(0.0) * 0.73
}
