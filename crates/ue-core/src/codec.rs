//! UTF-8 ↔ internal codepage conversion.
//!
//! Documents are stored one byte per character. The internal codepage is
//! ISO-8859-1 with a handful of windows-1252 characters (curly quotes,
//! dashes, carons, ligatures, the euro sign) folded into the C1 range, and
//! the ASCII NAK control (0x15) standing for "not representable".
//!
//! Decoding is incremental: a [`Decoder`] is a small `Copy` state value that
//! is threaded through [`Decoder::step`] one input byte at a time, so file
//! loading and keyboard input can share it. Malformed input never fails; it
//! degrades to [`ERROR_BYTE`].

use crate::buffer::CapacityExceeded;

/// Internal byte used for the Unicode replacement character and for every
/// codepoint the internal codepage cannot represent.
pub const ERROR_BYTE: u8 = 0x15;

/// Codepoint produced by the decoder on malformed input.
pub const REPLACEMENT: u32 = 0xFFFD;

/// Codepoints that map to internal bytes other than themselves.
const CODEPAGE: [(u32, u8); 15] = [
    (0x2014, 0x97), // em dash
    (0x20AC, 0x80), // euro sign
    (0x0160, 0x8A), // S with caron
    (0x0161, 0x9A), // s with caron
    (0x017D, 0x8E), // Z with caron
    (0x017E, 0x9E), // z with caron
    (0x0152, 0x8C), // OE ligature
    (0x0153, 0x9C), // oe ligature
    (0x0178, 0x9F), // Y with diaeresis
    (0x2018, 0x91), // left single quotation mark
    (0x2019, 0x92), // right single quotation mark
    (0x201C, 0x93), // left double quotation mark
    (0x201D, 0x94), // right double quotation mark
    (0x2026, 0x85), // horizontal ellipsis
    (REPLACEMENT, ERROR_BYTE),
];

/// Maps a complete codepoint to its internal byte.
pub fn to_internal(codepoint: u32) -> u8 {
    CODEPAGE
        .iter()
        .find(|(cp, _)| *cp == codepoint)
        .map(|(_, byte)| *byte)
        .unwrap_or_else(|| u8::try_from(codepoint).unwrap_or(ERROR_BYTE))
}

/// Maps an internal byte back to the codepoint it stands for.
pub fn to_codepoint(byte: u8) -> u32 {
    CODEPAGE
        .iter()
        .find(|(_, b)| *b == byte)
        .map(|(cp, _)| *cp)
        .unwrap_or(u32::from(byte))
}

/// Incremental UTF-8 decoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoder {
    /// Continuation bytes still expected (0–3).
    pending: u8,
    /// Codepoint bits accumulated so far.
    codepoint: u32,
}

impl Decoder {
    /// Returns a decoder in the idle state.
    pub const fn new() -> Self {
        Self {
            pending: 0,
            codepoint: 0,
        }
    }

    /// Whether the decoder is between characters.
    pub fn is_idle(&self) -> bool {
        self.pending == 0
    }

    /// Feeds one byte and returns the next state plus a completed internal
    /// byte, if this input finished a character.
    #[must_use]
    pub fn step(self, byte: u8) -> (Self, Option<u8>) {
        match (self.pending, byte) {
            (0, b) if b & 0x80 == 0 => (Self::new(), Some(b)),
            (0, b) if b & 0xE0 == 0xC0 => (Self::lead(1, u32::from(b & 0x1F) << 6), None),
            (0, b) if b & 0xF0 == 0xE0 => (Self::lead(2, u32::from(b & 0x0F) << 12), None),
            (0, b) if b & 0xF8 == 0xF0 => (Self::lead(3, u32::from(b & 0x07) << 18), None),
            (n, b) if n > 0 && b & 0xC0 == 0x80 => {
                let codepoint = self.codepoint | (u32::from(b & 0x3F) << (6 * u32::from(n - 1)));
                if n == 1 {
                    (Self::new(), Some(to_internal(codepoint)))
                } else {
                    (Self::lead(n - 1, codepoint), None)
                }
            }
            _ => (Self::new(), Some(to_internal(REPLACEMENT))),
        }
    }

    fn lead(pending: u8, codepoint: u32) -> Self {
        Self { pending, codepoint }
    }
}

/// UTF-8 form of one internal byte (1 to 3 bytes long).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    buf: [u8; 4],
    len: usize,
}

impl Encoded {
    /// Returns the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Encodes one internal byte as UTF-8.
pub fn encode(byte: u8) -> Encoded {
    let ch = char::from_u32(to_codepoint(byte)).unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut buf = [0u8; 4];
    let len = ch.encode_utf8(&mut buf).len();
    Encoded { buf, len }
}

/// Appends the UTF-8 form of `byte` to `out`.
pub fn encode_into(byte: u8, out: &mut Vec<u8>) {
    out.extend_from_slice(encode(byte).as_bytes());
}

/// Encodes a run of internal bytes as UTF-8.
pub fn encode_slice(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        encode_into(b, &mut out);
    }
    out
}

/// Decodes a UTF-8 byte stream into internal bytes.
///
/// A trailing incomplete sequence is dropped.
pub fn decode_slice(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut decoder = Decoder::new();
    for &b in bytes {
        let (next, done) = decoder.step(b);
        decoder = next;
        out.extend(done);
    }
    if !decoder.is_idle() {
        tracing::debug!("dropped incomplete UTF-8 sequence at end of input");
    }
    out
}

/// Decodes like [`decode_slice`] but gives up once `limit` decoded bytes
/// have been produced.
///
/// # Errors
///
/// Returns [`CapacityExceeded`] when the output reaches `limit`, even if the
/// input ends exactly there.
pub fn decode_bounded(bytes: &[u8], limit: usize) -> Result<Vec<u8>, CapacityExceeded> {
    let mut out = Vec::new();
    let mut decoder = Decoder::new();
    for &b in bytes {
        if out.len() >= limit {
            break;
        }
        let (next, done) = decoder.step(b);
        decoder = next;
        out.extend(done);
    }
    if out.len() >= limit {
        return Err(CapacityExceeded {
            requested: bytes.len(),
            available: limit.saturating_sub(1),
        });
    }
    if !decoder.is_idle() {
        tracing::debug!("dropped incomplete UTF-8 sequence at end of file");
    }
    Ok(out)
}
