//! Fixture generation and JSON output.
//!
//! Walks the CJK Unified Ideographs block in ascending code-point order,
//! tags every glyph with a random palette index, and serializes the whole
//! document in one write.

use std::io::Write;

use rand::Rng;
use serde::Serialize;

use crate::palette::{STYLE_TABLE, StyleEntry};

/// First code point of the CJK Unified Ideographs block (U+4E00, '一').
pub const CJK_FIRST: char = '\u{4E00}';
/// Last code point of the block (U+9FFF).
pub const CJK_LAST: char = '\u{9FFF}';

/// One glyph with its assigned palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterEntry {
    #[serde(rename = "char")]
    pub glyph: char,
    /// Index into [`STYLE_TABLE`].
    pub color: u8,
}

/// The full output document: the palette plus one entry per code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSheet {
    pub style_table: &'static [StyleEntry],
    pub entries: Vec<CharacterEntry>,
}

/// Errors that can occur while emitting the fixture.
#[derive(Debug)]
pub enum OutputError {
    /// The document could not be serialized to JSON
    Serialize(serde_json::Error),
    /// The output sink rejected or failed during the write
    Write(std::io::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Serialize(e) => write!(f, "Failed to serialize fixture: {}", e),
            OutputError::Write(e) => write!(f, "Failed to write fixture: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Serialize(e) => Some(e),
            OutputError::Write(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Serialize(e)
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Write(e)
    }
}

/// Build the complete fixture document.
///
/// The glyph sequence is always the same; only the palette indices depend
/// on `rng`, so a seeded [`rand::rngs::StdRng`] reproduces a fixture
/// exactly.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> StyleSheet {
    let mut entries = Vec::with_capacity(CJK_LAST as usize - CJK_FIRST as usize + 1);
    for glyph in CJK_FIRST..=CJK_LAST {
        entries.push(CharacterEntry {
            glyph,
            color: rng.random_range(0..STYLE_TABLE.len() as u8),
        });
    }
    StyleSheet {
        style_table: STYLE_TABLE,
        entries,
    }
}

impl StyleSheet {
    /// Serialize compactly and write the whole document to `sink` in one
    /// operation. No indentation, no trailing newline.
    pub fn write_json<W: Write>(&self, mut sink: W) -> Result<(), OutputError> {
        let json = serde_json::to_string(self)?;
        sink.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Like [`write_json`](Self::write_json) but indented, for inspecting
    /// fixtures by hand.
    pub fn write_json_pretty<W: Write>(&self, mut sink: W) -> Result<(), OutputError> {
        let json = serde_json::to_string_pretty(self)?;
        sink.write_all(json.as_bytes())?;
        Ok(())
    }
}
