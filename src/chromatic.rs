//! # Chromatic Model
//!
//! The twelve pitch classes in their fixed, circular, sharp-spelled order:
//! `C C# D D# E F F# G G# A A# B`.
//!
//! Spelling is never normalised. `Db` is not a member of the table, so any
//! lookup of it behaves like any other unknown symbol: the string-facing
//! helpers pass it through unchanged instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of pitch classes in the chromatic scale.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Sharp-based spelling of each chromatic index.
pub const CHROMATIC_SCALE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch class of the chromatic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl Note {
    /// All pitch classes in chromatic order, starting at C.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Parse a chromatic symbol such as `"C"` or `"F#"`.
    ///
    /// Only the exact sharp spelling is recognised.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        index_of(symbol).map(|i| Self::ALL[i])
    }

    /// Note at any integer index, wrapping around the octave in both directions.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(SEMITONES_PER_OCTAVE) as usize]
    }

    /// Position in the chromatic scale (C = 0 ... B = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        CHROMATIC_SCALE[self.index()]
    }

    /// Move up (positive) or down (negative) by a number of semitones.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(self.index() as i32 + semitones)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Chromatic index of a note symbol, or `None` when it is not in the table.
pub fn index_of(note: &str) -> Option<usize> {
    CHROMATIC_SCALE.iter().position(|n| *n == note)
}

/// Note `semitones` away from `root`.
///
/// Offsets wrap modulo 12 in both directions. An unrecognised `root` is
/// returned unchanged.
///
/// # Example
/// ```
/// use fretboard::chromatic::note_at_offset;
///
/// assert_eq!(note_at_offset("A", 3), "C");
/// assert_eq!(note_at_offset("C", -1), "B");
/// assert_eq!(note_at_offset("Db", 4), "Db");
/// ```
pub fn note_at_offset(root: &str, semitones: i32) -> String {
    match Note::from_symbol(root) {
        Some(note) => note.transpose(semitones).symbol().to_string(),
        None => root.to_string(),
    }
}
