//! Fingering shape model.
//!
//! A [`ChordShape`] is a relative fingering template. Its six fret entries
//! are offsets from the shape's own reference position, ordered from the low
//! E string to the high e string. Sliding the whole template up the neck by
//! some number of semitones moves its tonic to another root.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chromatic::Note;

/// Strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Largest fret offset a shape may store.
pub const MAX_FRET: u8 = 24;

/// What one string does in a shape or on the fretboard.
///
/// The catalog documents encode this as an integer: `-1` muted, `0` open,
/// `n > 0` fretted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Fret {
    /// String is not played.
    Muted,
    /// String is played without a finger.
    Open,
    /// String is pressed at the given fret.
    Fretted(u8),
}

impl Fret {
    /// Fret at a number, with 0 meaning open.
    pub fn at(number: u8) -> Self {
        if number == 0 {
            Fret::Open
        } else {
            Fret::Fretted(number)
        }
    }

    /// Fret number (`0` for open), or `None` when muted.
    pub fn number(self) -> Option<u8> {
        match self {
            Fret::Muted => None,
            Fret::Open => Some(0),
            Fret::Fretted(n) => Some(n),
        }
    }

    /// Slide the position up by `semitones`. Muted strings stay muted.
    pub fn shifted(self, semitones: u8) -> Self {
        match self.number() {
            None => Fret::Muted,
            Some(n) => Fret::at(n.saturating_add(semitones)),
        }
    }

    pub fn is_muted(self) -> bool {
        self == Fret::Muted
    }
}

impl TryFrom<i8> for Fret {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Fret::Muted),
            0 => Ok(Fret::Open),
            n if n > 0 => Ok(Fret::Fretted(n as u8)),
            n => Err(format!("fret value {} is neither -1, 0 nor positive", n)),
        }
    }
}

impl From<Fret> for i8 {
    fn from(fret: Fret) -> Self {
        match fret {
            Fret::Muted => -1,
            Fret::Open => 0,
            Fret::Fretted(n) => n.min(i8::MAX as u8) as i8,
        }
    }
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fret::Muted => f.write_str("x"),
            Fret::Open => f.write_str("0"),
            Fret::Fretted(n) => write!(f, "{}", n),
        }
    }
}

/// The string carrying a shape's tonic. Encoded as the string number (6, 5 or 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BaseString {
    /// Low E string.
    Sixth,
    /// A string.
    Fifth,
    /// D string.
    Fourth,
}

impl BaseString {
    pub fn number(self) -> u8 {
        match self {
            BaseString::Sixth => 6,
            BaseString::Fifth => 5,
            BaseString::Fourth => 4,
        }
    }

    /// Index into a low-to-high string array.
    pub fn string_index(self) -> usize {
        STRING_COUNT - self.number() as usize
    }

    /// Open pitch of the string in standard tuning.
    pub fn open_note(self) -> Note {
        match self {
            BaseString::Sixth => Note::E,
            BaseString::Fifth => Note::A,
            BaseString::Fourth => Note::D,
        }
    }
}

impl TryFrom<u8> for BaseString {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(BaseString::Sixth),
            5 => Ok(BaseString::Fifth),
            4 => Ok(BaseString::Fourth),
            n => Err(format!("base string must be 6, 5 or 4, got {}", n)),
        }
    }
}

impl From<BaseString> for u8 {
    fn from(base: BaseString) -> Self {
        base.number()
    }
}

/// A relative fingering template.
///
/// Field names match the shape catalog documents (`baseString`, `frets`,
/// `fingers`, `rootFretOffset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub base_string: BaseString,
    pub frets: [Fret; STRING_COUNT],
    /// Suggested finger per string, 0 for none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingers: Option<[u8; STRING_COUNT]>,
    /// How many frets above the base string's open pitch the tonic sits
    /// in the template (the C shape's tonic is at fret 3 of the A string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_fret_offset: Option<u8>,
}

impl ChordShape {
    /// Shape from integer offsets in catalog encoding (`-1` muted, `0` open).
    ///
    /// Values below `-1` are treated as muted.
    pub fn new(base_string: BaseString, frets: [i8; STRING_COUNT]) -> Self {
        Self {
            name: None,
            base_string,
            frets: frets.map(|f| Fret::try_from(f).unwrap_or(Fret::Muted)),
            fingers: None,
            root_fret_offset: None,
        }
    }

    /// Empty template used when a new shape is added in the editor.
    pub fn blank() -> Self {
        Self {
            name: Some(String::new()),
            base_string: BaseString::Sixth,
            frets: [Fret::Open; STRING_COUNT],
            fingers: Some([0; STRING_COUNT]),
            root_fret_offset: Some(0),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_fingers(mut self, fingers: [u8; STRING_COUNT]) -> Self {
        self.fingers = Some(fingers);
        self
    }

    pub fn with_root_fret_offset(mut self, offset: u8) -> Self {
        self.root_fret_offset = Some(offset);
        self
    }

    /// Pitch class of the tonic as drawn in the template.
    pub fn reference_root(&self) -> Note {
        self.base_string
            .open_note()
            .transpose(self.root_fret_offset.unwrap_or(0) as i32)
    }

    /// Semitones the template must slide up so its tonic lands on `root`.
    pub fn shift_to(&self, root: Note) -> u8 {
        (root.index() as i32 - self.reference_root().index() as i32).rem_euclid(12) as u8
    }

    /// Frets on the neck once the template is slid up by `shift`.
    pub fn absolute_frets(&self, shift: u8) -> [Fret; STRING_COUNT] {
        self.frets.map(|f| f.shifted(shift))
    }

    /// Geometry checks applied before a shape is written to the catalog.
    pub fn validate(&self) -> Result<(), String> {
        if self.frets.iter().all(|f| f.is_muted()) {
            return Err("every string is muted".to_string());
        }
        for (string, fret) in self.frets.iter().enumerate() {
            if let Fret::Fretted(n) = fret {
                if *n > MAX_FRET {
                    return Err(format!(
                        "fret {} on string {} is beyond fret {}",
                        n,
                        STRING_COUNT - string,
                        MAX_FRET
                    ));
                }
            }
        }
        if let Some(fingers) = &self.fingers {
            for (string, finger) in fingers.iter().enumerate() {
                if *finger > 4 {
                    return Err(format!(
                        "finger {} on string {} is out of range 0-4",
                        finger,
                        STRING_COUNT - string
                    ));
                }
            }
        }
        if let Some(offset) = self.root_fret_offset {
            if offset > 11 {
                return Err(format!("root fret offset {} is beyond an octave", offset));
            }
        }
        Ok(())
    }
}
