//! Value types produced by the theory generator.

use serde::{Deserialize, Serialize};

/// Harmonic role of an interval, used by presentation to colour notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalQuality {
    Root,
    Third,
    Fifth,
    Seventh,
    Extension,
}

/// A semitone distance from the root with its display names.
///
/// `semitones` may exceed 11 for compound intervals (9th = 14, 11th = 17,
/// 13th = 21).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub semitones: u8,
    pub name: &'static str,
    pub short_name: &'static str,
    pub quality: IntervalQuality,
}

/// A named sequence of semitone offsets from an implicit root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScalePattern {
    pub name: &'static str,
    pub intervals: &'static [u8],
    pub description: &'static str,
}

/// The nine base chord types with a registered formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordType {
    Major,
    Minor,
    Dim,
    Aug,
    Maj7,
    M7,
    Dom7,
    M7b5,
    Dim7,
}

impl ChordType {
    /// Every chord type, in the order the formula table lists them.
    pub const ALL: [ChordType; 9] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Dim,
        ChordType::Aug,
        ChordType::Maj7,
        ChordType::M7,
        ChordType::Dom7,
        ChordType::M7b5,
        ChordType::Dim7,
    ];

    /// Identifier used by the formula table and the shape catalog.
    pub fn key(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Dim => "dim",
            ChordType::Aug => "aug",
            ChordType::Maj7 => "maj7",
            ChordType::M7 => "m7",
            ChordType::Dom7 => "dom7",
            ChordType::M7b5 => "m7b5",
            ChordType::Dim7 => "dim7",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key.trim())
    }

    /// Plain triads name their extensions with `add` tokens (`Cadd9`);
    /// every other type lists them in parentheses (`C7(9)`).
    pub fn uses_add_tokens(self) -> bool {
        matches!(self, ChordType::Major | ChordType::Minor)
    }
}

/// Formula for one chord type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordFormula {
    pub chord_type: ChordType,
    pub name: &'static str,
    pub symbol: &'static str,
    pub intervals: &'static [u8],
    pub description: &'static str,
}

/// Scale computed for a root and a pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub root: String,
    #[serde(rename = "type")]
    pub pattern: String,
    pub notes: Vec<String>,
    pub intervals: Vec<Interval>,
}

/// Chord computed for a root, a chord type and optional extensions.
///
/// `notes` and `intervals` are parallel and ordered by semitone distance
/// from the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub root: String,
    pub chord_type: ChordType,
    pub symbol: String,
    pub detailed_name: String,
    pub notes: Vec<String>,
    pub intervals: Vec<Interval>,
}

/// Mode of a harmonic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonicMode {
    Major,
    Minor,
}

impl HarmonicMode {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "major" => Some(HarmonicMode::Major),
            "minor" => Some(HarmonicMode::Minor),
            _ => None,
        }
    }
}

/// One slot of a harmonic field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicDegree {
    pub degree: &'static str,
    pub chord_type: ChordType,
    pub chord: Chord,
}
