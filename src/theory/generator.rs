//! Scale, chord and harmonic field generation.

use super::symbol::{chord_symbol, detailed_name};
use super::tables::{interval_for, SCALE_PATTERNS};
use super::types::{Chord, ChordType, HarmonicDegree, HarmonicMode, Interval, Scale, ScalePattern};
use crate::chromatic::note_at_offset;

/// Scale pattern registered under `name`, or the first pattern when unknown.
pub fn find_pattern(name: &str) -> &'static ScalePattern {
    SCALE_PATTERNS
        .iter()
        .find(|p| p.name == name)
        .unwrap_or(&SCALE_PATTERNS[0])
}

/// Build the scale of `pattern_name` starting at `root`.
///
/// Unknown pattern names fall back to the first registered pattern
/// (`Maior Natural`).
pub fn generate_scale(root: &str, pattern_name: &str) -> Scale {
    let pattern = find_pattern(pattern_name);
    if pattern.name != pattern_name {
        log::debug!(
            "unknown scale pattern '{}', using '{}'",
            pattern_name,
            pattern.name
        );
    }

    Scale {
        root: root.to_string(),
        pattern: pattern.name.to_string(),
        notes: pattern
            .intervals
            .iter()
            .map(|&semitones| note_at_offset(root, semitones as i32))
            .collect(),
        intervals: pattern.intervals.iter().map(|&s| interval_for(s)).collect(),
    }
}

/// Build a chord from its base formula plus extra semitones.
///
/// The formula and the extensions are merged, deduplicated and sorted by
/// distance from the root; notes and intervals follow that order.
pub fn generate_chord(root: &str, chord_type: ChordType, extensions: &[u8]) -> Chord {
    let mut semitones: Vec<u8> = chord_type
        .formula()
        .intervals
        .iter()
        .chain(extensions.iter())
        .copied()
        .collect();
    semitones.sort_unstable();
    semitones.dedup();

    let intervals: Vec<Interval> = semitones.iter().map(|&s| interval_for(s)).collect();
    let notes = semitones
        .iter()
        .map(|&s| note_at_offset(root, s as i32))
        .collect();

    Chord {
        root: root.to_string(),
        chord_type,
        symbol: chord_symbol(root, chord_type, extensions),
        detailed_name: detailed_name(root, chord_type, extensions),
        notes,
        intervals,
    }
}

/// The seven diatonic seventh chords of `root` in `mode`.
pub fn generate_harmonic_field(root: &str, mode: HarmonicMode) -> Vec<HarmonicDegree> {
    let scale = generate_scale(root, mode.scale_pattern());

    mode.degrees()
        .iter()
        .zip(scale.notes.iter())
        .map(|(&(degree, chord_type), chord_root)| HarmonicDegree {
            degree,
            chord_type,
            chord: generate_chord(chord_root, chord_type, &[]),
        })
        .collect()
}
