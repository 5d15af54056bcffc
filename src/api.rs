//! # Public API
//!
//! String-keyed entry points over the theory and guitar modules, for callers
//! that hold user input rather than typed values.
//!
//! ## Theory
//!
//! - [`compute_scale()`] - scale notes and intervals for a root and pattern name
//! - [`compute_chord()`] - chord from a chord type id plus extension semitones
//! - [`compute_harmonic_field()`] - seven diatonic seventh chords, `major` or `minor`
//!
//! ## Fretboard
//!
//! - [`compute_chord_diagram()`] - one shape placed at a root
//! - [`compute_chord_variation()`] - one of a chord type's shapes, index wrapping
//! - [`compute_scale_positions()`] - the five CAGED boxes of a list of scale notes
//! - [`compute_scale_positions_for_pattern()`] - the same boxes for a named scale
//! - [`note_at_fret()`] - pitch at a string and fret
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretboard::{compute_chord, compute_harmonic_field, compute_scale};
//!
//! let scale = compute_scale("A", "Menor Natural");
//! assert_eq!(scale.notes, vec!["A", "B", "C", "D", "E", "F", "G"]);
//!
//! let chord = compute_chord("C", "maj7", &[14, 21])?;
//! assert_eq!(chord.symbol, "Cmaj7(9,13)");
//!
//! let field = compute_harmonic_field("A", "minor")?;
//! assert_eq!(field[6].chord.symbol, "G7");
//! # Ok::<(), fretboard::FretboardError>(())
//! ```
//!
//! Chord diagrams take the shapes to draw. Use a
//! [`ShapeLibrary`](crate::catalog::ShapeLibrary) to resolve them from a
//! catalog with built-in fallback.

use crate::error::FretboardError;
use crate::guitar::{
    chord_diagram, chord_variation, scale_positions, ChordDiagram, ChordShape, ChordVariation,
    ScalePosition,
};
use crate::theory::{
    generate_chord, generate_harmonic_field, generate_scale, Chord, ChordType, HarmonicDegree,
    HarmonicMode, Scale,
};

pub use crate::guitar::note_at_fret;

/// Scale of `pattern` starting at `root`.
///
/// Unknown pattern names fall back to `Maior Natural`; an unknown root is
/// carried through as every note of the scale.
pub fn compute_scale(root: &str, pattern: &str) -> Scale {
    generate_scale(root, pattern)
}

/// Chord of the type registered as `chord_type` (`major`, `m7`, `dom7`, ...)
/// with extra semitones (`14` = 9, `17` = 11, `21` = 13).
///
/// # Errors
/// [`FretboardError::UnknownChordType`] when `chord_type` has no formula.
pub fn compute_chord(root: &str, chord_type: &str, extensions: &[u8]) -> Result<Chord, FretboardError> {
    let chord_type = ChordType::from_key(chord_type)
        .ok_or_else(|| FretboardError::UnknownChordType(chord_type.to_string()))?;
    Ok(generate_chord(root, chord_type, extensions))
}

/// Harmonic field of `root` in `mode` (`major` or `minor`).
///
/// # Errors
/// [`FretboardError::UnknownScaleMode`] for any other mode.
pub fn compute_harmonic_field(root: &str, mode: &str) -> Result<Vec<HarmonicDegree>, FretboardError> {
    let mode = HarmonicMode::from_key(mode)
        .ok_or_else(|| FretboardError::UnknownScaleMode(mode.to_string()))?;
    Ok(generate_harmonic_field(root, mode))
}

/// `shape` placed so its tonic sounds `root`.
pub fn compute_chord_diagram(root: &str, shape: &ChordShape) -> ChordDiagram {
    chord_diagram(root, shape)
}

/// Diagram of `shapes[index]`, where the index wraps in both directions.
/// `None` only when `shapes` is empty.
pub fn compute_chord_variation(root: &str, shapes: &[ChordShape], index: i64) -> Option<ChordVariation> {
    chord_variation(root, shapes, index)
}

/// The five CAGED positions of the scale made of `scale_notes`, with `root`
/// as its tonic. Frets whose pitch is not in `scale_notes` stay empty.
pub fn compute_scale_positions<S: AsRef<str>>(root: &str, scale_notes: &[S]) -> Vec<ScalePosition> {
    scale_positions(root, scale_notes)
}

/// [`compute_scale_positions()`] for the notes of the `pattern` scale at `root`.
pub fn compute_scale_positions_for_pattern(root: &str, pattern: &str) -> Vec<ScalePosition> {
    let scale = generate_scale(root, pattern);
    compute_scale_positions(root, &scale.notes)
}
