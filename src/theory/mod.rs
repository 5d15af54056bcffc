//! # Theory Module
//!
//! Builds scales, chords and harmonic fields from a root note and static
//! formula tables.
//!
//! ## Sub-modules
//! - `types` - Interval, Scale, Chord, ChordType, HarmonicDegree
//! - `tables` - interval registry, scale patterns, chord formulas, field tables
//! - `generator` - scale/chord/harmonic field construction
//! - `symbol` - chord symbol and long-name rules, symbol classification
//!
//! ## Fallbacks
//! Nothing here fails. An unknown root is carried through unchanged (every
//! "note" of its scale is the root itself), and an unknown scale pattern name
//! resolves to `Maior Natural`. Chord types are a closed enum; the
//! string-keyed wrapper in `api` reports unknown keys.
//!
//! ## Example
//! ```rust
//! use fretboard::theory::{generate_chord, generate_harmonic_field, ChordType, HarmonicMode};
//!
//! let chord = generate_chord("C", ChordType::Dom7, &[14]);
//! assert_eq!(chord.symbol, "C7(9)");
//! assert_eq!(chord.notes, vec!["C", "E", "G", "A#", "D"]);
//!
//! let field = generate_harmonic_field("C", HarmonicMode::Major);
//! assert_eq!(field[4].degree, "V");
//! assert_eq!(field[4].chord.symbol, "G7");
//! ```
//!
//! ## Related Modules
//! - `chromatic` - note arithmetic used for every generated note
//! - `guitar` - places chords and scales on the fretboard

mod generator;
mod symbol;
pub mod tables;
mod types;


pub use generator::{find_pattern, generate_chord, generate_harmonic_field, generate_scale};
pub use symbol::{chord_symbol, chord_type_from_symbol, detailed_name};
pub use types::{
    Chord, ChordFormula, ChordType, HarmonicDegree, HarmonicMode, Interval, IntervalQuality,
    Scale, ScalePattern,
};
