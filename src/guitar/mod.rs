//! # Guitar Module
//!
//! Fretboard geometry for a six-string guitar in standard tuning, and the
//! CAGED transposition engine that turns relative shape templates into
//! concrete fret positions for any root.
//!
//! ## Sub-modules
//! - `shape` - fret values, base strings and the [`ChordShape`] template
//! - `tuning` - open string pitches and [`note_at_fret`]
//! - `builtin` - the built-in shape catalog and its major fallback
//! - `diagram` - chord diagram placement and variation cycling
//! - `positions` - five-fret scale boxes anchored on the major CAGED shapes
//!
//! ## Example
//! ```rust
//! use fretboard::guitar::{builtin_shapes_or_major, chord_diagram, Fret};
//!
//! // The E form slid to G lands on the third fret.
//! let e_form = &builtin_shapes_or_major("major")[3];
//! let diagram = chord_diagram("G", e_form);
//! assert_eq!(diagram.shift, 3);
//! assert_eq!(diagram.absolute_frets[0], Fret::Fretted(3));
//! assert_eq!(diagram.start_fret, 1);
//! ```
//!
//! ## Related Modules
//! - `catalog` - the editable shape store that takes precedence over `builtin`
//! - `render` - text output for diagrams and scale boxes

mod builtin;
mod diagram;
mod positions;
mod shape;
mod tuning;

#[cfg(test)]
mod tests;

pub use builtin::{
    builtin_entries, builtin_shapes, builtin_shapes_or_major, caged_anchors, BuiltinEntry,
    FALLBACK_CHORD_TYPE,
};
pub use diagram::{
    chord_diagram, chord_variation, diagram_start_fret, variation_index, ChordDiagram,
    ChordVariation, WINDOW_SPAN,
};
pub use positions::{box_start_fret, scale_positions, FretCoord, ScalePosition};
pub use shape::{BaseString, ChordShape, Fret, MAX_FRET, STRING_COUNT};
pub use tuning::{note_at_fret, STANDARD_TUNING, STRING_NAMES};
