//! Chord diagram mode of the transposition engine.
//!
//! A diagram shows a fixed five-fret window. Chords with an open string, or
//! whose highest fret still fits within the first five frets, are drawn from
//! the nut (start fret 1). Anything higher up the neck gets a window starting
//! at its lowest fretted note.

use serde::Serialize;

use super::shape::{ChordShape, Fret, STRING_COUNT};
use crate::chromatic::Note;

/// Number of frets drawn in a diagram or scale box.
pub const WINDOW_SPAN: u8 = 5;

/// A chord shape placed on the neck for one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDiagram {
    pub label: Option<String>,
    pub root: String,
    /// Semitones the template was slid up the neck.
    pub shift: u8,
    /// Real fret numbers on the neck.
    pub absolute_frets: [Fret; STRING_COUNT],
    /// Fret numbers relative to the window: fretted values are 1..=5 for
    /// shapes that fit, open and muted strings are never renumbered.
    pub display_frets: [Fret; STRING_COUNT],
    /// First fret of the window (1 means the nut is drawn).
    pub start_fret: u8,
    pub fingers: Option<[u8; STRING_COUNT]>,
}

/// A diagram together with its place among the chord type's shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordVariation {
    pub diagram: ChordDiagram,
    pub index: usize,
    pub total: usize,
}

/// Lowest and highest fretted (non-open) positions, or `None` if nothing is fretted.
pub(crate) fn fretted_range(frets: &[Fret]) -> Option<(u8, u8)> {
    let fretted = frets.iter().filter_map(|f| match f {
        Fret::Fretted(n) => Some(*n),
        _ => None,
    });
    fretted.fold(None, |range, n| match range {
        None => Some((n, n)),
        Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
    })
}

/// First fret of the diagram window for absolute frets.
pub fn diagram_start_fret(absolute: &[Fret]) -> u8 {
    if absolute.contains(&Fret::Open) {
        return 1;
    }
    match fretted_range(absolute) {
        Some((lowest, highest)) if highest > WINDOW_SPAN => lowest,
        _ => 1,
    }
}

/// Place `shape` on the neck so its tonic is `root`.
///
/// An unrecognised root leaves the shape where it was drawn.
pub fn chord_diagram(root: &str, shape: &ChordShape) -> ChordDiagram {
    let shift = match Note::from_symbol(root) {
        Some(note) => shape.shift_to(note),
        None => {
            log::debug!("unknown root '{}', drawing shape untransposed", root);
            0
        }
    };

    let absolute_frets = shape.absolute_frets(shift);
    let start_fret = diagram_start_fret(&absolute_frets);
    let display_frets = absolute_frets.map(|fret| match fret {
        Fret::Fretted(n) => Fret::Fretted(n - start_fret + 1),
        other => other,
    });

    ChordDiagram {
        label: shape.name.clone(),
        root: root.to_string(),
        shift,
        absolute_frets,
        display_frets,
        start_fret,
        fingers: shape.fingers,
    }
}

/// Wrap a variation index into `0..count`, so `-1` selects the last shape.
pub fn variation_index(index: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(index.rem_euclid(count as i64) as usize)
}

/// Diagram of the shape at a (wrapped) variation index.
pub fn chord_variation(root: &str, shapes: &[ChordShape], index: i64) -> Option<ChordVariation> {
    let index = variation_index(index, shapes.len())?;
    Some(ChordVariation {
        diagram: chord_diagram(root, &shapes[index]),
        index,
        total: shapes.len(),
    })
}
