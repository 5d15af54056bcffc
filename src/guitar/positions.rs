//! Scale box mode of the transposition engine.
//!
//! Each of the five major CAGED shapes is slid to the requested root and used
//! only as an anchor: its footprint picks a five-fret window, and every scale
//! note inside that window on every string belongs to the position.

use serde::Serialize;

use super::builtin::caged_anchors;
use super::diagram::{fretted_range, WINDOW_SPAN};
use super::shape::{Fret, STRING_COUNT};
use super::tuning::STANDARD_TUNING;
use crate::chromatic::Note;

/// A (string, absolute fret) pair. String 0 is the low E string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FretCoord {
    pub string: usize,
    pub fret: u8,
}

/// One fingering box of a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalePosition {
    pub name: String,
    /// Absolute frets of scale notes inside the window, per string (low E first).
    pub frets: [Vec<u8>; STRING_COUNT],
    /// First fret of the window; 1 means the window includes open strings.
    pub start_fret: u8,
    /// Every place inside the window where the tonic sounds.
    pub root_frets: Vec<FretCoord>,
}

impl ScalePosition {
    /// Lowest absolute fret scanned for this position.
    pub fn first_fret(&self) -> u8 {
        window_first_fret(self.start_fret)
    }
}

/// Start fret of the box anchored on a shape's absolute frets.
///
/// Open strings pin the box to the nut; otherwise it starts at the lowest
/// fretted note, moved up when the shape is wider than the window so the
/// highest fretted note stays inside.
pub fn box_start_fret(absolute: &[Fret]) -> u8 {
    if absolute.contains(&Fret::Open) {
        return 1;
    }
    match fretted_range(absolute) {
        None => 1,
        Some((lowest, highest)) => {
            let reach = WINDOW_SPAN - 1;
            let start = if highest - lowest > reach {
                highest - reach
            } else {
                lowest
            };
            start.max(1)
        }
    }
}

/// A start fret of 1 is the nut view, which scans from the open string.
fn window_first_fret(start_fret: u8) -> u8 {
    if start_fret == 1 {
        0
    } else {
        start_fret
    }
}

/// The five CAGED positions of a scale.
///
/// `scale_notes` are chromatic symbols; unknown symbols are ignored. Returns
/// no positions when the root is unknown or no scale note is recognised.
pub fn scale_positions<S: AsRef<str>>(root: &str, scale_notes: &[S]) -> Vec<ScalePosition> {
    let Some(root_note) = Note::from_symbol(root) else {
        log::debug!("unknown root '{}', no scale positions", root);
        return Vec::new();
    };

    let members: Vec<Note> = scale_notes
        .iter()
        .filter_map(|n| Note::from_symbol(n.as_ref()))
        .collect();
    if members.is_empty() {
        return Vec::new();
    }

    caged_anchors()
        .iter()
        .enumerate()
        .map(|(i, anchor)| {
            let shift = anchor.shift_to(root_note);
            let start_fret = box_start_fret(&anchor.absolute_frets(shift));
            let first = window_first_fret(start_fret);
            let last = first + WINDOW_SPAN - 1;

            let frets: [Vec<u8>; STRING_COUNT] = std::array::from_fn(|string| {
                (first..=last)
                    .filter(|&fret| members.contains(&STANDARD_TUNING[string].transpose(fret as i32)))
                    .collect()
            });

            let root_frets = frets
                .iter()
                .enumerate()
                .flat_map(|(string, string_frets)| {
                    string_frets
                        .iter()
                        .filter(move |&&fret| STANDARD_TUNING[string].transpose(fret as i32) == root_note)
                        .map(move |&fret| FretCoord { string, fret })
                })
                .collect();

            ScalePosition {
                name: format!("Position {} ({})", i + 1, anchor.reference_root()),
                frets,
                start_fret,
                root_frets,
            }
        })
        .collect()
}
