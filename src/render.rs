//! Plain-text views of diagrams, scale boxes, interval lines and the
//! harmonic-field scale line.

use crate::chromatic::{index_of, CHROMATIC_SCALE};
use crate::guitar::{
    note_at_fret, ChordDiagram, ChordVariation, Fret, ScalePosition, STRING_COUNT, STRING_NAMES,
    WINDOW_SPAN,
};
use crate::theory::{generate_scale, Chord, HarmonicMode, Interval};

const DIAGRAM_CELL: usize = 3;
const TAB_CELL: usize = 5;

/// Vertical chord box, low E on the left.
///
/// ```text
/// C: Formato de C (CAGED)
///     E  A  D  G  B  e
///     X        O     O
///     ================
///     |  |  |  |  1  |
///     |  |  2  |  |  |
///     |  3  |  |  |  |
///     |  |  |  |  |  |
///     |  |  |  |  |  |
/// ```
pub fn render_chord_diagram(diagram: &ChordDiagram) -> String {
    let mut out = String::new();

    match &diagram.label {
        Some(label) if !label.is_empty() => out.push_str(&format!("{}: {}\n", diagram.root, label)),
        _ => out.push_str(&format!("{}\n", diagram.root)),
    }

    let margin = " ".repeat(4);
    out.push_str(&diagram_row(&margin, STRING_NAMES.iter().map(|s| s.to_string())));

    let markers = diagram.display_frets.iter().map(|fret| match fret {
        Fret::Muted => "X".to_string(),
        Fret::Open => "O".to_string(),
        Fret::Fretted(_) => String::new(),
    });
    out.push_str(&diagram_row(&margin, markers));

    if diagram.start_fret == 1 {
        out.push_str(&margin);
        out.push_str(&"=".repeat(DIAGRAM_CELL * (STRING_COUNT - 1) + 1));
        out.push('\n');
    }

    for row in 1..=WINDOW_SPAN {
        let prefix = if row == 1 && diagram.start_fret > 1 {
            format!("{:>3} ", format!("{}ª", diagram.start_fret))
        } else {
            margin.clone()
        };
        let cells = (0..STRING_COUNT).map(|string| {
            if diagram.display_frets[string] != Fret::Fretted(row) {
                return "|".to_string();
            }
            match diagram.fingers.map(|f| f[string]) {
                Some(finger) if finger > 0 => finger.to_string(),
                _ => "●".to_string(),
            }
        });
        out.push_str(&diagram_row(&prefix, cells));
    }

    out
}

fn diagram_row(prefix: &str, cells: impl Iterator<Item = String>) -> String {
    let mut line = prefix.to_string();
    for cell in cells {
        line.push_str(&format!("{:<width$}", cell, width = DIAGRAM_CELL));
    }
    let mut line = line.trim_end().to_string();
    line.push('\n');
    line
}

/// A diagram followed by its place among the chord type's shapes and the
/// neighbouring shape numbers.
pub fn render_chord_variation(variation: &ChordVariation) -> String {
    let mut out = render_chord_diagram(&variation.diagram);
    out.push_str(&format!(
        "Shape {}/{} (prev {}, next {})\n",
        variation.index + 1,
        variation.total,
        previous_index(variation.index, variation.total) + 1,
        next_index(variation.index, variation.total) + 1
    ));
    out
}

/// Horizontal tablature of a scale box, high e on top.
///
/// Cells show the note name of every scale fret; the tonic is bracketed.
pub fn render_scale_position(position: &ScalePosition) -> String {
    let mut out = String::new();
    out.push_str(&position.name);
    out.push('\n');

    let first = position.first_fret();
    let frets: Vec<u8> = (first..first + WINDOW_SPAN).collect();

    out.push_str("   ");
    for fret in &frets {
        out.push_str(&format!("{:^width$}", fret, width = TAB_CELL));
    }
    out.push('\n');

    for string in (0..STRING_COUNT).rev() {
        out.push_str(&format!("{} |", STRING_NAMES[string]));
        for &fret in &frets {
            let cell = if position.frets[string].contains(&fret) {
                let note = note_at_fret(string, fret)
                    .map(|n| n.symbol())
                    .unwrap_or("?");
                let is_root = position
                    .root_frets
                    .iter()
                    .any(|c| c.string == string && c.fret == fret);
                if is_root {
                    format!("[{}]", note)
                } else {
                    note.to_string()
                }
            } else {
                "-".to_string()
            };
            out.push_str(&format!("{:^width$}", cell, width = TAB_CELL));
        }
        out.push_str("|\n");
    }

    out
}

/// The twelve notes starting at `root`, with interval short names under the
/// notes they reach. Compound intervals land on their simple slot.
///
/// An unknown root leaves the line in C order.
pub fn render_chromatic_line(root: &str, intervals: &[Interval]) -> String {
    let start = index_of(root).unwrap_or(0);
    let mut notes = String::new();
    let mut marks = String::new();

    for slot in 0..CHROMATIC_SCALE.len() {
        let note = CHROMATIC_SCALE[(start + slot) % CHROMATIC_SCALE.len()];
        let mark = intervals
            .iter()
            .find(|i| i.semitones as usize == slot || i.semitones as usize == slot + 12)
            .map(|i| i.short_name)
            .unwrap_or("·");
        notes.push_str(&format!("{:<4}", note));
        marks.push_str(&format!("{:<4}", mark));
    }

    format!("{}\n{}\n", notes.trim_end(), marks.trim_end())
}

/// The parent scale of a harmonic field, read from `chord`'s root, with the
/// chord's interval short names under its tones.
///
/// When the chord's root is not in the scale the line keeps scale order.
pub fn render_scale_line(root: &str, mode: HarmonicMode, chord: &Chord) -> String {
    let mut scale = generate_scale(root, mode.scale_pattern()).notes;
    if let Some(start) = scale.iter().position(|n| *n == chord.root) {
        scale.rotate_left(start);
    }

    let mut notes = String::new();
    let mut marks = String::new();
    for note in &scale {
        let mark = chord
            .notes
            .iter()
            .zip(&chord.intervals)
            .find(|(tone, _)| *tone == note)
            .map(|(_, interval)| interval.short_name)
            .unwrap_or("·");
        notes.push_str(&format!("{:<4}", note));
        marks.push_str(&format!("{:<4}", mark));
    }

    format!("{}\n{}\n", notes.trim_end(), marks.trim_end())
}

/// Index after `current` in a ring of `len` items.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// Index before `current` in a ring of `len` items.
pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current % len + len - 1) % len
}
