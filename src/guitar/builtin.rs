//! Built-in CAGED shape catalog.
//!
//! This is the second tier of every shape lookup: when the external catalog
//! has nothing for a chord type, these shapes are used, and chord types
//! missing here fall back to the major set. The same data seeds an empty
//! catalog store.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::shape::{BaseString, ChordShape, STRING_COUNT};

use BaseString::{Fifth, Fourth, Sixth};

/// Chord type id whose shapes stand in for unknown chord types.
pub const FALLBACK_CHORD_TYPE: &str = "major";

/// One chord type of the built-in catalog.
#[derive(Debug, Clone)]
pub struct BuiltinEntry {
    pub chord_type: &'static str,
    /// Display name used when seeding a catalog document.
    pub name: &'static str,
    pub shapes: Vec<ChordShape>,
}

fn shape(
    name: &str,
    base: BaseString,
    frets: [i8; STRING_COUNT],
    fingers: [u8; STRING_COUNT],
) -> ChordShape {
    ChordShape::new(base, frets).named(name).with_fingers(fingers)
}

/// Shape whose tonic sits on the third fret of its base string (C and G forms).
fn shape3(
    name: &str,
    base: BaseString,
    frets: [i8; STRING_COUNT],
    fingers: [u8; STRING_COUNT],
) -> ChordShape {
    shape(name, base, frets, fingers).with_root_fret_offset(3)
}

fn entry(chord_type: &'static str, name: &'static str, shapes: Vec<ChordShape>) -> BuiltinEntry {
    BuiltinEntry {
        chord_type,
        name,
        shapes,
    }
}

static BUILTIN: Lazy<HashMap<&'static str, BuiltinEntry>> = Lazy::new(|| {
    let entries = vec![
        entry("major", "Maior (Tríade)", vec![
            shape3("Formato de C (CAGED)", Fifth, [-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0]),
            shape("Formato de A (CAGED)", Fifth, [-1, 0, 2, 2, 2, 0], [0, 1, 2, 3, 4, 1]),
            shape3("Formato de G (CAGED)", Sixth, [3, 2, 0, 0, 0, 3], [3, 2, 0, 0, 0, 4]),
            shape("Formato de E (CAGED)", Sixth, [0, 2, 2, 1, 0, 0], [1, 3, 4, 2, 1, 1]),
            shape("Formato de D (CAGED)", Fourth, [-1, -1, 0, 2, 3, 2], [0, 0, 0, 1, 3, 2]),
        ]),
        entry("minor", "Menor (Tríade)", vec![
            shape("Formato de Em", Sixth, [0, 2, 2, 0, 0, 0], [1, 3, 4, 1, 1, 1]),
            shape("Formato de Am", Fifth, [-1, 0, 2, 2, 1, 0], [0, 1, 3, 4, 2, 1]),
            shape("Formato de Dm", Fourth, [-1, -1, 0, 2, 3, 1], [0, 0, 0, 2, 4, 1]),
        ]),
        entry("dom7", "Dominante (7)", vec![
            shape3("Formato de C7 (CAGED)", Fifth, [-1, 3, 2, 3, 1, 0], [0, 3, 2, 4, 1, 0]),
            shape("Formato de A7 (CAGED)", Fifth, [-1, 0, 2, 0, 2, 0], [0, 1, 3, 1, 4, 1]),
            shape3("Formato de G7 (CAGED)", Sixth, [3, 2, 0, 0, 0, 1], [3, 2, 0, 0, 0, 1]),
            shape("Formato de E7 (CAGED)", Sixth, [0, 2, 0, 1, 0, 0], [1, 3, 1, 2, 1, 1]),
            shape("Formato de D7 (CAGED)", Fourth, [-1, -1, 0, 2, 1, 2], [0, 0, 0, 2, 1, 3]),
        ]),
        entry("maj7", "Sétima Maior", vec![
            shape3("Formato de Cmaj7 (CAGED)", Fifth, [-1, 3, 2, 0, 0, 0], [0, 3, 2, 0, 0, 0]),
            shape("Formato de Amaj7 (CAGED)", Fifth, [-1, 0, 2, 1, 2, 0], [0, 1, 3, 2, 4, 1]),
            shape3("Formato de Gmaj7 (CAGED)", Sixth, [3, 2, 0, 0, 0, 2], [3, 2, 0, 0, 0, 4]),
            shape("Formato de Emaj7 (CAGED)", Sixth, [0, -1, 1, 1, 0, -1], [1, 0, 3, 4, 2, 0]),
            shape("Formato de Dmaj7 (CAGED)", Fourth, [-1, -1, 0, 2, 2, 2], [0, 0, 0, 1, 2, 3]),
        ]),
        entry("m7", "Menor com Sétima", vec![
            shape3("Formato de Cm7 (CAGED)", Fifth, [-1, 3, 1, 0, 1, 0], [0, 3, 1, 0, 2, 0]),
            shape("Formato de Am7 (CAGED)", Fifth, [-1, 0, 2, 0, 1, 0], [0, 1, 3, 1, 2, 1]),
            shape3("Formato de Gm7 (CAGED)", Sixth, [3, 1, 0, 0, 0, 1], [3, 1, 0, 0, 0, 2]),
            shape("Formato de Em7 (CAGED)", Sixth, [0, 2, 0, 0, 0, 0], [1, 3, 1, 1, 1, 1]),
            shape("Formato de Dm7 (CAGED)", Fourth, [-1, -1, 0, 2, 1, 1], [0, 0, 0, 2, 1, 1]),
        ]),
        entry("m7b5", "Meio Diminuto", vec![
            shape3("Formato de Cm7b5 (CAGED)", Fifth, [-1, 3, 1, 0, 1, -1], [0, 3, 1, 0, 2, 0]),
            shape("Formato de Am7b5 (CAGED)", Fifth, [-1, 0, 1, 0, 1, -1], [0, 1, 2, 1, 3, 0]),
            shape3("Formato de Gm7b5 (CAGED)", Sixth, [3, 1, 0, 0, -1, 1], [3, 1, 0, 0, 0, 2]),
            shape("Formato de Em7b5 (CAGED)", Sixth, [0, -1, 0, 0, -1, -1], [1, 0, 2, 3, 0, 0]),
            shape("Formato de Dm7b5 (CAGED)", Fourth, [-1, -1, 0, 1, 1, 1], [0, 0, 0, 1, 2, 3]),
        ]),
        entry("dim7", "Diminuto", vec![
            shape("Formato Diminuto", Fifth, [-1, 0, 1, -1, 1, -1], [0, 1, 2, 0, 3, 0]),
        ]),
        entry("dim", "Diminuto (Tríade)", vec![
            shape("Tríade Diminuta", Fifth, [-1, 0, 1, -1, -1, -1], [0, 1, 2, 0, 0, 0]),
        ]),
        entry("aug", "Aumentado", vec![
            shape("Aumentado", Sixth, [0, -1, 2, 1, 1, -1], [1, 0, 3, 2, 2, 0]),
        ]),
        entry("add9", "Maior com 9ª (add9)", vec![
            shape3("Formato de Cadd9 (CAGED)", Fifth, [-1, 3, 2, 0, 3, 3], [0, 2, 1, 0, 3, 4]),
            shape("Formato de Aadd9 (CAGED)", Fifth, [-1, 0, 2, 4, 2, 0], [0, 0, 1, 4, 2, 0]),
            shape3("Formato de Gadd9 (CAGED)", Sixth, [3, 2, 0, 2, 3, 3], [2, 1, 0, 1, 3, 4]),
            shape("Formato de Eadd9 (CAGED)", Sixth, [0, 2, 2, 1, 0, 2], [0, 2, 3, 1, 0, 4]),
            shape("Formato de Dadd9 (CAGED)", Fourth, [-1, -1, 0, 2, 3, 0], [0, 0, 0, 1, 3, 0]),
        ]),
        entry("dom9", "Dominante com 9ª (9)", vec![
            shape3("Formato de C9 (CAGED)", Fifth, [-1, 3, 2, 3, 3, 0], [0, 2, 1, 3, 4, 0]),
            shape("Formato de A9 (CAGED)", Fifth, [-1, 0, 2, 4, 2, 0], [0, 0, 1, 3, 2, 0]),
            shape3("Formato de G9 (CAGED)", Sixth, [3, -1, 3, 2, 3, 3], [1, 0, 3, 2, 4, 4]),
            shape("Formato de E9 (CAGED)", Sixth, [0, 2, 0, 1, 0, 2], [0, 2, 0, 1, 0, 3]),
            shape("Formato de D9 (CAGED)", Fourth, [-1, -1, 0, 2, 1, 0], [0, 0, 0, 2, 1, 0]),
        ]),
        entry("maj9", "Maior com 9ª (maj9)", vec![
            shape3("Formato de Cmaj9 (CAGED)", Fifth, [-1, 3, 2, 4, 3, 0], [0, 2, 1, 4, 3, 0]),
            shape("Formato de Amaj9 (CAGED)", Fifth, [-1, 0, 2, 1, 0, 0], [0, 0, 3, 2, 0, 0]),
            shape3("Formato de Gmaj9 (CAGED)", Sixth, [3, 2, 0, 0, 0, 2], [3, 2, 0, 0, 0, 4]),
            shape("Formato de Emaj9 (CAGED)", Sixth, [0, 2, 1, 1, 0, 2], [0, 3, 1, 2, 0, 4]),
            shape("Formato de Dmaj9 (CAGED)", Fourth, [-1, -1, 0, 2, 2, 0], [0, 0, 0, 1, 2, 0]),
        ]),
        entry("madd9", "Menor com 9ª (madd9)", vec![
            shape3("Formato de Cmadd9 (CAGED)", Fifth, [-1, 3, 1, 0, 3, 3], [0, 2, 1, 0, 3, 4]),
            shape("Formato de Amadd9 (CAGED)", Fifth, [-1, 0, 2, 4, 1, 0], [0, 0, 2, 4, 1, 0]),
            shape3("Formato de Gmadd9 (CAGED)", Sixth, [3, 1, 0, 2, 3, 3], [2, 1, 0, 1, 3, 4]),
            shape("Formato de Emadd9 (CAGED)", Sixth, [0, 2, 2, 0, 0, 2], [0, 2, 3, 0, 0, 4]),
            shape("Formato de Dmadd9 (CAGED)", Fourth, [-1, -1, 0, 2, 3, 0], [0, 0, 0, 1, 3, 0]),
        ]),
        entry("m9", "Menor com 7ª e 9ª (m9)", vec![
            shape3("Formato de Cm9 (CAGED)", Fifth, [-1, 3, 1, 3, 3, 0], [0, 2, 1, 3, 4, 0]),
            shape("Formato de Am9 (CAGED)", Fifth, [-1, 0, 2, 4, 1, 3], [0, 0, 1, 4, 1, 3]),
            shape3("Formato de Gm9 (CAGED)", Sixth, [3, 1, 3, 3, 3, 3], [1, 0, 2, 3, 3, 3]),
            shape("Formato de Em9 (CAGED)", Sixth, [0, 2, 0, 0, 0, 2], [0, 2, 0, 0, 0, 3]),
            shape("Formato de Dm9 (CAGED)", Fourth, [-1, -1, 0, 2, 1, 0], [0, 0, 0, 2, 1, 0]),
        ]),
        entry("dom7add11", "Dominante com 11ª (7(11))", vec![
            shape3("Formato de C7(11)", Fifth, [-1, 3, 3, 3, 1, 1], [0, 2, 3, 4, 1, 1]),
            shape("Formato de A7(11)", Fifth, [-1, 0, 0, 0, 2, 0], [0, 0, 0, 0, 1, 0]),
            shape3("Formato de G7(11)", Sixth, [3, 0, 3, 0, 1, 1], [3, 0, 4, 0, 1, 2]),
            shape("Formato de E7(11)", Sixth, [0, 0, 0, 1, 0, 0], [0, 0, 0, 1, 0, 0]),
            shape("Formato de D7(11)", Fourth, [-1, -1, 0, 0, 1, 0], [0, 0, 0, 0, 1, 0]),
        ]),
        entry("dom7add13", "Dominante com 13ª (7(13))", vec![
            shape3("Formato de C7(13)", Fifth, [-1, 3, 2, 3, 5, 5], [0, 2, 1, 3, 4, 4]),
            shape("Formato de A7(13)", Fifth, [-1, 0, 2, 0, 2, 2], [0, 0, 2, 0, 3, 4]),
            shape3("Formato de G7(13)", Sixth, [3, -1, 3, 2, 3, 5], [1, 0, 2, 1, 3, 4]),
            shape("Formato de E7(13)", Sixth, [0, 2, 0, 1, 2, 2], [0, 2, 0, 1, 3, 4]),
            shape("Formato de D7(13)", Fourth, [-1, -1, 0, 2, 1, 2], [0, 0, 0, 3, 1, 4]),
        ]),
        entry("dom9add11", "Dominante com 9ª e 11ª (9(11))", vec![
            shape3("Formato de C9(11)", Fifth, [-1, 3, 3, 3, 3, 0], [0, 1, 1, 1, 1, 0]),
            shape("Formato de A9(11)", Fifth, [-1, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0]),
            shape("Formato de E9(11)", Sixth, [0, 0, 0, 1, 0, 2], [0, 0, 0, 1, 0, 2]),
        ]),
        entry("dom9add13", "Dominante com 9ª e 13ª (13)", vec![
            shape3("Formato de C13", Fifth, [-1, 3, 2, 3, 5, 5], [0, 2, 1, 3, 4, 4]),
            shape("Formato de A13", Fifth, [-1, 0, 2, 0, 2, 2], [0, 0, 2, 0, 3, 4]),
            shape("Formato de E13", Sixth, [0, 2, 0, 1, 2, 2], [0, 2, 0, 1, 3, 4]),
        ]),
    ];

    entries.into_iter().map(|e| (e.chord_type, e)).collect()
});

/// Built-in shapes for a chord type id, if any are registered.
pub fn builtin_shapes(chord_type: &str) -> Option<&'static [ChordShape]> {
    BUILTIN.get(chord_type).map(|e| e.shapes.as_slice())
}

/// Built-in shapes for a chord type id, or the major set when it has none.
pub fn builtin_shapes_or_major(chord_type: &str) -> &'static [ChordShape] {
    builtin_shapes(chord_type)
        .or_else(|| builtin_shapes(FALLBACK_CHORD_TYPE))
        .unwrap_or(&[])
}

/// Every built-in entry, ordered by chord type id.
pub fn builtin_entries() -> Vec<&'static BuiltinEntry> {
    let mut entries: Vec<&'static BuiltinEntry> = BUILTIN.values().collect();
    entries.sort_by_key(|e| e.chord_type);
    entries
}

/// The five major CAGED shapes (C, A, G, E, D) used to anchor scale boxes.
pub fn caged_anchors() -> &'static [ChordShape] {
    builtin_shapes_or_major(FALLBACK_CHORD_TYPE)
}
