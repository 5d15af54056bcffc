//! Standard tuning and fretboard note lookup.

use crate::chromatic::Note;

use super::shape::STRING_COUNT;

/// Open string pitches from the low E string (index 0) to the high e string (index 5).
pub const STANDARD_TUNING: [Note; STRING_COUNT] = [Note::E, Note::A, Note::D, Note::G, Note::B, Note::E];

/// Conventional string labels, low to high.
pub const STRING_NAMES: [&str; STRING_COUNT] = ["E", "A", "D", "G", "B", "e"];

/// Note sounding at `fret` on string `string_index` (0 = low E).
///
/// Returns `None` for a string index outside the six strings.
///
/// # Example
/// ```
/// use fretboard::chromatic::Note;
/// use fretboard::guitar::note_at_fret;
///
/// assert_eq!(note_at_fret(0, 3), Some(Note::G));
/// assert_eq!(note_at_fret(4, 1), Some(Note::C));
/// assert_eq!(note_at_fret(6, 0), None);
/// ```
pub fn note_at_fret(string_index: usize, fret: u8) -> Option<Note> {
    STANDARD_TUNING
        .get(string_index)
        .map(|open| open.transpose(fret as i32))
}
