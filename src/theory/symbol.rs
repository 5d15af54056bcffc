//! Chord symbol nomenclature.
//!
//! Two naming families exist for extensions (semitones 14, 17, 21):
//!
//! - **Parenthesised list** (`dom7`, `maj7`, `m7`, `dim`, `aug`, `dim7`, `m7b5`):
//!   `C7(9,13)`, `Cmaj7(11)`, `Cdim7(9)`
//! - **Add tokens** (`major`, `minor`): `Cadd9`, `Cmadd11`, `C(add9,add13)`
//!
//! The long-form name lists every extension for the parenthesised family but
//! only the first present tier (9, then 11, then 13) for the add family, so
//! `C(add9,add11)` reads "C Maior com 9".

use super::tables::EXTENSION_TIERS;
use super::types::ChordType;

/// Bare extension numbers ("9", "11", "13") present in `extensions`, in tier order.
fn present_tiers(extensions: &[u8]) -> Vec<&'static str> {
    EXTENSION_TIERS
        .iter()
        .filter(|(semitones, _)| extensions.contains(semitones))
        .map(|(_, label)| *label)
        .collect()
}

/// Display symbol for a chord, e.g. `C7(9)` or `Amadd9`.
pub fn chord_symbol(root: &str, chord_type: ChordType, extensions: &[u8]) -> String {
    let mut symbol = format!("{}{}", root, chord_type.formula().symbol);
    let tiers = present_tiers(extensions);

    if tiers.is_empty() {
        return symbol;
    }

    if chord_type.uses_add_tokens() {
        let tokens: Vec<String> = tiers.iter().map(|t| format!("add{}", t)).collect();
        if tokens.len() == 1 {
            symbol.push_str(&tokens[0]);
        } else {
            symbol.push_str(&format!("({})", tokens.join(",")));
        }
    } else {
        symbol.push_str(&format!("({})", tiers.join(",")));
    }

    symbol
}

/// Long-form name, e.g. `C Dominante com 9,13`.
pub fn detailed_name(root: &str, chord_type: ChordType, extensions: &[u8]) -> String {
    let base = format!("{} {}", root, chord_type.formula().name);
    let tiers = present_tiers(extensions);

    let suffix = if chord_type.uses_add_tokens() {
        tiers.first().map(|t| t.to_string())
    } else if tiers.is_empty() {
        None
    } else {
        Some(tiers.join(","))
    };

    match suffix {
        Some(ext) => format!("{} com {}", base, ext),
        None => base,
    }
}

/// Classify a rendered chord symbol back to its chord type.
///
/// Checks the most specific qualities first so that `m7` is not read as
/// `minor` and `maj7` is not read as `m7`. Anything unrecognised is `major`.
///
/// # Example
/// ```
/// use fretboard::theory::{chord_type_from_symbol, ChordType};
///
/// assert_eq!(chord_type_from_symbol("Bm7(b5)"), ChordType::M7b5);
/// assert_eq!(chord_type_from_symbol("G7"), ChordType::Dom7);
/// assert_eq!(chord_type_from_symbol("F#m"), ChordType::Minor);
/// ```
pub fn chord_type_from_symbol(symbol: &str) -> ChordType {
    if symbol.contains("maj7") {
        ChordType::Maj7
    } else if symbol.contains("m7(b5)") || symbol.contains("m7b5") {
        ChordType::M7b5
    } else if symbol.contains("dim7") {
        ChordType::Dim7
    } else if symbol.contains("dim") {
        ChordType::Dim
    } else if symbol.contains("aug") {
        ChordType::Aug
    } else if symbol.contains("m7") {
        ChordType::M7
    } else if symbol.contains('7') {
        ChordType::Dom7
    } else if symbol.contains('m') && !symbol.contains("maj") {
        ChordType::Minor
    } else {
        ChordType::Major
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesised_family() {
        assert_eq!(chord_symbol("C", ChordType::Dom7, &[14]), "C7(9)");
        assert_eq!(chord_symbol("C", ChordType::Dom7, &[21, 14]), "C7(9,13)");
        assert_eq!(chord_symbol("D", ChordType::Maj7, &[17]), "Dmaj7(11)");
        assert_eq!(chord_symbol("E", ChordType::M7b5, &[14]), "Em7(b5)(9)");
        assert_eq!(chord_symbol("F", ChordType::Dim7, &[]), "Fdim7");
    }

    #[test]
    fn test_add_family() {
        assert_eq!(chord_symbol("C", ChordType::Major, &[14]), "Cadd9");
        assert_eq!(chord_symbol("A", ChordType::Minor, &[17]), "Amadd11");
        assert_eq!(chord_symbol("C", ChordType::Major, &[14, 17]), "C(add9,add11)");
        assert_eq!(chord_symbol("G", ChordType::Major, &[]), "G");
    }

    #[test]
    fn test_unnamed_extensions_do_not_change_symbol() {
        // b9 and #11 are valid chord tones but have no symbol token
        assert_eq!(chord_symbol("C", ChordType::Dom7, &[13, 18]), "C7");
    }

    #[test]
    fn test_detailed_name_asymmetry() {
        assert_eq!(detailed_name("C", ChordType::Major, &[14, 17]), "C Maior com 9");
        assert_eq!(detailed_name("C", ChordType::Major, &[17, 21]), "C Maior com 11");
        assert_eq!(detailed_name("C", ChordType::Dom7, &[14, 17]), "C Dominante com 9,11");
        assert_eq!(detailed_name("C", ChordType::Minor, &[]), "C Menor");
    }

    #[test]
    fn test_symbol_classification() {
        assert_eq!(chord_type_from_symbol("Cmaj7"), ChordType::Maj7);
        assert_eq!(chord_type_from_symbol("Am7"), ChordType::M7);
        assert_eq!(chord_type_from_symbol("Bdim"), ChordType::Dim);
        assert_eq!(chord_type_from_symbol("Bdim7"), ChordType::Dim7);
        assert_eq!(chord_type_from_symbol("Caug"), ChordType::Aug);
        assert_eq!(chord_type_from_symbol("C"), ChordType::Major);
        assert_eq!(chord_type_from_symbol("Cadd9"), ChordType::Major);
    }

    #[test]
    fn test_classification_inverts_plain_symbols() {
        for chord_type in ChordType::ALL {
            for root in ["C", "F#", "A#"] {
                let symbol = chord_symbol(root, chord_type, &[]);
                assert_eq!(chord_type_from_symbol(&symbol), chord_type, "{}", symbol);
            }
        }
    }
}
