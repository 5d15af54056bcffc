//! Static lookup data: interval registry, scale patterns, chord formulas and
//! harmonic field tables.
//!
//! Display names are kept in Portuguese; they are part of the data shared
//! with the shape catalog documents and with existing front-ends.

use super::types::{ChordFormula, ChordType, HarmonicMode, Interval, IntervalQuality, ScalePattern};

use IntervalQuality::{Extension, Fifth, Root, Seventh, Third};

const fn interval(
    semitones: u8,
    name: &'static str,
    short_name: &'static str,
    quality: IntervalQuality,
) -> Interval {
    Interval {
        semitones,
        name,
        short_name,
        quality,
    }
}

/// Registered intervals: the simple intervals 0-11 plus b9, 9, 11, #11, 13.
pub const INTERVALS: [Interval; 17] = [
    interval(0, "Tônica", "T", Root),
    interval(1, "Segunda Menor", "b2", Extension),
    interval(2, "Segunda Maior", "2", Extension),
    interval(3, "Terça Menor", "b3", Third),
    interval(4, "Terça Maior", "3", Third),
    interval(5, "Quarta Justa", "4", Extension),
    interval(6, "Quarta Aumentada", "#4", Extension),
    interval(7, "Quinta Justa", "5", Fifth),
    interval(8, "Sexta Menor", "b6", Extension),
    interval(9, "Sexta Maior", "6", Extension),
    interval(10, "Sétima Menor", "b7", Seventh),
    interval(11, "Sétima Maior", "7M", Seventh),
    interval(13, "Nona Menor", "b9", Extension),
    interval(14, "Nona Maior", "9", Extension),
    interval(17, "Décima Primeira", "11", Extension),
    interval(18, "Décima Primeira Aum.", "#11", Extension),
    interval(21, "Décima Terceira", "13", Extension),
];

/// Registered interval for a semitone distance, or the generic extension
/// placeholder.
pub fn interval_for(semitones: u8) -> Interval {
    INTERVALS
        .iter()
        .copied()
        .find(|i| i.semitones == semitones)
        .unwrap_or(interval(semitones, "Extensão", "Ext", Extension))
}

/// Chord extensions a user can stack on a base chord, with the bare number
/// used in chord symbols.
pub const EXTENSION_TIERS: [(u8, &str); 3] = [(14, "9"), (17, "11"), (21, "13")];

pub const NINTH: u8 = 14;
pub const ELEVENTH: u8 = 17;
pub const THIRTEENTH: u8 = 21;

/// Scale patterns. The first entry doubles as the fallback for unknown names.
pub const SCALE_PATTERNS: [ScalePattern; 6] = [
    ScalePattern {
        name: "Maior Natural",
        intervals: &[0, 2, 4, 5, 7, 9, 11],
        description: "A escala fundamental da música ocidental. Transmite alegria e estabilidade.",
    },
    ScalePattern {
        name: "Menor Natural",
        intervals: &[0, 2, 3, 5, 7, 8, 10],
        description: "Som melancólico e suave. Relativa da escala maior.",
    },
    ScalePattern {
        name: "Menor Harmônica",
        intervals: &[0, 2, 3, 5, 7, 8, 11],
        description: "Característica exótica/árabe devido ao intervalo de 1 tom e meio entre o 6º e 7º grau.",
    },
    ScalePattern {
        name: "Menor Melódica",
        intervals: &[0, 2, 3, 5, 7, 9, 11],
        description: "Usada no jazz, possui a sonoridade menor mas com finalização instável.",
    },
    ScalePattern {
        name: "Pentatônica Maior",
        intervals: &[0, 2, 4, 7, 9],
        description: "5 notas, muito usada em solos de blues e rock.",
    },
    ScalePattern {
        name: "Pentatônica Menor",
        intervals: &[0, 3, 5, 7, 10],
        description: "A escala de solo mais comum do rock e blues.",
    },
];

/// Chord formulas in display order (triads first, then tetrads).
pub const CHORD_FORMULAS: [ChordFormula; 9] = [
    ChordFormula {
        chord_type: ChordType::Major,
        name: "Maior",
        symbol: "",
        intervals: &[0, 4, 7],
        description: "Tônica, Terça Maior e Quinta Justa.",
    },
    ChordFormula {
        chord_type: ChordType::Minor,
        name: "Menor",
        symbol: "m",
        intervals: &[0, 3, 7],
        description: "Tônica, Terça Menor e Quinta Justa.",
    },
    ChordFormula {
        chord_type: ChordType::Dim,
        name: "Diminuto",
        symbol: "dim",
        intervals: &[0, 3, 6],
        description: "Tensão. Terça menor e Quinta diminuta.",
    },
    ChordFormula {
        chord_type: ChordType::Aug,
        name: "Aumentado",
        symbol: "aug",
        intervals: &[0, 4, 8],
        description: "Suspenso e misterioso. Quinta aumentada.",
    },
    ChordFormula {
        chord_type: ChordType::Maj7,
        name: "Sétima Maior",
        symbol: "maj7",
        intervals: &[0, 4, 7, 11],
        description: "Sofisticado, comum no Jazz e MPB.",
    },
    ChordFormula {
        chord_type: ChordType::M7,
        name: "Menor com Sétima",
        symbol: "m7",
        intervals: &[0, 3, 7, 10],
        description: "Suave e estável.",
    },
    ChordFormula {
        chord_type: ChordType::Dom7,
        name: "Dominante",
        symbol: "7",
        intervals: &[0, 4, 7, 10],
        description: "Pede resolução. Tensão do trítono.",
    },
    ChordFormula {
        chord_type: ChordType::M7b5,
        name: "Meio Diminuto",
        symbol: "m7(b5)",
        intervals: &[0, 3, 6, 10],
        description: "Sensível, usado frequentemente no grau VII.",
    },
    ChordFormula {
        chord_type: ChordType::Dim7,
        name: "Diminuto",
        symbol: "dim7",
        intervals: &[0, 3, 6, 9],
        description: "Simétrico e muito tenso.",
    },
];

impl ChordType {
    pub fn formula(self) -> &'static ChordFormula {
        // CHORD_FORMULAS is indexed in ChordType::ALL order
        &CHORD_FORMULAS[self as usize]
    }
}

const MAJOR_FIELD: [(&str, ChordType); 7] = [
    ("I", ChordType::Maj7),
    ("ii", ChordType::M7),
    ("iii", ChordType::M7),
    ("IV", ChordType::Maj7),
    ("V", ChordType::Dom7),
    ("vi", ChordType::M7),
    ("vii°", ChordType::M7b5),
];

const MINOR_FIELD: [(&str, ChordType); 7] = [
    ("i", ChordType::M7),
    ("ii°", ChordType::M7b5),
    ("III", ChordType::Maj7),
    ("iv", ChordType::M7),
    ("v", ChordType::M7),
    ("VI", ChordType::Maj7),
    ("VII", ChordType::Dom7),
];

impl HarmonicMode {
    /// Name of the parent scale pattern.
    pub fn scale_pattern(self) -> &'static str {
        match self {
            HarmonicMode::Major => "Maior Natural",
            HarmonicMode::Minor => "Menor Natural",
        }
    }

    /// Degree label and chord type for each of the seven scale degrees.
    pub fn degrees(self) -> &'static [(&'static str, ChordType); 7] {
        match self {
            HarmonicMode::Major => &MAJOR_FIELD,
            HarmonicMode::Minor => &MINOR_FIELD,
        }
    }
}
