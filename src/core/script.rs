// File: src/core/script.rs
use crate::core::types::Weight;

pub const ANUSVARA: char = '\u{0902}';
pub const VISARGA: char = '\u{0903}';
pub const NUKTA: char = '\u{093c}';
pub const HALANTA: char = '\u{094d}';
pub const DANDA: char = '\u{0964}';
pub const DOUBLE_DANDA: char = '\u{0965}';

/// Dependent vowel signs and the weight each gives its consonant.
pub const MATRA_WEIGHTS: [(char, Weight); 13] = [
    ('ा', Weight::Long),  // aa
    ('ि', Weight::Short), // i
    ('ी', Weight::Long),  // ii
    ('ु', Weight::Short), // u
    ('ू', Weight::Long),  // uu
    ('ृ', Weight::Short), // vocalic r
    ('ॄ', Weight::Long),  // vocalic rr
    ('ॢ', Weight::Short), // vocalic l
    ('ॣ', Weight::Long),  // vocalic ll
    ('े', Weight::Long),  // e
    ('ै', Weight::Long),  // ai
    ('ो', Weight::Long),  // o
    ('ौ', Weight::Long),  // au
];

/// The class of one decoded codepoint. Classification depends on the
/// codepoint alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grapheme {
    ShortVowel,
    LongVowel,
    Consonant,
    VowelSign(Weight),
    /// Anusvara or visarga.
    Modifier,
    /// Halanta: kills the inherent vowel of the preceding consonant.
    Virama,
    Nukta,
    Separator,
    Punctuation,
    Other,
}

impl Grapheme {
    pub fn classify(c: char) -> Self {
        match c {
            'अ' | 'इ' | 'उ' | 'ऋ' | 'ऌ' => Grapheme::ShortVowel,
            'आ' | 'ई' | 'ऊ' | 'ॠ' | 'ॡ' | 'ए' | 'ऐ' | 'ओ' | 'औ' => Grapheme::LongVowel,
            // क..ह and the precomposed nukta forms क़..य़
            '\u{0915}'..='\u{0939}' | '\u{0958}'..='\u{095f}' => Grapheme::Consonant,
            ANUSVARA | VISARGA => Grapheme::Modifier,
            HALANTA => Grapheme::Virama,
            NUKTA => Grapheme::Nukta,
            DANDA | DOUBLE_DANDA | ',' | ';' | '.' | '!' | '?' => Grapheme::Punctuation,
            c if c.is_whitespace() => Grapheme::Separator,
            c => match matra_weight(c) {
                Some(w) => Grapheme::VowelSign(w),
                None => Grapheme::Other,
            },
        }
    }

    /// Independent vowels and vowel signs: the marks the per-line counter
    /// looks for.
    pub fn is_vowel_mark(self) -> bool {
        matches!(
            self,
            Grapheme::ShortVowel | Grapheme::LongVowel | Grapheme::VowelSign(_)
        )
    }
}

pub fn matra_weight(c: char) -> Option<Weight> {
    MATRA_WEIGHTS
        .iter()
        .find(|&&(m, _)| m == c)
        .map(|&(_, w)| w)
}

/// Whether `c` belongs to the Devanagari Unicode block.
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097f}').contains(&c)
}
