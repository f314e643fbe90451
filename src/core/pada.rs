// File: src/core/pada.rs
use crate::core::script::Grapheme;
use crate::core::types::PadaLine;

/// Strips verse delimiters and punctuation, keeping line breaks intact.
pub fn clean_verse(text: &str) -> String {
    text.chars()
        .filter(|&c| Grapheme::classify(c) != Grapheme::Punctuation)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Splits a cleaned verse into its padas: one per non-blank line.
pub fn split_padas(cleaned: &str) -> Vec<&str> {
    cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Counts independent vowels and vowel signs in one line. Consonants bearing
/// only the inherent vowel are not counted, so on real text this runs lower
/// than the syllabifier's count.
pub fn count_syllables(line: &str) -> usize {
    line.chars()
        .filter(|&c| Grapheme::classify(c).is_vowel_mark())
        .count()
}

pub fn pada_lines(cleaned: &str) -> Vec<PadaLine> {
    split_padas(cleaned)
        .into_iter()
        .map(|line| PadaLine {
            text: line.to_string(),
            syllable_count: count_syllables(line),
        })
        .collect()
}
