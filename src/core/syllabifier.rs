// File: src/core/syllabifier.rs
use crate::core::pada::split_padas;
use crate::core::script::Grapheme;
use crate::core::types::{Syllable, Weight, WeightPattern};

/// Splits Devanagari verse into syllables and resolves each one's weight in
/// a single left-to-right scan.
///
/// Rules, in the order they are tried:
/// 1. an independent short vowel followed by anusvara or visarga is guru;
/// 2. an independent short vowel followed by two consonants (a conjunct,
///    with or without an intervening halanta) is guru;
/// 3. an independent short vowel followed by one consonant, or by nothing,
///    is laghu;
/// 4. an independent long vowel is guru;
/// 5. a consonant takes the weight of its vowel sign, or is laghu when it
///    carries only the inherent vowel.
///
/// A consonant followed by halanta has no vowel of its own and yields no
/// syllable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Syllabifier;

type Scan = [(char, Grapheme)];

impl Syllabifier {
    pub fn new() -> Self {
        Self
    }

    /// Syllabifies a cleaned verse. Each non-blank line is one pada; the
    /// returned syllables record which pada they came from.
    pub fn syllabify(&self, cleaned: &str) -> Vec<Syllable> {
        let mut syllables = Vec::new();
        for (pada, line) in split_padas(cleaned).into_iter().enumerate() {
            self.syllabify_pada(line, pada, &mut syllables);
        }
        syllables
    }

    pub fn weights(&self, cleaned: &str) -> WeightPattern {
        self.syllabify(cleaned).iter().map(|s| s.weight).collect::<Vec<_>>().into()
    }

    fn syllabify_pada(&self, line: &str, pada: usize, out: &mut Vec<Syllable>) {
        let scan: Vec<(char, Grapheme)> = line
            .chars()
            .map(|c| (c, Grapheme::classify(c)))
            .filter(|&(_, g)| g != Grapheme::Punctuation)
            .collect();

        // Grapheme index where the last syllable of this pada ended.
        let mut last_end: Option<usize> = None;
        // Start of leading dead consonants waiting for the next nucleus.
        let mut onset: Option<usize> = None;
        let mut i = 0;

        while i < scan.len() {
            let start = i;
            let weight = match scan[i].1 {
                Grapheme::ShortVowel => {
                    let (weight, consumed) = short_vowel(&scan, i);
                    i += consumed;
                    weight
                }
                Grapheme::LongVowel => {
                    i += 1;
                    Weight::Long
                }
                Grapheme::Consonant => {
                    let j = skip_nukta(&scan, i + 1);
                    match class_at(&scan, j) {
                        Some(Grapheme::Virama) => {
                            i = j + 1;
                            match out.last_mut() {
                                Some(prev) if last_end == Some(start) => {
                                    prev.text.push_str(&collect_text(&scan, start, i));
                                    last_end = Some(i);
                                }
                                _ => {
                                    onset.get_or_insert(start);
                                }
                            }
                            continue;
                        }
                        Some(Grapheme::VowelSign(w)) => {
                            i = j + 1;
                            w
                        }
                        _ => {
                            i = j;
                            Weight::Short
                        }
                    }
                }
                Grapheme::Separator => {
                    onset = None;
                    i += 1;
                    continue;
                }
                _ => {
                    i += 1;
                    continue;
                }
            };

            // A trailing anusvara or visarga is written as part of the akshara.
            while class_at(&scan, i) == Some(Grapheme::Modifier) {
                i += 1;
            }

            let text_start = onset.take().unwrap_or(start);
            out.push(Syllable {
                text: collect_text(&scan, text_start, i),
                weight,
                pada,
            });
            last_end = Some(i);
        }
    }
}

fn class_at(scan: &Scan, i: usize) -> Option<Grapheme> {
    scan.get(i).map(|&(_, g)| g)
}

fn skip_nukta(scan: &Scan, i: usize) -> usize {
    if class_at(scan, i) == Some(Grapheme::Nukta) {
        i + 1
    } else {
        i
    }
}

fn collect_text(scan: &Scan, from: usize, to: usize) -> String {
    scan[from..to].iter().map(|&(c, _)| c).collect()
}

/// Resolves an independent short vowel at `i`, returning its weight and how
/// many graphemes it consumes. Following consonants are never consumed: they
/// carry vowels of their own (or none, if dead) and are scanned next.
fn short_vowel(scan: &Scan, i: usize) -> (Weight, usize) {
    match class_at(scan, i + 1) {
        Some(Grapheme::Modifier) => (Weight::Long, 2),
        Some(Grapheme::Consonant) => {
            let after = skip_nukta(scan, i + 2);
            let conjunct = match class_at(scan, after) {
                Some(Grapheme::Consonant) => true,
                Some(Grapheme::Virama) => class_at(scan, after + 1) == Some(Grapheme::Consonant),
                _ => false,
            };
            if conjunct {
                (Weight::Long, 1)
            } else {
                (Weight::Short, 1)
            }
        }
        _ => (Weight::Short, 1),
    }
}
