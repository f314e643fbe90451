// src/core/types.rs
use crate::error::{ChandasError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prosodic weight of a single syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weight {
    /// Laghu, a light syllable.
    Short,
    /// Guru, a heavy syllable.
    Long,
}

impl Weight {
    /// The conventional letter: `L` for laghu, `G` for guru.
    pub fn symbol(self) -> char {
        match self {
            Weight::Short => 'L',
            Weight::Long => 'G',
        }
    }

    /// The metrical mark used in prosody manuals.
    pub fn mark(self) -> char {
        match self {
            Weight::Short => '⏑',
            Weight::Long => '—',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'L' | 'l' => Some(Weight::Short),
            'G' | 'g' => Some(Weight::Long),
            _ => None,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered weights of a verse, one per syllable, in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightPattern(Vec<Weight>);

impl WeightPattern {
    pub fn new(weights: Vec<Weight>) -> Self {
        Self(weights)
    }

    /// Parses a string of `L`/`G` symbols. Whitespace and `|` are accepted as
    /// visual pada separators and ignored.
    pub fn parse(symbols: &str) -> Result<Self> {
        let mut weights = Vec::with_capacity(symbols.len());
        for c in symbols.chars() {
            if c.is_whitespace() || c == '|' {
                continue;
            }
            match Weight::from_symbol(c) {
                Some(w) => weights.push(w),
                None => {
                    return Err(ChandasError::InvalidPattern(format!(
                        "unexpected symbol '{}' in '{}'",
                        c, symbols
                    )))
                }
            }
        }
        Ok(Self(weights))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Weight] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weight> {
        self.0.iter()
    }
}

impl From<Vec<Weight>> for WeightPattern {
    fn from(weights: Vec<Weight>) -> Self {
        Self(weights)
    }
}

impl fmt::Display for WeightPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in &self.0 {
            write!(f, "{}", w.symbol())?;
        }
        Ok(())
    }
}

/// One prosodic unit: its akshara text, its resolved weight and the index of
/// the pada (non-blank line) it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub text: String,
    pub weight: Weight,
    pub pada: usize,
}

/// A non-blank input line and its vowel/matra count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadaLine {
    pub text: String,
    pub syllable_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        };
        f.write_str(label)
    }
}

/// The matcher's verdict for one weight pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub meter: String,
    pub pattern: WeightPattern,
    pub confidence: Confidence,
    pub details: String,
}

/// Everything one analysis call produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseAnalysis {
    pub lines: Vec<PadaLine>,
    pub syllables: Vec<Syllable>,
    pub result: ClassificationResult,
}

impl VerseAnalysis {
    pub fn syllable_count(&self) -> usize {
        self.result.pattern.len()
    }

    pub fn syllables_per_line(&self) -> Vec<usize> {
        self.lines.iter().map(|l| l.syllable_count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_separators() {
        let p = WeightPattern::parse("LGL G|gl").unwrap();
        assert_eq!(p.to_string(), "LGLGGL");
        assert_eq!(p.len(), 6);
    }

    #[test]
    fn parse_rejects_other_symbols() {
        let err = WeightPattern::parse("LGX").unwrap_err();
        assert!(matches!(err, ChandasError::InvalidPattern(_)));
    }

    #[test]
    fn weight_marks() {
        assert_eq!(Weight::Short.mark(), '⏑');
        assert_eq!(Weight::Long.mark(), '—');
        assert_eq!(Confidence::Medium.to_string(), "Medium");
    }
}
