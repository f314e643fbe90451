use crate::core::matcher::MeterMatcher;
use crate::core::pada::{clean_verse, pada_lines};
use crate::core::syllabifier::Syllabifier;
use crate::core::types::{ClassificationResult, VerseAnalysis, WeightPattern};
use crate::error::{ChandasError, Result};
use log::debug;

// The engine holds no per-call state, so one instance can serve any number
// of concurrent analyses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChandasEngine {
    pub syllabifier: Syllabifier,
    pub matcher: MeterMatcher,
}

impl ChandasEngine {
    pub fn new() -> Self {
        Self {
            syllabifier: Syllabifier::new(),
            matcher: MeterMatcher::new(),
        }
    }

    /// Runs the full pipeline: cleaning, syllabification, per-line counting
    /// and meter matching.
    ///
    /// Returns [`ChandasError::NoAnalyzableText`] when the text yields no
    /// syllables; the matcher is not invoked in that case.
    pub fn analyze(&self, text: &str) -> Result<VerseAnalysis> {
        if text.trim().is_empty() {
            return Err(ChandasError::NoAnalyzableText);
        }

        let cleaned = clean_verse(text);
        let syllables = self.syllabifier.syllabify(&cleaned);
        if syllables.is_empty() {
            debug!("No syllables found in {} chars of input", text.chars().count());
            return Err(ChandasError::NoAnalyzableText);
        }

        let lines = pada_lines(&cleaned);
        let pattern: WeightPattern = syllables.iter().map(|s| s.weight).collect::<Vec<_>>().into();
        let per_line: Vec<usize> = lines.iter().map(|l| l.syllable_count).collect();
        debug!(
            "Syllabified {} padas into {} syllables: {}",
            lines.len(),
            pattern.len(),
            pattern
        );

        let result = self.matcher.classify(&pattern, &per_line);
        Ok(VerseAnalysis {
            lines,
            syllables,
            result,
        })
    }

    /// Classifies a weight pattern directly, skipping syllabification.
    pub fn classify_pattern(&self, pattern: &WeightPattern) -> Result<ClassificationResult> {
        if pattern.is_empty() {
            return Err(ChandasError::NoAnalyzableText);
        }
        Ok(self.matcher.classify(pattern, &[]))
    }
}
