// File: src/core/matcher.rs
use crate::core::catalogue::{MeterTemplate, PadaRule, CATALOGUE};
use crate::core::types::{ClassificationResult, Confidence, WeightPattern};
use log::{debug, trace};

pub const UNKNOWN_METER: &str = "Unknown Pattern";

/// Matches weight patterns against the static meter catalogue.
///
/// Exact positional rules are tried first, since syllable count alone cannot
/// tell several catalogued meters apart. Failing that, the first entry whose
/// expected pada length lies within one syllable of the observed average is
/// reported. The matcher is total: every pattern yields a result.
#[derive(Debug, Clone, Copy)]
pub struct MeterMatcher {
    catalogue: &'static [MeterTemplate],
}

impl Default for MeterMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MeterMatcher {
    pub fn new() -> Self {
        Self { catalogue: &CATALOGUE }
    }

    /// `syllables_per_line` is the per-line vowel count; it is reported for
    /// diagnostics only and never decides the meter.
    pub fn classify(&self, pattern: &WeightPattern, syllables_per_line: &[usize]) -> ClassificationResult {
        let total = pattern.len();
        debug!(
            "Matching {} syllables (per line: {:?})",
            total, syllables_per_line
        );

        for meter in self.catalogue {
            if let Some(rule) = &meter.pada_rule {
                if structural_match(meter, rule, pattern) {
                    debug!("Exact match: {}", rule.exact_name);
                    return ClassificationResult {
                        meter: rule.exact_name.to_string(),
                        pattern: pattern.clone(),
                        confidence: Confidence::High,
                        details: meter.details.to_string(),
                    };
                }
            }
        }

        for meter in self.catalogue {
            let average = total as f64 / meter.pada_count as f64;
            let expected = meter.syllables_per_pada as f64;
            if average >= expected - 1.0 && average <= expected + 1.0 {
                debug!("Approximate match: {} (avg {:.2} per pada)", meter.name, average);
                return ClassificationResult {
                    meter: meter.name.to_string(),
                    pattern: pattern.clone(),
                    confidence: Confidence::Medium,
                    details: meter.details.to_string(),
                };
            }
        }

        debug!("No catalogue entry fits {} syllables", total);
        ClassificationResult {
            meter: UNKNOWN_METER.to_string(),
            pattern: pattern.clone(),
            confidence: Confidence::Low,
            details: format!(
                "The pattern doesn't match common Chandas types. Total syllables: {}. It might be a less common variety or require specialized analysis.",
                total
            ),
        }
    }
}

fn structural_match(meter: &MeterTemplate, rule: &PadaRule, pattern: &WeightPattern) -> bool {
    let total = pattern.len();
    if total.abs_diff(meter.total_syllables()) > rule.tolerance {
        return false;
    }

    // chunks_exact leaves any trailing partial pada out of the check
    let mut complete = 0;
    for (idx, pada) in pattern.as_slice().chunks_exact(meter.syllables_per_pada).enumerate() {
        if !rule.holds_for(pada) {
            trace!("{}: pada {} fails the positional rule", meter.name, idx + 1);
            return false;
        }
        complete += 1;
    }
    complete == meter.pada_count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(symbols: &str) -> ClassificationResult {
        MeterMatcher::new().classify(&WeightPattern::parse(symbols).unwrap(), &[])
    }

    const SHLOKA_PADA: &str = "GGLGLGLG";

    #[test]
    fn four_conforming_padas_are_a_shloka() {
        let result = classify(&SHLOKA_PADA.repeat(4));
        assert_eq!(result.meter, "Anushtup (Shloka)");
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.details.contains("5th syllable should be laghu"));
    }

    #[test]
    fn trailing_syllables_within_tolerance_still_match() {
        let result = classify(&format!("{}GL", SHLOKA_PADA.repeat(4)));
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn one_bad_pada_prevents_the_exact_match() {
        let bad = format!("{}GGLGLLLG{}", SHLOKA_PADA, SHLOKA_PADA.repeat(2));
        let result = classify(&bad);
        assert_ne!(result.confidence, Confidence::High);
        assert_eq!(result.meter, "Anushtup");
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn three_complete_padas_are_not_enough() {
        // 31 syllables: within tolerance but only three full padas
        let result = classify(&format!("{}GGLGLGL", SHLOKA_PADA.repeat(3)));
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn approximate_match_prefers_catalogue_order() {
        // 24 → Gayatri (24/3 = 8) before Ushnik (24/4 = 6, out of range anyway)
        assert_eq!(classify(&"L".repeat(24)).meter, "Gayatri");
        // 27 → Gayatri (9 per pada) even though Ushnik also fits (6.75)
        assert_eq!(classify(&"L".repeat(27)).meter, "Gayatri");
        // 36 → Anushtup wins over Brihati, which fits exactly
        assert_eq!(classify(&"L".repeat(36)).meter, "Anushtup");
        // 44 → Trishtup
        assert_eq!(classify(&"G".repeat(44)).meter, "Trishtup");
        // 52 → Jagati (13 per pada)
        assert_eq!(classify(&"G".repeat(52)).meter, "Jagati");
    }

    #[test]
    fn unmatched_totals_fall_back_to_unknown() {
        for n in [0usize, 1, 14, 20, 53, 100] {
            let result = classify(&"G".repeat(n));
            assert_eq!(result.meter, UNKNOWN_METER);
            assert_eq!(result.confidence, Confidence::Low);
            assert!(result.details.contains(&format!("Total syllables: {}.", n)));
        }
    }

    #[test]
    fn result_carries_the_full_pattern() {
        let pattern = WeightPattern::parse("LGLG").unwrap();
        let result = MeterMatcher::new().classify(&pattern, &[2, 2]);
        assert_eq!(result.pattern, pattern);
    }
}
