use chandas_core::core::matcher::MeterMatcher;
use chandas_core::{ChandasEngine, ChandasError, Confidence, Weight, WeightPattern};

const GAYATRI: &str = "ॐ भूर्भुवः स्वः\nतत्सवितुर्वरेण्यं\nभर्गो देवस्य धीमहि\nधियो यो नः प्रचोदयात्";

fn shloka_pattern() -> Vec<Weight> {
    use Weight::{Long as G, Short as L};
    let padas = [
        [G, G, L, G, L, G, L, G],
        [L, G, G, L, L, G, L, L],
        [G, L, G, G, L, G, L, G],
        [L, L, L, G, L, G, L, L],
    ];
    padas.concat()
}

#[test]
fn gayatri_mantra_is_gayatri() {
    let analysis = ChandasEngine::new().analyze(GAYATRI).unwrap();
    let result = &analysis.result;
    assert!((21..=27).contains(&result.pattern.len()), "got {}", result.pattern.len());
    assert_eq!(result.meter, "Gayatri");
    assert_eq!(result.confidence, Confidence::Medium);
    assert!(result.details.contains("8 syllables per pada"));
    assert_eq!(analysis.lines.len(), 4);
}

#[test]
fn empty_input_never_reaches_the_matcher() {
    let engine = ChandasEngine::new();
    assert!(matches!(engine.analyze(""), Err(ChandasError::NoAnalyzableText)));
}

#[test]
fn conforming_shloka_pattern_is_high_confidence() {
    let pattern = WeightPattern::new(shloka_pattern());
    assert_eq!(pattern.len(), 32);
    let result = MeterMatcher::new().classify(&pattern, &[8, 8, 8, 8]);
    assert_eq!(result.meter, "Anushtup (Shloka)");
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn flipping_one_sixth_syllable_loses_the_exact_match() {
    for pada in 0..4 {
        let mut weights = shloka_pattern();
        weights[pada * 8 + 5] = Weight::Short;
        let result = MeterMatcher::new().classify(&WeightPattern::new(weights), &[]);
        assert_ne!(result.confidence, Confidence::High, "pada {}", pada);
        assert!(matches!(result.confidence, Confidence::Medium | Confidence::Low));
    }
}

#[test]
fn lone_long_vowel() {
    let analysis = ChandasEngine::new().analyze("ई").unwrap();
    assert_eq!(analysis.result.pattern.as_slice(), &[Weight::Long]);
    assert_eq!(analysis.result.meter, "Unknown Pattern");
    assert_eq!(analysis.result.confidence, Confidence::Low);
}

#[test]
fn shloka_text_matches_exactly() {
    // Independent vowels only, so every weight is fixed by the vowel itself:
    // ई (G) and अ (L) laid out as GGGG LGLG per pada.
    let pada = "ई ई ई ई अ ई अ ई";
    let verse = [pada; 4].join("\n");
    let result = ChandasEngine::new().analyze(&verse).unwrap().result;
    assert_eq!(result.meter, "Anushtup (Shloka)");
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn verse_delimiters_do_not_change_the_result() {
    let engine = ChandasEngine::new();
    let plain = engine.analyze(GAYATRI).unwrap();
    let marked = engine.analyze(&format!("{}।।\n॥ १ ॥", GAYATRI.replace('\n', "।\n"))).unwrap();
    assert_eq!(plain.result, marked.result);
}
