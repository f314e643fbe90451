// File: src/render.rs
use crate::config::DisplayConfig;
use crate::core::types::{ClassificationResult, VerseAnalysis, Weight, WeightPattern};
use crossterm::style::{Color, Stylize};
use std::fmt::Write;

const LAGHU_COLOR: Color = Color::Rgb { r: 0x4f, g: 0x46, b: 0xe5 };
const GURU_COLOR: Color = Color::Rgb { r: 0xf5, g: 0x9e, b: 0x0b };

/// One pada's worth of weights, each with its akshara when known.
type PadaRow<'a> = Vec<(Weight, Option<&'a str>)>;

/// Formats classification results for the terminal.
pub struct PatternRenderer {
    config: DisplayConfig,
}

impl PatternRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn render_analysis(&self, analysis: &VerseAnalysis) -> String {
        let mut rows: Vec<PadaRow> = Vec::new();
        for s in &analysis.syllables {
            if rows.len() <= s.pada {
                rows.resize_with(s.pada + 1, Vec::new);
            }
            rows[s.pada].push((s.weight, Some(s.text.as_str())));
        }
        rows.retain(|r| !r.is_empty());
        if rows.len() == 1 {
            rows = split_evenly(rows.remove(0));
        }
        self.render(&analysis.result, &rows)
    }

    pub fn render_result(&self, result: &ClassificationResult) -> String {
        let rows = split_evenly(pattern_row(&result.pattern));
        self.render(result, &rows)
    }

    fn render(&self, result: &ClassificationResult, rows: &[PadaRow]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Chandas: {}", result.meter);
        let _ = writeln!(out, "Confidence: {}", result.confidence);
        let _ = writeln!(out, "Pattern: {}", result.pattern);
        out.push('\n');

        for (i, row) in rows.iter().enumerate() {
            let _ = write!(out, "Pada {}:", i + 1);
            for &(weight, akshara) in row {
                out.push(' ');
                if let (true, Some(text)) = (self.config.show_aksharas, akshara) {
                    let _ = write!(out, "{}/", text);
                }
                out.push_str(&self.paint(weight, weight.symbol()));
            }
            out.push('\n');
        }

        if self.config.symbols {
            out.push('\n');
            for row in rows {
                let marks: Vec<String> = row.iter().map(|&(w, _)| self.paint(w, w.mark())).collect();
                let _ = writeln!(out, "{}", marks.join(" "));
            }
        }

        let _ = write!(out, "\n{}", result.details);
        out
    }

    fn paint(&self, weight: Weight, c: char) -> String {
        if !self.config.color {
            return c.to_string();
        }
        let color = match weight {
            Weight::Short => LAGHU_COLOR,
            Weight::Long => GURU_COLOR,
        };
        c.to_string().with(color).bold().to_string()
    }
}

fn pattern_row(pattern: &WeightPattern) -> PadaRow<'static> {
    pattern.iter().map(|&w| (w, None)).collect()
}

/// Splits a single row into four near-equal padas of ceil(n/4) syllables.
fn split_evenly(row: PadaRow) -> Vec<PadaRow> {
    if row.is_empty() {
        return Vec::new();
    }
    let size = (row.len() + 3) / 4;
    row.chunks(size).map(|c| c.to_vec()).collect()
}
