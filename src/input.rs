// File: src/input.rs
//! Text acquisition. Whatever produces the verse (typing, a file, an OCR
//! service) hands the engine plain text; nothing here is part of the
//! prosody pipeline.

use crate::core::script::{is_devanagari, DANDA, DOUBLE_DANDA};
use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Latin characters a recogniser commonly emits in place of Devanagari.
const LOOKALIKES: [(char, char); 5] = [
    ('o', 'ो'),
    ('O', 'ओ'),
    ('0', '०'),
    ('l', 'ल'),
    ('I', 'इ'),
];

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Cleans text returned by a character recogniser: look-alike Latin
/// characters are mapped to Devanagari, then everything outside the
/// Devanagari block other than whitespace and dandas is dropped.
pub fn clean_recognized_text(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| {
            LOOKALIKES
                .iter()
                .find(|&&(from, _)| from == c)
                .map_or(c, |&(_, to)| to)
        })
        .filter(|&c| is_devanagari(c) || c.is_whitespace() || c == DANDA || c == DOUBLE_DANDA)
        .collect()
}
