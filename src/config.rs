// File: src/config.rs
use crate::error::{ChandasError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colour laghu and guru differently on the terminal.
    pub color: bool,
    /// Print the ⏑/— row beneath the L/G rows.
    pub symbols: bool,
    /// Print each syllable's akshara beside its weight.
    pub show_aksharas: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            symbols: true,
            show_aksharas: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChandasConfig {
    pub display: DisplayConfig,
}

impl ChandasConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| ChandasError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load(p).unwrap_or_else(|e| {
                warn!("Falling back to default config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
