// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod persistence;
pub mod render;
pub mod samples;

pub use crate::core::engine::ChandasEngine;
pub use crate::core::types::{ClassificationResult, Confidence, VerseAnalysis, Weight, WeightPattern};
pub use crate::error::{ChandasError, Result};
