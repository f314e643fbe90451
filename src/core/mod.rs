// src/core/mod.rs

pub mod catalogue;
pub mod engine;
pub mod matcher;
pub mod pada;
pub mod script;
pub mod syllabifier;
pub mod types;
