// File: src/persistence.rs
use crate::core::types::VerseAnalysis;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Binary,
}

impl ReportFormat {
    /// `.json` files are written as JSON; anything else as bincode.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Binary,
        }
    }
}

/// Writes the analysis next to `path` in a temp file, then renames it into
/// place so readers never observe a partial report.
pub fn save_report(analysis: &VerseAnalysis, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match ReportFormat::for_path(path) {
            ReportFormat::Json => serde_json::to_writer_pretty(&mut writer, analysis)?,
            ReportFormat::Binary => bincode::serialize_into(&mut writer, analysis)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<VerseAnalysis> {
    let reader = BufReader::new(File::open(path)?);
    let analysis = match ReportFormat::for_path(path) {
        ReportFormat::Json => serde_json::from_reader(reader)?,
        ReportFormat::Binary => bincode::deserialize_from(reader)?,
    };
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;
    use crate::ChandasEngine;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ReportFormat::for_path(Path::new("a/b.JSON")), ReportFormat::Json);
        assert_eq!(ReportFormat::for_path(Path::new("report.bin")), ReportFormat::Binary);
        assert_eq!(ReportFormat::for_path(Path::new("report")), ReportFormat::Binary);
    }

    #[test]
    fn reports_survive_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = ChandasEngine::new()
            .analyze(samples::lookup("gita").unwrap().text)
            .unwrap();

        for name in ["nested/report.json", "report.bin"] {
            let path = dir.path().join(name);
            save_report(&analysis, &path).unwrap();
            assert_eq!(load_report(&path).unwrap(), analysis);
        }
    }

    #[test]
    fn json_report_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.json");
        let analysis = ChandasEngine::new().analyze("ई").unwrap();
        save_report(&analysis, &path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"meter\": \"Unknown Pattern\""));
        assert!(raw.contains("\"confidence\": \"Low\""));
    }
}
