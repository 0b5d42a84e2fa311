//! CSV file emission
//!
//! The generated file keeps the source document's name with its extension
//! swapped for `.csv`, written next to the source. `output.csv` in the
//! working directory is the fallback when no source is known. These
//! conventions are fixed; there is no configuration surface.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension given to generated files.
const OUTPUT_EXTENSION: &str = "csv";

/// Name used when no source document is known.
const FALLBACK_OUTPUT_NAME: &str = "output.csv";

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where the CSV for `source` goes. Only the final extension is replaced, so
/// `report.final.docx` becomes `report.final.csv`.
pub fn output_path(source: Option<&Path>) -> PathBuf {
    match source {
        Some(path) => path.with_extension(OUTPUT_EXTENSION),
        None => PathBuf::from(FALLBACK_OUTPUT_NAME),
    }
}

/// Write the rendered CSV as UTF-8, replacing any existing file.
pub fn save_csv(path: &Path, csv: &str) -> Result<(), EmitError> {
    fs::write(path, csv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_docx_extension() {
        let path = output_path(Some(Path::new("/docs/report.docx")));
        assert_eq!(path, Path::new("/docs/report.csv"));
    }

    #[test]
    fn test_output_path_replaces_only_final_extension() {
        let path = output_path(Some(Path::new("report.final.docx")));
        assert_eq!(path, Path::new("report.final.csv"));
    }

    #[test]
    fn test_output_path_appends_extension_when_missing() {
        let path = output_path(Some(Path::new("notes")));
        assert_eq!(path, Path::new("notes.csv"));
    }

    #[test]
    fn test_output_path_fallback_without_source() {
        assert_eq!(output_path(None), Path::new("output.csv"));
    }

    #[test]
    fn test_save_csv_writes_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        save_csv(&path, "\"Hello\"\n\"World\"\n123").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\"Hello\"\n\"World\"\n123");
    }

    #[test]
    fn test_save_csv_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        save_csv(&path, "old").unwrap();
        save_csv(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_save_csv_unwritable_path_errors() {
        let result = save_csv(Path::new("/nonexistent-dir/out.csv"), "x");
        assert!(matches!(result, Err(EmitError::Io(_))));
    }
}
