use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Word document parse error: {0}")]
    DocxParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Raw text pulled out of one loaded document.
pub struct LoadedDocument {
    pub raw_text: String,
    pub source: String,
}

pub mod clipboard;
pub mod docx;
pub mod worker;
