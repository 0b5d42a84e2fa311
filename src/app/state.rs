use crate::formatter::{tokenize, Token};
use std::path::PathBuf;

/// State transitions for the load/save lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    UploadStarted { attempt: u64, source: PathBuf },
    ExtractionSucceeded { attempt: u64, raw_text: String },
    ExtractionFailed { attempt: u64, message: String },
    SaveSucceeded { path: PathBuf },
    SaveFailed { message: String },
    Warning { message: String },
}

/// Everything the UI shows about the current document. Owned by the UI
/// thread and mutated only through `apply`.
#[derive(Debug, Default)]
pub struct UploadState {
    pub source: Option<PathBuf>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub tokens: Vec<Token>,
    pub attempt: u64,
    pub extracting: bool,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_name(&self) -> Option<String> {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// Saving is only offered once a non-empty token sequence exists.
    pub fn can_save(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Pure reducer over upload events.
    ///
    /// Extraction outcomes carrying an attempt id other than the current one
    /// are dropped: a newer load has superseded them.
    pub fn apply(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::UploadStarted { attempt, source } => {
                self.attempt = attempt;
                self.source = Some(source);
                self.error = None;
                self.success = None;
                self.extracting = true;
                // tokens stay until the new extraction succeeds
            }
            UploadEvent::ExtractionSucceeded { attempt, raw_text } => {
                if attempt != self.attempt {
                    return;
                }
                self.extracting = false;
                self.tokens = tokenize(&raw_text);
                self.success = Some("File loaded successfully!".to_string());
                self.error = None;
            }
            UploadEvent::ExtractionFailed { attempt, message } => {
                if attempt != self.attempt {
                    return;
                }
                self.extracting = false;
                self.error = Some(message);
                self.success = None;
                // the previous token sequence stays usable
            }
            UploadEvent::SaveSucceeded { path } => {
                self.success = Some(format!("Saved {}", path.display()));
                self.error = None;
            }
            UploadEvent::SaveFailed { message } | UploadEvent::Warning { message } => {
                self.error = Some(message);
                self.success = None;
            }
        }
    }
}
