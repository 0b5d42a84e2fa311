use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::state::{UploadEvent, UploadState};
use crate::formatter::{render, Token};
use crate::input::clipboard;
use crate::input::worker::{spawn_extraction, ExtractionOutcome};
use crate::output;
use log::{debug, error, info};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// What the user sees when extraction fails; the underlying cause goes to
/// the log instead.
const EXTRACTION_ERROR_MESSAGE: &str = "Error processing the file. Please try again.";

pub struct App {
    pub mode: AppMode,
    pub state: UploadState,
    command_buffer: String,
    preview_scroll: usize,
    outcome_tx: Sender<ExtractionOutcome>,
    outcome_rx: Receiver<ExtractionOutcome>,
}

impl App {
    pub fn new() -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            mode: AppMode::Main,
            state: UploadState::new(),
            command_buffer: String::new(),
            preview_scroll: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => self.start_upload(PathBuf::from(path)),
            AppEvent::LoadClipboard => match clipboard::read_path() {
                Ok(path) => self.start_upload(PathBuf::from(path)),
                Err(err) => {
                    error!("clipboard read failed: {err}");
                    self.state.apply(UploadEvent::Warning {
                        message: format!("Could not read the clipboard: {err}"),
                    });
                }
            },
            AppEvent::Save => self.save_csv(),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::InvalidCommand(input) => {
                self.state.apply(UploadEvent::Warning {
                    message: format!("Unknown command: {input}"),
                });
            }
        }
    }

    fn start_upload(&mut self, source: PathBuf) {
        let attempt = self.state.attempt + 1;
        info!("loading {} (attempt {attempt})", source.display());

        self.state.apply(UploadEvent::UploadStarted {
            attempt,
            source: source.clone(),
        });
        spawn_extraction(
            source.to_string_lossy().into_owned(),
            attempt,
            self.outcome_tx.clone(),
        );
    }

    /// Drain finished extractions. Outcomes of superseded attempts are
    /// dropped by the reducer, so a slow old load can never overwrite a
    /// newer one.
    pub fn poll_extractions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            match outcome.result {
                Ok(doc) => {
                    debug!("extracted {} chars from {}", doc.raw_text.len(), doc.source);
                    self.state.apply(UploadEvent::ExtractionSucceeded {
                        attempt: outcome.attempt,
                        raw_text: doc.raw_text,
                    });
                    self.preview_scroll = 0;
                }
                Err(err) => {
                    error!("error processing the file: {err}");
                    self.state.apply(UploadEvent::ExtractionFailed {
                        attempt: outcome.attempt,
                        message: EXTRACTION_ERROR_MESSAGE.to_string(),
                    });
                }
            }
        }
    }

    /// Saving is structurally gated: with no tokens the save hint renders
    /// disabled and this is a no-op.
    fn save_csv(&mut self) {
        if !self.state.can_save() {
            return;
        }

        let path = output::output_path(self.state.source.as_deref());
        let csv = render(&self.state.tokens);
        match output::save_csv(&path, &csv) {
            Ok(()) => {
                info!("saved {} rows to {}", self.state.tokens.len(), path.display());
                self.state.apply(UploadEvent::SaveSucceeded { path });
            }
            Err(err) => {
                error!("save failed: {err}");
                self.state.apply(UploadEvent::SaveFailed {
                    message: format!("Could not save CSV: {err}"),
                });
            }
        }
    }

    pub fn push_input(&mut self, c: char) {
        self.command_buffer.push(c);
    }

    pub fn pop_input(&mut self) {
        self.command_buffer.pop();
    }

    pub fn clear_input(&mut self) {
        self.command_buffer.clear();
    }

    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.command_buffer)
    }

    pub fn close_help(&mut self) {
        if self.mode == AppMode::Help {
            self.mode = AppMode::Main;
        }
    }

    pub fn scroll_preview_up(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_sub(1);
    }

    pub fn scroll_preview_down(&mut self) {
        if self.preview_scroll + 1 < self.state.tokens.len() {
            self.preview_scroll += 1;
        }
    }

    pub fn render_state(&self) -> RenderState {
        let output_name = if self.state.can_save() {
            output::output_path(self.state.source.as_deref())
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        } else {
            None
        };

        RenderState {
            mode: self.mode,
            file_name: self.state.file_name(),
            error: self.state.error.clone(),
            success: self.state.success.clone(),
            extracting: self.state.extracting,
            preview_rows: self.state.tokens.iter().map(Token::field).collect(),
            scroll: self.preview_scroll,
            can_save: self.state.can_save(),
            output_name,
            command_buffer: self.command_buffer.clone(),
        }
    }
}
