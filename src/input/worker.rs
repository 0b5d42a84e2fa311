use super::{docx, LoadError, LoadedDocument};
use std::sync::mpsc::Sender;
use std::thread;

/// Result of one extraction attempt, tagged with the attempt id that started
/// it so the receiver can drop completions a newer load has superseded.
pub struct ExtractionOutcome {
    pub attempt: u64,
    pub result: Result<LoadedDocument, LoadError>,
}

/// Runs extraction off the UI thread.
///
/// The UI thread stays free to take new commands while the document is being
/// read. A send failure only means the receiver is gone, so it is ignored.
pub fn spawn_extraction(path: String, attempt: u64, tx: Sender<ExtractionOutcome>) {
    thread::spawn(move || {
        let result = docx::load(&path);
        let _ = tx.send(ExtractionOutcome { attempt, result });
    });
}
