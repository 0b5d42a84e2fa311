use docx_rs::{Docx, Paragraph, Run};
use std::fs::{self, File};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};
use word2csv::app::{App, AppEvent};
use word2csv::formatter::{render, tokenize, Token};
use word2csv::input::docx::load;
use word2csv::output::{output_path, save_csv};

fn write_docx(path: &Path, paragraphs: &[&str]) {
    let mut docx = Docx::new();
    for paragraph in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*paragraph)));
    }
    let file = File::create(path).unwrap();
    docx.build().pack(file).unwrap();
}

fn wait_for_extraction(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.state.extracting && Instant::now() < deadline {
        app.poll_extractions();
        thread::sleep(Duration::from_millis(10));
    }
    app.poll_extractions();
}

#[test]
fn end_to_end_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("greeting.docx");
    write_docx(&source, &["Hello World 123"]);

    let loaded = load(source.to_str().unwrap()).expect("Should extract text");
    assert_eq!(loaded.raw_text, "Hello World 123\n");

    let tokens = tokenize(&loaded.raw_text);
    let fields: Vec<String> = tokens.iter().map(Token::field).collect();
    assert_eq!(fields, ["\"Hello\"", "\"World\"", "123"]);

    let csv = render(&tokens);
    assert_eq!(csv, "\"Hello\"\n\"World\"\n123");

    let target = output_path(Some(&source));
    assert_eq!(target.file_name().unwrap(), "greeting.csv");
    save_csv(&target, &csv).unwrap();
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "\"Hello\"\n\"World\"\n123"
    );
}

#[test]
fn app_converts_document_through_events() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("figures.docx");
    write_docx(&source, &["Revenue grew 42", "Margin was 3.14 percent"]);

    let mut app = App::new();
    app.handle_event(AppEvent::LoadFile(source.to_str().unwrap().to_string()));
    wait_for_extraction(&mut app);

    let render_state = app.render_state();
    assert_eq!(render_state.success.as_deref(), Some("File loaded successfully!"));
    assert!(render_state.error.is_none());
    assert_eq!(
        render_state.preview_rows,
        [
            "\"Revenue\"",
            "\"grew\"",
            "42",
            "\"Margin\"",
            "\"was\"",
            "3.14",
            "\"percent\""
        ]
    );
    assert!(render_state.can_save);
    assert_eq!(render_state.output_name.as_deref(), Some("figures.csv"));

    app.handle_event(AppEvent::Save);

    let saved = fs::read_to_string(dir.path().join("figures.csv")).unwrap();
    assert_eq!(
        saved,
        "\"Revenue\"\n\"grew\"\n42\n\"Margin\"\n\"was\"\n3.14\n\"percent\""
    );
    assert!(app
        .render_state()
        .success
        .as_deref()
        .unwrap()
        .starts_with("Saved "));
}

#[test]
fn app_keeps_previous_tokens_when_next_load_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("good.docx");
    write_docx(&source, &["keep these tokens"]);

    let bogus = dir.path().join("bogus.docx");
    fs::write(&bogus, b"this is not a word document").unwrap();

    let mut app = App::new();
    app.handle_event(AppEvent::LoadFile(source.to_str().unwrap().to_string()));
    wait_for_extraction(&mut app);
    assert_eq!(app.render_state().preview_rows.len(), 3);

    app.handle_event(AppEvent::LoadFile(bogus.to_str().unwrap().to_string()));
    wait_for_extraction(&mut app);

    let render_state = app.render_state();
    assert_eq!(
        render_state.error.as_deref(),
        Some("Error processing the file. Please try again.")
    );
    assert!(render_state.success.is_none());
    // the earlier conversion is still available for saving
    assert_eq!(render_state.preview_rows.len(), 3);
    assert!(render_state.can_save);
}
