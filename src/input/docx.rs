use super::{LoadError, LoadedDocument};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load raw text from a Word document using the docx-rs crate.
///
/// The file is read into memory whole and handed to the extractor; no size
/// limit or file-type validation happens before extraction is attempted.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| LoadError::DocxParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::DocxParse(e.to_string()))?;

    extract_raw_text(&buffer).map(|raw_text| LoadedDocument {
        raw_text,
        source: format!("docx:{}", path.display()),
    })
}

/// Extract plain text from .docx bytes, one line per paragraph.
///
/// Only paragraph runs are read; tables, styles and list structure are not
/// interpreted. Malformed input surfaces as a `DocxParse` error.
pub fn extract_raw_text(bytes: &[u8]) -> Result<String, LoadError> {
    let document = docx_rs::read_docx(bytes).map_err(|e| LoadError::DocxParse(e.to_string()))?;

    let mut text = String::new();
    for child in &document.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for child in &paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in &run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for paragraph in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*paragraph)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.docx");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_extract_raw_text_single_paragraph() {
        let bytes = docx_bytes(&["Hello World 123"]);
        let text = extract_raw_text(&bytes).unwrap();
        assert_eq!(text, "Hello World 123\n");
    }

    #[test]
    fn test_extract_raw_text_joins_paragraphs_with_newlines() {
        let bytes = docx_bytes(&["First paragraph", "Second paragraph"]);
        let text = extract_raw_text(&bytes).unwrap();
        assert_eq!(text, "First paragraph\nSecond paragraph\n");
    }

    #[test]
    fn test_extract_raw_text_empty_document() {
        let bytes = docx_bytes(&[]);
        let text = extract_raw_text(&bytes).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_extract_raw_text_rejects_garbage_bytes() {
        let result = extract_raw_text(b"this is not a zip archive");
        assert!(matches!(result, Err(LoadError::DocxParse(_))));
    }

    #[test]
    fn test_loaded_document_source_is_tagged() {
        let doc = LoadedDocument {
            raw_text: "test".to_string(),
            source: "docx:/path/to/report.docx".to_string(),
        };
        assert!(doc.source.starts_with("docx:"));
    }
}
