use super::LoadError;

/// Read a file path from the system clipboard.
///
/// This is the drop target of the tool: copy a path from a file manager,
/// then `@@` loads it without typing.
pub fn read_path() -> Result<String, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    let path = text.trim().to_string();
    if path.is_empty() {
        return Err(LoadError::Clipboard("Clipboard holds no text".to_string()));
    }

    Ok(path)
}
