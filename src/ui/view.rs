use crate::app::RenderState;
use crate::ui::theme::colors;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

pub fn render_title() -> Paragraph<'static> {
    Paragraph::new("WORD TO CSV")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors::heading())
                .bg(colors::background())
                .add_modifier(Modifier::BOLD),
        )
}

/// The upload prompt box: an invitation until a file is chosen, the chosen
/// file name afterwards.
pub fn render_upload_prompt(file_name: Option<&str>) -> Paragraph<'static> {
    let (text, color) = match file_name {
        Some(name) => (format!("File loaded: {name}"), colors::text()),
        None => (
            "Type @<path> to load a Word document, or copy a path and type @@".to_string(),
            colors::dimmed(),
        ),
    };

    Paragraph::new(text)
        .block(
            Block::bordered()
                .title("Document")
                .style(Style::default().fg(colors::heading()).bg(colors::panel())),
        )
        .style(Style::default().fg(color).bg(colors::panel()))
}

/// The live preview: one CSV row per screen line, windowed by the scroll
/// offset and truncated to the pane width so a row never wraps.
pub fn render_preview(rows: &[String], scroll: usize, height: usize, width: usize) -> Paragraph<'static> {
    let lines: Vec<Line> = window(rows, scroll, height)
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                truncate_to_width(row, width),
                Style::default().fg(colors::text()),
            ))
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(format!("CSV Preview ({} rows)", rows.len()))
                .style(Style::default().fg(colors::heading()).bg(colors::panel())),
        )
        .style(Style::default().bg(colors::panel()))
}

/// One-line status: in-flight extraction, then error, then success.
pub fn render_status(state: &RenderState) -> Paragraph<'static> {
    let (text, color) = if state.extracting {
        ("Extracting document text...".to_string(), colors::dimmed())
    } else if let Some(error) = &state.error {
        (error.clone(), colors::error())
    } else if let Some(success) = &state.success {
        (success.clone(), colors::success())
    } else {
        (String::new(), colors::dimmed())
    };

    Paragraph::new(text).style(Style::default().fg(color).bg(colors::background()))
}

/// The download control: enabled with a target name once tokens exist,
/// dimmed otherwise.
pub fn render_save_hint(can_save: bool, output_name: Option<&str>) -> Paragraph<'static> {
    let (text, color) = if can_save {
        (
            format!(":s saves {}", output_name.unwrap_or("output.csv")),
            colors::heading(),
        )
    } else {
        (
            ":s save (load a document first)".to_string(),
            colors::dimmed(),
        )
    };

    Paragraph::new(text).style(Style::default().fg(color).bg(colors::background()))
}

pub fn render_command_line(buffer: &str) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(colors::heading())),
        Span::styled(buffer.to_string(), Style::default().fg(colors::text())),
    ]);

    Paragraph::new(line).style(Style::default().bg(colors::background()))
}

pub fn render_help() -> Paragraph<'static> {
    let lines: Vec<Line> = [
        "",
        "  @<path>      load a Word document",
        "  @@           load the path on the clipboard",
        "  :s  :save    save the CSV next to the document",
        "  :h  :help    this overlay",
        "  :q  :quit    quit",
        "",
        "  Up/Down scroll the preview. Any key closes this overlay.",
    ]
    .iter()
    .map(|text| Line::from(Span::styled(*text, Style::default().fg(colors::text()))))
    .collect();

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title("Help")
                .style(Style::default().fg(colors::heading()).bg(colors::panel())),
        )
        .style(Style::default().bg(colors::panel()))
}

/// The slice of rows visible at `scroll` in a pane `height` rows tall.
fn window(rows: &[String], scroll: usize, height: usize) -> &[String] {
    let start = scroll.min(rows.len());
    let end = (start + height).min(rows.len());
    &rows[start..end]
}

/// Cut `row` so its display width fits `max_width` terminal cells. Wide
/// characters count double, so CJK rows truncate earlier.
fn truncate_to_width(row: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in row.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}
