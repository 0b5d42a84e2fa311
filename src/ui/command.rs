//! Command parsing for the command deck
//!
//! Parses the input line at the bottom of the screen:
//! - `@<path>` → load a Word document from that path
//! - `@@` → load the path currently on the clipboard
//! - `:s` or `:save` → save the CSV
//! - `:h` or `:help` → help overlay
//! - `:q` or `:quit` → quit

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Save,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "s" | "save" => Command::Save,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let path = rest.trim();
        if path.is_empty() || path == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(path.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Translation layer between command deck input and the App core
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Save => AppEvent::Save,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
