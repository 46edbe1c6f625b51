//! Turns shell input lines into UI events.

use dicepass::commands::UiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(UiEvent),
    Blank,
    Unknown(String),
}

/// Parses one input line. The command is the first word; everything after
/// the first space is its argument, kept verbatim for `sep`.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Input::Blank;
    }

    let trimmed = line.trim_start();
    let (command, arg) = match trimmed.split_once(' ') {
        Some((command, arg)) => (command, arg),
        None => (trimmed, ""),
    };

    let event = match command.to_lowercase().as_str() {
        "gen" | "generate" | "r" => UiEvent::Generate,
        "copy" | "c" => UiEvent::Copy,
        "help" | "h" | "?" => UiEvent::Help,
        "sep" | "separator" => UiEvent::SetSeparator(arg.to_string()),
        "min" => UiEvent::SetMinLen(arg.to_string()),
        "max" => UiEvent::SetMaxLen(arg.to_string()),
        "wc" => UiEvent::SetWordCount(arg.to_string()),
        "dark" => UiEvent::ToggleDarkMode,
        "extra" => UiEvent::ToggleExtra {
            confirmed: matches!(arg.trim(), "yes" | "y"),
        },
        "layout" => UiEvent::ShowLayout,
        "resize" => match parse_size(arg) {
            Some((width, height)) => UiEvent::Resize { width, height },
            None => return Input::Unknown(line.to_string()),
        },
        "quit" | "q" | "exit" => UiEvent::Quit,
        _ => return Input::Unknown(line.to_string()),
    };
    Input::Event(event)
}

fn parse_size(arg: &str) -> Option<(i32, i32)> {
    let mut parts = arg.split_whitespace();
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((width, height))
}
