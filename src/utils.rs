use reqwest::Url;

use crate::preview::ButtonId;

/// A line typed into the interactive preview board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    Toggle(ButtonId),
    Hide,
    List,
    Help,
    Quit,
}

/// Parses one line of board input. Row numbers are 1-based as printed in the
/// table; `0` and anything unrecognised yield `None`.
pub fn parse_command(line: &str) -> Option<BoardCommand> {
    let line = line.trim();
    if let Ok(n) = line.parse::<usize>() {
        return n.checked_sub(1).map(|i| BoardCommand::Toggle(ButtonId(i)));
    }

    match line.to_lowercase().as_str() {
        "h" | "hide" => Some(BoardCommand::Hide),
        "l" | "list" | "ls" => Some(BoardCommand::List),
        "?" | "help" => Some(BoardCommand::Help),
        "q" | "quit" | "exit" => Some(BoardCommand::Quit),
        _ => None,
    }
}

pub fn generate_playlist_url(api_url: &str) -> String {
    format!("{}/generate-playlist", api_url)
}

/// Builds the regeneration URL for a comma separated artist list.
pub fn playlist_generation_url(api_url: &str, artists: &str) -> Result<String, String> {
    let base = format!("{}/playlist-generation", api_url);
    Url::parse_with_params(&base, &[("artists", artists)])
        .map(|u| u.to_string())
        .map_err(|e| format!("Invalid backend URL {}: {}", base, e))
}
