pub mod config;
pub mod http;
pub mod tasks;
pub mod terminal;

use jugaad_chat::input::SUGGESTIONS;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ListSuggestions,
    /// `/N` fills the input with suggestion chip N (1-based).
    Suggestion(&'static str),
    /// Anything else; an empty line sends what is already in the input.
    Send(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "/quit" | "/exit" => return Command::Quit,
            "/suggest" => return Command::ListSuggestions,
            _ => {}
        }
        let chip = trimmed
            .strip_prefix('/')
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| SUGGESTIONS.get(i));
        match chip {
            Some(text) => Command::Suggestion(text),
            None => Command::Send(line.to_string()),
        }
    }
}
