//! Console adapter for the interactive chat loop

use chrono::Local;
use crate::domain::entities::{Message, Sender};
use crate::domain::traits::Renderer;

/// Commands handled locally, without a round trip to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalCommand {
    Help,
    Version,
    Quit,
}

/// Console front end: prints every appended message and reads user lines
pub struct ConsoleAdapter;

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Read one line from stdin, without the trailing newline. Interior
    /// whitespace is preserved; trimming is the send flow's job. None on EOF.
    pub async fn read_line(&self, prompt: &str) -> Option<String> {
        use std::io::Write;
        print!("{}", prompt);
        let _ = std::io::stdout().flush();

        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
            Err(_) => None,
        }
    }

    /// Exact-match local commands; anything else goes to the server as-is.
    pub fn local_command(line: &str) -> Option<LocalCommand> {
        match line.trim() {
            "/help" => Some(LocalCommand::Help),
            "/version" => Some(LocalCommand::Version),
            "/quit" | "/exit" => Some(LocalCommand::Quit),
            _ => None,
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleAdapter {
    fn show(&mut self, message: &Message) {
        let stamp = message.timestamp.with_timezone(&Local).format("%H:%M");
        match message.sender {
            Sender::User => println!("[{}] you: {}", stamp, message.text),
            Sender::Bot => println!("[{}] bot: {}", stamp, message.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_command_matching() {
        assert_eq!(ConsoleAdapter::local_command("/help"), Some(LocalCommand::Help));
        assert_eq!(ConsoleAdapter::local_command(" /quit "), Some(LocalCommand::Quit));
        assert_eq!(ConsoleAdapter::local_command("/exit"), Some(LocalCommand::Quit));
        assert_eq!(ConsoleAdapter::local_command("/version"), Some(LocalCommand::Version));
    }

    #[test]
    fn test_plain_text_is_not_a_local_command() {
        assert_eq!(ConsoleAdapter::local_command("hello"), None);
        // Unknown slash input still goes to the server
        assert_eq!(ConsoleAdapter::local_command("/weather"), None);
        assert_eq!(ConsoleAdapter::local_command(""), None);
    }
}
