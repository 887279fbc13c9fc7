//! Slash command parsing for the chat loop.
//!
//! Commands start with `/`; anything else is a question for the assistant.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat.
    Exit,
    /// Show the conversation so far.
    History,
    /// Show the session id.
    Session,
    /// Write the conversation to an HTML file.
    Export(String),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_string());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/history" => Some(ChatCommand::History),
        "/session" => Some(ChatCommand::Session),
        "/export" => match arg {
            Some(path) if !path.is_empty() => Some(ChatCommand::Export(path)),
            _ => Some(ChatCommand::Unknown("/export requires a file path".to_string())),
        },
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}           {}", style("/help").cyan(), "Show this help message");
    println!("  {}          {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}        {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {}        {}", style("/session").cyan(), "Show the session id");
    println!("  {}   {}", style("/export <file>").cyan(), "Save the conversation as HTML");
    println!("  {}           {}", style("/exit").cyan(), "End the chat");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
