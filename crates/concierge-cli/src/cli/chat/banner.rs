//! Welcome banner display for chat sessions.

use console::style;

use concierge_types::session::SessionId;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(title: &str, session_id: &SessionId) {
    println!();
    println!("  \u{1f3e1} {}", style(title).cyan().bold());
    println!();
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(session_id.short()).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
