//! Terminal rendering of the conversation.
//!
//! `ChatRenderer` renders assistant replies as Markdown with `termimad`
//! after the same escaped-newline cleanup the HTML renderer applies.
//! `TranscriptView` tracks which log entries have already been drawn so each
//! state change prints only the new tail, keeping the newest entry at the
//! bottom of the terminal.

use console::style;
use termimad::MadSkin;
use termimad::crossterm::style::Color;

use concierge_core::render::unescape_newlines;
use concierge_types::chat::{ConversationState, Message, Sender};

/// Terminal Markdown renderer for assistant replies.
pub struct ChatRenderer {
    skin: MadSkin,
    assistant_label: String,
}

impl ChatRenderer {
    pub fn new(assistant_label: impl Into<String>) -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.headers[1].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);

        Self {
            skin,
            assistant_label: assistant_label.into(),
        }
    }

    /// Render assistant Markdown for the terminal.
    pub fn render_assistant(&self, text: &str) -> String {
        let source = unescape_newlines(text);
        format!("{}", self.skin.term_text(&source))
    }

    /// Print one log entry.
    ///
    /// Visitor lines are echoed by the prompt already, so only the history
    /// view prints them.
    pub fn print_message(&self, message: &Message) {
        match message.sender {
            Sender::Visitor => {
                println!("  {} {}", style("You >").green().bold(), message.text);
            }
            Sender::Assistant => {
                println!();
                println!("  {}", style(&self.assistant_label).cyan().bold());
                for line in self.render_assistant(&message.text).trim_end().lines() {
                    println!("  {line}");
                }
                println!();
            }
        }
    }
}

/// Remembers how much of the log has been drawn.
#[derive(Debug, Default)]
pub struct TranscriptView {
    shown: usize,
}

impl TranscriptView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries appended since the last call.
    pub fn unseen<'a>(&mut self, state: &'a ConversationState) -> &'a [Message] {
        let start = self.shown.min(state.log.len());
        self.shown = state.log.len();
        &state.log[start..]
    }

    /// Print the assistant replies appended since the last refresh.
    pub fn refresh(&mut self, state: &ConversationState, renderer: &ChatRenderer) {
        for message in self.unseen(state) {
            if !message.is_visitor() {
                renderer.print_message(message);
            }
        }
    }
}
