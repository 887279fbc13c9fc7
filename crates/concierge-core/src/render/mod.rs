//! Rendering policy for chat messages.
//!
//! Assistant replies are Markdown and render as rich text; visitor messages
//! render as plain text. Some upstream workflows encode newlines as the two
//! characters `\` `n`, so assistant text is unescaped before rendering.

pub mod html;

use std::borrow::Cow;

pub use html::{render_assistant_html, render_transcript_html, render_visitor_html};

/// Replace every literal `\n` escape sequence with a real line break.
pub fn unescape_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\\n") {
        Cow::Owned(text.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
