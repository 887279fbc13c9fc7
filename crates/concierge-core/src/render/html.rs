//! HTML rendering of chat messages.
//!
//! Uses `pulldown-cmark` for assistant Markdown with a small event rewrite:
//! links open in a new browsing context and carry the call-to-action class,
//! lists carry the list class, soft breaks become `<br />`, and raw HTML from
//! the answer is escaped rather than passed through. Link and image targets
//! with unsafe schemes are emptied.

use std::fmt::Write;

use concierge_types::chat::{Message, Sender};
use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, html};

use super::unescape_newlines;

/// Class applied to every link in an assistant reply.
pub const LINK_CLASS: &str = "chat-cta";

/// Class applied to every list in an assistant reply.
pub const LIST_CLASS: &str = "chat-list";

/// Render an assistant reply (Markdown) to an HTML fragment.
pub fn render_assistant_html(text: &str) -> String {
    let source = unescape_newlines(text);
    let parser = Parser::new_ext(&source, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser.map(rewrite_event));
    out
}

/// Render a visitor message as escaped plain text.
pub fn render_visitor_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Render the whole log, one wrapper per message, ending with the
/// `chat-end` anchor that marks the newest entry.
pub fn render_transcript_html(log: &[Message]) -> String {
    let mut out = String::from("<div class=\"chat-log\">\n");
    for message in log {
        let _ = match message.sender {
            Sender::Visitor => writeln!(
                out,
                "<div class=\"message visitor\">{}</div>",
                render_visitor_html(&message.text)
            ),
            Sender::Assistant => writeln!(
                out,
                "<div class=\"message assistant\"><div class=\"prose\">{}</div></div>",
                render_assistant_html(&message.text)
            ),
        };
    }
    out.push_str("<div id=\"chat-end\"></div>\n</div>\n");
    out
}

fn rewrite_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            ..
        }) => Event::Html(open_link(link_type, &dest_url, &title).into()),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        Event::End(TagEnd::Link) => Event::Html(CowStr::Borrowed("</a>")),
        Event::Start(Tag::List(None)) => {
            Event::Html(format!("<ul class=\"{LIST_CLASS}\">\n").into())
        }
        Event::Start(Tag::List(Some(1))) => {
            Event::Html(format!("<ol class=\"{LIST_CLASS}\">\n").into())
        }
        Event::Start(Tag::List(Some(start))) => {
            Event::Html(format!("<ol start=\"{start}\" class=\"{LIST_CLASS}\">\n").into())
        }
        Event::End(TagEnd::List(true)) => Event::Html(CowStr::Borrowed("</ol>\n")),
        Event::End(TagEnd::List(false)) => Event::Html(CowStr::Borrowed("</ul>\n")),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::SoftBreak => Event::HardBreak,
        other => other,
    }
}

fn open_link(link_type: LinkType, dest_url: &str, title: &str) -> String {
    // Email autolinks carry the bare address.
    let href = match link_type {
        LinkType::Email => format!("mailto:{dest_url}"),
        _ => dest_url.to_string(),
    };
    let href = if is_safe_url(&href) { href.as_str() } else { "" };
    let mut tag = format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"{LINK_CLASS}\"",
        html_escape::encode_double_quoted_attribute(href)
    );
    if !title.is_empty() {
        let _ = write!(
            tag,
            " title=\"{}\"",
            html_escape::encode_double_quoted_attribute(title)
        );
    }
    tag.push('>');
    tag
}

/// Relative URLs and the usual web/contact schemes are allowed; anything
/// else (`javascript:`, `data:`, ...) is dropped.
fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    match lower.split_once(':') {
        None => true,
        // A colon after a path or query separator is not a scheme.
        Some((scheme, _)) if scheme.contains(['/', '?', '#']) => true,
        Some((scheme, _)) => matches!(scheme, "http" | "https" | "mailto" | "tel"),
    }
}
