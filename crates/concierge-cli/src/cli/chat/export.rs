//! HTML transcript export.
//!
//! Wraps the rendered conversation in a standalone page so it can be opened
//! in a browser; links keep their new-tab behaviour and CTA class.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use concierge_core::render::render_transcript_html;
use concierge_types::chat::Message;
use concierge_types::session::SessionId;

/// Build a complete HTML document for the conversation.
pub fn transcript_document(title: &str, session_id: &SessionId, log: &[Message]) -> String {
    let title = html_escape::encode_text(title);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <meta name=\"concierge-session\" content=\"{session}\">\n<meta name=\"generated\" content=\"{generated}\">\n\
         </head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        session = html_escape::encode_double_quoted_attribute(session_id.as_str()),
        generated = Utc::now().to_rfc3339(),
        body = render_transcript_html(log),
    )
}

/// Write the transcript to `path`, creating parent directories.
pub async fn write_transcript(
    path: &Path,
    title: &str,
    session_id: &SessionId,
    log: &[Message],
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, transcript_document(title, session_id, log))
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> Vec<Message> {
        vec![
            Message::visitor("What listings are available?"),
            Message::assistant("Here are 3 listings:\\n- [Flat](https://example.com/1)"),
        ]
    }

    #[test]
    fn test_document_contains_rendered_log() {
        let sid = SessionId::from_stored("sid-1").unwrap();
        let doc = transcript_document("Real Estate AI Chatbot", &sid, &sample_log());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Real Estate AI Chatbot</title>"));
        assert!(doc.contains("content=\"sid-1\""));
        assert!(doc.contains("class=\"message visitor\""));
        assert!(doc.contains("class=\"chat-cta\""));
        assert!(doc.contains("<ul class=\"chat-list\">"));
        assert!(doc.contains("id=\"chat-end\""));
    }

    #[test]
    fn test_title_is_escaped() {
        let sid = SessionId::from_stored("sid").unwrap();
        let doc = transcript_document("<Homes & Co>", &sid, &[]);
        assert!(doc.contains("<title>&lt;Homes &amp; Co&gt;</title>"));
    }

    #[tokio::test]
    async fn test_write_transcript_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("chat.html");
        let sid = SessionId::from_stored("sid").unwrap();

        write_transcript(&path, "Chat", &sid, &sample_log())
            .await
            .unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains("What listings are available?"));
    }
}
