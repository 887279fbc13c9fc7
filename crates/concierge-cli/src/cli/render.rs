//! `concierge render`: assistant Markdown to HTML.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use concierge_core::render::render_assistant_html;

/// Render a Markdown answer from `file`, or stdin when `None`, and print the
/// HTML fragment.
pub async fn render_markdown(file: Option<&Path>) -> Result<()> {
    let source = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read stdin")?;
            buf
        }
    };

    print!("{}", render_assistant_html(&source));
    Ok(())
}
