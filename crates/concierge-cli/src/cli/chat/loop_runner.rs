//! Main interactive chat loop.
//!
//! Resolves the session id, collects the visitor profile, then reads
//! questions until EOF or `/exit`. Each question goes through the
//! conversation controller; the view is refreshed from the controller's
//! watch channel so only newly appended replies are drawn.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use concierge_core::chat::session::ChatSession;
use concierge_infra::webhook::HttpWebhookBackend;
use concierge_types::error::ConversationError;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::export::write_transcript;
use super::input::{ChatInput, InputEvent};
use super::profile::collect_profile;
use super::renderer::{ChatRenderer, TranscriptView};
use super::spinner;
use crate::state::AppState;

/// Run the interactive chat until the visitor leaves.
pub async fn run_chat_loop(state: &AppState) -> Result<()> {
    let backend = HttpWebhookBackend::from_config(&state.config)
        .context("Failed to build webhook client")?;

    let mut session = ChatSession::start(&state.store, &state.config.session_key, backend).await;
    tracing::info!(session_id = %session.session_id(), "Chat session started");

    print_welcome_banner(&state.config.assistant_name, session.session_id());

    collect_profile(&mut session).await?;

    let Some(conversation) = session.conversation() else {
        anyhow::bail!("profile was not accepted");
    };
    let session_id = session.session_id();

    let renderer = ChatRenderer::new(state.config.assistant_name.clone());
    let mut view = TranscriptView::new();
    let mut updates = conversation.subscribe();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::History => {
                    let snapshot = conversation.state();
                    println!();
                    if snapshot.log.is_empty() {
                        println!("  {}", style("No messages yet.").dim());
                    }
                    for message in &snapshot.log {
                        renderer.print_message(message);
                    }
                    if snapshot.pending {
                        println!("  {}", style("Waiting for an answer...").dim());
                    }
                    println!();
                }
                ChatCommand::Session => {
                    println!(
                        "\n  {}  {}\n",
                        style("Session:").bold(),
                        style(session_id).cyan()
                    );
                }
                ChatCommand::Export(path) => {
                    let path = Path::new(&path);
                    match write_transcript(
                        path,
                        &state.config.assistant_name,
                        session_id,
                        &conversation.log(),
                    )
                    .await
                    {
                        Ok(()) => println!(
                            "\n  {} Saved conversation to {}\n",
                            style("*").cyan().bold(),
                            style(path.display()).dim()
                        ),
                        Err(e) => println!("\n  {} Export failed: {e:#}\n", style("!").red().bold()),
                    }
                }
                ChatCommand::Unknown(cmd_name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(cmd_name).dim()
                    );
                }
            }
            continue;
        }

        conversation.set_draft(text);

        let spinner = spinner("thinking...");
        let outcome = conversation.submit_draft().await;
        spinner.finish_and_clear();

        match outcome {
            Ok(Some(_)) => {
                let snapshot = updates.borrow_and_update().clone();
                view.refresh(&snapshot, &renderer);
            }
            Ok(None) => {}
            Err(ConversationError::Busy) => {
                println!(
                    "\n  {} Still waiting for the previous answer.\n",
                    style("!").yellow().bold()
                );
            }
        }
    }

    tracing::info!(
        session_id = %session_id,
        messages = conversation.log().len(),
        "Chat session ended"
    );
    Ok(())
}
