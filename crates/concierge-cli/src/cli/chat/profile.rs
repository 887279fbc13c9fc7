//! One-time visitor profile form.
//!
//! Prompts for every field with dialoguer, submits through the session and
//! repeats until the backend accepts the profile. Values typed on a failed
//! attempt are offered again as the initial text.

use anyhow::Result;
use console::style;
use dialoguer::Input;

use concierge_core::chat::session::ChatSession;
use concierge_core::profile::notice_for;
use concierge_core::webhook::backend::WebhookBackend;
use concierge_types::error::ProfileError;
use concierge_types::profile::ProfileField;

use super::spinner;

/// Collect and submit the profile. Returns once the chat is open.
pub async fn collect_profile<B: WebhookBackend>(session: &mut ChatSession<B>) -> Result<()> {
    if session.is_chat_open() {
        return Ok(());
    }

    println!("  {}", style("Before we start, tell us how to reach you.").bold());
    println!();

    loop {
        for field in ProfileField::ALL {
            let current = session.profile().draft().get(field).to_string();
            let value: String = Input::new()
                .with_prompt(field.label())
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text()?;
            session.set_profile_field(field, value);
        }

        let spinner = spinner("Saving your details...");
        let outcome = session.submit_profile().await;
        spinner.finish_and_clear();

        match outcome {
            Ok(notice) => {
                println!();
                println!("  {} {}", style("*").green().bold(), notice);
                println!();
                return Ok(());
            }
            Err(ProfileError::AlreadySubmitted) => return Ok(()),
            Err(e) => {
                tracing::debug!(error = %e, "Profile submission failed");
                println!();
                println!("  {} {}", style("!").red().bold(), notice_for(&e));
                println!();
            }
        }
    }
}
