//! `concierge session`: print the session id.

use anyhow::Result;
use console::style;

use concierge_core::session::identity::resolve_session_id;

use crate::state::{AppState, SessionStore};

/// Resolve (creating on first use) and print the session id.
pub async fn show_session(state: &AppState, json: bool) -> Result<()> {
    let session_id = resolve_session_id(&state.store, &state.config.session_key).await;
    let persistent = matches!(state.store, SessionStore::File(_));

    if json {
        let out = serde_json::json!({
            "session_id": session_id,
            "persistent": persistent,
            "data_dir": state.data_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!();
        println!("  {}  {}", style("Session:").bold(), style(&session_id).cyan());
        if !persistent {
            println!(
                "  {}",
                style("Not persisted -- a new id is created on every run.").dim()
            );
        }
        println!();
    }

    Ok(())
}
