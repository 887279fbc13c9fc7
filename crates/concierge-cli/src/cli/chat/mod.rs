//! Interactive terminal chat for Concierge.
//!
//! This module implements the full chat flow: welcome banner, the one-time
//! profile form, then the question loop with a busy spinner, Markdown
//! rendering of answers, and slash commands. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod export;
pub mod input;
pub mod loop_runner;
pub mod profile;
pub mod renderer;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Steady-ticking spinner shown while a webhook call is in flight.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
