//! One-shot chat flow: send a message, reveal the reply in the terminal.
//!
//! Mirrors the widget's control flow headlessly: the user message prints
//! immediately, the relay is called, and on success the reply runs through
//! the formatter and the typing reveal into a terminal sink. Failure paths
//! print plain text and never touch the formatter.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use relaychat_core::format::format_reply;
use relaychat_core::typing::{Animator, DisplaySink};
use relaychat_types::chat::{ChatMessage, ChatRequest, ChatResponse, MessageRole};

/// Printed when the relay itself cannot be reached.
const UNREACHABLE_TEXT: &str = "⚠️ Error: Could not reach server.";

/// Sink that appends each reveal frame's delta to stdout.
///
/// The animator only ever extends the content by a suffix, so printing the
/// bytes past the high-water mark reproduces the frames without reprinting.
#[derive(Default)]
struct TerminalSink {
    printed: Mutex<usize>,
}

impl DisplaySink for TerminalSink {
    fn set_content(&self, markup: &str) {
        let mut printed = self.printed.lock().unwrap();
        if markup.len() > *printed {
            print!("{}", &markup[*printed..]);
            let _ = std::io::stdout().flush();
            *printed = markup.len();
        }
    }

    fn scroll_to_latest(&self) {
        // The terminal follows the cursor; nothing to do.
    }
}

/// Print a message without any reveal, for user echo and failure text.
fn print_plain(message: &ChatMessage) {
    println!("  {} {}", role_label(message.role), message.text);
}

fn role_label(role: MessageRole) -> console::StyledObject<&'static str> {
    match role {
        MessageRole::User => console::style("you").bold().cyan(),
        MessageRole::Bot => console::style("bot").bold().magenta(),
    }
}

/// Send `message` to the relay at `server` and render the reply.
///
/// Empty or whitespace-only input is silently ignored, matching the widget.
pub async fn send_message(
    server: &str,
    message: &str,
    interval_ms: u64,
    json: bool,
) -> anyhow::Result<()> {
    let message = message.trim();
    if message.is_empty() {
        tracing::debug!("empty message, nothing sent");
        return Ok(());
    }

    // The user message displays before the network round-trip starts
    print_plain(&ChatMessage::user(message));

    let client = reqwest::Client::new();
    let response = match client
        .post(format!("{server}/chat"))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "relay unreachable");
            print_plain(&ChatMessage::bot(UNREACHABLE_TEXT));
            return Ok(());
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if json {
        println!("{body}");
        return Ok(());
    }

    let Ok(chat) = serde_json::from_str::<ChatResponse>(&body) else {
        tracing::warn!(%status, "relay returned undecodable body");
        print_plain(&ChatMessage::bot(UNREACHABLE_TEXT));
        return Ok(());
    };

    if !status.is_success() {
        // Error replies render plain, skipping formatter and reveal
        print_plain(&ChatMessage::bot(chat.reply));
        return Ok(());
    }

    print!("  {} ", role_label(MessageRole::Bot));
    let _ = std::io::stdout().flush();

    let sink = Arc::new(TerminalSink::default());
    let mut animator = Animator::new(Duration::from_millis(interval_ms));
    animator
        .start(sink, format_reply(Some(&chat.reply)))
        .join()
        .await;
    println!();

    Ok(())
}
