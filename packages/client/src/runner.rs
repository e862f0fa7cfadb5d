//! Interactive loop: read lines, post them, print new messages.

use std::time::Duration;

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{
    api::RelayApi,
    config::ClientConfig,
    display::{render_message, unseen_messages},
    error::ClientError,
};

/// Run the client until the user closes the input (Ctrl-C / Ctrl-D).
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let api = RelayApi::new(&config.url)?;

    let health = api.health().await?;
    tracing::info!(
        "Connected to {} (server time: {})",
        config.url,
        health.timestamp
    );
    println!(
        "Connected to {} as '{}'. Type a message and press Enter; Ctrl-D to quit.",
        config.url, config.user
    );

    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    let input = tokio::task::spawn_blocking(move || read_input(line_tx));

    let mut ticker = tokio::time::interval(Duration::from_millis(config.interval_ms));
    let mut last_seen = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match api.fetch_messages().await {
                    Ok(window) => {
                        for message in unseen_messages(&window, last_seen.as_ref()) {
                            println!("{}", render_message(message));
                        }
                        if let Some(last) = window.last() {
                            last_seen = Some(last.clone());
                        }
                    }
                    Err(e) => tracing::warn!("Failed to poll messages: {}", e),
                }
            }
            line = line_rx.recv() => {
                let Some(text) = line else {
                    break;
                };
                if let Err(e) = api.post_message(&config.user, &text).await {
                    tracing::error!("Failed to send message: {}", e);
                    eprintln!("Failed to send message: {e}");
                }
            }
        }
    }

    input.await??;
    tracing::info!("Client stopped");
    Ok(())
}

/// Blocking prompt loop; dropping `lines` ends the client.
fn read_input(lines: mpsc::UnboundedSender<String>) -> Result<(), ClientError> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let Some(text) = outgoing_text(line) else {
                    continue;
                };
                let _ = editor.add_history_entry(text.as_str());
                if lines.send(text).is_err() {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

/// The line to post, unchanged, unless it is blank.
fn outgoing_text(line: String) -> Option<String> {
    if line.trim().is_empty() {
        None
    } else {
        Some(line)
    }
}
