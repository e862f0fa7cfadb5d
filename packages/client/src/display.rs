//! Terminal rendering and de-duplication of polled messages.

use chrono::{DateTime, Local};
use relay_server::infrastructure::dto::http::MessageDto;

/// Messages of `window` that come after `last_seen`.
///
/// When `last_seen` has scrolled out of the window the whole window is new.
pub fn unseen_messages<'a>(
    window: &'a [MessageDto],
    last_seen: Option<&MessageDto>,
) -> &'a [MessageDto] {
    let Some(last_seen) = last_seen else {
        return window;
    };
    match window.iter().rposition(|message| message == last_seen) {
        Some(index) => &window[index + 1..],
        None => window,
    }
}

/// `[HH:MM:SS] user: message` with the user name in its assigned color.
pub fn render_message(message: &MessageDto) -> String {
    let time = DateTime::parse_from_rfc3339(&message.server_received)
        .map(|received| {
            received
                .with_timezone(&Local)
                .format("%H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| message.server_received.clone());

    format!(
        "[{}] \x1b[{}m{}\x1b[0m: {}",
        time,
        message.color.ansi_code(),
        message.user,
        message.message
    )
}
