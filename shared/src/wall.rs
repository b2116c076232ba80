//! Message wall and the composer that feeds it.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::api::{MessageWire, NewMessage};

pub const DEMO_TIME_LABEL: &str = "Just now (Demo mode)";
pub const INVALID_DATE: &str = "Invalid Date";

/// Render a naive local time as `M/D/YYYY h:mm:ss AM`.
pub fn format_local(dt: NaiveDateTime) -> String {
    dt.format("%-m/%-d/%Y %-I:%M:%S %p").to_string()
}

/// Parse a backend timestamp (RFC 3339, or naive ISO 8601 in local time) for display.
pub fn format_timestamp(timestamp: &str) -> String {
    let ts = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return format_local(dt.with_timezone(&Local).naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, pattern) {
            return format_local(dt);
        }
    }
    INVALID_DATE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCard {
    pub text: String,
    pub time: String,
    /// Rendered locally because the backend was unreachable.
    pub demo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageWall {
    cards: Vec<MessageCard>,
    revision: u64,
}

impl MessageWall {
    /// Rebuild from the backend list, newest first. The backend returns oldest first.
    pub fn replace(&mut self, messages: &[MessageWire]) {
        self.cards = messages
            .iter()
            .rev()
            .map(|msg| MessageCard {
                text: msg.text.clone(),
                time: format_timestamp(&msg.timestamp),
                demo: false,
            })
            .collect();
        self.revision += 1;
    }

    /// Put a locally rendered card at the top of the wall.
    pub fn prepend_demo(&mut self, text: impl Into<String>) {
        self.cards.insert(
            0,
            MessageCard {
                text: text.into(),
                time: DEMO_TIME_LABEL.to_string(),
                demo: true,
            },
        );
        self.revision += 1;
    }

    pub fn cards(&self) -> &[MessageCard] {
        &self.cards
    }

    /// Bumped on every change so renderers can skip unchanged frames.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// What pressing "send" should do with the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Nothing to send; tell the user to write something.
    Rejected,
    Send(NewMessage),
}

/// Single-line message input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
    pub focused: bool,
}

impl Composer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.extend(s.chars().filter(|c| !c.is_control()));
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn submit(&self) -> SubmitAction {
        let text = self.text.trim();
        if text.is_empty() {
            SubmitAction::Rejected
        } else {
            SubmitAction::Send(NewMessage::love(text))
        }
    }
}
