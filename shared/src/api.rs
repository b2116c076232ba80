use serde::{Deserialize, Serialize};

// === Endpoints ===

pub const STATS_PATH: &str = "/api/stats";
pub const PHOTOS_PATH: &str = "/api/photos";
pub const UPLOAD_PHOTO_PATH: &str = "/api/upload-photo";
pub const MESSAGES_PATH: &str = "/api/messages";

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "photo";

/// Message type tag sent with every new message.
pub const LOVE_MESSAGE_TYPE: &str = "love";

// === Backend -> Page ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsWire {
    pub days_together: i64,
    pub messages_sent: i64,
    pub photos_shared: i64,
    pub love_level: i64,
}

/// Values shown when the stats endpoint cannot be reached.
pub const DEMO_STATS: StatsWire = StatsWire {
    days_together: 365,
    messages_sent: 42,
    photos_shared: 15,
    love_level: 100,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoWire {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub text: String,
    pub timestamp: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// === Page -> Backend ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewMessage {
    pub fn love(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LOVE_MESSAGE_TYPE.to_string(),
        }
    }
}
