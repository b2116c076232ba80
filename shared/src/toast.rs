pub const UPLOADING: &str = "Uploading photo...";
pub const UPLOAD_OK: &str = "Photo uploaded successfully!";
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";
pub const UPLOAD_DEMO: &str = "Photo added! (Demo mode - upload to save permanently)";
pub const UPLOAD_HINT: &str = "Drop a photo onto the window to add a memory";
pub const UPLOAD_UNREADABLE: &str = "That file doesn't look like a photo.";
pub const EMPTY_MESSAGE: &str = "Please write a message first!";
pub const MESSAGE_SENT: &str = "Message sent with love!";
pub const MESSAGE_DEMO: &str = "Message added! (Demo mode - start server to save)";
pub const SECRET_FOUND: &str = "You found the secret! Extra love unlocked!";

/// Single notification slot. A new message replaces the old one and restarts the timer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toast {
    message: String,
    remaining: f64,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>, secs: f64) {
        self.message = message.into();
        self.remaining = secs;
    }

    pub fn advance(&mut self, dt: f64) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
