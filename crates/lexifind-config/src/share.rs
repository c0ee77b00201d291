use lexifind_types::SharePayload;
use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "LexiFind - English Word Pattern Search".to_string()
}

fn default_text() -> String {
    "Check out this tool to find English words based on letter combinations!".to_string()
}

fn default_url() -> String {
    "https://lexifind.app".to_string()
}

fn default_clipboard_hold_ms() -> u64 {
    60_000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ShareConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_url")]
    pub url: String,
    /// Platform share helper, invoked as `<command> <title> <text> <url>`.
    /// Native sharing is skipped when unset.
    #[serde(default)]
    pub native_command: Option<String>,
    /// How long the app keeps owning the clipboard after a copy. Without a
    /// clipboard manager, X11 and Wayland lose the text once the owner lets go.
    #[serde(default = "default_clipboard_hold_ms")]
    pub clipboard_hold_ms: u64,
}

impl ShareConfig {
    pub fn payload(&self) -> SharePayload {
        SharePayload {
            title: self.title.clone(),
            text: self.text.clone(),
            url: self.url.clone(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            text: default_text(),
            url: default_url(),
            native_command: None,
            clipboard_hold_ms: default_clipboard_hold_ms(),
        }
    }
}
