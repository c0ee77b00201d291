use std::env;

use serde::{Deserialize, Serialize};

use self::generator::GeneratorConfig;
use self::share::ShareConfig;
use self::ui::UiConfig;

pub mod generator;
pub mod share;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub ui: UiConfig,
    pub share: ShareConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Environment wins over whatever a profile stored
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(api_key) = env_string("GEMINI_API_KEY").or_else(|| env_string("API_KEY")) {
            self.generator.api_key = api_key;
        }

        if let Some(model) = env_string("LEXIFIND_MODEL") {
            self.generator.model = model;
        }

        if let Some(api_url) = env_string("LEXIFIND_API_URL") {
            self.generator.api_url = api_url;
        }

        if let Some(url) = env_string("LEXIFIND_SHARE_URL") {
            self.share.url = url;
        }

        if let Some(command) = env_string("LEXIFIND_SHARE_COMMAND") {
            self.share.native_command = Some(command);
        }

        self
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"generator":{"model":"gemini-2.0-flash"}}"#).unwrap();

        assert_eq!(config.generator.model, "gemini-2.0-flash");
        assert_eq!(config.generator.provider, "gemini");
        assert_eq!(config.ui.copy_indicator_ms, 2000);
        assert!(config.share.native_command.is_none());
        assert_eq!(config.share.clipboard_hold_ms, 60_000);
        assert!(!config.generator.has_api_key());
    }

    #[test]
    fn share_payload_comes_from_config() {
        let payload = ShareConfig::default().payload();
        assert_eq!(payload.title, "LexiFind - English Word Pattern Search");
        assert_eq!(payload.url, "https://lexifind.app");
    }
}
