use lexifind_types::Difficulty;
use serde::{Deserialize, Serialize};

fn default_copy_indicator_ms() -> u64 {
    2000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// How long the share button shows "Copied!"
    #[serde(default = "default_copy_indicator_ms")]
    pub copy_indicator_ms: u64,
    #[serde(default)]
    pub default_difficulty: Difficulty,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_indicator_ms: default_copy_indicator_ms(),
            default_difficulty: Difficulty::default(),
        }
    }
}
