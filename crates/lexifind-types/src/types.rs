use serde::{Deserialize, Serialize};

use crate::query::Difficulty;
use crate::view::SearchView;
use crate::words::CategorizedResults;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Completion of an outbound search, tagged with the generation it was issued for
    SearchFinished {
        ticket: u64,
        outcome: SearchOutcome,
    },
    ShowSearch(SearchView),
    /// Transient "Copied!" state of the share button
    CopyIndicator(bool),
    ShowManualCopy {
        url: String,
    },
    BackendReady,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Submit {
        pattern: String,
        difficulty: Difficulty,
    },
    Share,
    Close,
}

/// Result of one outbound search as seen by the lifecycle owner.
/// Failures are already collapsed into the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(CategorizedResults),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMethod {
    Native,
    Clipboard,
    ManualPrompt,
}
