use crate::words::{Category, WordItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Snapshot of the search lifecycle handed to the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchView {
    pub status: SearchStatus,
    pub error_message: Option<String>,
    /// Populated only in `Success`, always in `Category::ALL` order
    pub panels: Vec<CategoryPanel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPanel {
    pub category: Category,
    pub title: String,
    pub count_label: String,
    pub rows: Vec<WordItem>,
    pub is_empty: bool,
}
