pub mod query;
pub mod types;
pub mod view;
pub mod words;

pub use query::{Difficulty, Query, QueryError};
pub use types::{AppEvent, SearchOutcome, ShareMethod, SharePayload, UiEvent};
pub use view::{CategoryPanel, SearchStatus, SearchView};
pub use words::{Category, CategorizedResults, WordItem};
