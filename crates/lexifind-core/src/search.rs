use lexifind_types::{
    CategorizedResults, Difficulty, Query, QueryError, SearchOutcome, SearchStatus, SearchView,
};

use crate::render;

/// Generation number of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Owner of the query/result/status triple.
///
/// `idle -> loading -> {success, error} -> loading -> ...`
///
/// Every accepted submission gets a fresh ticket; a completion for any
/// ticket but the latest is dropped, so the visible state always belongs to
/// the most recent submission. The stale request itself keeps running.
#[derive(Debug, Default)]
pub struct SearchSession {
    status: SearchStatus,
    results: Option<CategorizedResults>,
    error_message: Option<String>,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn results(&self) -> Option<&CategorizedResults> {
        self.results.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Submit button state: not while loading, not for a blank pattern
    pub fn can_submit(&self, pattern: &str) -> bool {
        self.status != SearchStatus::Loading && Query::is_valid_pattern(pattern)
    }

    /// Start a search. A blank pattern is rejected and leaves the session untouched.
    pub fn begin(
        &mut self,
        pattern: &str,
        difficulty: Difficulty,
    ) -> Result<(SearchTicket, Query), QueryError> {
        let query = Query::new(pattern, difficulty)?;

        if self.status == SearchStatus::Loading {
            tracing::debug!(
                superseded = self.generation,
                "new search started while one is outstanding"
            );
        }

        self.generation += 1;
        self.status = SearchStatus::Loading;
        self.results = None;
        self.error_message = None;

        tracing::info!(
            ticket = self.generation,
            pattern = query.pattern(),
            difficulty = ?query.difficulty(),
            "search started"
        );

        Ok((SearchTicket(self.generation), query))
    }

    /// Apply a completion. Returns false when the ticket is stale and nothing changed.
    pub fn resolve(&mut self, ticket: SearchTicket, outcome: SearchOutcome) -> bool {
        if ticket.0 != self.generation || self.status != SearchStatus::Loading {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping stale search completion"
            );
            return false;
        }

        match outcome {
            SearchOutcome::Found(results) => {
                tracing::info!(ticket = ticket.0, words = results.total(), "search succeeded");
                self.results = Some(results);
                self.status = SearchStatus::Success;
            }
            SearchOutcome::Failed(message) => {
                tracing::info!(ticket = ticket.0, "search failed");
                self.results = None;
                self.error_message = Some(message);
                self.status = SearchStatus::Error;
            }
        }

        true
    }

    pub fn view(&self) -> SearchView {
        render::view(self.status, self.results.as_ref(), self.error_message())
    }
}
