use std::fmt;

use serde::{Deserialize, Serialize};

/// Vocabulary tier the generated words must fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Primary,
    Middle,
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Primary, Difficulty::Middle, Difficulty::High];

    /// Label embedded in the model instruction
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Difficulty::Primary => "Primary School (Elementary)",
            Difficulty::Middle => "Middle School (Junior High)",
            Difficulty::High => "High School (Senior High)",
        }
    }

    /// Label shown in the level selector
    pub fn display_label(&self) -> &'static str {
        match self {
            Difficulty::Primary => "Primary School",
            Difficulty::Middle => "Middle School",
            Difficulty::High => "High School",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Primary => 0,
            Difficulty::Middle => 1,
            Difficulty::High => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prompt_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Please enter a letter combination.")]
    EmptyPattern,
}

/// A validated search request. The pattern is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pattern: String,
    difficulty: Difficulty,
}

impl Query {
    pub fn new(pattern: &str, difficulty: Difficulty) -> Result<Self, QueryError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(QueryError::EmptyPattern);
        }

        Ok(Self {
            pattern: pattern.to_string(),
            difficulty,
        })
    }

    /// Whether `input` would pass validation
    pub fn is_valid_pattern(input: &str) -> bool {
        !input.trim().is_empty()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
