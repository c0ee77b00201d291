use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordItem {
    pub word: String,
    pub ipa: String,
}

/// Words grouped by where the pattern occurs.
/// Order within each list is the order the generator returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategorizedResults {
    pub start: Vec<WordItem>,
    pub middle: Vec<WordItem>,
    pub end: Vec<WordItem>,
}

impl CategorizedResults {
    pub fn words(&self, category: Category) -> &[WordItem] {
        match category {
            Category::Start => &self.start,
            Category::Middle => &self.middle,
            Category::End => &self.end,
        }
    }

    pub fn total(&self) -> usize {
        self.start.len() + self.middle.len() + self.end.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Start,
    Middle,
    End,
}

impl Category {
    /// Render order
    pub const ALL: [Category; 3] = [Category::Start, Category::Middle, Category::End];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Start => "Starts With",
            Category::Middle => "Contains Middle",
            Category::End => "Ends With",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_is_rejected() {
        let err = serde_json::from_str::<CategorizedResults>(r#"{"start":[],"middle":[]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn item_without_ipa_is_rejected() {
        let err = serde_json::from_str::<CategorizedResults>(
            r#"{"start":[{"word":"thin"}],"middle":[],"end":[]}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = serde_json::from_str::<CategorizedResults>(
            r#"{"start":[],"middle":[],"end":[],"extra":[]}"#,
        );
        assert!(err.is_err());
    }
}
