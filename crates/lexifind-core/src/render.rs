use lexifind_types::{Category, CategorizedResults, CategoryPanel, SearchStatus, SearchView};

pub fn count_label(count: usize) -> String {
    format!("{count} results")
}

/// One panel per category, in display order. Rows keep the generator's order.
pub fn panels(results: &CategorizedResults) -> Vec<CategoryPanel> {
    Category::ALL
        .iter()
        .map(|&category| {
            let rows = results.words(category).to_vec();
            CategoryPanel {
                category,
                title: category.title().to_string(),
                count_label: count_label(rows.len()),
                is_empty: rows.is_empty(),
                rows,
            }
        })
        .collect()
}

pub fn view(
    status: SearchStatus,
    results: Option<&CategorizedResults>,
    error_message: Option<&str>,
) -> SearchView {
    let panels = match (status, results) {
        (SearchStatus::Success, Some(results)) => panels(results),
        _ => Vec::new(),
    };

    SearchView {
        status,
        error_message: error_message.map(str::to_string),
        panels,
    }
}

#[cfg(test)]
mod tests {
    use lexifind_types::WordItem;
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(word: &str, ipa: &str) -> WordItem {
        WordItem {
            word: word.to_string(),
            ipa: ipa.to_string(),
        }
    }

    #[test]
    fn single_middle_match_renders_one_row_and_two_empty_states() {
        let results = CategorizedResults {
            start: vec![],
            middle: vec![item("morning", "/ˈmɔːrnɪŋ/")],
            end: vec![],
        };

        let panels = panels(&results);
        let titles: Vec<_> = panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Starts With", "Contains Middle", "Ends With"]);

        assert!(panels[0].is_empty);
        assert_eq!(panels[0].count_label, "0 results");

        assert!(!panels[1].is_empty);
        assert_eq!(panels[1].count_label, "1 results");
        assert_eq!(panels[1].rows, vec![item("morning", "/ˈmɔːrnɪŋ/")]);

        assert!(panels[2].is_empty);
    }

    #[test]
    fn rows_are_not_sorted_deduplicated_or_truncated() {
        let words: Vec<_> = [
            "zing", "bring", "zing", "ring", "sing", "king", "wing", "ding", "ping", "thing",
            "cling", "fling",
        ]
        .iter()
        .map(|w| item(w, "/-/"))
        .collect();
        let results = CategorizedResults {
            start: vec![],
            middle: vec![],
            end: words.clone(),
        };

        let panels = panels(&results);
        assert_eq!(panels[2].rows, words);
        assert_eq!(panels[2].count_label, "12 results");
    }

    #[test]
    fn panels_only_in_success() {
        let results = CategorizedResults::default();

        assert!(view(SearchStatus::Loading, Some(&results), None).panels.is_empty());
        assert_eq!(view(SearchStatus::Success, Some(&results), None).panels.len(), 3);
        assert!(view(SearchStatus::Success, None, None).panels.is_empty());
    }
}
