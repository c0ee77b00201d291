use lexifind_types::{Difficulty, Query};

/// Per-category cap requested from the model. Not enforced locally.
pub const MAX_WORDS_PER_CATEGORY: usize = 10;

pub fn system_instruction(difficulty: Difficulty) -> String {
    format!(
        "You are a helpful English vocabulary assistant for students.
Your task is to find English words containing a specific letter combination.

Strictly adhere to the following rules:
1. Filter words based on the requested difficulty level: {level}.
2. Categorize results into three groups based on where the pattern appears: 'start' (starts with pattern), 'middle' (contains pattern in the middle), 'end' (ends with pattern).
3. Provide the accurate International Phonetic Alphabet (IPA) transcription for each word.
4. Limit each category to a maximum of {max} words.
5. Ensure the words are appropriate for the selected education level.
6. If no words are found for a category, return an empty array for that category.
",
        level = difficulty.prompt_label(),
        max = MAX_WORDS_PER_CATEGORY,
    )
}

pub fn user_prompt(query: &Query) -> String {
    format!(
        "Find words containing the letter combination: \"{}\".",
        query.pattern()
    )
}
