//! Keyword extraction: ranks the most frequent non-stop-word terms in a text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of keywords returned per text.
pub const MAX_KEYWORDS: usize = 20;

/// Words dropped before counting.
pub const STOP_WORDS: [&str; 12] = [
    "and", "the", "to", "of", "in", "a", "for", "with", "is", "on", "that", "this",
];

/// Anything that is neither a word character nor whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word pattern"));

/// Extracts up to `MAX_KEYWORDS` keywords from `text`, most frequent first.
///
/// Text is lowercased and punctuation becomes whitespace before splitting.
/// Ties keep first-seen order: of two equally frequent terms, the one that
/// appears earlier in the text ranks higher.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let normalized = NON_WORD.replace_all(&lowered, " ");

    // (term, count) in first-seen order, with an index for O(1) lookups.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in normalized.split_whitespace() {
        if STOP_WORDS.contains(&word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}
