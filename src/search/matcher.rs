//! Title matching utility
//!
//! A query matches a title when it is a prefix of one of the title's
//! words. Words begin at the start of the title, after any
//! non-alphanumeric character, and at lower-to-upper camel-case
//! transitions, so "tube" finds "YouTube" and "doc" finds "Google Docs".
//! Comparison is case-insensitive.

/// Check whether the query matches the title at a word boundary
pub fn query_matches(query: &str, title: &str) -> bool {
    let query: Vec<char> = query
        .trim()
        .chars()
        .flat_map(|c| c.to_lowercase())
        .collect();
    if query.is_empty() {
        return false;
    }

    let title: Vec<char> = title.chars().collect();
    (0..title.len())
        .filter(|&i| is_word_start(&title, i))
        .any(|start| matches_at(&query, &title, start))
}

fn is_word_start(title: &[char], i: usize) -> bool {
    let c = title[i];
    if !c.is_alphanumeric() {
        return false;
    }
    if i == 0 {
        return true;
    }
    let prev = title[i - 1];
    !prev.is_alphanumeric() || (c.is_uppercase() && prev.is_lowercase())
}

fn matches_at(query: &[char], title: &[char], start: usize) -> bool {
    if title.len() - start < query.len() {
        return false;
    }
    query.iter().enumerate().all(|(i, &q)| {
        let mut lowered = title[start + i].to_lowercase();
        lowered.next() == Some(q) && lowered.next().is_none()
    })
}
