use regex::Regex;
use std::sync::OnceLock;

/// Tokens shorter than this are too generic to be useful as implicit tags.
const MIN_TOKEN_LEN: usize = 3;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9]+").unwrap())
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn clean_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive implicit tag candidates from a post title: split on anything that
/// is not alphanumeric and drop short fragments.
pub fn title_tokenizer(title: &str) -> Vec<String> {
    word_pattern()
        .find_iter(title)
        .map(|m| m.as_str().to_string())
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .collect()
}

/// Ordered dedup of `(tag_name, is_explicit)` candidates on the normalized
/// key (trimmed, lowercased). First-seen wins, so callers put explicit
/// candidates before implicit ones to give them precedence. Candidates that
/// normalize to an empty key are dropped.
pub fn insensitive_unique(
    candidates: impl IntoIterator<Item = (String, bool)>,
) -> Vec<(String, bool)> {
    let mut known_keys = std::collections::HashSet::new();
    let mut unique = Vec::new();

    for (name, is_explicit) in candidates {
        let key = name.trim().to_lowercase();
        if key.is_empty() || !known_keys.insert(key) {
            continue;
        }
        unique.push((name, is_explicit));
    }

    unique
}
