//! Sentence and word tokenization.
//!
//! Word tokenization runs two punctuation passes: one character class is
//! replaced with spaces (so `"some-word"` splits in two), the other is
//! deleted outright (so `"we've"` becomes `"weve"`). Everything is
//! lower-cased.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Punctuation that acts as a word separator.
static REPLACE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,/!&;:=\-_]").expect("replace-punctuation class"));

/// Punctuation that is stripped without separating words.
static REMOVE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[#$%^*{}~()?'"]"#).expect("remove-punctuation class"));

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace or the end
/// of input; terminators inside a token (`"some.word"`, `"3.14"`) do not
/// split. Results are trimmed, empty segments dropped, and a single
/// trailing period stripped.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                None => true,
                Some(next) => next.is_whitespace(),
            };
            if at_boundary {
                flush_sentence(&mut sentences, &current);
                current.clear();
            }
        }
    }
    flush_sentence(&mut sentences, &current);

    sentences
}

fn flush_sentence(out: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// Split text into lower-cased words with punctuation handled per the
/// fixed replace/remove character sets.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let spaced = REPLACE_PUNCT.replace_all(text, " ");
    let cleaned = REMOVE_PUNCT.replace_all(&spaced, "");

    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
