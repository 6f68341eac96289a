//! Sentence similarity metric.
//!
//! Counts distinct words two sentences share and normalizes by the log
//! of the length product. The result is a threshold test, not a distance
//! metric: callers compare it against
//! [`TextRankConfig::similarity_threshold`](crate::TextRankConfig) to
//! decide whether to link two nodes, and never use the magnitude beyond
//! that.

use rustc_hash::FxHashSet;

use crate::nlp::Analyzer;

/// Score the relatedness of two sentences.
///
/// Returns `0.0` when either sentence has fewer than `min_words` words:
/// short fragments carry too little evidence to link, so the metric
/// fails soft to "not similar" rather than erroring.
///
/// Words that are stopwords are excluded from the common count. Only the
/// A side is checked: a match requires identical strings, so if B's word
/// is a stopword and A's is not, they can never be equal anyway.
pub fn sentence_similarity<A: Analyzer>(a: &str, b: &str, analyzer: &A, min_words: usize) -> f64 {
    let words_a = analyzer.tokenize_words(a);
    let words_b = analyzer.tokenize_words(b);

    if words_a.len() < min_words || words_b.len() < min_words {
        return 0.0;
    }

    let mut common: FxHashSet<&str> = FxHashSet::default();
    for word_a in &words_a {
        if analyzer.is_stopword(word_a) {
            continue;
        }
        for word_b in &words_b {
            if word_a == word_b {
                common.insert(word_a.as_str());
            }
        }
    }

    let len_product = (words_a.len() * words_b.len()) as f64;

    // Unreachable once min_words >= 2, but kept so the metric is safe on
    // its own: ln(1) would divide by zero.
    if len_product == 1.0 {
        return 0.0;
    }

    common.len() as f64 / len_product.ln()
}
