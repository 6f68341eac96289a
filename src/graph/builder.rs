//! Graph construction strategies.
//!
//! Two builders populate a [`TextGraph`] from tokenized input:
//!
//! - [`build_sentence_graph`] links sentences whose similarity exceeds the
//!   configured threshold, symmetrically (relatedness is undirected: if A
//!   is evidence for B then B is evidence for A).
//! - [`build_word_graph`] links words that co-occur within a sliding
//!   window inside a sentence. The window scan adds directed edges from
//!   each word to every other word of the window, so a pair repeated
//!   across overlapping windows accumulates parallel edges. That edge
//!   multiplicity is observable ranking behavior and must not be
//!   collapsed into a set.
//!
//! Builders are pure transforms; they keep no state across calls.

use rayon::prelude::*;
use tracing::debug;

use super::text_graph::{NodeId, TextGraph};
use crate::config::TextRankConfig;
use crate::nlp::Analyzer;
use crate::similarity::sentence_similarity;

/// Below this many sentence pairs the similarity scan runs sequentially;
/// spawning rayon tasks costs more than it saves on small documents.
const PARALLEL_PAIR_THRESHOLD: usize = 2048;

/// Build a sentence-similarity graph.
///
/// Duplicate sentences collapse into a single node; node order follows
/// first occurrence.
pub fn build_sentence_graph<A: Analyzer>(
    sentences: &[String],
    config: &TextRankConfig,
    analyzer: &A,
) -> TextGraph {
    let mut graph = TextGraph::with_capacity(sentences.len());
    for sentence in sentences {
        graph.get_or_insert(sentence, config.node_initial_score);
    }
    link_sentences(&mut graph, config, analyzer);

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built sentence graph"
    );
    graph
}

/// Link sentence nodes whose similarity exceeds the threshold.
///
/// Every unordered pair of distinct nodes is visited exactly once; a
/// passing pair gets edges in both directions. Similarity scores for
/// large documents are computed on the rayon pool, but edges are always
/// inserted in pair order so the result is deterministic.
pub fn link_sentences<A: Analyzer>(graph: &mut TextGraph, config: &TextRankConfig, analyzer: &A) {
    let n = graph.node_count() as NodeId;
    let mut pairs = Vec::with_capacity(graph.node_count().saturating_mul(graph.node_count()) / 2);
    for a in 0..n {
        for b in (a + 1)..n {
            pairs.push((a, b));
        }
    }

    let similarity = |&(a, b): &(NodeId, NodeId)| {
        sentence_similarity(
            graph.text(a),
            graph.text(b),
            analyzer,
            config.min_sentence_words,
        )
    };
    let scores: Vec<f64> = if pairs.len() >= PARALLEL_PAIR_THRESHOLD {
        pairs.par_iter().map(similarity).collect()
    } else {
        pairs.iter().map(similarity).collect()
    };

    for (&(a, b), score) in pairs.iter().zip(scores) {
        if score > config.similarity_threshold {
            graph.add_edge(a, b);
            graph.add_edge(b, a);
        }
    }
}

/// Build a word co-occurrence graph.
///
/// One node per distinct stopword-filtered word across the whole
/// document, in first-occurrence order.
pub fn build_word_graph<A: Analyzer>(
    sentences: &[String],
    config: &TextRankConfig,
    analyzer: &A,
) -> TextGraph {
    let mut graph = TextGraph::new();
    for sentence in sentences {
        for word in analyzer.tokenize_words(sentence) {
            if analyzer.is_stopword(&word) {
                continue;
            }
            graph.get_or_insert(&word, config.node_initial_score);
        }
    }
    link_words(&mut graph, sentences, config, analyzer);

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built word graph"
    );
    graph
}

/// Link word nodes that co-occur within the configured window.
///
/// Windows never cross sentence boundaries; distant words in the same
/// document stay unlinked unless some window brings them together.
pub fn link_words<A: Analyzer>(
    graph: &mut TextGraph,
    sentences: &[String],
    config: &TextRankConfig,
    analyzer: &A,
) {
    let window = config.cooccurrence_window;
    for sentence in sentences {
        let words: Vec<String> = analyzer
            .tokenize_words(sentence)
            .into_iter()
            .filter(|w| !analyzer.is_stopword(w))
            .collect();
        if words.len() < window {
            continue;
        }

        for start in 0..=(words.len() - window) {
            let span = &words[start..start + window];
            for word_a in span {
                let Some(a) = graph.get_node(word_a) else {
                    continue;
                };
                for word_b in span {
                    if word_a == word_b {
                        continue;
                    }
                    let Some(b) = graph.get_node(word_b) else {
                        continue;
                    };
                    graph.add_edge(a, b);
                }
            }
        }
    }
}
