//! Extractive sentence and keyword ranking with TextRank.
//!
//! Text units (sentences or words) become nodes in a graph, similarity
//! or co-occurrence becomes edges, and a dampened recursive vote ranks
//! the nodes by centrality.
//!
//! ```text
//! tokenize -> build graph -> score -> stable sort -> ranked text
//! ```
//!
//! The quickest way in is the free functions:
//!
//! ```rust
//! let summary = textrank::rank_sentences(
//!     "Some document text. More document text.",
//!     textrank::DEFAULT_SENTENCE_ITERATIONS,
//! );
//! ```
//!
//! For a custom configuration or stopword list, build a [`TextRank`]
//! instance instead. Ranking never fails: any input, including the empty
//! string, produces a (possibly empty) list. The output is deterministic
//! for a given input and iteration count.

pub mod config;
pub mod error;
pub mod graph;
pub mod nlp;
pub mod rank;
pub mod similarity;

pub use config::{TextRankConfig, DEFAULT_SENTENCE_ITERATIONS, DEFAULT_WORD_ITERATIONS};
pub use error::ConfigError;
pub use graph::{NodeId, TextGraph, TextNode};
pub use nlp::{Analyzer, EnglishAnalyzer, StopwordFilter};
pub use rank::{RankOutcome, RankScorer};

use graph::builder;

/// Ranking engine: a validated configuration plus an injected analyzer.
///
/// Each ranking call builds its own graph and discards it afterwards;
/// instances hold no mutable state and can be shared freely.
#[derive(Debug, Clone)]
pub struct TextRank<A: Analyzer = EnglishAnalyzer> {
    config: TextRankConfig,
    analyzer: A,
}

impl Default for TextRank<EnglishAnalyzer> {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRank<EnglishAnalyzer> {
    /// Engine with the default configuration and English analyzer.
    pub fn new() -> Self {
        Self {
            config: TextRankConfig::default(),
            analyzer: EnglishAnalyzer::new(),
        }
    }
}

impl<A: Analyzer> TextRank<A> {
    /// Engine with a custom configuration and analyzer.
    pub fn with_analyzer(config: TextRankConfig, analyzer: A) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, analyzer })
    }

    /// The active configuration.
    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Rank the sentences of `text`, most central first.
    ///
    /// `iterations` is the vote propagation depth;
    /// [`DEFAULT_SENTENCE_ITERATIONS`] is a good default.
    pub fn rank_sentences(&self, text: &str, iterations: usize) -> Vec<String> {
        let sentences = self.analyzer.tokenize_sentences(text);
        let mut graph = builder::build_sentence_graph(&sentences, &self.config, &self.analyzer);
        RankScorer::from_config(&self.config, iterations).run(&mut graph);
        graph.order_by_score_desc()
    }

    /// Rank the keywords of `text`, most central first. Stopwords are
    /// excluded.
    ///
    /// Word graphs are denser than sentence graphs;
    /// [`DEFAULT_WORD_ITERATIONS`] is a good default for `iterations`.
    pub fn rank_words(&self, text: &str, iterations: usize) -> Vec<String> {
        let sentences = self.analyzer.tokenize_sentences(text);
        let mut graph = builder::build_word_graph(&sentences, &self.config, &self.analyzer);
        RankScorer::from_config(&self.config, iterations).run(&mut graph);
        graph.order_by_score_desc()
    }
}

/// Rank sentences with the default configuration and English analyzer.
pub fn rank_sentences(text: &str, iterations: usize) -> Vec<String> {
    TextRank::new().rank_sentences(text, iterations)
}

/// Rank keywords with the default configuration and English analyzer.
pub fn rank_words(text: &str, iterations: usize) -> Vec<String> {
    TextRank::new().rank_words(text, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_ranking() {
        assert!(rank_sentences("", DEFAULT_SENTENCE_ITERATIONS).is_empty());
        assert!(rank_words("", DEFAULT_WORD_ITERATIONS).is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = TextRankConfig::default();
        config.damping = 2.0;
        assert!(TextRank::with_analyzer(config, EnglishAnalyzer::new()).is_err());
    }
}
