//! Ranking configuration.
//!
//! All tunable constants of the algorithm live here so callers can adjust
//! them without touching the graph or scoring code. The defaults are the
//! empirically chosen values from the TextRank paper and the reference
//! implementation; they are not derived from anything.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default iteration count for sentence ranking.
///
/// Chosen based on the convergence curves in Figure 1 of "TextRank:
/// Bringing Order into Texts" (Mihalcea & Tarau, 2004).
pub const DEFAULT_SENTENCE_ITERATIONS: usize = 5;

/// Default iteration count for keyword ranking. Word graphs are denser
/// than sentence graphs and need more rounds to stabilize.
pub const DEFAULT_WORD_ITERATIONS: usize = 30;

/// Tunable parameters for graph construction and scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRankConfig {
    /// Damping factor `d` of the vote recurrence. Standard value 0.85.
    pub damping: f64,

    /// Minimum similarity score required to link two sentence nodes.
    /// The comparison is strict (`similarity > threshold`).
    pub similarity_threshold: f64,

    /// Sentences with fewer words than this never link to anything;
    /// the similarity metric returns 0 for them.
    pub min_sentence_words: usize,

    /// Width of the sliding window used by the word co-occurrence
    /// strategy. Sensible values are in `[2, 10]`.
    pub cooccurrence_window: usize,

    /// Score assigned to every node at creation. Must stay a fixed
    /// constant: earlier revisions of this algorithm seeded scores
    /// randomly, which made ranking output non-deterministic.
    pub node_initial_score: f64,

    /// Optional cap on the total number of edge visits the scorer may
    /// perform. When the next round would exceed the cap, scoring stops
    /// early with the rounds completed so far. `None` means unbounded.
    #[serde(default)]
    pub max_edge_visits: Option<u64>,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            similarity_threshold: 1.0,
            min_sentence_words: 5,
            cooccurrence_window: 2,
            node_initial_score: 1.0,
            max_edge_visits: None,
        }
    }
}

impl TextRankConfig {
    /// Check that every parameter is inside its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if !self.similarity_threshold.is_finite() || self.similarity_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.similarity_threshold));
        }
        if self.min_sentence_words == 0 {
            return Err(ConfigError::InvalidMinSentenceWords);
        }
        if self.cooccurrence_window < 2 {
            return Err(ConfigError::InvalidWindow(self.cooccurrence_window));
        }
        Ok(())
    }
}
