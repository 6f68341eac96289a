//! Arena-backed text graph.
//!
//! The graph owns every node; adjacency lists hold node ids, never
//! references, so there is no shared ownership between nodes. Adjacency
//! is an ordered `Vec` rather than a set: the word co-occurrence builder
//! deliberately produces parallel duplicate edges across overlapping
//! windows, and those duplicates feed the vote sum.

use rustc_hash::FxHashMap;

/// Index of a node within its owning [`TextGraph`].
pub type NodeId = u32;

/// A single text unit (sentence or word) in the graph.
#[derive(Debug, Clone)]
pub struct TextNode {
    /// Canonical string identity of the unit. Unique within a graph.
    pub text: String,
    /// Rank score. Written only by the scorer.
    pub score: f64,
    /// Outgoing edges. Duplicates and ordering are significant.
    pub edges: Vec<NodeId>,
}

/// A graph of text units, in insertion order.
///
/// Insertion order is semantically irrelevant but kept so that ranking
/// output is deterministic when scores tie.
#[derive(Debug, Clone, Default)]
pub struct TextGraph {
    text_to_id: FxHashMap<String, NodeId>,
    nodes: Vec<TextNode>,
}

impl TextGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            text_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Append a new node. The caller is responsible for uniqueness;
    /// use [`TextGraph::get_or_insert`] to deduplicate.
    pub fn add_node(&mut self, text: impl Into<String>, initial_score: f64) -> NodeId {
        let text = text.into();
        let id = self.nodes.len() as NodeId;
        self.text_to_id.entry(text.clone()).or_insert(id);
        self.nodes.push(TextNode {
            text,
            score: initial_score,
            edges: Vec::new(),
        });
        id
    }

    /// Get the node for `text`, creating it if absent.
    pub fn get_or_insert(&mut self, text: &str, initial_score: f64) -> NodeId {
        if let Some(&id) = self.text_to_id.get(text) {
            return id;
        }
        self.add_node(text, initial_score)
    }

    /// Look up a node by its text identity.
    pub fn get_node(&self, text: &str) -> Option<NodeId> {
        self.text_to_id.get(text).copied()
    }

    /// Append `to` to `from`'s adjacency list.
    ///
    /// Does not add the reverse edge; reciprocity is a builder decision.
    /// Reflexive edges are refused.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if from == to {
            return;
        }
        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.edges.push(to);
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The text of a node.
    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id as usize].text
    }

    /// The current score of a node.
    pub fn score(&self, id: NodeId) -> f64 {
        self.nodes[id as usize].score
    }

    /// Overwrite a node's score.
    pub fn set_score(&mut self, id: NodeId, score: f64) {
        self.nodes[id as usize].score = score;
    }

    /// The adjacency list of a node.
    pub fn edges(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id as usize].edges
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TextNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as NodeId, n))
    }

    /// Return node texts ordered by score, highest first.
    ///
    /// The sort is stable: nodes with equal scores keep their insertion
    /// order, so ranking output is deterministic even before scoring or
    /// on symmetric inputs where many scores tie.
    pub fn order_by_score_desc(&self) -> Vec<String> {
        let mut ids: Vec<NodeId> = (0..self.nodes.len() as NodeId).collect();
        ids.sort_by(|&a, &b| {
            let sa = self.nodes[a as usize].score;
            let sb = self.nodes[b as usize].score;
            sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
        });
        ids.into_iter()
            .map(|id| self.nodes[id as usize].text.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_node() {
        let mut graph = TextGraph::new();
        let a = graph.add_node("some-text", 1.0);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.get_node("some-text"), Some(a));
        assert_eq!(graph.get_node("missing"), None);
    }

    #[test]
    fn test_get_or_insert_dedups() {
        let mut graph = TextGraph::new();
        let a = graph.get_or_insert("machine", 1.0);
        let b = graph.get_or_insert("learning", 1.0);
        let c = graph.get_or_insert("machine", 1.0);

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_add_edge_is_one_directional() {
        let mut graph = TextGraph::new();
        let a = graph.add_node("a", 1.0);
        let b = graph.add_node("b", 1.0);

        graph.add_edge(a, b);

        assert_eq!(graph.edges(a), &[b]);
        assert!(graph.edges(b).is_empty());
    }

    #[test]
    fn test_reflexive_edges_refused() {
        let mut graph = TextGraph::new();
        let a = graph.add_node("a", 1.0);

        graph.add_edge(a, a);

        assert!(graph.edges(a).is_empty());
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut graph = TextGraph::new();
        let a = graph.add_node("a", 1.0);
        let b = graph.add_node("b", 1.0);

        graph.add_edge(a, b);
        graph.add_edge(a, b);

        assert_eq!(graph.edges(a), &[b, b]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_order_by_score_desc() {
        let mut graph = TextGraph::new();
        graph.add_node("A", 1.0);
        graph.add_node("B", 2.0);

        assert_eq!(graph.order_by_score_desc(), vec!["B", "A"]);
    }

    #[test]
    fn test_order_is_stable_on_ties() {
        let mut graph = TextGraph::new();
        graph.add_node("first", 0.15);
        graph.add_node("second", 0.15);
        graph.add_node("third", 0.15);

        // Equal scores must come back in insertion order.
        assert_eq!(
            graph.order_by_score_desc(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_order_of_empty_graph() {
        let graph = TextGraph::new();
        assert!(graph.order_by_score_desc().is_empty());
    }
}
