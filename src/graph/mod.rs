//! Graph construction and representation
//!
//! This module provides the arena-backed text graph and the two
//! construction strategies (sentence similarity, word co-occurrence).

pub mod builder;
pub mod text_graph;

pub use text_graph::{NodeId, TextGraph, TextNode};
