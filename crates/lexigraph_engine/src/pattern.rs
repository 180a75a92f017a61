//! Motif predicates.
//!
//! Rules match small conjunctive patterns: a part-of-speech test on a node, a
//! `succ` edge between two bound nodes, or a literal surface form. Bindings
//! are found by anchoring on the nodes of one category and walking `succ`
//! edges outward, so a rule never enumerates the full cross product of nodes.

use lexigraph_foundation::{NodeId, NodeKind, PosCategory};
use lexigraph_parser::Vocabulary;
use lexigraph_storage::SemanticGraph;

/// Read-only view handed to every rule.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    graph: &'a SemanticGraph,
    vocabulary: &'a Vocabulary,
}

impl<'a> RuleContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(graph: &'a SemanticGraph, vocabulary: &'a Vocabulary) -> Self {
        Self { graph, vocabulary }
    }

    /// The graph under inspection.
    #[must_use]
    pub fn graph(&self) -> &'a SemanticGraph {
        self.graph
    }

    /// The closed-class vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// `Cat(x)`: the node carries a tag of this category.
    #[must_use]
    pub fn is(&self, node: NodeId, category: PosCategory) -> bool {
        self.graph
            .get(node)
            .is_some_and(|n| n.has_category(category))
    }

    /// `succ(a, b)`.
    #[must_use]
    pub fn succ(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.has_succ(a, b)
    }

    /// Surface form of a node.
    #[must_use]
    pub fn word(&self, node: NodeId) -> &'a str {
        self.graph.word(node)
    }

    /// All nodes of a category, in node order.
    #[must_use]
    pub fn anchors(&self, category: PosCategory) -> Vec<NodeId> {
        self.graph
            .nodes()
            .filter(|n| n.has_category(category))
            .map(|n| n.id)
            .collect()
    }

    /// All nodes of a structural kind, in node order.
    #[must_use]
    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<NodeId> {
        self.graph
            .nodes()
            .filter(|n| n.kind == kind)
            .map(|n| n.id)
            .collect()
    }

    /// Successors of `node` along `succ` that belong to `category`.
    pub fn next_with(
        &self,
        node: NodeId,
        category: PosCategory,
    ) -> impl Iterator<Item = NodeId> + 'a {
        let graph = self.graph;
        graph
            .successors(node)
            .filter(move |&n| graph.node(n).has_category(category))
    }

    /// Predecessors of `node` along `succ` that belong to `category`.
    pub fn previous_with(
        &self,
        node: NodeId,
        category: PosCategory,
    ) -> impl Iterator<Item = NodeId> + 'a {
        let graph = self.graph;
        graph
            .predecessors(node)
            .filter(move |&n| graph.node(n).has_category(category))
    }

    /// Successors of `node` along `succ`.
    pub fn next(&self, node: NodeId) -> impl Iterator<Item = NodeId> + 'a {
        self.graph.successors(node)
    }
}
