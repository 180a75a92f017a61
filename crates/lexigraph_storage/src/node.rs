//! Graph nodes.

use std::collections::BTreeSet;

use lexigraph_foundation::{NodeId, NodeKind, PosCategory};

/// A node of the semantic graph.
///
/// Identity is the surface form: a graph never holds two nodes with the same
/// `word`. All attributes are explicit fields so every consumer shares one
/// contract.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Index of this node in its graph.
    pub id: NodeId,
    /// Surface form (identity).
    pub word: String,
    /// Identifier of this word in an external lexical network, if known.
    pub external_id: Option<u64>,
    /// Structural type tag.
    pub kind: NodeKind,
    /// Part-of-speech labels as returned by the tag provider.
    pub pos_tags: BTreeSet<String>,
    /// Node weight.
    pub weight: f64,
    /// Candidate senses, in the order they were attached.
    pub senses: Vec<String>,
    /// Head node of a derived phrase. Non-owning.
    pub head: Option<NodeId>,
}

impl Node {
    /// Creates a node with default attributes.
    #[must_use]
    pub fn new(id: NodeId, word: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            word: word.into(),
            external_id: None,
            kind,
            pos_tags: BTreeSet::new(),
            weight: 1.0,
            senses: Vec::new(),
            head: None,
        }
    }

    /// Returns true if any of this node's tags maps to `category`.
    #[must_use]
    pub fn has_category(&self, category: PosCategory) -> bool {
        self.pos_tags.iter().any(|label| category.matches(label))
    }

    /// Returns true for `_START` / `_END`.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.kind == NodeKind::Sentinel
    }
}
