//! Typed relations between nodes.

use std::collections::BTreeMap;

use lexigraph_foundation::{NodeId, RelationType};

/// A directed, typed, weighted edge.
///
/// At most one relation exists per `(source, target, relation)` triple; the
/// graph enforces this on insertion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    /// Source node.
    pub source: NodeId,
    /// Target node.
    pub target: NodeId,
    /// Relation type.
    pub relation: RelationType,
    /// Relation weight.
    pub weight: f64,
    /// Free-form annotations (provenance and the like).
    pub annotations: BTreeMap<String, String>,
}

impl Relation {
    /// Creates a relation with no annotations.
    #[must_use]
    pub fn new(source: NodeId, target: NodeId, relation: RelationType, weight: f64) -> Self {
        Self {
            source,
            target,
            relation,
            weight,
            annotations: BTreeMap::new(),
        }
    }

    /// Returns the identity triple of this relation.
    #[must_use]
    pub fn key(&self) -> (NodeId, NodeId, RelationType) {
        (self.source, self.target, self.relation)
    }

    /// Returns the annotation stored under `key`.
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Returns the endpoint opposite to `node`, if `node` is an endpoint.
    #[must_use]
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }
}
