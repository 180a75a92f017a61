//! The semantic graph: node table plus typed relation store.
//!
//! Nodes are unique by surface form and addressed by [`NodeId`]. Relations are
//! unique by `(source, target, relation)`; several relation types may coexist
//! between the same node pair. Forward and reverse indices allow traversal in
//! both directions without scanning the relation list.

use std::collections::{HashMap, HashSet, VecDeque};

use lexigraph_foundation::{Error, NodeId, NodeKind, RelationType, Result};

use crate::node::Node;
use crate::relation::Relation;

/// Outcome of [`SemanticGraph::add_relation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Assertion {
    /// A new relation was stored.
    Inserted,
    /// The triple already existed; only its weight was updated.
    Updated,
}

impl Assertion {
    /// Returns true if the graph gained a relation.
    #[must_use]
    pub fn is_inserted(self) -> bool {
        self == Self::Inserted
    }
}

/// Node and relation store for one analyzed sentence.
///
/// Maintains indices for efficient traversal:
/// - Word: surface form -> node
/// - Key: (source, target, relation) -> relation slot
/// - Forward: node -> outgoing relation slots (assertion order)
/// - Reverse: node -> incoming relation slots (assertion order)
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "GraphSnapshot", into = "GraphSnapshot")
)]
pub struct SemanticGraph {
    nodes: Vec<Node>,
    by_word: HashMap<String, NodeId>,
    relations: Vec<Relation>,
    by_key: HashMap<(NodeId, NodeId, RelationType), usize>,
    forward: Vec<Vec<usize>>,
    reverse: Vec<Vec<usize>>,
}

impl SemanticGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Nodes
    // -------------------------------------------------------------------------

    /// Returns the node for `word`, creating a plain token node if missing.
    pub fn get_or_create_node(&mut self, word: &str) -> NodeId {
        self.get_or_create_node_with(word, NodeKind::Token)
    }

    /// Returns the node for `word`, creating it with `kind` if missing.
    ///
    /// The kind of an existing node is left untouched.
    pub fn get_or_create_node_with(&mut self, word: &str, kind: NodeKind) -> NodeId {
        if let Some(&id) = self.by_word.get(word) {
            return id;
        }
        #[allow(clippy::cast_possible_truncation)]
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, word, kind));
        self.by_word.insert(word.to_string(), id);
        self.forward.push(Vec::new());
        self.reverse.push(Vec::new());
        id
    }

    /// Looks up a node by surface form.
    #[must_use]
    pub fn find(&self, word: &str) -> Option<NodeId> {
        self.by_word.get(word).copied()
    }

    /// Looks up a node by surface form.
    ///
    /// # Errors
    ///
    /// Returns an error if no node has this surface form.
    pub fn require(&self, word: &str) -> Result<NodeId> {
        self.find(word).ok_or_else(|| Error::node_not_found(word))
    }

    /// Returns the node with `id`, if it belongs to this graph.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns the node with `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Returns the node with `id` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Returns the surface form of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    #[must_use]
    pub fn word(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].word
    }

    /// Iterates over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Returns all node ids in insertion order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // -------------------------------------------------------------------------
    // Relations
    // -------------------------------------------------------------------------

    /// Asserts a relation.
    ///
    /// Re-asserting an existing `(source, target, relation)` triple updates its
    /// weight in place and never creates a duplicate. Other relation types
    /// between the same pair are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint was not issued by this graph.
    pub fn add_relation(
        &mut self,
        source: NodeId,
        target: NodeId,
        relation: RelationType,
        weight: f64,
    ) -> Assertion {
        assert!(
            self.get(source).is_some() && self.get(target).is_some(),
            "relation endpoint {source} -> {target} is not a node of this graph"
        );

        let key = (source, target, relation);
        if let Some(&slot) = self.by_key.get(&key) {
            self.relations[slot].weight = weight;
            return Assertion::Updated;
        }

        let slot = self.relations.len();
        self.relations
            .push(Relation::new(source, target, relation, weight));
        self.by_key.insert(key, slot);
        self.forward[source.index()].push(slot);
        self.reverse[target.index()].push(slot);
        Assertion::Inserted
    }

    /// Sets an annotation on an existing relation.
    ///
    /// Returns false if the relation does not exist.
    pub fn annotate(
        &mut self,
        source: NodeId,
        target: NodeId,
        relation: RelationType,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.by_key.get(&(source, target, relation)) {
            Some(&slot) => {
                self.relations[slot]
                    .annotations
                    .insert(key.into(), value.into());
                true
            }
            None => false,
        }
    }

    /// Returns the relation for a triple.
    #[must_use]
    pub fn relation(
        &self,
        source: NodeId,
        target: NodeId,
        relation: RelationType,
    ) -> Option<&Relation> {
        self.by_key
            .get(&(source, target, relation))
            .map(|&slot| &self.relations[slot])
    }

    /// Checks if a specific relation exists.
    #[must_use]
    pub fn has_relation(&self, source: NodeId, target: NodeId, relation: RelationType) -> bool {
        self.by_key.contains_key(&(source, target, relation))
    }

    /// Checks for a `succ` edge from `a` to `b`.
    #[must_use]
    pub fn has_succ(&self, a: NodeId, b: NodeId) -> bool {
        self.has_relation(a, b, RelationType::Succ)
    }

    /// All relations in assertion order.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns the number of relations.
    #[must_use]
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// All relations from `source` to `target`, of any type.
    #[must_use]
    pub fn relations_between(&self, source: NodeId, target: NodeId) -> Vec<&Relation> {
        self.outgoing(source, None)
            .filter(|r| r.target == target)
            .collect()
    }

    /// All relations of one type, in assertion order.
    pub fn relations_of_type(&self, relation: RelationType) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.iter().filter(move |r| r.relation == relation)
    }

    /// Outgoing relations of `node`, optionally restricted to one type.
    pub fn outgoing(
        &self,
        node: NodeId,
        relation: Option<RelationType>,
    ) -> impl Iterator<Item = &Relation> + '_ {
        self.forward
            .get(node.index())
            .into_iter()
            .flat_map(|slots| slots.iter().map(|&slot| &self.relations[slot]))
            .filter(move |r| relation.is_none_or(|t| r.relation == t))
    }

    /// Incoming relations of `node`, optionally restricted to one type.
    pub fn incoming(
        &self,
        node: NodeId,
        relation: Option<RelationType>,
    ) -> impl Iterator<Item = &Relation> + '_ {
        self.reverse
            .get(node.index())
            .into_iter()
            .flat_map(|slots| slots.iter().map(|&slot| &self.relations[slot]))
            .filter(move |r| relation.is_none_or(|t| r.relation == t))
    }

    /// Targets of outgoing `succ` edges.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing(node, Some(RelationType::Succ))
            .map(|r| r.target)
    }

    /// Sources of incoming `succ` edges.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming(node, Some(RelationType::Succ))
            .map(|r| r.source)
    }

    /// Nodes adjacent to `node` through any relation, in either direction.
    ///
    /// Each neighbour appears once, outgoing neighbours first.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        self.outgoing(node, None)
            .map(|r| r.target)
            .chain(self.incoming(node, None).map(|r| r.source))
            .filter(|&n| n != node && seen.insert(n))
            .collect()
    }

    /// Unweighted shortest-path length between two nodes, treating every
    /// relation as undirected.
    ///
    /// Returns `None` if either node is foreign or no path exists.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<usize> {
        if self.get(from).is_none() || self.get(to).is_none() {
            return None;
        }
        if from == to {
            return Some(0);
        }

        let mut depth = vec![usize::MAX; self.nodes.len()];
        let mut queue = VecDeque::new();
        depth[from.index()] = 0;
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            let next_depth = depth[current.index()] + 1;
            for neighbor in self.neighbors(current) {
                if depth[neighbor.index()] != usize::MAX {
                    continue;
                }
                if neighbor == to {
                    return Some(next_depth);
                }
                depth[neighbor.index()] = next_depth;
                queue.push_back(neighbor);
            }
        }

        None
    }

    /// Rebuilds a graph from its nodes and relations.
    ///
    /// Node ids are reassigned from position; relations and heads that point
    /// outside the node list are dropped. Duplicate triples keep the last weight.
    #[must_use]
    pub fn from_parts(nodes: Vec<Node>, relations: Vec<Relation>) -> Self {
        let mut graph = Self::new();
        let mut heads = Vec::new();
        for node in nodes {
            let id = graph.get_or_create_node_with(&node.word, node.kind);
            let stored = graph.node_mut(id);
            stored.external_id = node.external_id;
            stored.pos_tags = node.pos_tags;
            stored.weight = node.weight;
            stored.senses = node.senses;
            if let Some(head) = node.head {
                heads.push((id, head));
            }
        }
        for (id, head) in heads {
            if graph.get(head).is_some() {
                graph.node_mut(id).head = Some(head);
            }
        }
        for relation in relations {
            if graph.get(relation.source).is_none() || graph.get(relation.target).is_none() {
                continue;
            }
            graph.add_relation(
                relation.source,
                relation.target,
                relation.relation,
                relation.weight,
            );
            for (key, value) in relation.annotations {
                graph.annotate(relation.source, relation.target, relation.relation, key, value);
            }
        }
        graph
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Serialized form of a graph: the indices are rebuilt on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphSnapshot {
    nodes: Vec<Node>,
    relations: Vec<Relation>,
}

#[cfg(feature = "serde")]
impl From<GraphSnapshot> for SemanticGraph {
    fn from(snapshot: GraphSnapshot) -> Self {
        Self::from_parts(snapshot.nodes, snapshot.relations)
    }
}

#[cfg(feature = "serde")]
impl From<SemanticGraph> for GraphSnapshot {
    fn from(graph: SemanticGraph) -> Self {
        Self {
            nodes: graph.nodes,
            relations: graph.relations,
        }
    }
}
