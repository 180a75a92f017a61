//! Provider-backed annotation passes.
//!
//! Each pass snapshots the node ids it will visit before touching the graph,
//! so nodes it creates (tags, senses, concepts) are never fed back to the
//! provider in the same pass.

use lexigraph_foundation::{NodeId, NodeKind, RelationType};
use lexigraph_storage::SemanticGraph;
use tracing::{debug, trace};

use crate::provider::{LexicalRelationProvider, SenseProvider, TagProvider, fail_open};

fn ids_of_kind(graph: &SemanticGraph, kinds: &[NodeKind]) -> Vec<NodeId> {
    graph
        .nodes()
        .filter(|n| kinds.contains(&n.kind))
        .map(|n| n.id)
        .collect()
}

// =============================================================================
// Part of speech
// =============================================================================

/// Attaches part-of-speech tags to word and compound nodes.
pub struct PosAnnotator<'a> {
    provider: &'a dyn TagProvider,
}

impl<'a> PosAnnotator<'a> {
    /// Creates an annotator over a tag provider.
    #[must_use]
    pub fn new(provider: &'a dyn TagProvider) -> Self {
        Self { provider }
    }

    /// Tags every non-sentinel chain node.
    ///
    /// Each label lands in the node's tag set and as a `pos` edge to a tag
    /// node carrying the provider weight. Ambiguous words keep every tag.
    /// Returns the number of `pos` edges asserted.
    pub fn annotate(&self, graph: &mut SemanticGraph) -> usize {
        let mut asserted = 0;
        for id in ids_of_kind(graph, &[NodeKind::Token, NodeKind::Compound]) {
            let word = graph.word(id).to_string();
            let tags = fail_open("tags", &word, self.provider.tags_for(&word));
            for (label, weight) in tags {
                graph.node_mut(id).pos_tags.insert(label.clone());
                let tag = graph.get_or_create_node_with(&label, NodeKind::Tag);
                graph.add_relation(id, tag, RelationType::Pos, weight);
                asserted += 1;
            }
        }
        debug!(asserted, "pos annotation done");
        asserted
    }
}

// =============================================================================
// Senses
// =============================================================================

/// Links nodes to their best sense.
pub struct DisambiguationLinker<'a> {
    provider: &'a dyn SenseProvider,
}

impl<'a> DisambiguationLinker<'a> {
    /// Creates a linker over a sense provider.
    #[must_use]
    pub fn new(provider: &'a dyn SenseProvider) -> Self {
        Self { provider }
    }

    /// Queries every node present when the pass starts, sentinels included.
    ///
    /// Returns the number of `disambiguate` edges asserted.
    pub fn link(&self, graph: &mut SemanticGraph) -> usize {
        let mut asserted = 0;
        for id in graph.node_ids() {
            let word = graph.word(id).to_string();
            let Some((label, weight)) =
                fail_open("senses", &word, self.provider.best_sense_for(&word))
            else {
                continue;
            };
            let sense = graph.get_or_create_node_with(&label, NodeKind::Sense);
            let node = graph.node_mut(id);
            if !node.senses.contains(&label) {
                node.senses.push(label);
            }
            graph.add_relation(id, sense, RelationType::Disambiguate, weight);
            asserted += 1;
        }
        debug!(asserted, "disambiguation done");
        asserted
    }
}

// =============================================================================
// Lexical network
// =============================================================================

/// Imports `isa` and `synonym` edges from a lexical network.
pub struct LexicalIntegrator<'a> {
    provider: &'a dyn LexicalRelationProvider,
}

impl<'a> LexicalIntegrator<'a> {
    /// Creates an integrator over a lexical-relation provider.
    #[must_use]
    pub fn new(provider: &'a dyn LexicalRelationProvider) -> Self {
        Self { provider }
    }

    /// Queries words, compounds, and noun phrases.
    ///
    /// Targets become concept nodes (or reuse an existing node of the same
    /// surface form). Kinds other than `isa`/`synonym` are ignored. Returns the
    /// number of relations asserted.
    pub fn integrate(&self, graph: &mut SemanticGraph) -> usize {
        let mut asserted = 0;
        let kinds = [NodeKind::Token, NodeKind::Compound, NodeKind::NounPhrase];

        for id in ids_of_kind(graph, &kinds) {
            let word = graph.word(id).to_string();

            if let Some(external) =
                fail_open("lexical", &word, self.provider.external_id_for(&word))
            {
                graph.node_mut(id).external_id = Some(external);
            }

            for (kind, target, weight) in
                fail_open("lexical", &word, self.provider.relations_for(&word))
            {
                let relation = match kind.parse::<RelationType>() {
                    Ok(r @ (RelationType::Isa | RelationType::Synonym)) => r,
                    _ => {
                        trace!(word = %word, kind = %kind, "ignoring lexical relation kind");
                        continue;
                    }
                };
                let concept = graph.get_or_create_node_with(&target, NodeKind::Concept);
                graph.add_relation(id, concept, relation, weight);
                asserted += 1;
            }
        }
        debug!(asserted, "lexical integration done");
        asserted
    }
}
