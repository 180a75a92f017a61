//! Pronoun resolution by graph distance.
//!
//! Candidates are the immediate `succ` successors of determiners. Each
//! pronoun is linked to the candidate closest to it in the whole relation
//! graph, traversed undirected, scored `1 / (1 + distance)`. Ties keep the
//! first candidate seen; no gender or number agreement is checked.

use std::collections::HashSet;

use lexigraph_foundation::{NodeId, NodeKind, PosCategory, RelationType};
use lexigraph_parser::Vocabulary;
use lexigraph_storage::SemanticGraph;
use tracing::{debug, trace};

/// A pronoun linked to its antecedent.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The pronoun node
    pub pronoun: NodeId,
    /// The chosen antecedent
    pub antecedent: NodeId,
    /// Shortest-path length between them
    pub distance: usize,
    /// `1 / (1 + distance)`
    pub score: f64,
}

/// Links pronouns to antecedents.
pub struct AnaphoraResolver<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> AnaphoraResolver<'a> {
    /// Creates a resolver over a closed-class vocabulary.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Inverse-distance score.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score(distance: usize) -> f64 {
        1.0 / (1.0 + distance as f64)
    }

    /// Determiner nodes: tagged `Det` or listed as articles.
    #[must_use]
    pub fn determiners(&self, graph: &SemanticGraph) -> Vec<NodeId> {
        graph
            .nodes()
            .filter(|n| !n.is_sentinel())
            .filter(|n| n.has_category(PosCategory::Det) || self.vocabulary.is_article(&n.word))
            .map(|n| n.id)
            .collect()
    }

    /// Pronoun word nodes, in node order.
    #[must_use]
    pub fn pronouns(&self, graph: &SemanticGraph) -> Vec<NodeId> {
        graph
            .nodes()
            .filter(|n| n.kind == NodeKind::Token && self.vocabulary.is_pronoun(&n.word))
            .map(|n| n.id)
            .collect()
    }

    /// Antecedent candidates, in determiner order then edge order, each once.
    #[must_use]
    pub fn candidates(&self, graph: &SemanticGraph) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        self.determiners(graph)
            .into_iter()
            .flat_map(|det| graph.successors(det).collect::<Vec<_>>())
            .filter(|&c| !graph.node(c).is_sentinel() && seen.insert(c))
            .collect()
    }

    /// Computes resolutions without touching the graph.
    #[must_use]
    pub fn resolve(&self, graph: &SemanticGraph) -> Vec<Resolution> {
        let candidates = self.candidates(graph);
        let mut resolutions = Vec::new();

        for pronoun in self.pronouns(graph) {
            let mut best: Option<Resolution> = None;

            for &candidate in &candidates {
                if candidate == pronoun {
                    continue;
                }
                let Some(distance) = graph.distance(candidate, pronoun) else {
                    trace!(
                        pronoun = graph.word(pronoun),
                        candidate = graph.word(candidate),
                        "no path; candidate skipped"
                    );
                    continue;
                };
                let score = Self::score(distance);
                if best.as_ref().is_none_or(|b| score > b.score) {
                    best = Some(Resolution {
                        pronoun,
                        antecedent: candidate,
                        distance,
                        score,
                    });
                }
            }

            if let Some(resolution) = best {
                resolutions.push(resolution);
            }
        }

        resolutions
    }

    /// Resolves every pronoun and adds a `reference` edge per resolution.
    ///
    /// All scores come from the graph as it was before any edge is added.
    pub fn apply(&self, graph: &mut SemanticGraph) -> Vec<Resolution> {
        let resolutions = self.resolve(graph);
        for r in &resolutions {
            graph.add_relation(r.pronoun, r.antecedent, RelationType::Reference, 1.0);
            graph.annotate(
                r.pronoun,
                r.antecedent,
                RelationType::Reference,
                "score",
                format!("{:.4}", r.score),
            );
            graph.annotate(
                r.pronoun,
                r.antecedent,
                RelationType::Reference,
                "distance",
                r.distance.to_string(),
            );
            debug!(
                pronoun = graph.word(r.pronoun),
                antecedent = graph.word(r.antecedent),
                distance = r.distance,
                "pronoun resolved"
            );
        }
        resolutions
    }
}
