//! Forward-chaining rule engine for Lexigraph.
//!
//! Rules are pure functions from a read-only [`RuleContext`] to a list of
//! [`Derivation`]s. The [`RuleEngine`] applies the ordered rule list in
//! passes, merging each rule's derivations into the graph before the next
//! rule runs, until a pass adds nothing or the pass cap is reached.

pub mod inference;
pub mod syntax;

use std::collections::BTreeMap;

use lexigraph_foundation::{NodeId, NodeKind, RelationType};
use lexigraph_parser::Vocabulary;
use lexigraph_storage::SemanticGraph;
use tracing::{debug, warn};

use crate::pattern::RuleContext;

// =============================================================================
// Derivation
// =============================================================================

/// Something a rule asks the driver to add.
#[derive(Clone, Debug, PartialEq)]
pub enum Derivation {
    /// A typed relation between two existing nodes.
    Relation {
        /// Source node
        source: NodeId,
        /// Target node
        target: NodeId,
        /// Relation type
        relation: RelationType,
        /// Weight to store
        weight: f64,
    },
    /// A derived phrase node with a head.
    Phrase {
        /// Surface form of the phrase
        surface: String,
        /// Head node of the phrase
        head: NodeId,
    },
}

impl Derivation {
    /// A relation with weight 1.0.
    #[must_use]
    pub fn relation(source: NodeId, target: NodeId, relation: RelationType) -> Self {
        Self::Relation {
            source,
            target,
            relation,
            weight: 1.0,
        }
    }

    /// A noun-phrase node.
    #[must_use]
    pub fn phrase(surface: impl Into<String>, head: NodeId) -> Self {
        Self::Phrase {
            surface: surface.into(),
            head,
        }
    }
}

// =============================================================================
// Rule
// =============================================================================

/// Matcher signature shared by every rule.
pub type Matcher = fn(&RuleContext<'_>) -> Vec<Derivation>;

/// A named motif matcher.
#[derive(Clone)]
pub struct Rule {
    /// Rule name, recorded as provenance on every derived relation
    pub name: &'static str,
    /// Priority (higher runs first within a pass)
    pub salience: i32,
    /// Whether rule is enabled
    pub enabled: bool,
    /// The motif matcher
    pub matcher: Matcher,
}

impl Rule {
    /// Creates an enabled rule with salience 0.
    #[must_use]
    pub fn new(name: &'static str, matcher: Matcher) -> Self {
        Self {
            name,
            salience: 0,
            enabled: true,
            matcher,
        }
    }

    /// Sets the salience (priority).
    #[must_use]
    pub fn with_salience(mut self, salience: i32) -> Self {
        self.salience = salience;
        self
    }

    /// Enables or disables the rule.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Runs the matcher against a graph.
    #[must_use]
    pub fn derive(&self, ctx: &RuleContext<'_>) -> Vec<Derivation> {
        (self.matcher)(ctx)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("salience", &self.salience)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Saturation Report
// =============================================================================

/// What one engine run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaturationReport {
    /// Passes executed, including the final quiet pass
    pub passes: usize,
    /// Relations inserted
    pub relations_added: usize,
    /// Phrase nodes inserted
    pub nodes_added: usize,
    /// Insertions per rule name
    pub firings: BTreeMap<&'static str, usize>,
    /// True if the last allowed pass still changed the graph
    pub cap_reached: bool,
}

impl SaturationReport {
    /// Returns true if the run reached a fixpoint.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        !self.cap_reached
    }

    /// Returns true if the run changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.relations_added == 0 && self.nodes_added == 0
    }

    /// Insertions made by one rule.
    #[must_use]
    pub fn firings_of(&self, rule: &str) -> usize {
        self.firings.get(rule).copied().unwrap_or(0)
    }
}

// =============================================================================
// Rule Engine
// =============================================================================

/// Applies rules to a graph until a fixpoint or the pass cap.
#[derive(Clone, Debug)]
pub struct RuleEngine {
    max_passes: usize,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Default pass cap.
    pub const DEFAULT_MAX_PASSES: usize = 5;

    /// Creates an engine with the default pass cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_passes: Self::DEFAULT_MAX_PASSES,
        }
    }

    /// Sets the pass cap (at least one pass always runs).
    #[must_use]
    pub fn with_max_passes(mut self, max: usize) -> Self {
        self.max_passes = max.max(1);
        self
    }

    /// The pass cap.
    #[must_use]
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Runs `rules` over `graph` to saturation.
    ///
    /// Enabled rules run in descending salience, ties in list order. A
    /// derivation whose triple already exists is dropped, so a saturated graph
    /// is left untouched. Every inserted relation is annotated with the rule
    /// name and the pass number.
    pub fn run(
        &self,
        rules: &[Rule],
        graph: &mut SemanticGraph,
        vocabulary: &Vocabulary,
    ) -> SaturationReport {
        let mut ordered: Vec<&Rule> = rules.iter().filter(|r| r.enabled).collect();
        ordered.sort_by(|a, b| b.salience.cmp(&a.salience));

        let mut report = SaturationReport::default();

        for pass in 1..=self.max_passes {
            report.passes = pass;
            let mut changed = false;

            for rule in &ordered {
                let derivations = rule.derive(&RuleContext::new(graph, vocabulary));
                let added = Self::merge(rule.name, pass, derivations, graph, &mut report);
                if added > 0 {
                    debug!(rule = rule.name, pass, added, "rule fired");
                    *report.firings.entry(rule.name).or_insert(0) += added;
                    changed = true;
                }
            }

            if !changed {
                return report;
            }
        }

        report.cap_reached = true;
        warn!(
            max_passes = self.max_passes,
            relations = report.relations_added,
            "rule engine stopped at pass cap before saturation"
        );
        report
    }

    /// Applies derivations; returns how many were new.
    fn merge(
        rule: &'static str,
        pass: usize,
        derivations: Vec<Derivation>,
        graph: &mut SemanticGraph,
        report: &mut SaturationReport,
    ) -> usize {
        let mut added = 0;
        let pass_label = pass.to_string();

        for derivation in derivations {
            match derivation {
                Derivation::Relation {
                    source,
                    target,
                    relation,
                    weight,
                } => {
                    if graph.has_relation(source, target, relation) {
                        continue;
                    }
                    graph.add_relation(source, target, relation, weight);
                    graph.annotate(source, target, relation, "rule", rule);
                    graph.annotate(source, target, relation, "pass", pass_label.as_str());
                    report.relations_added += 1;
                    added += 1;
                }
                Derivation::Phrase { surface, head } => {
                    if graph.find(&surface).is_some() {
                        continue;
                    }
                    let id = graph.get_or_create_node_with(&surface, NodeKind::NounPhrase);
                    graph.node_mut(id).head = Some(head);
                    report.nodes_added += 1;
                    added += 1;
                }
            }
        }

        added
    }
}
