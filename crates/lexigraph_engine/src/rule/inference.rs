//! Inference over lexical-network relations.
//!
//! Runs after lexical integration, once `isa` edges are in the graph.

use lexigraph_foundation::RelationType;

use crate::pattern::RuleContext;
use crate::rule::{Derivation, Rule};

/// `isa(A,C) ∧ agent(C,X) ∧ ¬agent(A,X)` ⇒ `agent(A,X)`.
#[must_use]
pub fn isa_transitivity(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let graph = ctx.graph();
    let mut out = Vec::new();
    for isa in graph.relations_of_type(RelationType::Isa) {
        for agent in graph.outgoing(isa.target, Some(RelationType::Agent)) {
            if !graph.has_relation(isa.source, agent.target, RelationType::Agent) {
                out.push(Derivation::relation(
                    isa.source,
                    agent.target,
                    RelationType::Agent,
                ));
            }
        }
    }
    out
}

/// The inference rule set.
#[must_use]
pub fn inference_rules() -> Vec<Rule> {
    vec![Rule::new("isa-transitivity", isa_transitivity)]
}
