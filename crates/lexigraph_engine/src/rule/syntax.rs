//! Syntactic dependency rules.
//!
//! Each rule anchors on one part-of-speech category and walks `succ` edges
//! outward to bind its remaining variables.

use std::collections::HashSet;

use lexigraph_foundation::{NodeKind, PosCategory, RelationType};

use crate::pattern::RuleContext;
use crate::rule::{Derivation, Rule};

/// `Det(x) ∧ Nom(y) ∧ Verb(z) ∧ succ(x,y) ∧ succ(y,z)`
/// ⇒ `agent(z,y)`, `agent-inverse(y,z)`.
#[must_use]
pub fn agent(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let mut out = Vec::new();
    for det in ctx.anchors(PosCategory::Det) {
        for noun in ctx.next_with(det, PosCategory::Nom) {
            for verb in ctx.next_with(noun, PosCategory::Verb) {
                out.push(Derivation::relation(verb, noun, RelationType::Agent));
                out.push(Derivation::relation(noun, verb, RelationType::AgentInverse));
            }
        }
    }
    out
}

/// `Verb(x) ∧ Det(y) ∧ Nom(z) ∧ succ(x,y) ∧ succ(y,z)`
/// ⇒ `patient(x,z)`, `patient-inverse(z,x)`.
#[must_use]
pub fn patient(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let mut out = Vec::new();
    for verb in ctx.anchors(PosCategory::Verb) {
        for det in ctx.next_with(verb, PosCategory::Det) {
            for noun in ctx.next_with(det, PosCategory::Nom) {
                out.push(Derivation::relation(verb, noun, RelationType::Patient));
                out.push(Derivation::relation(noun, verb, RelationType::PatientInverse));
            }
        }
    }
    out
}

/// `Nom(x) ∧ Adj(y) ∧ (succ(x,y) ∨ succ(y,x))` ⇒ `characteristic(x,y)`.
#[must_use]
pub fn characteristic(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let mut out = Vec::new();
    for noun in ctx.anchors(PosCategory::Nom) {
        let adjectives = ctx
            .next_with(noun, PosCategory::Adj)
            .chain(ctx.previous_with(noun, PosCategory::Adj));
        for adj in adjectives {
            if adj != noun {
                out.push(Derivation::relation(noun, adj, RelationType::Characteristic));
            }
        }
    }
    out
}

/// `Verb(x) ∧ locative(y) ∧ Det(z) ∧ Nom(t) ∧ succ(x,y) ∧ succ(y,z) ∧ succ(z,t)`
/// ⇒ `location(x,t)`.
#[must_use]
pub fn location(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let vocabulary = ctx.vocabulary();
    let mut out = Vec::new();
    for verb in ctx.anchors(PosCategory::Verb) {
        let prepositions = ctx
            .next(verb)
            .filter(|&p| vocabulary.is_locative_preposition(ctx.word(p)));
        for prep in prepositions {
            for det in ctx.next_with(prep, PosCategory::Det) {
                for place in ctx.next_with(det, PosCategory::Nom) {
                    out.push(Derivation::relation(verb, place, RelationType::Location));
                }
            }
        }
    }
    out
}

/// `Neg(x) ∧ Verb(y) ∧ succ(x,y)` ⇒ `negation(x,y)`.
#[must_use]
pub fn negation(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let mut out = Vec::new();
    for neg in ctx.anchors(PosCategory::Neg) {
        for verb in ctx.next_with(neg, PosCategory::Verb) {
            out.push(Derivation::relation(neg, verb, RelationType::Negation));
        }
    }
    out
}

/// `Det Adj* Nom` along `succ` ⇒ a noun-phrase node headed by the noun.
///
/// Adjective runs are walked depth-first; each node is visited at most once
/// per determiner, so cyclic chains terminate.
#[must_use]
pub fn noun_phrase(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let mut out = Vec::new();
    for det in ctx.anchors(PosCategory::Det) {
        let mut visited = HashSet::from([det]);
        let mut stack = vec![(det, vec![ctx.word(det)])];

        while let Some((node, words)) = stack.pop() {
            for next in ctx.next(node) {
                if !visited.insert(next) {
                    continue;
                }
                let mut path = words.clone();
                path.push(ctx.word(next));

                if ctx.is(next, PosCategory::Nom) {
                    out.push(Derivation::phrase(path.join(" "), next));
                }
                if ctx.is(next, PosCategory::Adj) {
                    stack.push((next, path));
                }
            }
        }
    }
    out
}

/// Passive clause over a noun phrase `P` with head `h`:
/// `succ(h,aux) ∧ Verb(aux) ∧ succ(aux,v) ∧ succ(v,"par") ∧ succ("par",d)
/// ∧ Det(d) ∧ succ(d,t) ∧ Nom(t)`
/// ⇒ `agent(v,t)`, `agent-inverse(t,v)`, `patient(v,h)`, `patient-inverse(h,v)`.
#[must_use]
pub fn passive(ctx: &RuleContext<'_>) -> Vec<Derivation> {
    let graph = ctx.graph();
    let vocabulary = ctx.vocabulary();
    let mut out = Vec::new();

    for phrase in ctx.nodes_of_kind(NodeKind::NounPhrase) {
        let Some(head) = graph.node(phrase).head else {
            continue;
        };
        for aux in ctx.next_with(head, PosCategory::Verb) {
            for verb in ctx.next(aux) {
                let markers = ctx
                    .next(verb)
                    .filter(|&m| vocabulary.is_passive_agent_marker(ctx.word(m)));
                for marker in markers {
                    for det in ctx.next_with(marker, PosCategory::Det) {
                        for agent in ctx.next_with(det, PosCategory::Nom) {
                            out.push(Derivation::relation(verb, agent, RelationType::Agent));
                            out.push(Derivation::relation(
                                agent,
                                verb,
                                RelationType::AgentInverse,
                            ));
                            out.push(Derivation::relation(verb, head, RelationType::Patient));
                            out.push(Derivation::relation(
                                head,
                                verb,
                                RelationType::PatientInverse,
                            ));
                        }
                    }
                }
            }
        }
    }
    out
}

/// The five dependency rules, in fixed order.
#[must_use]
pub fn canonical_rules() -> Vec<Rule> {
    vec![
        Rule::new("agent", agent),
        Rule::new("patient", patient),
        Rule::new("characteristic", characteristic),
        Rule::new("location", location),
        Rule::new("negation", negation),
    ]
}

/// Canonical rules plus noun-phrase derivation and passive voice.
///
/// Noun phrases are derived first so the passive rule sees them in the
/// same pass.
#[must_use]
pub fn extended_rules() -> Vec<Rule> {
    let mut rules = vec![Rule::new("noun-phrase", noun_phrase).with_salience(10)];
    rules.extend(canonical_rules());
    rules.push(Rule::new("passive", passive));
    rules
}
