//! Integration tests for the rule engine

use lexigraph_engine::rule::{inference, syntax};
use lexigraph_engine::{PosAnnotator, Rule, RuleEngine, TagProvider};
use lexigraph_foundation::{RelationType, Result};
use lexigraph_parser::{TokenChain, Vocabulary};
use lexigraph_storage::SemanticGraph;

/// Tag provider backed by a fixed word list.
struct Stub(&'static [(&'static str, &'static str)]);

impl TagProvider for Stub {
    fn tags_for(&self, word: &str) -> Result<Vec<(String, f64)>> {
        Ok(self
            .0
            .iter()
            .filter(|(w, _)| *w == word)
            .map(|(_, tag)| ((*tag).to_string(), 1.0))
            .collect())
    }
}

fn tagged(text: &str, tags: &'static [(&'static str, &'static str)]) -> SemanticGraph {
    let mut graph = TokenChain::from_text(text).to_graph();
    PosAnnotator::new(&Stub(tags)).annotate(&mut graph);
    graph
}

fn has(graph: &SemanticGraph, source: &str, target: &str, relation: RelationType) -> bool {
    match (graph.find(source), graph.find(target)) {
        (Some(s), Some(t)) => graph.has_relation(s, t, relation),
        _ => false,
    }
}

// =============================================================================
// Dependency rules
// =============================================================================

#[test]
fn agent_and_patient_from_stub_tags() {
    let mut graph = tagged(
        "le chat boit du lait",
        &[
            ("chat", "Nom:"),
            ("boit", "Ver:"),
            ("lait", "Nom:"),
            ("le", "Det:"),
            ("du", "Det:"),
        ],
    );
    let report = RuleEngine::new().run(
        &syntax::canonical_rules(),
        &mut graph,
        &Vocabulary::french(),
    );

    assert!(has(&graph, "boit", "chat", RelationType::Agent));
    assert!(has(&graph, "boit", "lait", RelationType::Patient));
    assert_eq!(report.firings_of("agent"), 2);
    assert_eq!(report.firings_of("patient"), 2);
    assert!(report.is_saturated());
}

#[test]
fn characteristic_never_links_two_adjectives() {
    let mut graph = tagged(
        "le petit chat mignon",
        &[
            ("le", "Det:"),
            ("petit", "Adj:"),
            ("chat", "Nom:"),
            ("mignon", "Adj:"),
        ],
    );
    RuleEngine::new().run(&syntax::canonical_rules(), &mut graph, &Vocabulary::french());

    assert!(has(&graph, "chat", "petit", RelationType::Characteristic));
    assert!(has(&graph, "chat", "mignon", RelationType::Characteristic));

    let adjectives = [graph.find("petit").unwrap(), graph.find("mignon").unwrap()];
    for relation in graph.relations_of_type(RelationType::Characteristic) {
        assert!(!(adjectives.contains(&relation.source) && adjectives.contains(&relation.target)));
    }
}

#[test]
fn derived_relations_carry_provenance() {
    let mut graph = tagged(
        "le chat boit",
        &[("le", "Det:"), ("chat", "Nom:"), ("boit", "Ver:")],
    );
    RuleEngine::new().run(&syntax::canonical_rules(), &mut graph, &Vocabulary::french());

    let boit = graph.find("boit").unwrap();
    let chat = graph.find("chat").unwrap();
    let agent = graph.relation(boit, chat, RelationType::Agent).unwrap();
    assert_eq!(agent.annotation("rule"), Some("agent"));
    assert_eq!(agent.annotation("pass"), Some("1"));
}

// =============================================================================
// Saturation
// =============================================================================

#[test]
fn rerun_after_saturation_is_noop() {
    let mut graph = tagged(
        "la souris est mangée par le chat",
        &[
            ("la", "Det:"),
            ("souris", "Nom:"),
            ("est", "Ver:"),
            ("mangée", "Ver:"),
            ("le", "Det:"),
            ("chat", "Nom:"),
        ],
    );
    let rules = syntax::extended_rules();
    let vocabulary = Vocabulary::french();
    let engine = RuleEngine::new();

    let first = engine.run(&rules, &mut graph, &vocabulary);
    assert!(!first.is_noop());

    let nodes = graph.node_count();
    let relations = graph.relations().to_vec();
    let second = engine.run(&rules, &mut graph, &vocabulary);

    assert!(second.is_noop());
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.relations(), relations.as_slice());
}

#[test]
fn cyclic_chain_terminates() {
    // chat -> boit -> le -> petit <-> grand -> chat
    let mut graph = SemanticGraph::new();
    let words = ["le", "chat", "boit", "petit", "grand"];
    let ids: Vec<_> = words.iter().map(|w| graph.get_or_create_node(w)).collect();
    for (id, tag) in ids.iter().zip(["Det:", "Nom:", "Ver:", "Adj:", "Adj:"]) {
        graph.node_mut(*id).pos_tags.insert(tag.to_string());
    }
    for (a, b) in [(1, 2), (2, 0), (0, 3), (3, 4), (4, 3), (4, 1)] {
        graph.add_relation(ids[a], ids[b], RelationType::Succ, 1.0);
    }

    let report = RuleEngine::new()
        .with_max_passes(3)
        .run(&syntax::extended_rules(), &mut graph, &Vocabulary::french());

    assert!(report.passes <= 3);
    assert!(report.is_saturated());
    assert!(graph.find("le petit grand chat").is_some());
    assert!(graph.has_relation(ids[1], ids[4], RelationType::Characteristic));
}

#[test]
fn adversarial_rule_hits_cap() {
    fn grow(ctx: &lexigraph_engine::RuleContext<'_>) -> Vec<lexigraph_engine::Derivation> {
        let graph = ctx.graph();
        let last = graph.node_ids().last().copied();
        last.map(|head| {
            lexigraph_engine::Derivation::phrase(format!("{}+", graph.word(head)), head)
        })
        .into_iter()
        .collect()
    }

    let mut graph = TokenChain::from_text("le chat").to_graph();
    let report = RuleEngine::new().with_max_passes(5).run(
        &[Rule::new("grow", grow)],
        &mut graph,
        &Vocabulary::new(),
    );

    assert!(report.cap_reached);
    assert_eq!(report.passes, 5);
    assert_eq!(report.nodes_added, 5);
}

#[test]
fn isa_transitivity_after_integration() {
    let mut graph = SemanticGraph::new();
    let chat = graph.get_or_create_node("chat");
    let felin = graph.get_or_create_node("félin");
    let chasse = graph.get_or_create_node("chasse");
    graph.add_relation(chat, felin, RelationType::Isa, 1.0);
    graph.add_relation(felin, chasse, RelationType::Agent, 1.0);

    let report = RuleEngine::new().run(
        &inference::inference_rules(),
        &mut graph,
        &Vocabulary::new(),
    );
    assert!(graph.has_relation(chat, chasse, RelationType::Agent));
    assert_eq!(report.firings_of("isa-transitivity"), 1);
}
