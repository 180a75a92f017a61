//! Sentence-level scenarios

use lexigraph::runtime::{
    PatternTagProvider, StaticCompoundTerms, StaticLexicalRelations, StaticSenseProvider,
    StaticTagProvider, report,
};
use lexigraph::{Analyzer, AnalyzerConfig, Providers, SemanticGraph, analyze};
use lexigraph_foundation::{NodeKind, RelationType};

fn stub_tags(pairs: &[(&str, &str)]) -> StaticTagProvider {
    pairs
        .iter()
        .fold(StaticTagProvider::new(), |p, (word, tag)| p.with_tag(word, tag))
}

fn has(graph: &SemanticGraph, source: &str, target: &str, relation: RelationType) -> bool {
    match (graph.find(source), graph.find(target)) {
        (Some(s), Some(t)) => graph.has_relation(s, t, relation),
        _ => false,
    }
}

#[test]
fn cat_drinks_milk() {
    let providers = Providers::new(
        stub_tags(&[
            ("chat", "Nom:"),
            ("boit", "Ver:"),
            ("lait", "Nom:"),
            ("le", "Det:"),
            ("du", "Det:"),
        ]),
        StaticSenseProvider::new(),
        StaticCompoundTerms::default(),
    );
    let graph = analyze("le chat boit du lait", &providers);

    assert!(has(&graph, "boit", "chat", RelationType::Agent));
    assert!(has(&graph, "boit", "lait", RelationType::Patient));
}

#[test]
fn little_cute_cat() {
    let providers = Providers::new(
        stub_tags(&[
            ("le", "Det:"),
            ("petit", "Adj:"),
            ("chat", "Nom:"),
            ("mignon", "Adj:"),
        ]),
        StaticSenseProvider::new(),
        StaticCompoundTerms::default(),
    );
    let graph = analyze("le petit chat mignon", &providers);

    assert!(has(&graph, "chat", "petit", RelationType::Characteristic));
    assert!(has(&graph, "chat", "mignon", RelationType::Characteristic));
    assert!(!has(&graph, "petit", "mignon", RelationType::Characteristic));
    assert!(!has(&graph, "mignon", "petit", RelationType::Characteristic));
}

#[test]
fn pronoun_prefers_mouse() {
    let providers = Providers::new(
        stub_tags(&[
            ("le", "Det:"),
            ("la", "Det:"),
            ("chat", "Nom:"),
            ("souris", "Nom:"),
            ("mange", "Ver:"),
        ]),
        StaticSenseProvider::new(),
        StaticCompoundTerms::default(),
    );
    let (graph, report) = Analyzer::new(AnalyzerConfig::minimal())
        .analyze_with_report("le chat mange la souris il", &providers);

    assert!(has(&graph, "il", "souris", RelationType::Reference));
    assert!(!has(&graph, "il", "chat", RelationType::Reference));
    assert_eq!(report.resolutions.len(), 1);
}

#[test]
fn milk_compound_is_spliced() {
    let providers = Providers::new(
        StaticTagProvider::new(),
        StaticSenseProvider::new(),
        StaticCompoundTerms::new(["du lait"]),
    );
    let graph = analyze("le chat boit du lait", &providers);

    let compound = graph.find("du lait").unwrap();
    assert_eq!(graph.node(compound).kind, NodeKind::Compound);
    assert!(has(&graph, "boit", "du lait", RelationType::Succ));
    assert!(has(&graph, "du lait", "_END", RelationType::Succ));
    assert!(has(&graph, "boit", "du", RelationType::Succ));
    assert!(has(&graph, "du", "lait", RelationType::Succ));
    assert!(has(&graph, "lait", "_END", RelationType::Succ));
}

#[test]
fn negated_location() {
    let providers = Providers::new(
        PatternTagProvider::french()
            .with_words("Ver:", &["dort"])
            .with_words("Nom:", &["lit"]),
        StaticSenseProvider::new(),
        StaticCompoundTerms::default(),
    );
    let graph = analyze("Le chat ne dort pas sur le lit.", &providers);

    assert!(has(&graph, "ne", "dort", RelationType::Negation));
    assert!(!has(&graph, "dort", "lit", RelationType::Location));

    let graph = analyze("Le chat dort sur le lit.", &providers);
    assert!(has(&graph, "dort", "lit", RelationType::Location));
}

#[test]
fn passive_sentence() {
    let providers = Providers::new(
        PatternTagProvider::french().with_words("Ver:", &["mangée"]),
        StaticSenseProvider::new(),
        StaticCompoundTerms::default(),
    );
    let graph = analyze("La souris est mangée par le chat.", &providers);

    assert!(has(&graph, "mangée", "chat", RelationType::Agent));
    assert!(has(&graph, "mangée", "souris", RelationType::Patient));

    let minimal = Analyzer::new(AnalyzerConfig::minimal())
        .analyze("La souris est mangée par le chat.", &providers);
    assert!(!has(&minimal, "mangée", "chat", RelationType::Agent));
}

#[test]
fn inherited_agent_through_isa() {
    let providers = Providers::new(
        stub_tags(&[
            ("le", "Det:"),
            ("chat", "Nom:"),
            ("chien", "Nom:"),
            ("mange", "Ver:"),
            ("dévore", "Ver:"),
        ]),
        StaticSenseProvider::new(),
        StaticCompoundTerms::default(),
    )
    .with_lexical(
        StaticLexicalRelations::new()
            .with_relation("dévore", "r_isa", "mange", 0.8)
            .with_relation("chien", "r_part_of", "meute", 0.5)
            .with_external_id("dévore", 4021),
    );

    let (graph, report) =
        Analyzer::default().analyze_with_report("le chat mange et le chien dévore", &providers);

    assert!(has(&graph, "mange", "chat", RelationType::Agent));
    assert!(has(&graph, "dévore", "chien", RelationType::Agent));
    assert!(has(&graph, "dévore", "mange", RelationType::Isa));
    assert!(has(&graph, "dévore", "chat", RelationType::Agent));
    assert!(graph.find("meute").is_none());

    let devore = graph.find("dévore").unwrap();
    assert_eq!(graph.node(devore).external_id, Some(4021));
    assert_eq!(graph.node(graph.find("mange").unwrap()).kind, NodeKind::Token);

    let inference = report.inference.unwrap();
    assert_eq!(inference.firings_of("isa-transitivity"), 1);
}

#[test]
fn senses_are_attached() {
    let providers = Providers::new(
        StaticTagProvider::new(),
        StaticSenseProvider::new()
            .with_sense("chat", "félin domestique", 40.0)
            .with_sense("chat", "messagerie", 12.0),
        StaticCompoundTerms::default(),
    );
    let graph = analyze("le chat", &providers);

    assert!(has(&graph, "chat", "félin domestique", RelationType::Disambiguate));
    assert!(graph.find("messagerie").is_none());

    let no_senses = Analyzer::new(AnalyzerConfig::default().with_disambiguation(false))
        .analyze("le chat", &providers);
    assert_eq!(no_senses.relations_of_type(RelationType::Disambiguate).count(), 0);
}

#[test]
fn semantic_report_lists_dependencies() {
    let providers = Providers::new(
        PatternTagProvider::french(),
        StaticSenseProvider::new(),
        StaticCompoundTerms::default(),
    );
    let graph = Analyzer::new(AnalyzerConfig::minimal()).analyze("le chat boit du lait", &providers);

    assert_eq!(
        report::semantic_relations(&graph),
        vec![
            "agent(boit, chat)",
            "agent-inverse(chat, boit)",
            "patient(boit, lait)",
            "patient-inverse(lait, boit)",
        ]
    );
}
