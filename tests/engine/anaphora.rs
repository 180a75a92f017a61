//! Integration tests for anaphora resolution

use lexigraph_engine::AnaphoraResolver;
use lexigraph_foundation::{NodeKind, RelationType};
use lexigraph_parser::{TokenChain, Vocabulary};
use lexigraph_storage::SemanticGraph;

#[test]
fn pronoun_resolves_to_nearest_antecedent() {
    let mut graph = SemanticGraph::new();
    let mut previous = graph.get_or_create_node_with("_START", NodeKind::Sentinel);
    for word in ["le", "chat", "mange", "la", "souris", "il"] {
        let id = graph.get_or_create_node(word);
        graph.add_relation(previous, id, RelationType::Succ, 1.0);
        previous = id;
    }
    let end = graph.get_or_create_node_with("_END", NodeKind::Sentinel);
    graph.add_relation(previous, end, RelationType::Succ, 1.0);

    let vocabulary = Vocabulary::french();
    let resolutions = AnaphoraResolver::new(&vocabulary).apply(&mut graph);

    let il = graph.find("il").unwrap();
    let souris = graph.find("souris").unwrap();
    let chat = graph.find("chat").unwrap();

    assert_eq!(resolutions.len(), 1);
    assert_eq!(resolutions[0].antecedent, souris);
    assert!(graph.has_relation(il, souris, RelationType::Reference));
    assert!(!graph.has_relation(il, chat, RelationType::Reference));

    let near = graph.distance(souris, il).unwrap();
    let far = graph.distance(chat, il).unwrap();
    assert!(near < far);
    assert!(AnaphoraResolver::score(near) > AnaphoraResolver::score(far));
}

#[test]
fn reference_edge_records_score() {
    let mut graph = TokenChain::from_text("la souris il").to_graph();
    let vocabulary = Vocabulary::french();
    AnaphoraResolver::new(&vocabulary).apply(&mut graph);

    let il = graph.find("il").unwrap();
    let souris = graph.find("souris").unwrap();
    let reference = graph.relation(il, souris, RelationType::Reference).unwrap();
    assert_eq!(reference.annotation("distance"), Some("1"));
    assert_eq!(reference.annotation("score"), Some("0.5000"));
}

#[test]
fn every_pronoun_is_resolved_independently() {
    let mut graph = TokenChain::from_text("le chien aboie il court et la chatte dort elle rêve")
        .to_graph();
    let vocabulary = Vocabulary::french();
    let resolutions = AnaphoraResolver::new(&vocabulary).apply(&mut graph);

    let words: Vec<_> = resolutions
        .iter()
        .map(|r| (graph.word(r.pronoun), graph.word(r.antecedent)))
        .collect();
    assert_eq!(words, vec![("il", "chien"), ("elle", "chatte")]);
}

#[test]
fn resolution_does_not_depend_on_earlier_edges() {
    let graph = TokenChain::from_text("le chien aboie il court et la chatte dort elle rêve")
        .to_graph();
    let vocabulary = Vocabulary::french();
    let resolver = AnaphoraResolver::new(&vocabulary);

    let planned = resolver.resolve(&graph);
    let mut applied_graph = graph.clone();
    let applied = resolver.apply(&mut applied_graph);
    assert_eq!(planned, applied);
}

#[test]
fn no_determiner_no_reference() {
    let mut graph = TokenChain::from_text("il pleut").to_graph();
    let vocabulary = Vocabulary::french();
    assert!(AnaphoraResolver::new(&vocabulary).apply(&mut graph).is_empty());
    assert_eq!(graph.relations_of_type(RelationType::Reference).count(), 0);
}
