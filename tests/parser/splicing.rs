//! Integration tests for compound splicing

use lexigraph_foundation::{NodeKind, RelationType};
use lexigraph_parser::{CompoundSplicer, TokenChain};

#[test]
fn compound_is_wired_beside_its_span() {
    let chain = TokenChain::from_text("le chat boit du lait");
    let graph = CompoundSplicer::splice(&chain, ["du lait"]).to_graph();

    let boit = graph.find("boit").unwrap();
    let du = graph.find("du").unwrap();
    let lait = graph.find("lait").unwrap();
    let end = graph.find("_END").unwrap();
    let compound = graph.find("du lait").unwrap();

    assert_eq!(graph.node(compound).kind, NodeKind::Compound);
    assert!(graph.has_succ(boit, compound));
    assert!(graph.has_succ(compound, end));

    assert!(graph.has_succ(boit, du));
    assert!(graph.has_succ(du, lait));
    assert!(graph.has_succ(lait, end));
}

#[test]
fn every_original_edge_survives() {
    let chain = TokenChain::from_text("il mange une pomme de terre chaude");
    let plain = chain.to_graph();
    let spliced = CompoundSplicer::splice(&chain, ["pomme de terre", "une pomme"]).to_graph();

    for relation in plain.relations() {
        let source = spliced.find(plain.word(relation.source)).unwrap();
        let target = spliced.find(plain.word(relation.target)).unwrap();
        assert!(spliced.has_relation(source, target, RelationType::Succ));
    }
    assert_eq!(
        spliced.relation_count(),
        plain.relation_count() + 4,
        "two compounds, two edges each"
    );
}

#[test]
fn compound_at_sentence_start() {
    let chain = TokenChain::from_text("pomme de terre");
    let graph = CompoundSplicer::splice(&chain, ["pomme de terre"]).to_graph();

    let start = graph.find("_START").unwrap();
    let end = graph.find("_END").unwrap();
    let compound = graph.find("pomme de terre").unwrap();
    assert!(graph.has_succ(start, compound));
    assert!(graph.has_succ(compound, end));
}

#[test]
fn original_chain_is_unchanged() {
    let chain = TokenChain::from_text("le chat boit du lait");
    let _ = CompoundSplicer::splice(&chain, ["du lait"]);
    assert!(chain.splices().is_empty());
}

#[test]
fn terms_match_normalized_but_keep_their_spelling() {
    let chain = TokenChain::from_text("le chat boit du lait");
    let spliced = CompoundSplicer::splice(&chain, ["Du Lait!"]);
    assert_eq!(spliced.splices().len(), 1);
    assert_eq!(spliced.splices()[0].term, "Du Lait!");
}

#[test]
fn elided_compound_is_found_under_its_term() {
    let chain = TokenChain::from_text("il boit de l'eau de vie");
    let graph = CompoundSplicer::splice(&chain, ["l'eau de vie", "chef d'oeuvre"]).to_graph();

    assert!(graph.find("l' eau de vie").is_none());
    let compound = graph.find("l'eau de vie").unwrap();
    let de = graph.find("de").unwrap();
    let end = graph.find("_END").unwrap();

    assert_eq!(graph.node(compound).kind, NodeKind::Compound);
    assert!(graph.has_succ(de, compound));
    assert!(graph.has_succ(compound, end));
}
