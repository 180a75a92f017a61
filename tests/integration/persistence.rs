//! Graph persistence

use lexigraph::runtime::{
    PatternTagProvider, StaticCompoundTerms, StaticSenseProvider, from_bytes, load_from_file,
    save_to_file, to_bytes,
};
use lexigraph::{Providers, analyze};

fn analyzed() -> lexigraph::SemanticGraph {
    let providers = Providers::new(
        PatternTagProvider::french(),
        StaticSenseProvider::new().with_sense("chat", "animal", 10.0),
        StaticCompoundTerms::new(["du lait"]),
    );
    analyze("Le petit chat boit du lait. Il est si mignon!", &providers)
}

#[test]
fn analyzed_graph_roundtrips() {
    let graph = analyzed();
    let restored = from_bytes(&to_bytes(&graph).unwrap()).unwrap();

    assert_eq!(restored.node_count(), graph.node_count());
    assert_eq!(restored.relations(), graph.relations());
    for node in graph.nodes() {
        let id = restored.find(&node.word).unwrap();
        let other = restored.node(id);
        assert_eq!(other.pos_tags, node.pos_tags);
        assert_eq!(other.kind, node.kind);
        assert_eq!(other.head, node.head);
    }
}

#[test]
fn analyzed_graph_survives_a_file() {
    let graph = analyzed();
    let path = std::env::temp_dir().join("lexigraph_integration_graph.msgpack");

    save_to_file(&graph, &path).unwrap();
    let restored = load_from_file(&path).unwrap();
    assert_eq!(restored.relations(), graph.relations());

    let _ = std::fs::remove_file(&path);
}
