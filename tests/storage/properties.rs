//! Property tests for relation storage

use lexigraph_foundation::RelationType;
use lexigraph_storage::SemanticGraph;
use proptest::prelude::*;

fn relation_type() -> impl Strategy<Value = RelationType> {
    prop::sample::select(RelationType::ALL.to_vec())
}

proptest! {
    #[test]
    fn triples_are_unique(
        edges in prop::collection::vec((0u8..6, 0u8..6, relation_type(), 0.0f64..1.0), 0..60)
    ) {
        let mut graph = SemanticGraph::new();
        let mut distinct = std::collections::HashSet::new();
        for (s, t, r, w) in edges {
            let s = graph.get_or_create_node(&format!("n{s}"));
            let t = graph.get_or_create_node(&format!("n{t}"));
            graph.add_relation(s, t, r, w);
            distinct.insert((s, t, r));
        }
        prop_assert_eq!(graph.relation_count(), distinct.len());
    }

    #[test]
    fn last_weight_wins(weights in prop::collection::vec(0.0f64..10.0, 1..10)) {
        let mut graph = SemanticGraph::new();
        let a = graph.get_or_create_node("a");
        let b = graph.get_or_create_node("b");
        for &w in &weights {
            graph.add_relation(a, b, RelationType::Pos, w);
        }
        let stored = graph.relation(a, b, RelationType::Pos).unwrap().weight;
        prop_assert_eq!(stored, *weights.last().unwrap());
    }
}
