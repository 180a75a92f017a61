//! Plain-text renderings of a graph.

use std::fmt::Write;

use lexigraph_storage::{Relation, SemanticGraph};

/// Renders every node and every relation, one per line.
///
/// ```text
/// nodes:
///   #1 chat [token] tags={Nom:} weight=1
/// relations:
///   boit --agent--> chat (1) rule=agent pass=1
/// ```
#[must_use]
pub fn format_graph(graph: &SemanticGraph) -> String {
    let mut out = String::new();

    out.push_str("nodes:\n");
    for node in graph.nodes() {
        let _ = write!(out, "  {} {} [{}]", node.id, node.word, node.kind.as_str());
        if !node.pos_tags.is_empty() {
            let tags: Vec<_> = node.pos_tags.iter().map(String::as_str).collect();
            let _ = write!(out, " tags={{{}}}", tags.join(", "));
        }
        if let Some(head) = node.head {
            let _ = write!(out, " head={}", graph.word(head));
        }
        if let Some(id) = node.external_id {
            let _ = write!(out, " ext={id}");
        }
        let _ = writeln!(out, " weight={}", node.weight);
    }

    out.push_str("relations:\n");
    for relation in graph.relations() {
        let _ = writeln!(out, "  {}", format_relation(graph, relation));
    }
    out
}

/// Renders one relation as `source --type--> target (weight)` followed by
/// its annotations.
#[must_use]
pub fn format_relation(graph: &SemanticGraph, relation: &Relation) -> String {
    let mut line = format!(
        "{} --{}--> {} ({})",
        graph.word(relation.source),
        relation.relation,
        graph.word(relation.target),
        relation.weight
    );
    for (key, value) in &relation.annotations {
        let _ = write!(line, " {key}={value}");
    }
    line
}

/// Lists the semantic relations as `type(source, target)`, in assertion order.
///
/// Chain, tag, and sense edges are left out.
#[must_use]
pub fn semantic_relations(graph: &SemanticGraph) -> Vec<String> {
    graph
        .relations()
        .iter()
        .filter(|r| r.relation.is_semantic())
        .map(|r| {
            format!(
                "{}({}, {})",
                r.relation,
                graph.word(r.source),
                graph.word(r.target)
            )
        })
        .collect()
}
