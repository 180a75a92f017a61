//! The reading-order token chain.
//!
//! A [`TokenChain`] is immutable: the sentinel-wrapped token sequence never
//! changes once built, and compound splicing produces a new chain that shares
//! the token storage and adds a [`Splice`] to an overlay. Nothing iterating a
//! chain can observe it changing underneath.

use im::Vector;
use lexigraph_foundation::{END_SENTINEL, NodeKind, RelationType, START_SENTINEL};
use lexigraph_storage::SemanticGraph;

use crate::tokenizer::InputTokenizer;

/// A multi-word term matched over `tokens[start..end]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Splice {
    /// Index of the first matched token.
    pub start: usize,
    /// Index one past the last matched token.
    pub end: usize,
    /// Surface form of the compound node.
    pub term: String,
}

/// Sentinel-wrapped token sequence plus spliced compounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenChain {
    tokens: Vector<String>,
    splices: Vector<Splice>,
}

impl TokenChain {
    /// Wraps `words` between `_START` and `_END`.
    #[must_use]
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut tokens = Vector::new();
        tokens.push_back(START_SENTINEL.to_string());
        tokens.extend(words);
        tokens.push_back(END_SENTINEL.to_string());
        Self {
            tokens,
            splices: Vector::new(),
        }
    }

    /// Tokenizes `text` and wraps the result.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(InputTokenizer::tokenize(text))
    }

    /// All tokens, sentinels included.
    #[must_use]
    pub fn tokens(&self) -> &Vector<String> {
        &self.tokens
    }

    /// Tokens without the sentinels.
    pub fn words(&self) -> impl Iterator<Item = &String> + '_ {
        let inner = self.tokens.len().saturating_sub(2);
        self.tokens.iter().skip(1).take(inner)
    }

    /// Number of tokens, sentinels included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the chain has no tokens at all (not even sentinels).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces, sentinels included.
    #[must_use]
    pub fn joined(&self) -> String {
        self.tokens
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Spliced compounds, in the order they were found.
    #[must_use]
    pub fn splices(&self) -> &Vector<Splice> {
        &self.splices
    }

    /// Returns a new chain with `splice` added to the overlay.
    #[must_use]
    pub fn with_splice(&self, splice: Splice) -> Self {
        let mut next = self.clone();
        next.splices.push_back(splice);
        next
    }

    /// The logical sequence: every token followed by every spliced term.
    #[must_use]
    pub fn surface_forms(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .chain(self.splices.iter().map(|s| s.term.as_str()))
            .collect()
    }

    /// Token immediately preceding a splice.
    #[must_use]
    pub fn before(&self, splice: &Splice) -> Option<&str> {
        splice
            .start
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(String::as_str)
    }

    /// Token immediately following a splice.
    #[must_use]
    pub fn after(&self, splice: &Splice) -> Option<&str> {
        self.tokens.get(splice.end).map(String::as_str)
    }

    /// Writes the chain into `graph`.
    ///
    /// Creates a node per distinct token (sentinels tagged as such), a `succ`
    /// edge between consecutive tokens, and for each splice a compound node
    /// wired from the token before the span and to the token after it. The
    /// original tokens of a span keep their own edges.
    pub fn link_into(&self, graph: &mut SemanticGraph) {
        let mut previous = None;
        for (index, token) in self.tokens.iter().enumerate() {
            let kind = if index == 0 || index + 1 == self.tokens.len() {
                NodeKind::Sentinel
            } else {
                NodeKind::Token
            };
            let id = graph.get_or_create_node_with(token, kind);
            if let Some(prev) = previous {
                graph.add_relation(prev, id, RelationType::Succ, 1.0);
            }
            previous = Some(id);
        }

        for splice in &self.splices {
            let compound = graph.get_or_create_node_with(&splice.term, NodeKind::Compound);
            if let Some(left) = self.before(splice) {
                let left = graph.get_or_create_node(left);
                graph.add_relation(left, compound, RelationType::Succ, 1.0);
            }
            if let Some(right) = self.after(splice) {
                let right = graph.get_or_create_node(right);
                graph.add_relation(compound, right, RelationType::Succ, 1.0);
            }
        }
    }

    /// Builds a fresh graph holding this chain.
    #[must_use]
    pub fn to_graph(&self) -> SemanticGraph {
        let mut graph = SemanticGraph::new();
        self.link_into(&mut graph);
        graph
    }
}
