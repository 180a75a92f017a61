//! Lexigraph - Sentence analysis into a semantic graph
//!
//! This crate re-exports all layers of the Lexigraph system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: lexigraph_runtime    - Pipeline, providers, serialization, reports
//! Layer 3: lexigraph_engine     - Rule engine, annotators, anaphora
//! Layer 2: lexigraph_parser     - Tokenizer, token chain, compound splicing
//! Layer 1: lexigraph_storage    - Nodes, typed relations, graph indices
//! Layer 0: lexigraph_foundation - Core types (NodeId, RelationType, Error)
//! ```

pub use lexigraph_engine as engine;
pub use lexigraph_foundation as foundation;
pub use lexigraph_parser as parser;
pub use lexigraph_runtime as runtime;
pub use lexigraph_storage as storage;

pub use lexigraph_runtime::{Analyzer, AnalyzerConfig, Providers, analyze};
pub use lexigraph_storage::SemanticGraph;
