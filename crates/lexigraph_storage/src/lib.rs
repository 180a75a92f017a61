//! Semantic graph storage for Lexigraph.
//!
//! This crate provides:
//! - [`Node`] - A fixed node record keyed by surface form
//! - [`Relation`] - A directed, typed, weighted edge with annotations
//! - [`SemanticGraph`] - The node/relation store with forward and reverse indices

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod node;
pub mod relation;

pub use graph::{Assertion, SemanticGraph};
pub use node::Node;
pub use relation::Relation;
