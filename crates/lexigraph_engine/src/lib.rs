//! Rule engine, annotators, and anaphora resolution for Lexigraph.
//!
//! This crate provides:
//! - [`TagProvider`], [`SenseProvider`], [`CompoundTermProvider`],
//!   [`LexicalRelationProvider`] - The external lookups the analysis consumes
//! - [`RuleContext`] - Read-only motif predicates over a graph
//! - [`RuleEngine`] - Forward-chaining driver that runs rules to a fixpoint
//! - [`PosAnnotator`], [`DisambiguationLinker`], [`LexicalIntegrator`] - Provider-backed annotation passes
//! - [`AnaphoraResolver`] - Pronoun to antecedent linking by graph distance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod anaphora;
pub mod annotate;
pub mod pattern;
pub mod provider;
pub mod rule;

pub use anaphora::{AnaphoraResolver, Resolution};
pub use annotate::{DisambiguationLinker, LexicalIntegrator, PosAnnotator};
pub use pattern::RuleContext;
pub use provider::{
    CompoundTermProvider, LexicalRelationProvider, SenseProvider, TagProvider, fail_open,
};
pub use rule::{Derivation, Rule, RuleEngine, SaturationReport};
