//! Analysis pipeline, providers, and serialization for Lexigraph.
//!
//! This crate provides:
//! - [`Analyzer`] and [`analyze`] - Text to annotated graph
//! - [`AnalyzerConfig`] - Pass caps, optional stages, vocabulary
//! - [`Providers`] - The fail-open provider bundle, plus in-memory and
//!   file-backed providers
//! - Graph serialization and deserialization
//! - Plain-text graph reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod pipeline;
pub mod providers;
pub mod report;
pub mod serialize;

pub use config::AnalyzerConfig;
pub use pipeline::{AnalysisReport, Analyzer, analyze};
pub use providers::{
    CachedTagProvider, CompoundTermList, PatternTagProvider, Providers, SenseTable,
    StaticCompoundTerms, StaticLexicalRelations, StaticSenseProvider, StaticTagProvider,
};
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
