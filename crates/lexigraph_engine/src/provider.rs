//! External lookups consumed by the analysis.
//!
//! Providers answer questions about words: their part-of-speech tags, their
//! best sense, the multi-word terms worth splicing, and lexical-network
//! relations. Implementations may block on I/O and may fail; the analysis
//! never sees a failure, because every call goes through [`fail_open`], which
//! logs the error and substitutes "no information".

use std::collections::BTreeSet;

use lexigraph_foundation::Result;
use tracing::warn;

/// A part-of-speech label and its weight.
pub type TagScore = (String, f64);

/// A sense label and its weight.
pub type SenseScore = (String, f64);

/// A lexical relation: `(kind, target label, weight)`.
pub type LexicalEdge = (String, String, f64);

/// Part-of-speech lookup.
pub trait TagProvider: Send + Sync {
    /// Returns every tag known for `word`. May be empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot answer.
    fn tags_for(&self, word: &str) -> Result<Vec<TagScore>>;
}

/// Lexical-sense lookup.
pub trait SenseProvider: Send + Sync {
    /// Returns the highest-weighted sense of `word`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot answer.
    fn best_sense_for(&self, word: &str) -> Result<Option<SenseScore>>;
}

/// Known multi-word terms.
pub trait CompoundTermProvider: Send + Sync {
    /// Returns the known terms, lower-cased.
    ///
    /// # Errors
    ///
    /// Returns an error if the term list cannot be produced.
    fn known_terms(&self) -> Result<BTreeSet<String>>;
}

/// Lexical-network relations.
pub trait LexicalRelationProvider: Send + Sync {
    /// Returns the relations leaving `word`. Kinds outside `isa`/`synonym`
    /// are ignored by the consumer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot answer.
    fn relations_for(&self, word: &str) -> Result<Vec<LexicalEdge>>;

    /// Returns the network's identifier for `word`, if it has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot answer.
    fn external_id_for(&self, _word: &str) -> Result<Option<u64>> {
        Ok(None)
    }
}

/// Converts a provider result into its value, or the empty value on failure.
///
/// This is the only place provider errors are handled.
pub fn fail_open<T: Default>(provider: &str, item: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(provider, item, error = %err, "provider failed; continuing without data");
            T::default()
        }
    }
}
