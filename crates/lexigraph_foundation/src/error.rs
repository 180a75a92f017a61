//! Error types for the Lexigraph system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Very little in the analysis core is fallible: provider failures are
//! converted into "no data" at the provider boundary and the rule engine
//! reports, rather than fails, when it hits its pass cap. Errors surface from
//! providers themselves, from term-list and sense-table loading, and from
//! graph serialization.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout Lexigraph.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Lexigraph operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a provider-unavailable error.
    #[must_use]
    pub fn provider_unavailable(
        provider: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::ProviderUnavailable {
            provider: provider.into(),
            item: item.into(),
            message: message.into(),
        })
    }

    /// Creates a malformed compound term error.
    #[must_use]
    pub fn malformed_term(term: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTerm(term.into()))
    }

    /// Creates a node-not-found error.
    #[must_use]
    pub fn node_not_found(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::NodeNotFound(word.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An external provider could not answer (network, timeout, bad payload).
    #[error("provider {provider} unavailable for '{item}': {message}")]
    ProviderUnavailable {
        /// Which provider failed.
        provider: String,
        /// The word or resource being looked up.
        item: String,
        /// Underlying failure description.
        message: String,
    },

    /// A compound term tokenizes to nothing.
    #[error("malformed compound term: '{0}'")]
    MalformedTerm(String),

    /// A relation name outside the closed vocabulary.
    #[error("unknown relation type: {0}")]
    UnknownRelationType(String),

    /// A node looked up by surface form does not exist.
    #[error("node not found: '{0}'")]
    NodeNotFound(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// I/O failure while reading or writing a resource.
    #[error("i/o error: {0}")]
    IoError(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Resource or stage name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
