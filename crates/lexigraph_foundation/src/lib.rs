//! Core identifiers, relation vocabulary, and errors for Lexigraph.
//!
//! This crate provides:
//! - [`NodeId`] - Stable index of a node inside one semantic graph
//! - [`RelationType`] - The closed vocabulary of relation types
//! - [`NodeKind`] - Structural type tag carried by every node
//! - [`PosCategory`] - Coarse part-of-speech categories the rules test for
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use id::NodeId;
pub use types::{END_SENTINEL, NodeKind, PosCategory, RelationType, START_SENTINEL};
