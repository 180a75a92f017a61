//! Sentence tokenization and chain construction for Lexigraph.
//!
//! This crate turns raw text into the reading-order token chain that the
//! semantic graph is built on.
//!
//! # Architecture
//!
//! ```text
//! "Le chat boit du lait."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["le", "chat", "boit", "du", "lait"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKEN CHAIN   │  → [_START, le, chat, boit, du, lait, _END]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   COMPOUND      │  → + splice "du lait" over [4, 6)
//! │   SPLICER       │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   GRAPH         │  → succ edges, compound wired boit → "du lait" → _END
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lower-cased surface tokens
//! - [`vocabulary`] - Closed-class word lists (articles, pronouns, prepositions)
//! - [`chain`] - Immutable token chain with spliced compound overlay
//! - [`compound`] - Multi-word term detection and splicing

pub mod chain;
pub mod compound;
pub mod tokenizer;
pub mod vocabulary;

pub use chain::{Splice, TokenChain};
pub use compound::CompoundSplicer;
pub use tokenizer::InputTokenizer;
pub use vocabulary::Vocabulary;
