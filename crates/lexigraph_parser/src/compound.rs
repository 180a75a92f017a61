//! Multi-word term detection.
//!
//! Known compound terms ("du lait", "pomme de terre") are matched against the
//! token chain and recorded as splices. Matching never removes tokens: the
//! compound node is wired alongside the span it covers.

use lexigraph_foundation::{Error, Result};
use tracing::debug;

use crate::chain::{Splice, TokenChain};
use crate::tokenizer::InputTokenizer;

/// Splices known compound terms into a token chain.
pub struct CompoundSplicer;

impl CompoundSplicer {
    /// Returns a chain with a splice for every occurrence of every term.
    ///
    /// Terms are processed in the order given. For each term:
    /// - the term is tokenized like a sentence; terms with no tokens are skipped
    /// - the space-joined term tokens must occur in the joined chain (cheap filter)
    /// - the chain is scanned left to right; the first literal match wins and
    ///   scanning resumes after it, so one term never overlaps itself
    ///
    /// Matching uses the tokens; the splice keeps the term as given, trimmed,
    /// so "l'eau de vie" stays one surface form. Different terms may cover
    /// overlapping spans.
    #[must_use]
    pub fn splice<'a, I>(chain: &TokenChain, terms: I) -> TokenChain
    where
        I: IntoIterator<Item = &'a str>,
    {
        let joined = chain.joined();
        let mut spliced = chain.clone();

        for raw in terms {
            let term_tokens = match Self::normalize(raw) {
                Ok(tokens) => tokens,
                Err(err) => {
                    debug!(term = raw, error = %err, "skipping compound term");
                    continue;
                }
            };

            if !joined.contains(&term_tokens.join(" ")) {
                continue;
            }

            let surface = raw.trim();
            let tokens: Vec<&str> = chain.tokens().iter().map(String::as_str).collect();
            for (start, end) in Self::find_matches(&tokens, &term_tokens) {
                debug!(term = surface, start, end, "spliced compound");
                spliced = spliced.with_splice(Splice {
                    start,
                    end,
                    term: surface.to_string(),
                });
            }
        }

        spliced
    }

    /// Tokenizes a term.
    ///
    /// # Errors
    ///
    /// Returns a malformed-term error if the term has no tokens.
    pub fn normalize(term: &str) -> Result<Vec<String>> {
        let tokens = InputTokenizer::tokenize(term);
        if tokens.is_empty() {
            return Err(Error::malformed_term(term));
        }
        Ok(tokens)
    }

    /// Finds non-overlapping occurrences of `needle` in `haystack`.
    ///
    /// Returns `(start, end)` index pairs, `end` exclusive. On a mismatch the
    /// scan advances by one token past the candidate start.
    #[must_use]
    pub fn find_matches<S: AsRef<str>>(haystack: &[&str], needle: &[S]) -> Vec<(usize, usize)> {
        let mut matches = Vec::new();
        let Some(first) = needle.first() else {
            return matches;
        };

        let mut cursor = 0;
        while cursor < haystack.len() {
            let Some(offset) = haystack[cursor..]
                .iter()
                .position(|token| *token == first.as_ref())
            else {
                break;
            };
            let start = cursor + offset;
            let end = start + needle.len();

            let matched = end <= haystack.len()
                && haystack[start..end]
                    .iter()
                    .zip(needle)
                    .all(|(token, expected)| *token == expected.as_ref());

            if matched {
                matches.push((start, end));
                cursor = end;
            } else {
                cursor = start + 1;
            }
        }

        matches
    }
}
