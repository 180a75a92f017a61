//! Closed-class vocabulary.
//!
//! Articles, pronouns, and prepositions are matched by surface form rather
//! than by part-of-speech tag: the anaphora resolver and the location rule
//! both need them even when the tag provider knows nothing about a word.

use std::collections::HashSet;

/// Word lists for the closed grammatical classes the analysis relies on.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    /// Articles; their successors are antecedent candidates.
    articles: HashSet<String>,
    /// Pronouns to resolve.
    pronouns: HashSet<String>,
    /// Prepositions that introduce a place.
    locative_prepositions: HashSet<String>,
    /// Preposition introducing the agent of a passive clause.
    passive_agent_marker: Option<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// French closed classes.
    ///
    /// Object clitics that coincide with articles (`le`, `la`, `les`) are
    /// deliberately absent from the pronoun list.
    #[must_use]
    pub fn french() -> Self {
        let mut vocabulary = Self::new();
        for article in [
            "le", "la", "les", "l'", "l", "un", "une", "des", "du", "de", "au", "aux",
        ] {
            vocabulary.register_article(article);
        }
        for pronoun in ["il", "elle", "ils", "elles", "lui", "leur"] {
            vocabulary.register_pronoun(pronoun);
        }
        for preposition in ["dans", "sur", "sous", "en"] {
            vocabulary.register_locative_preposition(preposition);
        }
        vocabulary.passive_agent_marker = Some("par".to_string());
        vocabulary
    }

    /// Registers an article.
    pub fn register_article(&mut self, word: &str) {
        self.articles.insert(word.to_lowercase());
    }

    /// Registers a pronoun.
    pub fn register_pronoun(&mut self, word: &str) {
        self.pronouns.insert(word.to_lowercase());
    }

    /// Registers a locative preposition.
    pub fn register_locative_preposition(&mut self, word: &str) {
        self.locative_prepositions.insert(word.to_lowercase());
    }

    /// Builder form of [`register_pronoun`](Self::register_pronoun).
    #[must_use]
    pub fn with_pronoun(mut self, word: &str) -> Self {
        self.register_pronoun(word);
        self
    }

    /// Builder form of [`register_article`](Self::register_article).
    #[must_use]
    pub fn with_article(mut self, word: &str) -> Self {
        self.register_article(word);
        self
    }

    /// Sets the passive agent marker.
    #[must_use]
    pub fn with_passive_agent_marker(mut self, word: &str) -> Self {
        self.passive_agent_marker = Some(word.to_lowercase());
        self
    }

    /// Returns true if `word` is an article.
    #[must_use]
    pub fn is_article(&self, word: &str) -> bool {
        self.articles.contains(word)
    }

    /// Returns true if `word` is a pronoun.
    #[must_use]
    pub fn is_pronoun(&self, word: &str) -> bool {
        self.pronouns.contains(word)
    }

    /// Returns true if `word` is a locative preposition.
    #[must_use]
    pub fn is_locative_preposition(&self, word: &str) -> bool {
        self.locative_prepositions.contains(word)
    }

    /// Returns true if `word` introduces a passive agent.
    #[must_use]
    pub fn is_passive_agent_marker(&self, word: &str) -> bool {
        self.passive_agent_marker.as_deref() == Some(word)
    }
}
