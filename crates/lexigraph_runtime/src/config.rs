//! Configuration for the analysis pipeline.

use lexigraph_engine::RuleEngine;
use lexigraph_parser::Vocabulary;

/// Configuration for one [`Analyzer`](crate::Analyzer).
///
/// Controls the pass caps of both rule-engine runs, which optional stages
/// run, and the closed-class vocabulary.
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    /// Pass cap for the syntactic rule engine.
    pub max_rule_passes: usize,

    /// Pass cap for the inference rule engine.
    pub max_inference_passes: usize,

    /// Derive noun-phrase nodes.
    pub noun_phrases: bool,

    /// Apply the passive-voice rule.
    pub passive_voice: bool,

    /// Import lexical-network relations and run inference.
    pub lexical_integration: bool,

    /// Link nodes to their best sense.
    pub disambiguation: bool,

    /// Articles, pronouns, and prepositions.
    pub vocabulary: Vocabulary,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_rule_passes: RuleEngine::DEFAULT_MAX_PASSES,
            max_inference_passes: RuleEngine::DEFAULT_MAX_PASSES,
            noun_phrases: true,
            passive_voice: true,
            lexical_integration: true,
            disambiguation: true,
            vocabulary: Vocabulary::french(),
        }
    }
}

impl AnalyzerConfig {
    /// Only the five dependency rules, anaphora, and disambiguation.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            noun_phrases: false,
            passive_voice: false,
            lexical_integration: false,
            ..Self::default()
        }
    }

    /// Builder method to set the syntactic pass cap.
    #[must_use]
    pub fn with_max_rule_passes(mut self, passes: usize) -> Self {
        self.max_rule_passes = passes;
        self
    }

    /// Builder method to set the inference pass cap.
    #[must_use]
    pub fn with_max_inference_passes(mut self, passes: usize) -> Self {
        self.max_inference_passes = passes;
        self
    }

    /// Builder method to enable/disable noun-phrase derivation.
    #[must_use]
    pub fn with_noun_phrases(mut self, enabled: bool) -> Self {
        self.noun_phrases = enabled;
        self
    }

    /// Builder method to enable/disable the passive-voice rule.
    #[must_use]
    pub fn with_passive_voice(mut self, enabled: bool) -> Self {
        self.passive_voice = enabled;
        self
    }

    /// Builder method to enable/disable lexical integration.
    #[must_use]
    pub fn with_lexical_integration(mut self, enabled: bool) -> Self {
        self.lexical_integration = enabled;
        self
    }

    /// Builder method to enable/disable disambiguation.
    #[must_use]
    pub fn with_disambiguation(mut self, enabled: bool) -> Self {
        self.disambiguation = enabled;
        self
    }

    /// Builder method to replace the vocabulary.
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }
}
