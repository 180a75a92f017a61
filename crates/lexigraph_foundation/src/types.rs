//! Closed vocabularies shared by every layer.
//!
//! Relation types, node kinds, and the coarse part-of-speech categories that
//! the rule engine matches against. All three are closed enums: anything a
//! provider hands us is mapped onto them at the boundary or dropped.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Surface form of the sentinel placed before the first token.
pub const START_SENTINEL: &str = "_START";

/// Surface form of the sentinel placed after the last token.
pub const END_SENTINEL: &str = "_END";

// =============================================================================
// Relation Type
// =============================================================================

/// The type of a directed relation between two nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationType {
    /// Linear chain adjacency (reading order).
    Succ,
    /// Token to part-of-speech tag.
    Pos,
    /// Verb to its agent.
    Agent,
    /// Agent to its verb.
    AgentInverse,
    /// Verb to its patient.
    Patient,
    /// Patient to its verb.
    PatientInverse,
    /// Noun to a qualifying adjective.
    Characteristic,
    /// Verb to the place where it happens.
    Location,
    /// Negation particle to the negated verb.
    Negation,
    /// Pronoun to its antecedent.
    Reference,
    /// Word to its selected sense.
    Disambiguate,
    /// Hypernymy (`a` is a kind of `b`).
    Isa,
    /// Synonymy.
    Synonym,
}

impl RelationType {
    /// Every relation type, in declaration order.
    pub const ALL: [RelationType; 13] = [
        Self::Succ,
        Self::Pos,
        Self::Agent,
        Self::AgentInverse,
        Self::Patient,
        Self::PatientInverse,
        Self::Characteristic,
        Self::Location,
        Self::Negation,
        Self::Reference,
        Self::Disambiguate,
        Self::Isa,
        Self::Synonym,
    ];

    /// Returns the canonical name of this relation type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Succ => "succ",
            Self::Pos => "pos",
            Self::Agent => "agent",
            Self::AgentInverse => "agent-inverse",
            Self::Patient => "patient",
            Self::PatientInverse => "patient-inverse",
            Self::Characteristic => "characteristic",
            Self::Location => "location",
            Self::Negation => "negation",
            Self::Reference => "reference",
            Self::Disambiguate => "disambiguate",
            Self::Isa => "isa",
            Self::Synonym => "synonym",
        }
    }

    /// Returns true for relations that carry meaning rather than structure
    /// (everything except `succ`, `pos`, and `disambiguate`).
    #[must_use]
    pub const fn is_semantic(self) -> bool {
        !matches!(self, Self::Succ | Self::Pos | Self::Disambiguate)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = Error;

    /// Parses a relation name. The lexical-network spellings (`r_isa`,
    /// `r_syn`, `r_agent-1`, ...) are accepted alongside the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_prefix("r_").unwrap_or(&name);
        let parsed = match name {
            "succ" => Self::Succ,
            "pos" => Self::Pos,
            "agent" => Self::Agent,
            "agent-inverse" | "agent-1" => Self::AgentInverse,
            "patient" => Self::Patient,
            "patient-inverse" | "patient-1" => Self::PatientInverse,
            "characteristic" | "carac" => Self::Characteristic,
            "location" | "lieu" => Self::Location,
            "negation" | "neg" => Self::Negation,
            "reference" => Self::Reference,
            "disambiguate" => Self::Disambiguate,
            "isa" => Self::Isa,
            "synonym" | "syn" => Self::Synonym,
            _ => return Err(Error::new(ErrorKind::UnknownRelationType(s.to_string()))),
        };
        Ok(parsed)
    }
}

// =============================================================================
// Node Kind
// =============================================================================

/// Structural type tag of a node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// A plain surface token from the sentence.
    #[default]
    Token,
    /// A multi-word expression spliced into the chain.
    Compound,
    /// A noun phrase derived by the rule engine; has a head.
    NounPhrase,
    /// `_START` or `_END`.
    Sentinel,
    /// A part-of-speech tag label.
    Tag,
    /// A lexical sense chosen by disambiguation.
    Sense,
    /// A concept reached through lexical-network relations.
    Concept,
}

impl NodeKind {
    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Compound => "compound",
            Self::NounPhrase => "noun-phrase",
            Self::Sentinel => "sentinel",
            Self::Tag => "tag",
            Self::Sense => "sense",
            Self::Concept => "concept",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Part-of-Speech Category
// =============================================================================

/// Coarse part-of-speech category.
///
/// Tag providers return free-form labels (`"Nom:"`, `"Ver:Inf"`, `"Det:Mas+SG"`).
/// Only the part before the first `:` is significant for rule matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PosCategory {
    /// Determiner / article.
    Det,
    /// Common noun.
    Nom,
    /// Verb (any form).
    Verb,
    /// Adjective.
    Adj,
    /// Adverb.
    Adv,
    /// Negation particle.
    Neg,
    /// Pronoun.
    Pro,
    /// Preposition.
    Prep,
}

impl PosCategory {
    /// Maps a provider label onto a category, or `None` for labels the rules
    /// never look at.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let head = label.split(':').next().unwrap_or(label).trim();
        let category = match head.to_ascii_lowercase().as_str() {
            "det" => Self::Det,
            "nom" | "noun" | "n" => Self::Nom,
            "ver" | "verb" | "v" => Self::Verb,
            "adj" => Self::Adj,
            "adv" => Self::Adv,
            "neg" => Self::Neg,
            "pro" | "pron" => Self::Pro,
            "pre" | "prep" => Self::Prep,
            _ => return None,
        };
        Some(category)
    }

    /// Returns true if the label belongs to this category.
    #[must_use]
    pub fn matches(self, label: &str) -> bool {
        Self::from_label(label) == Some(self)
    }
}
