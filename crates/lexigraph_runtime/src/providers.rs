//! Concrete providers and the provider bundle.
//!
//! The in-memory providers serve as test doubles and for embedding small
//! lexicons. [`CompoundTermList`] and [`SenseTable`] load the plain-text dump
//! formats of a lexical network. [`CachedTagProvider`] memoizes another tag
//! provider. None of them perform network I/O.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use lexigraph_engine::provider::{LexicalEdge, SenseScore, TagScore};
use lexigraph_engine::{
    CompoundTermProvider, LexicalRelationProvider, SenseProvider, TagProvider, fail_open,
};
use lexigraph_foundation::{Error, ErrorContext, ErrorKind, Result};
use tracing::{debug, trace};

// =============================================================================
// In-memory providers
// =============================================================================

/// Tags from an in-memory table.
#[derive(Clone, Debug, Default)]
pub struct StaticTagProvider {
    tags: HashMap<String, Vec<TagScore>>,
}

impl StaticTagProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag with weight 1.0.
    #[must_use]
    pub fn with_tag(self, word: &str, label: &str) -> Self {
        self.with_weighted_tag(word, label, 1.0)
    }

    /// Adds a weighted tag.
    #[must_use]
    pub fn with_weighted_tag(mut self, word: &str, label: &str, weight: f64) -> Self {
        self.insert(word, label, weight);
        self
    }

    /// Adds a weighted tag in place.
    pub fn insert(&mut self, word: &str, label: &str, weight: f64) {
        self.tags
            .entry(word.to_lowercase())
            .or_default()
            .push((label.to_string(), weight));
    }
}

impl TagProvider for StaticTagProvider {
    fn tags_for(&self, word: &str) -> Result<Vec<TagScore>> {
        Ok(self.tags.get(word).cloned().unwrap_or_default())
    }
}

/// Senses from an in-memory table.
#[derive(Clone, Debug, Default)]
pub struct StaticSenseProvider {
    senses: HashMap<String, Vec<SenseScore>>,
}

impl StaticSenseProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate sense.
    #[must_use]
    pub fn with_sense(mut self, word: &str, sense: &str, weight: f64) -> Self {
        self.insert(word, sense, weight);
        self
    }

    /// Adds a candidate sense in place.
    pub fn insert(&mut self, word: &str, sense: &str, weight: f64) {
        self.senses
            .entry(word.to_lowercase())
            .or_default()
            .push((sense.to_string(), weight));
    }

    /// Number of words with at least one sense.
    #[must_use]
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    /// Returns true if no word has a sense.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

impl SenseProvider for StaticSenseProvider {
    /// Highest weight wins; ties keep the sense inserted first.
    fn best_sense_for(&self, word: &str) -> Result<Option<SenseScore>> {
        let best = self.senses.get(word).and_then(|candidates| {
            candidates
                .iter()
                .fold(None::<&SenseScore>, |best, candidate| match best {
                    Some(b) if b.1 >= candidate.1 => Some(b),
                    _ => Some(candidate),
                })
                .cloned()
        });
        Ok(best)
    }
}

/// Compound terms from an in-memory set.
#[derive(Clone, Debug, Default)]
pub struct StaticCompoundTerms {
    terms: BTreeSet<String>,
}

impl StaticCompoundTerms {
    /// Creates a set from terms, lower-cased.
    #[must_use]
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
        }
    }

    /// Adds a term.
    #[must_use]
    pub fn with_term(mut self, term: &str) -> Self {
        self.terms.insert(term.to_lowercase());
        self
    }
}

impl CompoundTermProvider for StaticCompoundTerms {
    fn known_terms(&self) -> Result<BTreeSet<String>> {
        Ok(self.terms.clone())
    }
}

/// Lexical-network relations from an in-memory table.
#[derive(Clone, Debug, Default)]
pub struct StaticLexicalRelations {
    relations: HashMap<String, Vec<LexicalEdge>>,
    ids: HashMap<String, u64>,
}

impl StaticLexicalRelations {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a relation `word --kind--> target`.
    #[must_use]
    pub fn with_relation(mut self, word: &str, kind: &str, target: &str, weight: f64) -> Self {
        self.relations
            .entry(word.to_lowercase())
            .or_default()
            .push((kind.to_string(), target.to_string(), weight));
        self
    }

    /// Sets the network identifier of a word.
    #[must_use]
    pub fn with_external_id(mut self, word: &str, id: u64) -> Self {
        self.ids.insert(word.to_lowercase(), id);
        self
    }
}

impl LexicalRelationProvider for StaticLexicalRelations {
    fn relations_for(&self, word: &str) -> Result<Vec<LexicalEdge>> {
        Ok(self.relations.get(word).cloned().unwrap_or_default())
    }

    fn external_id_for(&self, word: &str) -> Result<Option<u64>> {
        Ok(self.ids.get(word).copied())
    }
}

// =============================================================================
// Word-list tagger
// =============================================================================

/// Tags words found in closed per-category word lists.
///
/// A word listed under several categories receives every matching tag.
#[derive(Clone, Debug, Default)]
pub struct PatternTagProvider {
    lexicon: HashMap<String, Vec<String>>,
}

impl PatternTagProvider {
    /// Creates an empty tagger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists `words` under `label`.
    #[must_use]
    pub fn with_words(mut self, label: &str, words: &[&str]) -> Self {
        for word in words {
            let labels = self.lexicon.entry(word.to_lowercase()).or_default();
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
        self
    }

    /// A small French lexicon covering the demonstration sentences.
    #[must_use]
    pub fn french() -> Self {
        Self::new()
            .with_words(
                "Det:",
                &[
                    "le", "la", "les", "un", "une", "du", "de", "des", "au", "aux", "l'",
                ],
            )
            .with_words(
                "Ver:",
                &[
                    "est", "sont", "a", "ont", "boit", "mange", "tombe", "pleure", "aboie",
                    "aboyé", "aime", "explose", "regarde", "comprend", "présenté",
                    "implémenter", "implémenté", "été",
                ],
            )
            .with_words(
                "Adj:",
                &[
                    "petit", "grand", "grande", "grands", "grandes", "profond", "profonde",
                    "profonds", "profondes", "difficile",
                ],
            )
            .with_words(
                "Adv:",
                &["rapidement", "lentement", "toute", "toutes", "jamais"],
            )
            .with_words(
                "Nom:",
                &[
                    "chat", "chien", "souris", "lait", "chèvre", "queue", "puits", "nuit",
                    "algorithme", "cours", "voisine", "religieuse", "pâtisserie", "missile",
                    "croiseur", "vers", "chairs", "cadavres", "échelle", "savoir", "garçon",
                    "enfant", "glace",
                ],
            )
            .with_words("Neg:", &["ne", "n'", "pas"])
            .with_words("Pro:", &["il", "elle", "ils", "elles", "son", "sa", "ses"])
    }
}

impl TagProvider for PatternTagProvider {
    fn tags_for(&self, word: &str) -> Result<Vec<TagScore>> {
        Ok(self
            .lexicon
            .get(&word.to_lowercase())
            .map(|labels| labels.iter().map(|l| (l.clone(), 1.0)).collect())
            .unwrap_or_default())
    }
}

// =============================================================================
// File-backed providers
// =============================================================================

fn io_error(what: &str, line: usize, err: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!("failed to read {what}: {err}")))
        .with_context(ErrorContext::new().with_source(what).with_line(line))
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })
}

/// A list of known multi-word terms.
#[derive(Clone, Debug, Default)]
pub struct CompoundTermList {
    terms: BTreeSet<String>,
}

impl CompoundTermList {
    /// Reads terms, one per line.
    ///
    /// Accepts plain lines and the `id;"term";` dump format. Lines are
    /// lower-cased; blank lines and `;` lines that do not parse are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut terms = BTreeSet::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| io_error("compound term list", index + 1, &e))?;
            match Self::parse_line(&line) {
                Some(term) => {
                    terms.insert(term);
                }
                None => trace!(line = index + 1, "skipping compound term line"),
            }
        }
        debug!(terms = terms.len(), "loaded compound terms");
        Ok(Self { terms })
    }

    /// Reads a term list from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(open(path.as_ref())?)
    }

    /// Parses one line; `None` for blank or malformed lines.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<String> {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return None;
        }
        if !line.contains(';') {
            return Some(line);
        }

        let (id, rest) = line.split_once(";\"")?;
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let term = rest.strip_suffix("\";")?;
        (!term.is_empty()).then(|| term.to_string())
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl CompoundTermProvider for CompoundTermList {
    fn known_terms(&self) -> Result<BTreeSet<String>> {
        Ok(self.terms.clone())
    }
}

/// Word senses loaded from `word ; a>sense ; weight` lines.
#[derive(Clone, Debug, Default)]
pub struct SenseTable {
    senses: StaticSenseProvider,
}

impl SenseTable {
    /// Reads a sense table.
    ///
    /// Each line is `word ; path>sense ; weight`, lower-cased; the sense is
    /// the second `>`-separated segment and the weight a non-negative
    /// integer. Other lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut senses = StaticSenseProvider::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| io_error("sense table", index + 1, &e))?;
            match Self::parse_line(&line) {
                Some((word, sense, weight)) => senses.insert(&word, &sense, weight),
                None => trace!(line = index + 1, "skipping sense line"),
            }
        }
        debug!(words = senses.len(), "loaded sense table");
        Ok(Self { senses })
    }

    /// Reads a sense table from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(open(path.as_ref())?)
    }

    /// Parses one line into `(word, sense, weight)`.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<(String, String, f64)> {
        let line = line.trim().to_lowercase();
        let (rest, weight) = line.rsplit_once(" ; ")?;
        let (word, path) = rest.split_once(" ; ")?;
        let weight: u32 = weight.parse().ok()?;
        let sense = path.split('>').nth(1)?;
        Some((word.to_string(), sense.to_string(), f64::from(weight)))
    }

    /// Number of words with a sense.
    #[must_use]
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

impl SenseProvider for SenseTable {
    fn best_sense_for(&self, word: &str) -> Result<Option<SenseScore>> {
        self.senses.best_sense_for(word)
    }
}

// =============================================================================
// Caching
// =============================================================================

/// Memoizes the answers of another tag provider.
///
/// Only successful lookups are cached; a failed lookup is retried next time.
pub struct CachedTagProvider<P> {
    inner: P,
    cache: Mutex<HashMap<String, Vec<TagScore>>>,
}

impl<P: TagProvider> CachedTagProvider<P> {
    /// Wraps a provider.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached words.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// The wrapped provider.
    #[must_use]
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: TagProvider> TagProvider for CachedTagProvider<P> {
    fn tags_for(&self, word: &str) -> Result<Vec<TagScore>> {
        if let Some(hit) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(word)
        {
            return Ok(hit.clone());
        }

        let tags = self.inner.tags_for(word)?;
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word.to_string(), tags.clone());
        Ok(tags)
    }
}

// =============================================================================
// Bundle
// =============================================================================

/// The providers one analysis consumes.
///
/// Every lookup is fail-open: a provider error is logged and read as
/// "no data". The bundle applies this to the term list; the tagging and
/// sense stages apply it per word.
pub struct Providers {
    tags: Box<dyn TagProvider>,
    senses: Box<dyn SenseProvider>,
    compounds: Box<dyn CompoundTermProvider>,
    lexical: Option<Box<dyn LexicalRelationProvider>>,
}

impl Default for Providers {
    fn default() -> Self {
        Self::new(
            StaticTagProvider::new(),
            StaticSenseProvider::new(),
            StaticCompoundTerms::default(),
        )
    }
}

impl Providers {
    /// Bundles the three required providers.
    #[must_use]
    pub fn new(
        tags: impl TagProvider + 'static,
        senses: impl SenseProvider + 'static,
        compounds: impl CompoundTermProvider + 'static,
    ) -> Self {
        Self {
            tags: Box::new(tags),
            senses: Box::new(senses),
            compounds: Box::new(compounds),
            lexical: None,
        }
    }

    /// Adds a lexical-relation provider.
    #[must_use]
    pub fn with_lexical(mut self, lexical: impl LexicalRelationProvider + 'static) -> Self {
        self.lexical = Some(Box::new(lexical));
        self
    }

    /// The tag provider.
    #[must_use]
    pub fn tags(&self) -> &dyn TagProvider {
        self.tags.as_ref()
    }

    /// The sense provider.
    #[must_use]
    pub fn senses(&self) -> &dyn SenseProvider {
        self.senses.as_ref()
    }

    /// The lexical-relation provider, if any.
    #[must_use]
    pub fn lexical(&self) -> Option<&dyn LexicalRelationProvider> {
        self.lexical.as_deref()
    }

    /// Known compound terms, empty if the provider fails.
    #[must_use]
    pub fn known_terms(&self) -> BTreeSet<String> {
        fail_open("compounds", "*", self.compounds.known_terms())
    }
}
