//! Input tokenization.
//!
//! Converts raw sentence text into lower-cased surface tokens.

/// Elision prefixes split off their host word, apostrophe included.
pub const ELISION_PREFIXES: [&str; 12] = [
    "l", "d", "j", "t", "n", "s", "c", "m", "qu", "jusqu", "lorsqu", "puisqu",
];

/// Tokenizes sentence text.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into surface tokens.
    ///
    /// - Converts words to lowercase
    /// - Splits on whitespace and punctuation (letters, digits, `'` and `-`
    ///   are word characters; `_` is punctuation, so no input word can spell
    ///   a sentinel)
    /// - Splits elided prefixes: `l'arbre` becomes `l'`, `arbre`
    /// - Normalizes typographic apostrophes to `'`
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars().flat_map(char::to_lowercase) {
            match ch {
                '\'' | '\u{2019}' => {
                    if Self::is_elision_prefix(&current_word) {
                        current_word.push('\'');
                        tokens.push(std::mem::take(&mut current_word));
                    } else {
                        current_word.push('\'');
                    }
                }
                c if c.is_alphanumeric() || c == '-' => current_word.push(c),
                // Whitespace and punctuation both end the word
                _ => Self::flush(&mut current_word, &mut tokens),
            }
        }

        Self::flush(&mut current_word, &mut tokens);
        tokens
    }

    /// Returns true if `word` (without apostrophe) is an elision prefix.
    #[must_use]
    pub fn is_elision_prefix(word: &str) -> bool {
        ELISION_PREFIXES.contains(&word)
    }

    fn flush(current_word: &mut String, tokens: &mut Vec<String>) {
        let trimmed = current_word.trim_matches(|c| c == '\'' || c == '-');
        if !trimmed.is_empty() {
            tokens.push(trimmed.to_string());
        }
        current_word.clear();
    }
}
