//! Integration tests for the tokenizer

use lexigraph_parser::{InputTokenizer, TokenChain};

#[test]
fn elision_splits_prefix() {
    assert_eq!(
        InputTokenizer::tokenize("L'enfant n'aime pas l'eau"),
        vec!["l'", "enfant", "n'", "aime", "pas", "l'", "eau"]
    );
}

#[test]
fn typographic_apostrophe() {
    assert_eq!(InputTokenizer::tokenize("qu\u{2019}il"), vec!["qu'", "il"]);
}

#[test]
fn non_prefix_apostrophe_is_kept() {
    assert_eq!(InputTokenizer::tokenize("aujourd'hui"), vec!["aujourd'hui"]);
}

#[test]
fn punctuation_is_stripped() {
    assert_eq!(
        InputTokenizer::tokenize("Le petit chat boit du lait de chèvre. Il est si mignon!"),
        vec![
            "le", "petit", "chat", "boit", "du", "lait", "de", "chèvre", "il", "est", "si",
            "mignon"
        ]
    );
}

#[test]
fn same_input_same_output() {
    let text = "L'oiseau chante, le chien aboie.";
    assert_eq!(InputTokenizer::tokenize(text), InputTokenizer::tokenize(text));
}

#[test]
fn chain_adds_sentinels() {
    let chain = TokenChain::from_text("Le chat.");
    let tokens: Vec<_> = chain.tokens().iter().map(String::as_str).collect();
    assert_eq!(tokens, vec!["_START", "le", "chat", "_END"]);
}
