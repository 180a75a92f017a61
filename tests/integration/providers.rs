//! Provider failure handling

use std::collections::BTreeSet;
use std::io::Cursor;

use lexigraph::runtime::{CachedTagProvider, CompoundTermList, PatternTagProvider, SenseTable};
use lexigraph::{Providers, analyze};
use lexigraph_engine::{CompoundTermProvider, LexicalRelationProvider, SenseProvider, TagProvider};
use lexigraph_foundation::{Error, RelationType, Result};

struct Down;

impl TagProvider for Down {
    fn tags_for(&self, word: &str) -> Result<Vec<(String, f64)>> {
        Err(Error::provider_unavailable("tags", word, "connection reset"))
    }
}

impl SenseProvider for Down {
    fn best_sense_for(&self, word: &str) -> Result<Option<(String, f64)>> {
        Err(Error::provider_unavailable("senses", word, "timeout"))
    }
}

impl CompoundTermProvider for Down {
    fn known_terms(&self) -> Result<BTreeSet<String>> {
        Err(Error::provider_unavailable("compounds", "*", "timeout"))
    }
}

impl LexicalRelationProvider for Down {
    fn relations_for(&self, word: &str) -> Result<Vec<(String, String, f64)>> {
        Err(Error::provider_unavailable("lexical", word, "timeout"))
    }

    fn external_id_for(&self, word: &str) -> Result<Option<u64>> {
        Err(Error::provider_unavailable("lexical", word, "timeout"))
    }
}

#[test]
fn every_provider_down_still_yields_chain() {
    let providers = Providers::new(Down, Down, Down).with_lexical(Down);
    let graph = analyze("le chat boit du lait", &providers);

    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.relation_count(), 6);
    assert!(graph.relations().iter().all(|r| r.relation == RelationType::Succ));
}

#[test]
fn partial_outage_keeps_working_providers() {
    let providers = Providers::new(PatternTagProvider::french(), Down, Down);
    let graph = analyze("le chat boit du lait", &providers);

    let boit = graph.find("boit").unwrap();
    let chat = graph.find("chat").unwrap();
    assert!(graph.has_relation(boit, chat, RelationType::Agent));
    assert_eq!(graph.relations_of_type(RelationType::Disambiguate).count(), 0);
}

#[test]
fn loaded_resources_feed_the_pipeline() {
    let terms = CompoundTermList::from_reader(Cursor::new("1;\"du lait\";\n2;\"pomme de terre\";\n"))
        .unwrap();
    let senses = SenseTable::from_reader(Cursor::new("lait ; lait>boisson ; 55\n")).unwrap();
    let providers = Providers::new(CachedTagProvider::new(PatternTagProvider::french()), senses, terms);

    let graph = analyze("le chat boit du lait", &providers);
    let lait = graph.find("lait").unwrap();
    let boisson = graph.find("boisson").unwrap();
    assert!(graph.find("du lait").is_some());
    assert!(graph.has_relation(lait, boisson, RelationType::Disambiguate));
}
