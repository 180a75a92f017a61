//! The analysis pipeline.
//!
//! ```text
//! text -> tokenize -> splice compounds -> link chain -> tag
//!      -> syntax rules -> anaphora -> lexical integration -> inference
//!      -> disambiguation -> graph
//! ```
//!
//! Every stage adds to one graph owned by the run. Provider failures never
//! abort a run; they only leave fewer relations behind.

use lexigraph_engine::rule::{inference, syntax};
use lexigraph_engine::{
    AnaphoraResolver, DisambiguationLinker, LexicalIntegrator, PosAnnotator, Resolution,
    RuleEngine, SaturationReport,
};
use lexigraph_parser::{CompoundSplicer, TokenChain};
use lexigraph_storage::SemanticGraph;
use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::providers::Providers;

/// What one analysis did.
#[derive(Clone, Debug, Default)]
pub struct AnalysisReport {
    /// Word tokens, sentinels excluded
    pub tokens: usize,
    /// Compound terms spliced into the chain
    pub splices: usize,
    /// `pos` edges asserted
    pub pos_edges: usize,
    /// Syntactic rule engine run
    pub syntax: SaturationReport,
    /// Pronoun resolutions
    pub resolutions: Vec<Resolution>,
    /// `isa` / `synonym` edges imported
    pub lexical_edges: usize,
    /// Inference rule engine run, if lexical integration ran
    pub inference: Option<SaturationReport>,
    /// `disambiguate` edges asserted
    pub sense_edges: usize,
}

impl AnalysisReport {
    /// Returns true if either engine run stopped at its pass cap.
    #[must_use]
    pub fn cap_reached(&self) -> bool {
        self.syntax.cap_reached || self.inference.as_ref().is_some_and(|r| r.cap_reached)
    }
}

/// Runs the pipeline with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes one sentence.
    #[must_use]
    pub fn analyze(&self, text: &str, providers: &Providers) -> SemanticGraph {
        self.analyze_with_report(text, providers).0
    }

    /// Analyzes one sentence and reports what each stage did.
    #[must_use]
    pub fn analyze_with_report(
        &self,
        text: &str,
        providers: &Providers,
    ) -> (SemanticGraph, AnalysisReport) {
        let config = &self.config;
        let mut report = AnalysisReport::default();

        let chain = TokenChain::from_text(text);
        report.tokens = chain.words().count();

        let terms = providers.known_terms();
        let chain = CompoundSplicer::splice(&chain, terms.iter().map(String::as_str));
        report.splices = chain.splices().len();

        let mut graph = SemanticGraph::new();
        chain.link_into(&mut graph);
        debug!(
            tokens = report.tokens,
            splices = report.splices,
            "chain linked"
        );

        report.pos_edges = PosAnnotator::new(providers.tags()).annotate(&mut graph);

        let rules: Vec<_> = syntax::extended_rules()
            .into_iter()
            .map(|rule| match rule.name {
                "noun-phrase" => rule.with_enabled(config.noun_phrases),
                "passive" => rule.with_enabled(config.passive_voice),
                _ => rule,
            })
            .collect();
        report.syntax = RuleEngine::new()
            .with_max_passes(config.max_rule_passes)
            .run(&rules, &mut graph, &config.vocabulary);

        report.resolutions = AnaphoraResolver::new(&config.vocabulary).apply(&mut graph);

        if config.lexical_integration {
            if let Some(lexical) = providers.lexical() {
                report.lexical_edges = LexicalIntegrator::new(lexical).integrate(&mut graph);
                report.inference = Some(
                    RuleEngine::new()
                        .with_max_passes(config.max_inference_passes)
                        .run(&inference::inference_rules(), &mut graph, &config.vocabulary),
                );
            }
        }

        if config.disambiguation {
            report.sense_edges = DisambiguationLinker::new(providers.senses()).link(&mut graph);
        }

        info!(
            nodes = graph.node_count(),
            relations = graph.relation_count(),
            syntax_passes = report.syntax.passes,
            resolutions = report.resolutions.len(),
            cap_reached = report.cap_reached(),
            "analysis complete"
        );
        (graph, report)
    }
}

/// Analyzes one sentence with the default configuration.
#[must_use]
pub fn analyze(text: &str, providers: &Providers) -> SemanticGraph {
    Analyzer::default().analyze(text, providers)
}
