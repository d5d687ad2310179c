//! The diagnosis pipeline.
//!
//! ```text
//! ErrorReport ──classify──▶ StructuredFields ──strategies──▶ candidates
//!      ▲                                                        │
//!      └────────────── apply_suggestion ◀──── compose ◀─────────┘
//! ```
//!
//! An [`Engine`] borrows its grammar table, strategy registry and knowledge
//! base, all of which are immutable. [`Engine::standard`] uses the built-in
//! ones; [`Engine::builder`] swaps in others.
//!
//! A strategy that panics is caught and logged, but the process panic hook
//! still runs first. Hosts that want nothing on stderr install a quiet hook
//! with [`std::panic::set_hook`]; the engine leaves the hook alone.

use std::panic::{self, AssertUnwindSafe};
use std::sync::LazyLock;

use dym_grammar::GrammarTable;
use dym_ir::{ErrorKind, ErrorReport, ReportState, StructuredFields, SuggestionCandidate, SymbolEnvironment};
use dym_knowledge::KnowledgeBase;
use serde::Deserialize;

use crate::compose::compose_capped;
use crate::mutate::apply_suggestion;
use crate::strategy::{StrategyContext, StrategyRegistry};

/// Tunables that do not belong to any table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Cap on distinct suggestions per report; unlimited when absent.
    pub max_suggestions: Option<usize>,
}

/// Classifies, suggests, and annotates error reports.
#[derive(Debug)]
pub struct Engine<'a> {
    grammar: &'a GrammarTable,
    registry: &'a StrategyRegistry,
    knowledge: &'a KnowledgeBase,
    config: EngineConfig,
}

static STANDARD: LazyLock<Engine<'static>> = LazyLock::new(|| Engine::builder().build());

impl<'a> Engine<'a> {
    pub fn builder() -> EngineBuilder<'a> {
        EngineBuilder::default()
    }

    /// The engine over the built-in tables and strategies.
    pub fn standard() -> &'static Engine<'static> {
        &STANDARD
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Annotate `report` with suggestions for fixing it.
    ///
    /// Never fails: when nothing applies the report comes back with its
    /// text unchanged. A report that was already annotated is returned
    /// untouched.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %report.kind()))]
    pub fn diagnose(&self, mut report: ErrorReport, env: &SymbolEnvironment) -> ErrorReport {
        if report.is_mutated() {
            tracing::debug!("report already annotated");
            return report;
        }

        let fields = self.grammar.classify(report.kind(), report.primary_message());
        report.advance(ReportState::Classified);

        let mut candidates = self.suggest(report.kind(), &fields, env);
        if let Some(hint) = fields.get(dym_ir::fields::HINT) {
            candidates.retain(|candidate| !repeats_hint(&candidate.text, hint));
        }
        report.advance(ReportState::Suggested);

        let suffix = compose_capped(&candidates, self.config.max_suggestions);
        tracing::debug!(candidates = candidates.len(), "suggestions composed");
        apply_suggestion(&mut report, &suffix);
        report
    }

    /// Every candidate for `kind`, in strategy registration order.
    ///
    /// A strategy that does not apply is skipped. One that panics is
    /// skipped too, and whatever it produced before panicking is dropped.
    pub fn suggest(
        &self,
        kind: ErrorKind,
        fields: &StructuredFields,
        env: &SymbolEnvironment,
    ) -> Vec<SuggestionCandidate> {
        let cx = StrategyContext {
            kind,
            fields,
            env,
            knowledge: self.knowledge,
        };

        let mut candidates = Vec::new();
        for strategy in self.registry.strategies_for(kind) {
            let name = strategy.name();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                strategy
                    .generate(cx)
                    .map(|found| found.collect::<Vec<_>>())
            }));
            match outcome {
                Ok(Ok(found)) => {
                    tracing::trace!(strategy = name, count = found.len(), "strategy applied");
                    candidates.extend(found);
                }
                Ok(Err(err)) => {
                    tracing::trace!(strategy = name, %err, "strategy does not apply");
                }
                Err(_) => {
                    tracing::warn!(strategy = name, "strategy panicked, output discarded");
                }
            }
        }
        candidates
    }
}

/// Whether `text` suggests what the runtime's own hint already says, with or
/// without a trailing note.
fn repeats_hint(text: &str, hint: &str) -> bool {
    text.strip_prefix(hint)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(" ("))
}

/// Assembles an [`Engine`]; anything not supplied is the built-in default.
#[derive(Debug, Default)]
pub struct EngineBuilder<'a> {
    grammar: Option<&'a GrammarTable>,
    registry: Option<&'a StrategyRegistry>,
    knowledge: Option<&'a KnowledgeBase>,
    config: EngineConfig,
}

impl<'a> EngineBuilder<'a> {
    #[must_use]
    pub fn grammar(mut self, grammar: &'a GrammarTable) -> Self {
        self.grammar = Some(grammar);
        self
    }

    #[must_use]
    pub fn registry(mut self, registry: &'a StrategyRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn knowledge(mut self, knowledge: &'a KnowledgeBase) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Engine<'a> {
        Engine {
            grammar: self.grammar.unwrap_or(GrammarTable::standard()),
            registry: self.registry.unwrap_or(StrategyRegistry::standard()),
            knowledge: self.knowledge.unwrap_or(KnowledgeBase::standard()),
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests;
