mod corpus;
mod proptest_fsm;

use std::sync::Arc;

use lipi_core::rules::RuleSet;
use lipi_core::scheme::Scheme;

use super::{Composition, Engine, TranslitResult};

pub(super) fn devanagari_engine() -> Engine {
    Engine::new(
        Arc::new(Scheme::default_devanagari()),
        Arc::new(RuleSet::default_devanagari()),
    )
}

pub(super) fn engine_from(scheme_toml: &str, rules_toml: &str) -> Engine {
    Engine::new(
        Arc::new(Scheme::parse(scheme_toml).unwrap()),
        Arc::new(RuleSet::parse(rules_toml).unwrap()),
    )
}

/// Feed a string one character at a time, collecting every result.
pub(super) fn feed(engine: &mut Engine, text: &str) -> Vec<TranslitResult> {
    engine.execute(text).expect("rendering must succeed")
}

/// Feed a string and fold the results into display text.
pub(super) fn compose(engine: &mut Engine, text: &str) -> String {
    let mut composition = Composition::new();
    for result in feed(engine, text) {
        composition.push(&result);
    }
    composition.text()
}
