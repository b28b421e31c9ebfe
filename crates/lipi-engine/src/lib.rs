//! Incremental transliteration state machine.
//!
//! [`Engine`] consumes one input character at a time, resolves the
//! candidate interpretations offered by the scheme's forward walker
//! against the rule set, and emits [`TranslitResult`] records. Earlier
//! non-final output is revised by later results until a result declares
//! it final; [`Composition`] folds a result stream into display text the
//! way a host is expected to.

mod composition;
mod result;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{debug, debug_span};

use lipi_core::rules::RuleSet;
use lipi_core::scheme::{Candidate, Scheme, StepOutcome, TrieWalker};
use lipi_core::trie::NodeId;

pub use composition::Composition;
pub use lipi_core::rules::RenderError;
pub use result::TranslitResult;

/// Outcome of scanning a candidate list against the rules cursor.
enum Accepted {
    /// The reached rule node rendered the pending fragments.
    Rendered { output: String, is_final: bool },
    /// Transition taken, but the reached node carries no renderer; the
    /// raw echo stands in until a deeper rule fires.
    Silent,
}

/// What the engine decided to do with a step outcome.
enum StepAction {
    Accepted(Accepted),
    FailedDisambiguation,
    Passthrough,
}

/// Incremental transliteration engine.
///
/// One engine per independent input stream: the rules cursor, the pending
/// fragments, and the forward walker are mutated in place across calls,
/// so an instance is not safe to share between threads without external
/// synchronization. The scheme and rule set are immutable and shared.
///
/// The forward walker may return several step outcomes for one character;
/// only the first is acted on and the rest are dropped. That mirrors the
/// behavior this engine was modeled on and is pinned by a test — see the
/// walker-contract tests before changing it.
pub struct Engine {
    walker: TrieWalker,
    rules: Arc<RuleSet>,
    cursor: NodeId,
    pending: Vec<String>,
}

impl Engine {
    pub fn new(scheme: Arc<Scheme>, rules: Arc<RuleSet>) -> Self {
        let cursor = rules.root();
        Self {
            walker: TrieWalker::new(scheme),
            rules,
            cursor,
            pending: Vec::new(),
        }
    }

    /// Transliterate a whole string: folds [`Engine::execute_char`] over
    /// the characters in order, concatenating their results.
    ///
    /// On error the state is left as of the last successfully processed
    /// character; callers wanting rollback must snapshot before the call.
    pub fn execute(&mut self, inputs: &str) -> Result<Vec<TranslitResult>, RenderError> {
        let mut results = Vec::new();
        for input in inputs.chars() {
            results.extend(self.execute_char(input)?);
        }
        Ok(results)
    }

    /// Process one character, producing zero or more results.
    ///
    /// Either every result for the character is returned or the call
    /// fails as a whole with [`RenderError`].
    pub fn execute_char(&mut self, input: char) -> Result<Vec<TranslitResult>, RenderError> {
        let span = debug_span!("execute_char", %input);
        let _guard = span.enter();
        self.step(input, false)
    }

    fn step(&mut self, input: char, reparsing: bool) -> Result<Vec<TranslitResult>, RenderError> {
        let outcomes = self.walker.walk(input);
        self.apply(outcomes, reparsing)
    }

    /// Act on the first outcome of a walk; later outcomes are unreachable
    /// by design (see the type-level docs).
    fn apply(
        &mut self,
        outcomes: Vec<StepOutcome>,
        reparsing: bool,
    ) -> Result<Vec<TranslitResult>, RenderError> {
        let Some(outcome) = outcomes.into_iter().next() else {
            return Ok(Vec::new());
        };

        if outcome.is_root_boundary && outcome.candidates.is_none() {
            self.reset_rules();
        }

        let action = match &outcome.candidates {
            Some(candidates) => match self.try_accept(candidates)? {
                Some(accepted) => StepAction::Accepted(accepted),
                None => StepAction::FailedDisambiguation,
            },
            None => StepAction::Passthrough,
        };

        match action {
            StepAction::Accepted(accepted) => Ok(vec![Self::emit(
                accepted,
                outcome.matched,
                outcome.is_root_boundary,
            )]),
            StepAction::Passthrough => Ok(vec![TranslitResult::passthrough(
                outcome.matched,
                outcome.is_root_boundary,
            )]),
            StepAction::FailedDisambiguation => self.reparse(outcome, reparsing),
        }
    }

    /// Accept the first candidate with a valid transition from the
    /// current cursor. Acceptance appends the fragment and advances the
    /// cursor; rendering never resets state, so a node with further
    /// transitions stays open for extension.
    fn try_accept(&mut self, candidates: &[Candidate]) -> Result<Option<Accepted>, RenderError> {
        for candidate in candidates {
            let Some(matched) = self
                .rules
                .lookup(self.cursor, &candidate.class, &candidate.key)
            else {
                continue;
            };
            self.pending.push(candidate.fragment.clone());
            self.cursor = matched.next;
            debug!(
                class = %candidate.class,
                key = %candidate.key,
                pending = self.pending.len(),
                "candidate accepted"
            );
            return match matched.renderer {
                Some(renderer) => {
                    let output = renderer.render(&self.pending)?;
                    Ok(Some(Accepted::Rendered {
                        output,
                        is_final: !matched.has_further_transitions,
                    }))
                }
                None => Ok(Some(Accepted::Silent)),
            };
        }
        Ok(None)
    }

    /// No candidate combined with the accumulated context: start over and
    /// re-run the matched text from a clean state, so it can begin a
    /// brand-new match sequence.
    ///
    /// A failed disambiguation *during* the re-run does not recurse
    /// again: it makes one more acceptance attempt from the root and then
    /// degrades to passthrough, so a sequence that fails at every step
    /// still terminates with one result per character.
    fn reparse(
        &mut self,
        outcome: StepOutcome,
        reparsing: bool,
    ) -> Result<Vec<TranslitResult>, RenderError> {
        self.reset_state();

        if !reparsing {
            debug!(matched = %outcome.matched, "disambiguation failed, re-parsing");
            let mut results = Vec::new();
            for input in outcome.matched.chars() {
                results.extend(self.step(input, true)?);
            }
            return Ok(results);
        }

        if let Some(candidates) = &outcome.candidates {
            if let Some(accepted) = self.try_accept(candidates)? {
                return Ok(vec![Self::emit(
                    accepted,
                    outcome.matched,
                    outcome.is_root_boundary,
                )]);
            }
        }
        debug!(matched = %outcome.matched, "disambiguation failed twice, passing through");
        Ok(vec![TranslitResult::passthrough(
            outcome.matched,
            outcome.is_root_boundary,
        )])
    }

    fn emit(accepted: Accepted, matched: String, is_root_boundary: bool) -> TranslitResult {
        match accepted {
            Accepted::Rendered { output, is_final } => {
                TranslitResult::rendered(matched, output, is_root_boundary, is_final)
            }
            Accepted::Silent => TranslitResult::passthrough(matched, is_root_boundary),
        }
    }

    /// Reset the match cursor and pending fragments together; they are
    /// never reset independently.
    fn reset_rules(&mut self) {
        debug!("rules state reset");
        self.cursor = self.rules.root();
        self.pending.clear();
    }

    /// Clean state for re-evaluation: rules state and forward walker. The
    /// walker already consumed the matched text, so re-running it against
    /// a live walker would double-feed those characters.
    fn reset_state(&mut self) {
        self.reset_rules();
        self.walker.reset();
    }
}
