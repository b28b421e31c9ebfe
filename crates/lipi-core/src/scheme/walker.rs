//! Incremental longest-match walk over a scheme's forward trie.

use std::sync::Arc;

use tracing::debug;

use super::{Candidate, Scheme};
use crate::trie::NodeId;

/// One step of the incremental walk.
///
/// `matched` is the text the outcome covers: the whole current segment for
/// a match, or the single unmatched character. `candidates` is absent both
/// for unmapped input and for partial matches that have not reached a
/// mapped unit yet. `is_root_boundary` tells the consumer that everything
/// emitted before this outcome belongs to a closed match sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub matched: String,
    pub is_root_boundary: bool,
    pub candidates: Option<Vec<Candidate>>,
}

/// Stateful walker over a scheme's forward trie. One walker per input
/// stream; the walker tracks partial multi-character matches across calls.
pub struct TrieWalker {
    scheme: Arc<Scheme>,
    cursor: NodeId,
    segment: String,
}

impl TrieWalker {
    pub fn new(scheme: Arc<Scheme>) -> Self {
        let cursor = scheme.forward().root();
        Self {
            scheme,
            cursor,
            segment: String::new(),
        }
    }

    /// Return to the root and forget the current segment.
    pub fn reset(&mut self) {
        self.cursor = self.scheme.forward().root();
        self.segment.clear();
    }

    /// Feed one character.
    ///
    /// The contract allows multiple outcomes per character; this walker
    /// returns at most one. A mid-segment dead end abandons the segment
    /// and restarts the walk with the failing character — the restarted
    /// outcome is a root boundary only when it cannot carry candidates,
    /// since a candidate-bearing restart may still combine with the
    /// consumer's accumulated rule context.
    pub fn walk(&mut self, input: char) -> Vec<StepOutcome> {
        if let Some(outcome) = self.advance(input, true) {
            return vec![outcome];
        }
        if self.segment.is_empty() {
            debug!(%input, "no match at root");
            return vec![Self::root_miss(input)];
        }
        debug!(segment = %self.segment, %input, "dead end, restarting walk");
        self.reset();
        match self.advance(input, false) {
            Some(outcome) => vec![outcome],
            None => {
                debug!(%input, "no match at root");
                vec![Self::root_miss(input)]
            }
        }
    }

    fn advance(&mut self, input: char, fresh: bool) -> Option<StepOutcome> {
        let forward = self.scheme.forward();
        let next = forward.child(self.cursor, &input)?;
        let at_root = self.segment.is_empty();
        self.segment.push(input);
        self.cursor = next;
        let candidates = forward.value(next).cloned();
        let is_root_boundary = if fresh {
            at_root
        } else {
            candidates.is_none()
        };
        debug!(segment = %self.segment, is_root_boundary, "walk advanced");
        Some(StepOutcome {
            matched: self.segment.clone(),
            is_root_boundary,
            candidates,
        })
    }

    fn root_miss(input: char) -> StepOutcome {
        StepOutcome {
            matched: input.to_string(),
            is_root_boundary: true,
            candidates: None,
        }
    }
}
