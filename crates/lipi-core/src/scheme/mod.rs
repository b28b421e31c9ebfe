//! Input scheme: maps typed sequences to candidate interpretations.
//!
//! A scheme is loaded once from TOML and then shared read-only between
//! engine instances. Incremental matching over the scheme is done by
//! [`TrieWalker`], one character per call.

mod config;
mod table;
mod walker;

pub use config::SchemeError;
pub use walker::{StepOutcome, TrieWalker};

use crate::trie::Trie;

/// One interpretation of a matched input sequence: a classified scheme
/// unit plus the script fragment it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub class: String,
    pub key: String,
    pub fragment: String,
}

/// A loaded scheme: the forward trie from input text to ordered
/// candidate lists. Immutable after parsing.
#[derive(Debug)]
pub struct Scheme {
    name: String,
    forward: Trie<char, Vec<Candidate>>,
}

impl Scheme {
    /// Parse and validate a scheme from TOML text.
    pub fn parse(toml_str: &str) -> Result<Self, SchemeError> {
        config::parse_scheme_toml(toml_str)
    }

    /// The built-in Devanagari scheme.
    pub fn default_devanagari() -> Self {
        Self::parse(table::DEVANAGARI_TOML).expect("embedded scheme must be valid")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn forward(&self) -> &Trie<char, Vec<Candidate>> {
        &self.forward
    }
}
