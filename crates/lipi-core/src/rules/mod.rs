//! Rule set: how classified scheme units combine into rendered output.
//!
//! A rule pattern is a path of `(class, key)` steps through the rules
//! trie; the node a pattern ends on carries the renderer for that
//! combination. Interior nodes of longer patterns may carry no renderer
//! of their own.

mod config;
mod render;
mod table;

pub use config::RulesError;
pub use render::{RenderError, Renderer, TemplateError};

use crate::trie::{NodeId, Trie};

/// One step of a rule pattern: a unit class, optionally pinned to a
/// specific key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RuleStep {
    class: String,
    key: Option<String>,
}

/// Result of a successful cursor transition.
pub struct RuleMatch<'a> {
    pub next: NodeId,
    pub renderer: Option<&'a Renderer>,
    pub has_further_transitions: bool,
}

/// A loaded rule set. Immutable after parsing.
#[derive(Debug)]
pub struct RuleSet {
    trie: Trie<RuleStep, Renderer>,
}

impl RuleSet {
    /// Parse and validate a rule set from TOML text.
    pub fn parse(toml_str: &str) -> Result<Self, RulesError> {
        config::parse_rules_toml(toml_str)
    }

    /// The built-in rule set paired with the Devanagari scheme.
    pub fn default_devanagari() -> Self {
        Self::parse(table::DEVANAGARI_RULES_TOML).expect("embedded rule set must be valid")
    }

    /// Identity of the initial cursor.
    pub fn root(&self) -> NodeId {
        self.trie.root()
    }

    /// Transition from `cursor` by a classified unit. The exact
    /// `(class, key)` child shadows the class wildcard.
    pub fn lookup(&self, cursor: NodeId, class: &str, key: &str) -> Option<RuleMatch<'_>> {
        let exact = RuleStep {
            class: class.to_owned(),
            key: Some(key.to_owned()),
        };
        let node = self.trie.child(cursor, &exact).or_else(|| {
            let wildcard = RuleStep {
                class: class.to_owned(),
                key: None,
            };
            self.trie.child(cursor, &wildcard)
        })?;
        Some(RuleMatch {
            next: node,
            renderer: self.trie.value(node),
            has_further_transitions: self.trie.has_children(node),
        })
    }
}
