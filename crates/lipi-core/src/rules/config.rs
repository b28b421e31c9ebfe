use std::collections::HashSet;

use serde::Deserialize;

use super::render::{Renderer, TemplateError};
use super::{RuleSet, RuleStep};
use crate::trie::Trie;

#[derive(Deserialize)]
struct RulesDoc {
    #[serde(default)]
    rules: Vec<RuleDoc>,
}

#[derive(Deserialize)]
struct RuleDoc {
    pattern: Vec<String>,
    output: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("rule set has no rules")]
    Empty,
    #[error("rule with empty pattern")]
    EmptyPattern,
    #[error("empty pattern element in rule {pattern:?}")]
    EmptyElement { pattern: String },
    #[error("malformed pattern element {element:?} (expected \"class\" or \"class/KEY\")")]
    BadElement { element: String },
    #[error("duplicate rule pattern {0:?}")]
    DuplicatePattern(String),
    #[error("bad output template for rule {pattern:?}: {source}")]
    Template {
        pattern: String,
        #[source]
        source: TemplateError,
    },
}

fn parse_element(element: &str, pattern: &str) -> Result<RuleStep, RulesError> {
    if element.is_empty() {
        return Err(RulesError::EmptyElement {
            pattern: pattern.to_owned(),
        });
    }
    match element.split_once('/') {
        Some((class, key)) if !class.is_empty() && !key.is_empty() => Ok(RuleStep {
            class: class.to_owned(),
            key: Some(key.to_owned()),
        }),
        Some(_) => Err(RulesError::BadElement {
            element: element.to_owned(),
        }),
        None => Ok(RuleStep {
            class: element.to_owned(),
            key: None,
        }),
    }
}

pub(super) fn parse_rules_toml(toml_str: &str) -> Result<RuleSet, RulesError> {
    let doc: RulesDoc = toml::from_str(toml_str).map_err(|e| RulesError::Parse(e.to_string()))?;

    if doc.rules.is_empty() {
        return Err(RulesError::Empty);
    }

    let mut seen: HashSet<Vec<RuleStep>> = HashSet::new();
    let mut trie = Trie::new();
    for rule in doc.rules {
        if rule.pattern.is_empty() {
            return Err(RulesError::EmptyPattern);
        }
        let display = rule.pattern.join(" ");
        let steps = rule
            .pattern
            .iter()
            .map(|element| parse_element(element, &display))
            .collect::<Result<Vec<_>, _>>()?;
        if !seen.insert(steps.clone()) {
            return Err(RulesError::DuplicatePattern(display));
        }
        let renderer = Renderer::compile(&rule.output).map_err(|source| RulesError::Template {
            pattern: display,
            source,
        })?;
        trie.insert(steps, renderer);
    }

    Ok(RuleSet { trie })
}
