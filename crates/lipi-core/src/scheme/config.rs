use std::collections::HashSet;

use serde::Deserialize;

use super::{Candidate, Scheme};
use crate::trie::Trie;

#[derive(Deserialize)]
struct SchemeDoc {
    scheme: SchemeMeta,
    #[serde(default)]
    mappings: Vec<MappingDoc>,
}

#[derive(Deserialize)]
struct SchemeMeta {
    name: String,
}

#[derive(Deserialize)]
struct MappingDoc {
    input: String,
    candidates: Vec<CandidateDoc>,
}

#[derive(Deserialize)]
struct CandidateDoc {
    class: String,
    key: String,
    fragment: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("scheme has no mappings")]
    Empty,
    #[error("mapping with empty input")]
    EmptyInput,
    #[error("duplicate input: {0}")]
    DuplicateInput(String),
    #[error("mapping for {0:?} has no candidates")]
    NoCandidates(String),
    #[error("mapping for {input:?} has a candidate with an empty {field}")]
    EmptyCandidateField { input: String, field: &'static str },
}

pub(super) fn parse_scheme_toml(toml_str: &str) -> Result<Scheme, SchemeError> {
    let doc: SchemeDoc = toml::from_str(toml_str).map_err(|e| SchemeError::Parse(e.to_string()))?;

    if doc.mappings.is_empty() {
        return Err(SchemeError::Empty);
    }

    let mut seen = HashSet::new();
    let mut forward = Trie::new();
    for mapping in doc.mappings {
        if mapping.input.is_empty() {
            return Err(SchemeError::EmptyInput);
        }
        if !seen.insert(mapping.input.clone()) {
            return Err(SchemeError::DuplicateInput(mapping.input));
        }
        if mapping.candidates.is_empty() {
            return Err(SchemeError::NoCandidates(mapping.input));
        }
        let mut candidates = Vec::with_capacity(mapping.candidates.len());
        for candidate in mapping.candidates {
            let empty_field = if candidate.class.is_empty() {
                Some("class")
            } else if candidate.key.is_empty() {
                Some("key")
            } else if candidate.fragment.is_empty() {
                Some("fragment")
            } else {
                None
            };
            if let Some(field) = empty_field {
                return Err(SchemeError::EmptyCandidateField {
                    input: mapping.input,
                    field,
                });
            }
            candidates.push(Candidate {
                class: candidate.class,
                key: candidate.key,
                fragment: candidate.fragment,
            });
        }
        forward.insert(mapping.input.chars(), candidates);
    }

    Ok(Scheme {
        name: doc.scheme.name,
        forward,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[scheme]
name = "test"

[[mappings]]
input = "k"
candidates = [{ class = "consonant", key = "KA", fragment = "क" }]

[[mappings]]
input = ".m"
candidates = [{ class = "sign", key = "ANUSVARA", fragment = "ं" }]
"#;
        let scheme = parse_scheme_toml(toml).unwrap();
        assert_eq!(scheme.name(), "test");
        let forward = scheme.forward();
        let k = forward.child(forward.root(), &'k').unwrap();
        assert_eq!(forward.value(k).unwrap()[0].key, "KA");
        // ".m" is reachable through a valueless interior node.
        let dot = forward.child(forward.root(), &'.').unwrap();
        assert!(forward.value(dot).is_none());
        let m = forward.child(dot, &'m').unwrap();
        assert_eq!(forward.value(m).unwrap()[0].fragment, "ं");
    }

    #[test]
    fn error_empty_mappings() {
        let toml = "[scheme]\nname = \"test\"\n";
        let err = parse_scheme_toml(toml).unwrap_err();
        assert!(matches!(err, SchemeError::Empty));
    }

    #[test]
    fn error_empty_input() {
        let toml = r#"
[scheme]
name = "test"

[[mappings]]
input = ""
candidates = [{ class = "vowel", key = "A", fragment = "अ" }]
"#;
        let err = parse_scheme_toml(toml).unwrap_err();
        assert!(matches!(err, SchemeError::EmptyInput));
    }

    #[test]
    fn error_duplicate_input() {
        let toml = r#"
[scheme]
name = "test"

[[mappings]]
input = "a"
candidates = [{ class = "vowel", key = "A", fragment = "अ" }]

[[mappings]]
input = "a"
candidates = [{ class = "vowel", key = "AA", fragment = "आ" }]
"#;
        let err = parse_scheme_toml(toml).unwrap_err();
        assert!(matches!(err, SchemeError::DuplicateInput(input) if input == "a"));
    }

    #[test]
    fn error_no_candidates() {
        let toml = r#"
[scheme]
name = "test"

[[mappings]]
input = "a"
candidates = []
"#;
        let err = parse_scheme_toml(toml).unwrap_err();
        assert!(matches!(err, SchemeError::NoCandidates(input) if input == "a"));
    }

    #[test]
    fn error_empty_candidate_field() {
        let toml = r#"
[scheme]
name = "test"

[[mappings]]
input = "a"
candidates = [{ class = "vowel", key = "", fragment = "अ" }]
"#;
        let err = parse_scheme_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            SchemeError::EmptyCandidateField { field: "key", .. }
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_scheme_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SchemeError::Parse(_)));
    }

    #[test]
    fn parse_default_devanagari() {
        let scheme = Scheme::default_devanagari();
        assert_eq!(scheme.name(), "devanagari");
        let forward = scheme.forward();
        let a = forward.child(forward.root(), &'a').unwrap();
        assert_eq!(forward.value(a).unwrap()[0].fragment, "अ");
    }
}
