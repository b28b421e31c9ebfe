//! Property-based tests for the engine state machine.
//!
//! Random input streams over the Devanagari tables, with structural
//! invariants checked after every emission.

use proptest::prelude::*;

use super::devanagari_engine;
use crate::Composition;

fn arb_input_char() -> impl Strategy<Value = char> {
    // Weighted toward mapped input, with enough junk to exercise
    // passthrough and boundary paths.
    prop_oneof![
        5 => prop::sample::select("aAiIuUeEoO".chars().collect::<Vec<_>>()),
        6 => prop::sample::select("kKgGcCjJtTdDnNpPbBmyrlvsSzh".chars().collect::<Vec<_>>()),
        2 => prop::sample::select(".~_".chars().collect::<Vec<_>>()),
        3 => prop::sample::select("qwxf!? 0159".chars().collect::<Vec<_>>()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn engine_invariants_hold(chars in prop::collection::vec(arb_input_char(), 1..80)) {
        let mut engine = devanagari_engine();
        let mut comp = Composition::new();
        let mut previous_locked = String::new();
        let mut all_results = Vec::new();

        for &ch in &chars {
            let results = engine
                .execute_char(ch)
                .expect("built-in tables must always render");
            for result in &results {
                comp.push(result);

                // Locked output only grows, and the display always
                // carries it as a prefix.
                prop_assert!(
                    comp.locked().starts_with(previous_locked.as_str()),
                    "locked text shrank after {:?}: {:?} -> {:?}",
                    ch,
                    previous_locked,
                    comp.locked(),
                );
                previous_locked = comp.locked().to_string();
                prop_assert!(comp.text().starts_with(comp.locked()));

                // Output is never empty unless input was (it never is).
                prop_assert!(!result.input.is_empty());
            }
            all_results.extend(results);
        }

        // Determinism: a fresh engine over the same input reproduces the
        // exact result stream.
        let input: String = chars.iter().collect();
        let mut replay = devanagari_engine();
        let replayed = replay.execute(&input).unwrap();
        prop_assert_eq!(all_results, replayed);
    }

    #[test]
    fn unmapped_characters_always_echo(
        chars in prop::collection::vec(
            prop::sample::select("!?#0123456789 ".chars().collect::<Vec<_>>()),
            1..40,
        )
    ) {
        let mut engine = devanagari_engine();
        for &ch in &chars {
            let results = engine.execute_char(ch).unwrap();
            prop_assert_eq!(results.len(), 1);
            prop_assert_eq!(results[0].input.clone(), ch.to_string());
            prop_assert_eq!(results[0].output.clone(), results[0].input.clone());
            prop_assert!(!results[0].is_final);
        }
    }
}
