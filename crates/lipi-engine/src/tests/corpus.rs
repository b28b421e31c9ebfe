//! End-to-end display corpus over the built-in Devanagari tables.

use super::{compose, devanagari_engine};

#[test]
fn devanagari_corpus() {
    let cases = [
        ("namaste", "नमस्ते"),
        ("kamala", "कमल"),
        ("lipi", "लिपि"),
        ("BArata", "भारत"),
        ("devanAgarI", "देवनागरी"),
        ("stuti", "स्तुति"),
        ("gaNeSa", "गणेश"),
        ("yoga", "योग"),
        ("si.mha", "सिंह"),
        ("ka.h", "कः"),
        ("a~", "अँ"),
        ("om!", "ओम!"),
        ("123", "123"),
        ("ai", "अइ"),
        ("str", "स्त्र"),
        ("kti", "क्ति"),
    ];
    for (input, expected) in cases {
        let mut engine = devanagari_engine();
        let actual = compose(&mut engine, input);
        assert_eq!(actual, expected, "display mismatch for input {input:?}");
    }
}

#[test]
fn corpus_is_stable_across_a_shared_engine() {
    // Word boundaries (spaces) are unmapped and close each sequence, so
    // one engine over a sentence behaves like fresh engines per word.
    let mut engine = devanagari_engine();
    let sentence = compose(&mut engine, "namaste lipi");
    assert_eq!(sentence, "नमस्ते लिपि");
}
