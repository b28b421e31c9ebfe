//! Built-in Devanagari scheme.
//!
//! Single-character units for vowels and consonants (capitals carry the
//! long/aspirated forms), dot-prefixed sequences for signs. Dependent
//! vowel forms and conjuncts are produced by the rule set, not listed
//! here.

pub(super) const DEVANAGARI_TOML: &str = r#"
[scheme]
name = "devanagari"

# --- vowels ---

[[mappings]]
input = "a"
candidates = [{ class = "vowel", key = "A", fragment = "अ" }]

[[mappings]]
input = "A"
candidates = [{ class = "vowel", key = "AA", fragment = "आ" }]

[[mappings]]
input = "i"
candidates = [{ class = "vowel", key = "I", fragment = "इ" }]

[[mappings]]
input = "I"
candidates = [{ class = "vowel", key = "II", fragment = "ई" }]

[[mappings]]
input = "u"
candidates = [{ class = "vowel", key = "U", fragment = "उ" }]

[[mappings]]
input = "U"
candidates = [{ class = "vowel", key = "UU", fragment = "ऊ" }]

[[mappings]]
input = "e"
candidates = [{ class = "vowel", key = "E", fragment = "ए" }]

[[mappings]]
input = "E"
candidates = [{ class = "vowel", key = "AI", fragment = "ऐ" }]

[[mappings]]
input = "o"
candidates = [{ class = "vowel", key = "O", fragment = "ओ" }]

[[mappings]]
input = "O"
candidates = [{ class = "vowel", key = "AU", fragment = "औ" }]

# --- consonants ---

[[mappings]]
input = "k"
candidates = [{ class = "consonant", key = "KA", fragment = "क" }]

[[mappings]]
input = "K"
candidates = [{ class = "consonant", key = "KHA", fragment = "ख" }]

[[mappings]]
input = "g"
candidates = [{ class = "consonant", key = "GA", fragment = "ग" }]

[[mappings]]
input = "G"
candidates = [{ class = "consonant", key = "GHA", fragment = "घ" }]

[[mappings]]
input = "c"
candidates = [{ class = "consonant", key = "CA", fragment = "च" }]

[[mappings]]
input = "C"
candidates = [{ class = "consonant", key = "CHA", fragment = "छ" }]

[[mappings]]
input = "j"
candidates = [{ class = "consonant", key = "JA", fragment = "ज" }]

[[mappings]]
input = "J"
candidates = [{ class = "consonant", key = "JHA", fragment = "झ" }]

[[mappings]]
input = "t"
candidates = [{ class = "consonant", key = "TA", fragment = "त" }]

[[mappings]]
input = "T"
candidates = [{ class = "consonant", key = "TTA", fragment = "ट" }]

[[mappings]]
input = "d"
candidates = [{ class = "consonant", key = "DA", fragment = "द" }]

[[mappings]]
input = "D"
candidates = [{ class = "consonant", key = "DDA", fragment = "ड" }]

[[mappings]]
input = "n"
candidates = [{ class = "consonant", key = "NA", fragment = "न" }]

[[mappings]]
input = "N"
candidates = [{ class = "consonant", key = "NNA", fragment = "ण" }]

[[mappings]]
input = "p"
candidates = [{ class = "consonant", key = "PA", fragment = "प" }]

[[mappings]]
input = "P"
candidates = [{ class = "consonant", key = "PHA", fragment = "फ" }]

[[mappings]]
input = "b"
candidates = [{ class = "consonant", key = "BA", fragment = "ब" }]

[[mappings]]
input = "B"
candidates = [{ class = "consonant", key = "BHA", fragment = "भ" }]

[[mappings]]
input = "m"
candidates = [{ class = "consonant", key = "MA", fragment = "म" }]

[[mappings]]
input = "y"
candidates = [{ class = "consonant", key = "YA", fragment = "य" }]

[[mappings]]
input = "r"
candidates = [{ class = "consonant", key = "RA", fragment = "र" }]

[[mappings]]
input = "l"
candidates = [{ class = "consonant", key = "LA", fragment = "ल" }]

[[mappings]]
input = "v"
candidates = [{ class = "consonant", key = "VA", fragment = "व" }]

[[mappings]]
input = "s"
candidates = [{ class = "consonant", key = "SA", fragment = "स" }]

[[mappings]]
input = "S"
candidates = [{ class = "consonant", key = "SHA", fragment = "श" }]

[[mappings]]
input = "z"
candidates = [{ class = "consonant", key = "SSA", fragment = "ष" }]

[[mappings]]
input = "h"
candidates = [{ class = "consonant", key = "HA", fragment = "ह" }]

# --- signs ---

[[mappings]]
input = "~"
candidates = [{ class = "sign", key = "CANDRABINDU", fragment = "ँ" }]

[[mappings]]
input = ".m"
candidates = [{ class = "sign", key = "ANUSVARA", fragment = "ं" }]

[[mappings]]
input = ".h"
candidates = [{ class = "sign", key = "VISARGA", fragment = "ः" }]

[[mappings]]
input = ".a"
candidates = [{ class = "sign", key = "AVAGRAHA", fragment = "ऽ" }]

[[mappings]]
input = "_"
candidates = [{ class = "sign", key = "VIRAMA", fragment = "्" }]
"#;
