//! Built-in rule set for the Devanagari scheme.
//!
//! Key-specific dependent-vowel rules shadow nothing at the root (a
//! standalone vowel renders its independent form); after one or two
//! consonants they select the matra. Consonant chains join with virama.

pub(super) const DEVANAGARI_RULES_TOML: &str = r#"
[[rules]]
pattern = ["vowel"]
output = "$1"

[[rules]]
pattern = ["vowel", "sign"]
output = "$1$2"

[[rules]]
pattern = ["sign"]
output = "$1"

[[rules]]
pattern = ["consonant"]
output = "$1"

[[rules]]
pattern = ["consonant", "vowel/A"]
output = "$1"

[[rules]]
pattern = ["consonant", "vowel/AA"]
output = "$1ा"

[[rules]]
pattern = ["consonant", "vowel/I"]
output = "$1ि"

[[rules]]
pattern = ["consonant", "vowel/II"]
output = "$1ी"

[[rules]]
pattern = ["consonant", "vowel/U"]
output = "$1ु"

[[rules]]
pattern = ["consonant", "vowel/UU"]
output = "$1ू"

[[rules]]
pattern = ["consonant", "vowel/E"]
output = "$1े"

[[rules]]
pattern = ["consonant", "vowel/AI"]
output = "$1ै"

[[rules]]
pattern = ["consonant", "vowel/O"]
output = "$1ो"

[[rules]]
pattern = ["consonant", "vowel/AU"]
output = "$1ौ"

[[rules]]
pattern = ["consonant", "consonant"]
output = "$1्$2"

[[rules]]
pattern = ["consonant", "consonant", "consonant"]
output = "$1्$2्$3"

[[rules]]
pattern = ["consonant", "consonant", "vowel/A"]
output = "$1्$2"

[[rules]]
pattern = ["consonant", "consonant", "vowel/AA"]
output = "$1्$2ा"

[[rules]]
pattern = ["consonant", "consonant", "vowel/I"]
output = "$1्$2ि"

[[rules]]
pattern = ["consonant", "consonant", "vowel/II"]
output = "$1्$2ी"

[[rules]]
pattern = ["consonant", "consonant", "vowel/U"]
output = "$1्$2ु"

[[rules]]
pattern = ["consonant", "consonant", "vowel/UU"]
output = "$1्$2ू"

[[rules]]
pattern = ["consonant", "consonant", "vowel/E"]
output = "$1्$2े"

[[rules]]
pattern = ["consonant", "consonant", "vowel/AI"]
output = "$1्$2ै"

[[rules]]
pattern = ["consonant", "consonant", "vowel/O"]
output = "$1्$2ो"

[[rules]]
pattern = ["consonant", "consonant", "vowel/AU"]
output = "$1्$2ौ"
"#;
