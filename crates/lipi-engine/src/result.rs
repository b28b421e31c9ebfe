/// One emitted unit of transliteration output.
///
/// Created fresh on every emission and immutable afterwards; the engine
/// keeps no result history. Hosts must replace a previously shown
/// non-final result with each subsequent result, treat
/// `is_previous_final = true` as locking everything shown before this
/// result, and treat `is_final = true` output as immutable history. For
/// rendered results `output` may cover fragments accumulated before this
/// step's `input`; coverage is tracked through the two flags, not by
/// diffing inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslitResult {
    /// Raw input consumed in the step that produced this result.
    pub input: String,
    /// Current best-guess (or final) rendered text.
    pub output: String,
    /// Once true, this exact output will never be replaced.
    pub is_final: bool,
    /// True iff every result emitted before this one is now final.
    pub is_previous_final: bool,
}

impl TranslitResult {
    pub(crate) fn rendered(
        input: String,
        output: String,
        is_previous_final: bool,
        is_final: bool,
    ) -> Self {
        Self {
            input,
            output,
            is_final,
            is_previous_final,
        }
    }

    /// Echo of unmapped or not-yet-rendered input: output equals input
    /// and is never final.
    pub(crate) fn passthrough(text: String, is_previous_final: bool) -> Self {
        Self {
            input: text.clone(),
            output: text,
            is_final: false,
            is_previous_final,
        }
    }
}
