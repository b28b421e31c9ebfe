use crate::TranslitResult;

/// Reference implementation of the host display contract: folds a
/// [`TranslitResult`] stream into the text a host would show.
///
/// A result with `is_previous_final` locks everything shown so far; a
/// non-final tail result is replaced by whatever comes next; final
/// results accumulate until they are locked.
#[derive(Debug, Default)]
pub struct Composition {
    locked: String,
    /// Unlocked (output, is_final) segments since the last lock.
    tail: Vec<(String, bool)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: &TranslitResult) {
        if result.is_previous_final {
            for (output, _) in self.tail.drain(..) {
                self.locked.push_str(&output);
            }
        }
        if let Some((_, false)) = self.tail.last() {
            self.tail.pop();
        }
        self.tail.push((result.output.clone(), result.is_final));
    }

    /// The currently displayed text.
    pub fn text(&self) -> String {
        let mut text = self.locked.clone();
        for (output, _) in &self.tail {
            text.push_str(output);
        }
        text
    }

    /// The immutable prefix: output that no future result may revise.
    pub fn locked(&self) -> &str {
        &self.locked
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty() && self.tail.is_empty()
    }

    pub fn clear(&mut self) {
        self.locked.clear();
        self.tail.clear();
    }
}
