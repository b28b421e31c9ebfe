//! Output templates compiled to fragment-sequence renderers.

/// Error in a rule output template, caught when the rule set is parsed.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("'$' must be followed by a fragment number")]
    DanglingReference,
    #[error("fragment references are 1-based; $0 is not valid")]
    ZeroReference,
    #[error("fragment reference too large")]
    ReferenceTooLarge,
}

/// The renderer could not synthesize output from the pending fragments.
/// Raised when a rule references a fragment position that was never
/// accumulated — a rule-data defect, not an input error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("rule output references fragment ${reference} but only {available} fragments are pending")]
    FragmentOutOfRange { reference: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    /// Zero-based index into the fragment sequence.
    Fragment(usize),
}

/// Pure function from an ordered fragment sequence to rendered text,
/// compiled from a template mixing literal text with `$1`-style
/// references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    tokens: Vec<Token>,
}

impl Renderer {
    pub(crate) fn compile(template: &str) -> Result<Self, TemplateError> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '$' {
                literal.push(ch);
                continue;
            }
            let mut digits = String::new();
            while let Some(digit) = chars.peek().filter(|c| c.is_ascii_digit()) {
                digits.push(*digit);
                chars.next();
            }
            if digits.is_empty() {
                return Err(TemplateError::DanglingReference);
            }
            let reference: usize = digits
                .parse()
                .map_err(|_| TemplateError::ReferenceTooLarge)?;
            if reference == 0 {
                return Err(TemplateError::ZeroReference);
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Fragment(reference - 1));
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        Ok(Self { tokens })
    }

    pub fn render(&self, fragments: &[String]) -> Result<String, RenderError> {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Fragment(index) => match fragments.get(*index) {
                    Some(fragment) => out.push_str(fragment),
                    None => {
                        return Err(RenderError::FragmentOutOfRange {
                            reference: index + 1,
                            available: fragments.len(),
                        })
                    }
                },
            }
        }
        Ok(out)
    }
}
