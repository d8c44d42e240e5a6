use std::fmt;

/// Ordered transformation tokens, applied left to right by the image service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformationChain {
    tokens: Vec<String>,
}

impl TransformationChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token at the end of the chain.
    pub fn push(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    /// Append `token` only when `enabled` holds.
    pub fn push_if(&mut self, enabled: bool, token: impl Into<String>) -> &mut Self {
        if enabled {
            self.tokens.push(token.into());
        }
        self
    }

    /// Tokens in application order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when no token has been pushed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Comma-joined wire form, e.g. `w-1000,h-1000,cm-extract`.
impl fmt::Display for TransformationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/chain.rs"]
mod tests;
