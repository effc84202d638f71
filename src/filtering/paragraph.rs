//! paragraph-level filtering
use super::Filter;

/// Keeps tokenized paragraphs that have at least [MinTokens::min_tokens] tokens.
///
/// [MinTokens::min_tokens] is 1 by default, which only drops empty paragraphs.
pub struct MinTokens {
    min_tokens: usize,
}

impl MinTokens {
    /// specify a minimum number of tokens
    pub fn with_min_tokens(min_tokens: usize) -> Self {
        Self { min_tokens }
    }

    /// Get a reference to the filter's min tokens.
    pub fn min_tokens(&self) -> &usize {
        &self.min_tokens
    }
}

impl Filter<&str> for MinTokens {
    /// Tokens of a corpus line are space separated.
    fn detect(&self, line: &str) -> bool {
        let min = self.min_tokens.max(1);
        line.split_whitespace().take(min).count() >= min
    }
}

impl Default for MinTokens {
    fn default() -> Self {
        MinTokens { min_tokens: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, MinTokens};

    #[test]
    fn default_drops_empty() {
        let f = MinTokens::default();
        assert_eq!(*f.min_tokens(), 1);
        assert!(f.detect("Hann var þríkvæntur ."));
        assert!(f.detect("Já"));
        assert!(!f.detect(""));
        assert!(!f.detect("   "));
    }

    #[test]
    fn custom_min() {
        let f = MinTokens::with_min_tokens(3);
        assert!(f.detect("Hann var þríkvæntur"));
        assert!(!f.detect("Hann var"));
    }

    #[test]
    fn zero_still_drops_empty() {
        let f = MinTokens::with_min_tokens(0);
        assert!(!f.detect(""));
        assert!(f.detect("a"));
    }
}
