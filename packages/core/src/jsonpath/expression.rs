//! Compiled path expression

use std::fmt;

use super::ast::JsonSelector;

/// Parsed selector chain of a path expression
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPathExpression {
    selectors: Vec<JsonSelector>,
    original: String,
    definite: bool,
    predicate_slots: usize,
}

impl JsonPathExpression {
    pub(crate) fn new(
        selectors: Vec<JsonSelector>,
        original: String,
        predicate_slots: usize,
    ) -> Self {
        let definite = selectors.iter().all(JsonSelector::is_definite);
        Self {
            selectors,
            original,
            definite,
            predicate_slots,
        }
    }

    #[inline]
    #[must_use]
    pub fn selectors(&self) -> &[JsonSelector] {
        &self.selectors
    }

    /// The (trimmed) text this expression was compiled from
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Whether the expression can match at most one node
    ///
    /// Wildcards, slices, filters, `[?]` placeholders, recursive descent and
    /// unions all make an expression indefinite.
    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        self.definite
    }

    /// Number of `[?]` placeholders, each bound to one supplied predicate
    #[inline]
    #[must_use]
    pub fn predicate_slots(&self) -> usize {
        self.predicate_slots
    }

    /// Whether the expression addresses only the document root
    #[inline]
    #[must_use]
    pub fn is_root_only(&self) -> bool {
        matches!(self.selectors.as_slice(), [JsonSelector::Root])
    }
}

impl fmt::Display for JsonPathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for selector in &self.selectors {
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}
