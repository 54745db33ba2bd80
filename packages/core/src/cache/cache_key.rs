//! Cache key derivation

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

/// Trimmed path text plus the ordered predicate signatures
///
/// Keeping the parts separate makes keys collision free: no choice of path
/// text can imitate a different predicate list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    path: String,
    predicates: Vec<String>,
}

impl CacheKey {
    #[must_use]
    pub fn new(path: &str, predicates: &[Arc<dyn Predicate>]) -> Self {
        Self {
            path: path.trim().to_string(),
            predicates: predicates.iter().map(|p| p.signature()).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn predicate_signatures(&self) -> &[String] {
        &self.predicates
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.path, self.predicates.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Filter;

    fn filter(name: &str) -> Arc<dyn Predicate> {
        Arc::new(Filter::from_fn(name, |_| true))
    }

    #[test]
    fn path_text_is_trimmed() {
        assert_eq!(CacheKey::new("  $.a ", &[]), CacheKey::new("$.a", &[]));
    }

    #[test]
    fn predicate_order_matters() {
        let (a, b) = (filter("a"), filter("b"));
        let ab = CacheKey::new("$[?][?]", &[Arc::clone(&a), Arc::clone(&b)]);
        let ba = CacheKey::new("$[?][?]", &[b, a]);
        assert_ne!(ab, ba);
        assert!(ab.to_string().starts_with("$[?][?][a#"));
    }

    #[test]
    fn shared_predicate_instance_reuses_key() {
        let a = filter("a");
        assert_eq!(
            CacheKey::new("$[?]", &[Arc::clone(&a)]),
            CacheKey::new("$[?]", &[a])
        );
        assert_ne!(CacheKey::new("$[?]", &[filter("a")]), CacheKey::new("$[?]", &[filter("a")]));
    }
}
