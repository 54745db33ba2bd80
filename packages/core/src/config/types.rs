//! Configuration type and derivation helpers

use std::fmt;
use std::sync::Arc;

use super::enums::EvalOption;
use crate::listener::EvaluationListener;
use crate::mapper::MappingProvider;
use crate::provider::JsonProvider;

/// Immutable evaluation settings bound to a document context
#[derive(Clone)]
pub struct Configuration {
    pub(super) inner: Arc<ConfigurationInner>,
}

#[derive(Clone)]
pub(super) struct ConfigurationInner {
    pub(super) json_provider: Arc<dyn JsonProvider>,
    pub(super) mapping_provider: Arc<dyn MappingProvider>,
    /// Insertion ordered, without duplicates
    pub(super) options: Vec<EvalOption>,
    pub(super) listeners: Vec<Arc<dyn EvaluationListener>>,
}

impl Configuration {
    #[inline]
    #[must_use]
    pub fn json_provider(&self) -> &Arc<dyn JsonProvider> {
        &self.inner.json_provider
    }

    #[inline]
    #[must_use]
    pub fn mapping_provider(&self) -> &Arc<dyn MappingProvider> {
        &self.inner.mapping_provider
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &[EvalOption] {
        &self.inner.options
    }

    #[inline]
    #[must_use]
    pub fn contains_option(&self, option: EvalOption) -> bool {
        self.inner.options.contains(&option)
    }

    #[inline]
    #[must_use]
    pub fn evaluation_listeners(&self) -> &[Arc<dyn EvaluationListener>] {
        &self.inner.listeners
    }

    /// New configuration using `provider` for parsing and serialisation
    #[must_use]
    pub fn with_json_provider(&self, provider: Arc<dyn JsonProvider>) -> Self {
        self.derive(|inner| inner.json_provider = provider)
    }

    /// New configuration using `provider` for typed reads
    #[must_use]
    pub fn with_mapping_provider(&self, provider: Arc<dyn MappingProvider>) -> Self {
        self.derive(|inner| inner.mapping_provider = provider)
    }

    /// New configuration with `options` added to the current ones
    #[must_use]
    pub fn add_options(&self, options: &[EvalOption]) -> Self {
        self.derive(|inner| {
            for option in options {
                if !inner.options.contains(option) {
                    inner.options.push(*option);
                }
            }
        })
    }

    /// New configuration with exactly `options`
    #[must_use]
    pub fn set_options(&self, options: &[EvalOption]) -> Self {
        self.derive(|inner| {
            inner.options.clear();
            for option in options {
                if !inner.options.contains(option) {
                    inner.options.push(*option);
                }
            }
        })
    }

    /// New configuration with `listeners` appended after the current ones
    #[must_use]
    pub fn add_evaluation_listeners(
        &self,
        listeners: impl IntoIterator<Item = Arc<dyn EvaluationListener>>,
    ) -> Self {
        self.derive(|inner| inner.listeners.extend(listeners))
    }

    /// New configuration with exactly `listeners`
    #[must_use]
    pub fn set_evaluation_listeners(
        &self,
        listeners: impl IntoIterator<Item = Arc<dyn EvaluationListener>>,
    ) -> Self {
        self.derive(|inner| inner.listeners = listeners.into_iter().collect())
    }

    fn derive(&self, change: impl FnOnce(&mut ConfigurationInner)) -> Self {
        let mut inner = ConfigurationInner::clone(&self.inner);
        change(&mut inner);
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("json_provider", &self.inner.json_provider)
            .field("mapping_provider", &self.inner.mapping_provider)
            .field("options", &self.inner.options)
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::{EvaluationContinuation, FoundResult};

    #[test]
    fn derivation_never_changes_the_original() {
        let base = Configuration::default();
        let derived = base
            .add_options(&[EvalOption::AsPathList, EvalOption::AsPathList])
            .add_evaluation_listeners([Arc::new(|_: &FoundResult<'_>| {
                EvaluationContinuation::Continue
            }) as Arc<dyn EvaluationListener>]);

        assert!(base.options().is_empty());
        assert!(base.evaluation_listeners().is_empty());
        assert_eq!(derived.options(), &[EvalOption::AsPathList]);
        assert_eq!(derived.evaluation_listeners().len(), 1);
    }

    #[test]
    fn set_options_replaces() {
        let config = Configuration::default()
            .add_options(&[EvalOption::AsPathList])
            .set_options(&[EvalOption::SuppressExceptions]);
        assert!(!config.contains_option(EvalOption::AsPathList));
        assert!(config.contains_option(EvalOption::SuppressExceptions));
    }
}
