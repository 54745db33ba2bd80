//! Fluent builder for configurations

use std::sync::Arc;

use super::enums::EvalOption;
use super::types::Configuration;
use crate::listener::EvaluationListener;
use crate::mapper::{MappingProvider, SerdeMappingProvider};
use crate::provider::{JsonProvider, SerdeJsonProvider};

/// Builder collecting providers, options and listeners
#[derive(Clone)]
pub struct ConfigurationBuilder {
    json_provider: Arc<dyn JsonProvider>,
    mapping_provider: Arc<dyn MappingProvider>,
    options: Vec<EvalOption>,
    listeners: Vec<Arc<dyn EvaluationListener>>,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self {
            json_provider: Arc::new(SerdeJsonProvider::new()),
            mapping_provider: Arc::new(SerdeMappingProvider::new()),
            options: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl ConfigurationBuilder {
    /// Provider used to parse input and serialise documents
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use pathwise_core::config::Configuration;
    /// use pathwise_core::provider::SerdeJsonProvider;
    ///
    /// let config = Configuration::builder()
    ///     .with_json_provider(Arc::new(SerdeJsonProvider::pretty()))
    ///     .build();
    /// assert!(config.options().is_empty());
    /// ```
    #[must_use]
    pub fn with_json_provider(mut self, provider: Arc<dyn JsonProvider>) -> Self {
        self.json_provider = provider;
        self
    }

    /// Provider used by typed reads
    #[must_use]
    pub fn with_mapping_provider(mut self, provider: Arc<dyn MappingProvider>) -> Self {
        self.mapping_provider = provider;
        self
    }

    /// Replace the option set
    ///
    /// # Examples
    /// ```no_run
    /// use pathwise_core::config::{Configuration, EvalOption};
    ///
    /// let config = Configuration::builder()
    ///     .with_options(&[EvalOption::SuppressExceptions])
    ///     .build();
    /// assert!(config.contains_option(EvalOption::SuppressExceptions));
    /// ```
    #[must_use]
    pub fn with_options(mut self, options: &[EvalOption]) -> Self {
        self.options.clear();
        for option in options {
            if !self.options.contains(option) {
                self.options.push(*option);
            }
        }
        self
    }

    /// Replace the listener list
    #[must_use]
    pub fn with_evaluation_listeners(
        mut self,
        listeners: impl IntoIterator<Item = Arc<dyn EvaluationListener>>,
    ) -> Self {
        self.listeners = listeners.into_iter().collect();
        self
    }

    #[must_use]
    pub fn build(self) -> Configuration {
        Configuration::default()
            .with_json_provider(self.json_provider)
            .with_mapping_provider(self.mapping_provider)
            .set_options(&self.options)
            .set_evaluation_listeners(self.listeners)
    }
}
