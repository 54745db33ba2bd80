//! Default configuration

use std::sync::Arc;

use super::types::{Configuration, ConfigurationInner};
use crate::mapper::SerdeMappingProvider;
use crate::provider::SerdeJsonProvider;

impl Default for Configuration {
    /// `serde_json` provider and mapper, no options, no listeners
    fn default() -> Self {
        Self {
            inner: Arc::new(ConfigurationInner {
                json_provider: Arc::new(SerdeJsonProvider::new()),
                mapping_provider: Arc::new(SerdeMappingProvider::new()),
                options: Vec::new(),
                listeners: Vec::new(),
            }),
        }
    }
}

impl Configuration {
    /// Same as [`Configuration::default`]
    #[must_use]
    pub fn default_configuration() -> Self {
        Self::default()
    }

    /// Start building a configuration from the defaults
    #[must_use]
    pub fn builder() -> super::ConfigurationBuilder {
        super::ConfigurationBuilder::default()
    }
}
