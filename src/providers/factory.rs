use crate::config::ProviderConfig;
use crate::error::GeneratorError;
use crate::providers::{GoogleProvider, RecipeGenerator};
use std::sync::Arc;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(config: &ProviderConfig) -> Result<Arc<dyn RecipeGenerator>, GeneratorError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(GeneratorError::Provider(format!(
                "Provider '{}' is not enabled in configuration",
                config.name
            )));
        }

        match config.name.as_str() {
            "google" => Ok(Arc::new(GoogleProvider::new(config))),
            other => Err(GeneratorError::Provider(format!(
                "Unknown provider: {}",
                other
            ))),
        }
    }
}
