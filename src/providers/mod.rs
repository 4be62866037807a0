mod factory;
mod google;

pub use factory::ProviderFactory;
pub use google::GoogleProvider;

use async_trait::async_trait;

use crate::error::GeneratorError;

/// A generative-text service that turns a prompt into a recipe
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Send the prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
