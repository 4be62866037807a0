use thiserror::Error;

/// Errors that can occur while talking to a generation provider or starting the service
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Failed to reach the provider or read its response
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with an error object
    #[error("API error ({code}): {message}")]
    Api { code: i64, message: String },

    /// The provider answered, but without any generated text
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Provider could not be built from configuration
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Binding or serving the HTTP listener failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a submitted form is rejected before any prompt is built
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Kindly provide exactly 3 ingredients.")]
    IngredientCount(usize),
}
