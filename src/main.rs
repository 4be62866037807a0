use log::{info, warn};

use recipe_generator::{serve, AppConfig, AppState, Catalog, GeneratorError, ProviderFactory};

#[tokio::main]
async fn main() -> Result<(), GeneratorError> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    if config.provider.api_key.is_none() && std::env::var("GEMINI_API_KEY").is_err() {
        warn!("GEMINI_API_KEY is not set; recipe generation will fail");
    }

    let generator = ProviderFactory::create(&config.provider)?;
    info!(
        "Using provider '{}' with model '{}'",
        generator.provider_name(),
        config.provider.model
    );

    let state = AppState::new(Catalog::default(), generator);
    serve(&config.server.bind_address(), state).await
}
