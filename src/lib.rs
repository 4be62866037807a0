pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod outcome;
pub mod pages;
pub mod prompt;
pub mod providers;
pub mod server;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{FormError, GeneratorError};
pub use form::{RecipeForm, RecipeRequest};
pub use outcome::RecipeOutcome;
pub use prompt::build_prompt;
pub use providers::{ProviderFactory, RecipeGenerator};
pub use server::{router, serve, AppState};
