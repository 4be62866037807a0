use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::Form;
use log::{error, info, warn};
use tokio::net::TcpListener;

use crate::catalog::Catalog;
use crate::error::GeneratorError;
use crate::form::RecipeForm;
use crate::outcome::RecipeOutcome;
use crate::pages;
use crate::prompt::build_prompt;
use crate::providers::RecipeGenerator;

/// Immutable state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub generator: Arc<dyn RecipeGenerator>,
}

impl AppState {
    pub fn new(catalog: Catalog, generator: Arc<dyn RecipeGenerator>) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            generator,
        }
    }
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate_recipe", post(generate_recipe))
        .with_state(state)
}

/// Bind `address` and serve until Ctrl-C.
pub async fn serve(address: &str, state: AppState) -> Result<(), GeneratorError> {
    let listener = TcpListener::bind(address).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

fn html(page: askama::Result<String>) -> Response {
    match page {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn index(State(state): State<AppState>) -> Response {
    html(pages::index_page(&state.catalog))
}

async fn generate_recipe(State(state): State<AppState>, Form(form): Form<RecipeForm>) -> Response {
    let request = match form.validate(&state.catalog) {
        Ok(request) => request,
        Err(e) => return e.to_string().into_response(),
    };

    let prompt = build_prompt(&request);
    let outcome = RecipeOutcome::from_result(state.generator.generate(&prompt).await);
    if outcome.is_failure() {
        warn!(
            "{}: {}",
            state.generator.provider_name(),
            outcome.body()
        );
    }

    html(pages::recipe_page(&outcome))
}
