use std::fmt::Display;

/// What the recipe page shows: generated HTML, or the reason generation failed.
///
/// Both variants render with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeOutcome {
    Generated(String),
    Failed(String),
}

impl RecipeOutcome {
    pub fn from_result<E: Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(recipe) => RecipeOutcome::Generated(recipe),
            Err(e) => RecipeOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RecipeOutcome::Failed(_))
    }

    /// Text placed in the recipe slot of the page.
    pub fn body(&self) -> String {
        match self {
            RecipeOutcome::Generated(recipe) => recipe.clone(),
            RecipeOutcome::Failed(message) => format!("Error generating recipe: {message}"),
        }
    }
}
