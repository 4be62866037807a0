//! HTML for the two pages the service serves.

use askama::Template;

use crate::catalog::Catalog;
use crate::form::REQUIRED_INGREDIENTS;
use crate::outcome::RecipeOutcome;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    ingredient_numbers: Vec<usize>,
    cuisines: &'a [String],
    restrictions: &'a [String],
    languages: &'a [(String, String)],
}

impl<'a> IndexTemplate<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            ingredient_numbers: (1..=REQUIRED_INGREDIENTS).collect(),
            cuisines: catalog.cuisines(),
            restrictions: catalog.restrictions(),
            languages: catalog.languages(),
        }
    }
}

/// Generated recipes are HTML already and go in unescaped; failure text is escaped.
#[derive(Template)]
#[template(path = "recipe.html")]
pub struct RecipeTemplate<'a> {
    generated: Option<&'a str>,
    error: String,
}

impl<'a> RecipeTemplate<'a> {
    pub fn new(outcome: &'a RecipeOutcome) -> Self {
        match outcome {
            RecipeOutcome::Generated(recipe) => Self {
                generated: Some(recipe.as_str()),
                error: String::new(),
            },
            RecipeOutcome::Failed(_) => Self {
                generated: None,
                error: outcome.body(),
            },
        }
    }
}

pub fn index_page(catalog: &Catalog) -> askama::Result<String> {
    IndexTemplate::new(catalog).render()
}

pub fn recipe_page(outcome: &RecipeOutcome) -> askama::Result<String> {
    RecipeTemplate::new(outcome).render()
}
