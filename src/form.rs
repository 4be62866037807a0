use log::info;
use serde::{Deserialize, Deserializer};

use crate::catalog::Catalog;
use crate::error::FormError;

pub const REQUIRED_INGREDIENTS: usize = 3;

/// Raw `POST /generate_recipe` payload.
///
/// `ingredient` and `restrictions` are repeated keys in the urlencoded body.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RecipeForm {
    #[serde(default)]
    pub ingredient: Vec<String>,
    #[serde(default, deserialize_with = "first_value")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default, deserialize_with = "first_or_empty")]
    pub language: String,
}

/// Single-valued fields keep the first occurrence when a key is repeated.
fn first_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<String>::deserialize(deserializer)?.into_iter().next())
}

fn first_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(first_value(deserializer)?.unwrap_or_default())
}

/// A validated submission with the language already resolved to its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    pub language_name: String,
    pub cuisine: Option<String>,
    pub restrictions: Vec<String>,
}

impl RecipeForm {
    pub fn validate(self, catalog: &Catalog) -> Result<RecipeRequest, FormError> {
        info!("selected_cuisine: {}", self.cuisine.as_deref().unwrap_or(""));
        info!("selected_restrictions: {:?}", self.restrictions);
        info!("selected_language: {}", self.language);

        if self.ingredient.len() != REQUIRED_INGREDIENTS {
            return Err(FormError::IngredientCount(self.ingredient.len()));
        }

        let language_name = catalog.language_name(&self.language).to_string();

        Ok(RecipeRequest {
            ingredients: self.ingredient,
            language_name,
            cuisine: self.cuisine.filter(|c| !c.is_empty()),
            restrictions: self.restrictions,
        })
    }
}
