use crate::form::RecipeRequest;

/// Build the instruction sent to the generation provider.
///
/// The base instruction names the target language and the comma-joined
/// ingredients. Cuisine and dietary restriction clauses are appended to the
/// last line only when present.
pub fn build_prompt(request: &RecipeRequest) -> String {
    let mut prompt = format!(
        "Write the following recipe in {}.\n\
         It should be styled as an HTML page.\n\
         The recipe is based on these ingredients: {}.\n\
         You may add supporting ingredients if necessary.\n\
         List the ingredients at the top, then the step-by-step instructions.",
        request.language_name,
        request.ingredients.join(", ")
    );

    if let Some(cuisine) = request.cuisine.as_deref().filter(|c| !c.is_empty()) {
        prompt.push_str(&format!(" The cuisine should be {cuisine}."));
    }

    if !request.restrictions.is_empty() {
        prompt.push_str(&format!(
            " Please follow these dietary restrictions: {}.",
            request.restrictions.join(", ")
        ));
    }

    prompt
}
