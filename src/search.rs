use crate::model::Recipe;

/// Filter recipes by a free-text query.
///
/// A recipe matches when the lowercased query is contained in its title,
/// its description or any of its tags. Results keep the input order; an
/// empty or whitespace-only query returns every recipe.
pub fn filter_recipes<'a>(query: &str, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
    if query.trim().is_empty() {
        return recipes.iter().collect();
    }

    let query = query.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_query(recipe, &query))
        .collect()
}

/// `query` must already be lowercase
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.title.to_lowercase().contains(query)
        || recipe.description.to_lowercase().contains(query)
        || recipe
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}
