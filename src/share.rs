use crate::model::Recipe;

/// Payload handed to the platform share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContent {
    pub title: String,
    pub message: String,
}

impl ShareContent {
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            message: format!(
                "Check out this recipe: {}\n\n{}",
                recipe.title, recipe.description
            ),
        }
    }
}
