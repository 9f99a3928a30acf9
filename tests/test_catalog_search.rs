use recipe_box::{filter_recipes, Catalog, Difficulty, FavoritesStore, Recipe};
use std::collections::HashSet;

fn recipe(id: &str, title: &str, tags: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Description of {}", title),
        image: String::new(),
        prep_time: 5,
        cook_time: 5,
        servings: 1,
        difficulty: Difficulty::Medium,
        ingredients: Vec::new(),
        steps: Vec::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Fake store that never touches storage
struct FixedFavorites(HashSet<String>);

#[async_trait::async_trait]
impl FavoritesStore for FixedFavorites {
    async fn load(&self) {}

    fn is_ready(&self) -> bool {
        true
    }

    fn is_saved(&self, recipe_id: &str) -> bool {
        self.0.contains(recipe_id)
    }

    async fn toggle(&self, recipe_id: &str) -> bool {
        !self.is_saved(recipe_id)
    }

    fn saved_ids(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

#[test]
fn test_empty_query_returns_full_catalog() {
    let catalog = Catalog::bundled().unwrap();
    let all: Vec<&str> = catalog.search("").into_iter().map(|r| r.id.as_str()).collect();
    let expected: Vec<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(all, expected);
}

#[test]
fn test_uppercase_query_matches_title() {
    let catalog = Catalog::bundled().unwrap();
    let results = catalog.search("CHICKEN");
    assert!(results.iter().any(|r| r.title == "Classic Chicken Soup"));
}

#[test]
fn test_tag_only_match() {
    let recipes = vec![recipe("A", "Omelette", &["quick"]), recipe("B", "Stew", &["slow"])];
    let results = filter_recipes("slow", &recipes);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "B");
}

#[test]
fn test_results_keep_catalog_order() {
    let catalog = Catalog::bundled().unwrap();
    let ids: Vec<&str> = catalog
        .search("dinner")
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3", "5"]);
}

#[test]
fn test_saved_with_fake_store() {
    let catalog = Catalog::new(vec![
        recipe("A", "Omelette", &["quick"]),
        recipe("B", "Stew", &["slow"]),
        recipe("C", "Toast", &["quick"]),
    ])
    .unwrap();
    let favorites = FixedFavorites(["C", "A"].iter().map(|s| s.to_string()).collect());

    let saved: Vec<&str> = catalog
        .saved(&favorites)
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(saved, vec!["A", "C"]);
}

#[test]
fn test_lookup_by_id() {
    let catalog = Catalog::bundled().unwrap();
    let recipe = catalog.get("4").unwrap();
    assert_eq!(recipe.title, "Greek Salad");
    assert_eq!(recipe.total_time(), 15);
    assert_eq!(recipe.difficulty.label(), "Easy");
    assert!(catalog.get("").is_none());
}
