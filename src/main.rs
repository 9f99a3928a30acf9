use log::{debug, error};
use std::env;

use recipe_box::{AppConfig, AppError, FavoritesStore, Recipe, ShareContent};

const USAGE: &str = "Usage: recipe-box <list | search QUERY | show ID | toggle ID | saved | share ID>";

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run(env::args().skip(1).collect()).await {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Vec<String>) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    debug!("{:#?}", config);

    let (catalog, saved) = recipe_box::open(&config).await?;

    let command = args.first().map(String::as_str);
    let argument = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();

    match command {
        Some("list") => print_list(catalog.recipes().iter(), &saved),
        Some("search") => print_list(catalog.search(&argument).into_iter(), &saved),
        Some("show") => match catalog.get(&argument) {
            Some(recipe) => print_detail(recipe, saved.is_saved(&recipe.id)),
            None => println!("Recipe not found"),
        },
        Some("toggle") => {
            if catalog.get(&argument).is_none() {
                println!("Recipe not found");
            } else if saved.toggle(&argument).await {
                println!("Saved recipe {}", argument);
            } else {
                println!("Removed recipe {} from saved", argument);
            }
        }
        Some("saved") => {
            let recipes = catalog.saved(&saved);
            if recipes.is_empty() {
                println!("No Saved Recipes");
            } else {
                println!("Saved Recipes ({})", recipes.len());
                print_list(recipes.into_iter(), &saved);
            }
        }
        Some("share") => match catalog.get(&argument) {
            Some(recipe) => println!("{}", ShareContent::for_recipe(recipe).message),
            None => println!("Recipe not found"),
        },
        _ => return Err(AppError::Usage(USAGE.to_string())),
    }

    Ok(())
}

fn print_list<'a>(recipes: impl Iterator<Item = &'a Recipe>, saved: &dyn FavoritesStore) {
    let mut empty = true;
    for recipe in recipes {
        empty = false;
        let marker = if saved.is_saved(&recipe.id) { "♥" } else { " " };
        println!(
            "{} [{}] {} - {} min, serves {}, {}",
            marker,
            recipe.id,
            recipe.title,
            recipe.total_time(),
            recipe.servings,
            recipe.difficulty
        );
    }
    if empty {
        println!("No recipes found");
    }
}

fn print_detail(recipe: &Recipe, is_saved: bool) {
    println!("{}{}", recipe.title, if is_saved { " ♥" } else { "" });
    println!("{}\n", recipe.description);
    println!(
        "Total Time: {} min | Servings: {} | Difficulty: {}\n",
        recipe.total_time(),
        recipe.servings,
        recipe.difficulty.label()
    );

    println!("Ingredients");
    for ingredient in &recipe.ingredients {
        println!("  • {} ({})", ingredient.name, ingredient.quantity());
    }

    println!("\nCooking Steps");
    for (index, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }

    if !recipe.tags.is_empty() {
        println!("\nTags: {}", recipe.tags.join(", "));
    }
}
