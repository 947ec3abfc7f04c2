use colored::Colorize;

use crate::model::Recipe;

/// Print a recipe to the terminal: header, diet tags, ingredient bullets,
/// numbered steps, tips, and the estimated nutrition block.
pub fn print_recipe(recipe: &Recipe) {
    println!("\n{}", format!("Recipe: {}", recipe.title).cyan().bold());

    println!(
        "Servings: {} | Difficulty: {} | Cuisine: {}",
        recipe.servings, recipe.difficulty, recipe.cuisine
    );
    println!(
        "Prep: {} | Cook: {} | Total: {}",
        recipe.prep_time, recipe.cook_time, recipe.total_time
    );
    if !recipe.diet_tags.is_empty() {
        println!("Tags: {}", recipe.diet_tags);
    }

    println!("\n{}", "Ingredients:".yellow());
    for ingredient in &recipe.ingredients {
        println!(" - {}", ingredient);
    }

    println!("\n{}", "Steps:".yellow());
    for (number, step) in recipe.steps.iter().enumerate() {
        println!("{}. {}", number + 1, step);
    }

    if !recipe.tips.is_empty() {
        println!("\n{}", "Tips:".yellow());
        for tip in &recipe.tips {
            println!(" - {}", tip);
        }
    }

    println!("\n{}", "Nutrition (estimated, per serving):".blue());
    println!(" Calories: {}", recipe.nutrition.calories);
    println!(" Protein: {}", recipe.nutrition.protein);
    println!(" Carbs: {}", recipe.nutrition.carbs);
    println!(" Fat: {}", recipe.nutrition.fat);
}
