//! Plain-text rendering of the list and detail views.
//!
//! Errors never reach here: a failed request surfaces through main and the
//! retry affordance is rerunning the command.

use skillet_core::Recipe;

/// Print the list view, or the empty state when nothing matched.
pub fn recipe_list(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes matched.");
        return;
    }

    for recipe in recipes {
        if recipe.tags.is_empty() {
            println!("{}  {}", recipe.id, recipe.title);
        } else {
            println!("{}  {}  [{}]", recipe.id, recipe.title, recipe.tags.join(", "));
        }
        if !recipe.description.is_empty() {
            println!("    {}", recipe.description);
        }
    }
}

/// Print the detail view: title, tags, ingredients, numbered steps.
pub fn recipe_detail(recipe: &Recipe) {
    println!("{}", recipe.title);
    if !recipe.tags.is_empty() {
        println!("[{}]", recipe.tags.join(", "));
    }
    if !recipe.description.is_empty() {
        println!("\n{}", recipe.description);
    }
    if let Some(image_url) = &recipe.image_url {
        println!("\nImage: {}", image_url);
    }

    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &recipe.ingredients {
            println!("  - {}", ingredient);
        }
    }

    if !recipe.steps.is_empty() {
        println!("\nSteps:");
        for (i, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
}
