//! Payload normalization.
//!
//! The backend's response shapes are not pinned down by any contract, so
//! every attribute is resolved through an ordered table of candidate field
//! names instead of assuming a schema. Missing or malformed fields degrade
//! to defaults; `ingredients` and `steps` always come back as sequences.

use serde_json::Value;

use crate::types::Recipe;

/// Title used when no title-like field is present.
pub const DEFAULT_TITLE: &str = "Untitled recipe";

/// Object fields that may hold the recipe array in a list payload.
const LIST_FIELDS: &[&str] = &["recipes", "items", "results"];

// Candidate source fields per attribute, consulted in priority order.
const ID_FIELDS: &[&str] = &["id", "recipe_id", "slug", "name"];
const TITLE_FIELDS: &[&str] = &["title", "name"];
const DESCRIPTION_FIELDS: &[&str] = &["description", "summary"];
const IMAGE_FIELDS: &[&str] = &["imageUrl", "image_url", "image", "photo"];
const TAG_FIELDS: &[&str] = &["tags", "categories", "cuisines"];
const INGREDIENT_FIELDS: &[&str] = &["ingredients", "ingredient_list", "ingredientLines", "items"];
const STEP_FIELDS: &[&str] = &["steps", "instructions", "directions", "method"];

/// Normalize a list payload into recipes.
///
/// Accepts a bare array or an object wrapping the array under `recipes`,
/// `items`, or `results`; any other shape yields an empty list.
pub fn recipes_from_list_payload(payload: &Value) -> Vec<Recipe> {
    unwrap_list(payload).iter().map(normalize_recipe).collect()
}

/// Normalize a detail payload into one recipe, unwrapping an optional
/// `recipe` wrapper object.
pub fn recipe_from_detail_payload(payload: &Value) -> Recipe {
    let raw = payload
        .get("recipe")
        .filter(|v| v.is_object())
        .unwrap_or(payload);
    normalize_recipe(raw)
}

fn unwrap_list(payload: &Value) -> &[Value] {
    if let Some(array) = payload.as_array() {
        return array;
    }
    for field in LIST_FIELDS {
        if let Some(array) = payload.get(field).and_then(Value::as_array) {
            return array;
        }
    }
    &[]
}

/// Map one raw recipe-like object onto the canonical [`Recipe`] shape.
pub fn normalize_recipe(raw: &Value) -> Recipe {
    Recipe {
        id: first_string(raw, ID_FIELDS).unwrap_or_default(),
        title: first_string(raw, TITLE_FIELDS).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: first_string(raw, DESCRIPTION_FIELDS).unwrap_or_default(),
        image_url: first_string(raw, IMAGE_FIELDS).filter(|s| !s.is_empty()),
        tags: first_array(raw, TAG_FIELDS)
            .map(|entries| string_entries(entries))
            .unwrap_or_default(),
        ingredients: first_array(raw, INGREDIENT_FIELDS)
            .map(|entries| flatten_entries(entries, "name"))
            .unwrap_or_default(),
        steps: first_array(raw, STEP_FIELDS)
            .map(|entries| flatten_entries(entries, "description"))
            .unwrap_or_default(),
    }
}

/// First candidate field that holds a string value.
fn first_string(raw: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|field| raw.get(field).and_then(Value::as_str))
        .map(|s| s.to_string())
}

/// First candidate field that holds an array value.
fn first_array<'a>(raw: &'a Value, candidates: &[&str]) -> Option<&'a Vec<Value>> {
    candidates
        .iter()
        .find_map(|field| raw.get(field).and_then(Value::as_array))
}

/// Tags keep only string entries, in received order.
fn string_entries(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter_map(Value::as_str)
        .map(|s| s.to_string())
        .collect()
}

/// Flatten ingredient/step entries to display strings.
///
/// Strings pass through. Objects try `text` first (the HowToStep-style
/// shape), then the given alternate key, then fall back to the stringified
/// value so the caller never sees a non-renderable entry.
fn flatten_entries(entries: &[Value], alternate_key: &str) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            Value::String(s) => s.clone(),
            Value::Object(obj) => obj
                .get("text")
                .and_then(Value::as_str)
                .or_else(|| obj.get(alternate_key).and_then(Value::as_str))
                .map(|s| s.to_string())
                .unwrap_or_else(|| entry.to_string()),
            other => other.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_from_bare_array() {
        let payload = json!([{"id": "a", "title": "A"}, {"id": "b", "title": "B"}]);
        let recipes = recipes_from_list_payload(&payload);
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "a");
        assert_eq!(recipes[1].title, "B");
    }

    #[test]
    fn test_list_from_items_wrapper() {
        let payload = json!({"items": [{"id": "a"}]});
        let recipes = recipes_from_list_payload(&payload);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "a");
    }

    #[test]
    fn test_list_wrapper_priority_order() {
        // "recipes" wins over "items" even when both are present
        let payload = json!({
            "items": [{"id": "wrong"}],
            "recipes": [{"id": "right"}]
        });
        let recipes = recipes_from_list_payload(&payload);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "right");
    }

    #[test]
    fn test_list_from_unknown_shape_is_empty() {
        assert!(recipes_from_list_payload(&json!({"total": 0})).is_empty());
        assert!(recipes_from_list_payload(&json!("nope")).is_empty());
        assert!(recipes_from_list_payload(&Value::Null).is_empty());
    }

    #[test]
    fn test_detail_unwraps_recipe_field() {
        let payload = json!({"recipe": {"id": "wrapped", "title": "Wrapped"}});
        let recipe = recipe_from_detail_payload(&payload);
        assert_eq!(recipe.id, "wrapped");
    }

    #[test]
    fn test_detail_without_wrapper() {
        let payload = json!({"id": "bare", "title": "Bare"});
        let recipe = recipe_from_detail_payload(&payload);
        assert_eq!(recipe.id, "bare");
    }

    #[test]
    fn test_id_alias_priority() {
        let recipe = normalize_recipe(&json!({"slug": "from-slug", "name": "From Name"}));
        assert_eq!(recipe.id, "from-slug");
        // name is still the title fallback
        assert_eq!(recipe.title, "From Name");

        let recipe = normalize_recipe(&json!({"recipe_id": "r-1", "slug": "ignored"}));
        assert_eq!(recipe.id, "r-1");
    }

    #[test]
    fn test_defaults_for_empty_object() {
        let recipe = normalize_recipe(&json!({}));
        assert_eq!(recipe.id, "");
        assert_eq!(recipe.title, DEFAULT_TITLE);
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.image_url, None);
        assert!(recipe.tags.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_missing_ingredient_aliases_yield_empty_sequence() {
        let recipe = normalize_recipe(&json!({
            "id": "x",
            "title": "X",
            "steps": ["only steps"]
        }));
        assert_eq!(recipe.ingredients, Vec::<String>::new());
        assert_eq!(recipe.steps, vec!["only steps"]);
    }

    #[test]
    fn test_malformed_ingredients_yield_empty_sequence() {
        // present but not an array: treated as missing
        let recipe = normalize_recipe(&json!({"id": "x", "ingredients": "2 eggs"}));
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_ingredient_aliases() {
        let recipe = normalize_recipe(&json!({"ingredient_list": ["1 cup flour"]}));
        assert_eq!(recipe.ingredients, vec!["1 cup flour"]);

        let recipe = normalize_recipe(&json!({"ingredientLines": ["2 eggs"]}));
        assert_eq!(recipe.ingredients, vec!["2 eggs"]);

        let recipe = normalize_recipe(&json!({"items": ["a pinch of salt"]}));
        assert_eq!(recipe.ingredients, vec!["a pinch of salt"]);
    }

    #[test]
    fn test_step_aliases() {
        let recipe = normalize_recipe(&json!({"instructions": ["Mix.", "Bake."]}));
        assert_eq!(recipe.steps, vec!["Mix.", "Bake."]);

        let recipe = normalize_recipe(&json!({"method": ["Stir."]}));
        assert_eq!(recipe.steps, vec!["Stir."]);
    }

    #[test]
    fn test_object_entries_flattened_via_text() {
        let recipe = normalize_recipe(&json!({
            "steps": [
                {"@type": "HowToStep", "text": "Preheat oven to 350."},
                "Then bake."
            ]
        }));
        assert_eq!(recipe.steps, vec!["Preheat oven to 350.", "Then bake."]);
    }

    #[test]
    fn test_object_entries_flattened_via_alternate_key() {
        let recipe = normalize_recipe(&json!({
            "ingredients": [{"name": "1 ripe avocado", "amount": 1}]
        }));
        assert_eq!(recipe.ingredients, vec!["1 ripe avocado"]);
    }

    #[test]
    fn test_unrecognized_entries_stringified() {
        let recipe = normalize_recipe(&json!({"ingredients": [{"qty": 2}, 7]}));
        assert_eq!(recipe.ingredients, vec![r#"{"qty":2}"#, "7"]);
    }

    #[test]
    fn test_tags_keep_received_order() {
        let recipe = normalize_recipe(&json!({"categories": ["Dinner", "Quick", "Vegan"]}));
        assert_eq!(recipe.tags, vec!["Dinner", "Quick", "Vegan"]);
    }

    #[test]
    fn test_image_aliases_and_empty_string() {
        let recipe = normalize_recipe(&json!({"image": "https://img.test/a.jpg"}));
        assert_eq!(recipe.image_url.as_deref(), Some("https://img.test/a.jpg"));

        let recipe = normalize_recipe(&json!({"photo": ""}));
        assert_eq!(recipe.image_url, None);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = json!({
            "recipe_id": "soup-01",
            "name": "Miso Soup",
            "summary": "Light and quick.",
            "image": "https://img.test/soup.jpg",
            "cuisines": ["Japanese"],
            "ingredientLines": ["miso paste", {"name": "tofu"}],
            "directions": [{"text": "Simmer."}, "Serve."]
        });

        let once = normalize_recipe(&raw);
        let round_tripped = serde_json::to_value(&once).unwrap();
        let twice = normalize_recipe(&round_tripped);

        assert_eq!(once, twice);
    }
}
