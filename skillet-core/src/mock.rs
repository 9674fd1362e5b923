//! Built-in fallback dataset.
//!
//! Keeps the client functional while the backend's recipe endpoints are
//! unimplemented or unreachable. Read-only; filtered per request with the
//! same query/tag semantics a healthy backend would apply.

use std::sync::LazyLock;

use crate::types::{Recipe, SearchCriteria};

static MOCK_RECIPES: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe {
            id: "classic-avocado-toast".to_string(),
            title: "Classic Avocado Toast".to_string(),
            description: "Crispy toast topped with creamy avocado, lemon, and chili flakes."
                .to_string(),
            image_url: None,
            tags: vec!["Quick".to_string(), "Vegetarian".to_string()],
            ingredients: vec![
                "2 slices sourdough bread".to_string(),
                "1 ripe avocado".to_string(),
                "1 tsp lemon juice".to_string(),
                "Pinch of salt".to_string(),
                "Chili flakes (optional)".to_string(),
                "Olive oil (optional)".to_string(),
            ],
            steps: vec![
                "Toast the bread until golden and crisp.".to_string(),
                "Mash avocado with lemon juice and salt.".to_string(),
                "Spread avocado over toast and drizzle with olive oil if desired.".to_string(),
                "Finish with chili flakes and serve immediately.".to_string(),
            ],
        },
        Recipe {
            id: "one-pot-tomato-pasta".to_string(),
            title: "One-Pot Tomato Basil Pasta".to_string(),
            description: "A weeknight-friendly pasta with tomatoes, garlic, and basil.".to_string(),
            image_url: None,
            tags: vec!["One-pot".to_string(), "Comfort".to_string()],
            ingredients: vec![
                "200g spaghetti".to_string(),
                "2 cups cherry tomatoes, halved".to_string(),
                "2 cloves garlic, sliced".to_string(),
                "2 tbsp olive oil".to_string(),
                "2.5 cups water or stock".to_string(),
                "Handful of basil".to_string(),
                "Salt & pepper".to_string(),
            ],
            steps: vec![
                "Add pasta, tomatoes, garlic, olive oil, and water/stock to a pot.".to_string(),
                "Bring to a boil, then reduce to a simmer, stirring often.".to_string(),
                "Cook until pasta is al dente and liquid reduces to a light sauce.".to_string(),
                "Season, toss with basil, and serve.".to_string(),
            ],
        },
    ]
});

/// The full fallback dataset.
pub fn all() -> &'static [Recipe] {
    &MOCK_RECIPES
}

/// Fallback dataset filtered by the given criteria.
pub fn filter(criteria: &SearchCriteria) -> Vec<Recipe> {
    MOCK_RECIPES
        .iter()
        .filter(|recipe| criteria.matches(recipe))
        .cloned()
        .collect()
}

/// Look up one fallback recipe by exact id.
pub fn find(id: &str) -> Option<Recipe> {
    MOCK_RECIPES.iter().find(|recipe| recipe.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_dataset_is_everything() {
        let matched = filter(&SearchCriteria::any());
        assert_eq!(matched.len(), 2);
        assert_eq!(matched, all());
    }

    #[test]
    fn test_query_filter() {
        let criteria = SearchCriteria {
            query: Some("avocado".to_string()),
            tag: None,
        };
        let matched = filter(&criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "classic-avocado-toast");
    }

    #[test]
    fn test_tag_filter() {
        let criteria = SearchCriteria {
            query: None,
            tag: Some("One-pot".to_string()),
        };
        let matched = filter(&criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "one-pot-tomato-pasta");
    }

    #[test]
    fn test_no_match_is_empty() {
        let criteria = SearchCriteria {
            query: Some("sushi".to_string()),
            tag: None,
        };
        assert!(filter(&criteria).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let recipe = find("classic-avocado-toast").unwrap();
        assert_eq!(recipe.steps.len(), 4);
        assert_eq!(recipe.steps[0], "Toast the bread until golden and crisp.");

        assert!(find("does-not-exist").is_none());
    }
}
