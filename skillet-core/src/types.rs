use serde::{Deserialize, Serialize};

/// Canonical recipe record as rendered by the UI.
///
/// Backend payloads arrive in a variety of shapes; `normalize` maps them all
/// onto this type. `ingredients` and `steps` are always present (possibly
/// empty) so consumers never have to handle a missing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Filters for the recipe list operation.
///
/// `None` or empty string means "no filter" for that field.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Free-text query, matched case-insensitively as a substring of the
    /// title, description, or any tag.
    pub query: Option<String>,
    /// Exact (case-insensitive) match against one tag.
    pub tag: Option<String>,
}

impl SearchCriteria {
    /// Criteria that match every recipe.
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether a recipe satisfies both filters.
    ///
    /// These are the same semantics the backend is expected to apply, so the
    /// mock fallback behaves like a healthy server would.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let query = self
            .query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .unwrap_or_default();
        let tag = self
            .tag
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .unwrap_or_default();

        let matches_query = query.is_empty()
            || recipe.title.to_lowercase().contains(&query)
            || recipe.description.to_lowercase().contains(&query)
            || recipe.tags.iter().any(|t| t.to_lowercase().contains(&query));

        let matches_tag = tag.is_empty() || recipe.tags.iter().any(|t| t.to_lowercase() == tag);

        matches_query && matches_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: "weeknight-curry".to_string(),
            title: "Weeknight Coconut Curry".to_string(),
            description: "A fast curry with pantry staples.".to_string(),
            image_url: None,
            tags: vec!["Quick".to_string(), "One-pot".to_string()],
            ingredients: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn test_empty_criteria_matches() {
        assert!(SearchCriteria::any().matches(&recipe()));
    }

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let criteria = SearchCriteria {
            query: Some("COCONUT".to_string()),
            tag: None,
        };
        assert!(criteria.matches(&recipe()));
    }

    #[test]
    fn test_query_matches_tag_substring() {
        let criteria = SearchCriteria {
            query: Some("one-p".to_string()),
            tag: None,
        };
        assert!(criteria.matches(&recipe()));
    }

    #[test]
    fn test_tag_requires_exact_match() {
        let exact = SearchCriteria {
            query: None,
            tag: Some("one-pot".to_string()),
        };
        assert!(exact.matches(&recipe()));

        let partial = SearchCriteria {
            query: None,
            tag: Some("one".to_string()),
        };
        assert!(!partial.matches(&recipe()));
    }

    #[test]
    fn test_both_filters_must_match() {
        let criteria = SearchCriteria {
            query: Some("curry".to_string()),
            tag: Some("dessert".to_string()),
        };
        assert!(!criteria.matches(&recipe()));
    }

    #[test]
    fn test_whitespace_only_query_is_no_filter() {
        let criteria = SearchCriteria {
            query: Some("   ".to_string()),
            tag: None,
        };
        assert!(criteria.matches(&recipe()));
    }
}
