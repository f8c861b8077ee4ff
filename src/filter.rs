//! In-memory search and category filtering over a catalog snapshot.
//!
//! Matching is case-insensitive via simple Unicode lowercasing. Neither the
//! query nor the category is trimmed: whitespace filters literally.

use crate::models::Product;

/// Return the products whose title contains `query` and whose category equals
/// `category`, both case-insensitively, in input order.
///
/// An empty query matches everything; a `None` or empty category matches
/// everything.
pub fn filter<'a>(catalog: &'a [Product], query: &str, category: Option<&str>) -> Vec<&'a Product> {
    let query_lower = query.to_lowercase();
    let category_lower = category.filter(|c| !c.is_empty()).map(str::to_lowercase);

    catalog
        .iter()
        .filter(|p| {
            if !p.title.to_lowercase().contains(&query_lower) {
                return false;
            }
            if let Some(cat) = &category_lower {
                if p.category.to_lowercase() != *cat {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Distinct categories in order of first appearance.
pub fn unique_categories(catalog: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for p in catalog {
        if !seen.iter().any(|c| c == &p.category) {
            seen.push(p.category.clone());
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// Search box text and selected category for one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn select_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    pub fn clear_category(&mut self) {
        self.category.clear();
    }

    /// True when either the query or the category narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.category.is_empty()
    }

    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        filter(catalog, &self.query, Some(self.category.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Shirt", "men"),
            product(2, "Hat", "women"),
            product(3, "Sweatshirt", "Men"),
            product(4, "Ring", "jewelery"),
        ]
    }

    #[test]
    fn query_matches_title_substring_case_insensitively() {
        let c = sample();
        assert_eq!(ids(&filter(&c, "SHIRT", None)), vec![1, 3]);
        assert_eq!(ids(&filter(&c, "sh", None)), vec![1, 3]);
        assert!(filter(&c, "sock", None).is_empty());
    }

    #[test]
    fn category_matches_exactly_ignoring_case() {
        let c = sample();
        assert_eq!(ids(&filter(&c, "", Some("men"))), vec![1, 3]);
        assert_eq!(ids(&filter(&c, "", Some("WOMEN"))), vec![2]);
        // exact, not substring
        assert!(filter(&c, "", Some("me")).is_empty());
    }

    #[test]
    fn empty_filters_are_identity() {
        let c = sample();
        assert_eq!(ids(&filter(&c, "", Some(""))), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter(&c, "", None)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let c = vec![product(1, "Rain Jacket", "men"), product(2, "Jacket", "men")];
        assert_eq!(ids(&filter(&c, " ", None)), vec![1]);
        assert!(filter(&c, "", Some(" men")).is_empty());
    }

    #[test]
    fn unicode_titles_are_lowercased() {
        let c = vec![product(1, "ÉCHARPE", "accessories")];
        assert_eq!(ids(&filter(&c, "écharpe", None)), vec![1]);
        // no diacritic folding
        assert!(filter(&c, "echarpe", None).is_empty());
    }

    #[test]
    fn scenario_shirt_and_hat() {
        let c = vec![product(1, "Shirt", "men"), product(2, "Hat", "women")];
        assert_eq!(ids(&filter(&c, "sh", None)), vec![1]);
        assert_eq!(ids(&filter(&c, "", Some("women"))), vec![2]);
        assert!(filter(&c, "sh", Some("women")).is_empty());
    }

    #[test]
    fn missing_title_only_matches_empty_query() {
        let c = vec![product(1, "", "men")];
        assert_eq!(ids(&filter(&c, "", None)), vec![1]);
        assert!(filter(&c, "a", None).is_empty());
    }

    #[test]
    fn unique_categories_first_seen_order() {
        let c = vec![product(1, "x", "a"), product(2, "y", "b"), product(3, "z", "a")];
        assert_eq!(unique_categories(&c), vec!["a", "b"]);
        assert!(unique_categories(&[]).is_empty());
    }

    #[test]
    fn unique_categories_is_case_sensitive() {
        // distinct labels, even though filtering treats them as one
        assert_eq!(unique_categories(&sample()), vec!["men", "women", "Men", "jewelery"]);
    }

    #[test]
    fn filter_state_select_and_clear() {
        let c = sample();
        let mut state = FilterState::new();
        assert!(!state.is_active());
        state.select_category("men");
        state.set_query("sweat");
        assert!(state.is_active());
        assert_eq!(ids(&state.apply(&c)), vec![3]);
        state.clear_category();
        state.set_query("");
        assert!(!state.is_active());
        assert_eq!(state.apply(&c).len(), 4);
    }
}
