//! # Catalog Search
//!
//! Pure filter over the catalog by restaurant name or cuisine.

use crate::types::Restaurant;

/// Restaurants whose name or cuisine contains `query`, ignoring case.
///
/// An empty query returns the whole catalog. Catalog order is preserved.
///
/// ## Example
/// ```rust
/// use tabletreat_core::catalog::{CatalogProvider, StaticCatalog};
/// use tabletreat_core::search::filter;
///
/// let catalog = StaticCatalog::sample();
/// let hits = filter("japanese", catalog.restaurants());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Sakura Garden");
/// ```
pub fn filter<'a>(query: &str, catalog: &'a [Restaurant]) -> Vec<&'a Restaurant> {
    if query.is_empty() {
        return catalog.iter().collect();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle) || r.cuisine.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn names<'a>(hits: &[&'a Restaurant]) -> Vec<&'a str> {
        hits.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = StaticCatalog::sample();
        let hits = filter("", catalog.restaurants());
        assert_eq!(
            names(&hits),
            ["The Rustic Plate", "Sakura Garden", "Spice Route"]
        );
    }

    #[test]
    fn test_matches_cuisine_case_insensitively() {
        let catalog = StaticCatalog::sample();
        assert_eq!(names(&filter("japanese", catalog.restaurants())), ["Sakura Garden"]);
        assert_eq!(names(&filter("INDIAN", catalog.restaurants())), ["Spice Route"]);
    }

    #[test]
    fn test_matches_name_substring() {
        let catalog = StaticCatalog::sample();
        assert_eq!(
            names(&filter("r", catalog.restaurants())),
            ["The Rustic Plate", "Sakura Garden", "Spice Route"]
        );
        assert_eq!(names(&filter("plate", catalog.restaurants())), ["The Rustic Plate"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = StaticCatalog::sample();
        assert!(filter("thai", catalog.restaurants()).is_empty());
    }
}
