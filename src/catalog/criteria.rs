//! Filter criteria owned by the Academy and Shop sections.

use crate::catalog::{CategoryFilter, DEFAULT_MAX_PRICE};
use crate::i18n::{Course, Product};

/// Anything listed in a filterable catalog.
pub trait CatalogItem {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    /// Translated category label
    fn category(&self) -> &str;
}

/// Catalog items with a price in whole CHF.
pub trait Priced {
    fn price(&self) -> u32;
}

/// A predicate over catalog items.
pub trait Criteria<T> {
    fn matches(&self, item: &T) -> bool;
}

impl CatalogItem for Course {
    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> &str {
        self.category
    }
}

impl CatalogItem for Product {
    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> &str {
        self.category
    }
}

impl Priced for Product {
    fn price(&self) -> u32 {
        self.price
    }
}

/// Free-text match on title or description, ignoring case.
///
/// A query that is blank once trimmed matches everything. Otherwise the query
/// is lowercased as typed (surrounding spaces included) and must appear in
/// the lowercased title or description.
pub fn matches_search<T: CatalogItem + ?Sized>(item: &T, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    item.title().to_lowercase().contains(&needle)
        || item.description().to_lowercase().contains(&needle)
}

/// Academy criteria: category only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseCriteria {
    pub active_category: CategoryFilter,
}

impl<T: CatalogItem> Criteria<T> for CourseCriteria {
    fn matches(&self, item: &T) -> bool {
        self.active_category.matches(item.category())
    }
}

/// Shop criteria: search text, category and inclusive price ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCriteria {
    pub search_text: String,
    pub active_category: CategoryFilter,
    /// Inclusive ceiling in CHF, compared as given
    pub max_price: u32,
}

impl Default for ProductCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            active_category: CategoryFilter::All,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl<T: CatalogItem + Priced> Criteria<T> for ProductCriteria {
    fn matches(&self, item: &T) -> bool {
        self.active_category.matches(item.category())
            && matches_search(item, &self.search_text)
            && item.price() <= self.max_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &'static str, description: &'static str, price: u32) -> Product {
        Product {
            title,
            description,
            category: "Consulting",
            price,
        }
    }

    // ==================== Search Tests ====================

    #[test]
    fn test_blank_search_matches_everything() {
        let item = product("A", "", 900);
        assert!(matches_search(&item, ""));
        assert!(matches_search(&item, "   "));
        assert!(matches_search(&item, "\t\n"));
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let item = product("ISO 9001 Premium kit", "Manual", 1200);
        assert!(matches_search(&item, "premium"));
        assert!(matches_search(&item, "PREMIUM"));
        assert!(matches_search(&item, "PrEmIuM"));
    }

    #[test]
    fn test_search_description() {
        let item = product("Kit", "Risk assessment templates", 1200);
        assert!(matches_search(&item, "RISK"));
        assert!(!matches_search(&item, "audit"));
    }

    #[test]
    fn test_search_accented_text() {
        let item = product("Boîte à outils", "Politiques types", 1490);
        assert!(matches_search(&item, "BOÎTE"));
    }

    #[test]
    fn test_search_uses_query_as_typed() {
        let item = product("Premium", "", 1200);
        assert!(!matches_search(&item, " premium"));
        assert!(matches_search(&item, "premium"));
    }

    // ==================== Criteria Tests ====================

    #[test]
    fn test_course_criteria_default_is_all() {
        assert_eq!(CourseCriteria::default().active_category, CategoryFilter::All);
    }

    #[test]
    fn test_product_criteria_default() {
        let criteria = ProductCriteria::default();
        assert!(criteria.search_text.is_empty());
        assert!(criteria.active_category.is_all());
        assert_eq!(criteria.max_price, 2000);
    }

    #[test]
    fn test_product_criteria_price_is_inclusive() {
        let criteria = ProductCriteria {
            max_price: 1200,
            ..Default::default()
        };
        assert!(criteria.matches(&product("A", "", 1200)));
        assert!(!criteria.matches(&product("A", "", 1201)));
    }

    #[test]
    fn test_product_criteria_out_of_range_ceiling() {
        let zero = ProductCriteria {
            max_price: 0,
            ..Default::default()
        };
        let huge = ProductCriteria {
            max_price: u32::MAX,
            ..Default::default()
        };
        assert!(!zero.matches(&product("A", "", 1)));
        assert!(huge.matches(&product("A", "", 999_999)));
    }

    #[test]
    fn test_product_criteria_all_dimensions_required() {
        let criteria = ProductCriteria {
            search_text: "kit".to_string(),
            active_category: CategoryFilter::only("Consulting"),
            max_price: 1500,
        };
        assert!(criteria.matches(&product("Kit", "", 1500)));
        assert!(!criteria.matches(&product("Pack", "", 1500)));
        assert!(!criteria.matches(&product("Kit", "", 1600)));

        let mut other = product("Kit", "", 1000);
        other.category = "Training";
        assert!(!criteria.matches(&other));
    }
}
