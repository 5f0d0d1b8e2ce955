use crate::catalog::Criteria;

/// Items of `items` matching `criteria`, in their original order.
pub fn filter<'a, T, C>(items: &'a [T], criteria: &C) -> Vec<&'a T>
where
    C: Criteria<T>,
{
    items.iter().filter(|item| criteria.matches(item)).collect()
}

/// Outcome of filtering, as a section renders it.
///
/// An empty result is not an error; it is shown as a "no results" state.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a, T> {
    Items(Vec<&'a T>),
    NoResults,
}

impl<'a, T> Listing<'a, T> {
    pub fn from_filtered(items: Vec<&'a T>) -> Self {
        if items.is_empty() {
            Listing::NoResults
        } else {
            Listing::Items(items)
        }
    }

    pub fn items(&self) -> &[&'a T] {
        match self {
            Listing::Items(items) => items,
            Listing::NoResults => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoResults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogItem, CategoryFilter, CourseCriteria, Priced, ProductCriteria};
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        title: String,
        description: String,
        category: String,
        price: u32,
    }

    impl CatalogItem for Item {
        fn title(&self) -> &str {
            &self.title
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn category(&self) -> &str {
            &self.category
        }
    }

    impl Priced for Item {
        fn price(&self) -> u32 {
            self.price
        }
    }

    fn item(title: &str, category: &str, price: u32) -> Item {
        Item {
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            price,
        }
    }

    fn scenario_items() -> Vec<Item> {
        vec![item("A", "Consulting", 900), item("B", "Training", 1500)]
    }

    fn titles(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    // ==================== Scenario Tests ====================

    #[test]
    fn test_category_scenario() {
        let items = scenario_items();
        let criteria = ProductCriteria {
            search_text: String::new(),
            active_category: CategoryFilter::only("Training"),
            max_price: 2000,
        };
        assert_eq!(titles(&filter(&items, &criteria)), vec!["B"]);
    }

    #[test]
    fn test_search_scenario() {
        let items = scenario_items();
        let criteria = ProductCriteria {
            search_text: "a".to_string(),
            active_category: CategoryFilter::All,
            max_price: 2000,
        };
        assert_eq!(titles(&filter(&items, &criteria)), vec!["A"]);
    }

    #[test]
    fn test_price_scenario() {
        let items = scenario_items();
        let criteria = ProductCriteria {
            search_text: String::new(),
            active_category: CategoryFilter::All,
            max_price: 800,
        };
        assert!(filter(&items, &criteria).is_empty());

        let criteria = ProductCriteria {
            max_price: 900,
            ..criteria
        };
        assert_eq!(titles(&filter(&items, &criteria)), vec!["A"]);
    }

    #[test]
    fn test_all_returns_full_list_in_order() {
        let items = vec![
            item("C", "Training", 1000),
            item("A", "Consulting", 900),
            item("B", "Training", 1500),
        ];
        let result = filter(&items, &CourseCriteria::default());
        assert_eq!(titles(&result), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<Item> = Vec::new();
        assert!(filter(&items, &ProductCriteria::default()).is_empty());
    }

    // ==================== Listing Tests ====================

    #[test]
    fn test_listing_no_results() {
        let listing: Listing<'_, Item> = Listing::from_filtered(Vec::new());
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
        assert!(listing.items().is_empty());
    }

    #[test]
    fn test_listing_items() {
        let items = scenario_items();
        let listing = Listing::from_filtered(filter(&items, &CourseCriteria::default()));
        assert!(!listing.is_empty());
        assert_eq!(listing.len(), 2);
    }

    // ==================== Property Tests ====================

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            "[a-zA-Z ]{0,12}",
            "[a-zA-Z ]{0,20}",
            prop_oneof![Just("Consulting"), Just("Training"), Just("Audit")],
            500u32..2500,
        )
            .prop_map(|(title, description, category, price)| Item {
                title,
                description,
                category: category.to_string(),
                price,
            })
    }

    fn arb_criteria() -> impl Strategy<Value = ProductCriteria> {
        (
            "[a-zA-Z ]{0,3}",
            prop_oneof![
                Just(CategoryFilter::All),
                Just(CategoryFilter::only("Consulting")),
                Just(CategoryFilter::only("Training")),
            ],
            0u32..3000,
        )
            .prop_map(|(search_text, active_category, max_price)| ProductCriteria {
                search_text,
                active_category,
                max_price,
            })
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(items in prop::collection::vec(arb_item(), 0..20), criteria in arb_criteria()) {
            let once: Vec<Item> = filter(&items, &criteria).into_iter().cloned().collect();
            let twice: Vec<Item> = filter(&once, &criteria).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_preserves_order(items in prop::collection::vec(arb_item(), 0..20), criteria in arb_criteria()) {
            let positions: Vec<usize> = filter(&items, &criteria)
                .iter()
                .map(|found| items.iter().position(|i| std::ptr::eq(i, *found)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_search_ignores_case(items in prop::collection::vec(arb_item(), 0..20), query in "[a-zA-Z]{1,3}") {
            let upper = ProductCriteria { search_text: query.to_uppercase(), ..Default::default() };
            let lower = ProductCriteria { search_text: query.to_lowercase(), ..Default::default() };
            prop_assert_eq!(filter(&items, &upper), filter(&items, &lower));
        }

        #[test]
        fn prop_ceiling_is_inclusive(items in prop::collection::vec(arb_item(), 1..20)) {
            let max_price = items[0].price;
            let criteria = ProductCriteria { max_price, ..Default::default() };
            let result = filter(&items, &criteria);
            prop_assert!(result.iter().all(|i| i.price <= max_price));
            prop_assert_eq!(result.len(), items.iter().filter(|i| i.price <= max_price).count());
        }

        #[test]
        fn prop_all_category_keeps_everything(items in prop::collection::vec(arb_item(), 0..20)) {
            prop_assert_eq!(filter(&items, &CourseCriteria::default()).len(), items.len());
        }
    }
}
