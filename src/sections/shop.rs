use crate::catalog::{
    category_options, filter, CategoryFilter, CategoryOption, Listing, ProductCriteria,
    SHOP_PRICE_RANGE,
};
use crate::i18n::{ContentTree, Product};
use crate::sections::LanguageChangePolicy;
use tracing::debug;

/// Shop section state: search text, selected category and price ceiling.
#[derive(Debug, Clone, Default)]
pub struct ShopSection {
    criteria: ProductCriteria,
}

/// What the Shop section shows for the current criteria.
#[derive(Debug, Clone)]
pub struct ShopView {
    pub title: &'static str,
    pub description: &'static str,
    pub search_placeholder: &'static str,
    pub options: Vec<CategoryOption>,
    pub active: CategoryFilter,
    /// e.g. "Max 2000 CHF"
    pub max_price_label: String,
    pub add_to_cart: &'static str,
    pub products: Listing<'static, Product>,
    /// Message to show when `products` is empty
    pub empty_state: &'static str,
}

impl ShopSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a given ceiling (snapped onto the slider).
    pub fn with_max_price(max_price: u32) -> Self {
        let mut section = Self::new();
        section.set_max_price(max_price);
        section
    }

    pub fn criteria(&self) -> &ProductCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.criteria.active_category = category;
    }

    /// Move the price slider. The value lands on the nearest slider step.
    pub fn set_max_price(&mut self, max_price: u32) {
        self.criteria.max_price = SHOP_PRICE_RANGE.snap(max_price);
    }

    /// Adjust the selection after the language switched from `previous` to `next`.
    ///
    /// Search text and price ceiling are language-neutral and kept.
    pub fn on_language_change(
        &mut self,
        previous: &ContentTree,
        next: &ContentTree,
        policy: LanguageChangePolicy,
    ) {
        let updated = policy.apply(
            &self.criteria.active_category,
            previous.shop.categories,
            next.shop.categories,
        );
        debug!(
            "Shop category {:?} -> {:?} ({:?})",
            self.criteria.active_category, updated, policy
        );
        self.criteria.active_category = updated;
    }

    pub fn view(&self, content: &'static ContentTree) -> ShopView {
        let shop = &content.shop;
        ShopView {
            title: shop.title,
            description: shop.description,
            search_placeholder: content.ui.search_placeholder,
            options: category_options(shop.categories, content.ui.all),
            active: self.criteria.active_category.clone(),
            max_price_label: format!("{} {} CHF", content.ui.max, self.criteria.max_price),
            add_to_cart: content.ui.add_to_cart,
            products: Listing::from_filtered(filter(shop.products, &self.criteria)),
            empty_state: content.ui.empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_MAX_PRICE;
    use crate::i18n::{content_for, LanguageCode};

    fn english() -> &'static ContentTree {
        content_for(LanguageCode::En)
    }

    fn titles(view: &ShopView) -> Vec<&'static str> {
        view.products.items().iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_default_view() {
        let section = ShopSection::new();
        assert_eq!(section.criteria().max_price, DEFAULT_MAX_PRICE);

        let view = section.view(english());
        assert_eq!(view.products.len(), 4);
        assert_eq!(view.max_price_label, "Max 2000 CHF");
        assert_eq!(view.options.len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut section = ShopSection::new();
        section.set_search("PREMIUM");
        let upper = titles(&section.view(english()));

        section.set_search("premium");
        let lower = titles(&section.view(english()));

        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["ISO 9001 Premium kit"]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut section = ShopSection::new();
        section.set_search("risk");
        assert_eq!(titles(&section.view(english())), vec!["ISO 27001 toolkit"]);
    }

    #[test]
    fn test_price_slider_snaps() {
        let mut section = ShopSection::new();
        section.set_max_price(1190);
        assert_eq!(section.criteria().max_price, 1200);

        let view = section.view(english());
        assert_eq!(view.max_price_label, "Max 1200 CHF");
        assert_eq!(
            titles(&view),
            vec!["ISO 9001 Premium kit", "Internal auditor e-learning"]
        );
    }

    #[test]
    fn test_slider_cannot_leave_range() {
        assert_eq!(ShopSection::with_max_price(100).criteria().max_price, 800);
        assert_eq!(ShopSection::with_max_price(5000).criteria().max_price, 2100);
    }

    #[test]
    fn test_no_results_state() {
        let mut section = ShopSection::new();
        section.set_search("nothing like this");

        let view = section.view(english());
        assert!(view.products.is_empty());
        assert_eq!(view.empty_state, "No items match your filters.");
    }

    #[test]
    fn test_language_change_keeps_search_and_price() {
        let mut section = ShopSection::new();
        section.set_search("ISO");
        section.set_max_price(1500);
        section.select_category(CategoryFilter::only("Documentation kits"));

        let spanish = content_for(LanguageCode::Es);
        section.on_language_change(english(), spanish, LanguageChangePolicy::Remap);

        assert_eq!(section.criteria().search_text, "ISO");
        assert_eq!(section.criteria().max_price, 1500);
        assert_eq!(
            section.criteria().active_category,
            CategoryFilter::only("Kits documentales")
        );
        assert_eq!(section.view(spanish).products.len(), 2);
    }

    #[test]
    fn test_keep_policy_empties_shop() {
        let mut section = ShopSection::new();
        section.select_category(CategoryFilter::only("Coaching"));

        let arabic = content_for(LanguageCode::Ar);
        section.on_language_change(english(), arabic, LanguageChangePolicy::Keep);

        let view = section.view(arabic);
        assert!(view.products.is_empty());
        assert_eq!(view.empty_state, "لا توجد عناصر مطابقة.");
    }
}
