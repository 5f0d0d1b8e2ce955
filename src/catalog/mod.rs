//! Catalog filter engine shared by the Academy (courses) and Shop (products)
//! sections.
//!
//! Filtering is a pure recomputation over the active language's item list:
//! no caching, no internal state beyond the criteria passed in.
//!
//! # Example
//!
//! ```rust,ignore
//! use aigle_jurassien::catalog::{filter, CategoryFilter, ProductCriteria};
//!
//! let criteria = ProductCriteria {
//!     search_text: "iso".to_string(),
//!     active_category: CategoryFilter::All,
//!     max_price: 1500,
//! };
//! let visible = filter(content.shop.products, &criteria);
//! ```

mod category;
mod criteria;
mod filter;
mod price;

pub use category::{
    category_options, list_categories, remap_category, CategoryFilter, CategoryId, CategoryOption,
    ALL_CATEGORIES,
};
pub use criteria::{matches_search, CatalogItem, CourseCriteria, Criteria, Priced, ProductCriteria};
pub use filter::{filter, Listing};
pub use price::{PriceRange, DEFAULT_MAX_PRICE, SHOP_PRICE_RANGE};
