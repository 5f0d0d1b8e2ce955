//! Category selection and the category button list.

use crate::catalog::CatalogItem;

/// Value of the "no category restriction" option.
pub const ALL_CATEGORIES: &str = "__all";

/// Selected category of a section.
///
/// Categories are matched by their translated label, so a selection made in
/// one language matches nothing once the language changes (see
/// `remap_category`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No restriction
    #[default]
    All,
    /// Only items whose category label is exactly this string
    Only(String),
}

impl CategoryFilter {
    /// Parse an option value; `"__all"` is the "all" option.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn only(label: impl Into<String>) -> Self {
        CategoryFilter::Only(label.into())
    }

    /// Option value (`"__all"` or the category label).
    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(label) => label,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Exact string match; `All` matches every category.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

/// One category button: the value it selects and the text it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: CategoryFilter,
    pub label: &'static str,
}

/// Distinct categories of `items` in first-appearance order, after a
/// leading `All`.
pub fn list_categories<T: CatalogItem>(items: &[T]) -> Vec<CategoryFilter> {
    let mut categories = vec![CategoryFilter::All];
    for item in items {
        let seen = categories
            .iter()
            .any(|c| matches!(c, CategoryFilter::Only(label) if label == item.category()));
        if !seen {
            categories.push(CategoryFilter::only(item.category()));
        }
    }
    categories
}

/// Buttons for a section: the localized "all" label first, then every
/// declared category.
pub fn category_options(declared: &[&'static str], all_label: &'static str) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        value: CategoryFilter::All,
        label: all_label,
    })
    .chain(declared.iter().map(|label| CategoryOption {
        value: CategoryFilter::only(*label),
        label: *label,
    }))
    .collect()
}

/// Language-independent identity of a category: its position in the
/// declared category list, which is the same in every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub usize);

impl CategoryId {
    /// Identify `label` within a language's declared categories.
    pub fn of(declared: &[&str], label: &str) -> Option<CategoryId> {
        declared.iter().position(|c| *c == label).map(CategoryId)
    }

    /// Label of this category in a language's declared categories.
    pub fn label_in(&self, declared: &[&'static str]) -> Option<&'static str> {
        declared.get(self.0).copied()
    }
}

/// Translate a selection from one language's category labels to another's.
///
/// A label that cannot be found on either side falls back to `All`.
pub fn remap_category(
    selection: &CategoryFilter,
    from: &[&str],
    to: &[&'static str],
) -> CategoryFilter {
    match selection {
        CategoryFilter::All => CategoryFilter::All,
        CategoryFilter::Only(label) => CategoryId::of(from, label)
            .and_then(|id| id.label_in(to))
            .map(CategoryFilter::only)
            .unwrap_or_default(),
    }
}
