//! Per-section UI state.
//!
//! Each section owns its own criteria or form state and reads text from the
//! `ContentTree` it is handed; none of them holds the language.

mod academy;
mod cart;
mod forms;
mod shop;
mod testimonials;

pub use academy::{AcademySection, AcademyView};
pub use cart::Cart;
pub use forms::{AuditField, AuditForm, FormError, NewsletterForm};
pub use shop::{ShopSection, ShopView};
pub use testimonials::{SlideDirection, TestimonialCarousel, ROTATION_INTERVAL};

use crate::catalog::{remap_category, CategoryFilter};
use crate::i18n::I18nError;
use std::str::FromStr;

/// What a section does with its selected category when the language changes.
///
/// Category labels are translated strings, so a selection kept as-is stops
/// matching anything in the new language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageChangePolicy {
    /// Keep the old label; the filtered list becomes empty
    Keep,
    /// Go back to "all"
    ResetToAll,
    /// Translate the selection through its position in the category list
    #[default]
    Remap,
}

impl LanguageChangePolicy {
    /// Apply the policy to a selection.
    pub fn apply(
        &self,
        selection: &CategoryFilter,
        previous: &[&'static str],
        next: &[&'static str],
    ) -> CategoryFilter {
        match self {
            LanguageChangePolicy::Keep => selection.clone(),
            LanguageChangePolicy::ResetToAll => CategoryFilter::All,
            LanguageChangePolicy::Remap => remap_category(selection, previous, next),
        }
    }
}

impl FromStr for LanguageChangePolicy {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(LanguageChangePolicy::Keep),
            "reset" => Ok(LanguageChangePolicy::ResetToAll),
            "remap" => Ok(LanguageChangePolicy::Remap),
            _ => Err(I18nError::Configuration {
                key: "AJ_CATEGORY_POLICY",
                value: s.to_string(),
            }),
        }
    }
}
