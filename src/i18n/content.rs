//! Typed content tree shared by every language.
//!
//! Each language is a value of the same `ContentTree` type, so a field present
//! in one translation is present in all of them. List lengths are not encoded
//! in the type; `ContentValidator` checks them.

use crate::i18n::strings::{ARABIC_CONTENT, ENGLISH_CONTENT, FRENCH_CONTENT, SPANISH_CONTENT};
use crate::i18n::LanguageCode;

/// Placeholder replaced by the current year in `FooterContent::bottom`.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// A labelled link (header navigation, footer columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub subtitle: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub highlights: &'static [&'static str],
}

/// A headline figure; `value` is the final number the counter animates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorsContent {
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [Sector],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicesContent {
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [Service],
}

/// A training course listed in the Academy section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    /// Translated category label; must be one of `AcademyContent::filters`
    pub category: &'static str,
    pub badge: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    /// Average rating between 0.0 and 5.0
    pub rating: f64,
}

impl Course {
    /// Number of filled stars (rating rounded, within 0..=5).
    pub fn star_count(&self) -> u8 {
        self.rating.round().clamp(0.0, 5.0) as u8
    }

    /// Rating with one decimal, e.g. "4.8".
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcademyContent {
    pub title: &'static str,
    pub description: &'static str,
    /// Category labels, in button order
    pub filters: &'static [&'static str],
    pub courses: &'static [Course],
}

/// A product sold in the Shop section. Prices are whole Swiss francs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub title: &'static str,
    pub description: &'static str,
    /// Translated category label; must be one of `ShopContent::categories`
    pub category: &'static str,
    pub price: u32,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("CHF {}", self.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopContent {
    pub title: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub products: &'static [Product],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditFormFields {
    pub name: &'static str,
    pub company: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub standard: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditFormContent {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: AuditFormFields,
    /// Disabled first option of the standard selector
    pub placeholder: &'static str,
    pub submit: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditContent {
    pub title: &'static str,
    pub description: &'static str,
    pub standards: &'static [&'static str],
    pub form: AuditFormContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialsContent {
    pub title: &'static str,
    pub items: &'static [Testimonial],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartContent {
    pub title: &'static str,
    pub empty: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterContent {
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub cta: &'static str,
    pub success: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterContent {
    pub newsletter: NewsletterContent,
    pub columns: &'static [FooterColumn],
    /// Copyright line; contains `{year}`
    pub bottom: &'static str,
}

impl FooterContent {
    /// Copyright line with the year filled in.
    pub fn bottom_line(&self, year: i32) -> String {
        self.bottom.replace(YEAR_PLACEHOLDER, &year.to_string())
    }
}

/// Small interface labels that are not part of any section's copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLabels {
    /// Label of the "no category restriction" filter button
    pub all: &'static str,
    pub search_placeholder: &'static str,
    pub add_to_cart: &'static str,
    /// Shown when the shop filters leave nothing to display
    pub empty_state: &'static str,
    /// Prefix of the price ceiling label ("Max 2000 CHF")
    pub max: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
}

/// All translated text and data for one language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTree {
    pub language: LanguageCode,
    pub nav: &'static [NavLink],
    pub hero: HeroContent,
    pub stats: &'static [Stat],
    pub sectors: SectorsContent,
    pub services: ServicesContent,
    pub academy: AcademyContent,
    pub shop: ShopContent,
    pub audit: AuditContent,
    pub testimonials: TestimonialsContent,
    pub cart: CartContent,
    pub footer: FooterContent,
    pub ui: UiLabels,
}

/// Look up the content tree of a language.
pub fn content_for(language: LanguageCode) -> &'static ContentTree {
    match language {
        LanguageCode::Fr => &FRENCH_CONTENT,
        LanguageCode::En => &ENGLISH_CONTENT,
        LanguageCode::Es => &SPANISH_CONTENT,
        LanguageCode::Ar => &ARABIC_CONTENT,
    }
}
