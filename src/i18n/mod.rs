//! Internationalization (i18n) module for the four site languages.
//!
//! # Architecture
//!
//! - `language`: Closed `LanguageCode` enum; unsupported codes cannot be represented
//! - `registry`: Language metadata (names, switcher labels, text direction)
//! - `content`: The typed `ContentTree` every language fills in
//! - `strings`: The translated content trees themselves
//! - `validator`: Parity checks between content trees
//! - `metrics`: Counters for the localization store
//!
//! # Example
//!
//! ```rust,ignore
//! use aigle_jurassien::i18n::{content_for, LanguageCode};
//!
//! let spanish = LanguageCode::from_code("es")?;
//! let courses = content_for(spanish).academy.courses;
//! ```

mod content;
mod language;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use content::{
    content_for, AcademyContent, AuditContent, AuditFormContent, AuditFormFields, CartContent,
    ContentTree, Course, FooterColumn, FooterContent, HeroContent, NavLink, NewsletterContent,
    Product, Sector, SectorsContent, Service, ServicesContent, ShopContent, Stat, Testimonial,
    TestimonialsContent, UiLabels, YEAR_PLACEHOLDER,
};
pub use language::{I18nError, LanguageCode, TextDirection};
pub use metrics::{MetricsReport, StoreMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{ContentValidator, ValidationReport};
