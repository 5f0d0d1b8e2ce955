//! Translated content, one module per language.
//!
//! Every language must list the same number of items in the same order;
//! `ContentValidator` enforces this in tests.

mod ar;
mod en;
mod es;
mod fr;

pub use ar::ARABIC_CONTENT;
pub use en::ENGLISH_CONTENT;
pub use es::SPANISH_CONTENT;
pub use fr::FRENCH_CONTENT;
