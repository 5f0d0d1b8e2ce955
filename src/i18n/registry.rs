//! Language registry: Single source of truth for language metadata.
//!
//! The set of languages is fixed by `LanguageCode`; this registry holds the
//! metadata shown around them (names, switcher labels, direction). It uses a
//! `OnceLock` singleton, initialized on first access and immutable afterwards.

use crate::i18n::{LanguageCode, TextDirection};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: LanguageCode,

    /// ISO 639-1 language code (e.g., "fr", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "French", "Arabic")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français", "العربية")
    pub native_name: &'static str,

    /// Label on the header language switcher (e.g., "FR")
    pub switcher_label: &'static str,

    /// Text direction applied to the document root
    pub direction: TextDirection,

    /// Whether this is the language used when no preference is stored
    /// (only one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration of a language.
    ///
    /// # Panics
    /// Panics if a `LanguageCode` variant has no registry entry. This
    /// indicates a configuration error in `default_languages`.
    pub fn config_for(&self, language: LanguageCode) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.language == language)
            .unwrap_or_else(|| panic!("Language '{}' missing from registry", language.code()))
    }

    /// Get all languages, in switcher order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language configurations.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: LanguageCode::Fr,
            code: "fr",
            name: "French",
            native_name: "Français",
            switcher_label: "FR",
            direction: TextDirection::Ltr,
            is_default: true,
        },
        LanguageConfig {
            language: LanguageCode::En,
            code: "en",
            name: "English",
            native_name: "English",
            switcher_label: "EN",
            direction: TextDirection::Ltr,
            is_default: false,
        },
        LanguageConfig {
            language: LanguageCode::Es,
            code: "es",
            name: "Spanish",
            native_name: "Español",
            switcher_label: "ES",
            direction: TextDirection::Ltr,
            is_default: false,
        },
        LanguageConfig {
            language: LanguageCode::Ar,
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            switcher_label: "AR",
            direction: TextDirection::Rtl,
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_arabic() {
        let config = LanguageRegistry::get()
            .get_by_code("ar")
            .expect("Arabic should be registered");

        assert_eq!(config.language, LanguageCode::Ar);
        assert_eq!(config.switcher_label, "AR");
        assert_eq!(config.direction, TextDirection::Rtl);
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("de").is_none());
    }

    #[test]
    fn test_every_language_code_is_registered() {
        let registry = LanguageRegistry::get();
        for language in LanguageCode::ALL {
            let config = registry.config_for(language);
            assert_eq!(config.code, language.code());
            assert_eq!(config.direction, language.direction());
        }
    }

    #[test]
    fn test_list_all_in_switcher_order() {
        let labels: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.switcher_label)
            .collect();
        assert_eq!(labels, vec!["FR", "EN", "ES", "AR"]);
    }

    #[test]
    fn test_default_language_is_french() {
        let default = LanguageRegistry::get().default_language();
        assert_eq!(default.language, LanguageCode::Fr);
        assert_eq!(default.language, LanguageCode::default());
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("es"));
        assert!(!registry.is_supported("ES"));
        assert!(!registry.is_supported(""));
    }
}
