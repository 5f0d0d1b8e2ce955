//! Language type: closed, validated language representation.
//!
//! This module provides the `LanguageCode` enum. Only the four languages the
//! site is translated into can be constructed, so an unsupported code can never
//! reach the store.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while resolving a language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The code is not one of the supported languages.
    #[error("Unknown language code: '{0}'")]
    UnsupportedLanguage(String),

    /// A configuration value could not be interpreted.
    #[error("Invalid configuration for {key}: '{value}'")]
    Configuration { key: &'static str, value: String },
}

/// Text direction applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// HTML `dir` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// French (default)
    #[default]
    Fr,
    /// English
    En,
    /// Spanish
    Es,
    /// Arabic, rendered right-to-left
    Ar,
}

impl LanguageCode {
    /// Every supported language, in language-switcher order.
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::Fr,
        LanguageCode::En,
        LanguageCode::Es,
        LanguageCode::Ar,
    ];

    /// Create a LanguageCode from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "fr", "ar")
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the code is one of the four supported languages
    /// * `Err(I18nError::UnsupportedLanguage)` otherwise
    ///
    /// Matching is exact: `"FR"` or `" fr"` are rejected.
    pub fn from_code(code: &str) -> Result<LanguageCode, I18nError> {
        match code {
            "fr" => Ok(LanguageCode::Fr),
            "en" => Ok(LanguageCode::En),
            "es" => Ok(LanguageCode::Es),
            "ar" => Ok(LanguageCode::Ar),
            other => Err(I18nError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::Fr => "fr",
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Ar => "ar",
        }
    }

    /// Text direction for this language: right-to-left for Arabic only.
    pub fn direction(&self) -> TextDirection {
        match self {
            LanguageCode::Ar => TextDirection::Rtl,
            LanguageCode::Fr | LanguageCode::En | LanguageCode::Es => TextDirection::Ltr,
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Short label shown on the language switcher (e.g., "FR").
    pub fn switcher_label(&self) -> &'static str {
        self.config().switcher_label
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::from_code(s)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_all_supported() {
        for code in ["fr", "en", "es", "ar"] {
            let language = LanguageCode::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = LanguageCode::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(LanguageCode::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(
            LanguageCode::from_code("FR"),
            Err(I18nError::UnsupportedLanguage("FR".to_string()))
        );
        assert!(LanguageCode::from_code(" fr").is_err());
    }

    #[test]
    fn test_from_str_matches_from_code() {
        let parsed: LanguageCode = "es".parse().expect("Should parse");
        assert_eq!(parsed, LanguageCode::Es);
        assert!("xx".parse::<LanguageCode>().is_err());
    }

    // ==================== Default & Direction Tests ====================

    #[test]
    fn test_default_is_french() {
        assert_eq!(LanguageCode::default(), LanguageCode::Fr);
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert_eq!(LanguageCode::Ar.direction(), TextDirection::Rtl);
        assert_eq!(LanguageCode::Fr.direction(), TextDirection::Ltr);
        assert_eq!(LanguageCode::En.direction(), TextDirection::Ltr);
        assert_eq!(LanguageCode::Es.direction(), TextDirection::Ltr);
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(LanguageCode::Ar.to_string(), "ar");
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        let json = serde_json::to_string(&LanguageCode::Es).expect("Should serialize");
        assert_eq!(json, "\"es\"");
        let back: LanguageCode = serde_json::from_str("\"ar\"").expect("Should deserialize");
        assert_eq!(back, LanguageCode::Ar);
    }

    #[test]
    fn test_all_order_matches_switcher() {
        let codes: Vec<_> = LanguageCode::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["fr", "en", "es", "ar"]);
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_native_name() {
        assert_eq!(LanguageCode::Fr.native_name(), "Français");
        assert_eq!(LanguageCode::Es.native_name(), "Español");
        assert_eq!(LanguageCode::Ar.name(), "Arabic");
    }

    #[test]
    fn test_switcher_label() {
        assert_eq!(LanguageCode::En.switcher_label(), "EN");
    }
}
