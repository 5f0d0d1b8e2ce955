//! Localization store: the single source of truth for the active language.
//!
//! The store owns the active `LanguageCode`, persists it through a
//! `PreferenceStore`, mirrors it on the document root attributes and notifies
//! subscribers whenever it changes. Consumers receive the store (or the
//! content tree it hands out) explicitly; there is no ambient global.

use crate::i18n::{content_for, ContentTree, I18nError, LanguageCode, StoreMetrics, TextDirection};
use crate::storage::{PreferenceStore, STORAGE_KEY};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Presentation attributes set on the document root (`<html lang dir>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentAttributes {
    pub lang: LanguageCode,
    pub dir: TextDirection,
}

impl DocumentAttributes {
    pub fn for_language(language: LanguageCode) -> Self {
        Self {
            lang: language,
            dir: language.direction(),
        }
    }
}

/// Notification sent to subscribers after the active language changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChange {
    pub previous: LanguageCode,
    pub current: LanguageCode,
    pub direction: TextDirection,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&LanguageChange)>;

/// Holds the active language and hands out the matching content tree.
pub struct LocalizationStore<P: PreferenceStore> {
    preferences: P,
    active: LanguageCode,
    document: DocumentAttributes,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    metrics: StoreMetrics,
}

impl<P: PreferenceStore> LocalizationStore<P> {
    /// Create a store on the default language. Call `restore` once afterwards
    /// to pick up a persisted preference.
    pub fn new(preferences: P) -> Self {
        let active = LanguageCode::default();
        Self {
            preferences,
            active,
            document: DocumentAttributes::for_language(active),
            listeners: Vec::new(),
            next_subscription: 0,
            metrics: StoreMetrics::new(),
        }
    }

    /// Currently active language.
    pub fn active_language(&self) -> LanguageCode {
        self.active
    }

    /// Content tree of the active language.
    pub fn content(&self) -> &'static ContentTree {
        content_for(self.active)
    }

    /// Attributes currently applied to the document root.
    pub fn document(&self) -> DocumentAttributes {
        self.document
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// Switch the active language.
    ///
    /// Persists the choice, updates the document attributes and notifies
    /// subscribers. Selecting the language that is already active does
    /// nothing.
    ///
    /// # Returns
    /// `true` if the language changed.
    pub fn set_active_language(&mut self, language: LanguageCode) -> bool {
        if language == self.active {
            debug!("Language {} already active", language);
            return false;
        }

        let previous = self.active;
        self.active = language;
        self.apply();
        self.metrics.record_switch();

        info!("Language changed from {} to {}", previous, language);

        let change = LanguageChange {
            previous,
            current: language,
            direction: language.direction(),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }

        true
    }

    /// Switch the active language from a raw code (e.g. a `<select>` value).
    ///
    /// Unknown codes are rejected and the active language is left unchanged.
    pub fn set_active_language_code(&mut self, code: &str) -> Result<bool, I18nError> {
        let language = LanguageCode::from_code(code).inspect_err(|e| {
            self.metrics.record_rejected_code();
            warn!("Rejected language change: {}", e);
        })?;
        Ok(self.set_active_language(language))
    }

    /// Load the persisted language preference.
    ///
    /// A stored value is applied only if it is a supported language code.
    /// Missing, unreadable or unknown values keep the current language
    /// without reporting an error.
    pub fn restore(&mut self) -> LanguageCode {
        let stored = match self.preferences.get(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read language preference: {:#}", e);
                None
            }
        };

        let restored = stored.as_deref().and_then(|code| match LanguageCode::from_code(code) {
            Ok(language) => Some(language),
            Err(e) => {
                warn!("Ignoring stored language preference: {}", e);
                None
            }
        });

        match restored {
            Some(language) => {
                self.metrics.record_restore_applied();
                debug!("Restoring stored language {}", language);
                if !self.set_active_language(language) {
                    self.apply();
                }
            }
            None => {
                self.metrics.record_restore_defaulted();
                debug!("No usable language preference, keeping {}", self.active);
                self.apply();
            }
        }

        self.active
    }

    /// Register a listener called after every language change.
    pub fn subscribe(&mut self, listener: impl FnMut(&LanguageChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Persist the active language and mirror it on the document root.
    fn apply(&mut self) {
        if let Err(e) = self.preferences.set(STORAGE_KEY, self.active.code()) {
            self.metrics.record_persistence_failure();
            warn!("Failed to persist language preference: {:#}", e);
        }
        self.document = DocumentAttributes::for_language(self.active);
    }
}
