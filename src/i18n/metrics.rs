//! Localization store metrics.
//!
//! Counts language switches, preference restores and persistence failures
//! for one `LocalizationStore`.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by a localization store.
#[derive(Debug, Default)]
pub struct StoreMetrics {
    /// Number of effective language changes
    switches: AtomicUsize,

    /// Number of restores that applied a stored language
    restores_applied: AtomicUsize,

    /// Number of restores that kept the default (missing or invalid value)
    restores_defaulted: AtomicUsize,

    /// Number of writes to the preference store that failed
    persistence_failures: AtomicUsize,

    /// Number of language codes rejected by the string setter
    rejected_codes: AtomicUsize,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an effective language change.
    pub fn record_switch(&self) {
        self.switches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a restore that applied the stored language.
    pub fn record_restore_applied(&self) {
        self.restores_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a restore that fell back to the default language.
    pub fn record_restore_defaulted(&self) {
        self.restores_defaulted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed write to the preference store.
    pub fn record_persistence_failure(&self) {
        self.persistence_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected language code.
    pub fn record_rejected_code(&self) {
        self.rejected_codes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn switches(&self) -> usize {
        self.switches.load(Ordering::Relaxed)
    }

    pub fn restores_applied(&self) -> usize {
        self.restores_applied.load(Ordering::Relaxed)
    }

    pub fn restores_defaulted(&self) -> usize {
        self.restores_defaulted.load(Ordering::Relaxed)
    }

    pub fn persistence_failures(&self) -> usize {
        self.persistence_failures.load(Ordering::Relaxed)
    }

    pub fn rejected_codes(&self) -> usize {
        self.rejected_codes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let applied = self.restores_applied();
        let defaulted = self.restores_defaulted();
        let restores = applied + defaulted;
        let restore_hit_rate = if restores > 0 {
            (applied as f64 / restores as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            switches: self.switches(),
            restores_applied: applied,
            restores_defaulted: defaulted,
            restore_hit_rate,
            persistence_failures: self.persistence_failures(),
            rejected_codes: self.rejected_codes(),
        }
    }
}

/// Snapshot of the store counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub switches: usize,
    pub restores_applied: usize,
    pub restores_defaulted: usize,

    /// Share of restores that found a usable stored language (0-100)
    pub restore_hit_rate: f64,

    pub persistence_failures: usize,
    pub rejected_codes: usize,
}
